use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
  prelude::*,
  widgets::*,
};

use crate::{
  action::Action,
  panes::Pane,
  state::{InputMode, State},
  tui::{EventResponse, Frame},
};

pub struct AccountsPane {
  focused: bool,
  focused_border_style: Style,
}

impl AccountsPane {
  pub fn new(focused: bool, focused_border_style: Style) -> Self {
    Self { focused, focused_border_style }
  }

  fn border_style(&self) -> Style {
    match self.focused {
      true => self.focused_border_style,
      false => Style::default(),
    }
  }

  fn border_type(&self) -> BorderType {
    match self.focused {
      true => BorderType::Thick,
      false => BorderType::Plain,
    }
  }

  fn status_color(status: Option<&str>) -> Color {
    match status {
      Some("active") => Color::LightGreen,
      Some("pending") => Color::LightYellow,
      Some("churned") => Color::LightRed,
      _ => Color::Gray,
    }
  }
}

impl Pane for AccountsPane {
  fn focus(&mut self) -> Result<()> {
    self.focused = true;
    Ok(())
  }

  fn unfocus(&mut self) -> Result<()> {
    self.focused = false;
    Ok(())
  }

  fn height_constraint(&self) -> Constraint {
    Constraint::Fill(1)
  }

  fn handle_key_events(&mut self, key: KeyEvent, state: &mut State) -> Result<Option<EventResponse<Action>>> {
    if state.input_mode != InputMode::Normal {
      return Ok(None);
    }
    let response = match key.code {
      KeyCode::Char('/') => {
        EventResponse::Stop(Action::FocusFooter(String::from("/"), Some(state.active_filter.clone())))
      },
      _ => return Ok(None),
    };
    Ok(Some(response))
  }

  fn update(&mut self, action: Action, state: &mut State) -> Result<Option<Action>> {
    match action {
      Action::Down => {
        let accounts_len = state.accounts_len();
        if accounts_len > 0 {
          state.active_account_index = state.active_account_index.saturating_add(1) % accounts_len;
        }
        return Ok(Some(Action::Update));
      },
      Action::Up => {
        let accounts_len = state.accounts_len();
        if accounts_len > 0 {
          state.active_account_index = state.active_account_index.saturating_add(accounts_len - 1) % accounts_len;
        }
        return Ok(Some(Action::Update));
      },
      Action::Submit => {
        if let Some(account) = state.active_account() {
          return Ok(Some(Action::Navigate(format!("/customers/{}", account.domain))));
        }
      },
      Action::FooterResult(cmd, Some(args)) if cmd.eq("/") => {
        state.active_filter = args;
        state.active_account_index = 0;
        return Ok(Some(Action::Update));
      },
      Action::Update => {
        let accounts_len = state.accounts_len();
        if accounts_len > 0 && state.active_account_index >= accounts_len {
          state.active_account_index = accounts_len - 1;
        }
      },
      _ => {},
    }

    Ok(None)
  }

  fn draw(&mut self, frame: &mut Frame<'_>, area: Rect, state: &State) -> Result<()> {
    let items = state.filtered_accounts().map(|account| {
      Line::from(vec![
        Span::styled(format!(" {:28}", account.domain), Style::default().fg(Color::LightCyan)),
        Span::styled(account.name.clone().unwrap_or_default(), Style::default().fg(Color::White)),
        Span::styled(
          account.status.as_deref().map(|status| format!("  {status}")).unwrap_or_default(),
          Style::default().fg(Self::status_color(account.status.as_deref())),
        ),
      ])
    });

    let list = List::new(items)
      .block(Block::default().borders(Borders::ALL))
      .highlight_symbol(symbols::scrollbar::HORIZONTAL.end)
      .highlight_spacing(HighlightSpacing::Always)
      .highlight_style(Style::default().add_modifier(Modifier::BOLD));
    let mut list_state = ListState::default().with_selected(Some(state.active_account_index));

    frame.render_stateful_widget(list, area, &mut list_state);
    let filter_tag = match state.active_filter.is_empty() {
      true => String::from("[ALL]"),
      false => format!("[{}]", state.active_filter),
    };
    frame.render_widget(
      Block::default()
        .title("Accounts")
        .borders(Borders::ALL)
        .border_style(self.border_style())
        .border_type(self.border_type())
        .title_bottom(
          Line::from(format!("{} of {}", state.active_account_index.saturating_add(1), state.accounts_len()))
            .right_aligned(),
        )
        .title(Line::styled(filter_tag, Style::default().add_modifier(Modifier::ITALIC)).right_aligned()),
      area,
    );
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use super::*;
  use crate::directory::EnterpriseAccount;

  fn state_with(domains: &[&str]) -> State {
    State {
      accounts: domains
        .iter()
        .map(|domain| EnterpriseAccount { domain: String::from(*domain), ..Default::default() })
        .collect(),
      ..Default::default()
    }
  }

  #[test]
  fn selection_wraps_around_the_filtered_list() {
    let mut pane = AccountsPane::new(true, Style::default());
    let mut state = state_with(&["acme.com", "globex.net"]);

    pane.update(Action::Down, &mut state).unwrap();
    assert_eq!(state.active_account_index, 1);
    pane.update(Action::Down, &mut state).unwrap();
    assert_eq!(state.active_account_index, 0);
    pane.update(Action::Up, &mut state).unwrap();
    assert_eq!(state.active_account_index, 1);
  }

  #[test]
  fn submit_navigates_to_the_selected_account() {
    let mut pane = AccountsPane::new(true, Style::default());
    let mut state = state_with(&["acme.com", "globex.net"]);
    state.active_account_index = 1;

    let action = pane.update(Action::Submit, &mut state).unwrap();
    assert_eq!(action, Some(Action::Navigate(String::from("/customers/globex.net"))));
  }

  #[test]
  fn footer_result_applies_the_filter_and_resets_selection() {
    let mut pane = AccountsPane::new(true, Style::default());
    let mut state = state_with(&["acme.com", "globex.net"]);
    state.active_account_index = 1;

    pane.update(Action::FooterResult(String::from("/"), Some(String::from("acme"))), &mut state).unwrap();
    assert_eq!(state.active_filter, "acme");
    assert_eq!(state.active_account_index, 0);
    assert_eq!(state.accounts_len(), 1);
  }

  #[test]
  fn update_clamps_a_stale_selection() {
    let mut pane = AccountsPane::new(true, Style::default());
    let mut state = state_with(&["acme.com", "globex.net"]);
    state.active_account_index = 5;

    pane.update(Action::Update, &mut state).unwrap();
    assert_eq!(state.active_account_index, 1);
  }
}
