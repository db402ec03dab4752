use color_eyre::eyre::Result;
use ratatui::{
  prelude::*,
  widgets::*,
};

use crate::{panes::Pane, state::State, tui::Frame};

/// Account profile card. On the root view it previews the selected account;
/// on a nested view it shows the routed account.
pub struct ProfilePane {
  focused: bool,
  focused_border_style: Style,
}

impl ProfilePane {
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

  fn field<'a>(label: &'a str, value: String, value_style: Style) -> Line<'a> {
    Line::from(vec![Span::styled(format!(" {label:10}"), Style::default().fg(Color::DarkGray)), Span::styled(value, value_style)])
  }
}

impl Pane for ProfilePane {
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

  fn draw(&mut self, frame: &mut Frame<'_>, area: Rect, state: &State) -> Result<()> {
    let account = match state.route.nested() {
      Some(domain) => state.account(domain),
      None => state.active_account(),
    };

    let mut lines = vec![Line::default()];
    match account {
      Some(account) => {
        let name = state
          .account_name(account.domain.as_str())
          .map(String::from)
          .or_else(|| account.name.clone())
          .unwrap_or_default();
        lines.push(Self::field("Name", name, Style::default().fg(Color::White).add_modifier(Modifier::BOLD)));
        lines.push(Self::field("Domain", account.domain.clone(), Style::default().fg(Color::LightCyan)));
        if let Some(status) = &account.status {
          lines.push(Self::field("Status", status.clone(), Style::default().fg(Color::LightGreen)));
        }
        if let Some(users_count) = account.users_count {
          lines.push(Self::field("Users", users_count.to_string(), Style::default().fg(Color::White)));
        }
      },
      None => {
        // Routed domain missing from the listing; the header lookup may
        // still resolve a name for it.
        if let Some(domain) = state.route.nested() {
          let name = state.account_name(domain).unwrap_or_default();
          lines.push(Self::field("Name", name.to_string(), Style::default().fg(Color::White)));
          lines.push(Self::field("Domain", domain.to_string(), Style::default().fg(Color::LightCyan)));
        }
      },
    }

    frame.render_widget(
      Paragraph::new(lines).block(
        Block::default()
          .title("Account")
          .borders(Borders::ALL)
          .border_style(self.border_style())
          .border_type(self.border_type()),
      ),
      area,
    );
    Ok(())
  }
}
