use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use tokio::sync::mpsc::UnboundedSender;

use crate::{
  action::Action,
  config::Config,
  pages::Page,
  panes::{accounts::AccountsPane, profile::ProfilePane, Pane},
  state::{InputMode, State},
  tui::EventResponse,
};

/// Root view: the filterable account listing with a preview card.
#[derive(Default)]
pub struct Home {
  command_tx: Option<UnboundedSender<Action>>,
  config: Config,
  panes: Vec<Box<dyn Pane>>,
  focused_pane_index: usize,
}

impl Home {
  pub fn new() -> Result<Self> {
    let focused_border_style = Style::default().fg(Color::LightGreen);

    Ok(Self {
      command_tx: None,
      config: Config::default(),
      panes: vec![
        Box::new(AccountsPane::new(true, focused_border_style)),
        Box::new(ProfilePane::new(false, focused_border_style)),
      ],
      focused_pane_index: 0,
    })
  }
}

impl Page for Home {
  fn register_action_handler(&mut self, tx: UnboundedSender<Action>) -> Result<()> {
    self.command_tx = Some(tx);
    Ok(())
  }

  fn register_config_handler(&mut self, config: Config) -> Result<()> {
    self.config = config;
    Ok(())
  }

  fn init(&mut self, state: &State) -> Result<()> {
    for pane in self.panes.iter_mut() {
      pane.init(state)?;
    }
    Ok(())
  }

  fn focus(&mut self) -> Result<()> {
    if let Some(pane) = self.panes.get_mut(self.focused_pane_index) {
      pane.focus()?;
    }
    Ok(())
  }

  fn unfocus(&mut self) -> Result<()> {
    if let Some(pane) = self.panes.get_mut(self.focused_pane_index) {
      pane.unfocus()?;
    }
    Ok(())
  }

  fn handle_key_events(&mut self, key: KeyEvent, state: &mut State) -> Result<Option<EventResponse<Action>>> {
    if state.input_mode != InputMode::Normal {
      return Ok(None);
    }
    let response = match key.code {
      KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => EventResponse::Stop(Action::FocusNext),
      KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => EventResponse::Stop(Action::FocusPrev),
      KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => EventResponse::Stop(Action::Down),
      KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => EventResponse::Stop(Action::Up),
      KeyCode::Enter => EventResponse::Stop(Action::Submit),
      _ => {
        if let Some(pane) = self.panes.get_mut(self.focused_pane_index) {
          return pane.handle_key_events(key, state);
        }
        return Ok(None);
      },
    };
    Ok(Some(response))
  }

  fn update(&mut self, action: Action, state: &mut State) -> Result<Option<Action>> {
    match action {
      Action::Tick => {},
      Action::FocusNext => {
        let next_index = self.focused_pane_index.saturating_add(1) % self.panes.len();
        if let Some(pane) = self.panes.get_mut(self.focused_pane_index) {
          pane.unfocus()?;
        }
        self.focused_pane_index = next_index;
        if let Some(pane) = self.panes.get_mut(self.focused_pane_index) {
          pane.focus()?;
        }
      },
      Action::FocusPrev => {
        let prev_index = self.focused_pane_index.saturating_add(self.panes.len() - 1) % self.panes.len();
        if let Some(pane) = self.panes.get_mut(self.focused_pane_index) {
          pane.unfocus()?;
        }
        self.focused_pane_index = prev_index;
        if let Some(pane) = self.panes.get_mut(self.focused_pane_index) {
          pane.focus()?;
        }
      },
      Action::Update | Action::FooterResult(..) => {
        for pane in self.panes.iter_mut() {
          if let Some(action) = pane.update(action.clone(), state)? {
            if let Some(tx) = &self.command_tx {
              tx.send(action).ok();
            }
          }
        }
      },
      _ => {
        if let Some(pane) = self.panes.get_mut(self.focused_pane_index) {
          return pane.update(action, state);
        }
      },
    }
    Ok(None)
  }

  fn draw(&mut self, frame: &mut Frame<'_>, area: Rect, state: &State) -> Result<()> {
    let outer_layout = Layout::default()
      .direction(Direction::Horizontal)
      .constraints(vec![Constraint::Min(48), Constraint::Percentage(100)])
      .split(area);

    self.panes[0].draw(frame, outer_layout[0], state)?;
    self.panes[1].draw(frame, outer_layout[1], state)?;
    Ok(())
  }
}
