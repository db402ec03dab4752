use color_eyre::eyre::Result;
use ratatui::prelude::*;

use crate::{
  action::Action,
  pages::Page,
  panes::{profile::ProfilePane, Pane},
  state::State,
};

/// Nested view: the profile of the account routed under `/customers/{domain}`.
#[derive(Default)]
pub struct Account {
  panes: Vec<Box<dyn Pane>>,
}

impl Account {
  pub fn new() -> Result<Self> {
    let focused_border_style = Style::default().fg(Color::LightGreen);

    Ok(Self { panes: vec![Box::new(ProfilePane::new(true, focused_border_style))] })
  }
}

impl Page for Account {
  fn init(&mut self, state: &State) -> Result<()> {
    for pane in self.panes.iter_mut() {
      pane.init(state)?;
    }
    Ok(())
  }

  fn focus(&mut self) -> Result<()> {
    for pane in self.panes.iter_mut() {
      pane.focus()?;
    }
    Ok(())
  }

  fn unfocus(&mut self) -> Result<()> {
    for pane in self.panes.iter_mut() {
      pane.unfocus()?;
    }
    Ok(())
  }

  fn update(&mut self, action: Action, state: &mut State) -> Result<Option<Action>> {
    if let Some(pane) = self.panes.first_mut() {
      return pane.update(action, state);
    }
    Ok(None)
  }

  fn draw(&mut self, frame: &mut Frame<'_>, area: Rect, state: &State) -> Result<()> {
    self.panes[0].draw(frame, area, state)?;
    Ok(())
  }
}
