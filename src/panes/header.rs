use color_eyre::eyre::Result;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::prelude::*;
use tokio::sync::mpsc::UnboundedSender;

use crate::{
  action::Action,
  directory::Lookup,
  panes::Pane,
  route::Breadcrumb,
  state::State,
  tui::{EventResponse, Frame},
};

const ROOT_LABEL: &str = "Customers";
const BACK_ARROW: &str = "←";
const SEPARATOR: &str = "›";

/// Breadcrumb header. Shows the fixed root label and, on nested views, a
/// separator followed by the routed account's display name. The name is
/// resolved through the directory lookup channel and read back from state on
/// every draw; until it resolves the slot stays empty.
pub struct HeaderPane {
  lookup_tx: UnboundedSender<Lookup>,
  label_area: Rect,
}

impl HeaderPane {
  pub fn new(lookup_tx: UnboundedSender<Lookup>) -> Self {
    Self { lookup_tx, label_area: Rect::default() }
  }

  /// Queue a name lookup for the routed domain unless the cache already has
  /// an entry for it. Dedup against the cache keeps re-renders from
  /// re-fetching; stale resolutions are keyed by domain and land harmlessly.
  fn request_account_name(&self, state: &State) {
    if let Some(domain) = state.route.nested() {
      if !state.account_names.contains_key(domain) {
        let _ = self.lookup_tx.send(Lookup { domain: domain.to_string() });
      }
    }
  }
}

impl Pane for HeaderPane {
  fn init(&mut self, state: &State) -> Result<()> {
    self.request_account_name(state);
    Ok(())
  }

  fn height_constraint(&self) -> Constraint {
    Constraint::Max(1)
  }

  fn update(&mut self, action: Action, state: &mut State) -> Result<Option<Action>> {
    match action {
      Action::Navigate(_) | Action::Update => self.request_account_name(state),
      _ => {},
    }
    Ok(None)
  }

  fn handle_mouse_events(&mut self, mouse: MouseEvent, state: &mut State) -> Result<Option<EventResponse<Action>>> {
    if let MouseEventKind::Up(MouseButton::Left) = mouse.kind {
      if state.route.is_nested() && self.label_area.contains(Position::new(mouse.column, mouse.row)) {
        return Ok(Some(EventResponse::Stop(Action::Navigate(state.route.parent()))));
      }
    }
    Ok(None)
  }

  fn draw(&mut self, frame: &mut Frame<'_>, area: Rect, state: &State) -> Result<()> {
    let crumb = Breadcrumb::of(&state.route);

    // The back affordance always renders; on the root view it is suppressed
    // by styling, not removed from the line.
    let arrow_style = match crumb.nested {
      true => Style::default().fg(Color::LightBlue),
      false => Style::default().add_modifier(Modifier::HIDDEN),
    };
    let label_style = match crumb.nested {
      true => Style::default().fg(Color::LightBlue).add_modifier(Modifier::BOLD),
      false => Style::default().add_modifier(Modifier::BOLD),
    };

    let mut spans = vec![Span::styled(format!("{BACK_ARROW} "), arrow_style), Span::styled(ROOT_LABEL, label_style)];
    if crumb.nested {
      spans.push(Span::styled(format!(" {SEPARATOR} "), Style::default().fg(Color::DarkGray)));
      let name = crumb.domain.as_deref().and_then(|domain| state.account_name(domain)).unwrap_or_default();
      spans.push(Span::styled(name.to_string(), Style::default().fg(Color::White)));
    }
    frame.render_widget(Line::from(spans), area);

    frame.render_widget(
      Line::from(vec![
        Span::styled(format!("[ {} ", symbols::DOT), Style::default().fg(Color::Blue)),
        Span::styled(state.directory_url.clone(), Style::default().fg(Color::LightCyan)),
        Span::styled(" ]", Style::default().fg(Color::Blue)),
      ])
      .right_aligned(),
      area,
    );

    self.label_area =
      Rect { x: area.x, y: area.y, width: (2 + ROOT_LABEL.len() as u16).min(area.width), height: area.height.min(1) };

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use std::collections::HashMap;

  use crossterm::event::KeyModifiers;
  use pretty_assertions::assert_eq;
  use ratatui::{backend::TestBackend, Terminal};
  use tokio::sync::mpsc;

  use super::*;
  use crate::route::RoutePath;

  fn draw(pane: &mut HeaderPane, state: &State) -> ratatui::buffer::Buffer {
    let mut terminal = Terminal::new(TestBackend::new(60, 1)).unwrap();
    terminal
      .draw(|frame| {
        let area = frame.area();
        pane.draw(frame, area, state).unwrap();
      })
      .unwrap();
    terminal.backend().buffer().clone()
  }

  fn row_text(buffer: &ratatui::buffer::Buffer) -> String {
    (0..buffer.area.width).map(|x| buffer[(x, 0)].symbol()).collect()
  }

  fn state_at(path: &str) -> State {
    State { route: RoutePath::parse(path), account_names: HashMap::default(), ..Default::default() }
  }

  #[test]
  fn root_view_shows_label_without_separator_or_name() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let mut pane = HeaderPane::new(tx);
    let buffer = draw(&mut pane, &state_at("/customers"));
    let text = row_text(&buffer);
    assert!(text.contains("Customers"));
    assert!(!text.contains(SEPARATOR));
    // Arrow cell is present but styled invisible.
    assert_eq!(buffer[(0, 0)].symbol(), BACK_ARROW);
    assert!(buffer[(0, 0)].modifier.contains(Modifier::HIDDEN));
  }

  #[test]
  fn nested_view_shows_separator_and_empty_slot_while_pending() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut pane = HeaderPane::new(tx);
    let state = state_at("/customers/acme.com");
    pane.init(&state).unwrap();
    assert_eq!(rx.try_recv().unwrap(), Lookup { domain: String::from("acme.com") });

    let buffer = draw(&mut pane, &state);
    let text = row_text(&buffer);
    assert!(text.contains("Customers"));
    assert!(text.contains(SEPARATOR));
    assert!(!buffer[(0, 0)].modifier.contains(Modifier::HIDDEN));
    assert!(!text.contains("Acme Corp"));
  }

  #[test]
  fn nested_view_shows_resolved_name() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let mut pane = HeaderPane::new(tx);
    let mut state = state_at("/customers/acme.com");
    state.account_names.insert(String::from("acme.com"), Some(String::from("Acme Corp")));
    let text = row_text(&draw(&mut pane, &state));
    assert!(text.contains("Customers › Acme Corp"));
  }

  #[test]
  fn resolved_absence_renders_empty() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let mut pane = HeaderPane::new(tx);
    let mut state = state_at("/customers/acme.com");
    state.account_names.insert(String::from("acme.com"), None);
    let text = row_text(&draw(&mut pane, &state));
    assert!(text.contains("Customers ›"));
    assert!(!text.contains("Acme"));
  }

  #[test]
  fn lookups_are_not_repeated_once_cached() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut pane = HeaderPane::new(tx);
    let mut state = state_at("/customers/acme.com");
    state.account_names.insert(String::from("acme.com"), None);
    pane.update(Action::Update, &mut state).unwrap();
    pane.update(Action::Update, &mut state).unwrap();
    assert!(rx.try_recv().is_err());
  }

  fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent { kind: MouseEventKind::Up(MouseButton::Left), column, row, modifiers: KeyModifiers::empty() }
  }

  #[test]
  fn clicking_the_label_navigates_up_only_when_nested() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let mut pane = HeaderPane::new(tx);

    let mut state = state_at("/customers/acme.com");
    draw(&mut pane, &state);
    let response = pane.handle_mouse_events(click(3, 0), &mut state).unwrap();
    assert_eq!(response, Some(EventResponse::Stop(Action::Navigate(String::from("/customers")))));

    let mut state = state_at("/customers");
    draw(&mut pane, &state);
    let response = pane.handle_mouse_events(click(3, 0), &mut state).unwrap();
    assert_eq!(response, None);
  }
}
