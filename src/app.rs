use color_eyre::eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::{
  layout::{Constraint, Layout},
  prelude::Rect,
};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::{
  action::Action,
  config::Config,
  directory::{DirectoryClient, Lookup},
  pages::{account::Account, home::Home, Page},
  panes::{footer::FooterPane, header::HeaderPane, Pane},
  route::RoutePath,
  state::{InputMode, State},
  tui,
};

#[derive(Default, Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
  #[default]
  Home,
}

pub struct App {
  pub config: Config,
  pub directory: DirectoryClient,
  pub pages: Vec<Box<dyn Page>>,
  pub active_page: usize,
  pub footer: FooterPane,
  pub header: HeaderPane,
  pub should_quit: bool,
  pub should_suspend: bool,
  pub mode: Mode,
  pub last_tick_key_events: Vec<KeyEvent>,
  pub state: State,
  lookup_rx: UnboundedReceiver<Lookup>,
}

impl App {
  pub async fn new(directory_url: String, route: String) -> Result<Self> {
    let directory = DirectoryClient::new(reqwest::Url::parse(directory_url.as_str())?);
    let state = State::from_directory(&directory, route.as_str()).await?;
    let config = Config::new()?;
    let mode = Mode::Home;
    let (lookup_tx, lookup_rx) = mpsc::unbounded_channel::<Lookup>();

    let mut pages: Vec<Box<dyn Page>> = vec![Box::new(Home::new()?)];
    if state.route.is_nested() {
      pages.insert(0, Box::new(Account::new()?));
    }

    Ok(Self {
      config,
      directory,
      pages,
      active_page: 0,
      footer: FooterPane::new(),
      header: HeaderPane::new(lookup_tx),
      should_quit: false,
      should_suspend: false,
      mode,
      last_tick_key_events: Vec::new(),
      state,
      lookup_rx,
    })
  }

  pub async fn run(&mut self) -> Result<()> {
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();

    let mut tui = tui::Tui::new()?.mouse(true);
    tui.enter()?;

    for page in self.pages.iter_mut() {
      page.register_action_handler(action_tx.clone())?;
    }

    for page in self.pages.iter_mut() {
      page.register_config_handler(self.config.clone())?;
    }

    for page in self.pages.iter_mut() {
      page.init(&self.state)?;
    }
    if let Some(page) = self.pages.get_mut(self.active_page) {
      page.focus()?;
    }

    self.header.init(&self.state)?;
    self.footer.init(&self.state)?;
    action_tx.send(Action::StatusLine(format!(
      "{} accounts · /: filter · enter: open · backspace: back · q: quit",
      self.state.accounts.len()
    )))?;

    loop {
      if let Some(e) = tui.next().await {
        let mut stop_event_propagation = self
          .pages
          .get_mut(self.active_page)
          .and_then(|page| page.handle_events(e.clone(), &mut self.state).ok())
          .map(|response| match response {
            Some(tui::EventResponse::Continue(action)) => {
              action_tx.send(action).ok();
              false
            },
            Some(tui::EventResponse::Stop(action)) => {
              action_tx.send(action).ok();
              true
            },
            _ => false,
          })
          .unwrap_or(false);

        stop_event_propagation = stop_event_propagation
          || self
            .footer
            .handle_events(e.clone(), &mut self.state)
            .map(|response| match response {
              Some(tui::EventResponse::Continue(action)) => {
                action_tx.send(action).ok();
                false
              },
              Some(tui::EventResponse::Stop(action)) => {
                action_tx.send(action).ok();
                true
              },
              _ => false,
            })
            .unwrap_or(false);

        stop_event_propagation = stop_event_propagation
          || self
            .header
            .handle_events(e.clone(), &mut self.state)
            .map(|response| match response {
              Some(tui::EventResponse::Continue(action)) => {
                action_tx.send(action).ok();
                false
              },
              Some(tui::EventResponse::Stop(action)) => {
                action_tx.send(action).ok();
                true
              },
              _ => false,
            })
            .unwrap_or(false);

        if !stop_event_propagation {
          match e {
            tui::Event::Quit if self.state.input_mode == InputMode::Normal => action_tx.send(Action::Quit)?,
            tui::Event::Tick => action_tx.send(Action::Tick)?,
            tui::Event::Render => action_tx.send(Action::Render)?,
            tui::Event::Resize(x, y) => action_tx.send(Action::Resize(x, y))?,
            tui::Event::Key(key) if self.state.input_mode == InputMode::Normal => {
              if let Some(keymap) = self.config.keybindings.get(&self.mode) {
                if let Some(action) = keymap.get(&vec![key]) {
                  action_tx.send(action.clone())?;
                } else {
                  // If the key was not handled as a single key action,
                  // then consider it for multi-key combinations.
                  self.last_tick_key_events.push(key);

                  // Check for multi-key combinations
                  if let Some(action) = keymap.get(&self.last_tick_key_events) {
                    action_tx.send(action.clone())?;
                  }
                }
              };
            },
            _ => {},
          }
        }
      }

      while let Ok(action) = action_rx.try_recv() {
        if action != Action::Tick && action != Action::Render {
          log::debug!("{action:?}");
        }
        match action {
          Action::Tick => {
            self.last_tick_key_events.drain(..);
          },
          Action::Quit if self.state.input_mode == InputMode::Normal => self.should_quit = true,
          Action::Suspend => self.should_suspend = true,
          Action::Resume => self.should_suspend = false,
          Action::Resize(w, h) => {
            tui.resize(Rect::new(0, 0, w, h))?;
            tui.draw(|f| {
              self.draw(f).unwrap_or_else(|err| {
                action_tx.send(Action::Error(format!("Failed to draw: {:?}", err))).unwrap();
              })
            })?;
          },
          Action::Render => {
            tui.draw(|f| {
              self.draw(f).unwrap_or_else(|err| {
                action_tx.send(Action::Error(format!("Failed to draw: {:?}", err))).unwrap();
              })
            })?;
          },
          Action::Navigate(ref path) => {
            self.navigate(path.clone(), &action_tx)?;
          },
          Action::Back => {
            if self.state.route.is_nested() {
              action_tx.send(Action::Navigate(self.state.route.parent()))?;
            }
          },
          Action::Refresh => match self.directory.enterprise_accounts().await {
            Ok(accounts) => {
              action_tx.send(Action::TimedStatusLine(format!("reloaded {} accounts", accounts.len()), 3))?;
              self.state.accounts = accounts;
              action_tx.send(Action::Update)?;
            },
            Err(err) => action_tx.send(Action::Error(format!("directory refresh failed: {err}")))?,
          },
          _ => {},
        }

        if let Some(page) = self.pages.get_mut(self.active_page) {
          if let Some(action) = page.update(action.clone(), &mut self.state)? {
            action_tx.send(action)?
          };
        }

        if let Some(action) = self.header.update(action.clone(), &mut self.state)? {
          action_tx.send(action)?
        };
        if let Some(action) = self.footer.update(action.clone(), &mut self.state)? {
          action_tx.send(action)?
        };
      }

      while let Ok(lookup) = self.lookup_rx.try_recv() {
        if self.state.account_names.contains_key(lookup.domain.as_str()) {
          continue;
        }
        // Failures are absorbed: the entry is recorded either way, so the
        // name slot renders empty and the lookup is not retried.
        let name = match self.directory.enterprise_account(lookup.domain.as_str()).await {
          Ok(account) => account.and_then(|account| account.name),
          Err(err) => {
            log::warn!("account lookup for {} failed: {err}", lookup.domain);
            None
          },
        };
        self.state.account_names.insert(lookup.domain, name);
      }

      if self.should_suspend {
        tui.suspend()?;
        action_tx.send(Action::Resume)?;
        tui = tui::Tui::new()?.mouse(true);
        tui.enter()?;
      } else if self.should_quit {
        tui.stop()?;
        break;
      }
    }
    tui.exit()?;
    Ok(())
  }

  fn navigate(&mut self, path: String, action_tx: &UnboundedSender<Action>) -> Result<()> {
    let route = RoutePath::parse(path.as_str());
    if route.is_nested() && !self.state.route.is_nested() {
      if let Some(page) = self.pages.get_mut(self.active_page) {
        page.unfocus()?;
      }
      self.state.route = route;
      let mut page = Account::new()?;
      page.register_action_handler(action_tx.clone())?;
      page.register_config_handler(self.config.clone())?;
      page.init(&self.state)?;
      self.pages.insert(0, Box::new(page));
      self.pages[0].focus()?;
    } else if !route.is_nested() && self.state.route.is_nested() {
      self.state.route = route;
      if self.pages.len() > 1 {
        self.pages[0].unfocus()?;
        self.pages.remove(0);
        self.pages[0].focus()?;
      }
    } else {
      self.state.route = route;
    }
    Ok(())
  }

  fn draw(&mut self, frame: &mut tui::Frame<'_>) -> Result<()> {
    let vertical_layout =
      Layout::vertical(vec![Constraint::Max(1), Constraint::Fill(1), Constraint::Max(1)]).split(frame.area());

    self.header.draw(frame, vertical_layout[0], &self.state)?;

    if let Some(page) = self.pages.get_mut(self.active_page) {
      page.draw(frame, vertical_layout[1], &self.state)?;
    };

    self.footer.draw(frame, vertical_layout[2], &self.state)?;
    Ok(())
  }
}
