use serde::{Deserialize, Serialize};
use strum::Display;

#[derive(Debug, Clone, PartialEq, Serialize, Display, Deserialize)]
pub enum Action {
  Tick,
  Render,
  Resize(u16, u16),
  Suspend,
  Resume,
  Quit,
  Refresh,
  Error(String),
  FocusNext,
  FocusPrev,
  Up,
  Down,
  Submit,
  Update,
  Navigate(String),
  Back,
  FocusFooter(String, Option<String>),
  FooterResult(String, Option<String>),
  StatusLine(String),
  TimedStatusLine(String, u64),
}
