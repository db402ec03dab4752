use std::collections::HashMap;

use color_eyre::eyre::Result;

use crate::{
  directory::{DirectoryClient, EnterpriseAccount},
  route::RoutePath,
};

#[derive(Default)]
pub struct State {
  pub directory_url: String,
  pub route: RoutePath,
  pub accounts: Vec<EnterpriseAccount>,
  /// Resolved name lookups keyed by domain. A `None` value is a lookup that
  /// is pending or yielded no name; either way the header renders empty.
  pub account_names: HashMap<String, Option<String>>,
  pub active_account_index: usize,
  pub active_filter: String,
  pub input_mode: InputMode,
}

#[derive(Default, PartialEq)]
pub enum InputMode {
  #[default]
  Normal,
  Command,
}

impl State {
  pub async fn from_directory(directory: &DirectoryClient, route: &str) -> Result<Self> {
    let accounts = directory.enterprise_accounts().await?;
    Ok(Self {
      directory_url: directory.base_url().to_string(),
      route: RoutePath::parse(route),
      accounts,
      account_names: HashMap::default(),
      active_account_index: 0,
      active_filter: String::default(),
      input_mode: InputMode::Normal,
    })
  }

  pub fn filtered_accounts(&self) -> impl Iterator<Item = &EnterpriseAccount> {
    self.accounts.iter().filter(|account| {
      account.domain.contains(self.active_filter.as_str())
        || account.name.as_ref().is_some_and(|name| name.contains(self.active_filter.as_str()))
    })
  }

  pub fn accounts_len(&self) -> usize {
    self.filtered_accounts().count()
  }

  pub fn active_account(&self) -> Option<&EnterpriseAccount> {
    self.filtered_accounts().nth(self.active_account_index)
  }

  pub fn account(&self, domain: &str) -> Option<&EnterpriseAccount> {
    self.accounts.iter().find(|account| account.domain == domain)
  }

  /// Latest resolved display name for a domain, if a lookup has completed
  /// and the directory knew one.
  pub fn account_name(&self, domain: &str) -> Option<&str> {
    self.account_names.get(domain).and_then(|name| name.as_deref())
  }
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use super::*;

  fn account(domain: &str, name: Option<&str>) -> EnterpriseAccount {
    EnterpriseAccount { domain: domain.into(), name: name.map(String::from), ..Default::default() }
  }

  fn state_with_accounts() -> State {
    State {
      accounts: vec![
        account("acme.com", Some("Acme Corp")),
        account("globex.net", Some("Globex")),
        account("initech.io", None),
      ],
      ..Default::default()
    }
  }

  #[test]
  fn filter_matches_domain_or_name() {
    let mut state = state_with_accounts();
    state.active_filter = String::from("acme");
    assert_eq!(state.accounts_len(), 1);

    state.active_filter = String::from("Globex");
    assert_eq!(state.accounts_len(), 1);

    state.active_filter = String::default();
    assert_eq!(state.accounts_len(), 3);
  }

  #[test]
  fn active_account_indexes_into_the_filtered_list() {
    let mut state = state_with_accounts();
    state.active_filter = String::from("i");
    state.active_account_index = 1;
    assert_eq!(state.active_account().map(|account| account.domain.as_str()), Some("initech.io"));
  }

  #[test]
  fn account_name_is_empty_until_a_lookup_resolves() {
    let mut state = state_with_accounts();
    assert_eq!(state.account_name("acme.com"), None);

    state.account_names.insert(String::from("acme.com"), None);
    assert_eq!(state.account_name("acme.com"), None);

    state.account_names.insert(String::from("acme.com"), Some(String::from("Acme Corp")));
    assert_eq!(state.account_name("acme.com"), Some("Acme Corp"));
  }
}
