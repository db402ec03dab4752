use color_eyre::eyre::Result;
use serde::{Deserialize, Serialize};

/// One queued account-name lookup, keyed by domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup {
  pub domain: String,
}

/// Enterprise account as served by the directory's `enterprise_accounts`
/// endpoints. The wire format is camelCase JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnterpriseAccount {
  pub domain: String,
  #[serde(default)]
  pub name: Option<String>,
  #[serde(default)]
  pub status: Option<String>,
  #[serde(default)]
  pub users_count: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListResponse {
  #[serde(default)]
  enterprise_accounts: Vec<EnterpriseAccount>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LookupResponse {
  #[serde(default)]
  enterprise_account: Option<EnterpriseAccount>,
}

/// Client for the account directory service.
pub struct DirectoryClient {
  base_url: reqwest::Url,
  client: reqwest::Client,
}

impl DirectoryClient {
  pub fn new(mut base_url: reqwest::Url) -> Self {
    // Url::join replaces the last path segment unless the base ends with '/'.
    if !base_url.path().ends_with('/') {
      let path = format!("{}/", base_url.path());
      base_url.set_path(&path);
    }
    Self { base_url, client: reqwest::Client::new() }
  }

  pub fn base_url(&self) -> &reqwest::Url {
    &self.base_url
  }

  pub async fn enterprise_accounts(&self) -> Result<Vec<EnterpriseAccount>> {
    let url = self.base_url.join("enterprise_accounts")?;
    let body = self.client.get(url).send().await?.error_for_status()?.text().await?;
    Ok(serde_json::from_str::<ListResponse>(body.as_str())?.enterprise_accounts)
  }

  /// Resolves a single account by domain. `Ok(None)` means the directory
  /// answered but knows no such account.
  pub async fn enterprise_account(&self, domain: &str) -> Result<Option<EnterpriseAccount>> {
    let url = self.base_url.join(format!("enterprise_accounts/{domain}").as_str())?;
    let body = self.client.get(url).send().await?.error_for_status()?.text().await?;
    Ok(serde_json::from_str::<LookupResponse>(body.as_str())?.enterprise_account)
  }
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use super::*;

  #[test]
  fn lookup_response_with_account() {
    let parsed: LookupResponse =
      serde_json::from_str(r#"{"enterpriseAccount": {"domain": "acme.com", "name": "Acme Corp"}}"#).unwrap();
    let account = parsed.enterprise_account.unwrap();
    assert_eq!(account.domain, "acme.com");
    assert_eq!(account.name.as_deref(), Some("Acme Corp"));
  }

  #[test]
  fn lookup_response_with_null_account() {
    let parsed: LookupResponse = serde_json::from_str(r#"{"enterpriseAccount": null}"#).unwrap();
    assert_eq!(parsed.enterprise_account, None);
  }

  #[test]
  fn list_response_camel_case_fields() {
    let parsed: ListResponse = serde_json::from_str(
      r#"{"enterpriseAccounts": [
        {"domain": "acme.com", "name": "Acme Corp", "status": "active", "usersCount": 42},
        {"domain": "globex.net"}
      ]}"#,
    )
    .unwrap();
    assert_eq!(parsed.enterprise_accounts.len(), 2);
    assert_eq!(parsed.enterprise_accounts[0].users_count, Some(42));
    assert_eq!(parsed.enterprise_accounts[1].name, None);
  }

  #[test]
  fn base_url_keeps_its_path_prefix() {
    let client = DirectoryClient::new(reqwest::Url::parse("http://localhost:9292/api").unwrap());
    assert_eq!(client.base_url().join("enterprise_accounts").unwrap().path(), "/api/enterprise_accounts");
  }
}
