use std::fmt;

use serde::{Deserialize, Serialize};

/// Ordered, non-empty segments of a console route path.
///
/// `/customers/acme.com` parses to `["customers", "acme.com"]`. A route with
/// more than one segment is a nested view: the second segment is the domain
/// of the enterprise account being viewed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutePath {
  segments: Vec<String>,
}

impl RoutePath {
  pub fn parse(path: &str) -> Self {
    Self { segments: path.split('/').filter(|segment| !segment.is_empty()).map(String::from).collect() }
  }

  pub fn segments(&self) -> &[String] {
    &self.segments
  }

  pub fn is_nested(&self) -> bool {
    self.segments.len() > 1
  }

  pub fn root(&self) -> Option<&str> {
    self.segments.first().map(String::as_str)
  }

  /// Domain segment of a nested view.
  pub fn nested(&self) -> Option<&str> {
    self.segments.get(1).map(String::as_str)
  }

  /// Path of the root view, the target of the header's back affordance.
  pub fn parent(&self) -> String {
    match self.root() {
      Some(root) => format!("/{root}"),
      None => String::from("/"),
    }
  }
}

impl fmt::Display for RoutePath {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "/{}", self.segments.join("/"))
  }
}

/// Header state derived from the current route. Recomputed on every draw,
/// never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Breadcrumb {
  pub nested: bool,
  pub root: Option<String>,
  pub domain: Option<String>,
}

impl Breadcrumb {
  pub fn of(route: &RoutePath) -> Self {
    Self { nested: route.is_nested(), root: route.root().map(String::from), domain: route.nested().map(String::from) }
  }
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use super::*;

  #[test]
  fn parse_drops_empty_segments() {
    assert_eq!(RoutePath::parse("/customers/acme.com").segments(), ["customers", "acme.com"]);
    assert_eq!(RoutePath::parse("/customers").segments(), ["customers"]);
    assert_eq!(RoutePath::parse("/").segments(), &[] as &[String]);
    assert_eq!(RoutePath::parse("").segments(), &[] as &[String]);
    assert_eq!(RoutePath::parse("//customers///acme.com/").segments(), ["customers", "acme.com"]);
    assert_eq!(RoutePath::parse("customers/acme.com").segments(), ["customers", "acme.com"]);
  }

  #[test]
  fn nested_iff_more_than_one_segment() {
    assert!(!RoutePath::parse("/").is_nested());
    assert!(!RoutePath::parse("/customers").is_nested());
    assert!(RoutePath::parse("/customers/acme.com").is_nested());
    assert!(RoutePath::parse("/customers/acme.com/settings").is_nested());
  }

  #[test]
  fn nested_segment_only_on_nested_views() {
    assert_eq!(RoutePath::parse("/customers").nested(), None);
    assert_eq!(RoutePath::parse("/customers/acme.com").nested(), Some("acme.com"));
  }

  #[test]
  fn parent_is_the_root_view() {
    assert_eq!(RoutePath::parse("/customers/acme.com").parent(), "/customers");
    assert_eq!(RoutePath::parse("/customers").parent(), "/customers");
    assert_eq!(RoutePath::parse("/").parent(), "/");
  }

  #[test]
  fn display_round_trips_canonical_paths() {
    let route = RoutePath::parse("/customers/acme.com");
    assert_eq!(route.to_string(), "/customers/acme.com");
    assert_eq!(RoutePath::parse(&route.to_string()), route);
  }

  #[test]
  fn breadcrumb_derivation_is_idempotent() {
    let route = RoutePath::parse("/customers/acme.com");
    let crumb = Breadcrumb::of(&route);
    assert_eq!(crumb, Breadcrumb::of(&route));
    assert_eq!(
      crumb,
      Breadcrumb {
        nested: true,
        root: Some(String::from("customers")),
        domain: Some(String::from("acme.com")),
      }
    );
  }

  #[test]
  fn breadcrumb_of_root_view_has_no_domain() {
    let crumb = Breadcrumb::of(&RoutePath::parse("/customers"));
    assert_eq!(crumb, Breadcrumb { nested: false, root: Some(String::from("customers")), domain: None });
  }
}
