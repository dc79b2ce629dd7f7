use std::sync::OnceLock;

use regex::Regex;

use crate::models::{Reference, RewriteResult};

fn marker_pattern() -> &'static Regex {
  static PATTERN: OnceLock<Regex> = OnceLock::new();
  PATTERN.get_or_init(|| Regex::new(r"\?jcb=\w+$").expect("invalid query marker regex"))
}

/// Append `?jcb=<token>` unless the reference already carries the marker.
pub(super) fn apply(reference: &Reference, token: &str) -> RewriteResult {
  if marker_pattern().is_match(&reference.path) {
    return RewriteResult::unchanged(reference);
  }
  RewriteResult::text_only(format!("{}?jcb={token}", reference.path))
}
