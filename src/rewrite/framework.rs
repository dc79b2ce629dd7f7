use std::sync::OnceLock;

use regex::Regex;

use crate::models::{Reference, RewriteResult};

fn marker_pattern() -> &'static Regex {
  static PATTERN: OnceLock<Regex> = OnceLock::new();
  // A trailing bare `?<token>`; `?key=value` query strings do not count.
  PATTERN.get_or_init(|| Regex::new(r"\?\w+$").expect("invalid framework marker regex"))
}

/// Append the bare `?<token>` convention unless one is already present.
pub(super) fn apply(reference: &Reference, token: &str) -> RewriteResult {
  if marker_pattern().is_match(&reference.path) {
    return RewriteResult::unchanged(reference);
  }
  RewriteResult::text_only(format!("{}?{token}", reference.path))
}
