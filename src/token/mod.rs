//! Invalidation tokens derived from a resolved asset's state.
//!
//! Two sources exist: the file's modification time and the last
//! version-control revision touching it. The revision source degrades to the
//! modification time when history is unavailable, and records that it did so,
//! keeping the fallback observable without ever failing the run.

mod mtime;
mod revision;

pub use mtime::modification_token;
pub use revision::last_revision;

use std::path::Path;

use clap::ValueEnum;
use serde::Deserialize;

/// Source used to derive the invalidation token for a resolved asset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TokenSource {
  /// Last modification time, seconds since the Unix epoch.
  #[default]
  Mtime,
  /// Short hash of the last git commit touching the file.
  Revision,
}

/// Token produced for one asset, with fallback provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenOutcome {
  /// Value embedded into the rewritten reference.
  pub value: String,
  /// True when the revision lookup failed and the modification time was used.
  pub fell_back: bool,
}

impl TokenSource {
  /// Derive the token for the file at `path`.
  ///
  /// Deterministic for a given file state. Returns `None` when the file state
  /// cannot be read at all; the caller leaves that reference unmodified.
  pub fn token(&self, path: &Path) -> Option<TokenOutcome> {
    match self {
      TokenSource::Mtime => modification_token(path).map(|value| TokenOutcome {
        value,
        fell_back: false,
      }),
      TokenSource::Revision => match last_revision(path) {
        Some(value) => Some(TokenOutcome {
          value,
          fell_back: false,
        }),
        None => modification_token(path).map(|value| TokenOutcome {
          value,
          fell_back: true,
        }),
      },
    }
  }
}

#[cfg(test)]
mod tests {
  use std::fs;

  use tempfile::tempdir;

  use super::*;

  #[test]
  fn mtime_source_yields_numeric_token() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("a.png");
    fs::write(&file, "png").unwrap();

    let outcome = TokenSource::Mtime.token(&file).unwrap();
    assert!(outcome.value.parse::<u64>().unwrap() > 0);
    assert!(!outcome.fell_back);
  }

  #[test]
  fn revision_source_falls_back_outside_a_repository() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("a.png");
    fs::write(&file, "png").unwrap();

    let outcome = TokenSource::Revision.token(&file).unwrap();
    assert!(outcome.fell_back);
    assert_eq!(outcome.value, modification_token(&file).unwrap());
  }

  #[test]
  fn missing_file_yields_no_token() {
    let dir = tempdir().unwrap();
    assert!(TokenSource::Mtime.token(&dir.path().join("gone.png")).is_none());
  }
}
