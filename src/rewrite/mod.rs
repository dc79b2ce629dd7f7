//! Rewrite strategies that stamp a cache-bust marker onto a reference.
//!
//! Each strategy detects its own marker shape before stamping, so applying a
//! strategy to its own output is a no-op. References whose asset does not
//! exist always pass through unchanged.

mod framework;
mod hard;
mod query;

use clap::ValueEnum;
use serde::Deserialize;

use crate::models::{Reference, ResolvedAsset, RewriteResult};

/// Shape of the cache-bust marker stamped onto rewritten references.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
  /// Append a `?jcb=<token>` query suffix.
  #[default]
  Query,
  /// Append a bare `?<token>` query suffix.
  Framework,
  /// Copy the file to a name carrying `-jcb<token>` before the extension.
  Hard,
}

impl Strategy {
  /// Produce the rewritten reference text and any required file operation.
  ///
  /// Pure: the hard strategy describes its copy operation, the engine
  /// performs it.
  pub fn apply(&self, reference: &Reference, asset: &ResolvedAsset, token: &str) -> RewriteResult {
    if !asset.exists {
      return RewriteResult::unchanged(reference);
    }

    match self {
      Strategy::Query => query::apply(reference, token),
      Strategy::Framework => framework::apply(reference, token),
      Strategy::Hard => hard::apply(reference, asset, token),
    }
  }
}
