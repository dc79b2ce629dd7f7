//! Data structures flowing through the cache-busting pipeline.

use std::ops::Range;
use std::path::PathBuf;

/// A single `url(...)` resource reference extracted from stylesheet text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
  /// Complete matched text, including the `url(` wrapper and any quotes.
  pub raw_text: String,
  /// Path portion of the reference with surrounding quotes stripped.
  pub path: String,
  /// Byte offsets of the path portion within the source text.
  pub span: Range<usize>,
  /// Whether the path was wrapped in single or double quotes.
  pub quoted: bool,
}

impl Reference {
  /// Path with any query or fragment suffix removed.
  ///
  /// Re-running the engine over already-busted output still has to locate
  /// the underlying file, so filesystem lookups ignore the suffix.
  pub fn path_without_query(&self) -> &str {
    self.path.split(['?', '#']).next().unwrap_or("")
  }
}

/// Outcome of mapping a reference onto the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAsset {
  /// Location the reference points at, when one could be constructed.
  pub filesystem_path: Option<PathBuf>,
  /// Whether a regular file is present at that location.
  pub exists: bool,
}

impl ResolvedAsset {
  /// An asset that could not be mapped onto the filesystem at all.
  pub fn unresolved() -> Self {
    Self {
      filesystem_path: None,
      exists: false,
    }
  }
}

/// A copy of an asset file required before the rewritten stylesheet is durable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRename {
  /// Original asset location.
  pub from: PathBuf,
  /// Renamed location carrying the cache-bust marker.
  pub to: PathBuf,
}

/// Replacement text for one reference plus any required file operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteResult {
  /// Text spliced back over the reference's path span.
  pub new_reference_text: String,
  /// Copy operation the hard strategy requires, if any.
  pub file_rename: Option<FileRename>,
}

impl RewriteResult {
  /// Leave the reference exactly as it appeared in the source.
  pub fn unchanged(reference: &Reference) -> Self {
    Self {
      new_reference_text: reference.path.clone(),
      file_rename: None,
    }
  }

  /// Replace the reference text without touching any files.
  pub fn text_only(new_reference_text: String) -> Self {
    Self {
      new_reference_text,
      file_rename: None,
    }
  }
}

/// Result of processing one stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutcome {
  /// Rewritten stylesheet text.
  pub text: String,
  /// Asset copies that must exist before the text is written.
  pub file_operations: Vec<FileRename>,
  /// Assets whose revision lookup failed and used the modification time instead.
  pub revision_fallbacks: Vec<PathBuf>,
  /// Number of references that received a cache-bust marker.
  pub rewritten: usize,
}
