//! Orchestration of the scan, resolve, token, rewrite pipeline.

use std::fs;
use std::ops::Range;
use std::path::Path;

use anyhow::{Context, Result};

use crate::config::BusterConfig;
use crate::hosts::HostRotation;
use crate::models::ProcessOutcome;
use crate::resolver;
use crate::scanner;

/// Cache-busting engine configured for one strategy, token source and host set.
///
/// Each [`CacheBuster::save`] call owns its working set exclusively; callers
/// may process independent stylesheets in parallel as long as they serialise
/// hard-strategy runs sharing a referenced asset.
#[derive(Debug, Clone)]
pub struct CacheBuster {
  config: BusterConfig,
  hosts: HostRotation,
}

impl CacheBuster {
  /// Create an engine for the provided configuration.
  pub fn new(config: BusterConfig) -> Self {
    let hosts = HostRotation::new(config.hosts.clone());
    Self { config, hosts }
  }

  /// Rewrite every resolvable reference in `text`.
  ///
  /// Relative references resolve against `stylesheet_dir`. Every per-reference
  /// problem — a missing asset, an absolute path with no document root, a
  /// failed revision lookup — degrades to leaving that reference unmodified;
  /// processing itself never fails.
  pub fn process(&self, text: &str, stylesheet_dir: &Path) -> ProcessOutcome {
    let mut replacements: Vec<(Range<usize>, String)> = Vec::new();
    let mut file_operations = Vec::new();
    let mut revision_fallbacks = Vec::new();
    let mut rewritten = 0;

    for reference in scanner::scan_references(text) {
      let asset = resolver::resolve(
        &reference,
        stylesheet_dir,
        self.config.document_root.as_deref(),
      );
      if !asset.exists {
        continue;
      }
      let Some(asset_path) = asset.filesystem_path.clone() else {
        continue;
      };
      let Some(token) = self.config.token_source.token(&asset_path) else {
        continue;
      };
      if token.fell_back {
        revision_fallbacks.push(asset_path);
      }

      let result = self.config.strategy.apply(&reference, &asset, &token.value);
      if result.new_reference_text != reference.path {
        rewritten += 1;
      }
      if let Some(rename) = result.file_rename {
        file_operations.push(rename);
      }

      let with_host = self
        .hosts
        .prefix(reference.path_without_query(), &result.new_reference_text);
      if with_host != reference.path {
        replacements.push((reference.span.clone(), with_host));
      }
    }

    ProcessOutcome {
      text: splice(text, replacements),
      file_operations,
      revision_fallbacks,
      rewritten,
    }
  }

  /// Rewrite the stylesheet at `input`, writing to `output` when given.
  ///
  /// Renamed asset copies are created before the stylesheet is written, so
  /// rewritten references never point at files that do not exist yet. Only a
  /// failure to read the input or to produce the output surfaces as an error;
  /// the whole write is a full overwrite, not a patch.
  pub fn save(&self, input: &Path, output: Option<&Path>) -> Result<ProcessOutcome> {
    let text = fs::read_to_string(input)
      .with_context(|| format!("failed to read stylesheet at {}", input.display()))?;
    let stylesheet_dir = input.parent().unwrap_or_else(|| Path::new("."));

    let outcome = self.process(&text, stylesheet_dir);

    for rename in &outcome.file_operations {
      fs::copy(&rename.from, &rename.to).with_context(|| {
        format!(
          "failed to copy {} to {}",
          rename.from.display(),
          rename.to.display()
        )
      })?;
    }

    let destination = output.unwrap_or(input);
    fs::write(destination, &outcome.text)
      .with_context(|| format!("failed to write {}", destination.display()))?;

    Ok(outcome)
  }
}

/// Rebuild the text once, splicing replacements back-to-front by offset so
/// earlier spans stay valid.
fn splice(text: &str, mut replacements: Vec<(Range<usize>, String)>) -> String {
  replacements.sort_by(|a, b| b.0.start.cmp(&a.0.start));

  let mut output = text.to_string();
  for (range, replacement) in replacements {
    output.replace_range(range, &replacement);
  }
  output
}
