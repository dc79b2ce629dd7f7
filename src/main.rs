//! Command-line front end for the cache-busting engine.

use std::path::PathBuf;

use anyhow::{Result, anyhow, bail};
use clap::Parser;

use cachebust::{BusterConfig, CacheBuster, Strategy, TokenSource};

/// Rewrite stylesheet asset references with cache-busting markers.
#[derive(Debug, Parser)]
#[command(name = "cachebust", version, about)]
struct Cli {
  /// Stylesheets to rewrite in place.
  #[arg(required = true)]
  stylesheets: Vec<PathBuf>,

  /// Write the rewritten stylesheet here instead of overwriting the input
  /// (single input only).
  #[arg(short, long)]
  output: Option<PathBuf>,

  /// Directory absolute references (leading `/`) resolve against.
  #[arg(long)]
  document_root: Option<PathBuf>,

  /// Marker shape stamped onto rewritten references.
  #[arg(long)]
  strategy: Option<Strategy>,

  /// Source used to derive invalidation tokens.
  #[arg(long)]
  token_source: Option<TokenSource>,

  /// Asset host to rotate rewritten references across (repeatable).
  #[arg(long = "host")]
  hosts: Vec<String>,

  /// Explicit JSON configuration file.
  #[arg(long)]
  config: Option<PathBuf>,
}

fn main() -> Result<()> {
  let cli = Cli::parse();

  if cli.output.is_some() && cli.stylesheets.len() > 1 {
    bail!("--output can only be combined with a single input stylesheet");
  }

  let mut config = match &cli.config {
    Some(path) => BusterConfig::from_path(path)
      .ok_or_else(|| anyhow!("failed to load configuration from {}", path.display()))?,
    None => BusterConfig::discover(&std::env::current_dir()?),
  };
  if let Some(root) = cli.document_root {
    config.document_root = Some(root);
  }
  if let Some(strategy) = cli.strategy {
    config.strategy = strategy;
  }
  if let Some(source) = cli.token_source {
    config.token_source = source;
  }
  if !cli.hosts.is_empty() {
    config.hosts = cli.hosts;
  }

  let engine = CacheBuster::new(config);
  for stylesheet in &cli.stylesheets {
    let outcome = engine.save(stylesheet, cli.output.as_deref())?;
    println!(
      "{}: {} reference(s) rewritten",
      stylesheet.display(),
      outcome.rewritten
    );
    for asset in &outcome.revision_fallbacks {
      eprintln!(
        "warning: no revision history for {}, used modification time",
        asset.display()
      );
    }
  }

  Ok(())
}
