//! Run configuration and optional JSON config-file discovery.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::rewrite::Strategy;
use crate::token::TokenSource;

const DEFAULT_CONFIG_FILE: &str = "cachebust.config.json";

/// Options controlling how references are resolved and rewritten.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BusterConfig {
    /// Directory absolute-style references (leading `/`) resolve against.
    pub document_root: Option<PathBuf>,
    /// Marker shape stamped onto rewritten references.
    pub strategy: Strategy,
    /// Source used to derive invalidation tokens.
    pub token_source: TokenSource,
    /// Ordered asset hosts distributed across rewritten references.
    pub hosts: Vec<String>,
}

impl BusterConfig {
    /// Attempt to load configuration from the provided directory.
    ///
    /// When the configuration file does not exist or fails to parse we fall
    /// back to default values so downstream callers can continue operating
    /// with sensible assumptions.
    pub fn discover(dir: &Path) -> Self {
        Self::from_path(&dir.join(DEFAULT_CONFIG_FILE)).unwrap_or_default()
    }

    /// Read configuration from a specific JSON file.
    pub fn from_path(path: &Path) -> Option<Self> {
        let content = fs::read_to_string(path).ok()?;
        serde_json::from_str(&content).ok()
    }
}
