use std::fs;
use std::path::Path;
use std::time::UNIX_EPOCH;

/// Modification time of `path` rendered as seconds since the Unix epoch.
pub fn modification_token(path: &Path) -> Option<String> {
  let modified = fs::metadata(path).ok()?.modified().ok()?;
  let seconds = modified.duration_since(UNIX_EPOCH).ok()?.as_secs();
  Some(seconds.to_string())
}
