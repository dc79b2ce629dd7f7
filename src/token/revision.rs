use std::path::Path;
use std::process::Command;

/// Short hash of the most recent git commit touching `path`.
///
/// Returns `None` when git is unavailable, the file lives outside a
/// repository, or no commit has touched it yet. Callers fall back to the
/// modification time in that case.
pub fn last_revision(path: &Path) -> Option<String> {
  let file_name = path.file_name()?;
  let directory = path.parent()?;

  let output = Command::new("git")
    .args(["log", "-1", "--format=%h", "--"])
    .arg(file_name)
    .current_dir(directory)
    .output()
    .ok()?;

  if !output.status.success() {
    return None;
  }

  let revision = String::from_utf8(output.stdout).ok()?;
  let revision = revision.trim();
  if revision.is_empty() {
    None
  } else {
    Some(revision.to_string())
  }
}

#[cfg(test)]
mod tests {
  use std::fs;

  use tempfile::tempdir;

  use super::last_revision;

  #[test]
  fn untracked_file_has_no_revision() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("a.png");
    fs::write(&file, "png").unwrap();

    assert!(last_revision(&file).is_none());
  }

  #[test]
  fn bare_path_has_no_revision() {
    assert!(last_revision(std::path::Path::new("")).is_none());
  }
}
