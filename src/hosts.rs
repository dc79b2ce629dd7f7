//! Deterministic distribution of rewritten references across asset hosts.

use xxhash_rust::xxh3::xxh3_64;

/// Ordered rotation of asset hosts configured for a run.
///
/// Assignment is a pure function of the reference path, so repeated builds of
/// the same unchanged stylesheet pick the same host in every process, keeping
/// re-runs over already-processed output reproducible.
#[derive(Debug, Clone, Default)]
pub struct HostRotation {
  hosts: Vec<String>,
}

impl HostRotation {
  /// Build a rotation from the configured host list.
  pub fn new(hosts: Vec<String>) -> Self {
    Self { hosts }
  }

  /// Whether any hosts are configured.
  pub fn is_empty(&self) -> bool {
    self.hosts.is_empty()
  }

  /// Host assigned to the given reference path, if any are configured.
  pub fn host_for(&self, path: &str) -> Option<&str> {
    if self.hosts.is_empty() {
      return None;
    }
    let index = (xxh3_64(path.as_bytes()) % self.hosts.len() as u64) as usize;
    Some(self.hosts[index].trim_end_matches('/'))
  }

  /// Prefix the assigned host onto an already rewritten reference.
  ///
  /// `path` is the reference path before rewriting, used only for the stable
  /// host assignment; the marker detection of the rewrite strategies operates
  /// on the suffix and is unaffected by the prefix.
  pub fn prefix(&self, path: &str, rewritten: &str) -> String {
    match self.host_for(path) {
      Some(host) if rewritten.starts_with('/') => format!("{host}{rewritten}"),
      Some(host) => format!("{host}/{rewritten}"),
      None => rewritten.to_string(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::HostRotation;

  fn rotation() -> HostRotation {
    HostRotation::new(vec![
      "http://assets1".to_string(),
      "http://assets2".to_string(),
      "http://assets3".to_string(),
    ])
  }

  #[test]
  fn assignment_is_deterministic_per_path() {
    let rotation = rotation();
    let first = rotation.host_for("img/icon.png").unwrap().to_string();
    let second = rotation.host_for("img/icon.png").unwrap().to_string();
    assert_eq!(first, second);
  }

  #[test]
  fn assignment_stays_within_configured_hosts() {
    let rotation = rotation();
    for path in ["a.png", "b.gif", "deep/nested/c.jpg", "/abs/d.woff"] {
      let host = rotation.host_for(path).unwrap();
      assert!(host.starts_with("http://assets"), "{host}");
    }
  }

  #[test]
  fn prefix_joins_relative_paths_with_a_slash() {
    let rotation = HostRotation::new(vec!["http://assets1/".to_string()]);
    assert_eq!(
      rotation.prefix("x.png", "x.png?jcb=42"),
      "http://assets1/x.png?jcb=42"
    );
    assert_eq!(
      rotation.prefix("/x.png", "/x.png?jcb=42"),
      "http://assets1/x.png?jcb=42"
    );
  }

  #[test]
  fn empty_rotation_passes_text_through() {
    let rotation = HostRotation::default();
    assert!(rotation.is_empty());
    assert_eq!(rotation.prefix("x.png", "x.png?jcb=42"), "x.png?jcb=42");
  }
}
