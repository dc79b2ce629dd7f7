//! Mapping extracted references onto files on disk.

use std::path::Path;

use regex::Regex;

use crate::models::{Reference, ResolvedAsset};

fn external_reference_patterns() -> &'static [Regex] {
    use std::sync::OnceLock;

    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS
        .get_or_init(|| {
            vec![
                Regex::new(r"(?i)^https?:").expect("invalid http(s) regex"),
                Regex::new(r"(?i)^data:").expect("invalid data URI regex"),
                Regex::new(r"(?i)^mailto:").expect("invalid mailto regex"),
                Regex::new(r"^#").expect("invalid fragment regex"),
            ]
        })
        .as_slice()
}

/// Determine whether a reference points outside the local filesystem.
///
/// External URLs, data URIs and fragment-only references are scanned but never
/// resolved; they carry no file to derive a token from.
pub fn is_external_reference(path: &str) -> bool {
    external_reference_patterns()
        .iter()
        .any(|pattern| pattern.is_match(path))
}

/// Map a reference onto the filesystem.
///
/// Relative paths resolve against the stylesheet's own directory; paths with a
/// leading separator resolve against `document_root`. A missing document root,
/// an external reference or a file that is simply not there all degrade to a
/// non-existent asset — resolution never fails the run.
pub fn resolve(
    reference: &Reference,
    stylesheet_dir: &Path,
    document_root: Option<&Path>,
) -> ResolvedAsset {
    let path = reference.path_without_query();
    if path.is_empty() || is_external_reference(&reference.path) {
        return ResolvedAsset::unresolved();
    }

    let location = if path.starts_with('/') {
        match document_root {
            Some(root) => root.join(path.trim_start_matches('/')),
            None => return ResolvedAsset::unresolved(),
        }
    } else {
        stylesheet_dir.join(path)
    };

    let exists = location.is_file();
    ResolvedAsset {
        filesystem_path: Some(location),
        exists,
    }
}
