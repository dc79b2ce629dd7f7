use std::sync::OnceLock;

use regex::Regex;

use crate::models::{FileRename, Reference, ResolvedAsset, RewriteResult};

fn marker_pattern() -> &'static Regex {
  static PATTERN: OnceLock<Regex> = OnceLock::new();
  PATTERN.get_or_init(|| Regex::new(r"-jcb\w+$").expect("invalid hard marker regex"))
}

fn split_extension(file_name: &str) -> (&str, &str) {
  match file_name.rfind('.') {
    Some(index) if index > 0 => file_name.split_at(index),
    _ => (file_name, ""),
  }
}

/// Rename the asset to carry `-jcb<token>` before its extension.
///
/// The reference keeps its directory portion; the result carries the copy
/// operation the engine must perform before the stylesheet is written.
pub(super) fn apply(reference: &Reference, asset: &ResolvedAsset, token: &str) -> RewriteResult {
  let Some(original) = asset.filesystem_path.as_deref() else {
    return RewriteResult::unchanged(reference);
  };

  let path = reference.path_without_query();
  let (directory, file_name) = match path.rfind('/') {
    Some(index) => path.split_at(index + 1),
    None => ("", path),
  };
  let (stem, extension) = split_extension(file_name);

  if marker_pattern().is_match(stem) {
    return RewriteResult::unchanged(reference);
  }

  let busted_name = format!("{stem}-jcb{token}{extension}");
  RewriteResult {
    new_reference_text: format!("{directory}{busted_name}"),
    file_rename: Some(FileRename {
      from: original.to_path_buf(),
      to: original.with_file_name(&busted_name),
    }),
  }
}
