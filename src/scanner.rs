//! Extraction of `url(...)` resource references from stylesheet text.

use std::sync::OnceLock;

use regex::Regex;

use crate::models::Reference;

fn url_pattern() -> &'static Regex {
  static PATTERN: OnceLock<Regex> = OnceLock::new();
  PATTERN.get_or_init(|| {
    Regex::new(
      r#"(?i)url\(\s*(?:"(?P<double>[^"]*)"|'(?P<single>[^']*)'|(?P<bare>[^'"\s)][^)]*?))\s*\)"#,
    )
    .expect("invalid url() regex")
  })
}

/// Extract every `url(...)` reference from `text`, in occurrence order.
///
/// Handles single, double and absent quoting, whitespace inside the
/// parentheses, several references on one line and declarations spanning
/// multiple lines. Other CSS constructs are never matched. Duplicate paths
/// produce one [`Reference`] per occurrence.
pub fn scan_references(text: &str) -> Vec<Reference> {
  url_pattern()
    .captures_iter(text)
    .filter_map(|captures| {
      let (path, quoted) = if let Some(matched) = captures.name("double") {
        (matched, true)
      } else if let Some(matched) = captures.name("single") {
        (matched, true)
      } else {
        (captures.name("bare")?, false)
      };

      let whole = captures.get(0)?;
      Some(Reference {
        raw_text: whole.as_str().to_string(),
        path: path.as_str().to_string(),
        span: path.range(),
        quoted,
      })
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::scan_references;

  #[test]
  fn finds_unquoted_reference() {
    let references = scan_references("a { background: url(x.png); }");
    assert_eq!(references.len(), 1);
    assert_eq!(references[0].path, "x.png");
    assert!(!references[0].quoted);
  }

  #[test]
  fn finds_quoted_references_with_whitespace() {
    let text = "a { background: url( \"img/a.png\" ); }\nb { background: url( 'b.gif' ); }";
    let references = scan_references(text);
    assert_eq!(references.len(), 2);
    assert_eq!(references[0].path, "img/a.png");
    assert!(references[0].quoted);
    assert_eq!(references[1].path, "b.gif");
    assert!(references[1].quoted);
  }

  #[test]
  fn finds_multiple_references_per_line() {
    let text = "a { background: url(a.png), url(b.png); }";
    let paths: Vec<_> = scan_references(text)
      .into_iter()
      .map(|reference| reference.path)
      .collect();
    assert_eq!(paths, vec!["a.png".to_string(), "b.png".to_string()]);
  }

  #[test]
  fn finds_references_across_lines() {
    let text = "a {\n  background:\n    url(\n      deep/x.png\n    );\n}";
    let references = scan_references(text);
    assert_eq!(references.len(), 1);
    assert_eq!(references[0].path, "deep/x.png");
  }

  #[test]
  fn span_covers_exactly_the_path_portion() {
    let text = "a { background: url('x.png?jcb=1'); }";
    let references = scan_references(text);
    assert_eq!(&text[references[0].span.clone()], "x.png?jcb=1");
  }

  #[test]
  fn duplicate_paths_yield_independent_references() {
    let text = "a { background: url(x.png); }\nb { background: url(x.png); }";
    let references = scan_references(text);
    assert_eq!(references.len(), 2);
    assert_ne!(references[0].span, references[1].span);
  }

  #[test]
  fn ignores_other_css_functions() {
    let text = "a { width: calc(100% - 2px); color: rgb(0, 0, 0); }";
    assert!(scan_references(text).is_empty());
  }

  #[test]
  fn matches_uppercase_url_keyword() {
    let references = scan_references("a { background: URL(x.png); }");
    assert_eq!(references.len(), 1);
    assert_eq!(references[0].path, "x.png");
  }
}
