use crate::builder::ExportKind;
use itertools::Itertools;

const MAX_STEM_CHARS: usize = 100;
const FALLBACK_STEM: &str = "document";

/// Derives the file name an export is saved under, e.g.
/// `"Cell Biology"` + `QuizAnswerKey` -> `Cell_Biology_AnswerKey.pdf`.
pub fn derive_filename(title: &str, kind: ExportKind) -> String {
    format!("{}{}.pdf", sanitize_stem(title), kind.suffix())
}

/// Reduces a title to a filesystem-safe stem.
///
/// Whitespace runs become a single `_`. Only alphanumerics, `-` and `_`
/// survive, so separators, quotes, dots and control characters never reach
/// the file system.
pub fn sanitize_stem(title: &str) -> String {
    let stem: String = title
        .split_whitespace()
        .join("_")
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '_')
        .coalesce(|a, b| if a == '_' && b == '_' { Ok(a) } else { Err((a, b)) })
        .collect();

    let capped: String = stem
        .trim_matches(|c| c == '_' || c == '-')
        .chars()
        .take(MAX_STEM_CHARS)
        .collect();
    let capped = capped.trim_end_matches(['_', '-']);

    if capped.is_empty() {
        FALLBACK_STEM.to_string()
    } else {
        capped.to_string()
    }
}
