//! Word-boundary tokenization shared by relevance scoring.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\w+\b").unwrap());

/// Distinct lowercase word tokens of `text`.
pub fn tokenize(text: &str) -> HashSet<String> {
    let lower = text.to_lowercase();
    WORD_RE
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Distinct lowercase terms from category tags split on `_`.
///
/// `"family_loss"` contributes `family` and `loss`.
pub fn category_terms<S: AsRef<str>>(categories: &[S]) -> HashSet<String> {
    categories
        .iter()
        .flat_map(|c| {
            c.as_ref()
                .to_lowercase()
                .split('_')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(String::from)
                .collect::<Vec<_>>()
        })
        .collect()
}
