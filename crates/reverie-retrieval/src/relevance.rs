use std::collections::HashSet;

use reverie_core::constants::NEUTRAL_RELEVANCE;
use reverie_core::traits::IRelevanceScorer;

use crate::tokenize::{category_terms, tokenize};

/// Weight of content word overlap.
pub const WORD_OVERLAP_WEIGHT: f64 = 0.7;
/// Weight of category term overlap.
pub const CATEGORY_OVERLAP_WEIGHT: f64 = 0.3;

/// Relevance of a memory to a query, independent of time.
///
/// ```text
/// relevance = 0.7 × |Q ∩ M| / |Q| + 0.3 × |Q ∩ C| / |Q|
/// ```
///
/// `Q`, `M` and `C` are the query words, memory words, and category terms.
/// Overlap is normalized by the query, not the union, so a short query fully
/// covered by a long memory scores high. A query without words gets 0.5.
pub fn calculate_memory_relevance<S: AsRef<str>>(
    query_context: &str,
    memory_content: &str,
    memory_categories: &[S],
) -> f64 {
    let query_words = tokenize(query_context);
    if query_words.is_empty() {
        return NEUTRAL_RELEVANCE;
    }

    let memory_words = tokenize(memory_content);
    let word_overlap = overlap(&query_words, &memory_words);

    let terms = category_terms(memory_categories);
    let category_overlap = if terms.is_empty() {
        0.0
    } else {
        overlap(&query_words, &terms)
    };

    (WORD_OVERLAP_WEIGHT * word_overlap + CATEGORY_OVERLAP_WEIGHT * category_overlap)
        .clamp(0.0, 1.0)
}

/// Fraction of query words present in `other`.
fn overlap(query_words: &HashSet<String>, other: &HashSet<String>) -> f64 {
    let shared = query_words.intersection(other).count();
    shared as f64 / query_words.len() as f64
}

/// [`IRelevanceScorer`] backed by [`calculate_memory_relevance`].
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordRelevanceScorer;

impl IRelevanceScorer for KeywordRelevanceScorer {
    fn relevance(&self, query: &str, content: &str, categories: &[String]) -> f64 {
        calculate_memory_relevance(query, content, categories)
    }
}
