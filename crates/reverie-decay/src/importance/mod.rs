//! Initial importance, computed once when a memory is created.

pub mod keywords;

use std::collections::HashSet;

use reverie_core::memory::{base_importance, clamp_importance, MemoryType};
use reverie_core::importance_span;

use keywords::{
    contains_any, EMOTIONAL_TERMS, HIGH_IMPORTANCE_CATEGORIES, INTENSITY_TERMS, LIFE_EVENT_TERMS,
};

pub const CATEGORY_BOOST: f64 = 0.05;
pub const MAX_CATEGORY_BOOST: f64 = 0.2;
pub const EMOTIONAL_BOOST: f64 = 0.1;
pub const LIFE_EVENT_BOOST: f64 = 0.15;
pub const INTENSITY_BOOST: f64 = 0.05;

/// Score how important a new memory is.
///
/// ```text
/// importance = base(type)
///   + min(0.2, 0.05 × distinct high-importance categories)
///   + 0.10 if emotional wording
///   + 0.15 if a life event
///   + 0.05 if an intensity adverb
/// ```
///
/// Result is clamped to [0.2, 0.95]. Empty content and categories simply
/// yield the base value.
pub fn calculate_initial_importance<S: AsRef<str>>(
    content: &str,
    memory_type: MemoryType,
    categories: &[S],
) -> f64 {
    let _span = importance_span!(memory_type).entered();

    let mut importance = base_importance(memory_type);
    importance += category_boost(categories);

    let text = content.to_lowercase();
    if contains_any(&text, EMOTIONAL_TERMS) {
        importance += EMOTIONAL_BOOST;
    }
    if contains_any(&text, LIFE_EVENT_TERMS) {
        importance += LIFE_EVENT_BOOST;
    }
    if contains_any(&text, INTENSITY_TERMS) {
        importance += INTENSITY_BOOST;
    }

    let result = clamp_importance(importance);
    tracing::trace!(raw = importance, result, "initial importance");
    result
}

/// Boost from distinct high-importance categories, capped.
fn category_boost<S: AsRef<str>>(categories: &[S]) -> f64 {
    let matched: HashSet<String> = categories
        .iter()
        .map(|c| c.as_ref().trim().to_lowercase())
        .filter(|c| HIGH_IMPORTANCE_CATEGORIES.contains(&c.as_str()))
        .collect();

    (matched.len() as f64 * CATEGORY_BOOST).min(MAX_CATEGORY_BOOST)
}
