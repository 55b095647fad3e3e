//! Fixed keyword lists for content-based importance boosts.
//!
//! Matched as lowercase substrings, so stems cover inflections
//! ("betray" hits "betrayed" and "betrayal").

/// Strong emotions.
pub const EMOTIONAL_TERMS: &[&str] = &[
    "loved",
    "in love",
    "hated",
    "hatred",
    "fear",
    "afraid",
    "terrified",
    "angry",
    "furious",
    "enraged",
    "grief",
    "devastated",
    "heartbroken",
    "betray",
    "ashamed",
    "humiliated",
    "jealous",
    "lonely",
    "joy",
    "elated",
    "proud",
    "desperate",
];

/// Events that reshape a life.
pub const LIFE_EVENT_TERMS: &[&str] = &[
    "died",
    "death",
    "killed",
    "murdered",
    "funeral",
    "was born",
    "gave birth",
    "married",
    "wedding",
    "divorce",
    "exiled",
    "banished",
    "crowned",
    "coronation",
    "graduated",
    "orphaned",
    "inherited",
];

/// Intensity adverbs.
pub const INTENSITY_TERMS: &[&str] = &[
    "extremely",
    "utterly",
    "completely",
    "absolutely",
    "incredibly",
    "deeply",
    "profoundly",
    "totally",
    "intensely",
    "overwhelmingly",
];

/// Categories that mark a memory as inherently important.
pub const HIGH_IMPORTANCE_CATEGORIES: &[&str] =
    &["trauma", "accomplishment", "identity", "relationship"];

/// True when any term occurs in the already-lowercased text.
pub fn contains_any(lowercase_text: &str, terms: &[&str]) -> bool {
    terms.iter().any(|term| lowercase_text.contains(term))
}
