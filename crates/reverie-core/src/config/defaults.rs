//! Default values for every config section.

use crate::constants;

// Decay
pub const DEFAULT_BASE_DECAY_RATE: f64 = constants::BASE_DECAY_RATE;
pub const DEFAULT_ACCESS_BOOST_PER_ACCESS: f64 = constants::ACCESS_BOOST_PER_ACCESS;
pub const DEFAULT_MAX_ACCESS_BOOST: f64 = constants::MAX_ACCESS_BOOST;

// Retrieval
pub const DEFAULT_RELEVANCE_WEIGHT: f64 = 0.7;
pub const DEFAULT_SALIENCY_WEIGHT: f64 = 0.3;
pub const DEFAULT_RESULT_LIMIT: usize = 10;

// Retention
pub const DEFAULT_IMPORTANCE_PRESERVATION_THRESHOLD: f64 = 0.7;
pub const DEFAULT_ACCESS_FREQUENCY_PROTECTION: u64 = 3;
pub const DEFAULT_MAX_WORDS_PER_NPC: usize = 10_000;
pub const DEFAULT_DAILY_SUMMARIZATION_THRESHOLD: usize = 1_000;
pub const DEFAULT_WEEKLY_SUMMARIZATION_THRESHOLD: usize = 2_000;
pub const DEFAULT_QUARTERLY_SUMMARIZATION_THRESHOLD: usize = 4_000;
pub const DEFAULT_PROTECTED_CATEGORIES: [&str; 4] = ["trauma", "identity", "core", "secret"];

// Observability
pub const DEFAULT_LOG_LEVEL: &str = "info";
