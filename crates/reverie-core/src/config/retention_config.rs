use serde::{Deserialize, Serialize};

use super::defaults;

/// Protection and storage-budget rules applied before archiving memories.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetentionConfig {
    /// Memories at or above this importance are never archived.
    pub importance_preservation_threshold: f64,
    /// Memories accessed at least this often are never archived.
    pub access_frequency_protection: u64,
    /// Word budget per NPC before archival kicks in.
    pub max_words_per_npc: usize,
    /// Word totals above which daily, weekly and quarterly summaries are due.
    pub daily_summarization_threshold: usize,
    pub weekly_summarization_threshold: usize,
    pub quarterly_summarization_threshold: usize,
    /// Categories that shield a memory from archival.
    pub protected_categories: Vec<String>,
}

impl Default for RetentionConfig {
    fn default() -> Self {
        Self {
            importance_preservation_threshold: defaults::DEFAULT_IMPORTANCE_PRESERVATION_THRESHOLD,
            access_frequency_protection: defaults::DEFAULT_ACCESS_FREQUENCY_PROTECTION,
            max_words_per_npc: defaults::DEFAULT_MAX_WORDS_PER_NPC,
            daily_summarization_threshold: defaults::DEFAULT_DAILY_SUMMARIZATION_THRESHOLD,
            weekly_summarization_threshold: defaults::DEFAULT_WEEKLY_SUMMARIZATION_THRESHOLD,
            quarterly_summarization_threshold: defaults::DEFAULT_QUARTERLY_SUMMARIZATION_THRESHOLD,
            protected_categories: defaults::DEFAULT_PROTECTED_CATEGORIES
                .iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }
}
