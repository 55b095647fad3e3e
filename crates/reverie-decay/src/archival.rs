//! Retention rules: which memories may be archived when an NPC runs over its
//! word budget, and how important a summary of several memories is.

use reverie_core::archival_span;
use reverie_core::config::RetentionConfig;
use reverie_core::constants::DEFAULT_IMPORTANCE;
use reverie_core::memory::{Memory, MemoryType};
use tracing::{debug, info};

/// Whitespace-separated word count.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// A memory is protected from archival when it is important, frequently
/// recalled, a core memory, or tagged with a protected category.
pub fn is_protected(memory: &Memory, config: &RetentionConfig) -> bool {
    memory.importance_or_default() >= config.importance_preservation_threshold
        || memory.access_count >= config.access_frequency_protection
        || memory.memory_type == MemoryType::Core
        || config
            .protected_categories
            .iter()
            .any(|c| memory.has_category(c))
}

/// Outcome of an archival pass over one NPC's memories.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArchivalPlan {
    /// Ids chosen for archival, in selection order.
    pub archived_ids: Vec<String>,
    pub words_before: usize,
    pub words_removed: usize,
    pub words_after: usize,
}

impl ArchivalPlan {
    /// True when the remaining words still exceed the budget.
    pub fn over_budget(&self, max_words: usize) -> bool {
        self.words_after > max_words
    }
}

/// Pick memories to archive until the word total fits `max_words_per_npc`.
///
/// Candidates are the unprotected memories, least important first, oldest
/// first among equals (unknown creation times sort first). Selection stops
/// as soon as enough words are removed; the budget may stay exceeded when
/// protected memories alone are over it.
pub fn select_for_archival(memories: &[Memory], config: &RetentionConfig) -> ArchivalPlan {
    let _span = archival_span!(memories.len(), config.max_words_per_npc).entered();

    let words_before: usize = memories.iter().map(|m| count_words(&m.content)).sum();
    if words_before <= config.max_words_per_npc {
        return ArchivalPlan {
            words_before,
            words_after: words_before,
            ..Default::default()
        };
    }

    let mut candidates: Vec<&Memory> = memories
        .iter()
        .filter(|m| !is_protected(m, config))
        .collect();
    candidates.sort_by(|a, b| {
        a.importance_or_default()
            .total_cmp(&b.importance_or_default())
            .then_with(|| a.created_at.cmp(&b.created_at))
    });

    let words_to_remove = words_before - config.max_words_per_npc;
    let mut plan = ArchivalPlan {
        words_before,
        ..Default::default()
    };

    for memory in candidates {
        if plan.words_removed >= words_to_remove {
            break;
        }
        plan.words_removed += count_words(&memory.content);
        plan.archived_ids.push(memory.id.clone());
        debug!(memory_id = %memory.id, importance = memory.importance_or_default(), "selected for archival");
    }

    plan.words_after = words_before - plan.words_removed;
    info!(
        archived = plan.archived_ids.len(),
        words_before,
        words_after = plan.words_after,
        "archival selection complete"
    );
    plan
}

/// Summarization period whose word threshold an NPC has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryPeriod {
    Daily,
    Weekly,
    Quarterly,
}

/// Word-budget report for one NPC's memories.
#[derive(Debug, Clone, PartialEq)]
pub struct StorageStats {
    pub total_memories: usize,
    pub total_words: usize,
    pub word_limit: usize,
    /// `total_words` as a percentage of `word_limit`; may exceed 100.
    pub usage_percentage: f64,
    pub core_memories: usize,
    pub regular_memories: usize,
    /// Periods whose threshold is exceeded, shortest first.
    pub summaries_due: Vec<SummaryPeriod>,
    /// Above the daily summarization threshold.
    pub needs_summarization: bool,
    /// Above 80% of the word limit.
    pub approaching_limit: bool,
    pub over_limit: bool,
}

/// Fraction of the word limit past which an NPC is approaching it.
const APPROACHING_LIMIT_RATIO: f64 = 0.8;

/// Report word usage against the retention budget. All comparisons are
/// strict: exactly at a threshold is not over it.
pub fn storage_stats(memories: &[Memory], config: &RetentionConfig) -> StorageStats {
    let total_words: usize = memories.iter().map(|m| count_words(&m.content)).sum();
    let word_limit = config.max_words_per_npc;
    let count_type = |t: MemoryType| memories.iter().filter(|m| m.memory_type == t).count();

    let summaries_due = [
        (SummaryPeriod::Daily, config.daily_summarization_threshold),
        (SummaryPeriod::Weekly, config.weekly_summarization_threshold),
        (SummaryPeriod::Quarterly, config.quarterly_summarization_threshold),
    ]
    .into_iter()
    .filter(|&(_, threshold)| total_words > threshold)
    .map(|(period, _)| period)
    .collect();

    let stats = StorageStats {
        total_memories: memories.len(),
        total_words,
        word_limit,
        usage_percentage: total_words as f64 / word_limit.max(1) as f64 * 100.0,
        core_memories: count_type(MemoryType::Core),
        regular_memories: count_type(MemoryType::Regular),
        summaries_due,
        needs_summarization: total_words > config.daily_summarization_threshold,
        approaching_limit: total_words as f64 > word_limit as f64 * APPROACHING_LIMIT_RATIO,
        over_limit: total_words > word_limit,
    };
    debug!(
        total_words,
        word_limit,
        over_limit = stats.over_limit,
        "storage stats computed"
    );
    stats
}

/// Importance of a summary built from `memories`.
///
/// Weighted mean where each importance is weighted by its own square, so the
/// most important constituents dominate. Empty input gives 0.5.
pub fn summary_importance(memories: &[Memory]) -> f64 {
    let (weighted_sum, weight_sum) = memories.iter().fold((0.0, 0.0), |(ws, w), m| {
        let importance = m.importance_or_default();
        let weight = importance * importance;
        (ws + weight * importance, w + weight)
    });

    if weight_sum > 0.0 {
        weighted_sum / weight_sum
    } else {
        DEFAULT_IMPORTANCE
    }
}
