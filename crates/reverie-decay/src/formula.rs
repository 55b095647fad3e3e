use chrono::{DateTime, Utc};
use reverie_core::config::DecayConfig;
use reverie_core::memory::{clamp_importance, Memory, MemoryType};

use crate::factors;

/// Saliency formula.
///
/// ```text
/// saliency = importance × e^(-rate × ageDays / halfLife(effectiveType))
///          + min(0.2, 0.02 × accessCount)
/// ```
///
/// Result is clamped to [0.2, 0.95].
pub fn compute(memory: &Memory, now: DateTime<Utc>, config: &DecayConfig) -> f64 {
    compute_breakdown(memory, now, config).saliency
}

/// Every intermediate value of the saliency formula.
#[derive(Debug, Clone, PartialEq)]
pub struct SaliencyBreakdown {
    pub effective_type: MemoryType,
    pub half_life_days: f64,
    pub age_days: f64,
    pub importance: f64,
    pub decay_factor: f64,
    pub access_boost: f64,
    /// Before clamping.
    pub raw_saliency: f64,
    pub saliency: f64,
}

/// Compute saliency with a full breakdown of each factor.
pub fn compute_breakdown(
    memory: &Memory,
    now: DateTime<Utc>,
    config: &DecayConfig,
) -> SaliencyBreakdown {
    let effective_type = memory.effective_type();
    let half_life_days = config.half_life_for(effective_type);
    let age_days = memory.age_days(now);
    let importance = memory.importance_or_default();

    let decay_factor = factors::temporal::calculate(age_days, half_life_days, config.base_decay_rate);
    let access_boost = factors::usage::calculate(
        memory.access_count,
        config.access_boost_per_access,
        config.max_access_boost,
    );

    let raw_saliency = importance * decay_factor + access_boost;

    SaliencyBreakdown {
        effective_type,
        half_life_days,
        age_days,
        importance,
        decay_factor,
        access_boost,
        raw_saliency,
        saliency: clamp_importance(raw_saliency),
    }
}

/// Saliency of `memory` at `current_time` with the default decay table.
///
/// Never fails: an unknown creation time counts as "just created".
pub fn calculate_memory_saliency(memory: &Memory, current_time: DateTime<Utc>) -> f64 {
    compute(memory, current_time, &DecayConfig::default())
}

/// Breakdown of every factor behind `calculate_memory_saliency`.
pub fn saliency_breakdown(memory: &Memory, current_time: DateTime<Utc>) -> SaliencyBreakdown {
    compute_breakdown(memory, current_time, &DecayConfig::default())
}

/// Saliency of `memory` right now.
pub fn calculate_memory_saliency_now(memory: &Memory) -> f64 {
    calculate_memory_saliency(memory, Utc::now())
}
