use chrono::{DateTime, Utc};
use reverie_core::config::DecayConfig;
use reverie_core::memory::Memory;
use reverie_core::saliency_span;
use reverie_core::traits::ISaliencyScorer;
use tracing::debug;

use crate::formula::{self, SaliencyBreakdown};

/// Saliency engine: the decay formula bound to a decay configuration.
#[derive(Debug, Clone, Default)]
pub struct SaliencyEngine {
    config: DecayConfig,
}

impl SaliencyEngine {
    /// Create an engine with the default decay table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a custom decay configuration.
    pub fn with_config(config: DecayConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DecayConfig {
        &self.config
    }

    /// Saliency with a full breakdown of each factor.
    pub fn calculate_breakdown(&self, memory: &Memory, now: DateTime<Utc>) -> SaliencyBreakdown {
        formula::compute_breakdown(memory, now, &self.config)
    }

    /// Score a batch of memories against one time reference, in input order.
    pub fn process_batch(&self, memories: &[Memory], now: DateTime<Utc>) -> Vec<f64> {
        let _span = saliency_span!(memories.len()).entered();
        let scores: Vec<f64> = memories
            .iter()
            .map(|m| formula::compute(m, now, &self.config))
            .collect();
        debug!(scored = scores.len(), "saliency batch complete");
        scores
    }
}

impl ISaliencyScorer for SaliencyEngine {
    fn saliency_at(&self, memory: &Memory, now: DateTime<Utc>) -> f64 {
        formula::compute(memory, now, &self.config)
    }
}
