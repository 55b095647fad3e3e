//! Blends relevance and saliency into a single ranking score.

use chrono::{DateTime, Utc};
use reverie_core::memory::Memory;
use reverie_core::traits::{IRelevanceScorer, ISaliencyScorer};

/// Weights for the two scoring factors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScorerWeights {
    pub relevance: f64,
    pub saliency: f64,
}

impl Default for ScorerWeights {
    fn default() -> Self {
        Self {
            relevance: 0.7,
            saliency: 0.3,
        }
    }
}

/// A memory with its ranking score. Borrows the caller's memory.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedMemory<'a> {
    pub memory: &'a Memory,
    /// Final ranking score.
    pub score: f64,
    pub relevance: f64,
    /// Present only when saliency was blended in.
    pub saliency: Option<f64>,
}

/// Score every memory and sort descending.
///
/// The sort is stable: equal scores keep their input order.
pub fn score<'a>(
    query: &str,
    memories: &'a [Memory],
    saliency_scorer: Option<&dyn ISaliencyScorer>,
    relevance_scorer: &dyn IRelevanceScorer,
    weights: &ScorerWeights,
    now: DateTime<Utc>,
) -> Vec<RankedMemory<'a>> {
    let mut scored: Vec<RankedMemory<'a>> = memories
        .iter()
        .map(|memory| {
            let relevance = relevance_scorer.relevance(query, &memory.content, &memory.categories);
            let saliency = saliency_scorer.map(|s| s.saliency_at(memory, now));
            let score = match saliency {
                Some(s) => weights.relevance * relevance + weights.saliency * s,
                None => relevance,
            };
            RankedMemory {
                memory,
                score,
                relevance,
                saliency,
            }
        })
        .collect();

    // Sort by score descending.
    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    scored
}
