//! RankingPipeline: score → sort → truncate.

pub mod scorer;

use chrono::{DateTime, Utc};
use reverie_core::memory::Memory;
use reverie_core::traits::{IRelevanceScorer, ISaliencyScorer};
use reverie_decay::SaliencyEngine;

use crate::relevance::KeywordRelevanceScorer;

pub use scorer::{RankedMemory, ScorerWeights};

/// Ranking pipeline: blended scoring, stable descending sort, optional limit.
#[derive(Debug, Clone)]
pub struct RankingPipeline {
    weights: ScorerWeights,
    consider_saliency: bool,
    limit: Option<usize>,
}

impl RankingPipeline {
    pub fn new(weights: ScorerWeights, consider_saliency: bool) -> Self {
        Self {
            weights,
            consider_saliency,
            limit: None,
        }
    }

    /// Keep at most `limit` results. `None` keeps everything.
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    pub fn weights(&self) -> &ScorerWeights {
        &self.weights
    }

    pub fn consider_saliency(&self) -> bool {
        self.consider_saliency
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Run the pipeline over `memories`.
    pub fn rank<'a>(
        &self,
        query: &str,
        memories: &'a [Memory],
        saliency_scorer: &dyn ISaliencyScorer,
        relevance_scorer: &dyn IRelevanceScorer,
        now: DateTime<Utc>,
    ) -> Vec<RankedMemory<'a>> {
        let saliency = self.consider_saliency.then_some(saliency_scorer);
        let mut ranked = scorer::score(
            query,
            memories,
            saliency,
            relevance_scorer,
            &self.weights,
            now,
        );
        if let Some(limit) = self.limit {
            ranked.truncate(limit);
        }
        ranked
    }
}

impl Default for RankingPipeline {
    fn default() -> Self {
        Self::new(ScorerWeights::default(), true)
    }
}

/// Rank `memories` against `query_context` at `current_time`.
///
/// With `consider_saliency`, `score = 0.7 × relevance + 0.3 × saliency`;
/// otherwise `score = relevance`. Descending, ties in input order.
pub fn rank_memories_at<'a>(
    query_context: &str,
    memories: &'a [Memory],
    consider_saliency: bool,
    current_time: DateTime<Utc>,
) -> Vec<(&'a Memory, f64)> {
    RankingPipeline::new(ScorerWeights::default(), consider_saliency)
        .rank(
            query_context,
            memories,
            &SaliencyEngine::new(),
            &KeywordRelevanceScorer,
            current_time,
        )
        .into_iter()
        .map(|r| (r.memory, r.score))
        .collect()
}

/// Rank `memories` against `query_context` using the wall clock.
pub fn rank_memories_by_relevance<'a>(
    query_context: &str,
    memories: &'a [Memory],
    consider_saliency: bool,
) -> Vec<(&'a Memory, f64)> {
    rank_memories_at(query_context, memories, consider_saliency, Utc::now())
}
