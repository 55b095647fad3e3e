//! RetrievalEngine: ranking bound to a configuration, with logging.

use chrono::{DateTime, Utc};
use reverie_core::config::{ReverieConfig, RetrievalConfig};
use reverie_core::memory::Memory;
use reverie_core::ranking_span;
use reverie_decay::SaliencyEngine;
use tracing::{debug, info};

use crate::ranking::{RankedMemory, RankingPipeline, ScorerWeights};
use crate::relevance::KeywordRelevanceScorer;

/// The main retrieval engine. Owns the saliency engine, the relevance
/// scorer, and a ranking pipeline built from config.
#[derive(Debug, Clone)]
pub struct RetrievalEngine {
    saliency: SaliencyEngine,
    relevance: KeywordRelevanceScorer,
    pipeline: RankingPipeline,
}

impl RetrievalEngine {
    /// Engine with default decay and retrieval settings.
    pub fn new() -> Self {
        Self::from_config(&ReverieConfig::default())
    }

    pub fn from_config(config: &ReverieConfig) -> Self {
        Self {
            saliency: SaliencyEngine::with_config(config.decay.clone()),
            relevance: KeywordRelevanceScorer,
            pipeline: pipeline_from(&config.retrieval),
        }
    }

    pub fn pipeline(&self) -> &RankingPipeline {
        &self.pipeline
    }

    pub fn saliency_engine(&self) -> &SaliencyEngine {
        &self.saliency
    }

    /// Rank against the wall clock.
    pub fn rank<'a>(&self, query: &str, memories: &'a [Memory]) -> Vec<RankedMemory<'a>> {
        self.rank_at(query, memories, Utc::now())
    }

    /// Rank against an explicit time reference.
    pub fn rank_at<'a>(
        &self,
        query: &str,
        memories: &'a [Memory],
        now: DateTime<Utc>,
    ) -> Vec<RankedMemory<'a>> {
        let _span = ranking_span!(query, memories.len()).entered();

        if memories.is_empty() {
            debug!("no memories to rank");
            return Vec::new();
        }

        let ranked = self
            .pipeline
            .rank(query, memories, &self.saliency, &self.relevance, now);

        info!(
            candidates = memories.len(),
            returned = ranked.len(),
            top_score = ranked.first().map(|r| r.score),
            "ranking complete"
        );

        ranked
    }
}

impl Default for RetrievalEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn pipeline_from(config: &RetrievalConfig) -> RankingPipeline {
    let weights = ScorerWeights {
        relevance: config.relevance_weight,
        saliency: config.saliency_weight,
    };
    let limit = (config.default_limit > 0).then_some(config.default_limit);
    RankingPipeline::new(weights, config.consider_saliency).with_limit(limit)
}
