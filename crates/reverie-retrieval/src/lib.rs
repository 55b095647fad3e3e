//! # reverie-retrieval
//!
//! Finds the memories an NPC should recall for a query.
//!
//! Relevance is keyword overlap between the query and a memory's content
//! and category terms. Ranking optionally blends in time-decayed saliency
//! from `reverie-decay`.

pub mod engine;
pub mod ranking;
pub mod relevance;
pub mod tokenize;

pub use engine::RetrievalEngine;
pub use ranking::{rank_memories_at, rank_memories_by_relevance, RankedMemory, RankingPipeline};
pub use relevance::{calculate_memory_relevance, KeywordRelevanceScorer};
