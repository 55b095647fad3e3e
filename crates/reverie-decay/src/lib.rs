//! # reverie-decay
//!
//! Importance and saliency for NPC memories.
//!
//! - Initial importance from type, categories, and content keywords.
//! - Saliency: exponential decay over a type-dependent half-life plus a
//!   capped access boost.
//! - Retention: protection rules and word-budget archival selection.

pub mod archival;
pub mod engine;
pub mod factors;
pub mod formula;
pub mod importance;

pub use archival::{
    is_protected, select_for_archival, storage_stats, summary_importance, ArchivalPlan, StorageStats,
    SummaryPeriod,
};
pub use engine::SaliencyEngine;
pub use formula::{
    calculate_memory_saliency, calculate_memory_saliency_now, saliency_breakdown, SaliencyBreakdown,
};
pub use importance::calculate_initial_importance;
