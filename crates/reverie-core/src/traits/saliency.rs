use chrono::{DateTime, Utc};

use crate::memory::Memory;

/// Time-decayed importance of a memory.
///
/// Implementations must return a score within
/// `[MIN_IMPORTANCE, MAX_IMPORTANCE]` for every input.
pub trait ISaliencyScorer: Send + Sync {
    /// Saliency relative to an explicit time reference.
    fn saliency_at(&self, memory: &Memory, now: DateTime<Utc>) -> f64;

    /// Saliency relative to the wall clock.
    fn saliency(&self, memory: &Memory) -> f64 {
        self.saliency_at(memory, Utc::now())
    }
}
