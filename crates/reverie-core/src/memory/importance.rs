use super::types::MemoryType;
use crate::constants::{MAX_IMPORTANCE, MIN_IMPORTANCE};

/// Starting importance for a freshly created memory of the given type.
pub fn base_importance(memory_type: MemoryType) -> f64 {
    match memory_type {
        MemoryType::Core => 0.9,
        MemoryType::Trauma => 0.85,
        MemoryType::Accomplishment => 0.75,
        MemoryType::Relationship => 0.7,
        MemoryType::Regular => 0.6,
        MemoryType::Mundane => 0.4,
    }
}

/// Clamp a score into `[MIN_IMPORTANCE, MAX_IMPORTANCE]`.
///
/// NaN collapses to the lower bound so callers always get a usable score.
pub fn clamp_importance(value: f64) -> f64 {
    if value.is_nan() {
        return MIN_IMPORTANCE;
    }
    value.clamp(MIN_IMPORTANCE, MAX_IMPORTANCE)
}
