use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::memory::{half_life_days, MemoryType};

/// Saliency decay configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DecayConfig {
    /// Exponential rate applied per half-life.
    pub base_decay_rate: f64,
    /// Saliency added per recorded access.
    pub access_boost_per_access: f64,
    /// Ceiling on the total access boost.
    pub max_access_boost: f64,
    /// Per-type half-life overrides (days). Key is the memory type name.
    pub half_life_overrides: HashMap<String, u32>,
}

impl DecayConfig {
    /// Half-life for a type, honoring overrides.
    pub fn half_life_for(&self, memory_type: MemoryType) -> f64 {
        self.half_life_overrides
            .get(memory_type.as_str())
            .copied()
            .unwrap_or_else(|| half_life_days(memory_type)) as f64
    }
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            base_decay_rate: defaults::DEFAULT_BASE_DECAY_RATE,
            access_boost_per_access: defaults::DEFAULT_ACCESS_BOOST_PER_ACCESS,
            max_access_boost: defaults::DEFAULT_MAX_ACCESS_BOOST,
            half_life_overrides: HashMap::new(),
        }
    }
}
