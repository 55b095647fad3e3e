pub mod decay_config;
pub mod defaults;
pub mod observability_config;
pub mod retention_config;
pub mod retrieval_config;

pub use decay_config::DecayConfig;
pub use observability_config::ObservabilityConfig;
pub use retention_config::RetentionConfig;
pub use retrieval_config::RetrievalConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, ReverieResult};
use crate::memory::MemoryType;

/// Top-level configuration. Every section falls back to its defaults, so an
/// empty TOML document is a valid config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReverieConfig {
    pub decay: DecayConfig,
    pub retrieval: RetrievalConfig,
    pub retention: RetentionConfig,
    pub observability: ObservabilityConfig,
}

impl ReverieConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(source: &str) -> ReverieResult<Self> {
        let config: Self = toml::from_str(source).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> ReverieResult<String> {
        toml::to_string(self).map_err(|e| {
            ConfigError::Parse {
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Reject values that would break the scoring bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let decay = &self.decay;
        non_negative("decay.base_decay_rate", decay.base_decay_rate)?;
        non_negative("decay.access_boost_per_access", decay.access_boost_per_access)?;
        non_negative("decay.max_access_boost", decay.max_access_boost)?;

        for (name, days) in &decay.half_life_overrides {
            if !MemoryType::ALL.iter().any(|mt| mt.as_str() == name) {
                return Err(ConfigError::invalid(
                    format!("decay.half_life_overrides.{name}"),
                    "not a lowercase memory type name",
                ));
            }
            if *days == 0 {
                return Err(ConfigError::invalid(
                    format!("decay.half_life_overrides.{name}"),
                    "half-life must be at least one day",
                ));
            }
        }

        unit_interval("retrieval.relevance_weight", self.retrieval.relevance_weight)?;
        unit_interval("retrieval.saliency_weight", self.retrieval.saliency_weight)?;
        unit_interval(
            "retention.importance_preservation_threshold",
            self.retention.importance_preservation_threshold,
        )?;
        if self.retention.max_words_per_npc == 0 {
            return Err(ConfigError::invalid(
                "retention.max_words_per_npc",
                "word budget must be at least one word",
            ));
        }

        Ok(())
    }
}

fn non_negative(field: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("{value} must be a finite non-negative number")))
    }
}

fn unit_interval(field: &str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, format!("{value} must be within [0, 1]")))
    }
}
