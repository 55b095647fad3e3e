use serde::{Deserialize, Serialize};

use super::defaults;

/// Ranking configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Weight of relevance in the blended score.
    pub relevance_weight: f64,
    /// Weight of saliency in the blended score.
    pub saliency_weight: f64,
    /// Blend saliency into the score at all.
    pub consider_saliency: bool,
    /// Maximum ranked results returned by the engine. 0 means unlimited.
    pub default_limit: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            relevance_weight: defaults::DEFAULT_RELEVANCE_WEIGHT,
            saliency_weight: defaults::DEFAULT_SALIENCY_WEIGHT,
            consider_saliency: true,
            default_limit: defaults::DEFAULT_RESULT_LIMIT,
        }
    }
}
