mod relevance;
mod saliency;

pub use relevance::IRelevanceScorer;
pub use saliency::ISaliencyScorer;
