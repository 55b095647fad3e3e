/// Time-independent similarity between a query and a memory.
///
/// Implementations must return a score within `[0.0, 1.0]`.
pub trait IRelevanceScorer: Send + Sync {
    fn relevance(&self, query: &str, content: &str, categories: &[String]) -> f64;
}
