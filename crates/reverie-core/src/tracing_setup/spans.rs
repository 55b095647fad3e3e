//! Span definitions per operation: importance, saliency, ranking, archival.

/// Create an importance span.
#[macro_export]
macro_rules! importance_span {
    ($memory_type:expr) => {
        tracing::debug_span!("reverie.importance", memory_type = %$memory_type)
    };
}

/// Create a saliency span.
#[macro_export]
macro_rules! saliency_span {
    ($memory_count:expr) => {
        tracing::debug_span!("reverie.saliency", memory_count = $memory_count)
    };
}

/// Create a ranking span.
#[macro_export]
macro_rules! ranking_span {
    ($query:expr, $candidates:expr) => {
        tracing::info_span!("reverie.ranking", query = %$query, candidates = $candidates)
    };
}

/// Create an archival span.
#[macro_export]
macro_rules! archival_span {
    ($memory_count:expr, $max_words:expr) => {
        tracing::info_span!("reverie.archival", memory_count = $memory_count, max_words = $max_words)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const IMPORTANCE: &str = "reverie.importance";
    pub const SALIENCY: &str = "reverie.saliency";
    pub const RANKING: &str = "reverie.ranking";
    pub const ARCHIVAL: &str = "reverie.archival";
}
