/// Reverie version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Lower bound for importance and saliency scores.
pub const MIN_IMPORTANCE: f64 = 0.2;

/// Upper bound for importance and saliency scores.
pub const MAX_IMPORTANCE: f64 = 0.95;

/// Importance assumed when a record carries none (or a non-finite one).
pub const DEFAULT_IMPORTANCE: f64 = 0.5;

/// Exponential decay rate applied per half-life.
pub const BASE_DECAY_RATE: f64 = 0.05;

/// Saliency added per recorded access.
pub const ACCESS_BOOST_PER_ACCESS: f64 = 0.02;

/// Ceiling on the total access boost.
pub const MAX_ACCESS_BOOST: f64 = 0.2;

/// Relevance returned for a query with no tokens.
pub const NEUTRAL_RELEVANCE: f64 = 0.5;

/// Seconds in a day, for fractional age computation.
pub const SECONDS_PER_DAY: f64 = 86_400.0;
