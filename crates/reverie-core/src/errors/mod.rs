mod config_error;

pub use config_error::ConfigError;

/// Top-level error for the fallible edges of the workspace.
///
/// Scoring itself never fails; only config loading, serialization, and strict
/// parsing can return one of these.
#[derive(Debug, thiserror::Error)]
pub enum ReverieError {
    #[error("unknown memory type: {name}")]
    UnknownMemoryType { name: String },

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type ReverieResult<T> = Result<T, ReverieError>;
