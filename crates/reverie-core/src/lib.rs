//! # reverie-core
//!
//! Foundation crate for NPC memory scoring.
//! Defines the memory record, the fixed type tables, traits, errors, config,
//! and tracing setup. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod memory;
pub mod traits;
pub mod tracing_setup;

// Re-export the most commonly used types at the crate root.
pub use config::ReverieConfig;
pub use errors::{ReverieError, ReverieResult};
pub use memory::{Memory, MemoryType};
