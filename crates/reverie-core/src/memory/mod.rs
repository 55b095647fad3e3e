pub mod half_lives;
pub mod importance;
pub mod lenient;
pub mod record;
pub mod timestamp;
pub mod types;

pub use half_lives::{effective_type, half_life_days};
pub use importance::{base_importance, clamp_importance};
pub use record::Memory;
pub use timestamp::parse_timestamp;
pub use types::MemoryType;
