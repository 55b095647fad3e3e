pub mod temporal;
pub mod usage;
