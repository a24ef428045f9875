//! Schema module - Configuration and seeding types for simulations.

mod config;
mod seed;

pub use config::*;
pub use seed::*;
