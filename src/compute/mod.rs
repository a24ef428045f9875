//! Compute module - grid storage, transition rule and generation scheduling.

mod engine;
mod grid;
mod rules;
mod scheduler;

pub use engine::*;
pub use grid::*;
pub use rules::*;
pub use scheduler::*;
