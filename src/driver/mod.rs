//! Driver module - the in-process surface used by a frontend.
//!
//! A frontend (window, renderer, input decoder) is not part of this crate.
//! It reads snapshots from the engine, turns device input into [`Edit`]s
//! and calls [`Simulation::tick`] once per frame.

mod input;
mod simulation;
mod tick;

pub use input::*;
pub use simulation::*;
pub use tick::*;
