//! Toroidal Life - Conway's Game of Life on a wrap-around grid.
//!
//! This crate provides the simulation core: grid storage, the B3/S23
//! transition rule with toroidal neighbor lookup, and a scheduler that
//! computes each generation in parallel row bands into a fresh buffer.
//!
//! # Architecture
//!
//! - `schema`: Configuration types and seeding for simulations
//! - `compute`: Grid, rule evaluation, band scheduling and the engine
//! - `driver`: Run/pause state, queued edits and tick pacing for frontends
//!
//! # Example
//!
//! ```rust,no_run
//! use toroidal_life::{
//!     compute::Engine,
//!     schema::{Pattern, Seed, SimulationConfig},
//! };
//!
//! let config = SimulationConfig {
//!     rows: 64,
//!     cols: 64,
//!     seed: Seed {
//!         pattern: Pattern::Glider { row: 1, col: 1 },
//!     },
//!     ..SimulationConfig::default()
//! };
//!
//! let engine = Engine::new(&config).expect("valid config");
//! engine.run(100);
//!
//! println!("Alive after 100 generations: {}", engine.stats().alive);
//! ```

pub mod compute;
pub mod driver;
pub mod schema;

// Re-export commonly used types
pub use compute::{Engine, GenerationStats, Grid, GridError};
pub use driver::{Edit, Simulation, TickRate};
pub use schema::{BandConfig, ConfigError, Pattern, Seed, SimulationConfig};
