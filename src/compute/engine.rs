//! Engine - owns the current generation and serializes access to it.
//!
//! The grid is double buffered: `advance` computes into the spare buffer
//! and swaps it in, so readers only ever see complete generations. The
//! current grid, the spare buffer and the generation counter live behind
//! a single mutex, which makes edits and `advance` mutually exclusive.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use log::{debug, info, trace};
use rand::Rng;

use crate::schema::{BandConfig, ConfigError, Seed, SimulationConfig};

use super::{Grid, GridError, advance_into};

struct EngineState {
    current: Grid,
    /// Spare buffer, same dimensions as `current`. Contents are stale.
    next: Grid,
    generation: u64,
}

/// Thread-safe Game of Life engine.
pub struct Engine {
    rows: usize,
    cols: usize,
    band: BandConfig,
    state: Mutex<EngineState>,
}

impl Engine {
    /// Create an engine from a validated configuration, seeding the initial grid.
    pub fn new(config: &SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = config.seed.generate(config.rows, config.cols)?;

        info!(
            "Engine created: {}x{} grid, {:?} bands, {} alive",
            config.rows,
            config.cols,
            config.band,
            grid.alive_count()
        );

        Ok(Self::from_grid(grid, config.band))
    }

    /// Wrap an existing grid as generation 0.
    pub fn from_grid(grid: Grid, band: BandConfig) -> Self {
        let next = grid.dead_like();
        Self {
            rows: grid.rows(),
            cols: grid.cols(),
            band,
            state: Mutex::new(EngineState {
                current: grid,
                next,
                generation: 0,
            }),
        }
    }

    // Every mutation of `current` is a single-cell write, a full-grid fill
    // or a swap after `advance_into` has finished, so a panic while the
    // lock is held never leaves a partial generation. Poison is ignored.
    fn lock(&self) -> MutexGuard<'_, EngineState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Band partitioning used by `advance`.
    pub fn band(&self) -> BandConfig {
        self.band
    }

    /// Number of generations advanced since construction.
    pub fn generation(&self) -> u64 {
        self.lock().generation
    }

    /// Advance one generation. Returns the new generation number.
    pub fn advance(&self) -> u64 {
        let mut guard = self.lock();
        let state = &mut *guard;

        advance_into(&state.current, &mut state.next, &self.band);
        std::mem::swap(&mut state.current, &mut state.next);
        state.generation += 1;

        trace!(
            "Generation {}: {} alive",
            state.generation,
            state.current.alive_count()
        );
        state.generation
    }

    /// Advance one generation unless `stop` is set when dispatch begins.
    ///
    /// Once bands are dispatched the generation always runs to completion.
    /// Returns whether a generation was computed.
    pub fn advance_unless(&self, stop: &AtomicBool) -> bool {
        if stop.load(Ordering::Relaxed) {
            debug!("Advance skipped: stop requested");
            return false;
        }
        self.advance();
        true
    }

    /// Advance `generations` times.
    pub fn run(&self, generations: u64) {
        for _ in 0..generations {
            self.advance();
        }
    }

    /// Read a single cell of the current generation.
    pub fn get(&self, row: usize, col: usize) -> Result<bool, GridError> {
        self.lock().current.get(row, col)
    }

    /// Overwrite a single cell of the current generation.
    pub fn set(&self, row: usize, col: usize, alive: bool) -> Result<(), GridError> {
        self.lock().current.set(row, col, alive)
    }

    /// Kill every cell.
    pub fn clear_all(&self) {
        self.lock().current.clear_all();
        debug!("Grid cleared");
    }

    /// Clear, then redraw every cell from the thread-local RNG.
    pub fn randomize_all(&self) {
        self.randomize_with(&mut rand::thread_rng());
    }

    /// Clear, then redraw every cell from `rng`.
    pub fn randomize_with<R: Rng + ?Sized>(&self, rng: &mut R) {
        let mut state = self.lock();
        state.current.clear_all();
        state.current.randomize_with(rng);
        debug!("Grid randomized: {} alive", state.current.alive_count());
    }

    /// Replace the current generation with a seed pattern.
    pub fn reseed(&self, seed: &Seed) -> Result<(), GridError> {
        seed.apply(&mut self.lock().current)
    }

    /// Clone of the current generation.
    pub fn snapshot(&self) -> Grid {
        self.lock().current.clone()
    }

    /// Run `f` against the current generation without cloning it.
    ///
    /// Edits and `advance` are blocked until `f` returns.
    pub fn with_grid<R>(&self, f: impl FnOnce(&Grid) -> R) -> R {
        f(&self.lock().current)
    }

    /// Statistics for the current generation.
    pub fn stats(&self) -> GenerationStats {
        let state = self.lock();
        GenerationStats::from_grid(&state.current, state.generation)
    }
}

/// Generation statistics for monitoring.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GenerationStats {
    pub generation: u64,
    pub alive: usize,
    pub total: usize,
    pub alive_fraction: f64,
}

impl GenerationStats {
    /// Compute statistics from a grid.
    pub fn from_grid(grid: &Grid, generation: u64) -> Self {
        let alive = grid.alive_count();
        let total = grid.len();
        Self {
            generation,
            alive,
            total,
            alive_fraction: alive as f64 / total as f64,
        }
    }
}
