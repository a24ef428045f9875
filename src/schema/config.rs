//! Configuration types for simulation parameters.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::Seed;
use crate::compute::{GridError, cell_count};

/// Default window width in pixels used to derive grid dimensions.
pub const DEFAULT_WINDOW_WIDTH: usize = 1280;
/// Default window height in pixels used to derive grid dimensions.
pub const DEFAULT_WINDOW_HEIGHT: usize = 720;
/// Default edge length of one cell in pixels.
pub const DEFAULT_CELL_SIZE: usize = 4;
/// Default generations per second.
pub const DEFAULT_TICK_RATE: u32 = 60;

fn default_tick_rate() -> u32 {
    DEFAULT_TICK_RATE
}

/// Top-level simulation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of grid rows.
    pub rows: usize,
    /// Number of grid columns.
    pub cols: usize,
    /// Band partitioning for parallel generation advance.
    #[serde(default)]
    pub band: BandConfig,
    /// Target generations per second for paced drivers.
    #[serde(default = "default_tick_rate")]
    pub tick_rate: u32,
    /// Initial grid contents.
    #[serde(default)]
    pub seed: Seed,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_WINDOW_HEIGHT / DEFAULT_CELL_SIZE,
            cols: DEFAULT_WINDOW_WIDTH / DEFAULT_CELL_SIZE,
            band: BandConfig::default(),
            tick_rate: DEFAULT_TICK_RATE,
            seed: Seed::default(),
        }
    }
}

/// How rows are grouped into bands for parallel computation.
///
/// Has no effect on the computed generation, only on task granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BandConfig {
    /// One band per row.
    PerRow,
    /// Fixed number of rows per band (the last band may be shorter).
    Rows { rows: usize },
    /// `rows / worker_count` rows per band, rounded up.
    #[default]
    Auto,
}

impl SimulationConfig {
    /// Derive grid dimensions from a window size and a cell size in pixels.
    pub fn from_window(width: usize, height: usize, cell_size: usize) -> Result<Self, ConfigError> {
        if cell_size == 0 {
            return Err(ConfigError::InvalidCellSize);
        }
        let config = Self {
            rows: height / cell_size,
            cols: width / cell_size,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Total number of cells, saturating at `usize::MAX`.
    #[inline]
    pub fn grid_size(&self) -> usize {
        self.rows.saturating_mul(self.cols)
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        cell_count(self.rows, self.cols)?;
        if let BandConfig::Rows { rows: 0 } = self.band {
            return Err(ConfigError::InvalidBandRows);
        }
        if self.tick_rate == 0 {
            return Err(ConfigError::InvalidTickRate);
        }
        self.seed.pattern.check_bounds(self.rows, self.cols)?;
        Ok(())
    }
}

/// Configuration loading and validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Grid dimensions must be positive (got {rows}x{cols})")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("Band row count must be non-zero")]
    InvalidBandRows,
    #[error("Tick rate must be non-zero")]
    InvalidTickRate,
    #[error("Cell size must be non-zero")]
    InvalidCellSize,
    #[error("Seed pattern cell ({row}, {col}) lies outside the grid")]
    PatternOutOfRange { row: usize, col: usize },
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl From<GridError> for ConfigError {
    fn from(err: GridError) -> Self {
        match err {
            GridError::InvalidDimensions { rows, cols } => {
                ConfigError::InvalidDimensions { rows, cols }
            }
            GridError::OutOfRange { row, col, .. } => ConfigError::PatternOutOfRange { row, col },
        }
    }
}
