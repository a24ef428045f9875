//! Edit commands and coordinate helpers for input decoding.

use serde::{Deserialize, Serialize};

use crate::compute::{Engine, GridError};

/// A user edit to the current generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Edit {
    /// Make a cell alive.
    Set { row: usize, col: usize },
    /// Make a cell dead.
    Unset { row: usize, col: usize },
    /// Kill every cell.
    ClearAll,
    /// Clear, then redraw every cell with probability 0.5.
    Randomize,
}

impl Edit {
    /// Apply this edit to the engine's current generation.
    pub fn apply(&self, engine: &Engine) -> Result<(), GridError> {
        match *self {
            Edit::Set { row, col } => engine.set(row, col, true),
            Edit::Unset { row, col } => engine.set(row, col, false),
            Edit::ClearAll => {
                engine.clear_all();
                Ok(())
            }
            Edit::Randomize => {
                engine.randomize_all();
                Ok(())
            }
        }
    }
}

/// Map a world-space position to the `(row, col)` of the cell under it.
///
/// The result is clamped into the grid, so positions left of or above the
/// grid map to the first column/row and positions past the far edge map to
/// the last. Non-finite coordinates map to 0.
pub fn clamp_cell(x: f32, y: f32, cell_size: f32, rows: usize, cols: usize) -> (usize, usize) {
    (
        clamp_axis(y / cell_size, rows),
        clamp_axis(x / cell_size, cols),
    )
}

fn clamp_axis(v: f32, len: usize) -> usize {
    let max = len.saturating_sub(1);
    if v.is_nan() || v <= 0.0 {
        return 0;
    }
    // Saturating float-to-int cast
    (v as usize).min(max)
}
