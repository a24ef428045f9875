//! Seed types for initializing a grid.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::compute::{Grid, GridError};

/// Initial grid contents for a simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seed {
    /// Pattern to use for seeding.
    pub pattern: Pattern,
}

impl Default for Seed {
    fn default() -> Self {
        Self {
            pattern: Pattern::Random { seed: None },
        }
    }
}

/// Initial patterns.
///
/// Shape patterns are anchored at the top-left corner of their bounding
/// box; offsets past the grid edge wrap around.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Pattern {
    /// All cells dead.
    Empty,
    /// Every cell alive with probability 0.5.
    Random {
        /// RNG seed; `None` draws from the thread-local RNG.
        #[serde(default)]
        seed: Option<u64>,
    },
    /// Explicit list of live `(row, col)` cells.
    Cells { cells: Vec<(usize, usize)> },
    /// 2x2 still life.
    Block { row: usize, col: usize },
    /// Period-2 oscillator, horizontal phase.
    Blinker { row: usize, col: usize },
    /// South-east travelling glider.
    Glider { row: usize, col: usize },
}

const BLOCK: &[(usize, usize)] = &[(0, 0), (0, 1), (1, 0), (1, 1)];
const BLINKER: &[(usize, usize)] = &[(0, 0), (0, 1), (0, 2)];
const GLIDER: &[(usize, usize)] = &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];

impl Pattern {
    /// Anchor coordinate of the pattern, if it has one.
    pub fn anchor(&self) -> Option<(usize, usize)> {
        match self {
            Pattern::Block { row, col }
            | Pattern::Blinker { row, col }
            | Pattern::Glider { row, col } => Some((*row, *col)),
            _ => None,
        }
    }

    fn shape(&self) -> &'static [(usize, usize)] {
        match self {
            Pattern::Block { .. } => BLOCK,
            Pattern::Blinker { .. } => BLINKER,
            Pattern::Glider { .. } => GLIDER,
            _ => &[],
        }
    }

    /// Check that every explicit coordinate lies inside a `rows x cols` grid.
    pub fn check_bounds(&self, rows: usize, cols: usize) -> Result<(), GridError> {
        let out_of_range = |row: usize, col: usize| GridError::OutOfRange {
            row,
            col,
            rows,
            cols,
        };
        if let Some((row, col)) = self.anchor() {
            if row >= rows || col >= cols {
                return Err(out_of_range(row, col));
            }
        }
        if let Pattern::Cells { cells } = self {
            if let Some(&(row, col)) = cells.iter().find(|&&(r, c)| r >= rows || c >= cols) {
                return Err(out_of_range(row, col));
            }
        }
        Ok(())
    }
}

impl Seed {
    /// Generate an initial grid from this seed.
    pub fn generate(&self, rows: usize, cols: usize) -> Result<Grid, GridError> {
        let mut grid = Grid::new(rows, cols)?;
        self.apply(&mut grid)?;
        Ok(grid)
    }

    /// Write this seed's pattern into an existing grid, replacing its contents.
    pub fn apply(&self, grid: &mut Grid) -> Result<(), GridError> {
        self.pattern.check_bounds(grid.rows(), grid.cols())?;
        grid.clear_all();

        match &self.pattern {
            Pattern::Empty => {}
            Pattern::Random { seed: Some(seed) } => {
                grid.randomize_with(&mut StdRng::seed_from_u64(*seed));
            }
            Pattern::Random { seed: None } => grid.randomize_all(),
            Pattern::Cells { cells } => {
                for &(row, col) in cells {
                    grid.set(row, col, true)?;
                }
            }
            shape => {
                let (row, col) = shape.anchor().unwrap_or_default();
                for &(dr, dc) in shape.shape() {
                    grid.set((row + dr) % grid.rows(), (col + dc) % grid.cols(), true)?;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let grid = Seed {
            pattern: Pattern::Empty,
        }
        .generate(5, 5)
        .unwrap();
        assert_eq!(grid.alive_count(), 0);
    }

    #[test]
    fn test_seeded_random_is_reproducible() {
        let seed = Seed {
            pattern: Pattern::Random { seed: Some(99) },
        };
        let a = seed.generate(40, 40).unwrap();
        let b = seed.generate(40, 40).unwrap();
        assert_eq!(a, b);
        assert!(a.alive_count() > 0);
    }

    #[test]
    fn test_glider_placement() {
        let grid = Seed {
            pattern: Pattern::Glider { row: 1, col: 2 },
        }
        .generate(6, 6)
        .unwrap();
        let alive: Vec<_> = grid.alive_cells().collect();
        assert_eq!(alive, vec![(1, 3), (2, 4), (3, 2), (3, 3), (3, 4)]);
    }

    #[test]
    fn test_shape_wraps_at_edge() {
        let grid = Seed {
            pattern: Pattern::Blinker { row: 0, col: 3 },
        }
        .generate(4, 4)
        .unwrap();
        let alive: Vec<_> = grid.alive_cells().collect();
        assert_eq!(alive, vec![(0, 0), (0, 1), (0, 3)]);
    }

    #[test]
    fn test_out_of_range_anchor() {
        let seed = Seed {
            pattern: Pattern::Block { row: 4, col: 0 },
        };
        assert!(matches!(
            seed.generate(4, 4),
            Err(GridError::OutOfRange { row: 4, col: 0, .. })
        ));
    }

    #[test]
    fn test_out_of_range_cells() {
        let seed = Seed {
            pattern: Pattern::Cells {
                cells: vec![(0, 0), (1, 9)],
            },
        };
        assert!(seed.generate(4, 4).is_err());
        assert_eq!(seed.generate(4, 10).unwrap().alive_count(), 2);
    }

    #[test]
    fn test_apply_replaces_contents() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set(4, 4, true).unwrap();
        Seed {
            pattern: Pattern::Block { row: 0, col: 0 },
        }
        .apply(&mut grid)
        .unwrap();
        assert_eq!(grid.alive_count(), 4);
        assert!(!grid.get(4, 4).unwrap());
    }

    #[test]
    fn test_json_roundtrip_tag() {
        let json = r#"{"pattern":{"type":"Glider","row":3,"col":4}}"#;
        let seed: Seed = serde_json::from_str(json).unwrap();
        assert_eq!(seed.pattern, Pattern::Glider { row: 3, col: 4 });

        let random: Seed = serde_json::from_str(r#"{"pattern":{"type":"Random"}}"#).unwrap();
        assert_eq!(random, Seed::default());
    }
}
