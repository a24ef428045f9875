//! Grid storage for a single generation.
//!
//! Cells are stored as a flat row-major array: `cells[row * cols + col]`.
//! Dimensions are fixed at construction.

use rand::Rng;

/// Errors raised by grid construction and coordinate access.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("Grid dimensions must be positive (got {rows}x{cols})")]
    InvalidDimensions { rows: usize, cols: usize },

    #[error("Cell ({row}, {col}) is outside a {rows}x{cols} grid")]
    OutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
}

/// Number of cells in a `rows x cols` grid, checking for zero and overflow.
pub fn cell_count(rows: usize, cols: usize) -> Result<usize, GridError> {
    rows.checked_mul(cols)
        .filter(|&len| len > 0)
        .ok_or(GridError::InvalidDimensions { rows, cols })
}

/// One generation of cell states on a toroidal grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Create an all-dead grid.
    ///
    /// Fails if either dimension is zero or `rows * cols` overflows `usize`.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        let len = cell_count(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            cells: vec![false; len],
        })
    }

    /// Create a grid where each cell is alive with probability 0.5.
    pub fn random<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        rng: &mut R,
    ) -> Result<Self, GridError> {
        let mut grid = Self::new(rows, cols)?;
        grid.randomize_with(rng);
        Ok(grid)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells (rows * cols).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Flat index of `(row, col)`, or `OutOfRange`.
    pub fn index(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if row >= self.rows || col >= self.cols {
            return Err(GridError::OutOfRange {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }

    /// Read a single cell.
    pub fn get(&self, row: usize, col: usize) -> Result<bool, GridError> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Overwrite a single cell. The grid is untouched on error.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<(), GridError> {
        let i = self.index(row, col)?;
        self.cells[i] = alive;
        Ok(())
    }

    /// Read a cell with toroidal wrapping of signed offsets.
    ///
    /// Uses true modulo, so the lookup stays well-defined for grids with
    /// one or two rows/columns where neighbors alias the cell itself.
    #[inline]
    pub fn get_wrapped(&self, row: isize, col: isize) -> bool {
        let r = row.rem_euclid(self.rows as isize) as usize;
        let c = col.rem_euclid(self.cols as isize) as usize;
        self.cells[r * self.cols + c]
    }

    /// Kill every cell.
    pub fn clear_all(&mut self) {
        self.cells.fill(false);
    }

    /// Redraw every cell independently from the thread-local RNG.
    pub fn randomize_all(&mut self) {
        self.randomize_with(&mut rand::thread_rng());
    }

    /// Redraw every cell independently with probability 0.5 of being alive.
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for cell in self.cells.iter_mut() {
            *cell = rng.gen_bool(0.5);
        }
    }

    /// Number of live cells.
    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Row-major view of the cell states.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Single row as a slice.
    pub fn row(&self, row: usize) -> &[bool] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    /// Iterate over `(row, col)` of every live cell.
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(move |(i, _)| (i / cols, i % cols))
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }

    /// All-dead grid with the same dimensions.
    pub(crate) fn dead_like(&self) -> Grid {
        Grid {
            rows: self.rows,
            cols: self.cols,
            cells: vec![false; self.cells.len()],
        }
    }

    pub(crate) fn same_shape(&self, other: &Grid) -> bool {
        self.rows == other.rows && self.cols == other.cols
    }
}
