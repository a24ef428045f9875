//! B3/S23 transition rule.
//!
//! The rule is evaluated per cell against a frozen input grid. Neighbors
//! are looked up with toroidal wrapping in both axes.

use super::Grid;

/// Relative offsets `(dr, dc)` of the Moore neighborhood, excluding the cell itself.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Count the live cells among the 8 wrapped neighbors of `(row, col)`.
///
/// On grids with fewer than 3 rows or columns, several offsets wrap onto
/// the same cell (or the cell itself); each offset is still counted once.
#[inline]
pub fn alive_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let r = row as isize;
    let c = col as isize;
    NEIGHBOR_OFFSETS
        .iter()
        .filter(|&&(dr, dc)| grid.get_wrapped(r + dr, c + dc))
        .count() as u8
}

/// Apply the B3/S23 rule to a cell state and its live-neighbor count.
#[inline]
pub fn apply_rule(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2) | (true, 3) | (false, 3))
}

/// Next-generation state of `(row, col)`.
///
/// Panics if the coordinate is outside the grid; callers inside the
/// scheduler only ever pass in-range coordinates.
#[inline]
pub fn next_state(grid: &Grid, row: usize, col: usize) -> bool {
    assert!(
        row < grid.rows() && col < grid.cols(),
        "Cell ({}, {}) is outside a {}x{} grid",
        row,
        col,
        grid.rows(),
        grid.cols()
    );
    let alive = grid.cells()[row * grid.cols() + col];
    apply_rule(alive, alive_neighbors(grid, row, col))
}

/// Fill `out` with the next state of every cell in `row`.
///
/// The interior columns read the three source rows directly; only the
/// first and last column go through the wrapped lookup.
pub fn next_row_into(grid: &Grid, row: usize, out: &mut [bool]) {
    let rows = grid.rows();
    let cols = grid.cols();
    debug_assert_eq!(out.len(), cols);

    if cols < 3 {
        for (col, cell) in out.iter_mut().enumerate() {
            *cell = next_state(grid, row, col);
        }
        return;
    }

    let above = grid.row((row + rows - 1) % rows);
    let here = grid.row(row);
    let below = grid.row((row + 1) % rows);

    out[0] = next_state(grid, row, 0);
    for col in 1..cols - 1 {
        let neighbors = above[col - 1] as u8
            + above[col] as u8
            + above[col + 1] as u8
            + here[col - 1] as u8
            + here[col + 1] as u8
            + below[col - 1] as u8
            + below[col] as u8
            + below[col + 1] as u8;
        out[col] = apply_rule(here[col], neighbors);
    }
    out[cols - 1] = next_state(grid, row, cols - 1);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_from(rows: &[&str]) -> Grid {
        let mut grid = Grid::new(rows.len(), rows[0].len()).unwrap();
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                grid.set(r, c, ch == '#').unwrap();
            }
        }
        grid
    }

    #[test]
    fn test_rule_table() {
        for n in 0..=8u8 {
            assert_eq!(apply_rule(true, n), n == 2 || n == 3, "survival with {}", n);
            assert_eq!(apply_rule(false, n), n == 3, "birth with {}", n);
        }
    }

    #[test]
    fn test_corner_cell_on_3x3_sees_all_wrapped_neighbors() {
        let grid = grid_from(&["#..", "...", "..."]);

        // Every other cell on a 3x3 torus is a neighbor of (0, 0), so each
        // of them sees exactly one live neighbor and the corner sees none.
        assert_eq!(alive_neighbors(&grid, 0, 0), 0);
        for r in 0..3 {
            for c in 0..3 {
                if (r, c) != (0, 0) {
                    assert_eq!(alive_neighbors(&grid, r, c), 1, "cell ({}, {})", r, c);
                }
            }
        }
        for r in 0..3 {
            for c in 0..3 {
                assert!(!next_state(&grid, r, c));
            }
        }
    }

    #[test]
    fn test_full_3x3_torus_dies() {
        let grid = grid_from(&["###", "###", "###"]);
        assert_eq!(alive_neighbors(&grid, 1, 1), 8);
        assert_eq!(alive_neighbors(&grid, 0, 0), 8);
        assert!(!next_state(&grid, 0, 0));
    }

    #[test]
    fn test_wrap_across_edges() {
        // Live cells on the opposite edges of (0, 0)
        let grid = grid_from(&[".....", ".....", ".....", ".....", "#...#"]);
        assert_eq!(alive_neighbors(&grid, 0, 0), 2);
        assert_eq!(alive_neighbors(&grid, 4, 0), 1);
    }

    #[test]
    fn test_degenerate_single_row_aliases_neighbors() {
        // On a 1x1 torus all 8 offsets resolve to the cell itself.
        let grid = grid_from(&["#"]);
        assert_eq!(alive_neighbors(&grid, 0, 0), 8);
        assert!(!next_state(&grid, 0, 0));

        // On a 1x3 torus the rows above and below alias row 0.
        let grid = grid_from(&["##."]);
        assert_eq!(alive_neighbors(&grid, 0, 2), 6);
        assert_eq!(alive_neighbors(&grid, 0, 0), 5);
    }

    #[test]
    #[should_panic(expected = "outside a 3x4 grid")]
    fn test_next_state_rejects_column_past_edge() {
        let grid = grid_from(&["....", "#...", "...."]);
        next_state(&grid, 0, 4);
    }

    #[test]
    fn test_birth() {
        let grid = grid_from(&[".....", ".#...", "..#..", ".#...", "....."]);
        assert!(next_state(&grid, 2, 1));
        assert!(!next_state(&grid, 1, 1));
        assert!(next_state(&grid, 2, 2));
    }

    #[test]
    fn test_next_row_matches_per_cell() {
        let grid = grid_from(&["#.##.#", ".##..#", "#....#", "##.#.."]);
        for row in 0..grid.rows() {
            let mut out = vec![false; grid.cols()];
            next_row_into(&grid, row, &mut out);
            for col in 0..grid.cols() {
                assert_eq!(out[col], next_state(&grid, row, col), "({}, {})", row, col);
            }
        }
    }

    #[test]
    fn test_next_row_narrow_grid() {
        let grid = grid_from(&["#.", "##", ".#"]);
        for row in 0..grid.rows() {
            let mut out = vec![false; 2];
            next_row_into(&grid, row, &mut out);
            assert_eq!(out[0], next_state(&grid, row, 0));
            assert_eq!(out[1], next_state(&grid, row, 1));
        }
    }
}
