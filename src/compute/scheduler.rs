//! Generation scheduler - parallel computation of the next generation.
//!
//! The output buffer is split into contiguous row bands with
//! `par_chunks_mut`. Each band is written by exactly one rayon task and
//! reads only from the frozen input grid, so bands never overlap and
//! the result is independent of band size.

use rayon::prelude::*;

use crate::schema::BandConfig;

use super::{Grid, next_row_into};

/// Number of rows per band for a grid with `rows` rows.
///
/// Always in `1..=rows`.
pub fn band_rows(band: &BandConfig, rows: usize) -> usize {
    let size = match band {
        BandConfig::PerRow => 1,
        BandConfig::Rows { rows: n } => *n,
        BandConfig::Auto => rows.div_ceil(rayon::current_num_threads().max(1)),
    };
    size.clamp(1, rows.max(1))
}

/// Compute the next generation of `input` into `output`.
///
/// `output` must have the same dimensions as `input`; every cell of it is
/// overwritten. Returns after all bands have completed. A panic in any
/// band propagates to the caller.
pub fn advance_into(input: &Grid, output: &mut Grid, band: &BandConfig) {
    assert!(
        input.same_shape(output),
        "Output grid {}x{} does not match input {}x{}",
        output.rows(),
        output.cols(),
        input.rows(),
        input.cols()
    );

    let cols = input.cols();
    let rows_per_band = band_rows(band, input.rows());

    output
        .cells_mut()
        .par_chunks_mut(rows_per_band * cols)
        .enumerate()
        .for_each(|(band_idx, band_cells)| {
            let first_row = band_idx * rows_per_band;
            for (offset, out_row) in band_cells.chunks_mut(cols).enumerate() {
                next_row_into(input, first_row + offset, out_row);
            }
        });
}

/// Compute the next generation of `input` into a freshly allocated grid.
pub fn advance(input: &Grid, band: &BandConfig) -> Grid {
    let mut output = input.dead_like();
    advance_into(input, &mut output, band);
    output
}

/// Single-threaded reference implementation of [`advance`].
pub fn advance_serial(input: &Grid) -> Grid {
    let mut output = input.dead_like();
    let cols = input.cols();
    for (row, out_row) in output.cells_mut().chunks_mut(cols).enumerate() {
        next_row_into(input, row, out_row);
    }
    output
}
