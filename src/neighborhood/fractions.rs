use super::boundary::{Boundary, BoundaryMode};
use super::footprint::{box_extent, Footprint};
use crate::config::ParallelConfig;
use crate::error::SkResult;
use ndarray::{Array2, ArrayView2};
use rayon::prelude::*;
use tracing::debug;

/// Prefix counts of `true` cells, with everything outside the grid treated
/// as `false`.
///
/// `sums[(r * (cols + 1)) + c]` holds the count over rows `0..r` and columns
/// `0..c`, so any rectangle costs four lookups.
pub struct SummedAreaTable {
    rows: usize,
    cols: usize,
    sums: Vec<u64>,
}

impl SummedAreaTable {
    pub fn new(grid: ArrayView2<'_, bool>) -> Self {
        let (rows, cols) = grid.dim();
        let stride = cols + 1;
        let mut sums = vec![0u64; (rows + 1) * stride];

        for (r, line) in grid.outer_iter().enumerate() {
            let mut running = 0u64;
            for (c, &v) in line.iter().enumerate() {
                running += v as u64;
                sums[(r + 1) * stride + c + 1] = sums[r * stride + c + 1] + running;
            }
        }

        Self { rows, cols, sums }
    }

    /// Count of `true` cells in the inclusive rectangle rows `r0..=r1`,
    /// columns `c0..=c1`. Parts of the rectangle off the grid contribute 0.
    #[inline(always)]
    pub fn window_sum(&self, r0: isize, r1: isize, c0: isize, c1: isize) -> u64 {
        let r0 = r0.max(0);
        let c0 = c0.max(0);
        let r1 = r1.min(self.rows as isize - 1);
        let c1 = c1.min(self.cols as isize - 1);
        if r0 > r1 || c0 > c1 {
            return 0;
        }

        let stride = self.cols + 1;
        let (top, bottom) = (r0 as usize * stride, (r1 as usize + 1) * stride);
        let (left, right) = (c0 as usize, c1 as usize + 1);

        self.sums[bottom + right] + self.sums[top + left]
            - self.sums[top + right]
            - self.sums[bottom + left]
    }

    /// Sum over the inclusive rectangle with off-grid cells filled in by
    /// `boundary`.
    pub fn extended_sum(&self, boundary: &Boundary, r0: isize, r1: isize, c0: isize, c1: isize) -> f64 {
        match boundary.mode {
            BoundaryMode::Constant => {
                let inside = self.window_sum(r0, r1, c0, c1);
                if boundary.cval == 0.0 {
                    return inside as f64;
                }
                let area = ((r1 - r0 + 1) * (c1 - c0 + 1)) as f64;
                let covered = overlap(r0, r1, self.rows) * overlap(c0, c1, self.cols);
                inside as f64 + boundary.cval * (area - covered as f64)
            }
            mode => {
                let mut total = 0u64;
                mode.for_each_segment(r0, r1, self.rows, |rs| {
                    mode.for_each_segment(c0, c1, self.cols, |cs| {
                        let count = self.window_sum(
                            rs.lo as isize,
                            rs.hi as isize,
                            cs.lo as isize,
                            cs.hi as isize,
                        );
                        total += rs.times * cs.times * count;
                    })
                });
                total as f64
            }
        }
    }
}

/// On-grid length of `lo..=hi` on an axis of length `n`.
fn overlap(lo: isize, hi: isize, n: usize) -> usize {
    let (a, b) = (lo.max(0), hi.min(n as isize - 1));
    if a > b {
        0
    } else {
        (b - a + 1) as usize
    }
}

/// A rectangle of offsets around the center cell.
#[derive(Debug, Clone, Copy)]
struct Window {
    dy_min: isize,
    dy_max: isize,
    dx_min: isize,
    dx_max: isize,
}

/// Box footprints collapse to a single rectangle (O(1) per cell); circular
/// ones need one single-row rectangle per row offset.
fn windows(footprint: Footprint) -> Vec<Window> {
    match footprint {
        Footprint::Box(width) => {
            let (lo, hi) = box_extent(width);
            vec![Window {
                dy_min: lo,
                dy_max: hi,
                dx_min: lo,
                dx_max: hi,
            }]
        }
        Footprint::Circular(_) => footprint
            .spans()
            .map(|s| Window {
                dy_min: s.dy,
                dy_max: s.dy,
                dx_min: s.dx_min,
                dx_max: s.dx_max,
            })
            .collect(),
    }
}

/// Local event fraction around every cell of `grid`, with zero padding.
///
/// Each value is the number of `true` cells inside the footprint centered on
/// that cell divided by the footprint's full cell count. Cells beyond the
/// grid edge count as `false`, so fractions near the boundary are diluted
/// rather than renormalized.
pub fn fraction_field(
    grid: ArrayView2<'_, bool>,
    footprint: Footprint,
    parallel: &ParallelConfig,
) -> SkResult<Array2<f64>> {
    fraction_field_with(grid, footprint, &Boundary::default(), parallel)
}

/// [`fraction_field`] with an explicit edge policy. The denominator is the
/// full footprint cell count whatever the boundary mode.
pub fn fraction_field_with(
    grid: ArrayView2<'_, bool>,
    footprint: Footprint,
    boundary: &Boundary,
    parallel: &ParallelConfig,
) -> SkResult<Array2<f64>> {
    footprint.validate()?;
    let (rows, cols) = grid.dim();

    let table = SummedAreaTable::new(grid);
    let windows = windows(footprint);
    let area = footprint.area() as f64;
    let zero_padded = boundary.is_zero_padding();

    let fill_row = |(r, line): (usize, &mut [f64])| {
        let r = r as isize;
        for (c, cell) in line.iter_mut().enumerate() {
            let c = c as isize;
            let hits: f64 = if zero_padded {
                windows
                    .iter()
                    .map(|w| table.window_sum(r + w.dy_min, r + w.dy_max, c + w.dx_min, c + w.dx_max))
                    .sum::<u64>() as f64
            } else {
                windows
                    .iter()
                    .map(|w| {
                        table.extended_sum(
                            boundary,
                            r + w.dy_min,
                            r + w.dy_max,
                            c + w.dx_min,
                            c + w.dx_max,
                        )
                    })
                    .sum()
            };
            *cell = hits / area;
        }
    };

    let mut values = vec![0.0f64; rows * cols];
    if cols > 0 {
        if rows >= parallel.min_parallel_rows {
            debug!("Fractions over {}x{} grid: parallel rows", rows, cols);
            values.par_chunks_mut(cols).enumerate().for_each(fill_row);
        } else {
            values.chunks_mut(cols).enumerate().for_each(fill_row);
        }
    }

    Ok(Array2::from_shape_vec((rows, cols), values)?)
}
