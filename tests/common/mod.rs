#![allow(dead_code)]

use ndarray::Array2;
use skillforge::{Boundary, BoundaryMode, Footprint};

/// Parses a picture grid: `#` is an event, anything else is not.
pub fn grid(rows: &[&str]) -> Array2<bool> {
    let cols = rows.first().map_or(0, |r| r.len());
    let cells: Vec<bool> = rows
        .iter()
        .flat_map(|r| r.chars().map(|ch| ch == '#'))
        .collect();
    Array2::from_shape_vec((rows.len(), cols), cells).expect("ragged picture grid")
}

/// All-false grid with events at the given (row, col) positions.
pub fn points(rows: usize, cols: usize, events: &[(usize, usize)]) -> Array2<bool> {
    let mut g = Array2::from_elem((rows, cols), false);
    for &(r, c) in events {
        g[[r, c]] = true;
    }
    g
}

pub fn negate(g: &Array2<bool>) -> Array2<bool> {
    g.mapv(|v| !v)
}

/// Direct windowed fraction: visits every footprint cell around every grid
/// cell, counting off-grid cells as empty.
pub fn naive_fractions(g: &Array2<bool>, footprint: Footprint) -> Array2<f64> {
    naive_fractions_with(g, footprint, Boundary::default())
}

// Extended index -> real index on an axis of length n, None for a constant fill.
fn extend(mode: BoundaryMode, i: isize, n: usize) -> Option<usize> {
    let n = n as isize;
    let real = match mode {
        BoundaryMode::Constant => return (0..n).contains(&i).then_some(i as usize),
        BoundaryMode::Nearest => i.clamp(0, n - 1),
        BoundaryMode::Wrap => i.rem_euclid(n),
        BoundaryMode::Reflect => {
            let p = i.rem_euclid(2 * n);
            if p < n {
                p
            } else {
                2 * n - 1 - p
            }
        }
        BoundaryMode::Mirror if n == 1 => 0,
        BoundaryMode::Mirror => {
            let p = i.rem_euclid(2 * n - 2);
            if p < n {
                p
            } else {
                2 * n - 2 - p
            }
        }
    };
    Some(real as usize)
}

/// Direct windowed fraction with off-grid cells filled per `boundary`.
pub fn naive_fractions_with(g: &Array2<bool>, footprint: Footprint, boundary: Boundary) -> Array2<f64> {
    let (rows, cols) = g.dim();
    let offsets: Vec<(isize, isize)> = match footprint {
        Footprint::Box(w) => {
            let w = w as isize;
            let start = -(w / 2);
            let mut v = Vec::new();
            for dy in start..start + w {
                for dx in start..start + w {
                    v.push((dy, dx));
                }
            }
            v
        }
        Footprint::Circular(radius) => {
            let r = radius as isize;
            let mut v = Vec::new();
            for dy in -r..=r {
                for dx in -r..=r {
                    if dx * dx + dy * dy <= r * r {
                        v.push((dy, dx));
                    }
                }
            }
            v
        }
    };

    let area = offsets.len() as f64;
    Array2::from_shape_fn((rows, cols), |(r, c)| {
        let hits: f64 = offsets
            .iter()
            .map(|&(dy, dx)| {
                let y = extend(boundary.mode, r as isize + dy, rows);
                let x = extend(boundary.mode, c as isize + dx, cols);
                match (y, x) {
                    (Some(y), Some(x)) => g[[y, x]] as u8 as f64,
                    _ => boundary.cval,
                }
            })
            .sum();
        hits / area
    })
}

/// Routes the crate's `debug!` output to the test harness (`--nocapture`).
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

pub fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() < tol,
        "expected {}, got {} (tol {})",
        expected,
        actual,
        tol
    );
}
