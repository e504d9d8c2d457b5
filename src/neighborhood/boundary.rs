use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// How cells beyond the grid edge are filled when a footprint hangs over it.
///
/// Named after the usual image-filter extension modes, shown here for a row
/// `a b c d`:
///
/// ```text
/// constant  k k k | a b c d | k k k
/// nearest   a a a | a b c d | d d d
/// reflect   c b a | a b c d | d c b
/// mirror    d c b | a b c d | c b a
/// wrap      b c d | a b c d | a b c
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryMode {
    #[default]
    Constant,
    Nearest,
    Reflect,
    Mirror,
    Wrap,
}

/// Edge handling used for a fraction field. The default is zero padding,
/// which dilutes fractions near the edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Boundary {
    pub mode: BoundaryMode,
    /// Value of every off-grid cell in `Constant` mode; ignored otherwise.
    pub cval: f64,
}

impl Default for Boundary {
    fn default() -> Self {
        Self::constant(0.0)
    }
}

impl Boundary {
    pub fn constant(cval: f64) -> Self {
        Self {
            mode: BoundaryMode::Constant,
            cval,
        }
    }

    pub fn of(mode: BoundaryMode) -> Self {
        Self { mode, cval: 0.0 }
    }

    pub(crate) fn is_zero_padding(&self) -> bool {
        self.mode == BoundaryMode::Constant && self.cval == 0.0
    }
}

/// Real indices `lo..=hi` visited `times` times by an extended window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Segment {
    pub lo: usize,
    pub hi: usize,
    pub times: u64,
}

impl BoundaryMode {
    /// Splits the extended range `lo..=hi` on an axis of length `n` into runs
    /// of real indices. `Constant` yields only the on-grid part.
    pub(crate) fn for_each_segment(self, lo: isize, hi: isize, n: usize, mut emit: impl FnMut(Segment)) {
        if n == 0 || lo > hi {
            return;
        }
        let last = n as isize - 1;
        let (a, b) = (lo.max(0), hi.min(last));
        let on_grid = (a <= b).then(|| Segment {
            lo: a as usize,
            hi: b as usize,
            times: 1,
        });

        match self {
            Self::Constant => on_grid.into_iter().for_each(emit),
            Self::Nearest => {
                if lo < 0 {
                    let below = hi.min(-1) - lo + 1;
                    emit(Segment { lo: 0, hi: 0, times: below as u64 });
                }
                if let Some(segment) = on_grid {
                    emit(segment);
                }
                if hi > last {
                    let above = hi - lo.max(last + 1) + 1;
                    emit(Segment { lo: n - 1, hi: n - 1, times: above as u64 });
                }
            }
            Self::Wrap => for_each_phase(lo, hi, n, |a, b, times| {
                emit(Segment { lo: a, hi: b, times })
            }),
            Self::Reflect => for_each_phase(lo, hi, 2 * n, |a, b, times| {
                fold_phases(a, b, n, 2 * n - 1, times, &mut emit)
            }),
            // A single cell has nothing to mirror across.
            Self::Mirror if n == 1 => emit(Segment {
                lo: 0,
                hi: 0,
                times: (hi - lo + 1) as u64,
            }),
            Self::Mirror => for_each_phase(lo, hi, 2 * n - 2, |a, b, times| {
                fold_phases(a, b, n, 2 * n - 2, times, &mut emit)
            }),
        }
    }
}

/// Splits `lo..=hi` over a sequence of period `period` into phase ranges
/// `a..=b` (both below `period`) with multiplicities.
fn for_each_phase(lo: isize, hi: isize, period: usize, mut emit: impl FnMut(usize, usize, u64)) {
    let len = (hi - lo + 1) as usize;
    let full = len / period;
    let rem = len % period;
    if full > 0 {
        emit(0, period - 1, full as u64);
    }
    if rem > 0 {
        let start = lo.rem_euclid(period as isize) as usize;
        if start + rem <= period {
            emit(start, start + rem - 1, 1);
        } else {
            emit(start, period - 1, 1);
            emit(0, start + rem - 1 - period, 1);
        }
    }
}

/// Maps a phase range of a folded sequence back onto real indices. Phases
/// below `n` run forward; phase `p >= n` lands on `pivot - p`.
fn fold_phases(a: usize, b: usize, n: usize, pivot: usize, times: u64, emit: &mut impl FnMut(Segment)) {
    if a < n {
        emit(Segment { lo: a, hi: b.min(n - 1), times });
    }
    if b >= n {
        let start = a.max(n);
        emit(Segment { lo: pivot - b, hi: pivot - start, times });
    }
}
