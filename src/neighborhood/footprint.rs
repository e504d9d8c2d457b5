use super::boundary::Boundary;
use crate::config::FootprintConfig;
use crate::error::{SkResult, SkillError};
use ndarray::Array2;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum FootprintKind {
    Box,
    Circular,
}

/// Neighborhood over which local event fractions are taken. Sizes are in
/// grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "size", rename_all = "snake_case")]
pub enum Footprint {
    /// Square window of side `width`. Odd widths are centered; even widths
    /// reach one cell further toward lower indices.
    Box(usize),
    /// Every cell whose center lies within `radius` of the center cell.
    Circular(usize),
}

/// Anything that can be turned into a validated [`Footprint`].
pub trait FootprintSpec {
    fn resolve(&self) -> SkResult<Footprint>;

    /// Edge policy to score with. Zero padding unless overridden.
    fn boundary(&self) -> Boundary {
        Boundary::default()
    }
}

impl FootprintSpec for Footprint {
    fn resolve(&self) -> SkResult<Footprint> {
        self.validate()?;
        Ok(*self)
    }
}

impl FootprintSpec for (Footprint, Boundary) {
    fn resolve(&self) -> SkResult<Footprint> {
        self.0.resolve()
    }

    fn boundary(&self) -> Boundary {
        self.1
    }
}

/// Horizontal extent of a footprint on one row offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSpan {
    pub dy: isize,
    pub dx_min: isize,
    pub dx_max: isize,
}

impl RowSpan {
    pub fn width(&self) -> usize {
        (self.dx_max - self.dx_min + 1) as usize
    }
}

/// Widest footprint, in cells along either axis, that will be evaluated.
pub const MAX_FOOTPRINT_SPAN: usize = 1 << 16;

impl Footprint {
    /// Mirrors the `width=` / `radius=` keyword form: exactly one must be given.
    pub fn from_options(width: Option<usize>, radius: Option<usize>) -> SkResult<Self> {
        FootprintConfig {
            width,
            radius,
            ..Default::default()
        }
        .resolve()
    }

    pub fn kind(&self) -> FootprintKind {
        match self {
            Self::Box(_) => FootprintKind::Box,
            Self::Circular(_) => FootprintKind::Circular,
        }
    }

    pub fn size(&self) -> usize {
        match *self {
            Self::Box(width) => width,
            Self::Circular(radius) => radius,
        }
    }

    /// Cells covered along one axis, or `None` if that overflows.
    fn span(&self) -> Option<usize> {
        match *self {
            Self::Box(width) => Some(width),
            Self::Circular(radius) => radius.checked_mul(2)?.checked_add(1),
        }
    }

    pub fn validate(&self) -> SkResult<()> {
        if self.size() == 0 {
            return Err(SkillError::InvalidParameters(format!(
                "{} footprint size must be positive",
                self.kind()
            )));
        }
        match self.span() {
            Some(span) if span <= MAX_FOOTPRINT_SPAN => Ok(()),
            _ => Err(SkillError::InvalidParameters(format!(
                "{} footprint size {} spans more than {} cells",
                self.kind(),
                self.size(),
                MAX_FOOTPRINT_SPAN
            ))),
        }
    }

    /// Offsets (relative to the center cell) covered by the footprint, one
    /// span per row offset, ordered top to bottom.
    pub fn row_spans(&self) -> SkResult<Vec<RowSpan>> {
        self.validate()?;
        Ok(self.spans().collect())
    }

    /// Number of cells inside the footprint (the fraction denominator).
    pub fn cell_count(&self) -> SkResult<usize> {
        self.validate()?;
        Ok(self.area())
    }

    /// Boolean stencil of the footprint, for display or inspection.
    pub fn mask(&self) -> SkResult<Array2<bool>> {
        self.validate()?;
        let span = self.span().unwrap_or(0);
        let reach = (span / 2) as isize;
        let dx_min = match *self {
            Self::Box(width) => box_extent(width).0,
            Self::Circular(_) => -reach,
        };

        let mut mask = Array2::from_elem((span, span), false);
        for (row, s) in self.spans().enumerate() {
            for dx in s.dx_min..=s.dx_max {
                mask[[row, (dx - dx_min) as usize]] = true;
            }
        }
        Ok(mask)
    }

    // The helpers below assume `validate` has passed.

    pub(crate) fn spans(&self) -> impl Iterator<Item = RowSpan> {
        let (lo, hi, circular) = match *self {
            Self::Box(width) => {
                let (lo, hi) = box_extent(width);
                (lo, hi, None)
            }
            Self::Circular(radius) => {
                let r = radius as isize;
                (-r, r, Some(r))
            }
        };
        (lo..=hi).map(move |dy| match circular {
            None => RowSpan {
                dy,
                dx_min: lo,
                dx_max: hi,
            },
            Some(r) => {
                let reach = isqrt(r * r - dy * dy);
                RowSpan {
                    dy,
                    dx_min: -reach,
                    dx_max: reach,
                }
            }
        })
    }

    pub(crate) fn area(&self) -> usize {
        match *self {
            Self::Box(width) => width * width,
            Self::Circular(_) => self.spans().map(|s| s.width()).sum(),
        }
    }
}

/// Inclusive offset range of a box of the given width: -(w/2) ..= (w-1) - w/2.
pub(crate) fn box_extent(width: usize) -> (isize, isize) {
    let lo = width / 2;
    let hi = width.saturating_sub(1 + lo);
    (-(lo as isize), hi as isize)
}

/// Largest k with k*k <= v.
fn isqrt(v: isize) -> isize {
    let mut k = (v as f64).sqrt() as isize;
    while k * k > v {
        k -= 1;
    }
    while (k + 1) * (k + 1) <= v {
        k += 1;
    }
    k
}
