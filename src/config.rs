use crate::error::{SkResult, SkillError};
use crate::neighborhood::{Boundary, BoundaryMode, Footprint, FootprintSpec};
use clap::Args;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Verification settings a host binary can flatten into its own CLI or
/// embed in its own settings file.
#[derive(Args, Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub footprint: FootprintConfig,
    #[command(flatten)]
    pub parallel: ParallelConfig,
}

/// Neighborhood footprint as the caller spells it: a square `width` or a
/// circular `radius`, in grid cells. Exactly one of the two must be set.
#[derive(Args, Debug, Clone, Serialize, Deserialize, Default, PartialEq, TypedBuilder)]
#[serde(default)]
pub struct FootprintConfig {
    #[arg(long, conflicts_with = "radius")]
    #[builder(default, setter(strip_option))]
    pub width: Option<usize>,
    #[arg(long)]
    #[builder(default, setter(strip_option))]
    pub radius: Option<usize>,

    /// Fill for cells beyond the grid edge: constant, nearest, reflect, mirror or wrap.
    #[arg(long, default_value_t = BoundaryMode::Constant)]
    #[builder(default)]
    pub boundary: BoundaryMode,
    /// Off-grid value in `constant` mode.
    #[arg(long, default_value_t = 0.0)]
    #[builder(default)]
    pub cval: f64,
}

impl FootprintSpec for FootprintConfig {
    fn resolve(&self) -> SkResult<Footprint> {
        let footprint = match (self.width, self.radius) {
            (Some(width), None) => Footprint::Box(width),
            (None, Some(radius)) => Footprint::Circular(radius),
            (Some(_), Some(_)) => {
                return Err(SkillError::InvalidParameters(
                    "`width` or `radius` must be specified, but not both".to_string(),
                ))
            }
            (None, None) => {
                return Err(SkillError::InvalidParameters(
                    "one of `width` or `radius` must be specified".to_string(),
                ))
            }
        };
        footprint.validate()?;
        Ok(footprint)
    }

    fn boundary(&self) -> Boundary {
        Boundary {
            mode: self.boundary,
            cval: self.cval,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ParallelConfig {
    /// Grids with fewer rows are processed on the calling thread.
    #[arg(long, default_value_t = 64)]
    pub min_parallel_rows: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            min_parallel_rows: 64,
        }
    }
}

impl ParallelConfig {
    pub fn serial() -> Self {
        Self {
            min_parallel_rows: usize::MAX,
        }
    }

    pub fn always() -> Self {
        Self {
            min_parallel_rows: 0,
        }
    }
}
