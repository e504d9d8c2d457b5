//! Fractions Skill Score (Roberts & Lean, 2008).
//!
//! Instead of matching forecast and observed events cell by cell, both binary
//! fields are turned into local event densities over a footprint, and the
//! densities are compared. Larger footprints forgive larger displacement
//! errors, so scoring several footprint sizes shows the scale at which a
//! forecast becomes skillful.
//!
//! Cells beyond the grid edge are zero by default; [`Boundary`] selects
//! another fill.
//!
//! Roberts, N.M. and H.W. Lean, 2008: Scale-Selective Verification of
//! Rainfall Accumulations from High-Resolution Forecasts of Convective
//! Events. Mon. Wea. Rev., 136, 78-97.

pub mod boundary;
pub mod footprint;
pub mod fractions;

pub use self::boundary::{Boundary, BoundaryMode};
pub use self::footprint::{Footprint, FootprintKind, FootprintSpec, RowSpan, MAX_FOOTPRINT_SPAN};
pub use self::fractions::{fraction_field, fraction_field_with, SummedAreaTable};

use crate::config::ParallelConfig;
use crate::contingency::ensure_same_shape;
use crate::error::SkResult;
use crate::field::{BinaryField, IntoBinaryField};
use ndarray::{Array2, Zip};
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FssResult {
    /// 1 - mse / mse_ref. `NaN` when neither field has a single event.
    pub fss: f64,
    /// Mean squared difference of the two fraction fields.
    pub mse: f64,
    /// Reference error of a forecast with no skill: mean(O²) + mean(F²).
    pub mse_ref: f64,
    pub observed_fraction: Array2<f64>,
    pub forecasted_fraction: Array2<f64>,
    pub footprint: Footprint,
    pub boundary: Boundary,
}

/// Scores `forecasted` against `observed` over one footprint, using the
/// default [`ParallelConfig`].
pub fn fractions_skill_score<O, F, P>(observed: O, forecasted: F, footprint: P) -> SkResult<FssResult>
where
    O: IntoBinaryField,
    F: IntoBinaryField,
    P: FootprintSpec,
{
    fractions_skill_score_with(observed, forecasted, footprint, &ParallelConfig::default())
}

pub fn fractions_skill_score_with<O, F, P>(
    observed: O,
    forecasted: F,
    footprint: P,
    parallel: &ParallelConfig,
) -> SkResult<FssResult>
where
    O: IntoBinaryField,
    F: IntoBinaryField,
    P: FootprintSpec,
{
    let boundary = footprint.boundary();
    let footprint = footprint.resolve()?;
    let observed = observed.into_binary_field()?;
    let forecasted = forecasted.into_binary_field()?;
    ensure_same_shape(&observed, &forecasted)?;

    score_grids(&observed, &forecasted, footprint, &boundary, parallel)
}

/// Scores the same pair of fields over several footprints, one task per
/// footprint. Results come back in the order of `footprints`.
pub fn fss_by_scale<O, F>(
    observed: O,
    forecasted: F,
    footprints: &[Footprint],
) -> SkResult<Vec<FssResult>>
where
    O: IntoBinaryField,
    F: IntoBinaryField,
{
    fss_by_scale_with(observed, forecasted, footprints, Boundary::default())
}

pub fn fss_by_scale_with<O, F>(
    observed: O,
    forecasted: F,
    footprints: &[Footprint],
    boundary: Boundary,
) -> SkResult<Vec<FssResult>>
where
    O: IntoBinaryField,
    F: IntoBinaryField,
{
    let observed = observed.into_binary_field()?;
    let forecasted = forecasted.into_binary_field()?;
    ensure_same_shape(&observed, &forecasted)?;

    // Parallelism is spent across footprints; rows stay on their task.
    let parallel = ParallelConfig::serial();
    footprints
        .par_iter()
        .map(|fp| {
            let footprint = fp.resolve()?;
            score_grids(&observed, &forecasted, footprint, &boundary, &parallel)
        })
        .collect()
}

fn score_grids(
    observed: &BinaryField,
    forecasted: &BinaryField,
    footprint: Footprint,
    boundary: &Boundary,
    parallel: &ParallelConfig,
) -> SkResult<FssResult> {
    let obs_grid = observed.as_grid()?;
    let fxx_grid = forecasted.as_grid()?;

    match footprint {
        Footprint::Box(width) => debug!("Box footprint width: {}x{} grid boxes", width, width),
        Footprint::Circular(radius) => debug!("Circular footprint radius: {} grid boxes", radius),
    }
    if !boundary.is_zero_padding() {
        debug!("Boundary mode: {} (cval {})", boundary.mode, boundary.cval);
    }

    let (obs_fracs, fxx_fracs) = rayon::join(
        || fraction_field_with(obs_grid, footprint, boundary, parallel),
        || fraction_field_with(fxx_grid, footprint, boundary, parallel),
    );
    let observed_fraction = obs_fracs?;
    let forecasted_fraction = fxx_fracs?;

    let count = observed_fraction.len() as f64;
    let mut sq_diff = 0.0;
    let mut sq_obs = 0.0;
    let mut sq_fxx = 0.0;
    Zip::from(&observed_fraction)
        .and(&forecasted_fraction)
        .for_each(|&o, &f| {
            let diff = o - f;
            sq_diff += diff * diff;
            sq_obs += o * o;
            sq_fxx += f * f;
        });

    let mse = sq_diff / count;
    let mse_ref = sq_obs / count + sq_fxx / count;
    let fss = 1.0 - mse / mse_ref;

    debug!(
        "Fractions skill score ({}, size {}): MSE={:.6} MSE_ref={:.6} FSS={:.4}",
        footprint.kind(),
        footprint.size(),
        mse,
        mse_ref,
        fss
    );

    Ok(FssResult {
        fss,
        mse,
        mse_ref,
        observed_fraction,
        forecasted_fraction,
        footprint,
        boundary: *boundary,
    })
}
