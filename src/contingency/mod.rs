pub mod scores;
pub mod summary;

pub use self::summary::{Score, ScoreSummary};
use crate::error::{SkResult, SkillError};
use crate::field::{BinaryField, IntoBinaryField};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// 2x2 contingency table of a binary forecast against binary observations.
///
/// ```text
///                 Observed
///               Yes      No
/// Forecast Yes   a        b
/// Forecast No    c        d
/// ```
///
/// The four counts are computed once at construction and cannot be changed
/// afterwards; every derived total is recomputed from them on access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContingencyCounts {
    a: u64,
    b: u64,
    c: u64,
    d: u64,
}

/// Tallies hits, false alarms, misses and correct rejections of two fields.
pub fn build_contingency<O, F>(observed: O, forecasted: F) -> SkResult<ContingencyCounts>
where
    O: IntoBinaryField,
    F: IntoBinaryField,
{
    let observed = observed.into_binary_field()?;
    let forecasted = forecasted.into_binary_field()?;
    ContingencyCounts::from_fields(&observed, &forecasted)
}

impl ContingencyCounts {
    /// Wraps counts that were tallied elsewhere, e.g. a table accumulated
    /// over many cases or one read back from storage.
    ///
    /// The counts are taken as given: they must come from a pairing of
    /// observed and forecast events, as [`from_fields`](Self::from_fields)
    /// would produce. Every score treats them exactly like a table built
    /// from fields.
    pub fn from_counts(a: u64, b: u64, c: u64, d: u64) -> Self {
        Self { a, b, c, d }
    }

    pub fn from_fields(observed: &BinaryField, forecasted: &BinaryField) -> SkResult<Self> {
        ensure_same_shape(observed, forecasted)?;

        let mut counts = Self::from_counts(0, 0, 0, 0);
        for (&obs, &fxx) in observed.view().iter().zip(forecasted.view().iter()) {
            match (fxx, obs) {
                (true, true) => counts.a += 1,
                (true, false) => counts.b += 1,
                (false, true) => counts.c += 1,
                (false, false) => counts.d += 1,
            }
        }

        debug!(
            "Contingency table over {:?}: a={} b={} c={} d={}",
            observed.shape(),
            counts.a,
            counts.b,
            counts.c,
            counts.d
        );
        Ok(counts)
    }

    /// Forecasted and observed (a).
    pub fn hits(&self) -> u64 {
        self.a
    }

    /// Forecasted but not observed (b).
    pub fn false_alarms(&self) -> u64 {
        self.b
    }

    /// Observed but not forecasted (c).
    pub fn misses(&self) -> u64 {
        self.c
    }

    /// Neither forecasted nor observed (d).
    pub fn correct_rejections(&self) -> u64 {
        self.d
    }

    pub fn a(&self) -> u64 {
        self.a
    }

    pub fn b(&self) -> u64 {
        self.b
    }

    pub fn c(&self) -> u64 {
        self.c
    }

    pub fn d(&self) -> u64 {
        self.d
    }

    /// Total number of samples.
    pub fn n(&self) -> u64 {
        self.a + self.b + self.c + self.d
    }

    pub fn n_forecasted(&self) -> u64 {
        self.a + self.b
    }

    pub fn n_observed(&self) -> u64 {
        self.a + self.c
    }

    /// Hits expected from a forecast independent of the observations, with
    /// the same forecast rate and base rate.
    pub fn a_random(&self) -> f64 {
        let (a, b, c, _, n) = self.as_f64();
        (a + b) * (a + c) / n
    }

    /// Correct rejections expected by chance (counterpart of `a_random`).
    pub fn d_random(&self) -> f64 {
        let (_, b, c, d, n) = self.as_f64();
        (b + d) * (c + d) / n
    }

    #[inline(always)]
    pub(crate) fn as_f64(&self) -> (f64, f64, f64, f64, f64) {
        (
            self.a as f64,
            self.b as f64,
            self.c as f64,
            self.d as f64,
            self.n() as f64,
        )
    }

    /// Every score of this table in one record.
    pub fn summary(&self) -> ScoreSummary {
        ScoreSummary::from_counts(self)
    }
}

pub(crate) fn ensure_same_shape(observed: &BinaryField, forecasted: &BinaryField) -> SkResult<()> {
    if observed.shape() != forecasted.shape() {
        return Err(SkillError::ShapeMismatch {
            observed: observed.shape().to_vec(),
            forecasted: forecasted.shape().to_vec(),
        });
    }
    Ok(())
}
