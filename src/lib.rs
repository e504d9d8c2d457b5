//! Verification of binary events: contingency-table skill scores and the
//! neighborhood Fractions Skill Score.
//!
//! Inputs go through [`field::IntoBinaryField`] once at the boundary; past
//! that point everything works on [`field::BinaryField`].

pub mod config;
pub mod contingency;
pub mod error;
pub mod field;
pub mod neighborhood;

pub use contingency::{build_contingency, ContingencyCounts, Score, ScoreSummary};
pub use error::{SkResult, SkillError};
pub use field::{BinaryField, IntoBinaryField, Truthy};
pub use neighborhood::{
    fractions_skill_score, fractions_skill_score_with, fss_by_scale, fss_by_scale_with, Boundary,
    BoundaryMode, Footprint, FootprintKind, FootprintSpec, FssResult,
};
