use super::ContingencyCounts;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Every skill score the calculator knows, addressable by name.
///
/// Parsing accepts the snake_case name as well as the usual abbreviations
/// (`pod`, `far`, `csi`, `ets`, ...), case-insensitively.
#[derive(
    Debug, Clone, Copy, EnumIter, EnumString, Display, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum Score {
    BaseRate,
    ForecastRate,
    #[strum(to_string = "frequency_bias", serialize = "bias")]
    FrequencyBias,
    #[strum(
        to_string = "hit_rate",
        serialize = "pod",
        serialize = "probability_of_detection"
    )]
    HitRate,
    #[strum(
        to_string = "false_alarm_rate",
        serialize = "pofd",
        serialize = "probability_of_false_detection"
    )]
    FalseAlarmRate,
    #[strum(to_string = "false_alarm_ratio", serialize = "far")]
    FalseAlarmRatio,
    SuccessRatio,
    #[strum(to_string = "proportion_correct", serialize = "accuracy")]
    ProportionCorrect,
    #[strum(
        to_string = "critical_success_index",
        serialize = "csi",
        serialize = "threat_score"
    )]
    CriticalSuccessIndex,
    #[strum(
        to_string = "gilbert_skill_score",
        serialize = "gss",
        serialize = "ets",
        serialize = "equitable_threat_score"
    )]
    GilbertSkillScore,
    #[strum(to_string = "heidke_skill_score", serialize = "hss")]
    HeidkeSkillScore,
    #[strum(to_string = "peirce_skill_score", serialize = "pss")]
    PeirceSkillScore,
    ClaytonSkillScore,
    DoolittleSkillScore,
    LogOddsRatio,
    #[strum(to_string = "odds_ratio_skill_score", serialize = "orss")]
    OddsRatioSkillScore,
}

impl Score {
    pub fn evaluate(self, table: &ContingencyCounts) -> f64 {
        match self {
            Self::BaseRate => table.base_rate(),
            Self::ForecastRate => table.forecast_rate(),
            Self::FrequencyBias => table.frequency_bias(),
            Self::HitRate => table.hit_rate(),
            Self::FalseAlarmRate => table.false_alarm_rate(),
            Self::FalseAlarmRatio => table.false_alarm_ratio(),
            Self::SuccessRatio => table.success_ratio(),
            Self::ProportionCorrect => table.proportion_correct(),
            Self::CriticalSuccessIndex => table.critical_success_index(),
            Self::GilbertSkillScore => table.gilbert_skill_score(),
            Self::HeidkeSkillScore => table.heidke_skill_score(),
            Self::PeirceSkillScore => table.peirce_skill_score(),
            Self::ClaytonSkillScore => table.clayton_skill_score(),
            Self::DoolittleSkillScore => table.doolittle_skill_score(),
            Self::LogOddsRatio => table.log_odds_ratio(),
            Self::OddsRatioSkillScore => table.odds_ratio_skill_score(),
        }
    }

    /// Value of a perfect forecast, if the score has one.
    pub fn perfect_value(self) -> Option<f64> {
        match self {
            Self::BaseRate | Self::ForecastRate => None,
            Self::ClaytonSkillScore | Self::LogOddsRatio => None,
            Self::FalseAlarmRate | Self::FalseAlarmRatio => Some(0.0),
            _ => Some(1.0),
        }
    }

    /// Nominal (min, max) of the score, if bounded in the literature.
    pub fn range(self) -> Option<(f64, f64)> {
        match self {
            Self::BaseRate
            | Self::ForecastRate
            | Self::HitRate
            | Self::FalseAlarmRate
            | Self::FalseAlarmRatio
            | Self::SuccessRatio
            | Self::ProportionCorrect
            | Self::CriticalSuccessIndex => Some((0.0, 1.0)),
            Self::FrequencyBias => Some((0.0, f64::INFINITY)),
            Self::GilbertSkillScore => Some((-1.0 / 3.0, 1.0)),
            Self::HeidkeSkillScore
            | Self::PeirceSkillScore
            | Self::DoolittleSkillScore
            | Self::OddsRatioSkillScore => Some((-1.0, 1.0)),
            Self::LogOddsRatio => Some((f64::NEG_INFINITY, f64::INFINITY)),
            Self::ClaytonSkillScore => None,
        }
    }
}

/// All scores of a single table, e.g. for collecting many cases side by side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreSummary {
    #[serde(flatten)]
    pub counts: ContingencyCounts,

    // Frequencies
    pub base_rate: f64,
    pub forecast_rate: f64,
    pub frequency_bias: f64,

    // Observation / forecast stratified
    pub hit_rate: f64,
    pub false_alarm_rate: f64,
    pub false_alarm_ratio: f64,
    pub success_ratio: f64,

    // Accuracy & skill
    pub proportion_correct: f64,
    pub critical_success_index: f64,
    pub gilbert_skill_score: f64,
    pub heidke_skill_score: f64,
    pub peirce_skill_score: f64,
    pub clayton_skill_score: f64,
    pub doolittle_skill_score: f64,

    // Odds
    pub log_odds_ratio: f64,
    pub odds_ratio_skill_score: f64,
}

impl ScoreSummary {
    pub fn from_counts(t: &ContingencyCounts) -> Self {
        Self {
            counts: *t,
            base_rate: t.base_rate(),
            forecast_rate: t.forecast_rate(),
            frequency_bias: t.frequency_bias(),
            hit_rate: t.hit_rate(),
            false_alarm_rate: t.false_alarm_rate(),
            false_alarm_ratio: t.false_alarm_ratio(),
            success_ratio: t.success_ratio(),
            proportion_correct: t.proportion_correct(),
            critical_success_index: t.critical_success_index(),
            gilbert_skill_score: t.gilbert_skill_score(),
            heidke_skill_score: t.heidke_skill_score(),
            peirce_skill_score: t.peirce_skill_score(),
            clayton_skill_score: t.clayton_skill_score(),
            doolittle_skill_score: t.doolittle_skill_score(),
            log_odds_ratio: t.log_odds_ratio(),
            odds_ratio_skill_score: t.odds_ratio_skill_score(),
        }
    }

    pub fn get(&self, score: Score) -> f64 {
        match score {
            Score::BaseRate => self.base_rate,
            Score::ForecastRate => self.forecast_rate,
            Score::FrequencyBias => self.frequency_bias,
            Score::HitRate => self.hit_rate,
            Score::FalseAlarmRate => self.false_alarm_rate,
            Score::FalseAlarmRatio => self.false_alarm_ratio,
            Score::SuccessRatio => self.success_ratio,
            Score::ProportionCorrect => self.proportion_correct,
            Score::CriticalSuccessIndex => self.critical_success_index,
            Score::GilbertSkillScore => self.gilbert_skill_score,
            Score::HeidkeSkillScore => self.heidke_skill_score,
            Score::PeirceSkillScore => self.peirce_skill_score,
            Score::ClaytonSkillScore => self.clayton_skill_score,
            Score::DoolittleSkillScore => self.doolittle_skill_score,
            Score::LogOddsRatio => self.log_odds_ratio,
            Score::OddsRatioSkillScore => self.odds_ratio_skill_score,
        }
    }
}
