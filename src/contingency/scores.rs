//! Skill scores for binary events.
//!
//! Every score is a pure function of a [`ContingencyCounts`]. Zero
//! denominators are not errors: they follow IEEE-754 and produce `NaN` or
//! `±inf`, which callers aggregating many cases are expected to handle.
//!
//! Reference: Jolliffe & Stephenson (2012), *Forecast Verification*,
//! chapter 3 (Hogan and Mason), tables 3.1 and 3.3.

use super::ContingencyCounts;

impl ContingencyCounts {
    /// Observed event frequency, (a+c)/n.
    pub fn base_rate(&self) -> f64 {
        let (a, _, c, _, n) = self.as_f64();
        (a + c) / n
    }

    /// Forecast event frequency, (a+b)/n.
    pub fn forecast_rate(&self) -> f64 {
        let (a, b, _, _, n) = self.as_f64();
        (a + b) / n
    }

    /// Bias score, (a+b)/(a+c).
    ///
    /// Compares how often the event was forecast with how often it occurred.
    /// Below 1 is underforecasting, above 1 overforecasting. Says nothing
    /// about whether the forecasts matched the observations. Infinite when
    /// the event was never observed but was forecast.
    pub fn frequency_bias(&self) -> f64 {
        let (a, b, c, _, _) = self.as_f64();
        (a + b) / (a + c)
    }

    /// Probability of detection (POD), a/(a+c).
    ///
    /// Fraction of observed events that were forecast. Ignores false alarms,
    /// so it can be inflated by forecasting the event more often; read it
    /// together with [`false_alarm_ratio`](Self::false_alarm_ratio).
    pub fn hit_rate(&self) -> f64 {
        let (a, _, c, _, _) = self.as_f64();
        a / (a + c)
    }

    pub fn probability_of_detection(&self) -> f64 {
        self.hit_rate()
    }

    /// Probability of false detection (POFD), b/(b+d).
    ///
    /// Fraction of observed non-events that were forecast as events. Not to
    /// be confused with the false alarm *ratio*.
    pub fn false_alarm_rate(&self) -> f64 {
        let (_, b, _, d, _) = self.as_f64();
        b / (b + d)
    }

    pub fn probability_of_false_detection(&self) -> f64 {
        self.false_alarm_rate()
    }

    /// False alarm ratio (FAR), b/(a+b).
    ///
    /// Fraction of forecast events that did not occur. Sensitive to the
    /// climatological frequency of the event.
    pub fn false_alarm_ratio(&self) -> f64 {
        let (a, b, _, _, _) = self.as_f64();
        b / (a + b)
    }

    /// a/(a+b), i.e. 1 - FAR.
    pub fn success_ratio(&self) -> f64 {
        let (a, b, _, _, _) = self.as_f64();
        a / (a + b)
    }

    /// Accuracy, (a+d)/n.
    pub fn proportion_correct(&self) -> f64 {
        let (a, _, _, d, n) = self.as_f64();
        (a + d) / n
    }

    /// Threat score, a/(a+b+c).
    ///
    /// Accuracy once correct rejections are removed from consideration.
    /// Penalizes misses and false alarms alike and degrades for rarer
    /// events, since part of the hits come from chance.
    pub fn critical_success_index(&self) -> f64 {
        let (a, b, c, _, _) = self.as_f64();
        a / (a + b + c)
    }

    pub fn threat_score(&self) -> f64 {
        self.critical_success_index()
    }

    /// Gilbert skill score, (a - a_r)/(a+b+c - a_r).
    ///
    /// The threat score adjusted for the hits a random forecast with the same
    /// forecast rate and base rate would get (`a_r`). Range [-1/3, 1], zero
    /// means no skill. Because `a_r` carries `n` in its denominator the score
    /// depends on the correct rejections as well.
    pub fn gilbert_skill_score(&self) -> f64 {
        let (a, b, c, _, _) = self.as_f64();
        let a_r = self.a_random();
        (a - a_r) / (a + b + c - a_r)
    }

    /// Also known as the equitable threat score (ETS).
    pub fn equitable_threat_score(&self) -> f64 {
        self.gilbert_skill_score()
    }

    /// Heidke skill score: proportion correct relative to random chance.
    pub fn heidke_skill_score(&self) -> f64 {
        let (a, _, _, d, n) = self.as_f64();
        let a_r = self.a_random();
        let d_r = self.d_random();
        (a + d - a_r - d_r) / (n - a_r - d_r)
    }

    /// Peirce skill score (Hanssen-Kuipers, true skill statistic).
    ///
    /// (ad - bc)/((b+d)(a+c)), equal to POD - POFD. Independent of the event
    /// frequency, but for rare events dominated by the POD term.
    pub fn peirce_skill_score(&self) -> f64 {
        let (a, b, c, d, _) = self.as_f64();
        (a * d - b * c) / ((b + d) * (a + c))
    }

    /// a/(a+b) - c/(c+d). The Peirce score stratified on the forecasts.
    pub fn clayton_skill_score(&self) -> f64 {
        let (a, b, c, d, _) = self.as_f64();
        a / (a + b) - c / (c + d)
    }

    pub fn doolittle_skill_score(&self) -> f64 {
        let (a, b, c, d, _) = self.as_f64();
        (a * d - b * c) / ((a + b) * (c + d) * (a + c) * (b + d)).sqrt()
    }

    /// ln(ad/bc).
    pub fn log_odds_ratio(&self) -> f64 {
        let (a, b, c, d, _) = self.as_f64();
        (a * d / (b * c)).ln()
    }

    /// Yule's Q, (ad - bc)/(ad + bc).
    pub fn odds_ratio_skill_score(&self) -> f64 {
        let (a, b, c, d, _) = self.as_f64();
        (a * d - b * c) / (a * d + b * c)
    }
}
