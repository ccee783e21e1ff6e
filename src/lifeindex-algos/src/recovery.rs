use std::fmt::Display;

use serde::Serialize;

use crate::helpers::time_math::{WeightedMean, to_score};

/// Readiness from HRV, resting heart rate and sleep, each compared against
/// a personal baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecoveryCalculator {
    pub hrv_baseline: f64,
    pub resting_hr_baseline: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct RecoveryScore(pub u8);

impl Default for RecoveryCalculator {
    fn default() -> Self {
        Self::new(Self::DEFAULT_HRV_BASELINE, Self::DEFAULT_RESTING_HR_BASELINE)
    }
}

impl RecoveryCalculator {
    pub const DEFAULT_HRV_BASELINE: f64 = 50.0;
    pub const DEFAULT_RESTING_HR_BASELINE: f64 = 62.0;

    const HRV_WEIGHT: f64 = 0.40;
    const RESTING_HR_WEIGHT: f64 = 0.30;
    const SLEEP_WEIGHT: f64 = 0.30;

    const SLEEP_IDEAL_MIN: f64 = 420.0;
    const SLEEP_IDEAL_MAX: f64 = 540.0;
    /// Oversleep that costs the full 0.5 allowed by the floor.
    const OVERSLEEP_WINDOW: f64 = 180.0;
    const OVERSLEEP_FLOOR: f64 = 0.5;

    pub fn new(hrv_baseline: f64, resting_hr_baseline: f64) -> Self {
        Self {
            hrv_baseline,
            resting_hr_baseline,
        }
    }

    /// `None` only when none of the three inputs are available.
    pub fn calculate(
        &self,
        hrv: Option<f64>,
        resting_hr: Option<f64>,
        sleep_minutes: Option<f64>,
    ) -> Option<RecoveryScore> {
        let mut mean = WeightedMean::default();
        mean.add_opt(hrv.map(|v| self.hrv_score(v)), Self::HRV_WEIGHT);
        mean.add_opt(
            resting_hr.map(|v| self.resting_hr_score(v)),
            Self::RESTING_HR_WEIGHT,
        );
        mean.add_opt(sleep_minutes.map(Self::sleep_score), Self::SLEEP_WEIGHT);

        let score = RecoveryScore(to_score(mean.mean()?));
        debug!("recovery score {score} (weight {:.2})", mean.weight());
        Some(score)
    }

    /// Above-baseline HRV is capped, never "too high".
    pub fn hrv_score(&self, hrv: f64) -> f64 {
        (hrv / self.hrv_baseline).min(1.0)
    }

    pub fn resting_hr_score(&self, resting_hr: f64) -> f64 {
        (self.resting_hr_baseline / resting_hr).min(1.0)
    }

    pub fn sleep_score(minutes: f64) -> f64 {
        if minutes < Self::SLEEP_IDEAL_MIN {
            (minutes / Self::SLEEP_IDEAL_MIN).max(0.0)
        } else if minutes > Self::SLEEP_IDEAL_MAX {
            let excess = minutes - Self::SLEEP_IDEAL_MAX;
            (1.0 - excess / Self::OVERSLEEP_WINDOW).max(Self::OVERSLEEP_FLOOR)
        } else {
            1.0
        }
    }
}

pub const REST_THRESHOLD: u8 = 40;

pub fn should_rest(score: u8) -> bool {
    score < REST_THRESHOLD
}

impl RecoveryScore {
    pub fn should_rest(self) -> bool {
        should_rest(self.0)
    }

    pub fn label(self) -> RecoveryLabel {
        RecoveryLabel::for_score(self.0)
    }
}

impl Display for RecoveryScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecoveryLabel {
    Ready,
    Moderate,
    Rest,
}

impl RecoveryLabel {
    pub fn for_score(score: u8) -> Self {
        match score {
            67.. => Self::Ready,
            s if should_rest(s) => Self::Rest,
            _ => Self::Moderate,
        }
    }
}

impl Display for RecoveryLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Ready => "Ready",
            Self::Moderate => "Moderate",
            Self::Rest => "Rest",
        })
    }
}
