use std::fmt::Display;

use lifeindex_types::SleepStages;
use serde::Serialize;

use crate::helpers::time_math::{WeightedMean, to_score};

pub struct SleepScoreCalculator;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SleepScore {
    pub value: u8,
    pub duration: f64,
    /// Only scored when stage data is available.
    pub quality: Option<f64>,
    pub interruptions: Option<f64>,
}

/// Three-factor nightly sleep score: duration, stage quality and
/// interruptions.
///
/// Oversleeping is never penalized. Without stage data the score is driven by
/// duration alone since the result is normalized by the weight actually used.
impl SleepScoreCalculator {
    const DURATION_WEIGHT: f64 = 0.50;
    const QUALITY_WEIGHT: f64 = 0.30;
    const INTERRUPTION_WEIGHT: f64 = 0.20;

    /// 7 hours, lower end of the 7-8h ideal.
    pub const IDEAL_MIN_MINUTES: f64 = 420.0;

    const DEFICIT_SCALE: f64 = 0.35;
    const DEFICIT_EXPONENT: f64 = 1.3;

    const DEEP_IDEAL: (f64, f64) = (0.12, 0.20);
    const REM_IDEAL: (f64, f64) = (0.15, 0.25);
    const STAGE_ABOVE_IDEAL: f64 = 0.95;
    const STAGE_FLOOR: f64 = 0.4;

    const MIN_INTERRUPTION_SCORE: f64 = 0.3;

    pub fn calculate(sleep_minutes: Option<f64>, stages: Option<&SleepStages>) -> Option<SleepScore> {
        let minutes = sleep_minutes.filter(|m| *m > 0.0)?;
        let stages = stages.filter(|s| s.has_data());

        let duration = Self::duration_score(minutes);
        let quality = stages.map(Self::quality_score);
        let interruptions = stages.map(|s| Self::interruption_score(s.awake_fraction()));

        let mut mean = WeightedMean::default();
        mean.add(duration, Self::DURATION_WEIGHT);
        mean.add_opt(quality, Self::QUALITY_WEIGHT);
        mean.add_opt(interruptions, Self::INTERRUPTION_WEIGHT);

        let value = mean.mean().map(to_score).unwrap_or_default();
        debug!(
            "sleep score {value}: duration {duration:.3}, quality {quality:?}, interruptions {interruptions:?}"
        );

        Some(SleepScore {
            value,
            duration,
            quality,
            interruptions,
        })
    }

    /// Full marks from 7 hours up, a steepening penalty below.
    pub fn duration_score(minutes: f64) -> f64 {
        if minutes >= Self::IDEAL_MIN_MINUTES {
            return 1.0;
        }

        let deficit_hours = (Self::IDEAL_MIN_MINUTES - minutes) / 60.0;
        let penalty = (deficit_hours * Self::DEFICIT_SCALE).powf(Self::DEFICIT_EXPONENT);
        (1.0 - penalty).max(0.0)
    }

    pub fn quality_score(stages: &SleepStages) -> f64 {
        let deep = Self::stage_score(stages.deep_fraction(), Self::DEEP_IDEAL);
        let rem = Self::stage_score(stages.rem_fraction(), Self::REM_IDEAL);
        0.6 * deep + 0.4 * rem
    }

    fn stage_score(fraction: f64, (low, high): (f64, f64)) -> f64 {
        if fraction > high {
            Self::STAGE_ABOVE_IDEAL
        } else if fraction >= low {
            1.0
        } else {
            Self::STAGE_FLOOR + (1.0 - Self::STAGE_FLOOR) * (fraction / low)
        }
    }

    pub fn interruption_score(awake_fraction: f64) -> f64 {
        if awake_fraction <= 0.05 {
            1.0
        } else if awake_fraction <= 0.10 {
            0.90
        } else if awake_fraction <= 0.15 {
            0.75
        } else if awake_fraction <= 0.20 {
            0.60
        } else {
            (1.0 - awake_fraction).max(Self::MIN_INTERRUPTION_SCORE)
        }
    }
}

impl SleepScore {
    pub fn label(&self) -> SleepLabel {
        SleepLabel::for_score(self.value)
    }
}

impl Display for SleepScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SleepLabel {
    Excellent,
    Great,
    Good,
    Fair,
    Poor,
}

impl SleepLabel {
    pub fn for_score(score: u8) -> Self {
        match score {
            96.. => Self::Excellent,
            81..=95 => Self::Great,
            61..=80 => Self::Good,
            41..=60 => Self::Fair,
            _ => Self::Poor,
        }
    }

    /// Qualitative band name used by the reference scale.
    pub fn rating(self) -> &'static str {
        match self {
            Self::Excellent => "Very High",
            Self::Great => "High",
            Self::Good => "OK",
            Self::Fair => "Low",
            Self::Poor => "Very Low",
        }
    }
}

impl Display for SleepLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Excellent => "Excellent",
            Self::Great => "Great",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(minutes: f64, stages: Option<SleepStages>) -> u8 {
        SleepScoreCalculator::calculate(Some(minutes), stages.as_ref())
            .unwrap()
            .value
    }

    #[test]
    fn no_sleep_has_no_score() {
        assert!(SleepScoreCalculator::calculate(None, None).is_none());
        assert!(SleepScoreCalculator::calculate(Some(0.0), None).is_none());
        assert!(SleepScoreCalculator::calculate(Some(-30.0), None).is_none());
    }

    #[test]
    fn ideal_duration_without_stages() {
        assert_eq!(score(450.0, None), 100);
        assert_eq!(score(420.0, None), 100);
    }

    #[test]
    fn oversleeping_is_not_penalized() {
        assert_eq!(score(600.0, None), 100);
    }

    #[test]
    fn duration_penalty_curve() {
        // one hour short: (0.35)^1.3
        let one_hour = SleepScoreCalculator::duration_score(360.0);
        assert!((one_hour - (1.0 - 0.35_f64.powf(1.3))).abs() < 1e-12);

        let two_hours = SleepScoreCalculator::duration_score(300.0);
        assert!((two_hours - (1.0 - 0.7_f64.powf(1.3))).abs() < 1e-12);

        assert!(one_hour > two_hours);
        assert_eq!(SleepScoreCalculator::duration_score(0.0), 0.0);
    }

    #[test]
    fn duration_only_score_uses_duration_shape() {
        let expected = (SleepScoreCalculator::duration_score(300.0) * 100.0).round() as u8;
        assert_eq!(score(300.0, None), expected);
    }

    #[test]
    fn empty_stages_count_as_missing() {
        assert_eq!(score(300.0, Some(SleepStages::default())), score(300.0, None));
        let result =
            SleepScoreCalculator::calculate(Some(300.0), Some(&SleepStages::default())).unwrap();
        assert!(result.quality.is_none());
        assert!(result.interruptions.is_none());
    }

    #[test]
    fn stage_scores() {
        let ideal = SleepStages::new(10.0, 80.0, 260.0, 60.0);
        assert_eq!(SleepScoreCalculator::quality_score(&ideal), 1.0);

        // deep 25% -> 0.95, REM 20% -> 1.0
        let deep_heavy = SleepStages::new(10.0, 80.0, 220.0, 100.0);
        let quality = SleepScoreCalculator::quality_score(&deep_heavy);
        assert!((quality - (0.6 * 0.95 + 0.4)).abs() < 1e-12);

        // no deep, no REM -> floor for both
        let light_only = SleepStages::new(10.0, 0.0, 400.0, 0.0);
        let quality = SleepScoreCalculator::quality_score(&light_only);
        assert!((quality - 0.4).abs() < 1e-12);

        // deep 6% -> halfway between floor and full
        let shallow = SleepStages::new(0.0, 80.0, 296.0, 24.0);
        let quality = SleepScoreCalculator::quality_score(&shallow);
        assert!((quality - (0.6 * 0.7 + 0.4)).abs() < 1e-12);
    }

    #[test]
    fn interruption_steps() {
        assert_eq!(SleepScoreCalculator::interruption_score(0.0), 1.0);
        assert_eq!(SleepScoreCalculator::interruption_score(0.05), 1.0);
        assert_eq!(SleepScoreCalculator::interruption_score(0.08), 0.90);
        assert_eq!(SleepScoreCalculator::interruption_score(0.12), 0.75);
        assert_eq!(SleepScoreCalculator::interruption_score(0.18), 0.60);
        assert_eq!(SleepScoreCalculator::interruption_score(0.25), 0.75);
        assert_eq!(SleepScoreCalculator::interruption_score(0.9), 0.3);
    }

    #[test]
    fn waking_up_more_lowers_score() {
        // 300 minutes asleep: REM 20%, deep 15%
        let restless = SleepStages::new(100.0, 60.0, 195.0, 45.0);
        let settled = SleepStages::new(15.0, 60.0, 195.0, 45.0);
        assert!(score(300.0, Some(restless)) < score(300.0, Some(settled)));
    }

    #[test]
    fn full_score_with_stages() {
        let stages = SleepStages::new(10.0, 90.0, 280.0, 70.0);
        let result = SleepScoreCalculator::calculate(Some(440.0), Some(&stages)).unwrap();
        assert_eq!(result.value, 100);
        assert_eq!(result.label(), SleepLabel::Excellent);
        assert_eq!(result.quality, Some(1.0));
        assert_eq!(result.interruptions, Some(1.0));
    }

    #[test]
    fn weighted_components() {
        // 300 min, awake 25%, ideal stages
        let stages = SleepStages::new(100.0, 60.0, 195.0, 45.0);
        let duration = SleepScoreCalculator::duration_score(300.0);
        let expected = 0.5 * duration + 0.3 * 1.0 + 0.2 * 0.75;
        assert_eq!(score(300.0, Some(stages)), (expected * 100.0).round() as u8);
    }

    #[test]
    fn label_breakpoints() {
        assert_eq!(SleepLabel::for_score(100), SleepLabel::Excellent);
        assert_eq!(SleepLabel::for_score(96), SleepLabel::Excellent);
        assert_eq!(SleepLabel::for_score(95), SleepLabel::Great);
        assert_eq!(SleepLabel::for_score(81), SleepLabel::Great);
        assert_eq!(SleepLabel::for_score(80), SleepLabel::Good);
        assert_eq!(SleepLabel::for_score(61), SleepLabel::Good);
        assert_eq!(SleepLabel::for_score(60), SleepLabel::Fair);
        assert_eq!(SleepLabel::for_score(41), SleepLabel::Fair);
        assert_eq!(SleepLabel::for_score(40), SleepLabel::Poor);
        assert_eq!(SleepLabel::for_score(0), SleepLabel::Poor);
        assert_eq!(SleepLabel::Good.rating(), "OK");
    }
}
