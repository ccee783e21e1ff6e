use std::fmt::Display;

use chrono::{Local, NaiveDateTime, NaiveTime, Timelike as _};
use lifeindex_types::{MetricKind, MetricReadings, TargetRange};
use serde::Serialize;

use crate::helpers::time_math::{WeightedMean, minutes_of_day, to_score};

pub struct CompositeScoreCalculator;

/// The daily LifeIndex score, 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct CompositeScore(pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricContribution {
    pub kind: MetricKind,
    pub value: f64,
    /// Target actually scored against, scaled when time-aware.
    pub target: TargetRange,
    pub score: f64,
    pub weight: f64,
}

/// Scores a day's metrics against fixed targets and blends them by weight.
///
/// Cumulative targets shrink early in the day so that 2 000 steps at 08:00 is
/// not treated like 2 000 steps at bedtime. Missing metrics drop out of both the
/// numerator and the denominator.
impl CompositeScoreCalculator {
    /// 06:00
    const WAKE_MINUTE: u32 = 6 * 60;
    /// 23:00
    const BED_MINUTE: u32 = 23 * 60;
    const WAKING_MINUTES: f64 = (Self::BED_MINUTE - Self::WAKE_MINUTE) as f64;

    /// Factor used before the waking day starts. Never zero.
    pub const PRE_WAKE_FACTOR: f64 = 0.05;
    const MIN_WAKING_FACTOR: f64 = 0.1;

    /// Share of the waking day that has elapsed at `time`, in [0.05, 1.0].
    ///
    /// 06:00 itself still counts as pre-wake and yields 0.05, one minute later
    /// the 0.1 floor applies.
    pub fn day_progress_factor(time: NaiveTime) -> f64 {
        let minutes = minutes_of_day(&time);
        if minutes <= Self::WAKE_MINUTE {
            return Self::PRE_WAKE_FACTOR;
        }
        if minutes >= Self::BED_MINUTE {
            return 1.0;
        }

        let elapsed = f64::from(minutes - Self::WAKE_MINUTE) / Self::WAKING_MINUTES;
        elapsed.max(Self::MIN_WAKING_FACTOR)
    }

    pub fn scale_target_for_time(kind: MetricKind, target: TargetRange, factor: f64) -> TargetRange {
        if !kind.is_cumulative() {
            return target;
        }

        let lower = target.lower * factor;
        let upper = (target.upper * factor).max(lower);
        TargetRange::new(lower, upper)
    }

    /// 1.0 inside the target, `exp(-distance / span)` outside it.
    pub fn score_single_metric(value: f64, target: TargetRange, kind: MetricKind) -> f64 {
        let span = target.span();
        if target.contains(value) || span <= 0.0 {
            return 1.0;
        }

        let score = (-target.distance(value) / span).exp();
        trace!("{kind}: {value} outside {target}, score {score:.3}");
        score
    }

    /// Per-metric scores for every kind present in `readings`.
    pub fn breakdown(
        readings: &MetricReadings,
        time_aware: bool,
        at: NaiveDateTime,
    ) -> Vec<MetricContribution> {
        let factor = Self::day_progress_factor(at.time());

        MetricKind::all()
            .filter_map(|kind| {
                let value = readings.get(kind)?;
                let target = if time_aware {
                    Self::scale_target_for_time(kind, kind.target(), factor)
                } else {
                    kind.target()
                };

                Some(MetricContribution {
                    kind,
                    value,
                    target,
                    score: Self::score_single_metric(value, target, kind),
                    weight: kind.weight(),
                })
            })
            .collect()
    }

    pub fn calculate(
        readings: &MetricReadings,
        time_aware: bool,
        at: NaiveDateTime,
    ) -> CompositeScore {
        Self::from_breakdown(&Self::breakdown(readings, time_aware, at))
    }

    pub fn calculate_now(readings: &MetricReadings) -> CompositeScore {
        Self::calculate(readings, true, Local::now().naive_local())
    }

    /// Scores a complete past day, targets are never scaled.
    pub fn calculate_historical(readings: &MetricReadings) -> CompositeScore {
        Self::calculate(readings, false, NaiveDateTime::default())
    }

    pub fn from_breakdown(contributions: &[MetricContribution]) -> CompositeScore {
        let mut mean = WeightedMean::default();
        for contribution in contributions {
            mean.add(contribution.score, contribution.weight);
        }

        let score = mean.mean().map(to_score).unwrap_or_default();
        debug!(
            "composite score {score} from {} metrics (weight {:.2})",
            contributions.len(),
            mean.weight()
        );
        CompositeScore(score)
    }
}

impl CompositeScore {
    pub fn label(self, at: Option<NaiveTime>) -> CompositeLabel {
        CompositeLabel::for_score(self.0, at)
    }
}

impl Display for CompositeScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompositeLabel {
    Excellent,
    Great,
    Good,
    BuildingUp,
    RoomToGrow,
    JustStarting,
    /// Morning replacement for the two lowest tiers.
    GettingStarted,
}

impl CompositeLabel {
    pub fn for_score(score: u8, at: Option<NaiveTime>) -> Self {
        let morning = at.is_some_and(|t| t.hour() < 12);
        match score {
            90.. => Self::Excellent,
            75..=89 => Self::Great,
            60..=74 => Self::Good,
            40..=59 => Self::BuildingUp,
            _ if morning => Self::GettingStarted,
            20..=39 => Self::RoomToGrow,
            _ => Self::JustStarting,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Great => "Great",
            Self::Good => "Good",
            Self::BuildingUp => "Building Up",
            Self::RoomToGrow => "Room to Grow",
            Self::JustStarting => "Just Starting",
            Self::GettingStarted => "Getting Started",
        }
    }
}

impl Display for CompositeLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
