use std::{collections::BTreeMap, fmt::Display, str::FromStr};

use strum::{AsRefStr, EnumIter, IntoEnumIterator};

use crate::TypesError;

/// Every health metric the composite score knows about.
///
/// Weights sum to 1.0. Cumulative metrics accrue over the day and are the only
/// ones whose targets get scaled by time of day.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MetricKind {
    Steps,
    HeartRate,
    HeartRateVariability,
    RestingHeartRate,
    BloodOxygen,
    ActiveCalories,
    SleepDuration,
    MindfulMinutes,
    WorkoutMinutes,
}

impl MetricKind {
    pub fn all() -> impl Iterator<Item = MetricKind> {
        Self::iter()
    }

    pub fn weight(self) -> f64 {
        match self {
            MetricKind::Steps => 0.15,
            MetricKind::HeartRate => 0.05,
            MetricKind::HeartRateVariability => 0.15,
            MetricKind::RestingHeartRate => 0.10,
            MetricKind::BloodOxygen => 0.05,
            MetricKind::ActiveCalories => 0.10,
            MetricKind::SleepDuration => 0.20,
            MetricKind::MindfulMinutes => 0.05,
            MetricKind::WorkoutMinutes => 0.15,
        }
    }

    /// Ideal closed interval for a full day.
    pub fn target(self) -> TargetRange {
        match self {
            MetricKind::Steps => TargetRange::new(7000.0, 10000.0),
            MetricKind::HeartRate => TargetRange::new(60.0, 100.0),
            MetricKind::HeartRateVariability => TargetRange::new(40.0, 100.0),
            MetricKind::RestingHeartRate => TargetRange::new(50.0, 70.0),
            MetricKind::BloodOxygen => TargetRange::new(95.0, 100.0),
            MetricKind::ActiveCalories => TargetRange::new(300.0, 600.0),
            MetricKind::SleepDuration => TargetRange::new(420.0, 540.0),
            MetricKind::MindfulMinutes => TargetRange::new(10.0, 30.0),
            MetricKind::WorkoutMinutes => TargetRange::new(30.0, 60.0),
        }
    }

    pub fn is_cumulative(self) -> bool {
        matches!(
            self,
            MetricKind::Steps
                | MetricKind::ActiveCalories
                | MetricKind::WorkoutMinutes
                | MetricKind::MindfulMinutes
        )
    }

    pub fn unit(self) -> &'static str {
        match self {
            MetricKind::Steps => "steps",
            MetricKind::HeartRate | MetricKind::RestingHeartRate => "bpm",
            MetricKind::HeartRateVariability => "ms",
            MetricKind::BloodOxygen => "%",
            MetricKind::ActiveCalories => "kcal",
            MetricKind::SleepDuration | MetricKind::MindfulMinutes | MetricKind::WorkoutMinutes => {
                "min"
            }
        }
    }
}

impl Display for MetricKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl FromStr for MetricKind {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::iter()
            .find(|kind| kind.as_ref() == s)
            .ok_or_else(|| TypesError::UnknownMetricKind(s.to_owned()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetRange {
    pub lower: f64,
    pub upper: f64,
}

impl TargetRange {
    pub const fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    pub fn span(&self) -> f64 {
        self.upper - self.lower
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Distance from `value` to the nearer bound, zero inside the range.
    /// NaN is infinitely far from any range.
    pub fn distance(&self, value: f64) -> f64 {
        if value.is_nan() {
            f64::INFINITY
        } else if value < self.lower {
            self.lower - value
        } else if value > self.upper {
            value - self.upper
        } else {
            0.0
        }
    }
}

impl Display for TargetRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0}-{:.0}", self.lower, self.upper)
    }
}

/// One evaluation's worth of metric values. A missing key means no data,
/// which is not the same as a recorded zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricReadings(BTreeMap<MetricKind, f64>);

impl MetricReadings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, kind: MetricKind, value: f64) -> Self {
        self.insert(kind, value);
        self
    }

    pub fn insert(&mut self, kind: MetricKind, value: f64) -> Option<f64> {
        self.0.insert(kind, value)
    }

    pub fn get(&self, kind: MetricKind) -> Option<f64> {
        self.0.get(&kind).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(MetricKind, f64)> for MetricReadings {
    fn from_iter<T: IntoIterator<Item = (MetricKind, f64)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
