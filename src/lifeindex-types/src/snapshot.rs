use crate::{MetricReadings, SleepStages};

/// Everything one day can feed into the scoring engines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthSnapshot {
    #[serde(default)]
    pub metrics: MetricReadings,
    #[serde(default)]
    pub sleep_stages: Option<SleepStages>,
    #[serde(default)]
    pub hrv_baseline: Option<f64>,
    #[serde(default)]
    pub resting_hr_baseline: Option<f64>,
}
