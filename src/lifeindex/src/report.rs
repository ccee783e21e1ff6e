use std::fmt::Display;

use chrono::NaiveDateTime;
use lifeindex_algos::{
    CompositeLabel, CompositeScore, CompositeScoreCalculator, MetricContribution,
    RecoveryCalculator, RecoveryLabel, RecoveryScore, SleepLabel, SleepScore,
    SleepScoreCalculator,
    helpers::{format_hm::FormatHM, time_math::round_float},
};
use lifeindex_types::{HealthSnapshot, MetricKind};
use serde::Serialize;

/// Every score the dashboard shows for one day.
#[derive(Debug, Clone, Serialize)]
pub struct DailyReport {
    pub at: NaiveDateTime,
    pub time_aware: bool,
    pub composite: CompositeScore,
    pub composite_label: CompositeLabel,
    pub breakdown: Vec<MetricContribution>,
    pub sleep_minutes: Option<f64>,
    pub sleep: Option<SleepScore>,
    pub sleep_label: Option<SleepLabel>,
    pub recovery: Option<RecoveryScore>,
    pub recovery_label: Option<RecoveryLabel>,
    pub should_rest: Option<bool>,
}

impl DailyReport {
    pub fn evaluate(snapshot: &HealthSnapshot, at: NaiveDateTime, time_aware: bool) -> Self {
        let metrics = &snapshot.metrics;

        let breakdown = CompositeScoreCalculator::breakdown(metrics, time_aware, at);
        let composite = CompositeScoreCalculator::from_breakdown(&breakdown);
        let composite_label = composite.label(time_aware.then(|| at.time()));

        let sleep_minutes = metrics.get(MetricKind::SleepDuration);
        let sleep = SleepScoreCalculator::calculate(sleep_minutes, snapshot.sleep_stages.as_ref());
        if sleep_minutes.is_none() && snapshot.sleep_stages.is_some() {
            warn!("Sleep stages supplied without sleep_duration, skipping sleep score");
        }

        let recovery = RecoveryCalculator::new(
            snapshot
                .hrv_baseline
                .unwrap_or(RecoveryCalculator::DEFAULT_HRV_BASELINE),
            snapshot
                .resting_hr_baseline
                .unwrap_or(RecoveryCalculator::DEFAULT_RESTING_HR_BASELINE),
        )
        .calculate(
            metrics.get(MetricKind::HeartRateVariability),
            metrics.get(MetricKind::RestingHeartRate),
            sleep_minutes,
        );

        Self {
            at,
            time_aware,
            composite,
            composite_label,
            breakdown,
            sleep_minutes,
            sleep_label: sleep.map(|s| s.label()),
            sleep,
            recovery_label: recovery.map(RecoveryScore::label),
            should_rest: recovery.map(RecoveryScore::should_rest),
            recovery,
        }
    }
}

impl Display for DailyReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "LifeIndex: {} ({})\nEvaluated at: {}{}\n",
            self.composite,
            self.composite_label,
            self.at.format("%Y-%m-%d %H:%M"),
            if self.time_aware { "" } else { " (full day)" },
        ))?;

        for metric in &self.breakdown {
            f.write_fmt(format_args!(
                "\t{}: {} {} (target {}) -> {}\n",
                metric.kind,
                round_float(metric.value),
                metric.kind.unit(),
                metric.target,
                round_float(metric.score),
            ))?;
        }

        match (self.sleep, self.sleep_label, self.sleep_minutes) {
            (Some(sleep), Some(label), Some(minutes)) => f.write_fmt(format_args!(
                "Sleep: {} ({}, {}) over {}\n",
                sleep,
                label,
                label.rating(),
                minutes.format_hm()
            ))?,
            _ => f.write_str("Sleep: no data\n")?,
        }

        match (self.recovery, self.recovery_label) {
            (Some(recovery), Some(label)) => f.write_fmt(format_args!(
                "Recovery: {} ({}){}",
                recovery,
                label,
                if recovery.should_rest() { ", consider a rest day" } else { "" }
            )),
            _ => f.write_str("Recovery: no data"),
        }
    }
}
