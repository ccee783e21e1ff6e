use chrono::{NaiveTime, Timelike as _};

pub fn minutes_of_day(time: &NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

/// Running `sum(score * weight) / sum(weight)` over whichever components
/// are actually present.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedMean {
    weighted_sum: f64,
    weight_sum: f64,
}

impl WeightedMean {
    pub fn add(&mut self, score: f64, weight: f64) {
        self.weighted_sum += score * weight;
        self.weight_sum += weight;
    }

    pub fn add_opt(&mut self, score: Option<f64>, weight: f64) {
        if let Some(score) = score {
            self.add(score, weight);
        }
    }

    pub fn weight(&self) -> f64 {
        self.weight_sum
    }

    pub fn mean(&self) -> Option<f64> {
        if self.weight_sum > 0.0 {
            Some(self.weighted_sum / self.weight_sum)
        } else {
            None
        }
    }
}

/// Maps a 0-1 fraction onto a rounded, clamped 0-100 score.
pub fn to_score(fraction: f64) -> u8 {
    (fraction * 100.0).round().clamp(0.0, 100.0) as u8
}

pub fn round_float(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
