/// Minutes spent in each sleep stage over one night.
///
/// Totals and fractions are always derived from the four stage counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SleepStages {
    pub awake: f64,
    pub rem: f64,
    pub core: f64,
    pub deep: f64,
}

impl SleepStages {
    pub fn new(awake: f64, rem: f64, core: f64, deep: f64) -> Self {
        Self {
            awake,
            rem,
            core,
            deep,
        }
    }

    pub fn total_asleep(&self) -> f64 {
        self.rem + self.core + self.deep
    }

    /// Time in bed.
    pub fn total(&self) -> f64 {
        self.awake + self.total_asleep()
    }

    pub fn has_data(&self) -> bool {
        self.total() > 0.0
    }

    /// Awake share of time in bed.
    pub fn awake_fraction(&self) -> f64 {
        fraction(self.awake, self.total())
    }

    pub fn deep_fraction(&self) -> f64 {
        fraction(self.deep, self.total_asleep())
    }

    pub fn rem_fraction(&self) -> f64 {
        fraction(self.rem, self.total_asleep())
    }

    pub fn core_fraction(&self) -> f64 {
        fraction(self.core, self.total_asleep())
    }
}

fn fraction(part: f64, whole: f64) -> f64 {
    if whole > 0.0 { part / whole } else { 0.0 }
}
