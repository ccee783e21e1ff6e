#[macro_use]
extern crate serde;

mod error;
pub use error::TypesError;

pub mod metrics;
pub use metrics::{MetricKind, MetricReadings, TargetRange};

pub mod sleep;
pub use sleep::SleepStages;

pub mod profile;
pub use profile::{ActivityLevel, BiologicalSex, BodyProfile, GoalType};

mod snapshot;
pub use snapshot::HealthSnapshot;
