#[macro_use]
extern crate log;

pub(crate) mod composite;
pub use composite::{CompositeLabel, CompositeScore, CompositeScoreCalculator, MetricContribution};

pub(crate) mod sleep;
pub use sleep::{SleepLabel, SleepScore, SleepScoreCalculator};

pub(crate) mod recovery;
pub use recovery::{RecoveryCalculator, RecoveryLabel, RecoveryScore, should_rest};

pub(crate) mod nutrition;
pub use nutrition::{MacroTargets, NutritionCalculator, NutritionPlan};

pub mod helpers;
