#[macro_use]
extern crate log;

pub use lifeindex_algos as algo;
pub use lifeindex_types as types;

mod report;
pub use report::DailyReport;

mod snapshot;
pub use snapshot::load_snapshot;
