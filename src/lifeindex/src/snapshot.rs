use std::{fs, path::Path};

use anyhow::Context as _;
use lifeindex_types::HealthSnapshot;

pub fn load_snapshot(path: impl AsRef<Path>) -> anyhow::Result<HealthSnapshot> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading snapshot `{}`", path.display()))?;
    let snapshot: HealthSnapshot = serde_json::from_str(&raw)
        .with_context(|| format!("parsing snapshot `{}`", path.display()))?;

    info!(
        "Loaded snapshot with {} metrics{}",
        snapshot.metrics.len(),
        if snapshot.sleep_stages.is_some() { " and sleep stages" } else { "" }
    );
    Ok(snapshot)
}
