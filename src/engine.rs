// src/engine.rs
use crate::classify::Classifier;
use crate::config::Config;
use crate::error::Result;
use crate::filesystem;
use crate::grouping::group_key;
use crate::stats::CountTable;
use tracing::{debug, info, trace};

/// Walk `config.root` and count matching files per top-level group.
///
/// # Errors
/// Propagates root validation and traversal failures, and rejects top-level
/// directory names that are not valid UTF-8. Nothing is returned for a
/// partially walked tree.
pub fn run(config: &Config) -> Result<CountTable> {
    let classifier = Classifier::new(config.extensions.iter().cloned());
    let mut table = CountTable::new();
    let mut skipped = 0_u64;

    info!(root = %config.root.display(), "scanning");
    filesystem::walk_files(&config.root, |dir, name| {
        if !classifier.matches(name) {
            skipped += 1;
            trace!(dir = %dir.display(), name = %name.to_string_lossy(), "skipped");
            return Ok(());
        }
        let key = group_key(dir, &config.root)?;
        debug!(%key, name = %name.to_string_lossy(), "counted");
        table.record(key);
        Ok(())
    })?;

    for (key, count) in table.iter() {
        debug!(key, count, "group");
    }
    info!(
        files = table.total(),
        groups = table.len(),
        skipped,
        "scan complete"
    );
    Ok(table)
}
