//! Age-based pruning of log files.

use std::path::Path;
use std::time::{Duration, SystemTime};

use tracing::info;

use crate::error::MaintenanceResult;

/// Delete `log`-suffixed files in `log_dir` older than `max_age`.
///
/// Age is measured from each file's modification time. Files without the
/// suffix, and non-file entries, are never touched. Any file carrying the
/// suffix is eligible, including the daemon's own sink once it ages out.
pub fn prune_logs(log_dir: &Path, max_age: Duration) -> MaintenanceResult<()> {
    let now = SystemTime::now();

    for entry in std::fs::read_dir(log_dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.extension().and_then(|e| e.to_str()) != Some("log") {
            continue;
        }
        let metadata = entry.metadata()?;
        if !metadata.is_file() {
            continue;
        }

        let modified = metadata.modified()?;
        let age = now.duration_since(modified).unwrap_or(Duration::ZERO);
        if age > max_age {
            std::fs::remove_file(&path)?;
            info!(path = %path.display(), "deleted old log file");
        }
    }

    Ok(())
}
