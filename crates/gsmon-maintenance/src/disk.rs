//! Disk usage reporting.

use std::path::Path;

use sysinfo::Disks;
use tracing::{info, warn};

use crate::error::{MaintenanceError, MaintenanceResult};

/// Usage percentage above which a warning is logged.
pub const WARN_PERCENT: f64 = 90.0;

/// Total/used/free byte counts for one filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiskUsage {
    pub total: u64,
    pub used: u64,
    pub free: u64,
}

impl DiskUsage {
    /// Used share of the filesystem, rounded to two decimals.
    pub fn percent_used(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let percent = self.used as f64 / self.total as f64 * 100.0;
        (percent * 100.0).round() / 100.0
    }
}

/// Report usage of the filesystem holding `path`.
///
/// Logs the usage at INFO and warns once the used share crosses
/// [`WARN_PERCENT`].
pub fn report_disk_usage(path: &Path) -> MaintenanceResult<()> {
    let usage = query_disk_usage(path)?;
    let percent = usage.percent_used();

    info!(percent, free_bytes = usage.free, "disk usage");
    if percent > WARN_PERCENT {
        warn!(percent, "high disk usage detected");
    }

    Ok(())
}

/// Query filesystem statistics for `path`.
///
/// Prefers the mounted-disk list, picking the longest mount point that
/// contains `path`. On Unix, falls back to raw statvfs block counts when no
/// mount point matches (total = fragment size x total blocks, free =
/// fragment size x blocks available to unprivileged callers).
pub fn query_disk_usage(path: &Path) -> MaintenanceResult<DiskUsage> {
    let disks = Disks::new_with_refreshed_list();
    let best = disks
        .iter()
        .filter(|disk| path.starts_with(disk.mount_point()))
        .max_by_key(|disk| disk.mount_point().as_os_str().len());

    if let Some(disk) = best {
        let total = disk.total_space();
        let free = disk.available_space();
        return Ok(DiskUsage {
            total,
            used: total.saturating_sub(free),
            free,
        });
    }

    statvfs_usage(path)
}

#[cfg(unix)]
fn statvfs_usage(path: &Path) -> MaintenanceResult<DiskUsage> {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let c_path = CString::new(path.as_os_str().as_bytes())
        .map_err(|_| MaintenanceError::DiskQuery("path contains interior NUL".to_string()))?;

    let mut stats: libc::statvfs = unsafe { std::mem::zeroed() };
    let rc = unsafe { libc::statvfs(c_path.as_ptr(), &mut stats) };
    if rc != 0 {
        return Err(MaintenanceError::DiskQuery(
            std::io::Error::last_os_error().to_string(),
        ));
    }

    let total = stats.f_frsize as u64 * stats.f_blocks as u64;
    let free = stats.f_frsize as u64 * stats.f_bavail as u64;
    Ok(DiskUsage {
        total,
        used: total.saturating_sub(free),
        free,
    })
}

#[cfg(not(unix))]
fn statvfs_usage(_path: &Path) -> MaintenanceResult<DiskUsage> {
    Err(MaintenanceError::DiskQuery(
        "no filesystem statistics fallback on this platform".to_string(),
    ))
}
