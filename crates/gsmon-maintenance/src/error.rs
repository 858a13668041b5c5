//! Error types for maintenance operations.

use thiserror::Error;

/// Result type alias for maintenance operations.
pub type MaintenanceResult<T> = Result<T, MaintenanceError>;

/// Errors that can occur during a maintenance pass.
///
/// The monitor loop does not catch these; a filesystem failure during
/// maintenance terminates the daemon.
#[derive(Debug, Error)]
pub enum MaintenanceError {
    #[error("maintenance i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("disk statistics query failed: {0}")]
    DiskQuery(String),
}
