//! Bounded-retry restoration for a failed probe.

use std::future::Future;
use std::time::Duration;

use tracing::{error, info};

/// Fixed delay between restoration attempts.
const RETRY_DELAY: Duration = Duration::from_secs(5);

/// Run one restoration episode with at most `max_retries` attempts.
///
/// Returns true as soon as an attempt succeeds, without further attempts.
/// Failed attempts are separated by a fixed 5 second delay; exhausting the
/// budget logs an error and returns false. A zero budget performs no
/// attempts at all.
pub async fn restore_access(max_retries: u32) -> bool {
    restore_with(max_retries, RETRY_DELAY, attempt_restore).await
}

/// The restoration action.
///
/// This is a stub that reports success unconditionally; a real deployment
/// would restart services or check firewall rules here.
async fn attempt_restore() -> bool {
    info!("running restoration procedures");
    true
}

/// Retry engine behind [`restore_access`], generic over the attempt so
/// tests can count invocations and collapse the delay.
async fn restore_with<F, Fut>(max_retries: u32, delay: Duration, mut attempt: F) -> bool
where
    F: FnMut() -> Fut,
    Fut: Future<Output = bool>,
{
    for i in 1..=max_retries {
        info!(attempt = i, max_retries, "attempting to restore access");

        if attempt().await {
            info!("access restored successfully");
            return true;
        }

        if i < max_retries {
            tokio::time::sleep(delay).await;
        }
    }

    error!(attempts = max_retries, "failed to restore access");
    false
}
