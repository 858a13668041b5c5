//! The monitor loop: probe, restore on failure, maintain, sleep.

use std::path::Path;
use std::time::Duration;

use tokio::sync::watch;
use tracing::{info, warn};

use gsmon_health::{probe, restore_access};
use gsmon_maintenance::run_maintenance;
use gsmon_settings::Settings;

/// Run the monitoring loop until the shutdown channel fires.
///
/// Probe and restoration failures are absorbed and logged; the cycle always
/// reaches maintenance regardless of restoration outcome. Maintenance
/// errors propagate and terminate the daemon.
pub async fn run(
    settings: &Settings,
    log_dir: &Path,
    mut shutdown: watch::Receiver<bool>,
) -> anyhow::Result<()> {
    info!(endpoint = %settings.gsocket_endpoint, "starting gsocket monitor");

    loop {
        let outcome = probe(
            &settings.gsocket_endpoint,
            Duration::from_secs(settings.timeout),
        )
        .await;

        if !outcome.is_success() {
            warn!("attempting to restore gsocket access");
            restore_access(settings.max_retries).await;
        }

        run_maintenance(settings, log_dir)?;

        info!(seconds = settings.monitor_interval, "sleeping until next cycle");
        tokio::select! {
            _ = tokio::time::sleep(Duration::from_secs(settings.monitor_interval)) => {}
            _ = shutdown.changed() => {
                info!("monitor loop shutting down");
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// One full cycle against an unreachable endpoint: probe fails, the
    /// restoration stub succeeds immediately, maintenance runs, and the
    /// loop parks in its inter-cycle sleep until shut down.
    #[tokio::test]
    async fn cycle_completes_and_loop_stops_on_shutdown() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings {
            monitor_interval: 3600,
            gsocket_endpoint: "127.0.0.1:1".to_string(),
            max_retries: 3,
            timeout: 1,
            maintenance_enabled: true,
        };

        let (tx, rx) = watch::channel(false);
        tx.send(true).unwrap();

        let result = tokio::time::timeout(
            Duration::from_secs(30),
            run(&settings, dir.path(), rx),
        )
        .await;

        assert!(result.expect("loop should stop before the timeout").is_ok());
    }

    #[tokio::test]
    async fn maintenance_failure_is_fatal_to_the_loop() {
        let settings = Settings {
            monitor_interval: 3600,
            gsocket_endpoint: "127.0.0.1:1".to_string(),
            max_retries: 1,
            timeout: 1,
            maintenance_enabled: true,
        };

        let (_tx, rx) = watch::channel(false);
        let result = tokio::time::timeout(
            Duration::from_secs(30),
            run(&settings, Path::new("/nonexistent/gsmon-test-logs"), rx),
        )
        .await;

        assert!(result.expect("loop should error before the timeout").is_err());
    }
}
