//! gsmond, the gsocket access monitor and maintenance daemon.
//!
//! Single binary that wires the settings store, the prober/restorer, and
//! the maintainer together behind a small command surface:
//!
//! ```text
//! gsmond [monitor|check|maintain|config] [--config <path>] [--log-dir <path>]
//! ```
//!
//! With no command, the monitoring loop runs until interrupted.

mod logging;
mod monitor;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tokio::sync::watch;
use tracing::info;

use gsmon_settings::SettingsStore;

#[derive(Parser, Debug)]
#[command(
    name = "gsmond",
    about = "gsocket access monitor and maintenance daemon",
    version
)]
struct Cli {
    /// Path to the settings file.
    #[arg(long, global = true, default_value = "/var/lib/gsmon/settings.json")]
    config: PathBuf,

    /// Directory holding the access log and prunable log files.
    #[arg(long, global = true, default_value = "/var/log/gsmon")]
    log_dir: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the monitoring loop until interrupted (default).
    Monitor,
    /// Probe the endpoint once; exit 0 when reachable, 1 otherwise.
    Check,
    /// Run one maintenance pass.
    Maintain,
    /// Print the current settings as JSON.
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let _guard = logging::init(&cli.log_dir)?;

    let settings = SettingsStore::load(&cli.config)?;

    match cli.command.unwrap_or(Command::Monitor) {
        Command::Monitor => {
            let shutdown = spawn_shutdown_watcher();
            monitor::run(&settings, &cli.log_dir, shutdown).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Check => {
            let outcome = gsmon_health::probe(
                &settings.gsocket_endpoint,
                Duration::from_secs(settings.timeout),
            )
            .await;
            Ok(if outcome.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Maintain => {
            gsmon_maintenance::run_maintenance(&settings, &cli.log_dir)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Config => {
            println!("{}", serde_json::to_string_pretty(&settings)?);
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Install a Ctrl-C handler that feeds the loop's shutdown channel.
fn spawn_shutdown_watcher() -> watch::Receiver<bool> {
    let (tx, rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("shutdown signal received");
            let _ = tx.send(true);
        }
    });
    rx
}
