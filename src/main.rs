//! sitemon — HTTP endpoint availability monitor.
//!
//! # Architecture Overview
//!
//! ```text
//!              ┌──────────────────────────────────────────────────┐
//!              │                    SITEMON                        │
//!              │                                                   │
//!              │   ┌─────────┐  tick   ┌─────────┐                 │
//!   endpoint 1 │◀──│ poller  │◀────────│  timer  │                 │
//!   endpoint 2 │◀──│ poller  │         └─────────┘                 │
//!   endpoint N │◀──│ poller  │  one task per URL                   │
//!              │   └────┬────┘                                     │
//!              │        │ probe outcome                            │
//!              │        ▼                                          │
//!              │   ┌──────────┐ lock  ┌──────────────┐             │
//!              │   │  state   │──────▶│  decision    │             │
//!              │   │  store   │       │  engine      │             │
//!              │   └──────────┘       └──────┬───────┘             │
//!              │                             │ alerts              │
//!              │                             ▼                     │
//!              │                      ┌──────────────┐             │
//!              │                      │  notifier    │──▶ Telegram │
//!              │                      └──────────────┘      / log  │
//!              └──────────────────────────────────────────────────┘
//! ```

use clap::Parser;
use sitemon::lifecycle::{signals, Shutdown};
use sitemon::monitor::MonitorService;
use sitemon::{config, notify, observability};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sitemon")]
#[command(about = "Periodic HTTP endpoint availability monitor", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "./sitemon.toml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Any configuration problem is fatal; once running the config is
    // never re-read.
    let config = config::load_config(&cli.config)?;

    observability::logging::init(&config.observability.log_level);

    tracing::info!(
        endpoints = config.endpoints.len(),
        interval_secs = config.poll.interval_secs,
        probe_timeout_secs = config.poll.probe_timeout_secs,
        content_drift = config.content_drift.enabled,
        "configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => observability::metrics::init_metrics(addr),
            Err(e) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                error = %e,
                "failed to parse metrics address"
            ),
        }
    }

    let notifier = notify::from_config(&config.notification);

    let shutdown = Shutdown::new();
    let mut service = MonitorService::new(config, notifier)?;
    service.start(&shutdown);

    tracing::info!("sitemon started");

    signals::shutdown_signal().await?;
    tracing::info!("shutdown signal received");

    shutdown.trigger();
    service.quiesce().await;

    tracing::info!("shutdown complete");
    Ok(())
}
