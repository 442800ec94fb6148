//! sysmon — a live terminal dashboard for host and Docker resources.
//!
//! Run with:  `RUST_LOG=info sysmon`

use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the frames on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("sysmon v{} starting", env!("CARGO_PKG_VERSION"));

    let config = mon_config::load(mon_config::default_path()).unwrap_or_else(|e| {
        tracing::error!("{e}; using defaults");
        mon_config::MonitorConfig::default()
    });

    mon_terminal::run(&config).map_err(Into::into)
}
