//! File-based tracing.
//!
//! The terminal is owned by the TUI, so there is no console layer. Logs go
//! to `<cache dir>/itinera/logs/itinera.log.<date>` with daily rotation.
//! Filter with `RUST_LOG`, e.g. `RUST_LOG=sheet=debug,viewport=debug`.

use std::path::Path;

use color_eyre::eyre::Result;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "info";

pub fn init(log_dir: &Path) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let file_appender = tracing_appender::rolling::daily(log_dir, "itinera.log");
    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()?;

    Ok(())
}
