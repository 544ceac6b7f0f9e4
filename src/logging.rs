//! Diagnostics via `tracing`
//!
//! The terminal belongs to the UI, so events only go somewhere when a log
//! file is given. Without one no subscriber is installed and events are dropped.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a plain-text subscriber writing to `path`, filtered by `RUST_LOG` (default `info`).
pub fn init(path: Option<&Path>) -> anyhow::Result<()> {
    let Some(path) = path else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            fmt::layer()
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true),
        )
        .try_init()
        .context("failed to install log subscriber")?;

    tracing::info!(log_file = %path.display(), "logging started");
    Ok(())
}
