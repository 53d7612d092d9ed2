//! Optional tracing subscriber for applications embedding the decoder.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the application. `init_logging` is a convenience for binaries and
//! examples that want stderr output without wiring their own.

use crate::error::{DecodeError, Result};
use tracing::{Level, debug};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Output style of the stderr layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogStyle {
    /// Minimal single-line output without timestamps
    Compact,
    /// Lines prefixed with time since start
    #[default]
    Uptime,
}

/// Default filter directive when `RUST_LOG` is unset
pub fn default_directive(level: Level) -> String {
    format!(
        "{}={}",
        env!("CARGO_CRATE_NAME"),
        level.as_str().to_ascii_lowercase()
    )
}

/// Install a global subscriber writing to stderr.
///
/// `RUST_LOG` takes precedence over `level`. Fails if a global subscriber
/// is already set.
pub fn init_logging(level: Level, style: LogStyle) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(level)));

    let installed = match style {
        LogStyle::Compact => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init(),
        LogStyle::Uptime => tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };
    installed.map_err(|e| DecodeError::logging(e.to_string()))?;

    debug!("Logging initialized at level: {}", level);
    Ok(())
}
