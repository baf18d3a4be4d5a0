//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once at bootstrap
//! - Pick the output format from the run mode
//! - Provide the blocking flush used by the shutdown sequence
//!
//! # Design Decisions
//! - Pretty format with a debug filter for standalone (development) runs
//! - JSON lines with an info filter for managed runs
//! - `RUST_LOG` overrides the default filter in either mode

use std::io::{self, Write};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::lifecycle::RunMode;

/// Handle to the logging pipeline.
///
/// `flush` blocks until buffered entries are written, so the shutdown
/// sequence can guarantee no entries are lost before exit.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogHandle;

impl LogHandle {
    pub fn new() -> Self {
        Self
    }

    /// Drain stdout and stderr. Both streams carry log output: stdout for
    /// the subscriber, stderr as the shutdown fallback sink.
    pub fn flush(&self) -> io::Result<()> {
        io::stdout().flush()?;
        io::stderr().flush()
    }
}

/// Install the global subscriber for this run mode. Call once, from `main`.
pub fn init_logging(mode: RunMode) -> LogHandle {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match mode {
        RunMode::Standalone => EnvFilter::new("sub_notify_service=debug,tower_http=debug"),
        RunMode::Managed => EnvFilter::new("info"),
    });

    match mode {
        RunMode::Standalone => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
        RunMode::Managed => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
    }

    LogHandle::new()
}
