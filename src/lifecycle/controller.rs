//! Process lifecycle controller.
//!
//! # Responsibilities
//! - Hold the run mode chosen by the bootstrap
//! - Own the signal handler binding and the shutdown sequence
//! - Expose explicit wait/shutdown entry points to `main`
//!
//! # Design Decisions
//! - The mode is an explicit parameter, not inferred from invocation
//! - Constructing the controller registers the handler; nothing is
//!   registered at module load
//! - The controller never binds sockets; serving is the caller's step

use std::io;

use crate::observability::logging::LogHandle;

use super::shutdown::{ShutdownSequence, TracingShutdown};
use super::signals::{SignalListener, TermSignal};

/// How the process was started. Set once at bootstrap, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Directly-executed local run: loopback bind, development logging.
    Standalone,
    /// Running under a container supervisor: supervisor-provided port,
    /// production logging.
    Managed,
}

impl RunMode {
    /// Detect the mode from the environment. Cloud Run (and Knative in
    /// general) sets `K_SERVICE` inside managed containers.
    pub fn detect() -> Self {
        if std::env::var_os("K_SERVICE").is_some() {
            RunMode::Managed
        } else {
            RunMode::Standalone
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RunMode::Standalone => "standalone",
            RunMode::Managed => "managed",
        }
    }
}

/// Owns the mode flag, the signal handler binding, and the shutdown
/// sequence for one process lifetime.
pub struct LifecycleController {
    mode: RunMode,
    signals: SignalListener,
    sequence: ShutdownSequence<TracingShutdown>,
}

impl LifecycleController {
    /// Register the termination handler for `mode` and bind the shutdown
    /// sequence to the logging pipeline.
    pub fn new(mode: RunMode, log: LogHandle) -> io::Result<Self> {
        Ok(Self {
            mode,
            signals: SignalListener::register(mode)?,
            sequence: ShutdownSequence::new(TracingShutdown::new(log)),
        })
    }

    pub fn mode(&self) -> RunMode {
        self.mode
    }

    /// Which signal this process is listening for.
    pub fn registered_signal(&self) -> TermSignal {
        self.signals.kind()
    }

    /// Resolves when the registered termination signal is delivered.
    pub async fn wait_for_signal(&mut self) -> TermSignal {
        self.signals.recv().await
    }

    /// Run the log → flush sequence and return the exit status, or `None`
    /// when a shutdown is already in progress.
    pub fn shutdown(&self, signal: TermSignal) -> Option<u8> {
        self.sequence.execute(signal)
    }
}
