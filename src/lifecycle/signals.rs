//! OS signal handling.
//!
//! # Responsibilities
//! - Register the termination signal handler for the current run mode
//! - Translate signal delivery into a `TermSignal` event
//!
//! # Design Decisions
//! - Uses Tokio's signal handling (async-safe)
//! - Standalone runs register only SIGINT; managed runs only SIGTERM
//! - All other signals keep default OS behavior

use std::fmt;
use std::io;

use tokio::signal::unix::{signal, Signal, SignalKind};

use super::controller::RunMode;

/// A recognized termination signal, carrying its human-readable name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermSignal {
    /// Interactive interrupt (Ctrl-C).
    Interrupt,
    /// Supervisor-initiated termination.
    Terminate,
}

impl TermSignal {
    /// Signal name as logged during shutdown.
    pub fn name(self) -> &'static str {
        match self {
            TermSignal::Interrupt => "SIGINT",
            TermSignal::Terminate => "SIGTERM",
        }
    }
}

impl fmt::Display for TermSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Handler binding for the single signal registered in this process.
pub struct SignalListener {
    stream: Signal,
    kind: TermSignal,
}

impl SignalListener {
    /// Register the handler matching `mode`. Registration happens here,
    /// at construction, not when the listener is first polled.
    pub fn register(mode: RunMode) -> io::Result<Self> {
        let (kind, stream) = match mode {
            RunMode::Standalone => (TermSignal::Interrupt, signal(SignalKind::interrupt())?),
            RunMode::Managed => (TermSignal::Terminate, signal(SignalKind::terminate())?),
        };
        Ok(Self { stream, kind })
    }

    /// Which signal this listener is bound to.
    pub fn kind(&self) -> TermSignal {
        self.kind
    }

    /// Wait for the registered signal to be delivered.
    pub async fn recv(&mut self) -> TermSignal {
        self.stream.recv().await;
        self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_names_are_human_readable() {
        assert_eq!(TermSignal::Interrupt.name(), "SIGINT");
        assert_eq!(TermSignal::Terminate.name(), "SIGTERM");
        assert_eq!(TermSignal::Terminate.to_string(), "SIGTERM");
    }

    #[tokio::test]
    async fn standalone_registers_interrupt() {
        let listener = SignalListener::register(RunMode::Standalone).unwrap();
        assert_eq!(listener.kind(), TermSignal::Interrupt);
    }

    #[tokio::test]
    async fn managed_registers_terminate() {
        let listener = SignalListener::register(RunMode::Managed).unwrap();
        assert_eq!(listener.kind(), TermSignal::Terminate);
    }
}
