//! Ordered shutdown sequence.
//!
//! # Responsibilities
//! - Record which signal triggered shutdown (name, not number)
//! - Flush buffered log entries before the process exits
//! - Produce the exit status (0 for either signal)
//!
//! # Design Decisions
//! - The three steps are a trait seam so tests can observe their order
//! - An atomic guard makes the sequence single-shot; a second signal
//!   during flush is ignored rather than undefined
//! - A flush failure goes to stderr and does not change the exit status

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::observability::logging::LogHandle;

use super::signals::TermSignal;

/// Exit status reported after a signal-driven shutdown.
pub const EXIT_SUCCESS: u8 = 0;

/// The ordered steps of a graceful shutdown.
pub trait ShutdownSteps: Send + Sync {
    /// Emit one structured log entry naming the signal.
    fn log_signal(&self, signal: TermSignal);

    /// Block until all buffered log entries reach their destination.
    fn flush_logs(&self) -> io::Result<()>;
}

/// Runs the shutdown steps in order, at most once per process.
pub struct ShutdownSequence<S> {
    steps: S,
    in_progress: AtomicBool,
}

impl<S: ShutdownSteps> ShutdownSequence<S> {
    pub fn new(steps: S) -> Self {
        Self {
            steps,
            in_progress: AtomicBool::new(false),
        }
    }

    /// Execute log → flush and return the exit status.
    ///
    /// Returns `None` when a shutdown is already in progress, leaving the
    /// first sequence to finish undisturbed.
    pub fn execute(&self, signal: TermSignal) -> Option<u8> {
        if self.in_progress.swap(true, Ordering::SeqCst) {
            return None;
        }

        self.steps.log_signal(signal);

        if let Err(e) = self.steps.flush_logs() {
            // stderr is the fallback sink; the exit status stays clean
            eprintln!("log flush failed during shutdown: {e}");
        }

        Some(EXIT_SUCCESS)
    }
}

/// Production steps: a tracing entry followed by a logging-pipeline flush.
pub struct TracingShutdown {
    log: LogHandle,
}

impl TracingShutdown {
    pub fn new(log: LogHandle) -> Self {
        Self { log }
    }
}

impl ShutdownSteps for TracingShutdown {
    fn log_signal(&self, signal: TermSignal) {
        tracing::info!(signal = signal.name(), "caught termination signal");
    }

    fn flush_logs(&self) -> io::Result<()> {
        self.log.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Records each step into an ordered list.
    struct RecordingSteps {
        order: Mutex<Vec<&'static str>>,
        fail_flush: bool,
    }

    impl RecordingSteps {
        fn new(fail_flush: bool) -> Self {
            Self {
                order: Mutex::new(Vec::new()),
                fail_flush,
            }
        }
    }

    impl ShutdownSteps for &RecordingSteps {
        fn log_signal(&self, _signal: TermSignal) {
            self.order.lock().unwrap().push("log");
        }

        fn flush_logs(&self) -> io::Result<()> {
            self.order.lock().unwrap().push("flush");
            if self.fail_flush {
                Err(io::Error::other("sink unavailable"))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn steps_run_in_order_log_flush_exit() {
        let steps = RecordingSteps::new(false);
        let sequence = ShutdownSequence::new(&steps);

        let code = sequence.execute(TermSignal::Interrupt);
        assert_eq!(code, Some(EXIT_SUCCESS));
        steps.order.lock().unwrap().push("exit");

        assert_eq!(*steps.order.lock().unwrap(), vec!["log", "flush", "exit"]);
    }

    #[test]
    fn exit_status_is_zero_for_both_signals() {
        for signal in [TermSignal::Interrupt, TermSignal::Terminate] {
            let steps = RecordingSteps::new(false);
            let sequence = ShutdownSequence::new(&steps);
            assert_eq!(sequence.execute(signal), Some(0));
        }
    }

    #[test]
    fn second_signal_during_shutdown_is_ignored() {
        let steps = RecordingSteps::new(false);
        let sequence = ShutdownSequence::new(&steps);

        assert_eq!(sequence.execute(TermSignal::Terminate), Some(EXIT_SUCCESS));
        assert_eq!(sequence.execute(TermSignal::Terminate), None);

        // The steps ran exactly once.
        assert_eq!(*steps.order.lock().unwrap(), vec!["log", "flush"]);
    }

    #[test]
    fn flush_failure_still_exits_clean() {
        let steps = RecordingSteps::new(true);
        let sequence = ShutdownSequence::new(&steps);
        assert_eq!(sequence.execute(TermSignal::Interrupt), Some(EXIT_SUCCESS));
    }
}
