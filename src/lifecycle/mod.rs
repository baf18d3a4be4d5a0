//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (controller.rs):
//!     Detect run mode → Register signal handler → Serve
//!
//! Shutdown (shutdown.rs):
//!     Signal received → Stop accepting → Drain → Log signal → Flush logs → Exit 0
//!
//! Signals (signals.rs):
//!     Standalone: SIGINT (Ctrl-C)
//!     Managed:    SIGTERM (container supervisor)
//! ```
//!
//! # Design Decisions
//! - Run mode is chosen once at bootstrap and never changes
//! - Exactly one termination signal is registered per mode
//! - The shutdown sequence runs at most once; later signals are ignored
//! - Exit status is 0 for either signal

pub mod controller;
pub mod shutdown;
pub mod signals;

pub use controller::{LifecycleController, RunMode};
pub use shutdown::{ShutdownSequence, ShutdownSteps, TracingShutdown};
pub use signals::{SignalListener, TermSignal};
