//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured tracing events)
//!
//! Consumers:
//!     → stdout (pretty format in standalone runs)
//!     → stdout as JSON lines (managed runs, for log aggregation)
//! ```
//!
//! # Design Decisions
//! - Structured logging (JSON) for machine parsing in production
//! - Request ID flows through handler log entries
//! - Shutdown flushes the pipeline before exit

pub mod logging;

pub use logging::{init_logging, LogHandle};
