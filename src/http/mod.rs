//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, graceful shutdown)
//!     → handlers.rs (hello route: log, permission probe, respond)
//! ```
//!
//! # Design Decisions
//! - Request ID added as early as possible for log correlation
//! - Building the router never binds a socket; bind is an explicit step
//! - Handlers are stateless across requests

pub mod handlers;
pub mod server;

pub use server::{AppState, HttpServer};
