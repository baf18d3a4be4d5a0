//! Sub-notify service library.
//!
//! A small HTTP service that answers a hello route, probes the caller's
//! IAM permissions on a Pub/Sub notification topic, and shuts down
//! cleanly on termination signals.

pub mod config;
pub mod http;
pub mod iam;
pub mod lifecycle;
pub mod observability;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use iam::PermissionChecker;
pub use lifecycle::{LifecycleController, RunMode};
