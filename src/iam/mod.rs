//! IAM permission checking against the Pub/Sub API.
//!
//! # Data Flow
//! ```text
//! handler
//!     → client.rs (PermissionChecker trait)
//!     → POST {endpoint}/v1/{resource}:testIamPermissions
//!     → granted subset back to the handler
//! ```
//!
//! # Design Decisions
//! - Read-only introspection: the call never mutates the topic
//! - The checker is a trait so tests can substitute the collaborator
//! - Endpoint is configurable; tests point it at a local mock

pub mod client;
pub mod types;

pub use client::{IamError, PermissionChecker, PubsubIamClient};
pub use types::{TestPermissionsRequest, TestPermissionsResponse, TopicPath};
