//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse)
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: ServiceConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::fmt;
use std::net::SocketAddr;

use url::Url;

use crate::config::schema::ServiceConfig;

/// A single semantic validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    InvalidBindAddress(String),
    EmptyProject,
    EmptyTopic,
    InvalidEndpoint(String),
    ZeroTimeout(&'static str),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidBindAddress(addr) => {
                write!(f, "listener.bind_address is not a socket address: {addr}")
            }
            ValidationError::EmptyProject => write!(f, "iam.project must not be empty"),
            ValidationError::EmptyTopic => write!(f, "iam.topic must not be empty"),
            ValidationError::InvalidEndpoint(url) => {
                write!(f, "iam.endpoint is not a valid URL: {url}")
            }
            ValidationError::ZeroTimeout(field) => write!(f, "{field} must be greater than 0"),
        }
    }
}

/// Check a parsed config for semantic problems, collecting every error.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }
    if config.listener.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("listener.request_timeout_secs"));
    }

    if config.iam.project.is_empty() {
        errors.push(ValidationError::EmptyProject);
    }
    if config.iam.topic.is_empty() {
        errors.push(ValidationError::EmptyTopic);
    }
    if Url::parse(&config.iam.endpoint).is_err() {
        errors.push(ValidationError::InvalidEndpoint(config.iam.endpoint.clone()));
    }
    if config.iam.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("iam.timeout_secs"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
