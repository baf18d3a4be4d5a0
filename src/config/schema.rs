//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServiceConfig {
    /// Listener configuration (bind address, request timeout).
    pub listener: ListenerConfig,

    /// Permission-check target and endpoint.
    pub iam: IamConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address. Standalone runs serve on loopback only.
    pub bind_address: String,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:8080".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Permission-check configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct IamConfig {
    /// Project owning the notification topic.
    pub project: String,

    /// Topic whose publish/update permissions are probed.
    pub topic: String,

    /// Base URL of the Pub/Sub API.
    pub endpoint: String,

    /// Environment variable holding an optional bearer token.
    pub auth_token_env: String,

    /// Timeout for the permission-check call in seconds.
    pub timeout_secs: u64,
}

impl Default for IamConfig {
    fn default() -> Self {
        Self {
            project: "ovy-staging".to_string(),
            topic: "sub-notifications-queue-ios-staging".to_string(),
            endpoint: "https://pubsub.googleapis.com".to_string(),
            auth_token_env: "PUBSUB_ACCESS_TOKEN".to_string(),
            timeout_secs: 10,
        }
    }
}
