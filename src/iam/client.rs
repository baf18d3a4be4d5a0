//! Permission-check client.
//!
//! Talks to the Pub/Sub REST API's `testIamPermissions` method. The call
//! returns the subset of the requested permissions the active credentials
//! hold on the resource; it has no side effects on the topic.

use std::time::Duration;

use futures_util::future::BoxFuture;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use url::Url;

use crate::config::IamConfig;

use super::types::{TestPermissionsRequest, TestPermissionsResponse};

/// Error type for permission checks.
#[derive(Debug, Error)]
pub enum IamError {
    #[error("invalid IAM endpoint: {0}")]
    Endpoint(#[from] url::ParseError),

    #[error("IAM request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("IAM endpoint returned {status}: {body}")]
    Status { status: StatusCode, body: String },
}

/// External collaborator that answers which of the requested permissions
/// the caller holds on a resource.
pub trait PermissionChecker: Send + Sync {
    /// Returns the granted subset of `permissions` for `resource`.
    fn test_permissions<'a>(
        &'a self,
        resource: &'a str,
        permissions: &'a [&'a str],
    ) -> BoxFuture<'a, Result<Vec<String>, IamError>>;
}

/// REST client for the Pub/Sub IAM surface.
pub struct PubsubIamClient {
    client: Client,
    endpoint: Url,
    auth_token: Option<String>,
}

impl PubsubIamClient {
    /// Build a client from config. The bearer token, when present, comes
    /// from the environment variable named in the config.
    pub fn new(config: &IamConfig) -> Result<Self, IamError> {
        let endpoint = Url::parse(&config.endpoint)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        let auth_token = std::env::var(&config.auth_token_env).ok();

        Ok(Self {
            client,
            endpoint,
            auth_token,
        })
    }

    fn request_url(&self, resource: &str) -> Result<Url, IamError> {
        Ok(self
            .endpoint
            .join(&format!("v1/{resource}:testIamPermissions"))?)
    }
}

impl PermissionChecker for PubsubIamClient {
    fn test_permissions<'a>(
        &'a self,
        resource: &'a str,
        permissions: &'a [&'a str],
    ) -> BoxFuture<'a, Result<Vec<String>, IamError>> {
        Box::pin(async move {
            let url = self.request_url(resource)?;
            let body = TestPermissionsRequest {
                permissions: permissions.iter().map(|p| p.to_string()).collect(),
            };

            let mut request = self.client.post(url).json(&body);
            if let Some(token) = &self.auth_token {
                request = request.bearer_auth(token);
            }

            let response = request.send().await?;
            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(IamError::Status { status, body });
            }

            let parsed: TestPermissionsResponse = response.json().await?;
            Ok(parsed.permissions)
        })
    }
}
