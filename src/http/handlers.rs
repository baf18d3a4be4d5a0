//! HTTP request handlers.

use axum::extract::State;
use axum::http::HeaderMap;

use crate::http::server::AppState;

/// Permissions probed on the notification topic per request.
pub const PERMISSIONS_TO_CHECK: [&str; 2] = ["pubsub.topics.publish", "pubsub.topics.update"];

/// `GET /` — hello route with a Pub/Sub permission probe.
///
/// Logs one entry with custom fields and one plain entry carrying the
/// request ID, asks the collaborator which of [`PERMISSIONS_TO_CHECK`]
/// the caller holds on the configured topic, reports the granted subset
/// on stdout, and answers with a fixed body.
pub async fn hello(State(state): State<AppState>, headers: HeaderMap) -> &'static str {
    tracing::info!(
        log_field = "custom-entry",
        arbitrary_field = "custom-entry",
        "hello request received"
    );

    let request_id = headers
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");
    tracing::info!(request_id = %request_id, "handling hello request");

    let topic_path = state.topic.path();
    let allowed = match state
        .checker
        .test_permissions(&topic_path, &PERMISSIONS_TO_CHECK)
        .await
    {
        Ok(granted) => granted,
        Err(e) => {
            // Degrade to the empty set; the route contract stays 200.
            tracing::warn!(
                resource = %topic_path,
                error = %e,
                "permission check failed, reporting no permissions"
            );
            Vec::new()
        }
    };

    println!("Allowed permissions for topic {}: {:?}", topic_path, allowed);

    "Hello, World!"
}
