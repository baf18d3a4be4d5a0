//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, State},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// One recorded permission-check call: (resource, requested permissions).
pub type RecordedCall = (String, Vec<String>);

/// In-process stand-in for the Pub/Sub IAM surface.
///
/// Answers `testIamPermissions` with the intersection of the requested
/// permissions and the configured granted set, recording every call.
#[derive(Clone)]
pub struct MockIam {
    granted: Arc<Vec<String>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockIam {
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

/// Start the mock on an ephemeral port and return its address.
pub async fn start_mock_iam(granted: Vec<String>) -> (SocketAddr, MockIam) {
    let mock = MockIam {
        granted: Arc::new(granted),
        calls: Arc::new(Mutex::new(Vec::new())),
    };

    let app = Router::new()
        .route("/v1/{*rest}", post(test_iam_permissions))
        .with_state(mock.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (addr, mock)
}

async fn test_iam_permissions(
    State(mock): State<MockIam>,
    Path(rest): Path<String>,
    Json(body): Json<Value>,
) -> Json<Value> {
    let resource = rest
        .trim_end_matches(":testIamPermissions")
        .to_string();
    let requested: Vec<String> = body["permissions"]
        .as_array()
        .map(|perms| {
            perms
                .iter()
                .filter_map(|p| p.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();

    mock.calls
        .lock()
        .unwrap()
        .push((resource, requested.clone()));

    let allowed: Vec<String> = requested
        .into_iter()
        .filter(|p| mock.granted.contains(p))
        .collect();

    // The real API omits the field when nothing is granted.
    if allowed.is_empty() {
        Json(json!({}))
    } else {
        Json(json!({ "permissions": allowed }))
    }
}
