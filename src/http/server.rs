//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with the service's handlers
//! - Wire up middleware (request ID, tracing, timeout)
//! - Serve on a caller-supplied listener with graceful shutdown

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServiceConfig;
use crate::http::handlers;
use crate::iam::{PermissionChecker, TopicPath};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub checker: Arc<dyn PermissionChecker>,
    pub topic: TopicPath,
}

/// HTTP server for the service.
///
/// Construction only builds the router; nothing is bound until [`run`]
/// receives a listener.
///
/// [`run`]: HttpServer::run
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and
    /// permission-check collaborator.
    pub fn new(config: ServiceConfig, checker: Arc<dyn PermissionChecker>) -> Self {
        let state = AppState {
            checker,
            topic: TopicPath::new(&config.iam.project, &config.iam.topic),
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        Router::new()
            .route("/", get(handlers::hello))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.listener.request_timeout_secs,
            )))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// Run the server on the given listener until `shutdown` resolves,
    /// then drain in-flight requests and return.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: impl Future<Output = ()> + Send + 'static,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}
