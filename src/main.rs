//! sub-notify-service binary.
//!
//! Bootstrap order: detect the run mode, install logging, load config,
//! register the mode's termination signal, bind, serve. On the signal:
//! stop accepting, drain, log the signal, flush logs, exit 0.

use std::process::ExitCode;
use std::sync::Arc;

use tokio::net::TcpListener;

use sub_notify_service::config;
use sub_notify_service::http::HttpServer;
use sub_notify_service::iam::PubsubIamClient;
use sub_notify_service::lifecycle::{LifecycleController, RunMode};
use sub_notify_service::observability::logging::{init_logging, LogHandle};

#[tokio::main]
async fn main() -> ExitCode {
    let mode = RunMode::detect();
    let log = init_logging(mode);

    match run(mode, log).await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!(error = %e, "startup failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(mode: RunMode, log: LogHandle) -> Result<u8, Box<dyn std::error::Error>> {
    tracing::info!(
        mode = mode.as_str(),
        version = env!("CARGO_PKG_VERSION"),
        "sub-notify-service starting"
    );

    let config = config::load_from_env(mode)?;
    tracing::info!(
        bind_address = %config.listener.bind_address,
        project = %config.iam.project,
        topic = %config.iam.topic,
        "Configuration loaded"
    );

    let checker = Arc::new(PubsubIamClient::new(&config.iam)?);
    let mut controller = LifecycleController::new(mode, log)?;

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(address = %local_addr, "Listening for connections");

    let server = HttpServer::new(config, checker);

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
    let mut server_task = tokio::spawn(server.run(listener, async {
        let _ = shutdown_rx.await;
    }));

    let signal = tokio::select! {
        signal = controller.wait_for_signal() => signal,
        result = &mut server_task => {
            // Server stopped without a signal; surface any error.
            result??;
            return Ok(0);
        }
    };

    // Stop accepting and drain in-flight requests before the ordered
    // log → flush → exit sequence.
    let _ = shutdown_tx.send(());
    if let Err(e) = server_task.await? {
        tracing::error!(error = %e, "HTTP server error during drain");
    }

    Ok(controller.shutdown(signal).unwrap_or(0))
}
