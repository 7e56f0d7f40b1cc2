//! Graceful shutdown handling for the HTTP runtime
//!
//! Resolves on SIGINT (Ctrl+C) or SIGTERM so `axum::serve` can drain
//! in-flight requests before the process exits.

use tokio::signal;
use tracing::{error, info};

/// Create a future that completes when a shutdown signal is received
///
/// Listens for SIGTERM (container orchestrators) and SIGINT (Ctrl+C). If a
/// handler cannot be installed the error is logged and that signal is
/// ignored; the other one still triggers shutdown.
///
/// # Examples
///
/// ```no_run
/// use taskboard_http::runtime::shutdown_signal;
/// use tokio::net::TcpListener;
/// use axum::Router;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let app = Router::new();
///     let listener = TcpListener::bind("127.0.0.1:3000").await?;
///
///     axum::serve(listener, app)
///         .with_graceful_shutdown(shutdown_signal())
///         .await?;
///
///     Ok(())
/// }
/// ```
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::timeout;

    #[tokio::test]
    async fn test_shutdown_signal_pends_without_signal() {
        let result = timeout(Duration::from_millis(50), shutdown_signal()).await;
        assert!(result.is_err());
    }
}
