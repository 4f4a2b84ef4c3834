//! Shutdown signal shared by every transport.

use tracing::{info, warn};

/// Resolve once the process is asked to stop (SIGINT or SIGTERM on unix,
/// Ctrl-C elsewhere).
pub async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut terminate = match signal(SignalKind::terminate()) {
            Ok(sig) => Some(sig),
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                None
            }
        };

        tokio::select! {
            result = tokio::signal::ctrl_c() => match result {
                Ok(()) => info!("Caught SIGINT, shutting down"),
                Err(e) => warn!("Failed to listen for SIGINT: {}", e),
            },
            _ = async {
                match terminate.as_mut() {
                    Some(sig) => { sig.recv().await; }
                    None => std::future::pending::<()>().await,
                }
            } => info!("Caught SIGTERM, shutting down"),
        }
    }

    #[cfg(not(unix))]
    {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Caught CTRL+C, shutting down"),
            Err(e) => warn!("Failed to listen for CTRL+C: {}", e),
        }
    }
}
