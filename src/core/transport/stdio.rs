//! STDIO transport implementation.
//!
//! Standard input/output transport for MCP - the default and recommended mode.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult, shutdown::shutdown_signal};
use crate::core::McpServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Run the STDIO transport until the client hangs up or the process is
    /// asked to stop.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        info!("Ready - communicating via stdin/stdout");

        let service = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;

        let cancel = service.cancellation_token();

        tokio::select! {
            result = service.waiting() => {
                result.map_err(|e| TransportError::service(e.to_string()))?;
                info!("STDIO transport finished");
            }
            _ = shutdown_signal() => {
                cancel.cancel();
            }
        }

        Ok(())
    }
}
