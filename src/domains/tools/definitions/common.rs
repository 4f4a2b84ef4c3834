//! Plumbing shared by every cPanel tool.
//!
//! A tool is a unit struct implementing [`CpanelTool`]: a name, a description,
//! a parameter type and one call into [`CpanelClient`]. The generic functions
//! below turn that into rmcp metadata, a STDIO/TCP route and an HTTP handler,
//! and convert client errors into structured `{"error": ...}` results so they
//! never surface as protocol faults.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::domains::cpanel::{CpanelClient, CpanelError, CpanelResult};
use crate::domains::tools::ToolError;

/// A single tool backed by one client operation.
#[async_trait::async_trait]
pub trait CpanelTool: Send + Sync + 'static {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Arguments accepted by the tool.
    type Params: DeserializeOwned + JsonSchema + Send + 'static;

    /// Run the operation against the cPanel server.
    async fn call(client: &CpanelClient, params: Self::Params) -> CpanelResult<Value>;
}

/// Parameters for tools that take none.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct NoParams {}

/// Parameters for tools scoped to a single domain.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DomainParams {
    /// The domain to operate on (e.g., "example.com")
    pub domain: String,
}

/// Execute the tool logic and fold any client error into the result.
#[instrument(skip_all, fields(tool = T::NAME))]
pub async fn execute<T: CpanelTool>(client: &CpanelClient, params: T::Params) -> CallToolResult {
    info!("Tool called");

    match T::call(client, params).await {
        Ok(value) => success_result(value),
        Err(e) => {
            warn!(kind = e.kind(), "{}", e);
            error_result(&e)
        }
    }
}

/// Successful result: the remote response verbatim.
pub fn success_result(value: Value) -> CallToolResult {
    CallToolResult {
        content: vec![Content::text(value.to_string())],
        structured_content: Some(value),
        is_error: Some(false),
        meta: None,
    }
}

/// Failed result carrying `{"error": <message>, "kind": <class>}`.
pub fn error_result(error: &CpanelError) -> CallToolResult {
    let payload = serde_json::json!({
        "error": error.to_string(),
        "kind": error.kind(),
    });

    CallToolResult {
        content: vec![Content::text(payload.to_string())],
        structured_content: Some(payload),
        is_error: Some(true),
        meta: None,
    }
}

/// Create a Tool model for `T` (metadata).
pub fn to_tool<T: CpanelTool>() -> Tool {
    Tool {
        name: T::NAME.into(),
        description: Some(T::DESCRIPTION.into()),
        input_schema: cached_schema_for_type::<T::Params>(),
        annotations: None,
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    }
}

/// Create a ToolRoute for STDIO/TCP transport.
pub fn create_route<T, S>(client: Arc<CpanelClient>) -> ToolRoute<S>
where
    T: CpanelTool,
    S: Send + Sync + 'static,
{
    ToolRoute::new_dyn(to_tool::<T>(), move |ctx: ToolCallContext<'_, S>| {
        let args = ctx.arguments.clone().unwrap_or_default();
        let client = client.clone();
        async move {
            let params: T::Params = serde_json::from_value(Value::Object(args))
                .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
            Ok(execute::<T>(&client, params).await)
        }
        .boxed()
    })
}

/// HTTP handler for `T` (called via ToolRegistry).
///
/// Serializes the full CallToolResult to preserve `structuredContent`.
pub async fn http_handler<T: CpanelTool>(
    client: &CpanelClient,
    arguments: Value,
) -> Result<Value, ToolError> {
    let params: T::Params = serde_json::from_value(arguments)
        .map_err(|e| ToolError::invalid_arguments(format!("{}: {}", T::NAME, e)))?;

    let result = execute::<T>(client, params).await;
    serde_json::to_value(&result).map_err(|e| ToolError::internal(e.to_string()))
}
