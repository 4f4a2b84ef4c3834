//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - Name-based dispatch for tool calls (used by the HTTP transport)
//! - Tool metadata for listing

use serde_json::Value;
use std::sync::Arc;
use tracing::warn;

use rmcp::model::Tool;

use super::ToolError;
use super::definitions::common::{http_handler, to_tool};
use super::definitions::*;
use crate::domains::cpanel::CpanelClient;

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
pub struct ToolRegistry {
    client: Arc<CpanelClient>,
}

impl ToolRegistry {
    /// Create a new tool registry backed by `client`.
    pub fn new(client: Arc<CpanelClient>) -> Self {
        Self { client }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            AddEmailAccountTool::NAME,
            DeleteEmailAccountTool::NAME,
            ListEmailAccountsTool::NAME,
            GetEmailSettingsTool::NAME,
            UpdateQuotaTool::NAME,
            ChangePasswordTool::NAME,
            CreateEmailForwarderTool::NAME,
            DeleteEmailForwarderTool::NAME,
            ListEmailForwardersTool::NAME,
            GetForwarderSettingsTool::NAME,
            GetDnsRecordsTool::NAME,
            AddDnsRecordTool::NAME,
            EditDnsRecordTool::NAME,
            DeleteDnsRecordTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            to_tool::<AddEmailAccountTool>(),
            to_tool::<DeleteEmailAccountTool>(),
            to_tool::<ListEmailAccountsTool>(),
            to_tool::<GetEmailSettingsTool>(),
            to_tool::<UpdateQuotaTool>(),
            to_tool::<ChangePasswordTool>(),
            to_tool::<CreateEmailForwarderTool>(),
            to_tool::<DeleteEmailForwarderTool>(),
            to_tool::<ListEmailForwardersTool>(),
            to_tool::<GetForwarderSettingsTool>(),
            to_tool::<GetDnsRecordsTool>(),
            to_tool::<AddDnsRecordTool>(),
            to_tool::<EditDnsRecordTool>(),
            to_tool::<DeleteDnsRecordTool>(),
        ]
    }

    /// Dispatch a tool call by name.
    ///
    /// Only unknown tools and malformed arguments are errors here; a failing
    /// cPanel operation comes back as an `isError` tool result.
    pub async fn call_tool(&self, name: &str, arguments: Value) -> Result<Value, ToolError> {
        let client = self.client.as_ref();
        match name {
            AddEmailAccountTool::NAME => http_handler::<AddEmailAccountTool>(client, arguments).await,
            DeleteEmailAccountTool::NAME => {
                http_handler::<DeleteEmailAccountTool>(client, arguments).await
            }
            ListEmailAccountsTool::NAME => {
                http_handler::<ListEmailAccountsTool>(client, arguments).await
            }
            GetEmailSettingsTool::NAME => {
                http_handler::<GetEmailSettingsTool>(client, arguments).await
            }
            UpdateQuotaTool::NAME => http_handler::<UpdateQuotaTool>(client, arguments).await,
            ChangePasswordTool::NAME => http_handler::<ChangePasswordTool>(client, arguments).await,
            CreateEmailForwarderTool::NAME => {
                http_handler::<CreateEmailForwarderTool>(client, arguments).await
            }
            DeleteEmailForwarderTool::NAME => {
                http_handler::<DeleteEmailForwarderTool>(client, arguments).await
            }
            ListEmailForwardersTool::NAME => {
                http_handler::<ListEmailForwardersTool>(client, arguments).await
            }
            GetForwarderSettingsTool::NAME => {
                http_handler::<GetForwarderSettingsTool>(client, arguments).await
            }
            GetDnsRecordsTool::NAME => http_handler::<GetDnsRecordsTool>(client, arguments).await,
            AddDnsRecordTool::NAME => http_handler::<AddDnsRecordTool>(client, arguments).await,
            EditDnsRecordTool::NAME => http_handler::<EditDnsRecordTool>(client, arguments).await,
            DeleteDnsRecordTool::NAME => {
                http_handler::<DeleteDnsRecordTool>(client, arguments).await
            }
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}
