//! Tool Router - builds the rmcp ToolRouter for STDIO/TCP transport.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::common::create_route;
use super::definitions::*;
use crate::domains::cpanel::CpanelClient;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(client: Arc<CpanelClient>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(create_route::<AddEmailAccountTool, S>(client.clone()))
        .with_route(create_route::<DeleteEmailAccountTool, S>(client.clone()))
        .with_route(create_route::<ListEmailAccountsTool, S>(client.clone()))
        .with_route(create_route::<GetEmailSettingsTool, S>(client.clone()))
        .with_route(create_route::<UpdateQuotaTool, S>(client.clone()))
        .with_route(create_route::<ChangePasswordTool, S>(client.clone()))
        .with_route(create_route::<CreateEmailForwarderTool, S>(client.clone()))
        .with_route(create_route::<DeleteEmailForwarderTool, S>(client.clone()))
        .with_route(create_route::<ListEmailForwardersTool, S>(client.clone()))
        .with_route(create_route::<GetForwarderSettingsTool, S>(client.clone()))
        .with_route(create_route::<GetDnsRecordsTool, S>(client.clone()))
        .with_route(create_route::<AddDnsRecordTool, S>(client.clone()))
        .with_route(create_route::<EditDnsRecordTool, S>(client.clone()))
        .with_route(create_route::<DeleteDnsRecordTool, S>(client))
}
