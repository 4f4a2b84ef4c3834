//! Email forwarder tools.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use super::common::{CpanelTool, DomainParams, NoParams};
use crate::domains::cpanel::{CpanelClient, CpanelResult};

/// Parameters identifying a forwarder by its source and destination.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ForwarderParams {
    /// The full source email address
    pub email: String,

    /// The full destination email address to forward email to
    pub destination: String,
}

pub struct CreateEmailForwarderTool;

#[async_trait::async_trait]
impl CpanelTool for CreateEmailForwarderTool {
    const NAME: &'static str = "create_email_forwarder";
    const DESCRIPTION: &'static str =
        "Create an email forwarder that redirects mail for the source address to the destination address.";
    type Params = ForwarderParams;

    async fn call(client: &CpanelClient, p: Self::Params) -> CpanelResult<Value> {
        client.create_forwarder(&p.email, &p.destination).await
    }
}

pub struct DeleteEmailForwarderTool;

#[async_trait::async_trait]
impl CpanelTool for DeleteEmailForwarderTool {
    const NAME: &'static str = "delete_email_forwarder";
    const DESCRIPTION: &'static str = "Delete an email forwarder, given its source and destination addresses.";
    type Params = ForwarderParams;

    async fn call(client: &CpanelClient, p: Self::Params) -> CpanelResult<Value> {
        client.delete_forwarder(&p.email, &p.destination).await
    }
}

pub struct ListEmailForwardersTool;

#[async_trait::async_trait]
impl CpanelTool for ListEmailForwardersTool {
    const NAME: &'static str = "list_email_forwarders";
    const DESCRIPTION: &'static str = "List email forwarders for a domain.";
    type Params = DomainParams;

    async fn call(client: &CpanelClient, p: Self::Params) -> CpanelResult<Value> {
        client.list_forwarders(&p.domain).await
    }
}

pub struct GetForwarderSettingsTool;

#[async_trait::async_trait]
impl CpanelTool for GetForwarderSettingsTool {
    const NAME: &'static str = "get_forwarder_settings";
    const DESCRIPTION: &'static str = "Retrieve the email forwarder settings of the account.";
    type Params = NoParams;

    async fn call(client: &CpanelClient, _params: Self::Params) -> CpanelResult<Value> {
        client.forwarder_settings().await
    }
}
