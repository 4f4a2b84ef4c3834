//! Email account tools.
//!
//! Mailbox management on the account API: create, delete, list, quota and
//! password changes, plus the client settings lookup.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use super::common::{CpanelTool, DomainParams, NoParams};
use crate::domains::cpanel::{CpanelClient, CpanelResult};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for `add_email_account`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddEmailAccountParams {
    /// The full email address (e.g., "user@example.com")
    pub email: String,

    /// The password for the new email account
    pub password: String,

    /// The mailbox size limit in megabytes (MB). Default is 0 for unlimited.
    #[serde(default)]
    pub quota: i64,
}

/// Parameters for tools addressing a single mailbox.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct EmailParams {
    /// The full email address (e.g., "user@example.com")
    pub email: String,
}

/// Parameters for `update_quota`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateQuotaParams {
    /// The full email address for which to update the quota
    pub email: String,

    /// The new account limit in megabytes (MB)
    pub quota: i64,
}

/// Parameters for `change_password`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ChangePasswordParams {
    /// The full email address for which to change the password
    pub email: String,

    /// The new password to set
    pub new_password: String,
}

// ============================================================================
// Tool Definitions
// ============================================================================

pub struct AddEmailAccountTool;

#[async_trait::async_trait]
impl CpanelTool for AddEmailAccountTool {
    const NAME: &'static str = "add_email_account";
    const DESCRIPTION: &'static str = "Add a new email account to cPanel. Takes the full email address, a password and an optional quota in MB (0 = unlimited).";
    type Params = AddEmailAccountParams;

    async fn call(client: &CpanelClient, p: Self::Params) -> CpanelResult<Value> {
        client.add_mailbox(&p.email, &p.password, p.quota).await
    }
}

pub struct DeleteEmailAccountTool;

#[async_trait::async_trait]
impl CpanelTool for DeleteEmailAccountTool {
    const NAME: &'static str = "delete_email_account";
    const DESCRIPTION: &'static str = "Delete an email account from cPanel.";
    type Params = EmailParams;

    async fn call(client: &CpanelClient, p: Self::Params) -> CpanelResult<Value> {
        client.delete_mailbox(&p.email).await
    }
}

pub struct ListEmailAccountsTool;

#[async_trait::async_trait]
impl CpanelTool for ListEmailAccountsTool {
    const NAME: &'static str = "list_email_accounts";
    const DESCRIPTION: &'static str = "List all email accounts for a specific domain.";
    type Params = DomainParams;

    async fn call(client: &CpanelClient, p: Self::Params) -> CpanelResult<Value> {
        client.list_mailboxes(&p.domain).await
    }
}

pub struct GetEmailSettingsTool;

#[async_trait::async_trait]
impl CpanelTool for GetEmailSettingsTool {
    const NAME: &'static str = "get_email_settings";
    const DESCRIPTION: &'static str =
        "Retrieve the mail client settings (IMAP/POP3/SMTP hosts and ports) for email accounts.";
    type Params = NoParams;

    async fn call(client: &CpanelClient, _params: Self::Params) -> CpanelResult<Value> {
        client.mailbox_client_settings().await
    }
}

pub struct UpdateQuotaTool;

#[async_trait::async_trait]
impl CpanelTool for UpdateQuotaTool {
    const NAME: &'static str = "update_quota";
    const DESCRIPTION: &'static str = "Change the quota (in MB) for a given email account.";
    type Params = UpdateQuotaParams;

    async fn call(client: &CpanelClient, p: Self::Params) -> CpanelResult<Value> {
        client.update_quota(&p.email, p.quota).await
    }
}

pub struct ChangePasswordTool;

#[async_trait::async_trait]
impl CpanelTool for ChangePasswordTool {
    const NAME: &'static str = "change_password";
    const DESCRIPTION: &'static str = "Change the password for a given email account.";
    type Params = ChangePasswordParams;

    async fn call(client: &CpanelClient, p: Self::Params) -> CpanelResult<Value> {
        client.change_password(&p.email, &p.new_password).await
    }
}

// ============================================================================
// Tests
// ============================================================================
