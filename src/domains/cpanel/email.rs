//! Mailbox and forwarder requests on the account API (`Email` module).
//!
//! Every function here is pure: it validates what it needs and returns the
//! [`ApiCall`] to execute, without touching the network.

use super::call::ApiCall;
use super::error::{CpanelError, CpanelResult};

const MODULE: &str = "Email";

/// Split `local@domain` into its two parts.
///
/// Exactly one `@` is allowed and neither side may be empty.
pub fn split_address(address: &str) -> CpanelResult<(&str, &str)> {
    let invalid = || CpanelError::InvalidFormat(address.to_string());

    let (local, domain) = address.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    Ok((local, domain))
}

pub fn add_mailbox(email: &str, password: &str, quota: i64) -> CpanelResult<ApiCall> {
    let (local, domain) = split_address(email)?;
    Ok(ApiCall::account(MODULE, "add_pop")?
        .param("domain", domain)
        .param("email", local)
        .param("password", password)
        .param("quota", quota))
}

pub fn delete_mailbox(email: &str) -> CpanelResult<ApiCall> {
    let (local, domain) = split_address(email)?;
    Ok(ApiCall::account(MODULE, "del_pop")?
        .param("domain", domain)
        .param("email", local))
}

pub fn list_mailboxes(domain: &str) -> CpanelResult<ApiCall> {
    Ok(ApiCall::account(MODULE, "list_pops")?.param("domain", domain))
}

pub fn mailbox_client_settings() -> CpanelResult<ApiCall> {
    ApiCall::account(MODULE, "get_client_settings")
}

pub fn update_quota(email: &str, quota: i64) -> CpanelResult<ApiCall> {
    let (local, domain) = split_address(email)?;
    Ok(ApiCall::account(MODULE, "edit_pop_quota")?
        .param("username", local)
        .param("domain", domain)
        .param("quota", quota))
}

pub fn change_password(email: &str, new_password: &str) -> CpanelResult<ApiCall> {
    let (local, domain) = split_address(email)?;
    Ok(ApiCall::account(MODULE, "passwd_pop")?
        .param("username", local)
        .param("domain", domain)
        .param("password", new_password))
}

pub fn create_forwarder(email: &str, destination: &str) -> CpanelResult<ApiCall> {
    let (local, domain) = split_address(email)?;
    Ok(ApiCall::account(MODULE, "add_forwarder")?
        .param("username", local)
        .param("domain", domain)
        .param("fwdopt", "fwd")
        .param("fwdemail", destination))
}

/// Unlike [`create_forwarder`], the remote function takes both addresses whole.
pub fn delete_forwarder(email: &str, destination: &str) -> CpanelResult<ApiCall> {
    Ok(ApiCall::account(MODULE, "delete_forwarder")?
        .param("address", email)
        .param("forwarder", destination))
}

pub fn list_forwarders(domain: &str) -> CpanelResult<ApiCall> {
    Ok(ApiCall::account(MODULE, "list_forwarders")?.param("domain", domain))
}

pub fn forwarder_settings() -> CpanelResult<ApiCall> {
    ApiCall::account(MODULE, "get_forwarder_settings")
}
