//! Tool definitions module.
//!
//! One file per tool family:
//! - `email`: mailbox accounts
//! - `forwarders`: email forwarders
//! - `dns`: DNS zone records

pub mod common;
pub mod dns;
pub mod email;
pub mod forwarders;

pub use common::CpanelTool;
pub use dns::{AddDnsRecordTool, DeleteDnsRecordTool, EditDnsRecordTool, GetDnsRecordsTool};
pub use email::{
    AddEmailAccountTool, ChangePasswordTool, DeleteEmailAccountTool, GetEmailSettingsTool,
    ListEmailAccountsTool, UpdateQuotaTool,
};
pub use forwarders::{
    CreateEmailForwarderTool, DeleteEmailForwarderTool, GetForwarderSettingsTool,
    ListEmailForwardersTool,
};
