//! DNS zone tools (administrative API).
//!
//! Records are addressed by the 1-based `line` reported by `get_dns_records`.
//! The line is passed through untouched; it can shift if the zone is edited
//! by someone else in between.

use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use super::common::{CpanelTool, DomainParams};
use crate::domains::cpanel::{CpanelClient, CpanelResult, DEFAULT_TTL, RecordDescriptor};

fn default_ttl() -> i64 {
    DEFAULT_TTL
}

fn default_class() -> String {
    "IN".to_string()
}

/// Parameters for `add_dns_record`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddDnsRecordParams {
    /// The domain to add the record to (e.g., "example.com")
    pub domain: String,

    /// The record name (e.g., "app.example.com" or "www")
    pub name: String,

    /// The DNS record type: A, AAAA, CNAME, MX, TXT, NS, PTR, SRV, CAA or TLSA
    pub record_type: String,

    /// The record value/address (e.g., IP address for an A record)
    pub address: String,

    /// Time to live in seconds (default: 3600)
    #[serde(default = "default_ttl")]
    pub ttl: i64,

    /// DNS class: IN, CH or HS (default: "IN")
    #[serde(default = "default_class")]
    pub record_class: String,
}

/// Parameters for `edit_dns_record`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct EditDnsRecordParams {
    /// The domain containing the record (e.g., "example.com")
    pub domain: String,

    /// The line number of the record to edit (from get_dns_records)
    pub line: i64,

    /// The new record name
    pub name: String,

    /// The new DNS record type: A, AAAA, CNAME, MX, TXT, NS, PTR, SRV, CAA or TLSA
    pub record_type: String,

    /// The new record value/address
    pub address: String,

    /// Time to live in seconds (default: 3600)
    #[serde(default = "default_ttl")]
    pub ttl: i64,

    /// DNS class: IN, CH or HS (default: "IN")
    #[serde(default = "default_class")]
    pub record_class: String,
}

/// Parameters for `delete_dns_record`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeleteDnsRecordParams {
    /// The domain containing the record (e.g., "example.com")
    pub domain: String,

    /// The line number of the record to delete (from get_dns_records)
    pub line: i64,
}

pub struct GetDnsRecordsTool;

#[async_trait::async_trait]
impl CpanelTool for GetDnsRecordsTool {
    const NAME: &'static str = "get_dns_records";
    const DESCRIPTION: &'static str = "Get all DNS records for a domain. Each record carries the line number used by edit_dns_record and delete_dns_record.";
    type Params = DomainParams;

    async fn call(client: &CpanelClient, p: Self::Params) -> CpanelResult<Value> {
        client.dns_records(&p.domain).await
    }
}

pub struct AddDnsRecordTool;

#[async_trait::async_trait]
impl CpanelTool for AddDnsRecordTool {
    const NAME: &'static str = "add_dns_record";
    const DESCRIPTION: &'static str = "Add a new DNS record to a domain's zone.";
    type Params = AddDnsRecordParams;

    async fn call(client: &CpanelClient, p: Self::Params) -> CpanelResult<Value> {
        let record = RecordDescriptor::parse(
            &p.domain,
            &p.name,
            &p.record_type,
            &p.address,
            p.ttl,
            &p.record_class,
        )?;
        client.add_dns_record(&record).await
    }
}

pub struct EditDnsRecordTool;

#[async_trait::async_trait]
impl CpanelTool for EditDnsRecordTool {
    const NAME: &'static str = "edit_dns_record";
    const DESCRIPTION: &'static str =
        "Edit an existing DNS record, identified by its line number from get_dns_records.";
    type Params = EditDnsRecordParams;

    async fn call(client: &CpanelClient, p: Self::Params) -> CpanelResult<Value> {
        let record = RecordDescriptor::parse(
            &p.domain,
            &p.name,
            &p.record_type,
            &p.address,
            p.ttl,
            &p.record_class,
        )?;
        client.edit_dns_record(p.line, &record).await
    }
}

pub struct DeleteDnsRecordTool;

#[async_trait::async_trait]
impl CpanelTool for DeleteDnsRecordTool {
    const NAME: &'static str = "delete_dns_record";
    const DESCRIPTION: &'static str =
        "Delete a DNS record from a domain, identified by its line number from get_dns_records.";
    type Params = DeleteDnsRecordParams;

    async fn call(client: &CpanelClient, p: Self::Params) -> CpanelResult<Value> {
        client.delete_dns_record(&p.domain, p.line).await
    }
}
