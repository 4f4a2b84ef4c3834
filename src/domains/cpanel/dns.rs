//! DNS zone requests on the administrative API.
//!
//! Every builder validates its input before producing an [`ApiCall`], so a
//! malformed record never reaches the network.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::call::ApiCall;
use super::error::{CpanelError, CpanelResult};

/// Default time-to-live for new or edited records, in seconds.
pub const DEFAULT_TTL: i64 = 3600;

/// Record types accepted by `add` and `edit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    A,
    Aaaa,
    Cname,
    Mx,
    Txt,
    Ns,
    Ptr,
    Srv,
    Caa,
    Tlsa,
}

impl RecordType {
    pub const ALL: [RecordType; 10] = [
        Self::A,
        Self::Aaaa,
        Self::Cname,
        Self::Mx,
        Self::Txt,
        Self::Ns,
        Self::Ptr,
        Self::Srv,
        Self::Caa,
        Self::Tlsa,
    ];

    /// Wire representation, always upper case.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Cname => "CNAME",
            Self::Mx => "MX",
            Self::Txt => "TXT",
            Self::Ns => "NS",
            Self::Ptr => "PTR",
            Self::Srv => "SRV",
            Self::Caa => "CAA",
            Self::Tlsa => "TLSA",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = CpanelError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                let allowed: Vec<_> = Self::ALL.iter().map(RecordType::as_str).collect();
                CpanelError::validation(format!(
                    "Unsupported record type '{}'. Allowed: {}",
                    wanted,
                    allowed.join(", ")
                ))
            })
    }
}

/// DNS classes accepted by `add` and `edit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordClass {
    #[default]
    In,
    Ch,
    Hs,
}

impl RecordClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::In => "IN",
            Self::Ch => "CH",
            Self::Hs => "HS",
        }
    }
}

impl fmt::Display for RecordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordClass {
    type Err = CpanelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "IN" => Ok(Self::In),
            "CH" => Ok(Self::Ch),
            "HS" => Ok(Self::Hs),
            _ => Err(CpanelError::validation(format!(
                "Unsupported record class '{}'. Allowed: IN, CH, HS",
                s.trim()
            ))),
        }
    }
}

/// A validated record, ready to be sent to `addzonerecord` / `editzonerecord`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDescriptor {
    pub domain: String,
    pub name: String,
    pub record_type: RecordType,
    pub address: String,
    pub ttl: u32,
    pub class: RecordClass,
}

impl RecordDescriptor {
    /// Validate raw tool input into a descriptor.
    ///
    /// Text fields must be non-empty after trimming; only `domain` is sent
    /// trimmed, `name` and `address` go out exactly as given. The type and
    /// class must be in their allow-lists, and `ttl` must be at least 1.
    pub fn parse(
        domain: &str,
        name: &str,
        record_type: &str,
        address: &str,
        ttl: i64,
        class: &str,
    ) -> CpanelResult<Self> {
        let domain = required(domain, "domain")?;
        let name = non_blank(name, "name")?;
        let record_type = required(record_type, "record_type")?.parse::<RecordType>()?;
        let address = non_blank(address, "address")?;

        if ttl < 1 {
            return Err(CpanelError::validation(format!(
                "ttl must be at least 1, got {}",
                ttl
            )));
        }
        let ttl = u32::try_from(ttl)
            .map_err(|_| CpanelError::validation(format!("ttl out of range: {}", ttl)))?;

        Ok(Self {
            domain,
            name,
            record_type,
            address,
            ttl,
            class: class.parse::<RecordClass>()?,
        })
    }

    fn apply(&self, call: ApiCall) -> ApiCall {
        call.param("name", &self.name)
            .param("class", self.class)
            .param("ttl", self.ttl)
            .param("type", self.record_type)
            .param("address", &self.address)
    }
}

pub fn get_records(domain: &str) -> CpanelResult<ApiCall> {
    let domain = required(domain, "domain")?;
    Ok(ApiCall::admin("dumpzone")?.param("domain", domain))
}

pub fn add_record(record: &RecordDescriptor) -> CpanelResult<ApiCall> {
    let call = ApiCall::admin("addzonerecord")?.param("domain", &record.domain);
    Ok(record.apply(call))
}

/// `line` is the 1-based position reported by [`get_records`].
pub fn edit_record(line: i64, record: &RecordDescriptor) -> CpanelResult<ApiCall> {
    let line = line_number(line)?;
    let call = ApiCall::admin("editzonerecord")?
        .param("domain", &record.domain)
        .param("line", line);
    Ok(record.apply(call))
}

pub fn delete_record(domain: &str, line: i64) -> CpanelResult<ApiCall> {
    let domain = required(domain, "domain")?;
    let line = line_number(line)?;
    Ok(ApiCall::admin("removezonerecord")?
        .param("domain", domain)
        .param("line", line))
}

fn required(value: &str, field: &str) -> CpanelResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CpanelError::validation(format!("{} is required", field)));
    }
    Ok(trimmed.to_string())
}

/// Like [`required`] but keeps the value untouched.
fn non_blank(value: &str, field: &str) -> CpanelResult<String> {
    required(value, field)?;
    Ok(value.to_string())
}

fn line_number(line: i64) -> CpanelResult<u64> {
    u64::try_from(line)
        .ok()
        .filter(|l| *l >= 1)
        .ok_or_else(|| CpanelError::validation(format!("line must be at least 1, got {}", line)))
}
