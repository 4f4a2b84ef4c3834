//! cPanel domain module.
//!
//! Client for the two HTTP APIs of a cPanel server:
//!
//! - the per-account API (UAPI) used for mailboxes and forwarders
//! - the administrative API (WHM API 1) used for DNS zone records
//!
//! Request construction (`email`, `dns`) is pure and validated up front;
//! [`CpanelClient`] only sends an [`ApiCall`] and classifies the answer.

pub mod call;
mod client;
pub mod dns;
pub mod email;
mod error;
mod profile;
pub mod response;

pub use call::{ApiCall, Surface};
pub use client::{ADMIN_USER, CpanelClient, REQUEST_TIMEOUT};
pub use dns::{DEFAULT_TTL, RecordClass, RecordDescriptor, RecordType};
pub use email::split_address;
pub use error::{CpanelError, CpanelResult};
pub use profile::{ADMIN_PORT, ConnectionProfile, DEFAULT_PORT};
pub use response::ApiOutcome;
