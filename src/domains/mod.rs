//! Domains module containing business logic organized by bounded contexts.
//!
//! - **cpanel**: typed access to the cPanel UAPI and WHM JSON APIs
//! - **tools**: the MCP tools exposed on top of it

pub mod cpanel;
pub mod tools;
