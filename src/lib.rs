//! cPanel MCP Server Library
//!
//! A Model Context Protocol (MCP) server that lets AI assistants manage a
//! cPanel hosting account: email accounts, email forwarders and DNS zone
//! records.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server handler and
//!   the transports (STDIO, TCP, HTTP)
//! - **domains**: business logic organized by bounded contexts
//!   - **cpanel**: connection profile, request building and response
//!     classification for the cPanel UAPI and WHM JSON APIs
//!   - **tools**: the MCP tools, one per account operation
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use cpanel_mcp_server::{Config, McpServer};
//! use cpanel_mcp_server::core::TransportService;
//! use cpanel_mcp_server::domains::cpanel::CpanelClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let client = Arc::new(CpanelClient::new(config.cpanel.clone())?);
//!     let transport = TransportService::new(config.transport.clone());
//!     transport.run(McpServer::new(config, client)).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

pub use core::{Config, Error, McpServer, Result};
