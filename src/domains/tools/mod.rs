//! Tools domain module.
//!
//! Every cPanel operation is exposed as an MCP tool that clients can call.
//!
//! ## Architecture
//!
//! - `definitions/` - Tool implementations, grouped by family
//! - `router.rs` - Dynamic ToolRouter builder for STDIO/TCP transport
//! - `registry.rs` - Central tool registry and name-based dispatch (HTTP)
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Add a unit struct implementing `CpanelTool` in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Add route in `router.rs` using `with_route()`
//! 4. Register in `registry.rs` for HTTP support

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
