//! cPanel MCP server entry point.
//!
//! Loads `.env`, initializes logging on stderr (stdout belongs to the STDIO
//! transport), validates the connection settings and serves the tools over
//! the configured transport.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

use cpanel_mcp_server::core::{Config, McpServer, TransportService, config::LoggingConfig};
use cpanel_mcp_server::domains::cpanel::CpanelClient;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    init_logging(&LoggingConfig::from_lookup(&|key: &str| std::env::var(key).ok()));

    let config = Config::from_env().context("Failed to load configuration")?;

    info!("Starting {} v{}", config.server.name, config.server.version);
    info!(
        "cPanel API at {}, WHM API at {}",
        config.cpanel.account_base_url(),
        config.cpanel.admin_base_url()
    );

    let client = Arc::new(
        CpanelClient::new(config.cpanel.clone()).context("Failed to create cPanel client")?,
    );

    let transport = TransportService::new(config.transport.clone());
    let server = McpServer::new(config, client);

    info!("Server initialized");

    transport.run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// `RUST_LOG` directives are honored on top of the configured level.
fn init_logging(logging: &LoggingConfig) {
    let level = match logging.level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" | "warning" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_writer(std::io::stderr);

    if logging.with_timestamps {
        builder.init();
    } else {
        builder.without_time().init();
    }
}
