//! Configuration management for the MCP server.
//!
//! Everything is read from environment variables (`main` loads a `.env`
//! file into the environment first when present). Lookups go through a closure so the loader can be
//! exercised without touching the process environment.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use crate::domains::cpanel::{ConnectionProfile, DEFAULT_PORT};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Required connection variables, in reporting order.
pub const REQUIRED_VARS: [&str; 3] = ["CPANEL_HOSTNAME", "CPANEL_USERNAME", "CPANEL_API_TOKEN"];

/// Values accepted as "true" for boolean variables (case-insensitive).
const TRUTHY: [&str; 4] = ["true", "1", "yes", "on"];

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Connection to the cPanel server.
    pub cpanel: ConnectionProfile,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: "cpanel-mcp-server".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            with_timestamps: true,
        }
    }
}

impl LoggingConfig {
    /// Read `MCP_LOG_LEVEL` and `MCP_LOG_TIMESTAMPS`.
    ///
    /// Usable before the rest of the configuration so that logging is up
    /// when connection settings are validated.
    pub fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            level: lookup("MCP_LOG_LEVEL")
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.level),
            with_timestamps: parse_flag(lookup("MCP_LOG_TIMESTAMPS"), defaults.with_timestamps),
        }
    }
}

impl Config {
    /// Create a configuration around `cpanel` with defaults for everything else.
    pub fn new(cpanel: ConnectionProfile) -> Self {
        Self {
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            transport: TransportConfig::default(),
            cpanel,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Server settings use the `MCP_` prefix (`MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`, `MCP_TRANSPORT`, ...); the connection uses the
    /// `CPANEL_` prefix. Only the process environment is read; the binary
    /// loads `.env` into it before logging starts.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new(load_profile(&lookup)?);

        if let Some(name) = lookup("MCP_SERVER_NAME").filter(|v| !v.is_empty()) {
            config.server.name = name;
        }

        config.logging = LoggingConfig::from_lookup(&lookup);
        config.transport = TransportConfig::from_lookup(&lookup);

        Ok(config)
    }
}

/// Build the connection profile from `CPANEL_*` variables.
///
/// Every missing required variable is reported in a single error.
pub fn load_profile<F>(lookup: &F) -> Result<ConnectionProfile>
where
    F: Fn(&str) -> Option<String>,
{
    let values: Vec<Option<String>> = REQUIRED_VARS
        .iter()
        .map(|key| lookup(key).filter(|v| !v.is_empty()))
        .collect();

    let missing: Vec<&str> = REQUIRED_VARS
        .iter()
        .zip(&values)
        .filter(|(_, value)| value.is_none())
        .map(|(key, _)| *key)
        .collect();

    if !missing.is_empty() {
        return Err(Error::config(format!(
            "Missing required environment variables: {}",
            missing.join(", ")
        )));
    }

    let [hostname, username, api_token] = [&values[0], &values[1], &values[2]]
        .map(|v| v.as_deref().unwrap_or_default());

    let port = match lookup("CPANEL_PORT").filter(|v| !v.is_empty()) {
        Some(raw) => parse_port(&raw)?,
        None => DEFAULT_PORT,
    };

    let ssl = parse_flag(lookup("CPANEL_SSL"), true);
    let verify_admin_tls = parse_flag(lookup("CPANEL_WHM_VERIFY_TLS"), false);

    let profile = ConnectionProfile::new(hostname, username, api_token, port, ssl)
        .map_err(|e| Error::config(e.to_string()))?
        .with_admin_tls_verification(verify_admin_tls);

    if !ssl {
        warn!("CPANEL_SSL is disabled - credentials will be sent over plain HTTP");
    }
    if !verify_admin_tls {
        info!("WHM certificate verification disabled (set CPANEL_WHM_VERIFY_TLS=true to enable)");
    }

    Ok(profile)
}

fn parse_port(raw: &str) -> Result<u16> {
    let port: i64 = raw
        .trim()
        .parse()
        .map_err(|_| Error::config(format!("Invalid port value: {}", raw)))?;

    u16::try_from(port)
        .ok()
        .filter(|p| *p >= 1)
        .ok_or_else(|| Error::config("Port must be between 1 and 65535"))
}

/// Interpret a boolean variable; unset or empty yields `default`.
pub(crate) fn parse_flag(raw: Option<String>, default: bool) -> bool {
    match raw.as_deref().map(str::trim) {
        None | Some("") => default,
        Some(v) => TRUTHY.iter().any(|t| t.eq_ignore_ascii_case(v)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    const BASE: [(&str, &str); 3] = [
        ("CPANEL_HOSTNAME", "host.example.com"),
        ("CPANEL_USERNAME", "acct"),
        ("CPANEL_API_TOKEN", "tok"),
    ];

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&BASE)).unwrap();
        assert_eq!(config.cpanel.hostname(), "host.example.com");
        assert_eq!(config.cpanel.port(), 2083);
        assert!(config.cpanel.ssl());
        assert!(!config.cpanel.verify_admin_tls());
        assert_eq!(config.server.name, "cpanel-mcp-server");
        assert_eq!(config.logging.level, "info");
        assert!(config.transport.is_stdio());
    }

    #[test]
    fn test_missing_vars_reported_together() {
        let err = Config::from_lookup(lookup_from(&[("CPANEL_USERNAME", "acct")])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Configuration error: Missing required environment variables: CPANEL_HOSTNAME, CPANEL_API_TOKEN"
        );
    }

    #[test]
    fn test_empty_value_counts_as_missing() {
        let err = Config::from_lookup(lookup_from(&[
            ("CPANEL_HOSTNAME", ""),
            ("CPANEL_USERNAME", "acct"),
            ("CPANEL_API_TOKEN", "tok"),
        ]))
        .unwrap_err();
        assert!(err.to_string().ends_with("variables: CPANEL_HOSTNAME"));
    }

    #[test]
    fn test_whitespace_value_fails_validation() {
        let err = Config::from_lookup(lookup_from(&[
            ("CPANEL_HOSTNAME", "   "),
            ("CPANEL_USERNAME", "acct"),
            ("CPANEL_API_TOKEN", "tok"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("Hostname cannot be empty"));
    }

    #[test]
    fn test_port_parsing() {
        let mut vars = BASE.to_vec();
        vars.push(("CPANEL_PORT", "2082"));
        let config = Config::from_lookup(lookup_from(&vars)).unwrap();
        assert_eq!(config.cpanel.port(), 2082);

        for (raw, expected) in [
            ("abc", "Invalid port value: abc"),
            ("0", "Port must be between 1 and 65535"),
            ("65536", "Port must be between 1 and 65535"),
            ("-1", "Port must be between 1 and 65535"),
        ] {
            let mut vars = BASE.to_vec();
            vars.push(("CPANEL_PORT", raw));
            let err = Config::from_lookup(lookup_from(&vars)).unwrap_err();
            assert!(err.to_string().contains(expected), "{}: {}", raw, err);
        }

        let mut vars = BASE.to_vec();
        vars.push(("CPANEL_PORT", ""));
        assert_eq!(Config::from_lookup(lookup_from(&vars)).unwrap().cpanel.port(), 2083);
    }

    #[test]
    fn test_ssl_flag() {
        for (raw, expected) in [
            ("true", true),
            ("YES", true),
            ("On", true),
            ("1", true),
            ("false", false),
            ("0", false),
            ("nope", false),
            ("", true),
        ] {
            let mut vars = BASE.to_vec();
            vars.push(("CPANEL_SSL", raw));
            let config = Config::from_lookup(lookup_from(&vars)).unwrap();
            assert_eq!(config.cpanel.ssl(), expected, "CPANEL_SSL={:?}", raw);
        }
    }

    #[test]
    fn test_logging_from_lookup() {
        let logging = LoggingConfig::from_lookup(&lookup_from(&[
            ("MCP_LOG_LEVEL", "debug"),
            ("MCP_LOG_TIMESTAMPS", "off"),
        ]));
        assert_eq!(logging.level, "debug");
        assert!(!logging.with_timestamps);

        let logging = LoggingConfig::from_lookup(&lookup_from(&[]));
        assert_eq!(logging.level, "info");
        assert!(logging.with_timestamps);
    }

    #[test]
    fn test_whm_verify_toggle() {
        let mut vars = BASE.to_vec();
        vars.push(("CPANEL_WHM_VERIFY_TLS", "true"));
        let config = Config::from_lookup(lookup_from(&vars)).unwrap();
        assert!(config.cpanel.verify_admin_tls());
    }

    #[test]
    fn test_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("CPANEL_HOSTNAME", "env.example.com");
            std::env::set_var("CPANEL_USERNAME", "envacct");
            std::env::set_var("CPANEL_API_TOKEN", "envtok");
            std::env::set_var("MCP_SERVER_NAME", "test-server");
        }
        let config = Config::from_env().unwrap();
        assert_eq!(config.cpanel.hostname(), "env.example.com");
        assert_eq!(config.server.name, "test-server");
        unsafe {
            std::env::remove_var("CPANEL_HOSTNAME");
            std::env::remove_var("CPANEL_USERNAME");
            std::env::remove_var("CPANEL_API_TOKEN");
            std::env::remove_var("MCP_SERVER_NAME");
        }
    }

    #[test]
    fn test_token_redacted_in_config_debug() {
        let config = Config::from_lookup(lookup_from(&[
            ("CPANEL_HOSTNAME", "h"),
            ("CPANEL_USERNAME", "u"),
            ("CPANEL_API_TOKEN", "super_secret_token"),
        ]))
        .unwrap();
        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_token"));
    }
}
