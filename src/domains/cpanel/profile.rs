//! Connection profile for a cPanel account.

use serde::{Deserialize, Serialize};

use super::error::{CpanelError, CpanelResult};

/// Default port of the account-level API (cPanel over TLS).
pub const DEFAULT_PORT: u16 = 2083;

/// Fixed port of the administrative API (WHM over TLS).
pub const ADMIN_PORT: u16 = 2087;

/// Immutable connection parameters for one cPanel account.
///
/// Construct through [`ConnectionProfile::new`], which trims and validates
/// every field. The token never shows up in `Debug` output.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawProfile")]
pub struct ConnectionProfile {
    hostname: String,
    username: String,
    #[serde(skip_serializing)]
    api_token: String,
    port: u16,
    ssl: bool,
    verify_admin_tls: bool,
}

impl ConnectionProfile {
    /// Build a validated profile.
    ///
    /// Host, account name and token must be non-empty after trimming and the
    /// port must be in `1..=65535`. Certificate verification on the
    /// administrative surface starts disabled; see [`Self::with_admin_tls_verification`].
    pub fn new(
        hostname: impl AsRef<str>,
        username: impl AsRef<str>,
        api_token: impl AsRef<str>,
        port: u16,
        ssl: bool,
    ) -> CpanelResult<Self> {
        let hostname = non_empty(hostname.as_ref(), "Hostname")?;
        let username = non_empty(username.as_ref(), "Username")?;
        let api_token = non_empty(api_token.as_ref(), "API token")?;

        if port == 0 {
            return Err(CpanelError::validation("Port must be between 1 and 65535"));
        }

        Ok(Self {
            hostname,
            username,
            api_token,
            port,
            ssl,
            verify_admin_tls: false,
        })
    }

    /// Enable or disable certificate verification for the administrative API.
    ///
    /// WHM is commonly reached over a self-signed certificate, so verification
    /// is off unless this is set.
    pub fn with_admin_tls_verification(mut self, verify: bool) -> Self {
        self.verify_admin_tls = verify;
        self
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn api_token(&self) -> &str {
        &self.api_token
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn ssl(&self) -> bool {
        self.ssl
    }

    pub fn verify_admin_tls(&self) -> bool {
        self.verify_admin_tls
    }

    /// URL scheme for both surfaces.
    pub fn scheme(&self) -> &'static str {
        if self.ssl { "https" } else { "http" }
    }

    /// Base URL of the account-level API, on the configured port.
    pub fn account_base_url(&self) -> String {
        format!("{}://{}:{}", self.scheme(), self.hostname, self.port)
    }

    /// Base URL of the administrative API, always on [`ADMIN_PORT`].
    pub fn admin_base_url(&self) -> String {
        format!("{}://{}:{}", self.scheme(), self.hostname, ADMIN_PORT)
    }
}

/// Unvalidated wire form; every deserialized profile goes through
/// [`ConnectionProfile::new`].
#[derive(Deserialize)]
struct RawProfile {
    hostname: String,
    username: String,
    api_token: String,
    port: u16,
    #[serde(default = "default_ssl")]
    ssl: bool,
    #[serde(default)]
    verify_admin_tls: bool,
}

fn default_ssl() -> bool {
    true
}

impl TryFrom<RawProfile> for ConnectionProfile {
    type Error = CpanelError;

    fn try_from(raw: RawProfile) -> CpanelResult<Self> {
        Ok(Self::new(raw.hostname, raw.username, raw.api_token, raw.port, raw.ssl)?
            .with_admin_tls_verification(raw.verify_admin_tls))
    }
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for ConnectionProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionProfile")
            .field("hostname", &self.hostname)
            .field("username", &self.username)
            .field("api_token", &"[REDACTED]")
            .field("port", &self.port)
            .field("ssl", &self.ssl)
            .field("verify_admin_tls", &self.verify_admin_tls)
            .finish()
    }
}

fn non_empty(value: &str, label: &str) -> CpanelResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CpanelError::validation(format!("{} cannot be empty", label)));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(port: u16, ssl: bool) -> ConnectionProfile {
        ConnectionProfile::new("host.example.com", "acct", "tok", port, ssl).unwrap()
    }

    #[test]
    fn test_base_urls_default_port() {
        let p = profile(DEFAULT_PORT, true);
        assert_eq!(p.account_base_url(), "https://host.example.com:2083");
        assert_eq!(p.admin_base_url(), "https://host.example.com:2087");
    }

    #[test]
    fn test_admin_port_ignores_configured_port() {
        for port in [1, 80, 2082, 2083, 8443, 65535] {
            let p = profile(port, false);
            assert_eq!(p.account_base_url(), format!("http://host.example.com:{}", port));
            assert_eq!(p.admin_base_url(), "http://host.example.com:2087");
        }
    }

    #[test]
    fn test_fields_are_trimmed() {
        let p = ConnectionProfile::new("  host.example.com ", " acct", "tok\n", 2083, true).unwrap();
        assert_eq!(p.hostname(), "host.example.com");
        assert_eq!(p.username(), "acct");
        assert_eq!(p.api_token(), "tok");
    }

    #[test]
    fn test_blank_fields_rejected() {
        let err = ConnectionProfile::new("   ", "acct", "tok", 2083, true).unwrap_err();
        assert!(err.to_string().contains("Hostname cannot be empty"));
        let err = ConnectionProfile::new("h", "", "tok", 2083, true).unwrap_err();
        assert!(err.to_string().contains("Username cannot be empty"));
        let err = ConnectionProfile::new("h", "u", " \t", 2083, true).unwrap_err();
        assert!(err.to_string().contains("API token cannot be empty"));
    }

    #[test]
    fn test_port_zero_rejected() {
        let err = ConnectionProfile::new("h", "u", "t", 0, true).unwrap_err();
        assert!(err.to_string().contains("Port must be between 1 and 65535"));
    }

    #[test]
    fn test_admin_tls_verification_defaults_off() {
        let p = profile(DEFAULT_PORT, true);
        assert!(!p.verify_admin_tls());
        assert!(p.with_admin_tls_verification(true).verify_admin_tls());
    }

    #[test]
    fn test_deserialize_validates() {
        let err = serde_json::from_value::<ConnectionProfile>(serde_json::json!({
            "hostname": "",
            "username": "  ",
            "api_token": "",
            "port": 0,
            "ssl": true
        }))
        .unwrap_err();
        assert!(err.to_string().contains("Hostname cannot be empty"));

        let err = serde_json::from_value::<ConnectionProfile>(serde_json::json!({
            "hostname": "h",
            "username": "u",
            "api_token": "t",
            "port": 0
        }))
        .unwrap_err();
        assert!(err.to_string().contains("Port must be between 1 and 65535"));

        let p: ConnectionProfile = serde_json::from_value(serde_json::json!({
            "hostname": " host.example.com ",
            "username": "acct",
            "api_token": "tok",
            "port": 2083,
            "verify_admin_tls": true
        }))
        .unwrap();
        assert_eq!(p.hostname(), "host.example.com");
        assert!(p.ssl());
        assert!(p.verify_admin_tls());
    }

    #[test]
    fn test_token_not_serialized() {
        let value = serde_json::to_value(profile(DEFAULT_PORT, true)).unwrap();
        assert!(value.get("api_token").is_none());
        assert_eq!(value["hostname"], "host.example.com");
    }

    #[test]
    fn test_token_redacted_in_debug() {
        let p = ConnectionProfile::new("h", "u", "super_secret_token", 2083, true).unwrap();
        let debug_str = format!("{:?}", p);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_token"));
    }
}
