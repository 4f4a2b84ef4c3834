//! Transient description of a single API call.

use serde::Serialize;
use std::fmt;

use super::error::{CpanelError, CpanelResult};

/// Query parameter forced onto every administrative call.
pub const ADMIN_API_VERSION: (&str, &str) = ("api.version", "1");

/// Which of the two APIs a call targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Surface {
    /// Per-account API (UAPI), `/execute/{module}/{function}`.
    Account,
    /// Server-operator API (WHM API 1), `/json-api/{function}`.
    Admin,
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Account => f.write_str("uapi"),
            Self::Admin => f.write_str("whm"),
        }
    }
}

/// One outbound request: surface, endpoint path and ordered query parameters.
///
/// Built by the request constructors in `email` and `dns`, executed by
/// [`CpanelClient::execute`](super::CpanelClient::execute).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiCall {
    surface: Surface,
    path: String,
    params: Vec<(String, String)>,
}

impl ApiCall {
    /// An account-surface call to `module/function`.
    pub fn account(module: &str, function: &str) -> CpanelResult<Self> {
        validate_identifier(module, "module")?;
        validate_identifier(function, "function")?;
        Ok(Self {
            surface: Surface::Account,
            path: format!("/execute/{}/{}", module, function),
            params: Vec::new(),
        })
    }

    /// An administrative-surface call to `function`.
    pub fn admin(function: &str) -> CpanelResult<Self> {
        validate_identifier(function, "function")?;
        Ok(Self {
            surface: Surface::Admin,
            path: format!("/json-api/{}", function),
            params: Vec::new(),
        })
    }

    /// Append a query parameter, keeping insertion order.
    pub fn param(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.params.push((name.into(), value.to_string()));
        self
    }

    /// Append every pair of `params` in order.
    pub fn params<K, V, I>(mut self, params: I) -> Self
    where
        K: Into<String>,
        V: ToString,
        I: IntoIterator<Item = (K, V)>,
    {
        self.params
            .extend(params.into_iter().map(|(k, v)| (k.into(), v.to_string())));
        self
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// The parameters as they go on the wire.
    ///
    /// Administrative calls always end with `api.version=1`; a caller-supplied
    /// `api.version` is dropped in its favor.
    pub fn query(&self) -> Vec<(&str, &str)> {
        let mut query: Vec<(&str, &str)> = self
            .params
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();

        if self.surface == Surface::Admin {
            query.retain(|(k, _)| *k != ADMIN_API_VERSION.0);
            query.push(ADMIN_API_VERSION);
        }

        query
    }

    /// Percent-encoded query string, as appended to the URL.
    pub fn query_string(&self) -> CpanelResult<String> {
        serde_urlencoded::to_string(self.query())
            .map_err(|e| CpanelError::validation(format!("Unencodable parameters: {}", e)))
    }

    /// Parameter names only, for logging without leaking values.
    pub fn param_names(&self) -> Vec<&str> {
        self.query().into_iter().map(|(k, _)| k).collect()
    }
}

fn validate_identifier(value: &str, label: &str) -> CpanelResult<()> {
    if value.is_empty() {
        return Err(CpanelError::validation(format!("{} name cannot be empty", label)));
    }
    if !value.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(CpanelError::validation(format!(
            "Invalid {} name: {}",
            label, value
        )));
    }
    Ok(())
}
