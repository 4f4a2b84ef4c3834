//! Classification of decoded API responses.
//!
//! Both APIs answer HTTP 200 with a JSON envelope and report failures in-band
//! through a sentinel field. Each surface has its own envelope shape; the
//! functions here turn a decoded body into an [`ApiOutcome`].

use serde_json::Value;

use super::call::Surface;
use super::error::{CpanelError, CpanelResult};

/// Fallback message when the API signals failure without saying why.
pub const UNKNOWN_API_ERROR: &str = "Unknown API error";

/// Result of inspecting a decoded response body.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiOutcome {
    /// The call succeeded; the body is handed back verbatim.
    Success(Value),
    /// The API reported a failure with this message.
    Failure(String),
}

impl ApiOutcome {
    /// Inspect `body` using the envelope rules of `surface`.
    pub fn classify(surface: Surface, body: Value) -> Self {
        match surface {
            Surface::Account => classify_account(body),
            Surface::Admin => classify_admin(body),
        }
    }

    pub fn into_result(self) -> CpanelResult<Value> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(message) => Err(CpanelError::Api(message)),
        }
    }
}

/// UAPI: `{"status": 0, "errors": ["..."]}` is a failure.
fn classify_account(body: Value) -> ApiOutcome {
    let Some(obj) = body.as_object() else {
        return ApiOutcome::Success(body);
    };

    if !obj.get("status").is_some_and(is_zero) {
        return ApiOutcome::Success(body);
    }

    let message = obj
        .get("errors")
        .and_then(Value::as_array)
        .and_then(|errors| errors.first())
        .map(render_message)
        .unwrap_or_else(|| UNKNOWN_API_ERROR.to_string());

    ApiOutcome::Failure(message)
}

/// WHM API 1: `result == 0` or `status == 0` is a failure, either at the top
/// level or inside the `metadata` object.
fn classify_admin(body: Value) -> ApiOutcome {
    let Some(obj) = body.as_object() else {
        return ApiOutcome::Success(body);
    };

    let envelope = if failed(obj) {
        obj
    } else {
        match obj.get("metadata").and_then(Value::as_object) {
            Some(metadata) if failed(metadata) => metadata,
            _ => return ApiOutcome::Success(body),
        }
    };

    let message = ["reason", "statusmsg"]
        .iter()
        .filter_map(|key| envelope.get(*key))
        .find(|v| !v.is_null())
        .map(render_message)
        .unwrap_or_else(|| UNKNOWN_API_ERROR.to_string());

    ApiOutcome::Failure(message)
}

fn failed(obj: &serde_json::Map<String, Value>) -> bool {
    obj.get("result").is_some_and(is_zero) || obj.get("status").is_some_and(is_zero)
}

/// Integer or float zero, or `false`.
fn is_zero(value: &Value) -> bool {
    match value {
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::Bool(b) => !b,
        _ => false,
    }
}

fn render_message(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
