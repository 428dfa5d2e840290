//! The `{"data": ...}` envelope shared by requests and responses

use axum::Json;
use axum::extract::rejection::JsonRejection;
use serde::Serialize;
use serde_json::Value;

/// Wrapper for every successful response body: single records and
/// collections alike travel under `data`. Request bodies are read as raw
/// [`Value`] instead, since validation inspects fields before any typed
/// model exists.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Unwrap a request body, treating an unparseable one as empty.
///
/// A body that fails JSON extraction (absent, malformed, wrong
/// content type) behaves like `{}`: every field reads as missing and the
/// first validator in the chain produces the response, instead of the
/// framework's plain-text rejection.
pub fn json_body(body: Result<Json<Value>, JsonRejection>) -> Value {
    body.map(|Json(value)| value).unwrap_or(Value::Null)
}

/// Extract the `data` member of a raw request body.
///
/// A body without a `data` object behaves as an empty object: every field
/// read comes back missing and the first validator in the chain fires.
pub fn request_data(body: &Value) -> &Value {
    body.get("data").unwrap_or(&Value::Null)
}

/// Read a `data.id` supplied by the client, for the route-id match check.
///
/// Only meaningfully-present ids participate: absent, null, empty-string,
/// and zero/false ids are all treated as "no id supplied". Non-string
/// values are rendered to text so the mismatch message can echo them.
pub fn body_id(data: &Value) -> Option<String> {
    match data.get("id") {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::Number(n)) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        Some(Value::Bool(true)) => Some("true".to_string()),
        _ => None,
    }
}

/// Read a required text field, treating absent, null, non-string, and
/// empty-string values as missing.
pub fn non_empty_text(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}
