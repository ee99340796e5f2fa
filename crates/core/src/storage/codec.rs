use serde_json::{Map, Value};

use crate::errors::CoreError;
use crate::models::settings::AppSettings;

/// Encode the full settings record as the persisted JSON text.
pub fn encode(settings: &AppSettings) -> Result<String, CoreError> {
    serde_json::to_string(settings)
        .map_err(|e| CoreError::Serialization(format!("Failed to serialize settings: {e}")))
}

/// Decode persisted JSON text into a key/value map.
///
/// Only the outer shape is checked here; field types are checked when the
/// map is merged into an [`AppSettings`].
pub fn decode(raw: &str) -> Result<Map<String, Value>, CoreError> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| CoreError::Deserialization(format!("Persisted settings are not valid JSON: {e}")))?;

    match value {
        Value::Object(map) => Ok(map),
        other => Err(CoreError::Deserialization(format!(
            "Persisted settings must be a JSON object, found {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
