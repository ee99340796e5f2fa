use serde_json::{Map, Value};
use tracing::warn;

use crate::errors::CoreError;
use crate::models::key::SettingKey;
use crate::models::settings::AppSettings;
use crate::storage::codec;

/// Merge and update logic for the settings record.
pub struct SettingsService;

impl SettingsService {
    pub fn new() -> Self {
        Self
    }

    /// Merge a persisted record (if any) over `current`.
    ///
    /// Persisted keys win, missing keys keep the current value, unknown keys
    /// pass through. A persisted value that does not fit its field is logged
    /// and skipped, so that field keeps its current value. Text that is not a
    /// JSON object is an error and `current` is not used.
    pub fn merge_persisted(
        &self,
        current: &AppSettings,
        raw: Option<&str>,
    ) -> Result<AppSettings, CoreError> {
        let Some(raw) = raw else {
            return Ok(current.clone());
        };

        let mut merged = current.clone();
        for (key, value) in codec::decode(raw)? {
            let mut single = Map::new();
            single.insert(key.clone(), value);
            match merged.merged(single) {
                Ok(next) => merged = next,
                Err(e) => {
                    warn!(key = %key, error = %e, "settings: ignoring persisted value");
                }
            }
        }
        Ok(merged)
    }

    /// Apply a set of updates to a copy of `current`.
    ///
    /// Every value is type-checked against its field; the first invalid one
    /// fails the whole batch.
    pub fn apply_patch<I>(&self, current: &AppSettings, patch: I) -> Result<AppSettings, CoreError>
    where
        I: IntoIterator<Item = (SettingKey, Value)>,
    {
        let mut next = current.clone();
        for (key, value) in patch {
            let mut single = Map::new();
            single.insert(key.as_str().to_string(), value);
            next = next.merged(single).map_err(|e| CoreError::InvalidSettingValue {
                key: key.as_str().to_string(),
                message: match e {
                    CoreError::Deserialization(msg) => msg,
                    other => other.to_string(),
                },
            })?;
        }
        Ok(next)
    }

    /// Current value of `key`; `None` only when the field is null.
    pub fn get(&self, settings: &AppSettings, key: SettingKey) -> Option<Value> {
        match settings.value_of(key) {
            Value::Null => None,
            value => Some(value),
        }
    }

    /// Like [`get`](Self::get), but also `None` for `false`, `0` and `""`.
    pub fn get_truthy(&self, settings: &AppSettings, key: SettingKey) -> Option<Value> {
        self.get(settings, key).filter(is_truthy)
    }
}

impl Default for SettingsService {
    fn default() -> Self {
        Self::new()
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
