use crate::errors::CoreError;

/// Fixed key under which the settings record is persisted.
pub const STORE_KEY: &str = "nanovault-appsettings";

/// Trait abstraction for the persistent string-keyed store.
///
/// The settings record is a single string value under [`STORE_KEY`]; the
/// backend never interprets it.
pub trait SettingsBackend {
    /// Read the value stored under `key`, or `None` when nothing is stored.
    fn get(&self, key: &str) -> Result<Option<String>, CoreError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), CoreError>;

    /// Delete `key`. Removing a key that does not exist is not an error.
    fn remove(&mut self, key: &str) -> Result<(), CoreError>;
}
