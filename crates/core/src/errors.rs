use thiserror::Error;

/// Unified error type for the entire wallet-settings-core library.
/// Every public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Persistence ─────────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Storage error: {0}")]
    Storage(String),

    // ── File I/O (native only) ──────────────────────────────────────
    #[error("File I/O error: {0}")]
    FileIO(String),

    // ── Settings ────────────────────────────────────────────────────
    #[error("Unknown setting: {0}")]
    UnknownSetting(String),

    #[error("Invalid value for setting {key}: {message}")]
    InvalidSettingValue { key: String, message: String },

    // ── Server resolution ───────────────────────────────────────────
    #[error("No server API endpoint is configured")]
    NoServerConfigured,

    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    #[error("Random source failed: {0}")]
    Random(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::FileIO(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<url::ParseError> for CoreError {
    fn from(e: url::ParseError) -> Self {
        CoreError::InvalidUrl(e.to_string())
    }
}

impl From<getrandom::Error> for CoreError {
    fn from(e: getrandom::Error) -> Self {
        CoreError::Random(e.to_string())
    }
}
