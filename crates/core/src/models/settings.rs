use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::CoreError;

use super::key::SettingKey;

/// Where wallet secrets are persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WalletStore {
    #[serde(rename = "localStorage")]
    LocalStorage,
    #[serde(rename = "none")]
    Disabled,
}

impl WalletStore {
    pub fn as_str(&self) -> &'static str {
        match self {
            WalletStore::LocalStorage => "localStorage",
            WalletStore::Disabled => "none",
        }
    }
}

/// Hardware wallet transport preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LedgerConnectionType {
    Usb,
    Bluetooth,
}

impl LedgerConnectionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LedgerConnectionType::Usb => "usb",
            LedgerConnectionType::Bluetooth => "bluetooth",
        }
    }
}

/// Where proof-of-work is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowSource {
    #[serde(rename = "server")]
    Server,
    #[serde(rename = "clientCPU")]
    ClientCpu,
    #[serde(rename = "clientWebGL")]
    ClientWebGl,
    #[serde(rename = "best")]
    Best,
}

impl PowSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            PowSource::Server => "server",
            PowSource::ClientCpu => "clientCPU",
            PowSource::ClientWebGl => "clientWebGL",
            PowSource::Best => "best",
        }
    }
}

/// User-configurable application settings.
///
/// Persisted as a single JSON object with camelCase keys. Keys this version
/// does not know about are kept in `extra` and written back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    /// Unit used when displaying amounts ("mnano", "knano", "nano", ...).
    pub display_denomination: String,
    pub wallet_store: WalletStore,
    /// Fiat currency code used for conversions (e.g. "USD", "EUR").
    pub display_currency: String,
    pub default_representative: Option<String>,
    /// 1 = lock the wallet when the app closes.
    pub lock_on_close: i64,
    pub lock_inactivity_minutes: i64,
    pub ledger_reconnect: LedgerConnectionType,
    pub pow_source: PowSource,
    /// Proof-of-work difficulty multiplier.
    pub multiplier_source: f64,
    pub pending_option: String,

    /// Selected server preset value, or an arbitrary custom string.
    pub server_name: String,
    #[serde(rename = "serverAPI")]
    pub server_api: Option<String>,
    #[serde(rename = "serverWS")]
    pub server_ws: Option<String>,
    pub server_auth: Option<String>,

    pub minimum_receive: Option<String>,
    pub wallet_version: Option<i64>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            display_denomination: "mnano".to_string(),
            wallet_store: WalletStore::LocalStorage,
            display_currency: "USD".to_string(),
            default_representative: None,
            lock_on_close: 1,
            lock_inactivity_minutes: 30,
            ledger_reconnect: LedgerConnectionType::Usb,
            pow_source: PowSource::Best,
            multiplier_source: 1.0,
            pending_option: "amount".to_string(),
            server_name: "random".to_string(),
            server_api: None,
            server_ws: None,
            server_auth: None,
            minimum_receive: None,
            wallet_version: Some(1),
            extra: Map::new(),
        }
    }
}

impl AppSettings {
    /// Current value of a single field, in its JSON wire form.
    pub fn value_of(&self, key: SettingKey) -> Value {
        match key {
            SettingKey::DisplayDenomination => self.display_denomination.clone().into(),
            SettingKey::WalletStore => self.wallet_store.as_str().into(),
            SettingKey::DisplayCurrency => self.display_currency.clone().into(),
            SettingKey::DefaultRepresentative => self.default_representative.clone().into(),
            SettingKey::LockOnClose => self.lock_on_close.into(),
            SettingKey::LockInactivityMinutes => self.lock_inactivity_minutes.into(),
            SettingKey::LedgerReconnect => self.ledger_reconnect.as_str().into(),
            SettingKey::PowSource => self.pow_source.as_str().into(),
            SettingKey::MultiplierSource => self.multiplier_source.into(),
            SettingKey::PendingOption => self.pending_option.clone().into(),
            SettingKey::ServerName => self.server_name.clone().into(),
            SettingKey::ServerApi => self.server_api.clone().into(),
            SettingKey::ServerWs => self.server_ws.clone().into(),
            SettingKey::ServerAuth => self.server_auth.clone().into(),
            SettingKey::MinimumReceive => self.minimum_receive.clone().into(),
            SettingKey::WalletVersion => self.wallet_version.into(),
        }
    }

    /// The whole record as a JSON object.
    pub fn to_map(&self) -> Result<Map<String, Value>, CoreError> {
        match serde_json::to_value(self)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize settings: {e}")))?
        {
            Value::Object(map) => Ok(map),
            other => Err(CoreError::Serialization(format!(
                "Settings serialized to a non-object value: {other}"
            ))),
        }
    }

    /// Shallow merge: every key in `patch` replaces the same key of `self`,
    /// keys absent from `patch` keep their current value, unknown keys land
    /// in `extra`.
    pub fn merged(&self, patch: Map<String, Value>) -> Result<Self, CoreError> {
        let mut base = self.to_map()?;
        for (key, value) in patch {
            base.insert(key, value);
        }
        serde_json::from_value(Value::Object(base))
            .map_err(|e| CoreError::Deserialization(format!("Invalid settings record: {e}")))
    }
}
