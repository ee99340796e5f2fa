use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// Every field of [`AppSettings`](super::settings::AppSettings) that can be
/// read or written through the generic accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    DisplayDenomination,
    WalletStore,
    DisplayCurrency,
    DefaultRepresentative,
    LockOnClose,
    LockInactivityMinutes,
    LedgerReconnect,
    PowSource,
    MultiplierSource,
    PendingOption,
    ServerName,
    ServerApi,
    ServerWs,
    ServerAuth,
    MinimumReceive,
    WalletVersion,
}

impl SettingKey {
    pub const ALL: [SettingKey; 16] = [
        SettingKey::DisplayDenomination,
        SettingKey::WalletStore,
        SettingKey::DisplayCurrency,
        SettingKey::DefaultRepresentative,
        SettingKey::LockOnClose,
        SettingKey::LockInactivityMinutes,
        SettingKey::LedgerReconnect,
        SettingKey::PowSource,
        SettingKey::MultiplierSource,
        SettingKey::PendingOption,
        SettingKey::ServerName,
        SettingKey::ServerApi,
        SettingKey::ServerWs,
        SettingKey::ServerAuth,
        SettingKey::MinimumReceive,
        SettingKey::WalletVersion,
    ];

    /// The key as it appears in the persisted JSON record.
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingKey::DisplayDenomination => "displayDenomination",
            SettingKey::WalletStore => "walletStore",
            SettingKey::DisplayCurrency => "displayCurrency",
            SettingKey::DefaultRepresentative => "defaultRepresentative",
            SettingKey::LockOnClose => "lockOnClose",
            SettingKey::LockInactivityMinutes => "lockInactivityMinutes",
            SettingKey::LedgerReconnect => "ledgerReconnect",
            SettingKey::PowSource => "powSource",
            SettingKey::MultiplierSource => "multiplierSource",
            SettingKey::PendingOption => "pendingOption",
            SettingKey::ServerName => "serverName",
            SettingKey::ServerApi => "serverAPI",
            SettingKey::ServerWs => "serverWS",
            SettingKey::ServerAuth => "serverAuth",
            SettingKey::MinimumReceive => "minimumReceive",
            SettingKey::WalletVersion => "walletVersion",
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SettingKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SettingKey::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| CoreError::UnknownSetting(s.to_string()))
    }
}
