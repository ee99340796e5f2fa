use serde::Serialize;

/// `serverName` meaning "pick any preset eligible for random selection".
pub const RANDOM_SERVER: &str = "random";
/// `serverName` meaning "use the user-supplied endpoints verbatim".
pub const CUSTOM_SERVER: &str = "custom";
/// `serverName` meaning "no network".
pub const OFFLINE_SERVER: &str = "offline";

/// A named, hardcoded backend configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServerPreset {
    /// Display name shown in server pickers.
    pub name: &'static str,
    /// Identifier stored in `serverName`.
    pub value: &'static str,
    pub api: Option<&'static str>,
    pub ws: Option<&'static str>,
    pub auth: Option<&'static str>,
    pub eligible_for_random: bool,
}

pub static SERVER_PRESETS: [ServerPreset; 8] = [
    ServerPreset {
        name: "Random",
        value: RANDOM_SERVER,
        api: None,
        ws: None,
        auth: None,
        eligible_for_random: false,
    },
    ServerPreset {
        name: "My Nano Ninja",
        value: "ninja",
        api: Some("https://mynano.ninja/api/node"),
        ws: Some("wss://ws.mynano.ninja"),
        auth: None,
        eligible_for_random: true,
    },
    ServerPreset {
        name: "Nanos.cc",
        value: "nanos",
        api: Some("https://nault.nanos.cc/proxy"),
        ws: Some("wss://nault-ws.nanos.cc"),
        auth: None,
        eligible_for_random: true,
    },
    ServerPreset {
        name: "VoxPopuli",
        value: "voxpopuli",
        api: Some("https://vox.nanos.cc/api"),
        ws: Some("wss://vox.nanos.cc/websocket"),
        auth: None,
        eligible_for_random: true,
    },
    ServerPreset {
        name: "Nanex.cc",
        value: "nanex",
        api: Some("https://api.nanex.cc"),
        ws: None,
        auth: None,
        eligible_for_random: false,
    },
    ServerPreset {
        name: "NanoCrawler",
        value: "nanocrawler",
        api: Some("https://vault.nanocrawler.cc/api/node-api"),
        ws: None,
        auth: None,
        eligible_for_random: false,
    },
    ServerPreset {
        name: "Custom",
        value: CUSTOM_SERVER,
        api: None,
        ws: None,
        auth: None,
        eligible_for_random: false,
    },
    ServerPreset {
        name: "Offline Mode",
        value: OFFLINE_SERVER,
        api: None,
        ws: None,
        auth: None,
        eligible_for_random: false,
    },
];

/// Look up a preset by its `value`.
pub fn find_preset(value: &str) -> Option<&'static ServerPreset> {
    SERVER_PRESETS.iter().find(|p| p.value == value)
}

/// Presets that automatic server selection may pick, in table order.
pub fn random_candidates() -> Vec<&'static ServerPreset> {
    SERVER_PRESETS
        .iter()
        .filter(|p| p.eligible_for_random)
        .collect()
}

/// How a `serverName` is interpreted during resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerSelection {
    /// `"random"`, or any name that matches no preset.
    Random,
    Custom,
    Offline,
    Preset(&'static ServerPreset),
}

impl ServerSelection {
    pub fn classify(server_name: &str) -> Self {
        match find_preset(server_name) {
            None => ServerSelection::Random,
            Some(p) if p.value == RANDOM_SERVER => ServerSelection::Random,
            Some(p) if p.value == CUSTOM_SERVER => ServerSelection::Custom,
            Some(p) if p.value == OFFLINE_SERVER => ServerSelection::Offline,
            Some(p) => ServerSelection::Preset(p),
        }
    }
}
