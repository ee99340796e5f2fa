use tracing::debug;
use url::Url;

use crate::errors::CoreError;
use crate::models::server::{self, ServerSelection};
use crate::models::settings::AppSettings;

/// Source of uniformly distributed indices for random server selection.
pub trait RandomIndex: Send {
    /// Return an index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> Result<usize, CoreError>;
}

/// Draws from the operating system RNG on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl RandomIndex for OsRandom {
    fn pick(&mut self, len: usize) -> Result<usize, CoreError> {
        let mut buf = [0u8; 8];
        getrandom::getrandom(&mut buf)?;

        // 53 random bits give a uniform f64 in [0, 1).
        let unit = (u64::from_le_bytes(buf) >> 11) as f64 / (1u64 << 53) as f64;
        let index = (unit * len as f64).floor() as usize;
        Ok(index.min(len.saturating_sub(1)))
    }
}

/// Turns `serverName` into concrete endpoints and derives URLs from them.
pub struct ServerService;

impl ServerService {
    pub fn new() -> Self {
        Self
    }

    /// Resolve `settings.server_name` against the preset table.
    ///
    /// - random / unknown name: endpoints from a random eligible preset,
    ///   `server_name` left as is so the next load picks again
    /// - custom: nothing changes
    /// - offline or a named preset: name and endpoints overwritten from the preset
    ///
    /// `server_auth` is never touched.
    pub fn resolve(
        &self,
        settings: &mut AppSettings,
        rng: &mut dyn RandomIndex,
    ) -> Result<ServerSelection, CoreError> {
        let selection = ServerSelection::classify(&settings.server_name);

        match selection {
            ServerSelection::Random => {
                let candidates = server::random_candidates();
                if candidates.is_empty() {
                    return Err(CoreError::NoServerConfigured);
                }
                let index = rng.pick(candidates.len())?;
                let chosen = candidates.get(index).ok_or_else(|| {
                    CoreError::Random(format!(
                        "index {index} out of range for {} candidates",
                        candidates.len()
                    ))
                })?;
                debug!(
                    server_name = %settings.server_name,
                    chosen = chosen.value,
                    "settings: random server"
                );
                settings.server_api = chosen.api.map(str::to_string);
                settings.server_ws = chosen.ws.map(str::to_string);
            }
            ServerSelection::Custom => {
                debug!(api = ?settings.server_api, "settings: custom server");
            }
            ServerSelection::Offline => {
                debug!("settings: offline mode");
                Self::apply_preset(settings, server::OFFLINE_SERVER);
            }
            ServerSelection::Preset(preset) => {
                debug!(server = preset.value, "settings: preset server");
                Self::apply_preset(settings, preset.value);
            }
        }

        Ok(selection)
    }

    fn apply_preset(settings: &mut AppSettings, value: &str) {
        if let Some(preset) = server::find_preset(value) {
            settings.server_name = preset.value.to_string();
            settings.server_api = preset.api.map(str::to_string);
            settings.server_ws = preset.ws.map(str::to_string);
        }
    }

    /// Base URL (scheme, authority and `/`) of an API endpoint.
    ///
    /// `https://nault.nanos.cc/proxy/node-api` → `https://nault.nanos.cc/`.
    ///
    /// The result is scheme, authority and `/` only. Query and fragment are
    /// dropped along with the path, unlike a rewrite that replaces just the
    /// pathname. A port that is the scheme's default (`:443` for https,
    /// `:80` for http) is omitted, as `url` normalizes it away on parse.
    /// Non-default ports are kept.
    pub fn api_base_url(&self, server_api: Option<&str>) -> Result<String, CoreError> {
        let api = server_api.ok_or(CoreError::NoServerConfigured)?;
        let mut url = Url::parse(api)?;
        if url.cannot_be_a_base() {
            return Err(CoreError::InvalidUrl(format!("{api} has no host")));
        }
        url.set_path("/");
        url.set_query(None);
        url.set_fragment(None);
        Ok(url.into())
    }
}

impl Default for ServerService {
    fn default() -> Self {
        Self::new()
    }
}
