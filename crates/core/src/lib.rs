pub mod errors;
pub mod models;
pub mod services;
pub mod storage;

use models::{
    key::SettingKey,
    server::{ServerPreset, ServerSelection, SERVER_PRESETS},
    settings::AppSettings,
};
use serde_json::Value;
use services::{
    server_service::{OsRandom, RandomIndex, ServerService},
    settings_service::SettingsService,
};
use storage::backend::{SettingsBackend, STORE_KEY};
use storage::codec;
use tracing::{debug, warn};

use errors::CoreError;

/// Main entry point for the wallet settings core library.
///
/// Owns the in-memory settings record and the backend it is persisted to.
/// Build one with [`SettingsStore::initialize`] and hand it (or a reference)
/// to whatever needs to read or change settings.
#[must_use]
pub struct SettingsStore<B: SettingsBackend> {
    settings: AppSettings,
    backend: B,
    rng: Box<dyn RandomIndex>,
    server_service: ServerService,
    settings_service: SettingsService,
}

impl<B: SettingsBackend> std::fmt::Debug for SettingsStore<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsStore")
            .field("server_name", &self.settings.server_name)
            .field("server_api", &self.settings.server_api)
            .field("server_ws", &self.settings.server_ws)
            .finish_non_exhaustive()
    }
}

impl<B: SettingsBackend> SettingsStore<B> {
    /// Defaults, then persisted state merged in, then the server resolved.
    ///
    /// Fails if the persisted record is malformed.
    pub fn initialize(backend: B) -> Result<Self, CoreError> {
        Self::initialize_with_random(backend, Box::new(OsRandom))
    }

    /// Same as [`initialize`](Self::initialize) with a caller-supplied random source.
    pub fn initialize_with_random(backend: B, rng: Box<dyn RandomIndex>) -> Result<Self, CoreError> {
        let mut store = Self::build(backend, rng);
        store.load_settings()?;
        Ok(store)
    }

    /// Like [`initialize`](Self::initialize), but a malformed persisted
    /// record is logged and ignored; defaults are used instead. The stored
    /// value is left as is until the next persist overwrites it.
    pub fn initialize_or_default(backend: B) -> Result<Self, CoreError> {
        let mut store = Self::build(backend, Box::new(OsRandom));
        match store.load_settings() {
            Ok(_) => {}
            Err(CoreError::Deserialization(msg)) => {
                warn!(error = %msg, "settings: discarding malformed persisted settings");
                store.resolve_server()?;
            }
            Err(e) => return Err(e),
        }
        Ok(store)
    }

    fn build(backend: B, rng: Box<dyn RandomIndex>) -> Self {
        Self {
            settings: AppSettings::default(),
            backend,
            rng,
            server_service: ServerService::new(),
            settings_service: SettingsService::new(),
        }
    }

    // ── Loading / persistence ───────────────────────────────────────

    /// Merge the persisted record into the in-memory one and resolve the
    /// server. Does not write to storage.
    pub fn load_settings(&mut self) -> Result<&AppSettings, CoreError> {
        let raw = self.backend.get(STORE_KEY)?;
        self.settings = self
            .settings_service
            .merge_persisted(&self.settings, raw.as_deref())?;
        self.resolve_server()?;
        Ok(&self.settings)
    }

    /// Resolve `server_name` into `server_api` / `server_ws`.
    pub fn resolve_server(&mut self) -> Result<ServerSelection, CoreError> {
        self.server_service
            .resolve(&mut self.settings, &mut *self.rng)
    }

    /// Write the whole record to storage, replacing the previous value.
    pub fn persist(&mut self) -> Result<(), CoreError> {
        let encoded = codec::encode(&self.settings)?;
        self.backend.set(STORE_KEY, &encoded)?;
        debug!(bytes = encoded.len(), "settings: persisted");
        Ok(())
    }

    // ── Reading ─────────────────────────────────────────────────────

    #[must_use]
    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    /// Current value of `key`, `None` when it is null.
    #[must_use]
    pub fn get_setting(&self, key: SettingKey) -> Option<Value> {
        self.settings_service.get(&self.settings, key)
    }

    /// Current value of `key`, `None` when it is null or falsy
    /// (`false`, `0`, `""`). A stored `0` reads back as `None` here.
    #[must_use]
    pub fn get_truthy_setting(&self, key: SettingKey) -> Option<Value> {
        self.settings_service.get_truthy(&self.settings, key)
    }

    /// All server presets, in display order.
    #[must_use]
    pub fn server_presets(&self) -> &'static [ServerPreset] {
        &SERVER_PRESETS
    }

    /// Base URL of the configured API endpoint, e.g. `https://nault.nanos.cc/`.
    pub fn api_base_url(&self) -> Result<String, CoreError> {
        self.server_service
            .api_base_url(self.settings.server_api.as_deref())
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Direct access to the backend, for hosts that sync storage themselves.
    /// Changes are picked up by the next [`load_settings`](Self::load_settings).
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Consume the store and return its backend.
    pub fn into_backend(self) -> B {
        self.backend
    }

    // ── Mutation ────────────────────────────────────────────────────

    /// Set one field and persist.
    pub fn set_setting(&mut self, key: SettingKey, value: impl Into<Value>) -> Result<(), CoreError> {
        self.set_settings([(key, value.into())])
    }

    /// Set several fields and persist once. Nothing changes if any value
    /// has the wrong type for its field.
    pub fn set_settings<I>(&mut self, patch: I) -> Result<(), CoreError>
    where
        I: IntoIterator<Item = (SettingKey, Value)>,
    {
        self.settings = self.settings_service.apply_patch(&self.settings, patch)?;
        self.persist()
    }

    /// Remove the persisted record and reset to defaults.
    ///
    /// The server is not resolved again; call [`load_settings`](Self::load_settings)
    /// to get endpoints back.
    pub fn clear_settings(&mut self) -> Result<(), CoreError> {
        self.backend.remove(STORE_KEY)?;
        self.settings = AppSettings::default();
        Ok(())
    }
}
