// ═══════════════════════════════════════════════════════════════════
// Storage Tests — backends and the persisted JSON codec
// ═══════════════════════════════════════════════════════════════════

use serde_json::json;
use wallet_settings_core::errors::CoreError;
use wallet_settings_core::models::settings::AppSettings;
use wallet_settings_core::storage::backend::{SettingsBackend, STORE_KEY};
use wallet_settings_core::storage::codec;
use wallet_settings_core::storage::file::FileBackend;
use wallet_settings_core::storage::memory::MemoryBackend;

// ═══════════════════════════════════════════════════════════════════
// MemoryBackend
// ═══════════════════════════════════════════════════════════════════

mod memory_backend {
    use super::*;

    #[test]
    fn empty_get_is_none() {
        let b = MemoryBackend::new();
        assert_eq!(b.get(STORE_KEY).unwrap(), None);
        assert!(b.is_empty());
    }

    #[test]
    fn set_then_get() {
        let mut b = MemoryBackend::new();
        b.set(STORE_KEY, "{}").unwrap();
        assert_eq!(b.get(STORE_KEY).unwrap().as_deref(), Some("{}"));
        assert_eq!(b.len(), 1);
    }

    #[test]
    fn set_replaces() {
        let mut b = MemoryBackend::with_entry(STORE_KEY, "old");
        b.set(STORE_KEY, "new").unwrap();
        assert_eq!(b.get(STORE_KEY).unwrap().as_deref(), Some("new"));
        assert_eq!(b.len(), 1);
    }

    #[test]
    fn remove() {
        let mut b = MemoryBackend::with_entry(STORE_KEY, "x");
        b.remove(STORE_KEY).unwrap();
        assert_eq!(b.get(STORE_KEY).unwrap(), None);
    }

    #[test]
    fn remove_missing_is_ok() {
        let mut b = MemoryBackend::new();
        assert!(b.remove(STORE_KEY).is_ok());
    }

    #[test]
    fn keys_are_independent() {
        let mut b = MemoryBackend::new();
        b.set("a", "1").unwrap();
        b.set("b", "2").unwrap();
        b.remove("a").unwrap();
        assert_eq!(b.get("b").unwrap().as_deref(), Some("2"));
    }
}

// ═══════════════════════════════════════════════════════════════════
// FileBackend
// ═══════════════════════════════════════════════════════════════════

mod file_backend {
    use super::*;

    #[test]
    fn missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let b = FileBackend::new(dir.path());
        assert_eq!(b.get(STORE_KEY).unwrap(), None);
    }

    #[test]
    fn set_then_get() {
        let dir = tempfile::tempdir().unwrap();
        let mut b = FileBackend::new(dir.path());
        b.set(STORE_KEY, r#"{"displayCurrency":"EUR"}"#).unwrap();
        assert_eq!(
            b.get(STORE_KEY).unwrap().as_deref(),
            Some(r#"{"displayCurrency":"EUR"}"#)
        );
        assert!(dir.path().join("nanovault-appsettings.json").exists());
    }

    #[test]
    fn creates_directory_on_write() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("profile").join("settings");
        let mut b = FileBackend::new(&nested);
        assert!(!nested.exists());
        b.set(STORE_KEY, "{}").unwrap();
        assert!(nested.is_dir());
        assert_eq!(b.dir(), nested.as_path());
    }

    #[test]
    fn remove_deletes_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut b = FileBackend::new(dir.path());
        b.set(STORE_KEY, "{}").unwrap();
        b.remove(STORE_KEY).unwrap();
        assert_eq!(b.get(STORE_KEY).unwrap(), None);
        assert!(!dir.path().join("nanovault-appsettings.json").exists());
    }

    #[test]
    fn remove_missing_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let mut b = FileBackend::new(dir.path());
        assert!(b.remove(STORE_KEY).is_ok());
    }

    #[test]
    fn rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut b = FileBackend::new(dir.path());
        for key in ["../escape", "a/b", "", ".hidden"] {
            let err = b.set(key, "{}").unwrap_err();
            assert!(matches!(err, CoreError::Storage(_)), "{key:?}");
        }
    }

    #[test]
    fn non_utf8_is_deserialization() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("nanovault-appsettings.json"), [0xff, 0xfe, b'{']).unwrap();
        let b = FileBackend::new(dir.path());
        assert!(matches!(b.get(STORE_KEY), Err(CoreError::Deserialization(_))));
    }

    #[test]
    fn read_error_is_file_io() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be makes the read fail.
        std::fs::create_dir(dir.path().join("nanovault-appsettings.json")).unwrap();
        let b = FileBackend::new(dir.path());
        assert!(matches!(b.get(STORE_KEY), Err(CoreError::FileIO(_))));
    }
}

// ═══════════════════════════════════════════════════════════════════
// Codec
// ═══════════════════════════════════════════════════════════════════

mod codec_tests {
    use super::*;

    #[test]
    fn encode_is_a_json_object_with_all_keys() {
        let text = codec::encode(&AppSettings::default()).unwrap();
        let map = codec::decode(&text).unwrap();
        assert_eq!(map.len(), 16);
        assert_eq!(map["displayDenomination"], json!("mnano"));
        assert_eq!(map["serverName"], json!("random"));
    }

    #[test]
    fn encode_then_merge_restores_record() {
        let s = AppSettings {
            display_currency: "JPY".into(),
            server_auth: Some("token".into()),
            lock_on_close: 0,
            ..AppSettings::default()
        };
        let map = codec::decode(&codec::encode(&s).unwrap()).unwrap();
        assert_eq!(AppSettings::default().merged(map).unwrap(), s);
    }

    #[test]
    fn decode_invalid_json() {
        let err = codec::decode("{not json").unwrap_err();
        assert!(matches!(err, CoreError::Deserialization(ref m) if m.contains("not valid JSON")));
    }

    #[test]
    fn decode_non_object() {
        let err = codec::decode("[1, 2]").unwrap_err();
        assert!(matches!(err, CoreError::Deserialization(ref m) if m.contains("an array")));

        let err = codec::decode("null").unwrap_err();
        assert!(matches!(err, CoreError::Deserialization(ref m) if m.contains("null")));
    }

    #[test]
    fn decode_partial_object() {
        let map = codec::decode(r#"{"displayCurrency":"EUR"}"#).unwrap();
        assert_eq!(map.len(), 1);
    }
}
