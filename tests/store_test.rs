//! Integration tests for the preference stores.

use std::fs;
use std::sync::Arc;

use infographic::error::Result;
use infographic::store::{FileStore, KeyValueStore, STYLE_SETTINGS_KEY, StylePreferences};
use infographic::visualization::{Layout, StyleSettings};
use tempfile::TempDir;

#[test]
fn test_style_preferences_survive_reopen() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("preferences.json");

    let preferences = StylePreferences::new(Arc::new(FileStore::open(&path)?));
    preferences.update("colorScheme", "green")?;
    preferences.update("layout", "column")?;

    let reopened = StylePreferences::new(Arc::new(FileStore::open(&path)?));
    let settings = reopened.load()?;
    assert_eq!(settings.color_scheme, "green");
    assert_eq!(settings.layout(), Layout::Column);
    assert_eq!(settings.font_size, "base");
    Ok(())
}

#[test]
fn test_file_layout_is_a_json_object() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("preferences.json");

    let store = FileStore::open(&path)?;
    StylePreferences::new(Arc::new(FileStore::open(&path)?)).reset()?;
    drop(store);

    let content = fs::read_to_string(&path)?;
    let value: serde_json::Value = serde_json::from_str(&content)?;
    let saved = value[STYLE_SETTINGS_KEY].as_str().unwrap();
    let settings: StyleSettings = serde_json::from_str(saved)?;
    assert_eq!(settings, StyleSettings::default());
    Ok(())
}

#[test]
fn test_unreadable_value_falls_back_to_defaults() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("preferences.json");
    fs::write(&path, r#"{ "styleSettings": "{broken" }"#)?;

    let store = Arc::new(FileStore::open(&path)?);
    let preferences = StylePreferences::new(store.clone());
    assert_eq!(preferences.load()?, StyleSettings::default());

    // The next save replaces the broken value.
    preferences.update("fontSize", "lg")?;
    assert!(store.get(STYLE_SETTINGS_KEY)?.unwrap().contains("\"fontSize\":\"lg\""));
    Ok(())
}

#[test]
fn test_unknown_ids_in_saved_settings_resolve_to_defaults() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("preferences.json");
    let saved = r#"{"colorScheme":"teal","fontSize":"huge","layout":"masonry","backgroundStyle":"stripes"}"#;
    fs::write(&path, serde_json::json!({ STYLE_SETTINGS_KEY: saved }).to_string())?;

    let settings = StylePreferences::new(Arc::new(FileStore::open(&path)?)).load()?;
    let resolved = settings.resolve();
    assert_eq!(resolved.scheme.id, "blue");
    assert_eq!(resolved.fonts.id, "base");
    assert_eq!(resolved.layout, Layout::Grid.classes());
    assert!(resolved.background.starts_with("background: linear-gradient"));
    Ok(())
}
