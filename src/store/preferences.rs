//! Persisted style settings.

use std::sync::Arc;

use tracing::{debug, warn};

use super::KeyValueStore;
use crate::error::Result;
use crate::visualization::StyleSettings;

/// Key under which the style settings are stored.
pub const STYLE_SETTINGS_KEY: &str = "styleSettings";

/// Style settings backed by a [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct StylePreferences {
    store: Arc<dyn KeyValueStore>,
}

impl StylePreferences {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        StylePreferences { store }
    }

    /// The saved settings, or the defaults when nothing usable is saved.
    ///
    /// An unreadable saved value is logged and ignored; it is overwritten by
    /// the next save.
    pub fn load(&self) -> Result<StyleSettings> {
        let Some(saved) = self.store.get(STYLE_SETTINGS_KEY)? else {
            debug!("no saved style settings, using defaults");
            return Ok(StyleSettings::default());
        };
        match serde_json::from_str(&saved) {
            Ok(settings) => Ok(settings),
            Err(e) => {
                warn!(error = %e, "ignoring unreadable style settings");
                Ok(StyleSettings::default())
            }
        }
    }

    pub fn save(&self, settings: &StyleSettings) -> Result<()> {
        let value = serde_json::to_string(settings)?;
        self.store.set(STYLE_SETTINGS_KEY, &value)
    }

    /// Change one setting and save the result.
    pub fn update(&self, key: &str, value: &str) -> Result<StyleSettings> {
        let mut settings = self.load()?;
        settings.set(key, value)?;
        self.save(&settings)?;
        Ok(settings)
    }

    /// Save and return the default settings.
    pub fn reset(&self) -> Result<StyleSettings> {
        let settings = StyleSettings::default();
        self.save(&settings)?;
        Ok(settings)
    }
}
