//! Key-value stores for user preferences.
//!
//! The analysis engine never reads or writes a store; only the style
//! preferences and the CLI do.

pub mod file;
pub mod memory;
pub mod preferences;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use preferences::{STYLE_SETTINGS_KEY, StylePreferences};

use crate::error::Result;

/// A string-to-string store.
pub trait KeyValueStore: Send + Sync + std::fmt::Debug {
    /// Get the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;

    /// All keys currently stored, sorted.
    fn keys(&self) -> Result<Vec<String>>;
}
