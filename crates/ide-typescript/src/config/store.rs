//! Thread-safe settings store backing the configuration gate

use std::collections::HashMap;

use parking_lot::RwLock;
use serde_json::Value;
use tracing::debug;

use super::{settings::PackageSettings, PACKAGE_NAME};
use crate::{error::Result, host::ConfigProvider};

/// Settings store the host mutates and the adapter reads
///
/// Keys are fully qualified (`ide-typescript.ignoreFlow`); an unqualified
/// name is accepted by [`SettingsStore::set`] as well.
#[derive(Debug, Default)]
pub struct SettingsStore {
    settings: RwLock<PackageSettings>,
}

impl SettingsStore {
    /// Create a store holding the given settings
    pub fn new(settings: PackageSettings) -> Self {
        Self {
            settings: RwLock::new(settings),
        }
    }

    /// Copy of the current settings
    pub fn snapshot(&self) -> PackageSettings {
        self.settings.read().clone()
    }

    /// Update one setting
    pub fn set(&self, key: &str, value: Value) -> Result<()> {
        let name = strip_namespace(key).unwrap_or(key);
        self.settings.write().set_value(name, value.clone())?;
        debug!(key = name, %value, "Setting updated");
        Ok(())
    }

    /// Replace all settings at once
    pub fn replace(&self, settings: PackageSettings) {
        *self.settings.write() = settings;
    }
}

impl ConfigProvider for SettingsStore {
    fn get(&self, key: &str) -> Option<Value> {
        let name = strip_namespace(key)?;
        self.settings.read().value(name)
    }
}

/// Raw key/value settings, as a host without typed settings would hand them over
impl ConfigProvider for HashMap<String, Value> {
    fn get(&self, key: &str) -> Option<Value> {
        HashMap::get(self, key).cloned()
    }
}

fn strip_namespace(key: &str) -> Option<&str> {
    key.strip_prefix(PACKAGE_NAME)?.strip_prefix('.')
}
