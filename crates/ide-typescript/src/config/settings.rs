//! Package settings and loading from file and environment

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use super::{keys, PACKAGE_NAME};
use crate::{
    error::{AdapterError, Result},
    types::ReturnTypePlacement,
};

/// Settings of the TypeScript package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageSettings {
    /// Handle JavaScript buffers and files as well as TypeScript
    pub javascript_support: bool,
    /// Forward server diagnostics to the linter UI
    pub diagnostics_enabled: bool,
    /// Do not attach to projects with a `.flowconfig`
    pub ignore_flow: bool,
    /// Rank this package's completions above other providers
    pub autocomplete_results_first: bool,
    /// Where completion return types are displayed
    pub return_type_in_autocomplete: ReturnTypePlacement,
}

impl Default for PackageSettings {
    fn default() -> Self {
        Self {
            javascript_support: true,
            diagnostics_enabled: true,
            ignore_flow: false,
            autocomplete_results_first: true,
            return_type_in_autocomplete: ReturnTypePlacement::Left,
        }
    }
}

impl PackageSettings {
    /// Value of a setting by its host name (e.g. `ignoreFlow`)
    pub fn value(&self, name: &str) -> Option<Value> {
        let value = match name {
            keys::JAVASCRIPT_SUPPORT => Value::Bool(self.javascript_support),
            keys::DIAGNOSTICS_ENABLED => Value::Bool(self.diagnostics_enabled),
            keys::IGNORE_FLOW => Value::Bool(self.ignore_flow),
            keys::AUTOCOMPLETE_RESULTS_FIRST => Value::Bool(self.autocomplete_results_first),
            keys::RETURN_TYPE_IN_AUTOCOMPLETE => {
                Value::String(self.return_type_in_autocomplete.as_str().to_string())
            }
            _ => return None,
        };
        Some(value)
    }

    /// Update a setting by its host name
    pub fn set_value(&mut self, name: &str, value: Value) -> Result<()> {
        match name {
            keys::JAVASCRIPT_SUPPORT => self.javascript_support = expect_bool(name, &value)?,
            keys::DIAGNOSTICS_ENABLED => self.diagnostics_enabled = expect_bool(name, &value)?,
            keys::IGNORE_FLOW => self.ignore_flow = expect_bool(name, &value)?,
            keys::AUTOCOMPLETE_RESULTS_FIRST => {
                self.autocomplete_results_first = expect_bool(name, &value)?
            }
            keys::RETURN_TYPE_IN_AUTOCOMPLETE => {
                self.return_type_in_autocomplete =
                    serde_json::from_value(value).map_err(|e| AdapterError::InvalidSetting {
                        key: name.to_string(),
                        reason: e.to_string(),
                    })?
            }
            _ => return Err(AdapterError::UnknownSetting(name.to_string())),
        }
        Ok(())
    }
}

fn expect_bool(name: &str, value: &Value) -> Result<bool> {
    value.as_bool().ok_or_else(|| AdapterError::InvalidSetting {
        key: name.to_string(),
        reason: format!("expected a boolean, got {}", value),
    })
}

/// Loads [`PackageSettings`] from a TOML file and the environment
///
/// Environment variables (`IDE_TYPESCRIPT_IGNORE_FLOW=true`, ...) override
/// the file. A missing file yields the defaults.
pub struct SettingsLoader {
    /// Settings file path
    config_path: PathBuf,
    /// Environment prefix
    env_prefix: String,
}

impl SettingsLoader {
    /// Create a loader for the default settings file
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
            env_prefix: "IDE_TYPESCRIPT".to_string(),
        }
    }

    /// Create with custom settings path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            env_prefix: "IDE_TYPESCRIPT".to_string(),
        }
    }

    /// Override the environment prefix
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Settings file path
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(PACKAGE_NAME)
            .join("config.toml")
    }

    /// Load settings, layering the environment over the file
    pub fn load(&self) -> Result<PackageSettings> {
        debug!(path = ?self.config_path, "Loading package settings");

        let builder = Config::builder()
            .add_source(File::from(self.config_path.clone()).required(false))
            .add_source(Environment::with_prefix(&self.env_prefix).try_parsing(true));

        let settings: PackageSettings = builder.build()?.try_deserialize()?;

        info!(
            javascript_support = settings.javascript_support,
            diagnostics_enabled = settings.diagnostics_enabled,
            ignore_flow = settings.ignore_flow,
            return_type = settings.return_type_in_autocomplete.as_str(),
            "Loaded package settings"
        );

        Ok(settings)
    }

    /// Write settings to the settings file
    pub fn save(&self, settings: &PackageSettings) -> Result<()> {
        let toml = toml::to_string(settings)?;
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.config_path, toml)?;
        debug!(path = ?self.config_path, "Saved package settings");
        Ok(())
    }
}

impl Default for SettingsLoader {
    fn default() -> Self {
        Self::new()
    }
}
