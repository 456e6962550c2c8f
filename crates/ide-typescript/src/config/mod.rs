//! Package settings and the configuration gate

pub mod gate;
pub mod settings;
pub mod store;

pub use gate::ConfigurationGate;
pub use settings::{PackageSettings, SettingsLoader};
pub use store::SettingsStore;

/// Namespace of every setting this package reads
pub const PACKAGE_NAME: &str = "ide-typescript";

/// Setting names, as the host stores them under [`PACKAGE_NAME`]
pub mod keys {
    pub const JAVASCRIPT_SUPPORT: &str = "javascriptSupport";
    pub const DIAGNOSTICS_ENABLED: &str = "diagnosticsEnabled";
    pub const IGNORE_FLOW: &str = "ignoreFlow";
    pub const AUTOCOMPLETE_RESULTS_FIRST: &str = "autocompleteResultsFirst";
    pub const RETURN_TYPE_IN_AUTOCOMPLETE: &str = "returnTypeInAutocomplete";

    /// All known setting names
    pub const ALL: &[&str] = &[
        JAVASCRIPT_SUPPORT,
        DIAGNOSTICS_ENABLED,
        IGNORE_FLOW,
        AUTOCOMPLETE_RESULTS_FIRST,
        RETURN_TYPE_IN_AUTOCOMPLETE,
    ];
}

/// Fully qualified key for a setting name
pub fn qualified(name: &str) -> String {
    format!("{}.{}", PACKAGE_NAME, name)
}
