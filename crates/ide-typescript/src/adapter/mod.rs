//! Lifecycle adapter between the host framework and the language server

pub mod base;
pub mod typescript;

pub use base::LanguageClientBase;
pub use typescript::{
    TypeScriptLanguageClient, DEFAULT_DEACTIVATE_TIMEOUT, FLOW_CONFIG, LANGUAGE_NAME, SERVER_MODULE,
    SERVER_NAME,
};
