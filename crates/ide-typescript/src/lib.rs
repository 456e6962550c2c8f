//! TypeScript and JavaScript language server adapter
//!
//! This crate plugs an LSP-capable editor into the external
//! `javascript-typescript-langserver` process. Protocol plumbing, process
//! supervision and UI wiring belong to a generic language-client library,
//! which the adapter reaches through the [`LanguageClientBase`] delegate.
//! What this crate adds on top is small:
//!
//! - **Signature scanning**: split a completion's right-hand label into a
//!   parameter list and a return type for display
//! - **Configuration gating**: turn package settings into behavior switches
//! - **Lifecycle hooks**: server start, activation gate, bounded
//!   deactivation, diagnostics gate, autocomplete post-processing and
//!   file-watch filtering
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                 Host editor / client library                 │
//! └───────────────┬──────────────────────────────────────────────┘
//!                 │ extension points
//! ┌───────────────▼──────────────────────────────────────────────┐
//! │               TypeScriptLanguageClient                       │
//! │  ┌──────────────────┐  ┌──────────────┐  ┌────────────────┐  │
//! │  │ ConfigurationGate│  │  Signature   │  │ LanguageClient │  │
//! │  │ (ConfigProvider) │  │  scanner     │  │ Base delegate  │  │
//! │  └──────────────────┘  └──────────────┘  └────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Module Organization
//!
//! - `adapter`: lifecycle adapter and base delegate trait
//! - `client`: custom notification routing
//! - `config`: configuration gate, package settings and settings store
//! - `host`: host capabilities (settings, project directories, editors)
//! - `process`: language server process handle
//! - `scopes`: grammar scopes and watched file extensions
//! - `signature`: completion signature scanner
//! - `error`: error types and result types
//! - `types`: core data structures

pub mod adapter;
pub mod client;
pub mod config;
pub mod error;
pub mod host;
pub mod process;
pub mod scopes;
pub mod signature;
pub mod types;

// Re-export public API
pub use adapter::{LanguageClientBase, TypeScriptLanguageClient};
pub use client::{
    JsonRpcNotification, LanguageClientConnection, NotificationHandler, NotificationRouter,
};
pub use config::{ConfigurationGate, PackageSettings, SettingsLoader, SettingsStore};
pub use error::{AdapterError, Result};
pub use host::{ConfigProvider, LinterRegistry, ProjectResolver, StaticProject, TextEditor};
pub use process::{ServerLaunch, ServerProcess};
pub use signature::{apply_signature, split_signature, SignatureParts};
pub use types::{AutocompleteProvider, ClientState, ReturnTypePlacement, Suggestion};
