//! Base behavior supplied by the generic language-client library

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    error::Result,
    host::{LinterRegistry, TextEditor},
    process::{ServerLaunch, ServerProcess},
    types::AutocompleteProvider,
};

/// Default behavior of the language-client library
///
/// The TypeScript adapter wraps an implementation of this trait and
/// overrides individual extension points on top of it.
#[async_trait]
pub trait LanguageClientBase: Send + Sync + 'static {
    /// Spawn a Node.js language server; `args[0]` is the module path
    async fn spawn_child_node(&self, args: Vec<String>, cwd: PathBuf) -> Result<ServerProcess> {
        ServerProcess::start(ServerLaunch::node(args, cwd)).await
    }

    /// Shut the server down and release the connection
    async fn deactivate(&self) -> Result<()>;

    /// Whether the server should attach to this editor
    fn should_start_for_editor(&self, editor: &dyn TextEditor) -> bool;

    /// Start publishing diagnostics to the linter registry
    fn consume_linter_v2(&self, registry: Arc<dyn LinterRegistry>);

    /// Autocomplete provider registration
    fn provide_autocomplete(&self) -> AutocompleteProvider;
}
