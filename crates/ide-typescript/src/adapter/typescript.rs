//! TypeScript language client
//!
//! Implements the host framework's extension points by composing the
//! base delegate with the configuration gate and the signature scanner.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use tracing::{debug, error, info};

use super::base::LanguageClientBase;
use crate::{
    client::{protocol::PARTIAL_RESULT, LanguageClientConnection},
    config::ConfigurationGate,
    error::{AdapterError, Result},
    host::{ConfigProvider, LinterRegistry, ProjectResolver, TextEditor},
    process::ServerProcess,
    signature,
    types::{AutocompleteProvider, Suggestion},
};

/// Language server entry point, relative to the package root
pub const SERVER_MODULE: &str =
    "node_modules/javascript-typescript-langserver/lib/language-server-stdio";

/// Marker file of Flow projects
pub const FLOW_CONFIG: &str = ".flowconfig";

/// Language reported to the host
pub const LANGUAGE_NAME: &str = "TypeScript";

/// Server name reported to the host
pub const SERVER_NAME: &str = "SourceGraph";

/// How long deactivation waits for the base before giving up
pub const DEFAULT_DEACTIVATE_TIMEOUT: Duration = Duration::from_millis(2000);

/// Language client for `javascript-typescript-langserver`
pub struct TypeScriptLanguageClient<B: LanguageClientBase> {
    base: Arc<B>,
    gate: ConfigurationGate,
    project: Arc<dyn ProjectResolver>,
    /// Directory the server module path is resolved against
    package_root: PathBuf,
    deactivate_timeout: Duration,
    /// Resolved at server start, read by the file-watch filter
    supported_extensions: RwLock<Vec<String>>,
    active: AtomicBool,
}

impl<B: LanguageClientBase> TypeScriptLanguageClient<B> {
    /// Create a client
    ///
    /// # Arguments
    ///
    /// * `base` - Base behavior of the client library
    /// * `config` - Host settings store
    /// * `project` - Project directories open in the host
    /// * `package_root` - Directory containing `node_modules` with the server
    pub fn new(
        base: Arc<B>,
        config: Arc<dyn ConfigProvider>,
        project: Arc<dyn ProjectResolver>,
        package_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            base,
            gate: ConfigurationGate::new(config),
            project,
            package_root: package_root.into(),
            deactivate_timeout: DEFAULT_DEACTIVATE_TIMEOUT,
            supported_extensions: RwLock::new(Vec::new()),
            active: AtomicBool::new(false),
        }
    }

    /// Override the deactivation timeout
    pub fn with_deactivate_timeout(mut self, timeout: Duration) -> Self {
        self.deactivate_timeout = timeout;
        self
    }

    /// Base delegate
    pub fn base(&self) -> &Arc<B> {
        &self.base
    }

    /// Configuration gate
    pub fn gate(&self) -> &ConfigurationGate {
        &self.gate
    }

    /// Language name
    pub fn language_name(&self) -> &'static str {
        LANGUAGE_NAME
    }

    /// Server name
    pub fn server_name(&self) -> &'static str {
        SERVER_NAME
    }

    /// Grammar scopes the server attaches to
    pub fn grammar_scopes(&self) -> Vec<String> {
        self.gate.grammar_scopes()
    }

    /// Extensions resolved at the last server start
    pub fn supported_extensions(&self) -> Vec<String> {
        self.supported_extensions.read().clone()
    }

    /// Whether a server has been started and not deactivated since
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Resolve the supported extensions and launch the language server
    pub async fn start_server_process(&self) -> Result<ServerProcess> {
        let extensions = self.gate.supported_extensions();
        debug!(?extensions, "Resolved supported extensions");
        *self.supported_extensions.write() = extensions;

        let args = vec![SERVER_MODULE.to_string()];
        let process = self
            .base
            .spawn_child_node(args, self.package_root.clone())
            .await?;

        self.active.store(true, Ordering::SeqCst);
        info!(
            server = SERVER_NAME,
            pid = ?process.pid(),
            "TypeScript language server started"
        );
        Ok(process)
    }

    /// Hooks registered on the connection before `initialize`
    pub fn pre_initialization(&self, connection: &mut dyn LanguageClientConnection) {
        // Until the server's streaming detection works, partial results are dropped
        connection.on_custom(PARTIAL_RESULT, Box::new(|_| {}));
    }

    /// Hand diagnostics to the linter UI, if enabled
    pub fn consume_linter_v2(&self, registry: Arc<dyn LinterRegistry>) {
        if self.gate.diagnostics_enabled() {
            self.base.consume_linter_v2(registry);
        } else {
            debug!(registry = registry.name(), "Diagnostics disabled, not registering linter");
        }
    }

    /// Deactivate the base, waiting at most the configured timeout
    ///
    /// On timeout an error is logged and `Ok(())` returned. The base
    /// shutdown keeps running in the background; it is not cancelled.
    pub async fn deactivate(&self) -> Result<()> {
        self.active.store(false, Ordering::SeqCst);

        let base = Arc::clone(&self.base);
        let shutdown = tokio::spawn(async move { base.deactivate().await });

        match tokio::time::timeout(self.deactivate_timeout, shutdown).await {
            Ok(Ok(result)) => result,
            Ok(Err(join_error)) => Err(AdapterError::Deactivation(join_error.to_string())),
            Err(_) => {
                let ms = self.deactivate_timeout.as_millis();
                error!(
                    timeout_ms = ms as u64,
                    "Server failed to shutdown in {}ms, forcing termination", ms
                );
                Ok(())
            }
        }
    }

    /// Whether the server should attach to this editor
    ///
    /// With `ignoreFlow` on, buffers in a project containing `.flowconfig`
    /// are refused. A buffer outside every project directory skips that
    /// check.
    pub fn should_start_for_editor(&self, editor: &dyn TextEditor) -> bool {
        if self.gate.ignore_flow() {
            let uri = editor.uri().unwrap_or_default();
            match self.project_path(Path::new(&uri)) {
                Some(dir) => {
                    let marker = dir.join(FLOW_CONFIG);
                    if marker.exists() {
                        info!(path = ?marker, "Flow project, not starting TypeScript server");
                        return false;
                    }
                }
                None => debug!(uri = %uri, "Buffer outside project directories"),
            }
        }
        self.base.should_start_for_editor(editor)
    }

    /// Project directory owning `file_path`
    pub fn project_path(&self, file_path: &Path) -> Option<PathBuf> {
        self.project.project_path(file_path)
    }

    /// Base autocomplete provider with this package's priority
    pub fn provide_autocomplete(&self) -> AutocompleteProvider {
        AutocompleteProvider {
            suggestion_priority: self.gate.suggestion_priority(),
            ..self.base.provide_autocomplete()
        }
    }

    /// Rewrite a converted suggestion's labels from its signature
    pub fn on_did_convert_autocomplete(&self, suggestion: &mut Suggestion) {
        signature::apply_signature(suggestion, self.gate.return_type_placement());
    }

    /// Whether a changed file is forwarded to the server
    pub fn filter_change_watched_files(&self, file_path: &Path) -> bool {
        let extension = extension_with_dot(file_path);
        self.supported_extensions
            .read()
            .iter()
            .any(|supported| *supported == extension)
    }
}

/// Lowercased extension with its leading dot, empty for none
fn extension_with_dot(path: &Path) -> String {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext.to_lowercase()))
        .unwrap_or_default()
}
