//! End-to-end workflow tests for the TypeScript client
//!
//! These tests wire the client the way a host would:
//! - settings loaded from a TOML file into a shared store
//! - a base delegate standing in for the client library
//! - completion post-processing following live setting changes

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use ide_typescript::{
    config::{keys, qualified},
    AutocompleteProvider, ConfigProvider, LanguageClientBase, LinterRegistry, PackageSettings,
    Result, ServerLaunch, ServerProcess, SettingsLoader, SettingsStore, StaticProject,
    Suggestion, TextEditor, TypeScriptLanguageClient,
};
use parking_lot::Mutex;
use serde_json::json;

#[derive(Default)]
struct HostBase {
    launches: Mutex<Vec<ServerLaunch>>,
}

#[async_trait]
impl LanguageClientBase for HostBase {
    async fn spawn_child_node(&self, args: Vec<String>, cwd: PathBuf) -> Result<ServerProcess> {
        let launch = ServerLaunch::node(args, cwd);
        self.launches.lock().push(launch.clone());
        Ok(ServerProcess::new(launch))
    }

    async fn deactivate(&self) -> Result<()> {
        Ok(())
    }

    fn should_start_for_editor(&self, _editor: &dyn TextEditor) -> bool {
        true
    }

    fn consume_linter_v2(&self, _registry: Arc<dyn LinterRegistry>) {}

    fn provide_autocomplete(&self) -> AutocompleteProvider {
        AutocompleteProvider {
            selector: ".source.js, .source.ts".to_string(),
            ..Default::default()
        }
    }
}

/// Completion labels as the server reports them
fn server_suggestions() -> Vec<Suggestion> {
    vec![
        Suggestion::new("readFile")
            .with_display_text("readFile")
            .with_type("function")
            .with_right_label(
                "function readFile(path: string, cb: (err: Error, data: Buffer) => void): void",
            ),
        Suggestion::new("length")
            .with_display_text("length")
            .with_type("property")
            .with_right_label("(property) length: number"),
        Suggestion::new("then")
            .with_display_text("then")
            .with_type("method")
            .with_right_label("(method) Promise<T>.then(onfulfilled?: (value: T) => void): Promise<void>"),
        Suggestion::new("Keyword").with_type("keyword"),
    ]
}

fn load_store(dir: &Path, toml: &str) -> Arc<SettingsStore> {
    let path = dir.join("config.toml");
    std::fs::write(&path, toml).unwrap();
    let settings = SettingsLoader::with_path(path)
        .with_env_prefix("IDE_TYPESCRIPT_WORKFLOW_TEST")
        .load()
        .unwrap();
    Arc::new(SettingsStore::new(settings))
}

#[tokio::test]
async fn test_settings_file_drives_client() {
    let dir = tempfile::tempdir().unwrap();
    let store = load_store(
        dir.path(),
        "javascript_support = false\nautocomplete_results_first = false\n",
    );
    let client = TypeScriptLanguageClient::new(
        Arc::new(HostBase::default()),
        store.clone(),
        Arc::new(StaticProject::new(vec![dir.path().to_path_buf()])),
        dir.path(),
    );

    assert_eq!(client.grammar_scopes(), vec!["source.ts", "source.tsx", "typescript"]);
    assert_eq!(client.provide_autocomplete().suggestion_priority, 1);
    assert_eq!(
        client.provide_autocomplete().selector,
        ".source.js, .source.ts"
    );

    client.start_server_process().await.unwrap();
    let launches = client.base().launches.lock().clone();
    assert_eq!(launches.len(), 1);
    assert_eq!(launches[0].cwd.as_deref(), Some(dir.path()));
    assert!(client.filter_change_watched_files(Path::new("src/main.ts")));
    assert!(!client.filter_change_watched_files(Path::new("src/main.js")));

    client.deactivate().await.unwrap();
    assert!(!client.is_active());
}

#[test]
fn test_completion_labels_follow_placement_setting() {
    let dir = tempfile::tempdir().unwrap();
    let store = load_store(dir.path(), "return_type_in_autocomplete = \"left\"\n");
    let client = TypeScriptLanguageClient::new(
        Arc::new(HostBase::default()),
        store.clone(),
        Arc::new(StaticProject::default()),
        dir.path(),
    );

    let mut left = server_suggestions();
    for suggestion in &mut left {
        client.on_did_convert_autocomplete(suggestion);
    }

    assert_eq!(
        left[0].right_label.as_deref(),
        Some("(path: string, cb: (err: Error, data: Buffer) => void)")
    );
    assert_eq!(left[0].left_label.as_deref(), Some("void"));
    assert_eq!(left[1].right_label.as_deref(), Some("length: number"));
    assert_eq!(left[1].left_label.as_deref(), Some("number"));
    assert_eq!(
        left[2].right_label.as_deref(),
        Some("(onfulfilled?: (value: T) => void)")
    );
    assert_eq!(left[2].left_label.as_deref(), Some("Promise<void>"));
    assert_eq!(left[3], server_suggestions()[3]);

    store
        .set(&qualified(keys::RETURN_TYPE_IN_AUTOCOMPLETE), json!("right"))
        .unwrap();
    assert_eq!(
        store.get(&qualified(keys::RETURN_TYPE_IN_AUTOCOMPLETE)),
        Some(json!("right"))
    );

    let mut right = server_suggestions();
    for suggestion in &mut right {
        client.on_did_convert_autocomplete(suggestion);
    }

    assert_eq!(
        right[0].right_label.as_deref(),
        Some("(path: string, cb: (err: Error, data: Buffer) => void): void")
    );
    assert_eq!(right[0].left_label.as_deref(), Some(""));
    assert_eq!(right[1], server_suggestions()[1]);
}

#[test]
fn test_default_settings_match_package_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let store = load_store(dir.path(), "");
    assert_eq!(store.snapshot(), PackageSettings::default());
}
