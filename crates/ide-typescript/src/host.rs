//! Capabilities the host editor provides to the adapter
//!
//! The adapter never reads ambient editor state. Settings, project
//! directories and buffers reach it through these traits.

use std::path::{Path, PathBuf};

use serde_json::Value;

/// Read access to the host's settings store
pub trait ConfigProvider: Send + Sync {
    /// Current value of a fully qualified key (e.g. `ide-typescript.ignoreFlow`)
    fn get(&self, key: &str) -> Option<Value>;
}

/// Project directories open in the host
pub trait ProjectResolver: Send + Sync {
    /// Root directories of the open project
    fn directories(&self) -> Vec<PathBuf>;

    /// First project directory containing `file_path`, if any
    fn project_path(&self, file_path: &Path) -> Option<PathBuf> {
        self.directories()
            .into_iter()
            .find(|dir| file_path.starts_with(dir))
    }
}

/// An editor buffer the language server may attach to
pub trait TextEditor: Send + Sync {
    /// Path or URI of the buffer, if it has been saved
    fn uri(&self) -> Option<String>;
}

/// Linter UI registry that receives diagnostics
pub trait LinterRegistry: Send + Sync {
    /// Name the registry reports diagnostics under
    fn name(&self) -> &str;
}

/// Project resolver over a fixed list of directories
#[derive(Debug, Clone, Default)]
pub struct StaticProject {
    directories: Vec<PathBuf>,
}

impl StaticProject {
    /// Create a resolver for the given directories
    pub fn new(directories: Vec<PathBuf>) -> Self {
        Self { directories }
    }

    /// Add a directory
    pub fn add_directory(&mut self, dir: impl Into<PathBuf>) {
        self.directories.push(dir.into());
    }
}

impl ProjectResolver for StaticProject {
    fn directories(&self) -> Vec<PathBuf> {
        self.directories.clone()
    }
}
