//! Spawning and stopping the language server process

use std::collections::HashMap;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;

use tokio::process::{Child, Command};
use tracing::{debug, error, info, warn};

use crate::error::{AdapterError, Result};
use crate::types::ClientState;

/// How long `shutdown` waits for the process to exit after killing it
const EXIT_WAIT: Duration = Duration::from_secs(5);

/// Command line used to launch a language server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerLaunch {
    /// Executable path (can use $PATH)
    pub executable: String,
    /// Command line arguments
    pub args: Vec<String>,
    /// Working directory
    pub cwd: Option<PathBuf>,
    /// Environment variables
    pub env: HashMap<String, String>,
}

impl ServerLaunch {
    /// Launch `executable` with `args`
    pub fn new(executable: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            executable: executable.into(),
            args,
            cwd: None,
            env: HashMap::new(),
        }
    }

    /// Launch a Node.js module; `args[0]` is the module path
    pub fn node(args: Vec<String>, cwd: impl Into<PathBuf>) -> Self {
        Self::new("node", args).with_cwd(cwd)
    }

    /// Set the working directory
    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    /// Add an environment variable
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }
}

/// A language server child process talking over stdio
pub struct ServerProcess {
    launch: ServerLaunch,
    process: Option<Child>,
    state: ClientState,
}

impl ServerProcess {
    /// Create a handle; nothing runs until [`ServerProcess::spawn`]
    pub fn new(launch: ServerLaunch) -> Self {
        Self {
            launch,
            process: None,
            state: ClientState::Stopped,
        }
    }

    /// Create a handle and spawn it
    pub async fn start(launch: ServerLaunch) -> Result<Self> {
        let mut process = Self::new(launch);
        process.spawn().await?;
        Ok(process)
    }

    /// Launch description
    pub fn launch(&self) -> &ServerLaunch {
        &self.launch
    }

    /// Current state
    pub fn state(&self) -> ClientState {
        self.state
    }

    /// OS process id while running
    pub fn pid(&self) -> Option<u32> {
        self.process.as_ref().and_then(|child| child.id())
    }

    /// Spawn the server process
    pub async fn spawn(&mut self) -> Result<()> {
        if self.state != ClientState::Stopped {
            return Err(AdapterError::ProcessState(format!(
                "Cannot spawn process in state: {:?}",
                self.state
            )));
        }

        self.state = ClientState::Starting;
        debug!(
            executable = %self.launch.executable,
            args = ?self.launch.args,
            cwd = ?self.launch.cwd,
            "Starting language server process"
        );

        let mut cmd = Command::new(&self.launch.executable);
        cmd.args(&self.launch.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        if let Some(cwd) = &self.launch.cwd {
            cmd.current_dir(cwd);
        }
        for (key, value) in &self.launch.env {
            cmd.env(key, value);
        }

        match cmd.spawn() {
            Ok(child) => {
                info!(
                    executable = %self.launch.executable,
                    pid = ?child.id(),
                    "Language server process spawned"
                );
                self.process = Some(child);
                self.state = ClientState::Running;
                Ok(())
            }
            Err(e) => {
                error!(
                    executable = %self.launch.executable,
                    error = %e,
                    "Failed to spawn language server process"
                );
                self.state = ClientState::Stopped;
                Err(AdapterError::SpawnFailed(e))
            }
        }
    }

    /// Kill the process and wait briefly for it to exit
    pub async fn shutdown(&mut self) -> Result<()> {
        if self.state == ClientState::Stopped {
            return Ok(());
        }

        self.state = ClientState::ShuttingDown;
        debug!(executable = %self.launch.executable, "Shutting down language server process");

        if let Some(mut child) = self.process.take() {
            if let Err(e) = child.start_kill() {
                warn!(error = %e, "Failed to kill language server process");
            }

            match tokio::time::timeout(EXIT_WAIT, child.wait()).await {
                Ok(Ok(status)) => {
                    info!(?status, "Language server process exited");
                }
                Ok(Err(e)) => {
                    warn!(error = %e, "Error waiting for language server process to exit");
                }
                Err(_) => {
                    warn!(
                        wait_ms = EXIT_WAIT.as_millis() as u64,
                        "Timeout waiting for language server process to exit"
                    );
                }
            }
        }

        self.state = ClientState::Stopped;
        Ok(())
    }

    /// Whether the process is still alive
    pub fn is_running(&mut self) -> bool {
        let Some(child) = self.process.as_mut() else {
            return false;
        };

        match child.try_wait() {
            Ok(Some(status)) => {
                warn!(?status, "Language server process exited unexpectedly");
                self.process = None;
                self.state = ClientState::Crashed;
                false
            }
            Ok(None) => true,
            Err(e) => {
                error!(error = %e, "Error checking language server process status");
                false
            }
        }
    }

    /// Take the process stdin
    pub fn stdin(&mut self) -> Option<tokio::process::ChildStdin> {
        self.process.as_mut().and_then(|child| child.stdin.take())
    }

    /// Take the process stdout
    pub fn stdout(&mut self) -> Option<tokio::process::ChildStdout> {
        self.process.as_mut().and_then(|child| child.stdout.take())
    }

    /// Take the process stderr
    pub fn stderr(&mut self) -> Option<tokio::process::ChildStderr> {
        self.process.as_mut().and_then(|child| child.stderr.take())
    }
}
