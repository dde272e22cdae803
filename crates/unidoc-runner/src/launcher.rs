//! Spawning and replacing docfx child processes.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;

use tokio::process::{Child, Command};

use crate::invocation::DocfxInvocation;
use crate::pidfile::{PidFile, Role};

/// How often a waited generation polls its child for completion.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Errors that can occur when running docfx.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    #[error("Failed to start {bin}: {message}")]
    SpawnError { bin: String, message: String },

    #[error("docfx exited with status {code}")]
    DocfxFailed { code: i32 },

    #[error("docfx was terminated by a signal")]
    DocfxKilled,

    #[error("Failed to wait for docfx: {0}")]
    WaitError(String),
}

/// Manages the tool's two child-process slots for one package.
///
/// Both roles conflict with each other: a generation run owns the output
/// directory a serve run is reading, so starting either role terminates
/// any recorded process of both roles first.
pub struct Launcher {
    docs_dir: PathBuf,
    generate: Option<Child>,
    serve: Option<Child>,
}

impl Launcher {
    /// Launcher for the package whose documentation folder is `docs_dir`.
    pub fn new(docs_dir: &Path) -> Self {
        Self {
            docs_dir: docs_dir.to_path_buf(),
            generate: None,
            serve: None,
        }
    }

    /// Run a generation. Resident invocations (`--serve`) are left
    /// running with their pid recorded; plain generations are awaited
    /// and a non-zero exit surfaces as an error.
    pub async fn run_generate(&mut self, invocation: &DocfxInvocation) -> Result<(), RunnerError> {
        self.terminate_all();

        tracing::info!("Running: {}", invocation.display());
        let mut child = spawn(invocation)?;

        if invocation.is_resident() {
            self.record(Role::Generate, &child);
            self.generate = Some(child);
            return Ok(());
        }

        let status = wait(&mut child).await?;
        if !status.success() {
            return match status.code() {
                Some(code) => Err(RunnerError::DocfxFailed { code }),
                None => Err(RunnerError::DocfxKilled),
            };
        }

        Ok(())
    }

    /// Start a serve run and leave it resident, pid recorded.
    pub fn run_serve(&mut self, invocation: &DocfxInvocation) -> Result<(), RunnerError> {
        self.terminate_all();

        tracing::info!("Running: {}", invocation.display());
        let child = spawn(invocation)?;
        self.record(Role::Serve, &child);
        self.serve = Some(child);

        Ok(())
    }

    /// Terminate any recorded process of both roles.
    pub fn stop(&mut self) {
        self.terminate_all();
    }

    /// Recorded pid for a role, if any.
    pub fn recorded_pid(&self, role: Role) -> Option<u32> {
        PidFile::new(&self.docs_dir, role).read()
    }

    fn record(&self, role: Role, child: &Child) {
        if let Some(pid) = child.id() {
            PidFile::new(&self.docs_dir, role).write(pid);
        }
    }

    fn terminate_all(&mut self) {
        // In-memory slots from this invocation, best effort.
        for slot in [&mut self.generate, &mut self.serve] {
            if let Some(child) = slot.take() {
                kill_child(child);
            }
        }

        // Pids recorded by earlier invocations.
        PidFile::new(&self.docs_dir, Role::Generate).terminate();
        PidFile::new(&self.docs_dir, Role::Serve).terminate();
    }
}

fn spawn(invocation: &DocfxInvocation) -> Result<Child, RunnerError> {
    Command::new(invocation.bin())
        .args(invocation.args())
        .current_dir(invocation.working_dir())
        .stdin(Stdio::null())
        .spawn()
        .map_err(|e| RunnerError::SpawnError {
            bin: invocation.bin().to_string(),
            message: e.to_string(),
        })
}

/// Non-blocking wait loop: poll the child and sleep between probes.
async fn wait(child: &mut Child) -> Result<std::process::ExitStatus, RunnerError> {
    loop {
        match child.try_wait() {
            Ok(Some(status)) => return Ok(status),
            Ok(None) => tokio::time::sleep(POLL_INTERVAL).await,
            Err(e) => return Err(RunnerError::WaitError(e.to_string())),
        }
    }
}

fn kill_child(mut child: Child) {
    match child.start_kill() {
        Ok(()) => tracing::info!("Terminated running docfx process"),
        // InvalidInput means the child already exited.
        Err(e) if e.kind() == std::io::ErrorKind::InvalidInput => {}
        Err(e) => tracing::warn!("Failed to terminate docfx process: {}", e),
    }
}
