//! Role pidfiles for cross-invocation process replacement.

use std::fs;
use std::path::{Path, PathBuf};

/// The two process roles the tool manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Generate,
    Serve,
}

impl Role {
    /// File name the role's pid is recorded under.
    pub fn file_name(self) -> &'static str {
        match self {
            Role::Generate => "docfx-generate.pid",
            Role::Serve => "docfx-serve.pid",
        }
    }
}

/// A pid recorded for one role under the documentation staging folder.
#[derive(Debug)]
pub struct PidFile {
    path: PathBuf,
}

impl PidFile {
    /// Pidfile for `role` under `<docs_dir>/Temp`.
    pub fn new(docs_dir: &Path, role: Role) -> Self {
        Self {
            path: docs_dir.join("Temp").join(role.file_name()),
        }
    }

    /// Location of the pidfile.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the recorded pid, if the file exists and parses.
    pub fn read(&self) -> Option<u32> {
        let content = fs::read_to_string(&self.path).ok()?;
        content.trim().parse().ok()
    }

    /// Record a pid, creating the staging folder if needed.
    pub fn write(&self, pid: u32) {
        if let Some(parent) = self.path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        if let Err(e) = fs::write(&self.path, pid.to_string()) {
            tracing::warn!("Failed to record pid in {}: {}", self.path.display(), e);
        }
    }

    /// Remove the pidfile. Missing files are fine.
    pub fn remove(&self) {
        let _ = fs::remove_file(&self.path);
    }

    /// Terminate the recorded process, best effort, and remove the file.
    ///
    /// A stale pid (process no longer running) is cleaned up silently.
    /// Failure to terminate is logged but never retried.
    pub fn terminate(&self) {
        let Some(pid) = self.read() else {
            self.remove();
            return;
        };

        terminate_pid(pid);
        self.remove();
    }
}

#[cfg(unix)]
fn terminate_pid(pid: u32) {
    use nix::sys::signal::{self, Signal};
    use nix::unistd::Pid;

    let pid = Pid::from_raw(pid as i32);

    // Probe with signal 0 first so stale pidfiles stay silent.
    if signal::kill(pid, None).is_err() {
        return;
    }

    match signal::kill(pid, Signal::SIGTERM) {
        Ok(()) => tracing::info!("Terminated prior docfx process {}", pid),
        Err(e) => tracing::warn!("Failed to terminate process {}: {}", pid, e),
    }
}

#[cfg(windows)]
fn terminate_pid(pid: u32) {
    let result = std::process::Command::new("taskkill")
        .args(["/PID", &pid.to_string(), "/T", "/F"])
        .output();

    match result {
        Ok(output) if output.status.success() => {
            tracing::info!("Terminated prior docfx process {}", pid);
        }
        Ok(_) => {}
        Err(e) => tracing::warn!("Failed to terminate process {}: {}", pid, e),
    }
}
