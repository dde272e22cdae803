//! Staging of compiled-project artifacts for docfx.
//!
//! docfx reads API metadata from the `.csproj` files Unity generates at
//! the project root, one per assembly definition. Those are copied into
//! `Documentation/Temp` so the docfx config can reference them with a
//! stable relative path.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use walkdir::WalkDir;

/// Name of the staging folder inside the documentation directory.
pub const STAGING_DIR_NAME: &str = "Temp";

/// Errors that can occur while staging artifacts.
#[derive(Debug, thiserror::Error)]
pub enum StageError {
    #[error("Failed to create staging directory {path}: {message}")]
    CreateError { path: String, message: String },

    #[error("Failed to copy {path}: {message}")]
    CopyError { path: String, message: String },
}

/// The subset of an `.asmdef` file this tool reads.
#[derive(Debug, Deserialize)]
struct AsmdefJson {
    name: String,
}

/// Collect the assembly names defined by a package, sorted.
pub fn assembly_names(package_path: &Path) -> Vec<String> {
    let mut names = Vec::new();

    for entry in WalkDir::new(package_path)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some("asmdef") {
            continue;
        }

        let Ok(content) = fs::read_to_string(path) else {
            tracing::warn!("Skipping unreadable asmdef {}", path.display());
            continue;
        };
        match serde_json::from_str::<AsmdefJson>(&content) {
            Ok(asmdef) => names.push(asmdef.name),
            Err(e) => tracing::warn!("Skipping malformed asmdef {}: {}", path.display(), e),
        }
    }

    names.sort();
    names
}

/// Map assembly names to the `.csproj` files Unity generated for them at
/// the project root, keeping only those that exist.
pub fn resolve_csproj(project_root: &Path, names: &[String]) -> Vec<PathBuf> {
    names
        .iter()
        .map(|name| project_root.join(format!("{name}.csproj")))
        .filter(|path| path.is_file())
        .collect()
}

/// Copy csproj files into `<docs_dir>/Temp`, overwriting prior copies.
/// Returns the number of files staged.
pub fn stage_artifacts(docs_dir: &Path, csproj_paths: &[PathBuf]) -> Result<usize, StageError> {
    let staging = docs_dir.join(STAGING_DIR_NAME);
    fs::create_dir_all(&staging).map_err(|e| StageError::CreateError {
        path: staging.display().to_string(),
        message: e.to_string(),
    })?;

    let mut staged = 0;
    for csproj in csproj_paths {
        let file_name = csproj
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        let target = staging.join(file_name);

        fs::copy(csproj, &target).map_err(|e| StageError::CopyError {
            path: csproj.display().to_string(),
            message: e.to_string(),
        })?;
        tracing::debug!("Staged {}", target.display());
        staged += 1;
    }

    Ok(staged)
}
