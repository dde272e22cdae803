//! Discovery of locally developed packages in a Unity project.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::manifest::Package;

/// Errors that can occur during package discovery.
#[derive(Debug, thiserror::Error)]
pub enum DiscoverError {
    #[error("Failed to read {path}: {message}")]
    ReadError { path: String, message: String },

    #[error("Failed to parse {path}: {message}")]
    ParseError { path: String, message: String },
}

/// The subset of `Packages/manifest.json` this tool reads.
#[derive(Debug, Deserialize)]
struct ProjectManifest {
    #[serde(default)]
    dependencies: BTreeMap<String, String>,
}

/// Find locally developed packages in the Unity project at `project_root`.
///
/// Covers embedded packages (subdirectories of `Packages/` carrying a
/// `package.json`) and `file:` dependencies from `Packages/manifest.json`,
/// resolved relative to the `Packages/` folder. Results are deduplicated
/// by path and sorted by name. A project without a `Packages/` folder
/// yields an empty list.
pub fn discover(project_root: &Path) -> Result<Vec<Package>, DiscoverError> {
    let packages_dir = project_root.join("Packages");
    if !packages_dir.is_dir() {
        tracing::warn!("No Packages folder under {}", project_root.display());
        return Ok(Vec::new());
    }

    let mut found: BTreeMap<PathBuf, Package> = BTreeMap::new();

    // Embedded packages: immediate subdirectories with a package.json.
    for entry in fs::read_dir(&packages_dir)
        .map_err(|e| DiscoverError::ReadError {
            path: packages_dir.display().to_string(),
            message: e.to_string(),
        })?
        .filter_map(|e| e.ok())
    {
        let dir = entry.path();
        if !dir.is_dir() {
            continue;
        }
        if let Some(package) = Package::from_dir(&dir) {
            found.insert(canonical(&package.path), package);
        }
    }

    // Local packages referenced as file: dependencies in the manifest.
    let manifest_path = packages_dir.join("manifest.json");
    if manifest_path.exists() {
        let content = fs::read_to_string(&manifest_path).map_err(|e| DiscoverError::ReadError {
            path: manifest_path.display().to_string(),
            message: e.to_string(),
        })?;
        let manifest: ProjectManifest =
            serde_json::from_str(&content).map_err(|e| DiscoverError::ParseError {
                path: manifest_path.display().to_string(),
                message: e.to_string(),
            })?;

        for (name, source) in &manifest.dependencies {
            let Some(relative) = source.strip_prefix("file:") else {
                continue;
            };
            let dir = packages_dir.join(relative);
            if let Some(package) = Package::from_dir(&dir) {
                found.insert(canonical(&package.path), package);
            } else {
                tracing::warn!("Local dependency {} not found at {}", name, dir.display());
            }
        }
    }

    let mut packages: Vec<Package> = found.into_values().collect();
    packages.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(packages)
}

/// Resolve a package argument: a path to a package folder, or a package
/// name looked up through discovery.
pub fn resolve(project_root: &Path, package: &str) -> Result<Option<Package>, DiscoverError> {
    let as_path = Path::new(package);
    if as_path.is_dir() {
        if let Some(found) = Package::from_dir(as_path) {
            return Ok(Some(found));
        }
    }

    Ok(discover(project_root)?
        .into_iter()
        .find(|p| p.name == package))
}

fn canonical(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn write_package(dir: &Path, name: &str) {
        fs::create_dir_all(dir).unwrap();
        fs::write(
            dir.join("package.json"),
            format!(r#"{{"name":"{name}","version":"0.1.0"}}"#),
        )
        .unwrap();
    }

    #[test]
    fn finds_embedded_packages() {
        let temp = tempdir().unwrap();
        write_package(&temp.path().join("Packages/com.example.b"), "com.example.b");
        write_package(&temp.path().join("Packages/com.example.a"), "com.example.a");

        let packages = discover(temp.path()).unwrap();

        let names: Vec<&str> = packages.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["com.example.a", "com.example.b"]);
    }

    #[test]
    fn finds_file_dependencies_from_manifest() {
        let temp = tempdir().unwrap();
        write_package(&temp.path().join("Local/com.example.local"), "com.example.local");
        fs::create_dir_all(temp.path().join("Packages")).unwrap();
        fs::write(
            temp.path().join("Packages/manifest.json"),
            r#"{"dependencies":{
                "com.example.local":"file:../Local/com.example.local",
                "com.unity.ugui":"2.0.0"
            }}"#,
        )
        .unwrap();

        let packages = discover(temp.path()).unwrap();

        assert_eq!(packages.len(), 1);
        assert_eq!(packages[0].name, "com.example.local");
    }

    #[test]
    fn deduplicates_embedded_and_manifest_entries() {
        let temp = tempdir().unwrap();
        write_package(&temp.path().join("Packages/com.example.a"), "com.example.a");
        fs::write(
            temp.path().join("Packages/manifest.json"),
            r#"{"dependencies":{"com.example.a":"file:com.example.a"}}"#,
        )
        .unwrap();

        let packages = discover(temp.path()).unwrap();

        assert_eq!(packages.len(), 1);
    }

    #[test]
    fn missing_packages_folder_is_empty() {
        let temp = tempdir().unwrap();

        assert!(discover(temp.path()).unwrap().is_empty());
    }

    #[test]
    fn resolves_by_path_and_by_name() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join("Packages/com.example.a");
        write_package(&dir, "com.example.a");

        let by_path = resolve(temp.path(), dir.to_str().unwrap()).unwrap().unwrap();
        let by_name = resolve(temp.path(), "com.example.a").unwrap().unwrap();

        assert_eq!(by_path.name, by_name.name);
        assert!(resolve(temp.path(), "com.example.missing").unwrap().is_none());
    }
}
