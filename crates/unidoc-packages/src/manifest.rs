//! Unity package manifest parsing.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// A locally developed Unity package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    /// Package name, e.g. `com.example.mytools`.
    pub name: String,

    /// Human-readable name, if the manifest carries one.
    pub display_name: Option<String>,

    /// Package version.
    pub version: String,

    /// Resolved package folder.
    pub path: PathBuf,
}

/// The subset of a `package.json` manifest this tool reads.
#[derive(Debug, Deserialize)]
struct PackageManifest {
    name: String,

    #[serde(default)]
    version: String,

    #[serde(rename = "displayName", default)]
    display_name: Option<String>,
}

impl Package {
    /// Read the `package.json` inside `dir`, if present and well formed.
    pub fn from_dir(dir: &Path) -> Option<Package> {
        let manifest_path = dir.join("package.json");
        let content = fs::read_to_string(&manifest_path).ok()?;

        match serde_json::from_str::<PackageManifest>(&content) {
            Ok(manifest) => Some(Package {
                name: manifest.name,
                display_name: manifest.display_name,
                version: manifest.version,
                path: dir.to_path_buf(),
            }),
            Err(e) => {
                tracing::warn!("Skipping malformed manifest {}: {}", manifest_path.display(), e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn parses_package_manifest() {
        let temp = tempdir().unwrap();
        fs::write(
            temp.path().join("package.json"),
            r#"{"name":"com.example.tools","version":"1.2.0","displayName":"Example Tools"}"#,
        )
        .unwrap();

        let package = Package::from_dir(temp.path()).unwrap();

        assert_eq!(package.name, "com.example.tools");
        assert_eq!(package.version, "1.2.0");
        assert_eq!(package.display_name.as_deref(), Some("Example Tools"));
        assert_eq!(package.path, temp.path());
    }

    #[test]
    fn missing_manifest_is_none() {
        let temp = tempdir().unwrap();

        assert!(Package::from_dir(temp.path()).is_none());
    }

    #[test]
    fn malformed_manifest_is_skipped() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("package.json"), "{ nope").unwrap();

        assert!(Package::from_dir(temp.path()).is_none());
    }
}
