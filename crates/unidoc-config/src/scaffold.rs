//! Starter documentation scaffolding.
//!
//! Creating a configuration can optionally stage a fixed set of starter
//! files and folders inside the package's `Documentation/` directory.
//! Existing files are never overwritten.

use std::fs;
use std::path::Path;

use crate::config::ConfigError;

/// Stage the starter documentation file set under `docs_dir`.
///
/// Returns the relative paths of files that were actually written.
pub fn stage_starter_docs(docs_dir: &Path) -> Result<Vec<&'static str>, ConfigError> {
    let files: [(&str, &str); 4] = [
        ("toc.yml", STARTER_TOC),
        ("index.md", STARTER_INDEX),
        ("Manual/toc.yml", STARTER_MANUAL_TOC),
        ("Manual/index.md", STARTER_MANUAL_INDEX),
    ];

    fs::create_dir_all(docs_dir.join("Media")).map_err(|e| ConfigError::WriteError {
        path: docs_dir.join("Media").display().to_string(),
        message: e.to_string(),
    })?;

    let mut written = Vec::new();
    for (relative, content) in files {
        let target = docs_dir.join(relative);
        if target.exists() {
            continue;
        }
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: parent.display().to_string(),
                message: e.to_string(),
            })?;
        }
        fs::write(&target, content).map_err(|e| ConfigError::WriteError {
            path: target.display().to_string(),
            message: e.to_string(),
        })?;
        tracing::info!("Created {}", target.display());
        written.push(relative);
    }

    Ok(written)
}

/// Write a starter docfx config at `path` unless one already exists.
///
/// The metadata section reads staged `.csproj` files from `Temp/` and
/// emits API docs under `Api/`; the build section wires up the starter
/// toc, manual, and media layout.
pub fn write_starter_docfx_config(path: &Path) -> Result<bool, ConfigError> {
    if path.exists() {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
            path: parent.display().to_string(),
            message: e.to_string(),
        })?;
    }

    fs::write(path, STARTER_DOCFX_CONFIG).map_err(|e| ConfigError::WriteError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    tracing::info!("Created {}", path.display());

    Ok(true)
}

const STARTER_TOC: &str = r#"- name: Manual
  href: Manual/
- name: API Reference
  href: Api/
"#;

const STARTER_INDEX: &str = r#"# Package Documentation

Welcome to the documentation for this package.

- [Manual](Manual/index.md)
- [API Reference](Api/index.md)
"#;

const STARTER_MANUAL_TOC: &str = r#"- name: Overview
  href: index.md
"#;

const STARTER_MANUAL_INDEX: &str = r#"# Manual

Describe how to install and use the package here.
"#;

const STARTER_DOCFX_CONFIG: &str = r#"{
    "metadata": [
       {
           "src": [
               {
                   "src" : "Temp",
                   "files": [
                       "**.csproj"
                   ]
               }
           ],
           "dest": "Api"
       }
    ],
    "build": {
       "content": [
         {
           "files": [
             "toc.yml",
             "index.md"
           ]
         },
         {
           "files": [
             "Api/toc.yml",
             "Api/**/*.yml",
             "Api/**/*.md"
           ]
         },
         {
           "files": [
             "Manual/**/*.md",
             "Manual/**/*.yml"
           ]
         }
       ],
       "resource": [
           {
               "files": [
                   "Media/**"
               ]
           }
       ],
       "overwrite": "",
       "dest": "",
       "globalMetadataFiles": [],
       "template": [
         "default",
         "modern"
       ],
      "postProcessors": [],
      "keepFileLink": false,
      "disableGitFeatures": false
    }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn stages_expected_file_set() {
        let temp = tempdir().unwrap();
        let docs = temp.path().join("Documentation");

        let written = stage_starter_docs(&docs).unwrap();

        assert_eq!(
            written,
            vec!["toc.yml", "index.md", "Manual/toc.yml", "Manual/index.md"]
        );
        assert!(docs.join("toc.yml").exists());
        assert!(docs.join("index.md").exists());
        assert!(docs.join("Manual/toc.yml").exists());
        assert!(docs.join("Manual/index.md").exists());
        assert!(docs.join("Media").is_dir());
    }

    #[test]
    fn never_overwrites_existing_files() {
        let temp = tempdir().unwrap();
        let docs = temp.path().join("Documentation");
        fs::create_dir_all(&docs).unwrap();
        fs::write(docs.join("index.md"), "# Mine").unwrap();

        let written = stage_starter_docs(&docs).unwrap();

        assert!(!written.contains(&"index.md"));
        assert_eq!(fs::read_to_string(docs.join("index.md")).unwrap(), "# Mine");
    }

    #[test]
    fn starter_docfx_config_is_valid_json_with_temp_sources() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("docfx.json");

        assert!(write_starter_docfx_config(&path).unwrap());

        let doc: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(doc["metadata"][0]["src"][0]["src"], "Temp");
        assert_eq!(doc["metadata"][0]["dest"], "Api");
        assert_eq!(doc["build"]["template"][1], "modern");
    }

    #[test]
    fn starter_docfx_config_skips_existing() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("docfx.json");
        fs::write(&path, "{}").unwrap();

        assert!(!write_starter_docfx_config(&path).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }
}
