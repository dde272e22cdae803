//! Rewriting the `metadata[0].src` block of an external docfx config.
//!
//! The docfx config document is owned by the user and otherwise opaque;
//! the only edit this tool makes is pointing the first metadata entry at
//! the staging directory that artifacts were copied into.

use std::fs;
use std::path::Path;

use serde_json::{json, Value};

use crate::config::ConfigError;

/// Replace `metadata[0]` of the docfx config at `config_path` so that it
/// reads sources from `src_dir` matching `files`, with dest `Api`.
/// Creates the `metadata` array if the document has none.
pub fn set_docfx_sources(
    config_path: &Path,
    src_dir: &str,
    files: &[&str],
) -> Result<(), ConfigError> {
    let content = fs::read_to_string(config_path).map_err(|e| ConfigError::ReadError {
        path: config_path.display().to_string(),
        message: e.to_string(),
    })?;

    let mut doc: Value = serde_json::from_str(&content).map_err(|e| ConfigError::ParseError {
        path: config_path.display().to_string(),
        message: e.to_string(),
    })?;

    let entry = json!({
        "src": [{ "src": src_dir, "files": files }],
        "dest": "Api",
    });

    match doc.get_mut("metadata").and_then(Value::as_array_mut) {
        Some(metadata) => {
            if metadata.is_empty() {
                metadata.push(entry);
            } else {
                metadata[0] = entry;
            }
        }
        None => {
            doc.as_object_mut()
                .ok_or_else(|| ConfigError::ParseError {
                    path: config_path.display().to_string(),
                    message: "docfx config root is not an object".to_string(),
                })?
                .insert("metadata".to_string(), json!([entry]));
        }
    }

    let pretty = serde_json::to_string_pretty(&doc).map_err(|e| ConfigError::WriteError {
        path: config_path.display().to_string(),
        message: e.to_string(),
    })?;

    fs::write(config_path, pretty).map_err(|e| ConfigError::WriteError {
        path: config_path.display().to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn read_doc(path: &Path) -> Value {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn replaces_first_metadata_entry() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("docfx.json");
        fs::write(
            &path,
            r#"{"metadata":[{"src":[{"src":"old","files":["*.cs"]}],"dest":"Old"}],"build":{"dest":"_site"}}"#,
        )
        .unwrap();

        set_docfx_sources(&path, "Temp", &["*.csproj"]).unwrap();

        let doc = read_doc(&path);
        assert_eq!(doc["metadata"][0]["src"][0]["src"], "Temp");
        assert_eq!(doc["metadata"][0]["src"][0]["files"][0], "*.csproj");
        assert_eq!(doc["metadata"][0]["dest"], "Api");
        // The rest of the document is untouched.
        assert_eq!(doc["build"]["dest"], "_site");
    }

    #[test]
    fn creates_metadata_array_when_missing() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("docfx.json");
        fs::write(&path, r#"{"build":{}}"#).unwrap();

        set_docfx_sources(&path, "Temp", &["*.csproj"]).unwrap();

        let doc = read_doc(&path);
        assert_eq!(doc["metadata"].as_array().unwrap().len(), 1);
        assert_eq!(doc["metadata"][0]["src"][0]["src"], "Temp");
    }

    #[test]
    fn appends_to_empty_metadata_array() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("docfx.json");
        fs::write(&path, r#"{"metadata":[]}"#).unwrap();

        set_docfx_sources(&path, "Temp", &["*.csproj"]).unwrap();

        let doc = read_doc(&path);
        assert_eq!(doc["metadata"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn rejects_non_object_root() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("docfx.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        let result = set_docfx_sources(&path, "Temp", &["*.csproj"]);

        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }
}
