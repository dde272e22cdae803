//! The docgen configuration record and its write-through persistence.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Name of the per-package configuration file.
pub const CONFIG_FILE_NAME: &str = "DocgenConfig.json";

/// Name of the documentation folder inside a package.
pub const DOCS_DIR_NAME: &str = "Documentation";

/// Errors that can occur while loading or saving a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {message}")]
    ReadError { path: String, message: String },

    #[error("Failed to parse {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Failed to write {path}: {message}")]
    WriteError { path: String, message: String },
}

/// A single key/value metadata entry passed to docfx via `-m`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataPair {
    #[serde(rename = "Key", default)]
    pub key: String,

    #[serde(rename = "Value", default)]
    pub value: String,
}

/// The per-package docgen configuration.
///
/// Field names in the JSON document are fixed external interface:
/// `DocfxOutputPath`, `DocfxConfigPath`, `DocfxTemplate`, `DocfxMetadata`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocgenConfig {
    /// Site output directory, relative to the documentation folder.
    #[serde(rename = "DocfxOutputPath", default)]
    pub docfx_output_path: String,

    /// docfx config file, relative to the documentation folder.
    #[serde(rename = "DocfxConfigPath", default)]
    pub docfx_config_path: String,

    /// Optional docfx template name or path.
    #[serde(rename = "DocfxTemplate", default)]
    pub docfx_template: String,

    /// Ordered metadata pairs, preserved as edited.
    #[serde(rename = "DocfxMetadata", default)]
    pub docfx_metadata: Vec<MetadataPair>,

    /// Where this configuration lives on disk. Not serialized.
    #[serde(skip)]
    path: PathBuf,
}

impl DocgenConfig {
    /// Path of the configuration file for a package.
    pub fn path_for_package(package_path: &Path) -> PathBuf {
        package_path.join(DOCS_DIR_NAME).join(CONFIG_FILE_NAME)
    }

    /// Whether a package already carries a configuration.
    pub fn exists_for_package(package_path: &Path) -> bool {
        Self::path_for_package(package_path).exists()
    }

    /// Load a configuration from disk.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let mut config: DocgenConfig =
            serde_json::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        config.path = path.to_path_buf();

        Ok(config)
    }

    /// Create a fresh configuration that will be saved at `path`.
    pub fn create(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
            ..Default::default()
        }
    }

    /// The on-disk location of this configuration.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The documentation folder this configuration lives in.
    pub fn docs_dir(&self) -> &Path {
        self.path.parent().unwrap_or(Path::new(""))
    }

    /// Absolute path of the docfx config file.
    pub fn docfx_config_file(&self) -> PathBuf {
        self.docs_dir().join(&self.docfx_config_path)
    }

    /// Absolute path of the site output directory.
    pub fn output_dir(&self) -> PathBuf {
        self.docs_dir().join(&self.docfx_output_path)
    }

    /// Set or replace a metadata entry. Duplicate keys keep their first
    /// position but take the new value.
    pub fn set_metadata(&mut self, key: &str, value: &str) {
        if let Some(pair) = self.docfx_metadata.iter_mut().find(|p| p.key == key) {
            pair.value = value.to_string();
        } else {
            self.docfx_metadata.push(MetadataPair {
                key: key.to_string(),
                value: value.to_string(),
            });
        }
    }

    /// Remove all metadata entries with the given key. Returns how many
    /// were removed.
    pub fn remove_metadata(&mut self, key: &str) -> usize {
        let before = self.docfx_metadata.len();
        self.docfx_metadata.retain(|p| p.key != key);
        before - self.docfx_metadata.len()
    }

    /// Persist the full configuration, then the derived metadata file.
    ///
    /// Write-through: callers invoke this after every edit, there is no
    /// batching. The derived file is a flat JSON object mapping each key
    /// to its value, written beside the docfx config file; on duplicate
    /// keys the last entry wins.
    pub fn save(&self) -> Result<(), ConfigError> {
        let json =
            serde_json::to_string_pretty(self).map_err(|e| ConfigError::WriteError {
                path: self.path.display().to_string(),
                message: e.to_string(),
            })?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: parent.display().to_string(),
                message: e.to_string(),
            })?;
        }

        fs::write(&self.path, json).map_err(|e| ConfigError::WriteError {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })?;

        self.write_derived_metadata()
    }

    /// Where the derived metadata file goes: beside the docfx config.
    pub fn metadata_file(&self) -> PathBuf {
        let config_dir = Path::new(&self.docfx_config_path)
            .parent()
            .unwrap_or(Path::new(""));
        self.docs_dir().join(config_dir).join("metadata.json")
    }

    fn write_derived_metadata(&self) -> Result<(), ConfigError> {
        let mut map = serde_json::Map::new();
        for pair in &self.docfx_metadata {
            // Last write wins on duplicate keys.
            map.insert(pair.key.clone(), pair.value.clone().into());
        }

        let target = self.metadata_file();
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: parent.display().to_string(),
                message: e.to_string(),
            })?;
        }

        let json = serde_json::to_string(&serde_json::Value::Object(map)).map_err(|e| {
            ConfigError::WriteError {
                path: target.display().to_string(),
                message: e.to_string(),
            }
        })?;

        fs::write(&target, json).map_err(|e| ConfigError::WriteError {
            path: target.display().to_string(),
            message: e.to_string(),
        })
    }
}
