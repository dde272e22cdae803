//! Optional tool settings from `unidoc.toml`.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use serde::Deserialize;

/// Tool settings file structure (unidoc.toml).
#[derive(Debug, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub project: ProjectSettings,

    #[serde(default)]
    pub docfx: DocfxSettings,
}

#[derive(Debug, Deserialize)]
pub struct ProjectSettings {
    /// Unity project root.
    #[serde(default = "default_root")]
    pub root: String,
}

#[derive(Debug, Deserialize)]
pub struct DocfxSettings {
    /// docfx executable name or path.
    #[serde(default = "default_bin")]
    pub bin: String,
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            root: default_root(),
        }
    }
}

impl Default for DocfxSettings {
    fn default() -> Self {
        Self { bin: default_bin() }
    }
}

fn default_root() -> String {
    ".".to_string()
}

fn default_bin() -> String {
    "docfx".to_string()
}

/// Load settings from unidoc.toml if it exists.
/// Returns an error if the file exists but is malformed.
pub fn load() -> Result<Settings> {
    let path = PathBuf::from("unidoc.toml");
    if path.exists() {
        let content = fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("Failed to read unidoc.toml: {}", e))?;
        let settings: Settings = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse unidoc.toml: {}", e))?;
        tracing::debug!("Loaded settings from unidoc.toml");
        return Ok(settings);
    }
    Ok(Settings::default())
}
