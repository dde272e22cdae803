//! Edit configuration fields.

use std::path::Path;

use anyhow::Result;

/// Run the set command. Every change is saved immediately.
pub async fn run(
    project_root: &Path,
    package: &str,
    output: Option<String>,
    config_file: Option<String>,
    template: Option<String>,
) -> Result<()> {
    if output.is_none() && config_file.is_none() && template.is_none() {
        tracing::warn!("Nothing to set. Pass --output, --config-file, or --template.");
        return Ok(());
    }

    let package = super::resolve_package(project_root, package)?;
    let mut config = super::load_config(&package)?;

    if let Some(output) = output {
        config.docfx_output_path = output;
    }
    if let Some(config_file) = config_file {
        config.docfx_config_path = config_file;
    }
    if let Some(template) = template {
        config.docfx_template = template;
    }

    config.save()?;
    tracing::info!("Saved {}", config.path().display());

    Ok(())
}
