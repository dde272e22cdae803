//! Create a docgen configuration for a package.

use std::path::Path;

use anyhow::Result;
use unidoc_config::{scaffold, DocgenConfig};

/// Run the init command.
pub async fn run(
    project_root: &Path,
    package: &str,
    output: &str,
    config_file: &str,
    template: bool,
) -> Result<()> {
    let package = super::resolve_package(project_root, package)?;

    if DocgenConfig::exists_for_package(&package.path) {
        tracing::warn!(
            "{} is already configured ({})",
            package.name,
            DocgenConfig::path_for_package(&package.path).display()
        );
        return Ok(());
    }

    let config_path = DocgenConfig::path_for_package(&package.path);
    let docs_dir = config_path.parent().expect("config path has a parent");

    if template {
        scaffold::stage_starter_docs(docs_dir)?;
    }

    let mut config = DocgenConfig::create(&config_path);
    config.docfx_output_path = output.to_string();
    config.docfx_config_path = config_file.to_string();
    config.save()?;
    tracing::info!("Created {}", config_path.display());

    // A docfx config is always needed; write the starter one if the
    // package does not bring its own.
    scaffold::write_starter_docfx_config(&config.docfx_config_file())?;

    tracing::info!(
        "Run 'unidoc generate {}' to build the documentation.",
        package.name
    );

    Ok(())
}
