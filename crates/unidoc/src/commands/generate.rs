//! Stage artifacts and run docfx generation.

use std::path::Path;

use anyhow::{Context, Result};
use unidoc_config::set_docfx_sources;
use unidoc_packages::STAGING_DIR_NAME;
use unidoc_runner::{DocfxInvocation, Launcher};

/// Run the generate command.
pub async fn run(
    project_root: &Path,
    docfx_bin: &str,
    package: &str,
    serve: bool,
    open: bool,
) -> Result<()> {
    let package = super::resolve_package(project_root, package)?;
    let config = super::load_config(&package)?;
    let docs_dir = config.docs_dir().to_path_buf();

    // Stage the csproj files Unity generated for this package's
    // assemblies so docfx can read API metadata from them.
    let names = unidoc_packages::assembly_names(&package.path);
    let csproj = unidoc_packages::resolve_csproj(project_root, &names);
    if csproj.is_empty() {
        tracing::warn!(
            "No generated .csproj files found for {} ({} assemblies). \
             Open the project in Unity to generate them.",
            package.name,
            names.len()
        );
    }
    let staged = unidoc_packages::stage_artifacts(&docs_dir, &csproj)?;
    tracing::info!("Staged {} artifact(s) into {}", staged, STAGING_DIR_NAME);

    let docfx_config = config.docfx_config_file();
    if !docfx_config.exists() {
        anyhow::bail!("docfx config not found: {}", docfx_config.display());
    }

    // Point the docfx metadata sources at the staging folder.
    set_docfx_sources(&docfx_config, STAGING_DIR_NAME, &["*.csproj"])
        .context("Failed to update docfx config sources")?;

    let metadata: Vec<(String, String)> = config
        .docfx_metadata
        .iter()
        .map(|p| (p.key.clone(), p.value.clone()))
        .collect();

    let invocation = DocfxInvocation::generate(
        &docs_dir,
        &docfx_config,
        &config.output_dir(),
        &config.docfx_template,
        &metadata,
        serve,
        open,
    )
    .with_bin(docfx_bin);

    let mut launcher = Launcher::new(&docs_dir);
    launcher.run_generate(&invocation).await?;

    if serve {
        tracing::info!(
            "docfx is serving the generated site. Run 'unidoc stop {}' to stop it.",
            package.name
        );
    } else {
        tracing::info!("Generated docs in {}", config.output_dir().display());
    }

    Ok(())
}
