//! Terminate recorded docfx processes.

use std::path::Path;

use anyhow::Result;
use unidoc_config::DOCS_DIR_NAME;
use unidoc_runner::Launcher;

/// Run the stop command.
pub async fn run(project_root: &Path, package: &str) -> Result<()> {
    let package = super::resolve_package(project_root, package)?;
    let docs_dir = package.path.join(DOCS_DIR_NAME);

    let mut launcher = Launcher::new(&docs_dir);
    launcher.stop();

    tracing::info!("Stopped docfx processes for {}", package.name);

    Ok(())
}
