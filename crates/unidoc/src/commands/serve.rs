//! Serve a previously generated site.

use std::path::Path;

use anyhow::Result;
use unidoc_runner::{DocfxInvocation, Launcher};

/// Run the serve command.
pub async fn run(project_root: &Path, docfx_bin: &str, package: &str, open: bool) -> Result<()> {
    let package = super::resolve_package(project_root, package)?;
    let config = super::load_config(&package)?;

    let output_dir = config.output_dir();
    if !output_dir.exists() {
        anyhow::bail!(
            "Output not found: {}. Run 'unidoc generate {}' first.",
            output_dir.display(),
            package.name
        );
    }

    let invocation = DocfxInvocation::serve(config.docs_dir(), &output_dir, open).with_bin(docfx_bin);

    let mut launcher = Launcher::new(config.docs_dir());
    launcher.run_serve(&invocation)?;

    tracing::info!(
        "docfx is serving {}. Run 'unidoc stop {}' to stop it.",
        output_dir.display(),
        package.name
    );

    Ok(())
}
