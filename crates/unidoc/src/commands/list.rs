//! List locally developed packages.

use std::path::Path;

use anyhow::{Context, Result};
use unidoc_config::DocgenConfig;

/// Run the list command.
pub async fn run(project_root: &Path) -> Result<()> {
    let packages =
        unidoc_packages::discover(project_root).context("Failed to discover packages")?;

    if packages.is_empty() {
        tracing::info!("No locally developed packages found");
        return Ok(());
    }

    for package in packages {
        let status = if DocgenConfig::exists_for_package(&package.path) {
            "configured"
        } else {
            "not configured"
        };

        println!(
            "{} {} [{}]\n    {}",
            package.name,
            package.version,
            status,
            package.path.display()
        );
    }

    Ok(())
}
