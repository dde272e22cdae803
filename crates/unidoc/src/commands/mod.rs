//! CLI command implementations.

use std::path::Path;

use anyhow::{Context, Result};
use unidoc_config::DocgenConfig;
use unidoc_packages::Package;

pub mod generate;
pub mod init;
pub mod list;
pub mod meta;
pub mod serve;
pub mod set;
pub mod show;
pub mod stop;

/// Resolve a package argument (path or name) against the project.
pub(crate) fn resolve_package(project_root: &Path, package: &str) -> Result<Package> {
    unidoc_packages::resolve(project_root, package)
        .context("Failed to discover packages")?
        .with_context(|| format!("Package not found: {}", package))
}

/// Load the docgen configuration of a package, with a hint when missing.
pub(crate) fn load_config(package: &Package) -> Result<DocgenConfig> {
    let path = DocgenConfig::path_for_package(&package.path);
    if !path.exists() {
        anyhow::bail!(
            "{} has no docgen configuration. Run 'unidoc init {}' first.",
            package.name,
            package.name
        );
    }
    DocgenConfig::load(&path).context("Failed to load docgen configuration")
}
