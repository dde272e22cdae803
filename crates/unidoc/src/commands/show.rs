//! Print a package's docgen configuration.

use std::path::Path;

use anyhow::Result;

/// Run the show command.
pub async fn run(project_root: &Path, package: &str) -> Result<()> {
    let package = super::resolve_package(project_root, package)?;
    let config = super::load_config(&package)?;

    println!("package:     {}", package.name);
    println!("config:      {}", config.path().display());
    println!("output path: {}", config.docfx_output_path);
    println!("docfx config: {}", config.docfx_config_path);
    println!(
        "template:    {}",
        if config.docfx_template.is_empty() {
            "(default)"
        } else {
            &config.docfx_template
        }
    );

    if config.docfx_metadata.is_empty() {
        println!("metadata:    (none)");
    } else {
        println!("metadata:");
        for pair in &config.docfx_metadata {
            println!("    {} = {}", pair.key, pair.value);
        }
    }

    Ok(())
}
