//! Edit docfx metadata pairs.

use std::path::Path;

use anyhow::Result;

use crate::MetaAction;

/// Run the meta command. Edits are saved immediately.
pub async fn run(project_root: &Path, package: &str, action: MetaAction) -> Result<()> {
    let package = super::resolve_package(project_root, package)?;
    let mut config = super::load_config(&package)?;

    match action {
        MetaAction::Set { key, value } => {
            config.set_metadata(&key, &value);
            config.save()?;
            tracing::info!("Set {} = {}", key, value);
        }
        MetaAction::Remove { key } => {
            let removed = config.remove_metadata(&key);
            if removed == 0 {
                tracing::warn!("No metadata entry named {}", key);
                return Ok(());
            }
            config.save()?;
            tracing::info!("Removed {}", key);
        }
        MetaAction::List => {
            if config.docfx_metadata.is_empty() {
                tracing::info!("No metadata configured for {}", package.name);
            }
            for pair in &config.docfx_metadata {
                println!("{} = {}", pair.key, pair.value);
            }
        }
    }

    Ok(())
}
