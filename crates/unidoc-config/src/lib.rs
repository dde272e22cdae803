//! Per-package docfx configuration for unidoc.
//!
//! A package carries exactly one configuration file at
//! `Documentation/DocgenConfig.json`. Every edit is persisted
//! write-through, together with the derived `metadata.json` consumed by
//! docfx.

pub mod config;
pub mod docfx_json;
pub mod scaffold;

pub use config::{ConfigError, DocgenConfig, MetadataPair, CONFIG_FILE_NAME, DOCS_DIR_NAME};
pub use docfx_json::set_docfx_sources;
pub use scaffold::{stage_starter_docs, write_starter_docfx_config};
