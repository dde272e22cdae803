//! Local-package discovery and compiled-artifact staging.
//!
//! Unity materializes locally developed packages in two places this crate
//! reads directly from disk: embedded packages living under `Packages/`,
//! and `file:` entries in `Packages/manifest.json`. It also locates the
//! `.csproj` files Unity generates for a package's assembly definitions
//! and copies them into the documentation staging folder that docfx
//! reads from.

pub mod artifacts;
pub mod discover;
pub mod manifest;

pub use artifacts::{assembly_names, resolve_csproj, stage_artifacts, StageError, STAGING_DIR_NAME};
pub use discover::{discover, resolve, DiscoverError};
pub use manifest::Package;
