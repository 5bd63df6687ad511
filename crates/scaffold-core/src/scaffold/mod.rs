//! Project scaffolding steps
//!
//! Each step checks the filesystem before writing, so every hook can be
//! re-run safely. Nothing is rolled back if a later step fails.

pub mod cleanup;
pub mod defaults;
pub mod dirs;
mod fs;
pub mod link;
pub mod local_settings;

use crate::error::Result;
use crate::event::Event;
use crate::product::ProductConfig;
use std::path::PathBuf;

pub use cleanup::cleanup;
pub use defaults::materialize_defaults;
pub use dirs::ensure_layout;
pub use link::ensure_files_link;
pub use local_settings::provision_local_settings;

/// What a `create_required_files` run changed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub created_dirs: Vec<PathBuf>,
    pub linked_files: bool,
    pub materialized: Vec<PathBuf>,
    pub local_settings: bool,
}

impl ScaffoldReport {
    pub fn is_noop(&self) -> bool {
        self.created_dirs.is_empty()
            && !self.linked_files
            && self.materialized.is_empty()
            && !self.local_settings
    }
}

/// Run every install/update step in order: layout, files link, default
/// settings, local settings.
pub fn create_required_files<C: ProductConfig>(event: &Event<'_, C>) -> Result<ScaffoldReport> {
    let created_dirs = ensure_layout(event)?;
    let linked_files = ensure_files_link(event)?;
    let materialized = materialize_defaults(event)?;
    let local_settings = provision_local_settings(event)?;

    Ok(ScaffoldReport {
        created_dirs,
        linked_files,
        materialized,
        local_settings,
    })
}
