//! Directory layout step

use super::fs;
use crate::error::{IoContext, Result};
use crate::event::Event;
use crate::layout::MARKER_FILE;
use crate::product::ProductConfig;
use std::path::PathBuf;

/// Create every missing layout directory with a `.gitkeep` marker inside,
/// then open up the writable directories if the config allows it.
///
/// Directories that already exist are left alone. Returns the ones created.
pub fn ensure_layout<C: ProductConfig>(event: &Event<'_, C>) -> Result<Vec<PathBuf>> {
    let mut created = Vec::new();

    for dir in event.layout.required_directories() {
        if fs::entry_exists(&dir) {
            continue;
        }
        fs::create_dir_all(&dir, event.config.dir_mode)?;
        let marker = dir.join(MARKER_FILE);
        std::fs::write(&marker, b"").at("failed to write", &marker)?;
        event.io.write_info(&format!("Created {}", dir.display()));
        created.push(dir);
    }

    if event.config.relax_permissions {
        for dir in event.layout.writable_directories() {
            fs::set_mode(&dir, event.config.writable_mode)?;
        }
    }

    Ok(created)
}
