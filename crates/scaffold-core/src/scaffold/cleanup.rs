//! Post-create-project cleanup step

use crate::error::{IoContext, Result};
use crate::event::Event;
use crate::product::ProductConfig;
use std::path::PathBuf;

/// Remove the template repository's own files (license, CI config, VCS
/// metadata) from a freshly created project. Missing entries are skipped.
pub fn cleanup<C: ProductConfig>(event: &Event<'_, C>) -> Result<Vec<PathBuf>> {
    let mut removed = Vec::new();

    for name in event.product.leftover_files() {
        let path = event.layout.root().join(name);
        let Ok(meta) = path.symlink_metadata() else {
            continue;
        };

        if meta.is_dir() {
            std::fs::remove_dir_all(&path).at("failed to remove", &path)?;
        } else {
            std::fs::remove_file(&path).at("failed to remove", &path)?;
        }
        event.io.write_info(&format!("Removed {}", path.display()));
        removed.push(path);
    }

    Ok(removed)
}
