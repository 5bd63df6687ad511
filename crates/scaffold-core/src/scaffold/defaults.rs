//! Default settings materialization step

use super::fs;
use crate::error::{IoContext, Result};
use crate::event::Event;
use crate::product::ProductConfig;
use std::path::PathBuf;

/// Copy `default.settings.php` and `default.services.yml` into place.
///
/// A target that already exists is never touched; a missing template is
/// skipped. Returns the files that were created.
pub fn materialize_defaults<C: ProductConfig>(event: &Event<'_, C>) -> Result<Vec<PathBuf>> {
    let layout = &event.layout;
    let pairs = [
        (layout.default_settings_file(), layout.settings_file()),
        (layout.default_services_file(), layout.services_file()),
    ];

    let mut materialized = Vec::new();
    for (template, target) in pairs {
        if fs::entry_exists(&target) {
            continue;
        }
        if !template.is_file() {
            event
                .io
                .write_info(&format!("No template at {}, skipping", template.display()));
            continue;
        }

        std::fs::copy(&template, &target).at("failed to copy to", &target)?;
        if event.config.relax_permissions {
            fs::set_mode(&target, event.config.writable_mode)?;
        }
        event.io.write_info(&format!("Created {}", target.display()));
        materialized.push(target);
    }

    Ok(materialized)
}
