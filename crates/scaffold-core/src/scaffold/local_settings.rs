//! Local settings provisioning step

use super::fs;
use crate::config::generator::{local_settings, LOCAL_SETTINGS_INCLUDE};
use crate::error::{IoContext, Result};
use crate::event::Event;
use crate::product::ProductConfig;
use std::io::Write;

/// Write `settings.local.php` if it is missing and append its include line
/// to `settings.php`.
///
/// The include line is only appended when the local file was just created
/// and the line is not already there. Returns whether the file was created.
pub fn provision_local_settings<C: ProductConfig>(event: &Event<'_, C>) -> Result<bool> {
    let local = event.layout.local_settings_file();
    if fs::entry_exists(&local) {
        return Ok(false);
    }

    let content = local_settings(event.layout.root());
    std::fs::write(&local, content).at("failed to write", &local)?;
    if event.config.relax_permissions {
        fs::set_mode(&local, event.config.writable_mode)?;
    }
    event.io.write_info(&format!("Created {}", local.display()));

    include_local_settings(event)?;
    Ok(true)
}

fn include_local_settings<C: ProductConfig>(event: &Event<'_, C>) -> Result<()> {
    let settings = event.layout.settings_file();
    if !settings.is_file() {
        event.io.write_warning(&format!(
            "{} does not exist, settings.local.php will not be included",
            settings.display()
        ));
        return Ok(());
    }

    let existing = std::fs::read_to_string(&settings).at("failed to read", &settings)?;
    if existing.lines().any(|line| line.trim() == LOCAL_SETTINGS_INCLUDE) {
        return Ok(());
    }

    let mut file = std::fs::OpenOptions::new()
        .append(true)
        .open(&settings)
        .at("failed to open", &settings)?;
    // Start on a fresh line when the template lacks a trailing newline
    let separator = if existing.is_empty() || existing.ends_with('\n') {
        ""
    } else {
        "\n"
    };
    writeln!(file, "{}{}", separator, LOCAL_SETTINGS_INCLUDE).at("failed to append to", &settings)
}
