//! Generated settings file contents

use std::path::Path;

/// Line appended to `settings.php` so the local overrides get picked up.
pub const LOCAL_SETTINGS_INCLUDE: &str =
    "file_exists(__DIR__ . '/settings.local.php') and include __DIR__ . '/settings.local.php';";

/// Build the body of `settings.local.php` for a project rooted at `project_root`.
///
/// The private files path and config sync directory are absolute, so the
/// file is only valid on the machine it was generated on.
pub fn local_settings(project_root: &Path) -> String {
    let root = project_root.display();
    let mut settings = String::from("<?php\n");
    settings.push_str("$settings[\"file_public_path\"] = \"sites/default/files\";\n");
    settings.push_str(&format!(
        "$settings[\"file_private_path\"] = \"{}/files/private\";\n",
        root
    ));
    settings.push_str(&format!(
        "$config_directories[CONFIG_SYNC_DIRECTORY] = \"{}/config/sync\";\n",
        root
    ));
    settings
}
