//! Public files symlink step

use super::fs;
use crate::error::Result;
use crate::event::Event;
use crate::product::ProductConfig;

/// Link `<web>/sites/default/files` to the project's public files directory.
///
/// Whatever already sits at the link location is kept as is, even a
/// dangling symlink. Returns whether a link was created.
pub fn ensure_files_link<C: ProductConfig>(event: &Event<'_, C>) -> Result<bool> {
    let link = event.layout.files_link();
    if fs::entry_exists(&link) {
        return Ok(false);
    }

    fs::symlink_dir(&event.layout.public_files(), &link)?;
    event.io.write_info(&format!(
        "Linked {} -> {}",
        link.display(),
        event.layout.public_files().display()
    ));
    Ok(true)
}
