//! Filesystem primitives shared by the scaffolding steps

use crate::error::{IoContext, Result};
use std::path::Path;

/// True if anything, including a dangling symlink, occupies `path`.
pub(crate) fn entry_exists(path: &Path) -> bool {
    path.symlink_metadata().is_ok()
}

#[cfg(unix)]
pub(crate) fn set_mode(path: &Path, mode: u32) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(mode))
        .at("failed to set permissions on", path)
}

#[cfg(not(unix))]
pub(crate) fn set_mode(_path: &Path, _mode: u32) -> Result<()> {
    Ok(())
}

/// Create `path` with parents; on unix the new directories get `mode` (subject to umask).
pub(crate) fn create_dir_all(path: &Path, mode: u32) -> Result<()> {
    let mut builder = std::fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;
    builder.create(path).at("failed to create directory", path)
}

#[cfg(unix)]
pub(crate) fn symlink_dir(target: &Path, link: &Path) -> Result<()> {
    std::os::unix::fs::symlink(target, link).at("failed to create symlink", link)
}

#[cfg(windows)]
pub(crate) fn symlink_dir(target: &Path, link: &Path) -> Result<()> {
    std::os::windows::fs::symlink_dir(target, link).at("failed to create symlink", link)
}
