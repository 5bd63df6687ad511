//! Derived paths of a scaffolded project

use std::path::{Path, PathBuf};

/// Empty file dropped into new directories so git tracks them.
pub const MARKER_FILE: &str = ".gitkeep";

/// Paths of a project rooted at `root` with its web root at `root/<web_root>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: PathBuf,
    web_root: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>, web_root: impl AsRef<Path>) -> Self {
        let root = root.into();
        let web_root = root.join(web_root);
        Self { root, web_root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn web_root(&self) -> &Path {
        &self.web_root
    }

    pub fn sites_default(&self) -> PathBuf {
        self.web_root.join("sites").join("default")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.sites_default().join("settings.php")
    }

    pub fn default_settings_file(&self) -> PathBuf {
        self.sites_default().join("default.settings.php")
    }

    pub fn services_file(&self) -> PathBuf {
        self.sites_default().join("services.yml")
    }

    pub fn default_services_file(&self) -> PathBuf {
        self.sites_default().join("default.services.yml")
    }

    pub fn local_settings_file(&self) -> PathBuf {
        self.sites_default().join("settings.local.php")
    }

    /// Symlink location inside the web root that exposes the public files.
    pub fn files_link(&self) -> PathBuf {
        self.sites_default().join("files")
    }

    pub fn public_files(&self) -> PathBuf {
        self.root.join("files").join("public")
    }

    pub fn private_files(&self) -> PathBuf {
        self.root.join("files").join("private")
    }

    pub fn config_sync(&self) -> PathBuf {
        self.root.join("config").join("sync")
    }

    /// Directories the web server or site install must be able to write to.
    pub fn writable_directories(&self) -> [PathBuf; 3] {
        [self.private_files(), self.public_files(), self.config_sync()]
    }

    /// Every directory the layout step guarantees, in creation order.
    pub fn required_directories(&self) -> Vec<PathBuf> {
        let web = &self.web_root;
        let mut dirs = Vec::with_capacity(14);

        for kind in ["libraries", "modules", "profiles"] {
            dirs.push(web.join(kind).join("contrib"));
            dirs.push(web.join(kind).join("custom"));
        }
        dirs.push(self.sites_default());
        dirs.push(web.join("themes").join("contrib"));
        dirs.push(web.join("themes").join("custom"));

        dirs.push(self.root.join("drush").join("contrib"));
        dirs.push(self.root.join("drush").join("custom"));
        dirs.push(self.private_files());
        dirs.push(self.public_files());
        dirs.push(self.config_sync());

        dirs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_directories() {
        let layout = ProjectLayout::new("/srv/site", "web");
        let dirs = layout.required_directories();

        assert_eq!(dirs.len(), 14);
        assert_eq!(dirs[0], Path::new("/srv/site/web/libraries/contrib"));
        assert!(dirs.contains(&PathBuf::from("/srv/site/web/sites/default")));
        assert!(dirs.contains(&PathBuf::from("/srv/site/drush/custom")));
        assert_eq!(dirs[13], Path::new("/srv/site/config/sync"));
    }

    #[test]
    fn test_custom_web_root() {
        let layout = ProjectLayout::new("/srv/site", "docroot");
        assert_eq!(
            layout.settings_file(),
            Path::new("/srv/site/docroot/sites/default/settings.php")
        );
        assert_eq!(layout.public_files(), Path::new("/srv/site/files/public"));
    }
}
