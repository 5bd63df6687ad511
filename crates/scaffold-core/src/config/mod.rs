//! Scaffolding configuration
//!
//! Defaults reproduce the classic Drupal project layout. A `scaffold.yaml`
//! in the project root (or an explicit path) can override them.

pub mod generator;

use crate::error::{IoContext, Result, ScaffoldError};
use serde::Deserialize;
use std::path::{Component, Path};

/// Mode applied to the public/private files and config sync directories,
/// and to materialized settings files.
pub const DEFAULT_WRITABLE_MODE: u32 = 0o777;

/// Mode for newly created directories.
pub const DEFAULT_DIR_MODE: u32 = 0o755;

/// Highest mode a config may ask for: plain rwx bits, no setuid/setgid/sticky.
const MAX_MODE: u32 = 0o777;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScaffoldConfig {
    /// Web root relative to the project root, e.g. `web` or `docroot`.
    /// Must stay inside the project: no absolute paths, no `..`.
    pub web_root: String,

    /// Loosen permissions on the writable directories and settings files.
    /// Convenient for local development, unsafe on shared hosts.
    pub relax_permissions: bool,

    /// Mode used when `relax_permissions` is set. Written in YAML as
    /// `0o777`; a bare `0777` is read as a string and rejected.
    pub writable_mode: u32,

    /// Mode for directories created by the layout step, e.g. `0o755`
    pub dir_mode: u32,

    /// Overrides the product's minimum package manager version
    pub minimum_tool_version: Option<String>,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            web_root: "web".to_string(),
            relax_permissions: true,
            writable_mode: DEFAULT_WRITABLE_MODE,
            dir_mode: DEFAULT_DIR_MODE,
            minimum_tool_version: None,
        }
    }
}

impl ScaffoldConfig {
    /// Load config from `path`, falling back to defaults when the file is absent.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).at("failed to read", path)?;
        let config = Self::from_yaml(&content).map_err(|source| ScaffoldError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        config
            .validate()
            .map_err(|message| ScaffoldError::InvalidConfig {
                path: path.to_path_buf(),
                message,
            })?;
        Ok(config)
    }

    /// Check values that parse fine but would scaffold outside the project
    /// or hand out special permission bits.
    pub fn validate(&self) -> std::result::Result<(), String> {
        let web_root = Path::new(&self.web_root);
        let stays_inside = web_root.components().next().is_some()
            && web_root
                .components()
                .all(|c| matches!(c, Component::Normal(_)));
        if !stays_inside {
            return Err(format!(
                "web_root '{}' must be a relative path inside the project",
                self.web_root
            ));
        }

        for (field, mode) in [
            ("writable_mode", self.writable_mode),
            ("dir_mode", self.dir_mode),
        ] {
            if mode > MAX_MODE {
                return Err(format!(
                    "{} {:#o} is out of range, expected at most {:#o}",
                    field, mode, MAX_MODE
                ));
            }
        }

        Ok(())
    }

    pub fn from_yaml(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        // An empty document deserializes to null, which means "all defaults"
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ScaffoldConfig::load(&dir.path().join("scaffold.yaml")).unwrap();
        assert_eq!(config, ScaffoldConfig::default());
        assert_eq!(config.web_root, "web");
        assert_eq!(config.writable_mode, 0o777);
    }

    #[test]
    fn test_partial_yaml_keeps_other_defaults() {
        let config = ScaffoldConfig::from_yaml("web_root: docroot\nrelax_permissions: false\n")
            .unwrap();
        assert_eq!(config.web_root, "docroot");
        assert!(!config.relax_permissions);
        assert_eq!(config.dir_mode, 0o755);
        assert!(config.minimum_tool_version.is_none());
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(
            ScaffoldConfig::from_yaml("\n").unwrap(),
            ScaffoldConfig::default()
        );
    }

    fn load_yaml(yaml: &str) -> Result<ScaffoldConfig> {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scaffold.yaml");
        std::fs::write(&path, yaml).unwrap();
        ScaffoldConfig::load(&path)
    }

    #[test]
    fn test_octal_modes_load() {
        let config = load_yaml("writable_mode: 0o775\ndir_mode: 0o750\n").unwrap();
        assert_eq!(config.writable_mode, 0o775);
        assert_eq!(config.dir_mode, 0o750);
    }

    #[test]
    fn test_out_of_range_mode_is_rejected() {
        let err = load_yaml("writable_mode: 99999999\n").unwrap_err();
        assert!(matches!(err, ScaffoldError::InvalidConfig { .. }));
        assert!(err.to_string().contains("writable_mode"));

        // setgid bit
        let err = load_yaml("dir_mode: 0o2755\n").unwrap_err();
        assert!(err.to_string().contains("dir_mode"));
    }

    #[test]
    fn test_web_root_must_stay_inside_project() {
        for web_root in ["/etc", "../elsewhere", "web/../../etc", ".", "\"\""] {
            let err = load_yaml(&format!("web_root: {}\n", web_root)).unwrap_err();
            assert!(
                matches!(err, ScaffoldError::InvalidConfig { .. }),
                "{} was accepted",
                web_root
            );
        }

        let config = load_yaml("web_root: public/html\n").unwrap();
        assert_eq!(config.web_root, "public/html");
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scaffold.yaml");
        std::fs::write(&path, "webroot: web\n").unwrap();

        let err = ScaffoldConfig::load(&path).unwrap_err();
        assert!(matches!(err, ScaffoldError::Config { .. }));
    }
}
