//! Package manager detection
//!
//! Hooks normally receive the tool version from the caller. When they are
//! run by hand, the version is read from `<tool> --version` instead.

use crate::event::ToolVersion;
use std::process::Command;

/// Configuration for the package manager binary
#[derive(Debug, Clone)]
pub struct ToolConfig {
    /// Name of the tool binary (e.g., "composer")
    pub name: &'static str,
    /// Display name for user-facing messages
    pub display_name: &'static str,
}

/// Manager for querying the installed package manager
pub struct ToolManager {
    config: ToolConfig,
}

impl ToolManager {
    /// Create a new tool manager with the given configuration
    pub fn new(config: ToolConfig) -> Self {
        Self { config }
    }

    /// Get the tool configuration
    pub fn config(&self) -> &ToolConfig {
        &self.config
    }

    /// Get the raw `--version` output (if the tool is installed)
    pub fn get_version_output(&self) -> Option<String> {
        Command::new(self.config.name)
            .arg("--version")
            .arg("--no-ansi")
            .output()
            .ok()
            .and_then(|output| {
                if output.status.success() {
                    String::from_utf8(output.stdout)
                        .ok()
                        .map(|s| s.trim().to_string())
                } else {
                    None
                }
            })
    }

    /// Detect the installed tool version
    pub fn detect(&self) -> Option<ToolVersion> {
        self.get_version_output()
            .as_deref()
            .and_then(extract_version)
            .map(ToolVersion::new)
    }
}

/// Pull the version token out of `--version` output,
/// e.g. `Composer version 2.7.1 2024-02-09 15:26:28` -> `2.7.1`.
pub fn extract_version(output: &str) -> Option<String> {
    let line = output.lines().next()?;
    let words: Vec<&str> = line.split_whitespace().collect();

    // Prefer the word following "version"
    if let Some(pos) = words.iter().position(|w| w.eq_ignore_ascii_case("version")) {
        return words.get(pos + 1).map(|w| w.to_string());
    }

    words
        .into_iter()
        .find(|w| w.trim_start_matches('v').starts_with(|c: char| c.is_ascii_digit()))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_composer_version() {
        assert_eq!(
            extract_version("Composer version 2.7.1 2024-02-09 15:26:28").as_deref(),
            Some("2.7.1")
        );
        assert_eq!(
            extract_version("Composer version @package_version@ (@release_date@)").as_deref(),
            Some("@package_version@")
        );
    }

    #[test]
    fn test_extract_bare_version() {
        assert_eq!(extract_version("v1.10.22\n").as_deref(), Some("v1.10.22"));
        assert_eq!(extract_version("no digits here"), None);
        assert_eq!(extract_version(""), None);
    }

    #[test]
    fn test_missing_binary_is_not_detected() {
        let tool = ToolManager::new(ToolConfig {
            name: "definitely-not-a-real-package-manager",
            display_name: "Nothing",
        });
        assert!(tool.detect().is_none());
        assert_eq!(tool.config().display_name, "Nothing");
    }
}
