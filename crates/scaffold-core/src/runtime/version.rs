//! Version gate for the invoking package manager

use crate::error::{Result, ScaffoldError};
use crate::event::{Event, ToolVersion};
use crate::product::ProductConfig;
use semver::Version;

/// Placeholders left in the version constants of a tool run from a source checkout
const UNRESOLVED_VERSIONS: [&str; 2] = ["@package_version@", "@package_branch_alias_version@"];

/// Patch/minor filler for `-dev` branch aliases, so `1.1-dev` sorts after every 1.1.x
const DEV_BRANCH_FILLER: &str = "9999999";

/// Result of comparing the tool version against the minimum
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Compatibility {
    Compatible,
    /// Running from a source checkout; the real version cannot be known
    Development,
    /// Version string could not be parsed
    Unknown(String),
    TooOld { found: String },
}

/// Compare the reported tool version against `minimum`
pub fn evaluate(tool: &ToolVersion, minimum: &Version) -> Compatibility {
    let mut version = tool.version.trim();

    // Snapshot builds report the commit hash, the branch alias is the best guess
    if is_commit_hash(version) {
        if let Some(alias) = &tool.branch_alias {
            version = alias.trim();
        }
    }

    if UNRESOLVED_VERSIONS.contains(&version) {
        return Compatibility::Development;
    }

    match parse_version(version) {
        Ok(found) if found < *minimum => Compatibility::TooOld {
            found: version.to_string(),
        },
        Ok(_) => Compatibility::Compatible,
        Err(_) => Compatibility::Unknown(version.to_string()),
    }
}

fn is_commit_hash(version: &str) -> bool {
    version.len() == 40 && version.chars().all(|c| c.is_ascii_hexdigit())
}

/// Parse version string, handling package manager formats
///
/// Accepts `v` prefixes, missing minor/patch components (`2.7` -> `2.7.0`),
/// and branch aliases (`1.1-dev` -> `1.1.9999999-dev`).
pub fn parse_version(version_str: &str) -> Result<Version> {
    let invalid = || ScaffoldError::InvalidVersion(version_str.to_string());

    let trimmed = version_str.trim();
    let cleaned = trimmed.strip_prefix(['v', 'V']).unwrap_or(trimmed);

    let (numbers, suffix) = match cleaned.split_once('-') {
        Some((numbers, suffix)) => (numbers, Some(suffix)),
        None => (cleaned, None),
    };
    let is_dev = suffix.is_some_and(|s| s.eq_ignore_ascii_case("dev"));

    let mut parts: Vec<&str> = numbers.split('.').collect();
    if parts.len() > 3 || parts.iter().any(|p| p.is_empty()) {
        return Err(invalid());
    }
    while parts.len() < 3 {
        parts.push(if is_dev { DEV_BRANCH_FILLER } else { "0" });
    }

    let mut normalized = parts.join(".");
    if let Some(suffix) = suffix {
        normalized.push('-');
        normalized.push_str(suffix);
    }

    Version::parse(&normalized).map_err(|_| invalid())
}

/// Checks that the package manager running the hooks is new enough.
///
/// Development builds and unparseable versions only produce a warning. A
/// version below the minimum writes an error and returns
/// [`ScaffoldError::IncompatibleTool`]; the caller decides whether to exit.
pub fn check_compatibility<C: ProductConfig>(event: &Event<'_, C>) -> Result<()> {
    let tool_config = event.product.tool();
    let Some(tool) = &event.tool else {
        return Err(ScaffoldError::ToolNotFound(tool_config.name));
    };

    let required = event
        .config
        .minimum_tool_version
        .as_deref()
        .unwrap_or(event.product.minimum_tool_version());
    let minimum = parse_version(required)?;

    match evaluate(tool, &minimum) {
        Compatibility::Compatible => Ok(()),
        Compatibility::Development => {
            event.io.write_warning(&format!(
                "You are running a development version of {}. If you experience problems, \
                 please update {} to the latest stable version.",
                tool_config.display_name, tool_config.display_name
            ));
            Ok(())
        }
        Compatibility::Unknown(found) => {
            event.io.write_warning(&format!(
                "Could not determine whether {} version '{}' is at least {}.",
                tool_config.display_name, found, required
            ));
            Ok(())
        }
        Compatibility::TooOld { found } => {
            event.io.write_error(&format!(
                "{} requires {} version {} or higher. {}.",
                event.product.display_name(),
                tool_config.display_name,
                required,
                event.product.upgrade_hint()
            ));
            Err(ScaffoldError::IncompatibleTool {
                tool: tool_config.display_name,
                found,
                required: required.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScaffoldConfig;
    use crate::event::{Level, MemoryIo};
    use crate::product::testing::TestProduct;

    const HASH: &str = "9f4e2b1c3d5a6e7f8091a2b3c4d5e6f708192a3b";

    fn minimum() -> Version {
        Version::new(1, 0, 0)
    }

    fn run(tool: ToolVersion) -> (Result<()>, MemoryIo) {
        let io = MemoryIo::new();
        let config = ScaffoldConfig::default();
        let result = {
            let event = Event::new(&TestProduct, &config, "/srv/site", &io).with_tool(tool);
            check_compatibility(&event)
        };
        (result, io)
    }

    #[test]
    fn test_stable_version_passes() {
        let (result, io) = run(ToolVersion::new("1.0.0"));
        assert!(result.is_ok());
        assert!(io.lines().is_empty());
    }

    #[test]
    fn test_old_version_is_fatal() {
        let (result, io) = run(ToolVersion::new("0.9.9"));
        let err = result.unwrap_err();
        assert!(err.is_incompatible_tool());
        let errors = io.messages(Level::Error);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("version 1.0.0 or higher"));
    }

    #[test]
    fn test_commit_hash_uses_branch_alias() {
        let tool = ToolVersion::new(HASH).with_branch_alias("0.9-dev");
        assert_eq!(
            evaluate(&tool, &minimum()),
            Compatibility::TooOld {
                found: "0.9-dev".to_string()
            }
        );

        let tool = ToolVersion::new(HASH.to_uppercase()).with_branch_alias("1.1-dev");
        assert_eq!(evaluate(&tool, &minimum()), Compatibility::Compatible);
    }

    #[test]
    fn test_unresolved_placeholders_warn() {
        for placeholder in UNRESOLVED_VERSIONS {
            let (result, io) = run(ToolVersion::new(placeholder));
            assert!(result.is_ok());
            let warnings = io.messages(Level::Warning);
            assert_eq!(warnings.len(), 1);
            assert!(warnings[0].contains("development version of Composer"));
        }

        // Source checkout of a snapshot: the alias is still a placeholder
        let tool = ToolVersion::new(HASH).with_branch_alias("@package_branch_alias_version@");
        assert_eq!(evaluate(&tool, &minimum()), Compatibility::Development);
    }

    #[test]
    fn test_prerelease_below_minimum() {
        let tool = ToolVersion::new("1.0.0-alpha11");
        assert!(matches!(
            evaluate(&tool, &minimum()),
            Compatibility::TooOld { .. }
        ));
    }

    #[test]
    fn test_invalid_version_only_warns() {
        let (result, io) = run(ToolVersion::new("banana"));
        assert!(result.is_ok());
        assert_eq!(io.messages(Level::Warning).len(), 1);
    }

    #[test]
    fn test_config_overrides_minimum() {
        let io = MemoryIo::new();
        let config = ScaffoldConfig {
            minimum_tool_version: Some("2.2".to_string()),
            ..ScaffoldConfig::default()
        };
        let event = Event::new(&TestProduct, &config, "/srv/site", &io)
            .with_tool(ToolVersion::new("2.1.9"));
        assert!(check_compatibility(&event).unwrap_err().is_incompatible_tool());
    }

    #[test]
    fn test_missing_tool_version() {
        let io = MemoryIo::new();
        let config = ScaffoldConfig::default();
        let event = Event::new(&TestProduct, &config, "/srv/site", &io);
        assert!(matches!(
            check_compatibility(&event),
            Err(ScaffoldError::ToolNotFound("composer"))
        ));
    }

    #[test]
    fn test_parse_version_formats() {
        assert_eq!(parse_version("v2.7").unwrap(), Version::new(2, 7, 0));
        assert_eq!(parse_version("2.7.1").unwrap(), Version::new(2, 7, 1));
        assert_eq!(
            parse_version("1.1-dev").unwrap(),
            Version::parse("1.1.9999999-dev").unwrap()
        );
        assert!(parse_version("1..2").is_err());
        assert!(parse_version("1.2.3.4").is_err());
    }
}
