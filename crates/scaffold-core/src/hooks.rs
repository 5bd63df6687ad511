//! Lifecycle event dispatch
//!
//! Maps the package manager's script event names to scaffolding steps.

use crate::error::{Result, ScaffoldError};
use crate::event::Event;
use crate::product::ProductConfig;
use crate::runtime::version;
use crate::scaffold;
use std::fmt;
use std::str::FromStr;

/// Script events the hooks are registered for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleEvent {
    PreInstall,
    PreUpdate,
    PostInstall,
    PostUpdate,
    PostCreateProject,
}

impl LifecycleEvent {
    pub const ALL: [LifecycleEvent; 5] = [
        LifecycleEvent::PreInstall,
        LifecycleEvent::PreUpdate,
        LifecycleEvent::PostInstall,
        LifecycleEvent::PostUpdate,
        LifecycleEvent::PostCreateProject,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            LifecycleEvent::PreInstall => "pre-install-cmd",
            LifecycleEvent::PreUpdate => "pre-update-cmd",
            LifecycleEvent::PostInstall => "post-install-cmd",
            LifecycleEvent::PostUpdate => "post-update-cmd",
            LifecycleEvent::PostCreateProject => "post-create-project-cmd",
        }
    }

    /// Steps run for this event, in order
    pub fn hooks(&self) -> &'static [Hook] {
        match self {
            LifecycleEvent::PreInstall | LifecycleEvent::PreUpdate => &[Hook::CheckVersion],
            LifecycleEvent::PostInstall | LifecycleEvent::PostUpdate => {
                &[Hook::CreateRequiredFiles]
            }
            LifecycleEvent::PostCreateProject => &[Hook::Cleanup],
        }
    }
}

impl fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for LifecycleEvent {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|event| event.name() == s)
            .ok_or_else(|| ScaffoldError::UnknownEvent(s.to_string()))
    }
}

/// A single handler that can be bound to a lifecycle event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hook {
    CheckVersion,
    CreateRequiredFiles,
    Cleanup,
}

impl Hook {
    pub fn run<C: ProductConfig>(&self, event: &Event<'_, C>) -> Result<()> {
        match self {
            Hook::CheckVersion => version::check_compatibility(event),
            Hook::CreateRequiredFiles => {
                let report = scaffold::create_required_files(event)?;
                if report.is_noop() {
                    event.io.write_info("Project layout already up to date");
                }
                Ok(())
            }
            Hook::Cleanup => scaffold::cleanup(event).map(|_| ()),
        }
    }

    /// True if the hook reads the tool version from the event
    pub fn needs_tool_version(&self) -> bool {
        matches!(self, Hook::CheckVersion)
    }
}

/// Run every hook bound to `lifecycle`, stopping at the first failure
pub fn dispatch<C: ProductConfig>(lifecycle: LifecycleEvent, event: &Event<'_, C>) -> Result<()> {
    for hook in lifecycle.hooks() {
        hook.run(event)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScaffoldConfig;
    use crate::event::{MemoryIo, ToolVersion};
    use crate::product::testing::TestProduct;

    #[test]
    fn test_parse_event_names() {
        for event in LifecycleEvent::ALL {
            assert_eq!(event.name().parse::<LifecycleEvent>().unwrap(), event);
        }
        assert!(matches!(
            "post-autoload-dump".parse::<LifecycleEvent>(),
            Err(ScaffoldError::UnknownEvent(_))
        ));
    }

    #[test]
    fn test_post_install_scaffolds() {
        let dir = tempfile::tempdir().unwrap();
        let io = MemoryIo::new();
        let config = ScaffoldConfig::default();
        let event = Event::new(&TestProduct, &config, dir.path(), &io);

        dispatch(LifecycleEvent::PostInstall, &event).unwrap();
        assert!(event.layout.config_sync().is_dir());
        assert!(event.layout.local_settings_file().is_file());
    }

    #[test]
    fn test_pre_update_stops_on_old_tool() {
        let dir = tempfile::tempdir().unwrap();
        let io = MemoryIo::new();
        let config = ScaffoldConfig::default();
        let event = Event::new(&TestProduct, &config, dir.path(), &io)
            .with_tool(ToolVersion::new("1.0.0-beta2"));

        let err = dispatch(LifecycleEvent::PreUpdate, &event).unwrap_err();
        assert!(err.is_incompatible_tool());
        // Nothing was scaffolded
        assert!(std::fs::read_dir(dir.path()).unwrap().next().is_none());
    }

    #[test]
    fn test_only_version_check_needs_tool() {
        assert!(Hook::CheckVersion.needs_tool_version());
        assert!(!Hook::CreateRequiredFiles.needs_tool_version());
        assert!(!Hook::Cleanup.needs_tool_version());
    }
}
