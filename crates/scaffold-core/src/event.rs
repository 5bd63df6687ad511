//! Lifecycle event context handed to every hook
//!
//! Replaces the package manager's event object: the project root, an
//! output sink, and the version the invoking tool reports about itself.

use crate::config::ScaffoldConfig;
use crate::layout::ProjectLayout;
use crate::product::ProductConfig;
use colored::Colorize;
use std::cell::RefCell;
use std::path::PathBuf;

/// Severity of a line written to an [`Io`] sink
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warning,
    Error,
}

/// Output sink for hook messages
pub trait Io {
    fn write(&self, level: Level, message: &str);

    fn write_info(&self, message: &str) {
        self.write(Level::Info, message);
    }

    fn write_warning(&self, message: &str) {
        self.write(Level::Warning, message);
    }

    fn write_error(&self, message: &str) {
        self.write(Level::Error, message);
    }
}

/// Plain stderr sink
#[derive(Debug, Clone, Default)]
pub struct ConsoleIo {
    verbose: bool,
}

impl ConsoleIo {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Io for ConsoleIo {
    fn write(&self, level: Level, message: &str) {
        match level {
            Level::Info if self.verbose => eprintln!("{} {}", "->".blue(), message),
            Level::Info => {}
            Level::Warning => eprintln!("{} {}", "Warning:".yellow(), message),
            Level::Error => eprintln!("{} {}", "Error:".red().bold(), message),
        }
    }
}

/// Sink that keeps every message, for tests and embedders
#[derive(Debug, Default)]
pub struct MemoryIo {
    lines: RefCell<Vec<(Level, String)>>,
}

impl MemoryIo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<(Level, String)> {
        self.lines.borrow().clone()
    }

    /// Messages written at `level`, in order
    pub fn messages(&self, level: Level) -> Vec<String> {
        self.lines
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

impl Io for MemoryIo {
    fn write(&self, level: Level, message: &str) {
        self.lines.borrow_mut().push((level, message.to_string()));
    }
}

/// Version the invoking package manager reports about itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolVersion {
    pub version: String,
    /// Branch alias used by development builds whose version is a commit hash
    pub branch_alias: Option<String>,
}

impl ToolVersion {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            branch_alias: None,
        }
    }

    pub fn with_branch_alias(mut self, alias: impl Into<String>) -> Self {
        self.branch_alias = Some(alias.into());
        self
    }
}

/// Everything a hook needs; built once per invocation
pub struct Event<'a, C: ProductConfig> {
    pub product: &'a C,
    pub config: &'a ScaffoldConfig,
    pub layout: ProjectLayout,
    pub io: &'a dyn Io,
    /// Only the compatibility check reads this; `None` when it was not resolved
    pub tool: Option<ToolVersion>,
}

impl<'a, C: ProductConfig> Event<'a, C> {
    pub fn new(
        product: &'a C,
        config: &'a ScaffoldConfig,
        root: impl Into<PathBuf>,
        io: &'a dyn Io,
    ) -> Self {
        let layout = ProjectLayout::new(root, &config.web_root);
        Self {
            product,
            config,
            layout,
            io,
            tool: None,
        }
    }

    pub fn with_tool(mut self, tool: ToolVersion) -> Self {
        self.tool = Some(tool);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_io_filters_by_level() {
        let io = MemoryIo::new();
        io.write_info("created web/modules/custom");
        io.write_warning("development build");
        io.write_error("too old");

        assert_eq!(io.lines().len(), 3);
        assert_eq!(io.messages(Level::Warning), vec!["development build"]);
        assert_eq!(io.messages(Level::Error), vec!["too old"]);
    }
}
