//! cliclack-backed output sink

use crate::event::{Io, Level};

/// Writes hook messages as cliclack log lines
#[derive(Debug, Clone, Default)]
pub struct ClackIo {
    verbose: bool,
}

impl ClackIo {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    pub fn intro(&self, title: &str) {
        let _ = cliclack::intro(title);
    }

    pub fn outro(&self, message: &str) {
        let _ = cliclack::outro(message);
    }
}

impl Io for ClackIo {
    fn write(&self, level: Level, message: &str) {
        // Terminal write failures are not worth aborting a hook over
        let _ = match level {
            Level::Info if self.verbose => cliclack::log::info(message),
            Level::Info => Ok(()),
            Level::Warning => cliclack::log::warning(message),
            Level::Error => cliclack::log::error(message),
        };
    }
}
