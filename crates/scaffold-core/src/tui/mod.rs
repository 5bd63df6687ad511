//! Styled log output using cliclack (Charm-style inline messages)
//!
//! This module is optional and only available when the `tui` feature is enabled.

#[cfg(feature = "tui")]
mod log;

#[cfg(feature = "tui")]
pub use log::ClackIo;
