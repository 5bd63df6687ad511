//! Package manager detection and version compatibility
//!
//! This module provides:
//! - Tool version detection for the package manager firing the hooks
//! - The minimum-version gate run before install/update

pub mod tool;
pub mod version;

pub use tool::{ToolConfig, ToolManager};
pub use version::{check_compatibility, evaluate, parse_version, Compatibility};
