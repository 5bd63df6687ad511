//! Product configuration trait for scaffolding binaries
//!
//! This trait defines the interface that each product (e.g. a Drupal project
//! template) implements to configure the hooks for its specific needs.

use crate::runtime::tool::ToolConfig;

/// Configuration trait for different scaffolded products
///
/// Each product implements this trait to define:
/// - Product identity (display name)
/// - The package manager that fires the lifecycle hooks
/// - The minimum package manager version it supports
/// - Which bootstrap files to drop after project creation
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Package manager that invokes the hooks
    fn tool(&self) -> ToolConfig;

    /// Lowest package manager version the hooks work with
    fn minimum_tool_version(&self) -> &'static str;

    /// Name of the optional config file looked up in the project root
    fn config_file_name(&self) -> &'static str {
        "scaffold.yaml"
    }

    /// Repository bootstrap files removed after project creation, relative to the root
    fn leftover_files(&self) -> &'static [&'static str];

    /// Upgrade instructions shown alongside version errors
    fn upgrade_hint(&self) -> &'static str;
}
