//! Scaffold Core - Shared library for Composer lifecycle scaffolding hooks
//!
//! This library implements the setup work a Drupal-style project needs
//! after its dependencies are installed: the directory layout, the public
//! files symlink, the default and local settings files, a minimum version
//! check for the package manager, and post-create cleanup.
//!
//! # Architecture
//!
//! - **Layer 1: Steps** - `scaffold` and `runtime::version`, each taking an [`Event`]
//! - **Layer 2: Dispatch** - [`hooks`] maps lifecycle event names to steps
//! - **Layer 3: Output** - the [`Io`] sink, with an optional cliclack backend (feature-gated)
//!
//! Nothing reads the current directory or exits the process: the project
//! root is passed in, and the fatal version error comes back as
//! [`ScaffoldError::IncompatibleTool`].
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based output sink
//!
//! # Example Usage
//!
//! ```ignore
//! use scaffold_core::{dispatch, ConsoleIo, Event, LifecycleEvent, ScaffoldConfig};
//!
//! let config = ScaffoldConfig::default();
//! let io = ConsoleIo::new(false);
//! let event = Event::new(&MyProduct, &config, "/srv/site", &io);
//! dispatch(LifecycleEvent::PostInstall, &event)?;
//! ```

pub mod config;
pub mod error;
pub mod event;
pub mod hooks;
pub mod layout;
pub mod product;
pub mod runtime;
pub mod scaffold;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::ScaffoldConfig;
pub use error::{Result, ScaffoldError};
pub use event::{ConsoleIo, Event, Io, Level, MemoryIo, ToolVersion};
pub use hooks::{dispatch, Hook, LifecycleEvent};
pub use layout::ProjectLayout;
pub use product::ProductConfig;
pub use runtime::{ToolConfig, ToolManager};
pub use scaffold::{create_required_files, ScaffoldReport};
