//! Drupal scaffold - Composer lifecycle hooks for Drupal projects

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use scaffold_core::hooks::Hook;
use scaffold_core::tui::ClackIo;
use scaffold_core::{
    dispatch, ConsoleIo, Event, Io, LifecycleEvent, ProductConfig, ScaffoldConfig,
    ScaffoldError, ToolConfig, ToolManager, ToolVersion,
};
use std::path::PathBuf;
use std::process::ExitCode;

/// Drupal project configuration
#[derive(Clone)]
pub struct DrupalConfig;

impl ProductConfig for DrupalConfig {
    fn display_name(&self) -> &'static str {
        "Drupal-project"
    }

    fn tool(&self) -> ToolConfig {
        ToolConfig {
            name: "composer",
            display_name: "Composer",
        }
    }

    // Composer 1.0.0 treats `install` without a lock file like `update`;
    // older versions would skip the scaffolding hooks entirely.
    fn minimum_tool_version(&self) -> &'static str {
        "1.0.0"
    }

    fn leftover_files(&self) -> &'static [&'static str] {
        &["LICENSE", ".travis.yml", "README.md", "phpunit.xml.dist", ".git"]
    }

    fn upgrade_hint(&self) -> &'static str {
        "Please update your Composer before continuing"
    }
}

#[derive(Parser, Debug)]
#[command(name = "drupal-scaffold")]
#[command(about = "Composer lifecycle hooks for scaffolding Drupal projects")]
#[command(version)]
pub struct Args {
    /// Project root (defaults to the current directory)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Config file (defaults to scaffold.yaml in the project root)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Plain stderr output instead of styled log lines
    #[arg(long, global = true)]
    pub plain: bool,

    /// Report every file and directory that gets created
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the hooks bound to a Composer script event (e.g. post-install-cmd)
    Run(RunArgs),
    /// Create directories, the files symlink and settings files
    CreateRequiredFiles,
    /// Fail if Composer is older than the supported minimum
    CheckComposerVersion(ToolArgs),
    /// Remove the project template's own repository files
    Cleanup,
}

#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Composer script event name
    pub event: String,

    #[command(flatten)]
    pub tool: ToolArgs,
}

#[derive(Parser, Debug)]
pub struct ToolArgs {
    /// Composer version (detected with `composer --version` when omitted)
    #[arg(long = "composer-version", env = "COMPOSER_VERSION")]
    pub composer_version: Option<String>,

    /// Branch alias reported by snapshot builds of Composer
    #[arg(long = "branch-alias-version", env = "COMPOSER_BRANCH_ALIAS_VERSION")]
    pub branch_alias_version: Option<String>,
}

impl ToolArgs {
    fn resolve(&self, product: &DrupalConfig) -> Option<ToolVersion> {
        let tool = match &self.composer_version {
            Some(version) => Some(ToolVersion::new(version.clone())),
            None => ToolManager::new(product.tool()).detect(),
        };
        tool.map(|tool| match &self.branch_alias_version {
            Some(alias) => tool.with_branch_alias(alias.clone()),
            None => tool,
        })
    }
}

fn main() -> ExitCode {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let plain_io = ConsoleIo::new(args.verbose);
    let clack_io = ClackIo::new(args.verbose);
    let io: &dyn Io = if args.plain { &plain_io } else { &clack_io };

    let result = run(args, io);
    ExitCode::from(exit_status(result, io))
}

/// Map the outcome of a command to the process exit status, reporting any
/// error that no hook has written yet.
fn exit_status(result: Result<()>, io: &dyn Io) -> u8 {
    match result {
        Ok(()) => 0,
        // The version check already wrote the error line
        Err(e) if is_incompatible_tool(&e) => 1,
        Err(e) => {
            io.write_error(&format!("{:#}", e));
            1
        }
    }
}

fn is_incompatible_tool(error: &anyhow::Error) -> bool {
    error
        .downcast_ref::<ScaffoldError>()
        .is_some_and(ScaffoldError::is_incompatible_tool)
}

/// What a subcommand runs: every hook of a lifecycle event, or a single hook
#[derive(Debug, Clone, Copy)]
enum Target {
    Lifecycle(LifecycleEvent),
    Hook(Hook),
}

impl Target {
    fn needs_tool_version(&self) -> bool {
        match self {
            Target::Lifecycle(lifecycle) => {
                lifecycle.hooks().iter().any(Hook::needs_tool_version)
            }
            Target::Hook(hook) => hook.needs_tool_version(),
        }
    }
}

fn run(args: Args, io: &dyn Io) -> Result<()> {
    let product = DrupalConfig;

    let root = match args.root {
        Some(root) => root,
        None => std::env::current_dir().context("Failed to read the current directory")?,
    };
    let root = std::path::absolute(&root)
        .with_context(|| format!("Invalid project root: {}", root.display()))?;

    let config_path = args
        .config
        .unwrap_or_else(|| root.join(product.config_file_name()));
    let config = ScaffoldConfig::load(&config_path)?;

    let (target, tool_args) = match &args.command {
        Command::Run(run_args) => (
            Target::Lifecycle(run_args.event.parse::<LifecycleEvent>()?),
            Some(&run_args.tool),
        ),
        Command::CreateRequiredFiles => (Target::Hook(Hook::CreateRequiredFiles), None),
        Command::CheckComposerVersion(tool_args) => {
            (Target::Hook(Hook::CheckVersion), Some(tool_args))
        }
        Command::Cleanup => (Target::Hook(Hook::Cleanup), None),
    };

    let mut event = Event::new(&product, &config, root.clone(), io);
    if target.needs_tool_version() {
        if let Some(tool) = tool_args.and_then(|t| t.resolve(&product)) {
            event = event.with_tool(tool);
        }
    }

    let clack = (!args.plain).then(|| ClackIo::new(args.verbose));
    if let Some(clack) = &clack {
        clack.intro(product.display_name());
    }

    match target {
        Target::Lifecycle(lifecycle) => dispatch(lifecycle, &event)?,
        Target::Hook(hook) => hook.run(&event)?,
    }

    if let Some(clack) = &clack {
        clack.outro(&format!("Done in {}", root.display()));
    }

    Ok(())
}
