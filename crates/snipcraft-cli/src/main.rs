//! snipcraft CLI - pick code snippets and write them as files or bundles

use anyhow::Result;
use clap::{Args as ClapArgs, Parser, Subcommand};
use snipcraft_core::config::{Settings, CONFIG_ENV};
use snipcraft_core::project::{COMPONENTS_DIR, OUTPUT_DIR};
use snipcraft_core::tui::{self, BuildArgs, CommandStatus, Ui};
use snipcraft_core::OutputMode;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable controlling diagnostic log output
const LOG_ENV: &str = "SNIPCRAFT_LOG";

/// Exit code used when the user cancels (matches the Ctrl+C handler)
const EXIT_CANCELLED: u8 = 130;

#[derive(Parser, Debug)]
#[command(name = "snipcraft")]
#[command(about = "Pick code snippets and write them as separate files or bundles")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Directory holding component JSON files
    #[arg(long = "components-dir", global = true, default_value = COMPONENTS_DIR)]
    pub components_dir: PathBuf,

    /// Directory generated files are written to
    #[arg(long = "output-dir", global = true, default_value = OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Config file (YAML); falls back to ./snipcraft.yaml, then built-in defaults
    #[arg(long, global = true, env = CONFIG_ENV)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Select components and generate files (default)
    Build(CliBuildArgs),
    /// List available components by type and group
    List,
    /// Create the components and output directories
    Init(InitArgs),
    /// Show configurable options and their current values
    Config,
}

#[derive(ClapArgs, Debug, Default)]
pub struct CliBuildArgs {
    /// Write one bundle file per type
    #[arg(long, conflicts_with = "separate")]
    pub bundle: bool,

    /// Write one file per component
    #[arg(long)]
    pub separate: bool,

    /// Select every component without prompting
    #[arg(short, long)]
    pub all: bool,
}

impl CliBuildArgs {
    fn mode(&self) -> Option<OutputMode> {
        match (self.bundle, self.separate) {
            (true, _) => Some(OutputMode::Bundle),
            (_, true) => Some(OutputMode::Separate),
            _ => None,
        }
    }
}

#[derive(ClapArgs, Debug)]
pub struct InitArgs {
    /// Also write an example component when none exist yet
    #[arg(long = "with-sample")]
    pub with_sample: bool,
}

fn init_logging() {
    // Logging already initialized is fine, keep going
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")))
        .try_init();
}

async fn run(args: Args) -> Result<CommandStatus> {
    let working_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let resolved = Settings::resolve(args.config.as_deref(), &working_dir)?;
    tracing::debug!(source = %resolved.source, "configuration resolved");
    let ui = Ui::new(resolved);

    match args.command {
        Some(Command::List) => tui::list(&ui, &args.components_dir).await,
        Some(Command::Init(init_args)) => {
            tui::init(
                &ui,
                &args.components_dir,
                &args.output_dir,
                init_args.with_sample,
            )
            .await
        }
        Some(Command::Config) => tui::show_config(&ui),
        Some(Command::Build(build_args)) => {
            let build_args = build_args_for(&args.components_dir, &args.output_dir, &build_args);
            tui::build(&ui, build_args).await
        }
        None => {
            // No subcommand provided, default to the interactive build
            let build_args = build_args_for(
                &args.components_dir,
                &args.output_dir,
                &CliBuildArgs::default(),
            );
            tui::build(&ui, build_args).await
        }
    }
}

fn build_args_for(components_dir: &Path, output_dir: &Path, cli: &CliBuildArgs) -> BuildArgs {
    BuildArgs {
        components_dir: components_dir.to_path_buf(),
        output_dir: output_dir.to_path_buf(),
        mode: cli.mode(),
        all: cli.all,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(i32::from(EXIT_CANCELLED));
    })
    .ok();

    init_logging();

    let args = Args::parse();
    let result = run(args).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    match result {
        Ok(CommandStatus::Success) => ExitCode::SUCCESS,
        Ok(CommandStatus::Cancelled) => ExitCode::from(EXIT_CANCELLED),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_no_subcommand_defaults_paths() {
        let args = Args::try_parse_from(["snipcraft"]).unwrap();
        assert!(args.command.is_none());
        assert_eq!(args.components_dir, PathBuf::from("components"));
        assert_eq!(args.output_dir, PathBuf::from("dist"));
    }

    #[test]
    fn test_build_mode_flags() {
        let args = Args::try_parse_from(["snipcraft", "build", "--bundle"]).unwrap();
        match args.command {
            Some(Command::Build(build)) => assert_eq!(build.mode(), Some(OutputMode::Bundle)),
            other => panic!("unexpected command: {other:?}"),
        }

        let args = Args::try_parse_from(["snipcraft", "build", "--separate", "--all"]).unwrap();
        match args.command {
            Some(Command::Build(build)) => {
                assert_eq!(build.mode(), Some(OutputMode::Separate));
                assert!(build.all);
            }
            other => panic!("unexpected command: {other:?}"),
        }

        assert!(Args::try_parse_from(["snipcraft", "build", "--bundle", "--separate"]).is_err());
    }

    #[test]
    fn test_global_dirs_after_subcommand() {
        let args = Args::try_parse_from([
            "snipcraft",
            "init",
            "--components-dir",
            "snips",
            "--with-sample",
        ])
        .unwrap();
        assert_eq!(args.components_dir, PathBuf::from("snips"));
        assert!(matches!(
            args.command,
            Some(Command::Init(InitArgs { with_sample: true }))
        ));
    }
}
