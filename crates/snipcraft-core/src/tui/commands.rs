//! Command runners: build, list, init, config

use super::prompts::TerminalProvider;
use crate::components;
use crate::config::{fill, Messages, Palette, ResolvedSettings, CONFIG_ENV, CONFIG_FILE};
use crate::error::{BuildError, StoreError};
use crate::output::OutputMode;
use crate::pipeline::{self, BuildOptions, BuildOutcome};
use crate::project::{self, DirStatus};
use crate::taxonomy::{self, GroupKey};
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};

/// How a command ended, for the binary's exit code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    Success,
    Cancelled,
}

/// Arguments for the build command
#[derive(Debug, Clone)]
pub struct BuildArgs {
    pub components_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Preset output mode, skipping the bundle prompt
    pub mode: Option<OutputMode>,
    /// Select every component without prompting
    pub all: bool,
}

/// Presentation context resolved once at startup
pub struct Ui {
    pub resolved: ResolvedSettings,
    pub palette: Palette,
}

impl Ui {
    pub fn new(resolved: ResolvedSettings) -> Self {
        resolved.settings.color.apply();
        let palette = Palette::new(&resolved.settings.type_colors);
        Self { resolved, palette }
    }

    pub fn messages(&self) -> &'static Messages {
        self.resolved.settings.locale.messages()
    }

    fn intro(&self) -> Result<()> {
        if self.resolved.settings.show_banner {
            cliclack::intro(" snipcraft ".on_cyan().black().to_string())?;
        }
        Ok(())
    }
}

/// Interactive build: select components and write them out
pub async fn build(ui: &Ui, args: BuildArgs) -> Result<CommandStatus> {
    let m = ui.messages();
    ui.intro()?;

    let options = BuildOptions {
        components_dir: args.components_dir.clone(),
        output_dir: args.output_dir.clone(),
        mode: args.mode,
        select_all: args.all,
        messages: m.flow(),
        bundle_prompt: m.bundle_prompt.to_string(),
    };

    cliclack::log::info(m.loading)?;
    let mut provider = TerminalProvider::new(&ui.palette);

    match pipeline::build(&options, &mut provider).await {
        Ok(BuildOutcome::Generated {
            selection, files, ..
        }) => {
            let selected = selection.len().to_string();
            cliclack::log::info(fill(m.selected, &[("count", selected.as_str())]))?;
            for file in &files {
                cliclack::log::step(format!(
                    "{} ({} bytes)",
                    file.path.display(),
                    file.bytes
                ))?;
            }
            let count = files.len().to_string();
            let dir = args.output_dir.display().to_string();
            cliclack::log::success(fill(
                m.written,
                &[("count", count.as_str()), ("dir", dir.as_str())],
            ))?;
            cliclack::outro(m.done)?;
            Ok(CommandStatus::Success)
        }
        Ok(BuildOutcome::NothingSelected) => {
            cliclack::outro(m.nothing_selected)?;
            Ok(CommandStatus::Success)
        }
        Ok(BuildOutcome::Cancelled) => {
            cliclack::outro_cancel(m.cancelled)?;
            Ok(CommandStatus::Cancelled)
        }
        Err(BuildError::Store(err)) => {
            report_load_failure(m, &err)?;
            cliclack::outro_cancel(m.nothing_selected)?;
            Ok(CommandStatus::Success)
        }
        Err(err) => Err(err).context("Build failed"),
    }
}

/// Print the taxonomy without selecting or writing anything
pub async fn list(ui: &Ui, components_dir: &Path) -> Result<CommandStatus> {
    let m = ui.messages();

    let store = match components::load(components_dir).await {
        Ok(store) => store,
        Err(err) => {
            report_load_failure(m, &err)?;
            return Ok(CommandStatus::Success);
        }
    };

    let types = taxonomy::available_types(&store);
    let tree = taxonomy::structure(&store, &types, None);

    println!(
        "{} {}",
        m.list_heading.cyan().bold(),
        format!("({})", store.len()).dimmed()
    );

    for type_bucket in &tree.types {
        println!();
        println!(
            "{} {}",
            ui.palette
                .paint(&type_bucket.kind, &type_bucket.kind.to_uppercase())
                .bold(),
            format!("({})", type_bucket.len()).dimmed()
        );

        for bucket in &type_bucket.groups {
            let heading = match &bucket.key {
                GroupKey::Named(name) => name.as_str(),
                GroupKey::Ungrouped => m.ungrouped,
            };
            println!("  {}", heading.bold());

            for component in &bucket.components {
                println!(
                    "    {} {} {}",
                    "->".blue(),
                    component.title,
                    format!("- {}", component.description).dimmed()
                );
            }
        }
    }

    Ok(CommandStatus::Success)
}

/// Create the components and output directories
pub async fn init(
    ui: &Ui,
    components_dir: &Path,
    output_dir: &Path,
    with_sample: bool,
) -> Result<CommandStatus> {
    let m = ui.messages();
    ui.intro()?;

    let report = project::init(components_dir, output_dir, with_sample)
        .await
        .context("Failed to initialize project")?;

    for (path, status) in [&report.components, &report.output] {
        let path = path.display().to_string();
        let values = [("path", path.as_str())];
        match status {
            DirStatus::Created => cliclack::log::success(fill(m.created, &values))?,
            DirStatus::AlreadyExists => cliclack::log::info(fill(m.exists, &values))?,
        }
    }

    if let Some(sample) = &report.sample {
        let path = sample.display().to_string();
        cliclack::log::success(fill(m.sample_written, &[("path", path.as_str())]))?;
    }

    cliclack::outro(m.init_done)?;
    Ok(CommandStatus::Success)
}

/// Describe the configurable options and their effective values
pub fn show_config(ui: &Ui) -> Result<CommandStatus> {
    let m = ui.messages();
    let settings = &ui.resolved.settings;

    println!("{}", m.config_heading.cyan().bold());
    println!("  {} {}", "source:".dimmed(), ui.resolved.source);
    println!(
        "  {} {} {} {}",
        "lookup:".dimmed(),
        "--config",
        format!("→ ${CONFIG_ENV}").dimmed(),
        format!("→ ./{CONFIG_FILE} → defaults").dimmed()
    );
    println!();

    let type_colors = if settings.type_colors.is_empty() {
        "{}".to_string()
    } else {
        settings
            .type_colors
            .iter()
            .map(|(kind, color)| format!("{kind}={color}"))
            .collect::<Vec<_>>()
            .join(", ")
    };

    let rows = [
        (
            "color",
            settings.color.as_str().to_string(),
            "When to use colors: auto, always, never",
        ),
        (
            "locale",
            settings.locale.to_string(),
            "Interface language: en, es",
        ),
        (
            "show_banner",
            settings.show_banner.to_string(),
            "Print the intro banner before commands",
        ),
        (
            "type_colors",
            type_colors,
            "Color per component type, e.g. `css: green`",
        ),
    ];

    for (key, value, description) in rows {
        println!(
            "  {:<12} {:<16} {}",
            key.bold(),
            value.green(),
            description.dimmed()
        );
    }

    Ok(CommandStatus::Success)
}

/// Shared by `build` and `list` so both report a bad store the same way
fn report_load_failure(m: &Messages, err: &StoreError) -> Result<()> {
    let (message, hint) = load_failure_text(m, err);
    cliclack::log::error(message)?;
    if let Some(hint) = hint {
        cliclack::log::remark(hint)?;
    }
    Ok(())
}

fn load_failure_text(m: &Messages, err: &StoreError) -> (String, Option<&'static str>) {
    let hint = match err {
        StoreError::NotFound(_) | StoreError::EmptyStore(_) => Some(m.init_hint),
        _ => None,
    };
    (format!("{}: {}", m.load_failed, err), hint)
}
