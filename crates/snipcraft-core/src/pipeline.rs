//! The build pipeline: load → select → choose output mode → generate

use crate::components::{self, SelectedComponent};
use crate::error::{BuildError, SelectionError};
use crate::output::{self, GeneratedFile, OutputMode};
use crate::selection::{self, ChoiceProvider, FlowMessages, SelectionFlow};
use std::path::PathBuf;
use tracing::info;

/// Inputs for one build run
#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub components_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Preset output mode; `None` asks the provider
    pub mode: Option<OutputMode>,
    /// Take every component without prompting
    pub select_all: bool,
    pub messages: FlowMessages,
    /// Yes/no question asked when `mode` is `None`; yes means bundle
    pub bundle_prompt: String,
}

impl BuildOptions {
    pub fn new(components_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            components_dir: components_dir.into(),
            output_dir: output_dir.into(),
            mode: None,
            select_all: false,
            messages: FlowMessages::default(),
            bundle_prompt: "Bundle components of the same type into one file?".to_string(),
        }
    }
}

/// How a build run ended
#[derive(Debug)]
pub enum BuildOutcome {
    Generated {
        selection: Vec<SelectedComponent>,
        mode: OutputMode,
        files: Vec<GeneratedFile>,
    },
    NothingSelected,
    /// The user aborted a prompt; nothing was written
    Cancelled,
}

/// Run a full build against `provider`.
///
/// Load failures are returned before any prompt is shown or any file touched.
pub async fn build<P>(options: &BuildOptions, provider: &mut P) -> Result<BuildOutcome, BuildError>
where
    P: ChoiceProvider + ?Sized,
{
    let store = components::load(&options.components_dir).await?;
    info!(count = store.len(), dir = %options.components_dir.display(), "components loaded");

    let selection = if options.select_all {
        selection::select_all(&store)
    } else {
        match SelectionFlow::new(&store)
            .with_messages(options.messages.clone())
            .run(provider)
        {
            Ok(selection) => selection,
            Err(SelectionError::Cancelled) => return Ok(BuildOutcome::Cancelled),
            Err(err) => return Err(err.into()),
        }
    };

    if selection.is_empty() {
        return Ok(BuildOutcome::NothingSelected);
    }

    let mode = match options.mode {
        Some(mode) => mode,
        None => match provider.confirm(&options.bundle_prompt, false) {
            Ok(true) => OutputMode::Bundle,
            Ok(false) => OutputMode::Separate,
            Err(SelectionError::Cancelled) => return Ok(BuildOutcome::Cancelled),
            Err(err) => return Err(err.into()),
        },
    };

    let files = output::generate(&selection, mode, &options.output_dir).await?;
    info!(files = files.len(), ?mode, "build finished");

    Ok(BuildOutcome::Generated {
        selection,
        mode,
        files,
    })
}
