//! Snipcraft Core - pick JSON-described code snippets and write them out
//!
//! Components are read from a directory with one JSON object per file, narrowed
//! down through a three-stage interactive selection, and written to an output
//! directory either as one file per component or as one bundle per type.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - component store, taxonomy, output generation
//! - **Layer 2: Workflow Orchestration** - `SelectionFlow` driven by a `ChoiceProvider`,
//!   and the `pipeline::build` run that ties the stages together
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based terminal provider and command runners
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use snipcraft_core::selection::{Answer, ScriptedProvider};
//! use snipcraft_core::pipeline::{build, BuildOptions};
//! use snipcraft_core::OutputMode;
//!
//! let mut provider = ScriptedProvider::new([Answer::Defaults, Answer::labels(["Card"])]);
//! let mut options = BuildOptions::new("components", "dist");
//! options.mode = Some(OutputMode::Bundle);
//! let outcome = build(&options, &mut provider).await?;
//! ```

pub mod components;
pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod project;
pub mod selection;
pub mod taxonomy;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use components::{Component, SelectedComponent};
pub use error::{BuildError, ConfigError, GenerateError, InitError, SelectionError, StoreError};
pub use output::{generate, GeneratedFile, OutputMode};
pub use selection::{ChoiceProvider, SelectionFlow};
