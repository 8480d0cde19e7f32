//! Error types for the core pipeline

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures while loading the component store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Components directory not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("No component files (*.json) found in {}", .0.display())]
    EmptyStore(PathBuf),

    #[error("Failed to parse component {file}: {source}")]
    Parse {
        file: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid component {file}: {reason}")]
    Invalid { file: String, reason: String },

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failures raised while driving the interactive selection
#[derive(Debug, Error)]
pub enum SelectionError {
    /// The user aborted a prompt
    #[error("Selection cancelled")]
    Cancelled,

    #[error("Prompt failed: {0}")]
    Prompt(#[source] std::io::Error),

    /// The provider answered with something the prompt cannot accept
    #[error("Invalid answer: {0}")]
    InvalidAnswer(String),
}

impl From<std::io::Error> for SelectionError {
    fn from(err: std::io::Error) -> Self {
        // cliclack reports Esc / Ctrl+C as an interrupted read
        if err.kind() == std::io::ErrorKind::Interrupted {
            SelectionError::Cancelled
        } else {
            SelectionError::Prompt(err)
        }
    }
}

/// Failures while writing generated files
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Failed to create output directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GenerateError {
    /// Path of the file or directory that failed
    pub fn path(&self) -> &Path {
        match self {
            GenerateError::CreateDir { path, .. } | GenerateError::Write { path, .. } => path,
        }
    }
}

/// Failures while preparing the project layout
#[derive(Debug, Error)]
#[error("Failed to create {}: {source}", .path.display())]
pub struct InitError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Failures while resolving the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Failures of a whole build run
#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Generate(#[from] GenerateError),
}
