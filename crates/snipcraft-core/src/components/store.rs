//! Loading components from a directory of JSON files

use super::model::{Component, ComponentRecord};
use crate::error::StoreError;
use std::path::Path;
use tokio::fs;
use tracing::debug;
use walkdir::WalkDir;

/// Extension of component files
pub const COMPONENT_EXTENSION: &str = "json";

/// Load every component in `dir`, in file-name order.
///
/// Any unreadable or malformed file aborts the whole load.
pub async fn load(dir: &Path) -> Result<Vec<Component>, StoreError> {
    if !dir.is_dir() {
        return Err(StoreError::NotFound(dir.to_path_buf()));
    }

    let files = component_files(dir)?;
    if files.is_empty() {
        return Err(StoreError::EmptyStore(dir.to_path_buf()));
    }

    let mut components = Vec::with_capacity(files.len());
    for path in files {
        let file = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let content = fs::read_to_string(&path)
            .await
            .map_err(|source| StoreError::Io {
                path: path.clone(),
                source,
            })?;

        let record: ComponentRecord =
            serde_json::from_str(&content).map_err(|source| StoreError::Parse {
                file: file.clone(),
                source,
            })?;

        let component =
            Component::from_record(record, file.clone()).ok_or_else(|| StoreError::Invalid {
                file: file.clone(),
                reason: "field `type` must not be empty".to_string(),
            })?;

        debug!(file = %file, kind = %component.kind, "loaded component");
        components.push(component);
    }

    Ok(components)
}

/// Component files directly inside `dir`, sorted by file name
fn component_files(dir: &Path) -> Result<Vec<std::path::PathBuf>, StoreError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|err| StoreError::Io {
            path: err
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| dir.to_path_buf()),
            source: err.into(),
        })?;

        if entry.file_type().is_file() && has_component_extension(entry.path()) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

fn has_component_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(COMPONENT_EXTENSION))
}

/// Whether `dir` already holds at least one component file
pub fn has_components(dir: &Path) -> bool {
    dir.is_dir() && component_files(dir).is_ok_and(|files| !files.is_empty())
}
