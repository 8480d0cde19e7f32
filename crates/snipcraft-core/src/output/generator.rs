//! Writing a selection to the output directory

use super::slug::slugify;
use crate::components::SelectedComponent;
use crate::error::GenerateError;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Base name used when a title slugs to nothing
const FALLBACK_STEM: &str = "component";

/// How selected components are laid out on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// One file per selected component
    Separate,
    /// One `bundle.<type>` file per type
    Bundle,
}

/// A file written by [`generate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub bytes: usize,
    /// Number of selected components written into this file
    pub components: usize,
}

/// Write `selection` into `output_dir`, overwriting files with the same name.
///
/// Writes are sequential; the first failure stops the run and files written
/// before it stay on disk.
pub async fn generate(
    selection: &[SelectedComponent],
    mode: OutputMode,
    output_dir: &Path,
) -> Result<Vec<GeneratedFile>, GenerateError> {
    fs::create_dir_all(output_dir)
        .await
        .map_err(|source| GenerateError::CreateDir {
            path: output_dir.to_path_buf(),
            source,
        })?;

    let planned = match mode {
        OutputMode::Separate => plan_separate(selection),
        OutputMode::Bundle => plan_bundles(selection),
    };

    let mut written = Vec::with_capacity(planned.len());
    for file in planned {
        let path = output_dir.join(&file.name);
        fs::write(&path, file.content.as_bytes())
            .await
            .map_err(|source| GenerateError::Write {
                path: path.clone(),
                source,
            })?;

        debug!(path = %path.display(), components = file.components, "wrote file");
        written.push(GeneratedFile {
            path,
            bytes: file.content.len(),
            components: file.components,
        });
    }

    Ok(written)
}

/// A file to write, before it touches the disk
#[derive(Debug, Clone, PartialEq, Eq)]
struct PlannedFile {
    name: String,
    content: String,
    components: usize,
}

/// `slug(title)-<sequence_id>.<type>`
pub fn separate_file_name(item: &SelectedComponent) -> String {
    let slug = slugify(&item.component.title);
    let stem = if slug.is_empty() {
        FALLBACK_STEM
    } else {
        slug.as_str()
    };
    format!("{}-{}.{}", stem, item.sequence_id, item.component.kind)
}

pub fn bundle_file_name(kind: &str) -> String {
    format!("bundle.{kind}")
}

/// `/* <title> - <description> (ID: <sequence_id>) */`
pub fn bundle_header(item: &SelectedComponent) -> String {
    format!(
        "/* {} - {} (ID: {}) */",
        item.component.title, item.component.description, item.sequence_id
    )
}

fn plan_separate(selection: &[SelectedComponent]) -> Vec<PlannedFile> {
    selection
        .iter()
        .map(|item| PlannedFile {
            name: separate_file_name(item),
            content: item.component.content.clone(),
            components: 1,
        })
        .collect()
}

fn plan_bundles(selection: &[SelectedComponent]) -> Vec<PlannedFile> {
    // Types in order of first occurrence
    let mut by_type: Vec<(&str, Vec<&SelectedComponent>)> = Vec::new();
    for item in selection {
        let kind = item.component.kind.as_str();
        match by_type.iter_mut().find(|(k, _)| *k == kind) {
            Some((_, items)) => items.push(item),
            None => by_type.push((kind, vec![item])),
        }
    }

    by_type
        .into_iter()
        .map(|(kind, items)| PlannedFile {
            name: bundle_file_name(kind),
            content: items
                .iter()
                .map(|item| format!("{}\n{}", bundle_header(item), item.component.content))
                .collect::<Vec<_>>()
                .join("\n\n"),
            components: items.len(),
        })
        .collect()
}
