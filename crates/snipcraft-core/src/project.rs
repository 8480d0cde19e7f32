//! Project layout: the components and output directories

use crate::components::{has_components, ComponentRecord};
use crate::error::InitError;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Default directory holding component files
pub const COMPONENTS_DIR: &str = "components";

/// Default directory generated files are written to
pub const OUTPUT_DIR: &str = "dist";

/// File name of the sample component written by `init --with-sample`
pub const SAMPLE_FILE: &str = "example-button.json";

/// What `init` did for one path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirStatus {
    Created,
    AlreadyExists,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitReport {
    pub components: (PathBuf, DirStatus),
    pub output: (PathBuf, DirStatus),
    /// Set when a sample component was written
    pub sample: Option<PathBuf>,
}

/// Ensure both directories exist without touching existing content
pub async fn init(
    components_dir: &Path,
    output_dir: &Path,
    with_sample: bool,
) -> Result<InitReport, InitError> {
    let components = ensure_dir(components_dir).await?;
    let output = ensure_dir(output_dir).await?;

    let sample = if with_sample && !has_components(components_dir) {
        Some(write_sample(components_dir).await?)
    } else {
        None
    };

    Ok(InitReport {
        components: (components_dir.to_path_buf(), components),
        output: (output_dir.to_path_buf(), output),
        sample,
    })
}

async fn ensure_dir(path: &Path) -> Result<DirStatus, InitError> {
    if path.is_dir() {
        return Ok(DirStatus::AlreadyExists);
    }

    fs::create_dir_all(path)
        .await
        .map_err(|source| InitError {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(DirStatus::Created)
}

async fn write_sample(components_dir: &Path) -> Result<PathBuf, InitError> {
    let path = components_dir.join(SAMPLE_FILE);
    if path.exists() {
        return Ok(path);
    }

    let record = ComponentRecord {
        title: "Example Button".to_string(),
        description: "A basic button to start from".to_string(),
        kind: "html".to_string(),
        group: Some("buttons".to_string()),
        content: "<button class=\"btn\">Click me</button>\n".to_string(),
    };
    let body = serde_json::to_string_pretty(&record).map_err(|err| InitError {
        path: path.clone(),
        source: err.into(),
    })?;

    fs::write(&path, body)
        .await
        .map_err(|source| InitError {
            path: path.clone(),
            source,
        })?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components;
    use std::fs as stdfs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_init_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let comps = tmp.path().join(COMPONENTS_DIR);
        let dist = tmp.path().join(OUTPUT_DIR);

        let first = init(&comps, &dist, false).await.unwrap();
        assert_eq!(first.components.1, DirStatus::Created);
        assert_eq!(first.output.1, DirStatus::Created);

        stdfs::write(comps.join("keep.json"), "{}").unwrap();
        stdfs::write(dist.join("bundle.css"), "keep").unwrap();

        let second = init(&comps, &dist, false).await.unwrap();
        assert_eq!(second.components.1, DirStatus::AlreadyExists);
        assert_eq!(second.output.1, DirStatus::AlreadyExists);
        assert_eq!(stdfs::read_to_string(comps.join("keep.json")).unwrap(), "{}");
        assert_eq!(stdfs::read_to_string(dist.join("bundle.css")).unwrap(), "keep");
    }

    #[tokio::test]
    async fn test_sample_is_loadable() {
        let tmp = TempDir::new().unwrap();
        let comps = tmp.path().join(COMPONENTS_DIR);
        let dist = tmp.path().join(OUTPUT_DIR);

        let report = init(&comps, &dist, true).await.unwrap();
        assert_eq!(report.sample, Some(comps.join(SAMPLE_FILE)));

        let loaded = components::load(&comps).await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].group.as_deref(), Some("buttons"));
    }

    #[tokio::test]
    async fn test_sample_skipped_when_components_exist() {
        let tmp = TempDir::new().unwrap();
        let comps = tmp.path().join(COMPONENTS_DIR);
        stdfs::create_dir_all(&comps).unwrap();
        stdfs::write(comps.join("mine.json"), "{}").unwrap();

        let report = init(&comps, &tmp.path().join(OUTPUT_DIR), true)
            .await
            .unwrap();
        assert!(report.sample.is_none());
        assert!(!comps.join(SAMPLE_FILE).exists());
    }
}
