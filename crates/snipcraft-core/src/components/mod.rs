//! Component records and the directory-backed component store
//!
//! This module provides:
//! - The on-disk record shape and the normalized `Component`
//! - `SelectedComponent`, a component tagged with its per-run sequence id
//! - Loading a components directory (one JSON object per file)

pub mod model;
pub mod store;

pub use model::{Component, ComponentRecord, SelectedComponent};
pub use store::{has_components, load, COMPONENT_EXTENSION};
