//! Output generation
//!
//! This module provides:
//! - Separate mode: one file per selected component, named `slug-<id>.<type>`
//! - Bundle mode: one `bundle.<type>` file per type with a comment header per chunk
//! - The slug routine used for file names

pub mod generator;
pub mod slug;

pub use generator::{
    bundle_file_name, bundle_header, generate, separate_file_name, GeneratedFile, OutputMode,
};
pub use slug::slugify;
