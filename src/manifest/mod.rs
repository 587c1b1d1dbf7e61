//! Gallery manifest schema and disk synchronisation
//!
//! Each project directory carries a `manifest.json` describing its gallery
//! images. The schema mirrors what the site renderer consumes; the loader
//! keeps the document in step with the files actually on disk.

/// Manifest reading, writing, and directory synchronisation
pub mod loader;
/// Manifest document types
pub mod schema;

pub use schema::{Manifest, ManifestImage};
