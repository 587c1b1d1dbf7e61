//! Aspect-ratio driven tile arrangement for masonry image galleries
//!
//! The system classifies gallery images by how well their natural proportions
//! fit each tile shape, interleaves the result to avoid monotonous sequences,
//! and spaces the large tiles evenly through the run. A manifest pipeline
//! keeps per-project image manifests in sync with the files on disk.

#![forbid(unsafe_code)]

/// Input/output operations, manifest processing, and error handling
pub mod io;
/// Tile classification, interleaving, and arrangement
pub mod layout;
/// Gallery manifest schema and disk synchronisation
pub mod manifest;
/// Mathematical utilities for aspect-ratio fitting
pub mod math;

pub use io::error::{GalleryError, Result};
