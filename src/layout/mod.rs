//! Tile classification, interleaving, and arrangement
//!
//! This module contains the layout pipeline:
//! - Tile shapes and effective grid geometry
//! - Big-tile selection and orientation bucketing
//! - Base-sequence interleaving with repetition cooldown
//! - Evenly spaced big-tile insertion
//! - The public arrangement entry point and gallery view state

/// Public arrangement entry point and its input/output types
pub mod arranger;
/// Big-tile selection and orientation bucket classification
pub mod classify;
/// Tile shapes and effective grid-cell geometry
pub mod geometry;
/// Base-sequence interleaving with repetition cooldown
pub mod interleave;
/// Evenly spaced insertion of big tiles into the base sequence
pub mod placement;
/// Explicit gallery view state and resize coalescing policy
pub mod viewport;

pub use arranger::{ArrangementConfig, ImageDescriptor, TileAssignment, arrange};
pub use geometry::{TileGeometry, TileSpan};
