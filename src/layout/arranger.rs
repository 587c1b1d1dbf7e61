//! Public arrangement entry point and its input/output types
//!
//! `arrange` is a pure function: the same images and configuration always
//! produce the same ordered sequence of tile assignments. It performs no
//! I/O, never fails, and recomputes the full arrangement on every call;
//! callers coalesce resize-driven re-runs through
//! [`crate::layout::viewport::GalleryViewState`].

use crate::io::configuration::DEFAULT_BIG_FRACTION;
use crate::layout::classify::{classify_remaining, select_big_indices};
use crate::layout::geometry::{TileGeometry, TileSpan};
use crate::layout::interleave::interleave;
use crate::layout::placement::insert_big_tiles;
use crate::math::cost::UNKNOWN_ASPECT_RATIO;

/// A gallery image as seen by the arranger
///
/// The id doubles as the deterministic tie-break key; callers guarantee it
/// is unique (case-insensitively) within one arrangement. A zero width or
/// height marks the dimensions as unknown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageDescriptor {
    /// Opaque identifier, typically the source path or filename
    pub id: String,
    /// Pixel width, 0 when unknown
    pub width: u32,
    /// Pixel height, 0 when unknown
    pub height: u32,
}

impl ImageDescriptor {
    /// Create a descriptor with known pixel dimensions
    pub fn new(id: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            id: id.into(),
            width,
            height,
        }
    }

    /// Create a descriptor whose dimensions have not been measured yet
    pub fn unmeasured(id: impl Into<String>) -> Self {
        Self::new(id, 0, 0)
    }

    /// Natural width-over-height ratio, square when dimensions are unknown
    pub fn aspect_ratio(&self) -> f64 {
        if self.width > 0 && self.height > 0 {
            f64::from(self.width) / f64::from(self.height)
        } else {
            UNKNOWN_ASPECT_RATIO
        }
    }

    /// Pixel area, zero when dimensions are unknown
    pub const fn area(&self) -> u64 {
        (self.width as u64) * (self.height as u64)
    }
}

/// One image bound to the tile shape it will render as
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileAssignment {
    /// The originating image
    pub image: ImageDescriptor,
    /// The grid footprint assigned to it
    pub span: TileSpan,
}

/// Tunable arrangement parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrangementConfig {
    /// Effective tile aspect ratios at the current layout
    pub geometry: TileGeometry,
    /// Target fraction of images rendered as big tiles
    pub big_fraction: f64,
    /// Approximate grid column count, used for column-stacking avoidance
    pub columns: usize,
}

impl ArrangementConfig {
    /// Big fraction clamped into `[0, 1]`, defaulted when non-finite
    ///
    /// Out-of-range values are a caller bug, but the arrangement degrades
    /// gracefully instead of panicking.
    pub fn effective_big_fraction(&self) -> f64 {
        if self.big_fraction.is_finite() {
            self.big_fraction.clamp(0.0, 1.0)
        } else {
            DEFAULT_BIG_FRACTION
        }
    }
}

impl Default for ArrangementConfig {
    fn default() -> Self {
        Self {
            geometry: TileGeometry::FALLBACK,
            big_fraction: DEFAULT_BIG_FRACTION,
            columns: 1,
        }
    }
}

/// Arrange gallery images into an ordered sequence of tile assignments
///
/// Every input image appears in the output exactly once. Big tiles are
/// selected first by fit against the 2×2 footprint, the remainder are
/// bucketed by best-fitting shape and interleaved under the repetition
/// cooldown, and the big tiles are then inserted at evenly spaced positions.
pub fn arrange(images: &[ImageDescriptor], config: &ArrangementConfig) -> Vec<TileAssignment> {
    if images.is_empty() {
        return Vec::new();
    }

    let big_indices = select_big_indices(
        images,
        &config.geometry,
        config.effective_big_fraction(),
    );
    let buckets = classify_remaining(images, &big_indices, &config.geometry);
    let base = interleave(buckets);

    let big: Vec<ImageDescriptor> = big_indices
        .iter()
        .filter_map(|index| images.get(*index).cloned())
        .collect();
    insert_big_tiles(base, big, config.columns.max(1))
}
