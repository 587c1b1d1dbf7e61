//! Image dimension probing via file headers
//!
//! Fills in the width/height metadata the arranger wants without decoding
//! pixel data. Probing follows the gallery's fallback-and-continue
//! philosophy: a file that cannot be read yields a [`ImageLoadResult::Failed`]
//! for the caller to act on, never an aborted run.

use std::path::Path;

/// Outcome of loading or probing one gallery image
///
/// Replaces error callbacks that mutate shared arrays: the collaborator
/// reports per-image outcomes and the view state decides what to drop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageLoadResult {
    /// Dimensions were measured successfully
    Loaded {
        /// Pixel width
        width: u32,
        /// Pixel height
        height: u32,
    },
    /// The image could not be read or decoded
    Failed {
        /// Human-readable failure description
        reason: String,
    },
}

impl ImageLoadResult {
    /// Measured dimensions, if the load succeeded
    pub const fn dimensions(&self) -> Option<(u32, u32)> {
        match self {
            Self::Loaded { width, height } => Some((*width, *height)),
            Self::Failed { .. } => None,
        }
    }
}

/// Read an image's dimensions from its header
///
/// Decodes only as much of the file as the format needs to state its size.
/// Zero-sized results are reported as failures so a corrupt header cannot
/// smuggle degenerate dimensions into the arrangement.
pub fn probe_dimensions(path: &Path) -> ImageLoadResult {
    match image::image_dimensions(path) {
        Ok((width, height)) if width > 0 && height > 0 => {
            ImageLoadResult::Loaded { width, height }
        }
        Ok(_) => ImageLoadResult::Failed {
            reason: "image reports zero width or height".to_string(),
        },
        Err(err) => ImageLoadResult::Failed {
            reason: err.to_string(),
        },
    }
}
