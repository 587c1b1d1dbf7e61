//! Logarithmic aspect-ratio distance
//!
//! Fit quality between an image and a tile shape is ranked by distance in
//! log-aspect-ratio space. The measure is symmetric and scale-invariant: a
//! 2:1 image and a 1:2 image are equally poor fits for a square tile.

/// Aspect ratio assigned when dimensions are unknown or degenerate
pub const UNKNOWN_ASPECT_RATIO: f64 = 1.0;

/// Clamp an aspect ratio to a usable value
///
/// Non-finite and non-positive ratios arise from missing or malformed
/// dimensions; they are normalised to square rather than rejected.
pub fn normalize_aspect_ratio(ratio: f64) -> f64 {
    if ratio.is_finite() && ratio > 0.0 {
        ratio
    } else {
        UNKNOWN_ASPECT_RATIO
    }
}

/// Distance between two aspect ratios in log space
///
/// Computes `|ln(image_ratio / tile_ratio)|` after normalising both inputs.
/// Zero means a perfect fit; larger values mean the image would be cropped
/// or letterboxed more aggressively by that tile shape.
pub fn aspect_cost(image_ratio: f64, tile_ratio: f64) -> f64 {
    let image_ratio = normalize_aspect_ratio(image_ratio);
    let tile_ratio = normalize_aspect_ratio(tile_ratio);
    (image_ratio / tile_ratio).ln().abs()
}
