//! Big-tile selection and orientation bucket classification
//!
//! Big tiles are chosen first: every image is ranked by how closely its
//! natural shape matches the 2×2 footprint, and the configured fraction of
//! the gallery is promoted to big, preferring good fits. The remaining
//! images are bucketed by the tile shape that fits each one best.

use crate::io::configuration::{PRIMARY_BIG_COST_THRESHOLD, RELAXED_BIG_COST_THRESHOLD};
use crate::layout::arranger::ImageDescriptor;
use crate::layout::geometry::{TileGeometry, TileSpan};
use crate::math::cost::aspect_cost;
use std::cmp::Ordering;
use std::collections::HashSet;

/// Images split into the three non-big orientation buckets
///
/// Each bucket is sorted by id so equal-cost galleries arrange identically
/// from one call to the next.
#[derive(Clone, Debug, Default)]
pub struct OrientationBuckets {
    /// Best fit for the 1×2 footprint
    pub tall: Vec<ImageDescriptor>,
    /// Best fit for the 2×1 footprint
    pub wide: Vec<ImageDescriptor>,
    /// Best fit for the 1×1 footprint, including all unknown-dimension images
    pub normal: Vec<ImageDescriptor>,
}

impl OrientationBuckets {
    /// Total number of bucketed images
    pub fn len(&self) -> usize {
        self.tall.len() + self.wide.len() + self.normal.len()
    }

    /// Whether every bucket is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Rank candidates and pick the images to render as big tiles
///
/// Ranking is by ascending big-tile cost, ties broken by larger pixel area
/// and then id order. Up to `round(n × big_fraction)` images are taken from
/// within the primary cost threshold; when none qualify the single best
/// candidate is forced so a configured gallery always gets one big tile, and
/// any shortfall is filled from the relaxed threshold. The returned indices
/// are sorted by image id, which fixes the insertion order downstream.
pub fn select_big_indices(
    images: &[ImageDescriptor],
    geometry: &TileGeometry,
    big_fraction: f64,
) -> Vec<usize> {
    let target = (images.len() as f64 * big_fraction).round() as usize;
    if target == 0 || images.is_empty() {
        return Vec::new();
    }

    let mut ranked: Vec<(usize, f64)> = images
        .iter()
        .enumerate()
        .map(|(index, image)| (index, aspect_cost(image.aspect_ratio(), geometry.big)))
        .collect();
    ranked.sort_by(|a, b| compare_candidates(images, *a, *b));

    let mut chosen: Vec<usize> = ranked
        .iter()
        .take_while(|(_, cost)| *cost <= PRIMARY_BIG_COST_THRESHOLD)
        .take(target)
        .map(|(index, _)| *index)
        .collect();

    // A gallery configured for big tiles always gets at least one
    if chosen.is_empty() {
        if let Some((best, _)) = ranked.first() {
            chosen.push(*best);
        }
    }

    if chosen.len() < target {
        let already: HashSet<usize> = chosen.iter().copied().collect();
        let fill = ranked
            .iter()
            .filter(|(index, cost)| {
                !already.contains(index) && *cost <= RELAXED_BIG_COST_THRESHOLD
            })
            .take(target - chosen.len())
            .map(|(index, _)| *index);
        chosen.extend(fill);
    }

    chosen.sort_by(|a, b| id_of(images, *a).cmp(id_of(images, *b)));
    chosen
}

/// Bucket every non-big image by its best-fitting footprint
///
/// Costs are evaluated against the normal, wide, and tall ratios in that
/// order with a strict improvement test, so normal wins exact ties and wide
/// wins a wide/tall tie.
pub fn classify_remaining(
    images: &[ImageDescriptor],
    big_indices: &[usize],
    geometry: &TileGeometry,
) -> OrientationBuckets {
    let big: HashSet<usize> = big_indices.iter().copied().collect();
    let mut buckets = OrientationBuckets::default();

    for (index, image) in images.iter().enumerate() {
        if big.contains(&index) {
            continue;
        }
        let ratio = image.aspect_ratio();
        let mut best_span = TileSpan::Normal;
        let mut best_cost = aspect_cost(ratio, geometry.normal);
        for span in [TileSpan::Wide, TileSpan::Tall] {
            let cost = aspect_cost(ratio, geometry.ratio_for(span));
            if cost < best_cost {
                best_span = span;
                best_cost = cost;
            }
        }
        match best_span {
            TileSpan::Tall => buckets.tall.push(image.clone()),
            TileSpan::Wide => buckets.wide.push(image.clone()),
            _ => buckets.normal.push(image.clone()),
        }
    }

    buckets.tall.sort_by(|a, b| a.id.cmp(&b.id));
    buckets.wide.sort_by(|a, b| a.id.cmp(&b.id));
    buckets.normal.sort_by(|a, b| a.id.cmp(&b.id));
    buckets
}

fn compare_candidates(
    images: &[ImageDescriptor],
    a: (usize, f64),
    b: (usize, f64),
) -> Ordering {
    a.1.partial_cmp(&b.1)
        .unwrap_or(Ordering::Equal)
        .then_with(|| area_of(images, b.0).cmp(&area_of(images, a.0)))
        .then_with(|| id_of(images, a.0).cmp(id_of(images, b.0)))
}

fn area_of(images: &[ImageDescriptor], index: usize) -> u64 {
    images.get(index).map_or(0, ImageDescriptor::area)
}

fn id_of(images: &[ImageDescriptor], index: usize) -> &str {
    images.get(index).map_or("", |image| image.id.as_str())
}
