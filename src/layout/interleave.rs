//! Base-sequence interleaving with repetition cooldown
//!
//! The base sequence is built by repeatedly draining whichever orientation
//! bucket holds the largest share of the images still to be placed. Tall and
//! wide buckets carry a two-pick cooldown so the same elongated shape never
//! dominates a stretch of the gallery; normal tiles have no cooldown. The
//! cooldown is a soft preference: when every option is blocked the largest
//! bucket is taken anyway, which guarantees termination.

use crate::layout::arranger::TileAssignment;
use crate::layout::classify::OrientationBuckets;
use crate::layout::geometry::TileSpan;
use std::collections::VecDeque;

/// Interleave the orientation buckets into the base sequence
///
/// Consumes the buckets and returns one assignment per bucketed image. The
/// relative order within a bucket is preserved (buckets arrive id-sorted).
pub fn interleave(buckets: OrientationBuckets) -> Vec<TileAssignment> {
    let capacity = buckets.len();
    let mut tall: VecDeque<_> = buckets.tall.into();
    let mut wide: VecDeque<_> = buckets.wide.into();
    let mut normal: VecDeque<_> = buckets.normal.into();

    let mut sequence = Vec::with_capacity(capacity);
    let mut previous: Option<TileSpan> = None;
    let mut before_previous: Option<TileSpan> = None;

    while tall.len() + wide.len() + normal.len() > 0 {
        let span = pick_bucket(
            tall.len(),
            wide.len(),
            normal.len(),
            previous,
            before_previous,
        );
        let image = match span {
            TileSpan::Tall => tall.pop_front(),
            TileSpan::Wide => wide.pop_front(),
            _ => normal.pop_front(),
        };
        let Some(image) = image else {
            // Unreachable: pick_bucket only returns non-empty buckets
            break;
        };
        sequence.push(TileAssignment { image, span });
        before_previous = previous;
        previous = Some(span);
    }

    sequence
}

/// Choose the bucket for the next pick
///
/// Non-empty buckets are ordered by remaining share, with normal preferred
/// over wide over tall on equal counts. The first bucket not blocked by the
/// cooldown wins; failing that, the first bucket that differs from the
/// immediately preceding pick; failing that, the largest share outright.
fn pick_bucket(
    tall_count: usize,
    wide_count: usize,
    normal_count: usize,
    previous: Option<TileSpan>,
    before_previous: Option<TileSpan>,
) -> TileSpan {
    let mut candidates: Vec<(TileSpan, usize)> = [
        (TileSpan::Normal, normal_count),
        (TileSpan::Wide, wide_count),
        (TileSpan::Tall, tall_count),
    ]
    .into_iter()
    .filter(|(_, count)| *count > 0)
    .collect();
    // Stable sort keeps the normal/wide/tall preference on equal counts
    candidates.sort_by(|a, b| b.1.cmp(&a.1));

    let blocked = |span: TileSpan| {
        span != TileSpan::Normal
            && (previous == Some(span) || before_previous == Some(span))
    };

    if let Some((span, _)) = candidates.iter().find(|(span, _)| !blocked(*span)) {
        return *span;
    }
    if let Some((span, _)) = candidates
        .iter()
        .find(|(span, _)| Some(*span) != previous)
    {
        return *span;
    }
    candidates
        .first()
        .map_or(TileSpan::Normal, |(span, _)| *span)
}
