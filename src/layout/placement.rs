//! Evenly spaced insertion of big tiles into the base sequence
//!
//! The i-th of `n` big tiles targets position `round(i × len / (n + 1)) − 1`
//! in the final sequence, so big tiles sit at roughly even intervals with
//! breathing room at both ends. A minimum gap keeps two big tiles from
//! crowding each other, and a bounded nudge steers consecutive big tiles out
//! of the same visual column. Insertions proceed in ascending position, so
//! each insertion index equals the tile's final position.

use crate::io::configuration::{MAX_COLUMN_NUDGE_ATTEMPTS, MIN_BIG_TILE_GAP};
use crate::layout::arranger::{ImageDescriptor, TileAssignment};
use crate::layout::geometry::TileSpan;

/// Insert the selected big tiles into the interleaved base sequence
///
/// `columns` is the approximate grid column count at the current viewport
/// width; with more than one column it drives the same-column avoidance
/// heuristic. The returned sequence contains every base assignment plus one
/// big assignment per selected image.
pub fn insert_big_tiles(
    mut sequence: Vec<TileAssignment>,
    big: Vec<ImageDescriptor>,
    columns: usize,
) -> Vec<TileAssignment> {
    let n_big = big.len();
    if n_big == 0 {
        return sequence;
    }

    let final_len = sequence.len() + n_big;
    let spacing = final_len as f64 / (n_big + 1) as f64;
    let min_gap = MIN_BIG_TILE_GAP.max((final_len / (n_big + 1)).saturating_sub(1));

    let mut last_position: Option<usize> = None;
    for (i, image) in big.into_iter().enumerate() {
        let target = (((i + 1) as f64) * spacing).round() as usize;
        let mut position = target.saturating_sub(1);
        if let Some(last) = last_position {
            position = position.max(last + min_gap);
        }
        position = position.min(sequence.len());

        if columns > 1 {
            if let Some(last) = last_position {
                if position % columns == last % columns {
                    position = nudge_out_of_column(position, last, min_gap, columns, sequence.len());
                }
            }
        }

        sequence.insert(
            position,
            TileAssignment {
                image,
                span: TileSpan::Big,
            },
        );
        last_position = Some(position);
    }

    sequence
}

/// Shift an insertion point off the previous big tile's column bucket
///
/// Tries forward first, then backward, at most `min(columns, 6)` steps each
/// way. Backward candidates never violate the minimum gap. When no candidate
/// escapes the column the original position stands; the avoidance is
/// best-effort only.
fn nudge_out_of_column(
    position: usize,
    last_position: usize,
    min_gap: usize,
    columns: usize,
    sequence_len: usize,
) -> usize {
    let attempts = columns.min(MAX_COLUMN_NUDGE_ATTEMPTS);
    let last_column = last_position % columns;

    for step in 1..=attempts {
        let candidate = position + step;
        if candidate <= sequence_len && candidate % columns != last_column {
            return candidate;
        }
    }

    let gap_floor = last_position + min_gap;
    for step in 1..=attempts {
        let Some(candidate) = position.checked_sub(step) else {
            break;
        };
        if candidate >= gap_floor && candidate % columns != last_column {
            return candidate;
        }
    }

    position
}
