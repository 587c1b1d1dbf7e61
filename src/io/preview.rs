//! Arrangement preview rendering as a PNG proof sheet
//!
//! The real renderer is a browser grid, which makes arrangements awkward to
//! inspect during tuning. This module stands in for it: tiles are placed
//! first-fit into a fixed-column occupancy grid and drawn as solid-colour
//! blocks, one colour per span, so the distribution and spacing of shapes
//! can be judged at a glance.

use crate::io::error::{GalleryError, Result, invalid_parameter, invalid_source_data};
use crate::layout::arranger::TileAssignment;
use crate::layout::geometry::TileSpan;
use image::{ImageBuffer, Rgba, RgbaImage};
use ndarray::Array2;
use std::path::Path;

// Fill colours, one per span, chosen for contrast between the four shapes
const NORMAL_COLOR: [u8; 4] = [96, 125, 139, 255];
const WIDE_COLOR: [u8; 4] = [38, 166, 154, 255];
const TALL_COLOR: [u8; 4] = [121, 134, 203, 255];
const BIG_COLOR: [u8; 4] = [255, 179, 0, 255];
const BACKGROUND_COLOR: [u8; 4] = [33, 33, 33, 255];

/// A tile resolved to a concrete cell position in the preview grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlacedTile {
    /// Leftmost grid column occupied
    pub column: usize,
    /// Topmost grid row occupied
    pub row: usize,
    /// The footprint being drawn
    pub span: TileSpan,
}

/// Place assignments into a fixed-column grid, first fit from the top
///
/// Mirrors a dense grid flow: each tile takes the topmost, leftmost free
/// region large enough for its footprint. Footprints wider than the grid are
/// narrowed to fit, so single-column previews still render wide and big
/// tiles (as 1×1 and 1×2 respectively).
pub fn place_tiles(assignments: &[TileAssignment], columns: usize) -> Vec<PlacedTile> {
    let columns = columns.max(1);
    // Upper bound: every tile on its own pair of rows
    let max_rows = 2 * assignments.len() + 2;
    let mut occupied = Array2::<bool>::from_elem((max_rows, columns), false);

    let mut placed = Vec::with_capacity(assignments.len());
    for assignment in assignments {
        let width = assignment.span.columns().min(columns);
        let height = assignment.span.rows();

        let slot = find_free_region(&occupied, max_rows, columns, width, height);
        let Some((row, column)) = slot else {
            // Unreachable with the row bound above, but never drop a tile
            continue;
        };

        for r in row..row + height {
            for c in column..column + width {
                if let Some(cell) = occupied.get_mut((r, c)) {
                    *cell = true;
                }
            }
        }
        placed.push(PlacedTile {
            column,
            row,
            span: assignment.span,
        });
    }

    placed
}

/// Number of grid rows the placed tiles occupy
pub fn grid_rows(placed: &[PlacedTile]) -> usize {
    placed
        .iter()
        .map(|tile| tile.row + tile.span.rows())
        .max()
        .unwrap_or(0)
}

fn find_free_region(
    occupied: &Array2<bool>,
    max_rows: usize,
    columns: usize,
    width: usize,
    height: usize,
) -> Option<(usize, usize)> {
    for row in 0..max_rows.saturating_sub(height - 1) {
        for column in 0..=(columns.saturating_sub(width)) {
            let free = (row..row + height).all(|r| {
                (column..column + width)
                    .all(|c| !occupied.get((r, c)).copied().unwrap_or(true))
            });
            if free {
                return Some((row, column));
            }
        }
    }
    None
}

/// Render an arrangement to an RGBA image
///
/// # Errors
///
/// Returns an error if the arrangement is empty or `cell_px` is zero.
pub fn render_preview(
    assignments: &[TileAssignment],
    columns: usize,
    cell_px: u32,
    gap_px: u32,
) -> Result<RgbaImage> {
    if assignments.is_empty() {
        return Err(invalid_source_data(&"no tiles to preview"));
    }
    if cell_px == 0 {
        return Err(invalid_parameter(
            "cell_px",
            &cell_px,
            &"preview cells must be at least one pixel",
        ));
    }

    let columns = columns.max(1);
    let placed = place_tiles(assignments, columns);
    let rows = grid_rows(&placed).max(1) as u32;
    let columns_u32 = columns as u32;

    let width = columns_u32 * cell_px + (columns_u32 + 1) * gap_px;
    let height = (rows * cell_px) + (rows + 1) * gap_px;
    let mut img = ImageBuffer::from_pixel(width, height, Rgba(BACKGROUND_COLOR));

    for tile in &placed {
        let span_cols = (tile.span.columns().min(columns)) as u32;
        let span_rows = tile.span.rows() as u32;
        let x0 = (tile.column as u32) * (cell_px + gap_px) + gap_px;
        let y0 = (tile.row as u32) * (cell_px + gap_px) + gap_px;
        let tile_width = span_cols * cell_px + (span_cols - 1) * gap_px;
        let tile_height = span_rows * cell_px + (span_rows - 1) * gap_px;
        let color = Rgba(span_color(tile.span));

        for y in y0..(y0 + tile_height).min(height) {
            for x in x0..(x0 + tile_width).min(width) {
                img.put_pixel(x, y, color);
            }
        }
    }

    Ok(img)
}

/// Export an arrangement preview as a PNG file
///
/// # Errors
///
/// Returns an error if:
/// - The arrangement is empty or the cell size is zero
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_preview_png(
    assignments: &[TileAssignment],
    columns: usize,
    cell_px: u32,
    gap_px: u32,
    output_path: &Path,
) -> Result<()> {
    let img = render_preview(assignments, columns, cell_px, gap_px)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| GalleryError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path).map_err(|e| GalleryError::PreviewExport {
        path: output_path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

const fn span_color(span: TileSpan) -> [u8; 4] {
    match span {
        TileSpan::Normal => NORMAL_COLOR,
        TileSpan::Wide => WIDE_COLOR,
        TileSpan::Tall => TALL_COLOR,
        TileSpan::Big => BIG_COLOR,
    }
}
