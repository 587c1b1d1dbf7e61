//! Tests for preview grid placement and PNG export

#[cfg(test)]
mod tests {
    use tilemason::io::preview::{PlacedTile, export_preview_png, grid_rows, place_tiles, render_preview};
    use tilemason::layout::arranger::{ImageDescriptor, TileAssignment};
    use tilemason::layout::geometry::TileSpan;

    fn assignments(spans: &[TileSpan]) -> Vec<TileAssignment> {
        spans
            .iter()
            .enumerate()
            .map(|(i, span)| TileAssignment {
                image: ImageDescriptor::new(format!("img{i:02}"), 100, 100),
                span: *span,
            })
            .collect()
    }

    // Tests first-fit placement into a three-column grid
    // Verified by hand: the wide tile needs two adjacent columns and drops
    // to the next row when only column 2 is free
    #[test]
    fn test_first_fit_placement() {
        let tiles = assignments(&[TileSpan::Normal, TileSpan::Normal, TileSpan::Wide]);
        let placed = place_tiles(&tiles, 3);
        assert_eq!(
            placed,
            vec![
                PlacedTile { column: 0, row: 0, span: TileSpan::Normal },
                PlacedTile { column: 1, row: 0, span: TileSpan::Normal },
                PlacedTile { column: 0, row: 1, span: TileSpan::Wide },
            ]
        );
        assert_eq!(grid_rows(&placed), 2);
    }

    // Tests that a tall tile blocks the cell beneath it
    #[test]
    fn test_tall_tile_occupies_two_rows() {
        let tiles = assignments(&[TileSpan::Tall, TileSpan::Normal, TileSpan::Normal]);
        let placed = place_tiles(&tiles, 2);
        assert_eq!(
            placed,
            vec![
                PlacedTile { column: 0, row: 0, span: TileSpan::Tall },
                PlacedTile { column: 1, row: 0, span: TileSpan::Normal },
                PlacedTile { column: 1, row: 1, span: TileSpan::Normal },
            ]
        );
    }

    // Tests footprint narrowing in a single-column preview
    #[test]
    fn test_wide_tiles_narrow_to_fit() {
        let tiles = assignments(&[TileSpan::Wide, TileSpan::Big]);
        let placed = place_tiles(&tiles, 1);
        assert_eq!(placed.len(), 2);
        // The big tile keeps its two rows but shrinks to one column
        assert_eq!(
            placed.get(1),
            Some(&PlacedTile { column: 0, row: 1, span: TileSpan::Big })
        );
        assert_eq!(grid_rows(&placed), 3);
    }

    // Tests rendered image dimensions against the grid arithmetic
    #[test]
    fn test_render_dimensions() {
        let tiles = assignments(&[TileSpan::Normal, TileSpan::Normal]);
        let img = render_preview(&tiles, 2, 10, 2).unwrap();
        // 2 columns of 10 px with 3 gaps of 2 px; one row plus 2 gaps
        assert_eq!(img.width(), 26);
        assert_eq!(img.height(), 14);
    }

    // Tests rejection of unrenderable inputs
    #[test]
    fn test_render_rejects_bad_input() {
        assert!(render_preview(&[], 3, 10, 2).is_err());
        let tiles = assignments(&[TileSpan::Normal]);
        assert!(render_preview(&tiles, 3, 0, 2).is_err());
    }

    // Tests the PNG export end to end, including parent directory creation
    #[test]
    fn test_export_creates_png() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("nested").join("manifest_preview.png");
        let tiles = assignments(&[TileSpan::Normal, TileSpan::Wide, TileSpan::Tall]);

        export_preview_png(&tiles, 3, 8, 1, &output).unwrap();
        let (width, height) = image::image_dimensions(&output).unwrap();
        assert!(width > 0 && height > 0);
    }
}
