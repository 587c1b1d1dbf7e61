//! Tests for configuration constants and their relationships

#[cfg(test)]
mod tests {
    use tilemason::io::configuration::{
        DEFAULT_BIG_FRACTION, DEFAULT_CELL_PX, DEFAULT_COLUMNS, GALLERY_IMAGE_EXTENSIONS,
        MANIFEST_FILE_NAME, MAX_COLUMN_NUDGE_ATTEMPTS, MIN_BIG_TILE_GAP, PREVIEW_SUFFIX,
        PRIMARY_BIG_COST_THRESHOLD, RELAXED_BIG_COST_THRESHOLD, RESIZE_DEBOUNCE_MS,
    };

    // Tests the ordering of the two selection thresholds
    #[test]
    fn test_relaxed_threshold_is_looser() {
        assert!(PRIMARY_BIG_COST_THRESHOLD < RELAXED_BIG_COST_THRESHOLD);
        assert!(PRIMARY_BIG_COST_THRESHOLD > 0.0);
    }

    // Tests that the default fraction sits inside the valid range
    #[test]
    fn test_default_fraction_in_range() {
        assert!((0.0..=1.0).contains(&DEFAULT_BIG_FRACTION));
    }

    // Tests spacing and nudge bounds are usable
    #[test]
    fn test_placement_bounds() {
        assert!(MIN_BIG_TILE_GAP >= 1);
        assert!(MAX_COLUMN_NUDGE_ATTEMPTS >= 1);
    }

    // Tests rendering and file-name constants
    #[test]
    fn test_file_constants() {
        assert_eq!(MANIFEST_FILE_NAME, "manifest.json");
        assert!(PREVIEW_SUFFIX.starts_with('_'));
        assert!(DEFAULT_COLUMNS >= 1);
        assert!(DEFAULT_CELL_PX >= 1);
        assert!(RESIZE_DEBOUNCE_MS > 0);
    }

    // Tests that recognised extensions are stored lowercased
    #[test]
    fn test_extensions_are_lowercase() {
        assert!(!GALLERY_IMAGE_EXTENSIONS.is_empty());
        for extension in GALLERY_IMAGE_EXTENSIONS {
            assert_eq!(*extension, extension.to_ascii_lowercase());
        }
        assert!(GALLERY_IMAGE_EXTENSIONS.contains(&"jpg"));
        assert!(GALLERY_IMAGE_EXTENSIONS.contains(&"png"));
    }
}
