//! Tests for tile spans and effective grid geometry

#[cfg(test)]
mod tests {
    use tilemason::layout::geometry::{TileGeometry, TileSpan};

    // Tests grid footprints for all four spans
    #[test]
    fn test_span_footprints() {
        assert_eq!(TileSpan::Normal.columns(), 1);
        assert_eq!(TileSpan::Normal.rows(), 1);
        assert_eq!(TileSpan::Wide.columns(), 2);
        assert_eq!(TileSpan::Wide.rows(), 1);
        assert_eq!(TileSpan::Tall.columns(), 1);
        assert_eq!(TileSpan::Tall.rows(), 2);
        assert_eq!(TileSpan::Big.columns(), 2);
        assert_eq!(TileSpan::Big.rows(), 2);
    }

    // Tests the manifest name round-trip
    #[test]
    fn test_span_names_round_trip() {
        for span in [TileSpan::Normal, TileSpan::Wide, TileSpan::Tall, TileSpan::Big] {
            assert_eq!(TileSpan::from_name(span.name()), Some(span));
        }
        assert_eq!(TileSpan::from_name("huge"), None);
        assert_eq!(TileSpan::from_name(""), None);
    }

    // Tests measured geometry against hand-computed ratios for square cells
    #[test]
    fn test_measured_square_cells() {
        let geometry = TileGeometry::measured(120.0, 120.0, 8.0);
        assert!((geometry.normal - 1.0).abs() < 1e-12);
        assert!((geometry.wide - 248.0 / 120.0).abs() < 1e-12);
        assert!((geometry.tall - 120.0 / 248.0).abs() < 1e-12);
        assert!((geometry.big - 1.0).abs() < 1e-12);
    }

    // Tests that spanning tiles absorb the inter-cell gap
    #[test]
    fn test_gap_widens_spanning_ratios() {
        let gapless = TileGeometry::measured(100.0, 100.0, 0.0);
        let gapped = TileGeometry::measured(100.0, 100.0, 10.0);
        assert!((gapless.wide - 2.0).abs() < 1e-12);
        assert!(gapped.wide > gapless.wide);
        assert!(gapped.tall < gapless.tall);
    }

    // Tests fallback on degenerate measurements
    // Verified by passing the bad values through the ratio arithmetic
    #[test]
    fn test_degenerate_measurements_fall_back() {
        assert_eq!(TileGeometry::measured(0.0, 120.0, 8.0), TileGeometry::FALLBACK);
        assert_eq!(TileGeometry::measured(120.0, -5.0, 8.0), TileGeometry::FALLBACK);
        assert_eq!(TileGeometry::measured(f64::NAN, 120.0, 8.0), TileGeometry::FALLBACK);
        // A broken gap measurement degrades to zero gap, not to fallback
        let geometry = TileGeometry::measured(100.0, 100.0, f64::NAN);
        assert!((geometry.wide - 2.0).abs() < 1e-12);
    }

    // Tests the theoretical fallback ratios
    #[test]
    fn test_fallback_ratios() {
        let fallback = TileGeometry::default();
        assert!((fallback.normal - 1.0).abs() < 1e-12);
        assert!((fallback.wide - 2.0).abs() < 1e-12);
        assert!((fallback.tall - 0.5).abs() < 1e-12);
        assert!((fallback.big - 1.0).abs() < 1e-12);
    }

    // Tests span-to-ratio lookup
    #[test]
    fn test_ratio_for_span() {
        let geometry = TileGeometry::FALLBACK;
        assert!((geometry.ratio_for(TileSpan::Wide) - geometry.wide).abs() < 1e-12);
        assert!((geometry.ratio_for(TileSpan::Tall) - geometry.tall).abs() < 1e-12);
    }
}
