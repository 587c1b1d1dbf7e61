//! Tests for the logarithmic aspect-ratio distance

#[cfg(test)]
mod tests {
    use tilemason::math::cost::{UNKNOWN_ASPECT_RATIO, aspect_cost, normalize_aspect_ratio};

    // Tests that a perfect fit has zero cost
    #[test]
    fn test_exact_fit_costs_nothing() {
        assert!(aspect_cost(2.0, 2.0).abs() < 1e-12);
        assert!(aspect_cost(0.5, 0.5).abs() < 1e-12);
        assert!(aspect_cost(1.0, 1.0).abs() < 1e-12);
    }

    // Tests the symmetry of the log distance: a 2:1 image and a 1:2 image
    // are equally poor fits for a square tile
    #[test]
    fn test_cost_is_symmetric_around_target() {
        let landscape = aspect_cost(2.0, 1.0);
        let portrait = aspect_cost(0.5, 1.0);
        assert!((landscape - portrait).abs() < 1e-12);
        assert!((landscape - std::f64::consts::LN_2).abs() < 1e-12);
    }

    // Tests that cost grows with mismatch
    #[test]
    fn test_cost_orders_by_mismatch() {
        let near = aspect_cost(1.1, 1.0);
        let far = aspect_cost(3.0, 1.0);
        assert!(near < far);
    }

    // Tests normalisation of degenerate ratios
    // Verified by feeding the raw values straight into ln
    #[test]
    fn test_degenerate_ratios_become_square() {
        assert!((normalize_aspect_ratio(f64::NAN) - UNKNOWN_ASPECT_RATIO).abs() < 1e-12);
        assert!((normalize_aspect_ratio(f64::INFINITY) - UNKNOWN_ASPECT_RATIO).abs() < 1e-12);
        assert!((normalize_aspect_ratio(0.0) - UNKNOWN_ASPECT_RATIO).abs() < 1e-12);
        assert!((normalize_aspect_ratio(-3.0) - UNKNOWN_ASPECT_RATIO).abs() < 1e-12);

        // A degenerate image ratio is a perfect fit for a square tile
        assert!(aspect_cost(f64::NAN, 1.0).abs() < 1e-12);
        assert!(aspect_cost(0.0, 1.0).abs() < 1e-12);
        // And both sides are normalised
        assert!(aspect_cost(1.0, -2.0).abs() < 1e-12);
    }

    // Tests that valid ratios pass through untouched
    #[test]
    fn test_valid_ratio_passthrough() {
        assert!((normalize_aspect_ratio(1.78) - 1.78).abs() < 1e-12);
    }
}
