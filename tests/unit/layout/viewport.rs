//! Tests for gallery view state and resize coalescing

#[cfg(test)]
mod tests {
    use tilemason::io::probe::ImageLoadResult;
    use tilemason::layout::arranger::{ArrangementConfig, ImageDescriptor};
    use tilemason::layout::viewport::{GalleryViewState, ResizePolicy};

    fn seeded_state() -> GalleryViewState {
        let mut state = GalleryViewState::default();
        state.set_images(vec![
            ImageDescriptor::new("a.jpg", 800, 800),
            ImageDescriptor::new("b.jpg", 2400, 1200),
            ImageDescriptor::new("c.jpg", 600, 1200),
        ]);
        state
    }

    // Tests that the very first width sample always triggers arrangement
    #[test]
    fn test_first_sample_always_rearranges() {
        let state = seeded_state();
        assert!(state.should_rearrange(1024, 0));
    }

    // Tests suppression of sub-threshold width jitter
    #[test]
    fn test_small_width_delta_is_ignored() {
        let mut state = seeded_state();
        state.rearrange(&ArrangementConfig::default(), 1024, 1_000);
        // Default policy ignores deltas under 16 px
        assert!(!state.should_rearrange(1030, 10_000));
        assert!(!state.should_rearrange(1009, 10_000));
    }

    // Tests the debounce window against the last arrangement time
    #[test]
    fn test_debounce_window() {
        let mut state = seeded_state();
        state.rearrange(&ArrangementConfig::default(), 1024, 1_000);
        // A real width change inside the window waits
        assert!(!state.should_rearrange(800, 1_050));
        // The same change clears once the window has elapsed
        assert!(state.should_rearrange(800, 1_180));
    }

    // Tests a custom policy
    #[test]
    fn test_custom_policy() {
        let mut state = GalleryViewState::with_policy(ResizePolicy {
            debounce_ms: 0,
            min_width_delta_px: 1,
        });
        state.set_images(vec![ImageDescriptor::new("a.jpg", 800, 800)]);
        state.rearrange(&ArrangementConfig::default(), 1024, 0);
        assert!(state.should_rearrange(1025, 0));
        assert!(!state.should_rearrange(1024, 0));
    }

    // Tests that rearrange records its samples and exposes the result
    #[test]
    fn test_rearrange_records_samples() {
        let mut state = seeded_state();
        assert!(state.arrangement().is_empty());
        assert_eq!(state.last_container_width(), None);

        let arranged = state.rearrange(&ArrangementConfig::default(), 1024, 42).len();
        assert_eq!(arranged, 3);
        assert_eq!(state.last_container_width(), Some(1024));
        assert_eq!(state.arrangement().len(), 3);
    }

    // Tests dimension updates from load results, case-insensitively
    #[test]
    fn test_loaded_result_updates_dimensions() {
        let mut state = seeded_state();
        let changed = state.apply_load_results(&[(
            "A.JPG".to_owned(),
            ImageLoadResult::Loaded {
                width: 1600,
                height: 900,
            },
        )]);
        assert!(changed);
        let updated = state.images().iter().find(|i| i.id == "a.jpg");
        assert_eq!(updated.map(|i| (i.width, i.height)), Some((1600, 900)));
    }

    // Tests that a redundant load result reports no change
    #[test]
    fn test_unchanged_result_reports_no_change() {
        let mut state = seeded_state();
        let changed = state.apply_load_results(&[(
            "a.jpg".to_owned(),
            ImageLoadResult::Loaded {
                width: 800,
                height: 800,
            },
        )]);
        assert!(!changed);
    }

    // Tests that failed loads drop the image from the set
    #[test]
    fn test_failed_result_drops_image() {
        let mut state = seeded_state();
        let changed = state.apply_load_results(&[(
            "b.jpg".to_owned(),
            ImageLoadResult::Failed {
                reason: "decode error".to_owned(),
            },
        )]);
        assert!(changed);
        assert_eq!(state.images().len(), 2);
        assert!(state.images().iter().all(|i| i.id != "b.jpg"));
    }

    // Tests that unknown ids are silently ignored
    #[test]
    fn test_unknown_id_is_ignored() {
        let mut state = seeded_state();
        let changed = state.apply_load_results(&[(
            "nope.jpg".to_owned(),
            ImageLoadResult::Failed {
                reason: "missing".to_owned(),
            },
        )]);
        assert!(!changed);
        assert_eq!(state.images().len(), 3);
    }
}
