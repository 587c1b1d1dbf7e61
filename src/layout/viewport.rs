//! Explicit gallery view state and resize coalescing policy
//!
//! The rendering side of a gallery owns one [`GalleryViewState`] per grid
//! instead of page-global mutable variables. The state carries the current
//! image set, the last computed arrangement, and the last container width,
//! and decides when a resize sample is significant enough to trigger a full
//! re-arrangement. Time is supplied by the caller as a millisecond sample so
//! the type stays pure and testable.

use crate::io::configuration::{MIN_RESIZE_WIDTH_DELTA_PX, RESIZE_DEBOUNCE_MS};
use crate::io::probe::ImageLoadResult;
use crate::layout::arranger::{ArrangementConfig, ImageDescriptor, TileAssignment, arrange};

/// When a container-width sample may trigger re-arrangement
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResizePolicy {
    /// Minimum interval between re-arrangements
    pub debounce_ms: u64,
    /// Width deltas below this are ignored
    pub min_width_delta_px: u32,
}

impl Default for ResizePolicy {
    fn default() -> Self {
        Self {
            debounce_ms: RESIZE_DEBOUNCE_MS,
            min_width_delta_px: MIN_RESIZE_WIDTH_DELTA_PX,
        }
    }
}

/// Mutable state for one rendered gallery grid
#[derive(Clone, Debug, Default)]
pub struct GalleryViewState {
    images: Vec<ImageDescriptor>,
    arrangement: Vec<TileAssignment>,
    last_container_width: Option<u32>,
    last_arranged_at_ms: Option<u64>,
    policy: ResizePolicy,
}

impl GalleryViewState {
    /// Create an empty view state with the given resize policy
    pub fn with_policy(policy: ResizePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// The current image set
    pub fn images(&self) -> &[ImageDescriptor] {
        &self.images
    }

    /// The most recently computed arrangement
    pub fn arrangement(&self) -> &[TileAssignment] {
        &self.arrangement
    }

    /// The container width of the last arrangement, if any
    pub const fn last_container_width(&self) -> Option<u32> {
        self.last_container_width
    }

    /// Replace the image set
    ///
    /// The cached arrangement is kept until the next [`Self::rearrange`];
    /// renderers keep showing the stale layout rather than flashing empty.
    pub fn set_images(&mut self, images: Vec<ImageDescriptor>) {
        self.images = images;
    }

    /// Whether a width sample at this instant warrants a re-arrangement
    ///
    /// The first sample always does. After that a sample must move the width
    /// by at least the policy delta, and re-arrangements fire at most once
    /// per debounce window; callers re-sample after the window closes.
    pub fn should_rearrange(&self, container_width: u32, now_ms: u64) -> bool {
        let Some(last_width) = self.last_container_width else {
            return true;
        };
        let delta = last_width.abs_diff(container_width);
        if delta < self.policy.min_width_delta_px {
            return false;
        }
        match self.last_arranged_at_ms {
            Some(at) => now_ms.saturating_sub(at) >= self.policy.debounce_ms,
            None => true,
        }
    }

    /// Recompute the arrangement for the current image set
    ///
    /// Records the width and time samples so later calls to
    /// [`Self::should_rearrange`] are judged against this run.
    pub fn rearrange(
        &mut self,
        config: &ArrangementConfig,
        container_width: u32,
        now_ms: u64,
    ) -> &[TileAssignment] {
        self.arrangement = arrange(&self.images, config);
        self.last_container_width = Some(container_width);
        self.last_arranged_at_ms = Some(now_ms);
        &self.arrangement
    }

    /// Fold image-load results into the image set
    ///
    /// Loaded results update measured dimensions; failed results drop the
    /// image from the set entirely. Returns true when anything changed, in
    /// which case the caller should re-arrange. Ids are matched
    /// case-insensitively, mirroring the upstream dedup rule.
    pub fn apply_load_results(&mut self, results: &[(String, ImageLoadResult)]) -> bool {
        let mut changed = false;
        for (id, result) in results {
            match result {
                ImageLoadResult::Loaded { width, height } => {
                    for image in &mut self.images {
                        if image.id.eq_ignore_ascii_case(id)
                            && (image.width != *width || image.height != *height)
                        {
                            image.width = *width;
                            image.height = *height;
                            changed = true;
                        }
                    }
                }
                ImageLoadResult::Failed { .. } => {
                    let before = self.images.len();
                    self.images.retain(|image| !image.id.eq_ignore_ascii_case(id));
                    changed |= self.images.len() != before;
                }
            }
        }
        changed
    }
}
