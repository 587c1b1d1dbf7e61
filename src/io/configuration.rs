//! Algorithm constants and runtime configuration defaults

// Aspect-ratio cost cutoffs for promotion to the 2×2 footprint
/// Cost ceiling for first-choice big tile candidates
pub const PRIMARY_BIG_COST_THRESHOLD: f64 = 0.28;
/// Cost ceiling when filling remaining big tile slots
pub const RELAXED_BIG_COST_THRESHOLD: f64 = 0.42;

/// Default fraction of a gallery rendered as big tiles
pub const DEFAULT_BIG_FRACTION: f64 = 0.12;

/// Smallest allowed distance between consecutive big tiles
pub const MIN_BIG_TILE_GAP: usize = 4;

/// Cap on forward/backward steps when dodging a shared column
pub const MAX_COLUMN_NUDGE_ATTEMPTS: usize = 6;

// Resize coalescing, applied by the view state rather than the arranger
/// Minimum interval between resize-driven re-arrangements
pub const RESIZE_DEBOUNCE_MS: u64 = 180;
/// Container-width deltas below this never trigger re-arrangement
pub const MIN_RESIZE_WIDTH_DELTA_PX: u32 = 16;

// Defaults for the CLI's rendered-grid assumptions
/// Grid columns assumed when arranging from the command line
pub const DEFAULT_COLUMNS: usize = 4;
/// Square cell edge in pixels for geometry and preview rendering
pub const DEFAULT_CELL_PX: u32 = 120;
/// Gap between cells in pixels
pub const DEFAULT_GAP_PX: u32 = 8;

/// Manifest filename expected inside each project directory
pub const MANIFEST_FILE_NAME: &str = "manifest.json";
/// Suffix added to preview image filenames
pub const PREVIEW_SUFFIX: &str = "_preview";

/// File extensions treated as gallery images
///
/// TIFF sources are excluded; converting them to web formats is the job of
/// the external resize pipeline.
pub const GALLERY_IMAGE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "webp"];

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
