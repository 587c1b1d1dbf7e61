//! Input/output operations, manifest processing, and error handling

/// Command-line interface and per-project manifest processing
pub mod cli;
/// Algorithm constants and runtime configuration defaults
pub mod configuration;
/// Error types for manifest and image operations
pub mod error;
/// Arrangement preview rendering as a PNG proof sheet
pub mod preview;
/// Image dimension probing via file headers
pub mod probe;
/// Progress display for multi-project runs
pub mod progress;
