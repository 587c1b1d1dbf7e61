//! Mathematical utilities for the arrangement algorithm

/// Logarithmic aspect-ratio distance used to rank tile fits
pub mod cost;
