pub mod geometry;
pub mod viewport;
