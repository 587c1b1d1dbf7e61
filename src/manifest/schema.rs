//! Manifest document types
//!
//! The on-disk shape is `{ title, images: [{src, alt, w?, h?, span?}] }`.
//! Optional fields are omitted from output rather than serialised as null,
//! keeping hand-edited manifests diffable.

use crate::layout::arranger::{ImageDescriptor, TileAssignment};
use crate::layout::geometry::TileSpan;
use serde::{Deserialize, Serialize};

/// One gallery image entry in a project manifest
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestImage {
    /// Image filename relative to the project directory
    pub src: String,
    /// Alt text shown by the renderer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    /// Pixel width, absent until probed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub w: Option<u32>,
    /// Pixel height, absent until probed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub h: Option<u32>,
    /// Assigned or authored tile span
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<TileSpan>,
}

impl ManifestImage {
    /// Create a bare entry for a newly discovered file
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: None,
            w: None,
            h: None,
            span: None,
        }
    }

    /// Whether both dimensions are known and positive
    pub const fn has_dimensions(&self) -> bool {
        matches!((self.w, self.h), (Some(w), Some(h)) if w > 0 && h > 0)
    }

    /// View this entry as arranger input
    ///
    /// Unknown dimensions become zeros, which the arranger treats as square.
    pub fn descriptor(&self) -> ImageDescriptor {
        ImageDescriptor::new(
            self.src.clone(),
            self.w.unwrap_or(0),
            self.h.unwrap_or(0),
        )
    }
}

/// A project's gallery manifest
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Display title for the project
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Gallery images in display order
    #[serde(default)]
    pub images: Vec<ManifestImage>,
}

impl Manifest {
    /// Whether every image carries an authored span
    ///
    /// Empty manifests don't count: there is nothing authored about them.
    pub fn all_spans_authored(&self) -> bool {
        !self.images.is_empty() && self.images.iter().all(|image| image.span.is_some())
    }

    /// Use authored spans verbatim, bypassing the arranger
    ///
    /// Returns assignments in manifest order when every image carries a
    /// span; otherwise `None`, meaning the arranger must run.
    pub fn authored_arrangement(&self) -> Option<Vec<TileAssignment>> {
        if !self.all_spans_authored() {
            return None;
        }
        let assignments = self
            .images
            .iter()
            .filter_map(|image| {
                image.span.map(|span| TileAssignment {
                    image: image.descriptor(),
                    span,
                })
            })
            .collect();
        Some(assignments)
    }

    /// View all entries as arranger input
    pub fn descriptors(&self) -> Vec<ImageDescriptor> {
        self.images.iter().map(ManifestImage::descriptor).collect()
    }
}
