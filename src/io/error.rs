//! Error types for manifest and image operations
//!
//! The arrangement itself never fails; errors here come from the filesystem
//! boundary around it: reading and writing manifests, probing image headers,
//! and exporting previews.

use std::fmt;
use std::path::PathBuf;

/// Main error type for all gallery operations
#[derive(Debug)]
pub enum GalleryError {
    /// Failed to read an image header for dimension probing
    ImageProbe {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Failed to read a manifest file from disk
    ManifestRead {
        /// Path to the manifest file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Manifest contents are not valid JSON for the expected schema
    ManifestParse {
        /// Path to the manifest file
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Failed to write a manifest file to disk
    ManifestWrite {
        /// Path to the manifest file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to save an arrangement preview image
    PreviewExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// Input doesn't meet processing requirements
    InvalidSourceData {
        /// Description of what's wrong with the input
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for GalleryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageProbe { path, source } => {
                write!(f, "Failed to probe image '{}': {source}", path.display())
            }
            Self::ManifestRead { path, source } => {
                write!(f, "Failed to read manifest '{}': {source}", path.display())
            }
            Self::ManifestParse { path, source } => {
                write!(f, "Failed to parse manifest '{}': {source}", path.display())
            }
            Self::ManifestWrite { path, source } => {
                write!(f, "Failed to write manifest '{}': {source}", path.display())
            }
            Self::PreviewExport { path, source } => {
                write!(
                    f,
                    "Failed to export preview to '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for GalleryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageProbe { source, .. } | Self::PreviewExport { source, .. } => Some(source),
            Self::ManifestRead { source, .. }
            | Self::ManifestWrite { source, .. }
            | Self::FileSystem { source, .. } => Some(source),
            Self::ManifestParse { source, .. } => Some(source),
            Self::InvalidSourceData { .. } | Self::InvalidParameter { .. } => None,
        }
    }
}

/// Convenience type alias for gallery results
pub type Result<T> = std::result::Result<T, GalleryError>;

impl From<std::io::Error> for GalleryError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GalleryError {
    GalleryError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid source data error
pub fn invalid_source_data(reason: &impl ToString) -> GalleryError {
    GalleryError::InvalidSourceData {
        reason: reason.to_string(),
    }
}
