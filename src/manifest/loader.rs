//! Manifest reading, writing, and directory synchronisation
//!
//! The manifest is the authored record of a gallery: curators reorder
//! entries and fix alt text by hand, so synchronisation preserves the order
//! of surviving entries and only appends newly discovered files. Numeric
//! filename ordering ("img2" before "img10") keeps appended shots in shoot
//! order rather than string order.

use crate::io::configuration::{GALLERY_IMAGE_EXTENSIONS, MANIFEST_FILE_NAME, PREVIEW_SUFFIX};
use crate::io::error::{GalleryError, Result};
use crate::layout::arranger::TileAssignment;
use crate::manifest::schema::{Manifest, ManifestImage};
use std::cmp::Ordering;
use std::collections::HashSet;
use std::iter::Peekable;
use std::path::{Path, PathBuf};
use std::str::Chars;

/// Path of the manifest file inside a project directory
pub fn manifest_path(project_dir: &Path) -> PathBuf {
    project_dir.join(MANIFEST_FILE_NAME)
}

/// Load a project's manifest, or start a fresh one if none exists
///
/// A missing file is not an error: new project directories begin with an
/// empty manifest titled after the directory name.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_or_default(project_dir: &Path) -> Result<Manifest> {
    let path = manifest_path(project_dir);
    let raw = match std::fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(Manifest {
                title: Some(title_from_directory(project_dir)),
                images: Vec::new(),
            });
        }
        Err(err) => {
            return Err(GalleryError::ManifestRead { path, source: err });
        }
    };
    serde_json::from_str(&raw).map_err(|err| GalleryError::ManifestParse { path, source: err })
}

/// Write a manifest as pretty-printed JSON with a trailing newline
///
/// # Errors
///
/// Returns an error if serialisation fails or the file cannot be written.
pub fn write_pretty(path: &Path, manifest: &Manifest) -> Result<()> {
    let body = serde_json::to_string_pretty(manifest).map_err(|err| {
        GalleryError::ManifestParse {
            path: path.to_path_buf(),
            source: err,
        }
    })?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|err| GalleryError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: err,
        })?;
    }
    std::fs::write(path, body + "\n").map_err(|err| GalleryError::ManifestWrite {
        path: path.to_path_buf(),
        source: err,
    })
}

/// Whether a filename looks like a gallery image
///
/// Preview sheets and the manifest itself live alongside the images, so
/// anything named like tool output is excluded as well as non-image
/// extensions.
pub fn is_gallery_image(filename: &str) -> bool {
    let preview_marker = format!("{PREVIEW_SUFFIX}.");
    if filename.contains(&preview_marker) {
        return false;
    }
    filename
        .rsplit_once('.')
        .is_some_and(|(_, extension)| {
            let extension = extension.to_ascii_lowercase();
            GALLERY_IMAGE_EXTENSIONS.contains(&extension.as_str())
        })
}

/// List the gallery image filenames in a project directory
///
/// # Errors
///
/// Returns an error if the directory cannot be read.
pub fn list_gallery_images(project_dir: &Path) -> Result<Vec<String>> {
    let entries = std::fs::read_dir(project_dir).map_err(|err| GalleryError::FileSystem {
        path: project_dir.to_path_buf(),
        operation: "read directory",
        source: err,
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| GalleryError::FileSystem {
            path: project_dir.to_path_buf(),
            operation: "read directory entry",
            source: err,
        })?;
        let is_file = entry.file_type().is_ok_and(|kind| kind.is_file());
        if !is_file {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if is_gallery_image(&name) {
            names.push(name);
        }
    }

    names.sort_by(|a, b| natural_cmp(a, b));
    Ok(names)
}

/// Bring a manifest in step with the files on disk
///
/// Entries whose file disappeared are dropped; entries whose file survives
/// keep their authored position and metadata; files with no entry are
/// appended in natural filename order with derived alt text.
///
/// # Errors
///
/// Returns an error if the directory cannot be listed.
pub fn sync_with_directory(manifest: &mut Manifest, project_dir: &Path) -> Result<()> {
    let files = list_gallery_images(project_dir)?;
    let on_disk: HashSet<&str> = files.iter().map(String::as_str).collect();

    manifest
        .images
        .retain(|image| on_disk.contains(image.src.as_str()));

    let known: HashSet<String> = manifest
        .images
        .iter()
        .map(|image| image.src.clone())
        .collect();
    for name in files {
        if known.contains(&name) {
            continue;
        }
        let mut image = ManifestImage::new(name.clone());
        image.alt = Some(alt_from_filename(&name));
        manifest.images.push(image);
    }

    Ok(())
}

/// Remove entries that duplicate an earlier src case-insensitively
///
/// Returns the number of entries removed. This upholds the arranger's
/// unique-id invariant before any descriptors are built.
pub fn dedup_case_insensitive(manifest: &mut Manifest) -> usize {
    let before = manifest.images.len();
    let mut seen = HashSet::new();
    manifest
        .images
        .retain(|image| seen.insert(image.src.to_lowercase()));
    before - manifest.images.len()
}

/// Rewrite the manifest in arrangement order with assigned spans
///
/// Each assignment pulls its entry to the next position and stamps the span
/// and any measured dimensions. Entries the arrangement doesn't mention
/// (there should be none) are appended unchanged rather than lost.
pub fn apply_arrangement(manifest: &mut Manifest, assignments: &[TileAssignment]) {
    let mut remaining = std::mem::take(&mut manifest.images);
    let mut ordered = Vec::with_capacity(remaining.len());

    for assignment in assignments {
        let found = remaining
            .iter()
            .position(|image| image.src == assignment.image.id);
        let Some(index) = found else {
            continue;
        };
        let mut image = remaining.remove(index);
        image.span = Some(assignment.span);
        if assignment.image.width > 0 && assignment.image.height > 0 {
            image.w = Some(assignment.image.width);
            image.h = Some(assignment.image.height);
        }
        ordered.push(image);
    }

    ordered.append(&mut remaining);
    manifest.images = ordered;
}

/// Derive human-friendly alt text from a filename
///
/// Strips the extension and turns separator runs into single spaces, so
/// `red_fort-detail_03.jpg` reads as `red fort detail 03`.
pub fn alt_from_filename(filename: &str) -> String {
    let stem = filename.rsplit_once('.').map_or(filename, |(stem, _)| stem);
    let mut text = String::with_capacity(stem.len());
    for c in stem.chars() {
        if matches!(c, '.' | '_' | '-') {
            if !text.is_empty() && !text.ends_with(' ') {
                text.push(' ');
            }
        } else {
            text.push(c);
        }
    }
    text.trim_end().to_string()
}

/// Case-insensitive, numeric-aware filename ordering
///
/// Digit runs compare as numbers, everything else compares as lowercased
/// characters; exact byte order breaks remaining ties so the sort is total.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let mut a_chars = a.chars().peekable();
    let mut b_chars = b.chars().peekable();

    loop {
        match (a_chars.peek().copied(), b_chars.peek().copied()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(ac), Some(bc)) => {
                if ac.is_ascii_digit() && bc.is_ascii_digit() {
                    let a_number = take_number(&mut a_chars);
                    let b_number = take_number(&mut b_chars);
                    match a_number.cmp(&b_number) {
                        Ordering::Equal => {}
                        other => return other,
                    }
                } else {
                    match ac.to_ascii_lowercase().cmp(&bc.to_ascii_lowercase()) {
                        Ordering::Equal => {
                            a_chars.next();
                            b_chars.next();
                        }
                        other => return other,
                    }
                }
            }
        }
    }
}

fn take_number(chars: &mut Peekable<Chars<'_>>) -> u128 {
    let mut value: u128 = 0;
    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
        value = value.saturating_mul(10).saturating_add(u128::from(digit));
        chars.next();
    }
    value
}

fn title_from_directory(project_dir: &Path) -> String {
    let name = project_dir
        .file_name()
        .map_or_else(String::new, |name| name.to_string_lossy().to_string());
    let mut chars = name.chars();
    chars.next().map_or(name.clone(), |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}
