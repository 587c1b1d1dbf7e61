//! Command-line interface for batch processing project galleries
//!
//! Each project directory holds gallery images and a `manifest.json`. A run
//! synchronises every manifest with the files on disk, probes missing
//! dimensions, arranges the gallery into tile spans, and writes the manifest
//! back in display order — optionally with a PNG proof sheet of the layout.

use crate::io::configuration::{
    DEFAULT_BIG_FRACTION, DEFAULT_CELL_PX, DEFAULT_COLUMNS, DEFAULT_GAP_PX, MANIFEST_FILE_NAME,
    PREVIEW_SUFFIX,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::preview::export_preview_png;
use crate::io::probe::{ImageLoadResult, probe_dimensions};
use crate::io::progress::ProgressManager;
use crate::layout::arranger::{ArrangementConfig, TileAssignment, arrange};
use crate::layout::geometry::{TileGeometry, TileSpan};
use crate::manifest::loader;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "tilemason")]
#[command(
    author,
    version,
    about = "Arrange gallery images into masonry tile manifests"
)]
/// Command-line arguments for the gallery arrangement tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Project directory, manifest.json file, or directory of projects
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Target fraction of images rendered as 2x2 tiles
    #[arg(short, long, default_value_t = DEFAULT_BIG_FRACTION, allow_negative_numbers = true)]
    pub big_fraction: f64,

    /// Approximate grid column count of the rendered gallery
    #[arg(short, long, default_value_t = DEFAULT_COLUMNS)]
    pub columns: usize,

    /// Rendered grid cell edge in pixels
    #[arg(long, default_value_t = DEFAULT_CELL_PX)]
    pub cell: u32,

    /// Rendered gap between grid cells in pixels
    #[arg(long, default_value_t = DEFAULT_GAP_PX)]
    pub gap: u32,

    /// Write a PNG proof sheet of each arrangement
    #[arg(short, long)]
    pub preview: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Re-arrange even when every image already carries a span
    #[arg(short, long)]
    pub no_skip: bool,

    /// Compute and report without writing manifests or previews
    #[arg(short, long)]
    pub dry_run: bool,
}

impl Cli {
    /// Check if fully authored manifests should be left untouched
    pub const fn skip_authored(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates manifest processing across project directories
pub struct ManifestProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl ManifestProcessor {
    /// Create a new processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process projects according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if parameter validation, target resolution, or
    /// manifest processing fails.
    pub fn process(&mut self) -> Result<()> {
        self.validate_parameters()?;

        let projects = self.collect_projects()?;
        if projects.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(projects.len());
        }

        for project in &projects {
            self.process_project(project)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn validate_parameters(&self) -> Result<()> {
        if !self.cli.big_fraction.is_finite() || !(0.0..=1.0).contains(&self.cli.big_fraction) {
            return Err(invalid_parameter(
                "big-fraction",
                &self.cli.big_fraction,
                &"must be between 0.0 and 1.0",
            ));
        }
        if self.cli.columns == 0 {
            return Err(invalid_parameter(
                "columns",
                &self.cli.columns,
                &"a gallery grid has at least one column",
            ));
        }
        if self.cli.cell == 0 {
            return Err(invalid_parameter(
                "cell",
                &self.cli.cell,
                &"grid cells must be at least one pixel",
            ));
        }
        Ok(())
    }

    fn collect_projects(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;

        if target.is_file() {
            let is_manifest =
                target.file_name().and_then(|name| name.to_str()) == Some(MANIFEST_FILE_NAME);
            if !is_manifest {
                return Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &format!("file targets must be named {MANIFEST_FILE_NAME}"),
                ));
            }
            let parent = target
                .parent()
                .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
            return Ok(vec![parent]);
        }

        if !target.is_dir() {
            return Err(invalid_parameter(
                "target",
                &target.display(),
                &"must be an existing directory or manifest file",
            ));
        }

        if Self::looks_like_project(target) {
            return Ok(vec![target.clone()]);
        }

        // A directory of projects: take every child that holds a gallery
        let mut projects = Vec::new();
        for entry in std::fs::read_dir(target)? {
            let path = entry?.path();
            if path.is_dir() && Self::looks_like_project(&path) {
                projects.push(path);
            }
        }
        projects.sort();
        Ok(projects)
    }

    fn looks_like_project(dir: &Path) -> bool {
        if loader::manifest_path(dir).is_file() {
            return true;
        }
        loader::list_gallery_images(dir).is_ok_and(|images| !images.is_empty())
    }

    // Allow print for user feedback on skips and dropped images
    #[allow(clippy::print_stderr)]
    fn process_project(&mut self, project_dir: &Path) -> Result<()> {
        let name = project_dir
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        let mut manifest = loader::load_or_default(project_dir)?;
        loader::sync_with_directory(&mut manifest, project_dir)?;
        let duplicates = loader::dedup_case_insensitive(&mut manifest);
        if duplicates > 0 && !self.cli.quiet {
            eprintln!("{name}: removed {duplicates} duplicate manifest entries");
        }

        let unmeasured = manifest
            .images
            .iter()
            .filter(|image| !image.has_dimensions())
            .count();
        if let Some(ref mut pm) = self.progress_manager {
            pm.start_project(&name, unmeasured);
        }
        self.probe_missing_dimensions(&mut manifest, project_dir, &name);

        let authored = self
            .cli
            .skip_authored()
            .then(|| manifest.authored_arrangement())
            .flatten();
        let skipped = authored.is_some();
        let arrangement = match authored {
            Some(assignments) => assignments,
            None => {
                let config = ArrangementConfig {
                    geometry: TileGeometry::measured(
                        f64::from(self.cli.cell),
                        f64::from(self.cli.cell),
                        f64::from(self.cli.gap),
                    ),
                    big_fraction: self.cli.big_fraction,
                    columns: self.cli.columns,
                };
                arrange(&manifest.descriptors(), &config)
            }
        };

        if skipped {
            if !self.cli.quiet {
                eprintln!("Skipping: {name} (spans already authored)");
            }
        } else if self.cli.dry_run {
            if !self.cli.quiet {
                eprintln!("{name}: {}", summarize(&arrangement));
            }
        } else {
            loader::apply_arrangement(&mut manifest, &arrangement);
            loader::write_pretty(&loader::manifest_path(project_dir), &manifest)?;
        }

        if self.cli.preview && !self.cli.dry_run && !arrangement.is_empty() {
            let preview_name = format!("manifest{PREVIEW_SUFFIX}.png");
            export_preview_png(
                &arrangement,
                self.cli.columns,
                self.cli.cell,
                self.cli.gap,
                &project_dir.join(preview_name),
            )?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_project();
        }

        Ok(())
    }

    // Allow print for user feedback on images dropped from the gallery
    #[allow(clippy::print_stderr)]
    fn probe_missing_dimensions(
        &mut self,
        manifest: &mut crate::manifest::schema::Manifest,
        project_dir: &Path,
        name: &str,
    ) {
        let mut failed: Vec<String> = Vec::new();

        for image in &mut manifest.images {
            if image.has_dimensions() {
                continue;
            }
            match probe_dimensions(&project_dir.join(&image.src)) {
                ImageLoadResult::Loaded { width, height } => {
                    image.w = Some(width);
                    image.h = Some(height);
                }
                ImageLoadResult::Failed { reason } => {
                    if !self.cli.quiet {
                        eprintln!("{name}: dropping {} ({reason})", image.src);
                    }
                    failed.push(image.src.clone());
                }
            }
            if let Some(ref pm) = self.progress_manager {
                pm.tick_image();
            }
        }

        // Unreadable images leave the gallery rather than failing the run
        manifest
            .images
            .retain(|image| !failed.contains(&image.src));
    }
}

fn summarize(arrangement: &[TileAssignment]) -> String {
    let count_of = |span: TileSpan| {
        arrangement
            .iter()
            .filter(|assignment| assignment.span == span)
            .count()
    };
    format!(
        "{} images, {} big / {} wide / {} tall / {} normal",
        arrangement.len(),
        count_of(TileSpan::Big),
        count_of(TileSpan::Wide),
        count_of(TileSpan::Tall),
        count_of(TileSpan::Normal),
    )
}
