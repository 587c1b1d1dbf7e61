//! Progress display for multi-project runs
//!
//! Probing a project is one bar worth of work (one tick per image header).
//! Small runs get a bar per project; past a threshold the display collapses
//! to a single batch bar so a site-wide run doesn't spam the terminal.

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PROJECT_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg:<24} [{bar:30.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Projects: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Coordinates progress display across project directories
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    project_bar: Option<ProgressBar>,
    batch_mode: bool,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            project_bar: None,
            batch_mode: false,
        }
    }

    /// Configure the display for the given number of projects
    pub fn initialize(&mut self, project_count: usize) {
        self.batch_mode = project_count > MAX_INDIVIDUAL_PROGRESS_BARS;
        if self.batch_mode {
            let bar = ProgressBar::new(project_count as u64);
            bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(bar));
        }
    }

    /// Begin a project with the given number of images to probe
    pub fn start_project(&mut self, name: &str, image_count: usize) {
        if self.batch_mode {
            return;
        }
        let bar = ProgressBar::new(image_count as u64);
        bar.set_style(PROJECT_STYLE.clone());
        bar.set_message(name.to_string());
        self.project_bar = Some(self.multi_progress.add(bar));
    }

    /// Record one probed image in the current project
    pub fn tick_image(&self) {
        if let Some(ref bar) = self.project_bar {
            bar.inc(1);
        }
    }

    /// Mark the current project as finished
    pub fn complete_project(&mut self) {
        if let Some(bar) = self.project_bar.take() {
            bar.finish();
        }
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All projects processed");
        }
        let _ = self.multi_progress.clear();
    }
}
