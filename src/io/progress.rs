//! Multi-file progress tracking with automatic batching for large sets

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use crate::search::SearchStats;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

/// Coordinates progress display for batch operations
///
/// Each puzzle gets a spinner reporting search work; sets larger than
/// [`MAX_INDIVIDUAL_PROGRESS_BARS`] also get a batch bar counting files.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    file_bar: Option<ProgressBar>,
    file_count: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {prefix} {msg} [{elapsed}]")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Files: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            file_bar: None,
            file_count: 0,
        }
    }

    /// Number of files announced by [`initialize`](Self::initialize)
    pub const fn file_count(&self) -> usize {
        self.file_count
    }

    /// Prepare the display for `file_count` puzzles
    pub fn initialize(&mut self, file_count: usize) {
        self.file_count = file_count;

        // Switch to batch mode for large file sets to avoid terminal spam
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }
    }

    /// Start a spinner for a puzzle of the given size
    pub fn start_file(&mut self, path: &Path, dimensions: (usize, usize)) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        let bar = self.multi_progress.add(ProgressBar::new_spinner());
        bar.set_style(SPINNER_STYLE.clone());
        bar.set_prefix(display_name);
        bar.set_message(format!("{}x{} searching", dimensions.0, dimensions.1));
        bar.enable_steady_tick(Duration::from_millis(100));
        self.file_bar = Some(bar);
    }

    /// Report search work on the current puzzle
    pub fn update_search(&self, stats: &SearchStats) {
        if let Some(ref bar) = self.file_bar {
            bar.set_message(format!(
                "{} placements, {} undone",
                stats.placements, stats.undos
            ));
        }
    }

    /// Mark the current puzzle as finished with a short outcome summary
    pub fn complete_file(&mut self, summary: &str, elapsed: Duration) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(bar) = self.file_bar.take() {
            bar.finish_with_message(format!("✓ {summary} in {}ms", elapsed.as_millis()));
        }
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All files processed");
        }
        let _ = self.multi_progress.clear();
    }
}
