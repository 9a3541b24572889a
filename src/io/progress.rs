//! Progress display for batch painting runs

use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;
use std::time::Duration;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Files: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

static FILE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Coordinates progress display across a batch of paintings
///
/// A batch bar tracks file completion while a spinner names the file and
/// painting mode currently in flight.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    file_spinner: Option<ProgressBar>,
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
            file_spinner: None,
        }
    }

    /// Initialize the batch bar for `file_count` files
    pub fn initialize(&mut self, file_count: usize) {
        let bar = self
            .multi_progress
            .add(ProgressBar::new(file_count as u64));
        bar.set_style(BATCH_STYLE.clone());
        self.batch_bar = Some(bar);
    }

    /// Announce that painting of `path` has started
    pub fn start_file(&mut self, path: &Path, mode_label: &str) {
        let spinner = self.multi_progress.add(ProgressBar::new_spinner());
        spinner.set_style(FILE_STYLE.clone());
        spinner.set_message(format!("{} ({mode_label})", path.display()));
        spinner.enable_steady_tick(Duration::from_millis(100));
        self.file_spinner = Some(spinner);
    }

    /// Mark the current file as finished
    pub fn complete_file(&mut self) {
        if let Some(spinner) = self.file_spinner.take() {
            spinner.finish_and_clear();
        }
        if let Some(ref bar) = self.batch_bar {
            bar.inc(1);
        }
    }

    /// Finish all progress display
    pub fn finish(&mut self) {
        if let Some(spinner) = self.file_spinner.take() {
            spinner.finish_and_clear();
        }
        if let Some(bar) = self.batch_bar.take() {
            bar.finish();
        }
    }
}
