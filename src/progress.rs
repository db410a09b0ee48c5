//! Progress bar display for bundling

use indicatif::{ProgressBar, ProgressStyle};

/// Progress display for the bundler's read phase
pub struct ProgressDisplay {
    file_pb: ProgressBar,
}

impl ProgressDisplay {
    /// Create a new progress display with total file count
    pub fn new(total_files: u64) -> Self {
        let file_style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} files {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let file_pb = ProgressBar::new(total_files);
        file_pb.set_style(file_style);

        Self { file_pb }
    }

    /// Update to show the file currently being read
    pub fn update_file(&self, file_path: &str) {
        self.file_pb.set_message(truncate_path(file_path));
        self.file_pb.inc(1);
    }

    /// Finish file progress
    pub fn finish(&self) {
        self.file_pb.finish_and_clear();
    }

    /// Abandon on error
    pub fn abandon(&self) {
        self.file_pb.abandon();
    }
}

/// Truncate long paths for display, keeping the tail
///
/// The cut point is moved forward to the next char boundary so multibyte
/// path components never split mid-character.
fn truncate_path(file_path: &str) -> String {
    const MAX_LEN: usize = 50;
    const TAIL_LEN: usize = 47;

    if file_path.len() <= MAX_LEN {
        return file_path.to_string();
    }

    let mut cut = file_path.len() - TAIL_LEN;
    while !file_path.is_char_boundary(cut) {
        cut += 1;
    }
    format!("...{}", &file_path[cut..])
}
