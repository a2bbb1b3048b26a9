//! Scoring progress display

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

use crate::io::configuration::PROGRESS_BAR_WIDTH;

static SCORING_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Pairs: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar over pairwise score evaluation
pub struct ScoringProgress {
    bar: ProgressBar,
}

impl ScoringProgress {
    /// Create a bar expecting `total_pairs` ordered pair evaluations
    pub fn new(total_pairs: usize) -> Self {
        let bar = ProgressBar::new(total_pairs as u64);
        bar.set_style(SCORING_STYLE.clone());
        Self { bar }
    }

    /// Report the number of pairs evaluated so far
    pub fn update(&self, evaluated: usize) {
        self.bar.set_position(evaluated as u64);
    }

    /// Complete and remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
