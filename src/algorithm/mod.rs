/// Greedy seam acceptance and component merging
pub mod assembly;
/// Pair-score tables and ranked seam candidates
pub mod scores;
