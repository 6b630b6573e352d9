pub mod aggregator;
pub mod correction;
pub mod factors;
pub mod recommendation;
pub mod thresholds;

pub use aggregator::score_matches;
pub use correction::ranking_correction;
pub use recommendation::recommend;
pub use thresholds::{TierThresholds, threshold_table, thresholds_for};
