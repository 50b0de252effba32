pub mod evaluation;
pub mod scores;
pub mod thresholds;
