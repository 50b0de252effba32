//! Threshold studies over classifier scores: single-cut evaluation, sweeps,
//! confusion matrices, ROC curves and score distributions.

pub mod confusion;
pub mod histogram;
pub mod roc;
pub mod sweep;
pub mod threshold;

use thiserror::Error;

pub use confusion::ConfusionMatrix;
pub use histogram::ScoreHistogram;
pub use roc::{RocCurve, RocPoint, roc_curve};
pub use sweep::{best_sensitivity, sweep, threshold_grid, working_point};
pub use threshold::{evaluate, evaluate_with};

#[derive(Debug, Error, PartialEq)]
pub enum EvaluateError {
    #[error("invalid sweep step {0}: expected a value in [1e-6, 1]")]
    InvalidStep(f64),
    #[error("score histogram needs at least one bin")]
    ZeroBins,
}

/// `part / whole`, or 0 when `whole` is 0.
#[inline]
pub(crate) fn fraction(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64
}
