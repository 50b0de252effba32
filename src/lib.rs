//! Signal-efficiency / background-rejection threshold studies over binary
//! classifier scores.

pub mod evaluate;
pub mod input;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod report;
pub mod simd;

pub use evaluate::{evaluate, evaluate_with};
pub use model::evaluation::EvaluationResult;
pub use model::scores::{EventClass, LabeledScores, ScoreSet};
pub use model::thresholds::{CutProfile, PassRule, SENSITIVITY_EPSILON};
