use crate::evaluate::fraction;
use crate::model::evaluation::EvaluationResult;
use crate::model::scores::ScoreSet;
use crate::model::thresholds::{CutProfile, PassRule, SENSITIVITY_EPSILON};
use crate::simd;

/// Evaluates one cut with the strict `score > threshold` rule.
///
/// Pure: inputs are only read, and identical inputs give bit-identical
/// results. Empty sets yield an efficiency (or rejection) of 0. Thresholds or
/// scores outside [0, 1] are not rejected; they saturate the metrics at 0 or 1.
pub fn evaluate(signal: &ScoreSet, background: &ScoreSet, threshold: f64) -> EvaluationResult {
    evaluate_slices(
        signal.as_slice(),
        background.as_slice(),
        threshold,
        PassRule::StrictlyAbove,
        SENSITIVITY_EPSILON,
    )
}

/// Same as [`evaluate`], with the pass rule and epsilon taken from `profile`.
pub fn evaluate_with(
    signal: &ScoreSet,
    background: &ScoreSet,
    threshold: f64,
    profile: &CutProfile,
) -> EvaluationResult {
    evaluate_slices(
        signal.as_slice(),
        background.as_slice(),
        threshold,
        profile.pass_rule,
        profile.epsilon,
    )
}

pub fn pass_count(values: &[f64], threshold: f64, rule: PassRule) -> usize {
    match rule {
        PassRule::StrictlyAbove => simd::count_above(values, threshold),
        PassRule::AtOrAbove => simd::count_at_or_above(values, threshold),
    }
}

fn evaluate_slices(
    signal: &[f64],
    background: &[f64],
    threshold: f64,
    rule: PassRule,
    epsilon: f64,
) -> EvaluationResult {
    let signal_pass_count = pass_count(signal, threshold, rule);
    let background_pass_count = pass_count(background, threshold, rule);

    let signal_efficiency = fraction(signal_pass_count, signal.len());
    let background_rejection = if background.is_empty() {
        0.0
    } else {
        1.0 - fraction(background_pass_count, background.len())
    };
    let sensitivity = signal_efficiency / (background_pass_count as f64 + epsilon).sqrt();

    EvaluationResult {
        threshold,
        n_signal: signal.len(),
        n_background: background.len(),
        signal_pass_count,
        background_pass_count,
        signal_efficiency,
        background_rejection,
        sensitivity,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/evaluate/threshold.rs"]
mod tests;
