use crate::evaluate::EvaluateError;
use crate::evaluate::threshold::evaluate_with;
use crate::model::evaluation::EvaluationResult;
use crate::model::scores::ScoreSet;
use crate::model::thresholds::{CutProfile, MIN_SWEEP_STEP};

const GRID_DECIMALS: f64 = 1e12;

/// Thresholds `0, step, 2*step, ...` ending exactly at 1.0. The step must lie
/// in `[MIN_SWEEP_STEP, 1]`.
pub fn threshold_grid(step: f64) -> Result<Vec<f64>, EvaluateError> {
    if !(MIN_SWEEP_STEP..=1.0).contains(&step) {
        return Err(EvaluateError::InvalidStep(step));
    }
    let n_steps = (1.0 / step + 1e-9).floor() as usize;
    let mut grid = Vec::with_capacity(n_steps + 2);
    for i in 0..=n_steps {
        let t = ((i as f64 * step) * GRID_DECIMALS).round() / GRID_DECIMALS;
        grid.push(t.min(1.0));
    }
    if grid.last().is_some_and(|&last| last < 1.0) {
        grid.push(1.0);
    }
    Ok(grid)
}

pub fn sweep(
    signal: &ScoreSet,
    background: &ScoreSet,
    grid: &[f64],
    profile: &CutProfile,
) -> Vec<EvaluationResult> {
    grid.iter()
        .map(|&t| evaluate_with(signal, background, t, profile))
        .collect()
}

/// First result with the largest sensitivity, in slice order.
pub fn best_sensitivity(results: &[EvaluationResult]) -> Option<&EvaluationResult> {
    let mut best: Option<&EvaluationResult> = None;
    for r in results {
        if r.sensitivity.is_nan() {
            continue;
        }
        match best {
            Some(b) if r.sensitivity <= b.sensitivity => {}
            _ => best = Some(r),
        }
    }
    best
}

/// Tightest cut that still keeps at least `target_efficiency` of the signal.
pub fn working_point(
    results: &[EvaluationResult],
    target_efficiency: f64,
) -> Option<&EvaluationResult> {
    let mut chosen: Option<&EvaluationResult> = None;
    for r in results {
        if r.signal_efficiency < target_efficiency {
            continue;
        }
        match chosen {
            Some(c) if r.threshold <= c.threshold => {}
            _ => chosen = Some(r),
        }
    }
    chosen
}

#[cfg(test)]
#[path = "../../tests/src_inline/evaluate/sweep.rs"]
mod tests;
