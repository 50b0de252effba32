use crate::evaluate::{
    ConfusionMatrix, EvaluateError, RocCurve, ScoreHistogram, best_sensitivity, evaluate_with,
    roc_curve, sweep, threshold_grid, working_point,
};
use crate::model::evaluation::EvaluationResult;
use crate::model::scores::LabeledScores;
use crate::model::thresholds::CutProfile;

#[derive(Debug, Clone)]
pub struct Stage2Inputs<'a> {
    pub scores: &'a LabeledScores,
    pub threshold: f64,
    pub profile: &'a CutProfile,
}

#[derive(Debug, Clone)]
pub struct Stage2Output {
    pub chosen: EvaluationResult,
    pub confusion: ConfusionMatrix,
    pub sweep: Vec<EvaluationResult>,
    pub best_sensitivity: Option<EvaluationResult>,
    pub working_point: Option<EvaluationResult>,
    pub roc: RocCurve,
    pub signal_histogram: ScoreHistogram,
    pub background_histogram: ScoreHistogram,
}

pub fn run_stage2(inputs: &Stage2Inputs<'_>) -> Result<Stage2Output, EvaluateError> {
    let signal = &inputs.scores.signal;
    let background = &inputs.scores.background;
    let profile = inputs.profile;

    let chosen = evaluate_with(signal, background, inputs.threshold, profile);
    let confusion =
        ConfusionMatrix::at_threshold(signal, background, inputs.threshold, profile.pass_rule);

    let grid = threshold_grid(profile.sweep_step)?;
    let results = sweep(signal, background, &grid, profile);
    let best = best_sensitivity(&results).copied();
    let wp = working_point(&results, profile.target_efficiency).copied();

    let roc = roc_curve(signal, background);
    let signal_histogram = ScoreHistogram::build(signal.as_slice(), profile.histogram_bins)?;
    let background_histogram =
        ScoreHistogram::build(background.as_slice(), profile.histogram_bins)?;

    tracing::info!(
        threshold = chosen.threshold,
        signal_efficiency = chosen.signal_efficiency,
        background_rejection = chosen.background_rejection,
        sensitivity = chosen.sensitivity,
        "evaluated chosen threshold"
    );
    tracing::info!(points = results.len(), auc = roc.auc, "threshold sweep done");
    match &wp {
        Some(r) => tracing::info!(
            target = profile.target_efficiency,
            threshold = r.threshold,
            background_rejection = r.background_rejection,
            "working point found"
        ),
        None => tracing::warn!(
            target = profile.target_efficiency,
            "no grid threshold reaches the target signal efficiency"
        ),
    }

    Ok(Stage2Output {
        chosen,
        confusion,
        sweep: results,
        best_sensitivity: best,
        working_point: wp,
        roc,
        signal_histogram,
        background_histogram,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_evaluate.rs"]
mod tests;
