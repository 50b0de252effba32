use serde::Serialize;

use crate::input::{InputError, ScoreSource, load_scores};
use crate::model::scores::LabeledScores;
use crate::simd;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InputAudit {
    pub n_signal: usize,
    pub n_background: usize,
    pub signal_nan: usize,
    pub background_nan: usize,
    pub out_of_range: usize,
}

#[derive(Debug, Clone)]
pub struct Stage1Output {
    pub scores: LabeledScores,
    pub audit: InputAudit,
}

pub fn run_stage1(source: &ScoreSource) -> Result<Stage1Output, InputError> {
    let scores = load_scores(source)?;
    let audit = audit_scores(&scores);

    tracing::info!(
        n_events = scores.n_events(),
        n_signal = audit.n_signal,
        n_background = audit.n_background,
        "loaded classifier scores"
    );
    if audit.n_signal == 0 || audit.n_background == 0 {
        tracing::warn!(
            n_signal = audit.n_signal,
            n_background = audit.n_background,
            "one class has no events; its efficiency or rejection will be reported as 0"
        );
    }
    if audit.signal_nan + audit.background_nan > 0 {
        tracing::warn!(
            signal_nan = audit.signal_nan,
            background_nan = audit.background_nan,
            "NaN scores present; they never pass a threshold"
        );
    }
    if audit.out_of_range > 0 {
        tracing::warn!(
            out_of_range = audit.out_of_range,
            "scores outside [0, 1] present; are these probabilities?"
        );
    }

    Ok(Stage1Output { scores, audit })
}

pub fn audit_scores(scores: &LabeledScores) -> InputAudit {
    let out_of_range = scores
        .signal
        .scores
        .iter()
        .chain(scores.background.scores.iter())
        .filter(|s| !s.is_nan() && !(0.0..=1.0).contains(*s))
        .count();
    InputAudit {
        n_signal: scores.signal.len(),
        n_background: scores.background.len(),
        signal_nan: simd::count_nan(scores.signal.as_slice()),
        background_nan: simd::count_nan(scores.background.as_slice()),
        out_of_range,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_scores.rs"]
mod tests;
