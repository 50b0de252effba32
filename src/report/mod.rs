pub mod json;
pub mod text;

use serde::Serialize;

use crate::evaluate::ConfusionMatrix;
use crate::model::evaluation::EvaluationResult;
use crate::model::thresholds::CutProfile;

#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
    pub simd_backend: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InputSummary {
    pub source: String,
    pub n_signal: usize,
    pub n_background: usize,
    pub out_of_range: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreStats {
    pub n: usize,
    pub nan: usize,
    pub median: f64,
    pub p10: f64,
    pub p90: f64,
}

impl ScoreStats {
    pub fn from_scores(scores: &[f64]) -> Self {
        let nan = crate::simd::count_nan(scores);
        Self {
            n: scores.len(),
            nan,
            median: median(scores),
            p10: p10(scores),
            p90: p90(scores),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfusionSummary {
    pub matrix: ConfusionMatrix,
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub specificity: f64,
    pub f1_score: f64,
}

impl From<ConfusionMatrix> for ConfusionSummary {
    fn from(matrix: ConfusionMatrix) -> Self {
        Self {
            accuracy: matrix.accuracy(),
            precision: matrix.precision(),
            recall: matrix.recall(),
            specificity: matrix.specificity(),
            f1_score: matrix.f1_score(),
            matrix,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct WorkingPointSummary {
    pub target_efficiency: f64,
    pub result: Option<EvaluationResult>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool: ToolMeta,
    pub input: InputSummary,
    pub profile: CutProfile,
    pub chosen: EvaluationResult,
    pub confusion: ConfusionSummary,
    pub best_sensitivity: Option<EvaluationResult>,
    pub working_point: WorkingPointSummary,
    pub roc_auc: f64,
    pub signal: ScoreStats,
    pub background: ScoreStats,
}

pub fn format_f64_6(v: f64) -> String {
    format!("{:.6}", v)
}

/// Nearest-rank quantile (rank rounded up) over the non-NaN values; 0 when none remain.
pub fn quantile_indexed(values: &[f64], p: f64) -> f64 {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    if sorted.is_empty() {
        return 0.0;
    }
    sorted.sort_by(|a, b| a.total_cmp(b));
    let n = sorted.len();
    let idx = ((n - 1) as f64 * p).ceil() as usize;
    sorted[idx.min(n - 1)]
}

pub fn median(values: &[f64]) -> f64 {
    quantile_indexed(values, 0.5)
}

pub fn p10(values: &[f64]) -> f64 {
    quantile_indexed(values, 0.10)
}

pub fn p90(values: &[f64]) -> f64 {
    quantile_indexed(values, 0.90)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
