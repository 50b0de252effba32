use crate::model::evaluation::EvaluationResult;
use crate::report::SummaryData;

pub fn render_summary_json(data: &SummaryData) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(data)
}

/// Compact single-line form used by `eval --json`.
pub fn render_evaluation_json(result: &EvaluationResult) -> Result<String, serde_json::Error> {
    serde_json::to_string(result)
}
