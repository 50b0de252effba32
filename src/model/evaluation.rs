use serde::Serialize;

/// Metrics of one threshold applied to a signal and a background score set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EvaluationResult {
    pub threshold: f64,
    pub n_signal: usize,
    pub n_background: usize,
    pub signal_pass_count: usize,
    pub background_pass_count: usize,
    pub signal_efficiency: f64,
    pub background_rejection: f64,
    pub sensitivity: f64,
}

impl EvaluationResult {
    /// Fraction of background surviving the cut; 0 for an empty background set.
    pub fn background_efficiency(&self) -> f64 {
        if self.n_background == 0 {
            return 0.0;
        }
        self.background_pass_count as f64 / self.n_background as f64
    }
}
