use serde::Serialize;

use crate::evaluate::EvaluateError;

/// Equal-width score distribution over [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreHistogram {
    pub bins: usize,
    pub counts: Vec<usize>,
    pub nan_count: usize,
}

impl ScoreHistogram {
    /// Out-of-range scores land in the edge bins; 1.0 belongs to the last bin.
    pub fn build(scores: &[f64], bins: usize) -> Result<Self, EvaluateError> {
        if bins == 0 {
            return Err(EvaluateError::ZeroBins);
        }
        let mut counts = vec![0usize; bins];
        let mut nan_count = 0usize;
        for &s in scores {
            if s.is_nan() {
                nan_count += 1;
                continue;
            }
            counts[bin_index(s, bins)] += 1;
        }
        Ok(Self {
            bins,
            counts,
            nan_count,
        })
    }

    pub fn width(&self) -> f64 {
        1.0 / self.bins as f64
    }

    pub fn lower_edge(&self, bin: usize) -> f64 {
        bin as f64 / self.bins as f64
    }

    pub fn upper_edge(&self, bin: usize) -> f64 {
        (bin + 1) as f64 / self.bins as f64
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Counts normalised to unit area; all zero for an empty histogram.
    pub fn density(&self) -> Vec<f64> {
        let total = self.total();
        if total == 0 {
            return vec![0.0; self.bins];
        }
        let norm = total as f64 * self.width();
        self.counts.iter().map(|&c| c as f64 / norm).collect()
    }
}

fn bin_index(score: f64, bins: usize) -> usize {
    if score <= 0.0 {
        return 0;
    }
    let idx = (score * bins as f64) as usize;
    idx.min(bins - 1)
}

#[cfg(test)]
#[path = "../../tests/src_inline/evaluate/histogram.rs"]
mod tests;
