use serde::Serialize;

use crate::evaluate::fraction;
use crate::evaluate::threshold::pass_count;
use crate::model::scores::ScoreSet;
use crate::model::thresholds::PassRule;

/// Confusion matrix of a single cut, with signal as the positive class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ConfusionMatrix {
    /// Signal events passing the cut
    pub tp: usize,
    /// Background events failing the cut
    pub tn: usize,
    /// Background events passing the cut
    pub fp: usize,
    /// Signal events failing the cut
    pub fn_: usize,
}

impl ConfusionMatrix {
    pub fn at_threshold(
        signal: &ScoreSet,
        background: &ScoreSet,
        threshold: f64,
        rule: PassRule,
    ) -> Self {
        let tp = pass_count(signal.as_slice(), threshold, rule);
        let fp = pass_count(background.as_slice(), threshold, rule);
        Self {
            tp,
            tn: background.len() - fp,
            fp,
            fn_: signal.len() - tp,
        }
    }

    pub fn total(&self) -> usize {
        self.tp + self.tn + self.fp + self.fn_
    }

    pub fn accuracy(&self) -> f64 {
        fraction(self.tp + self.tn, self.total())
    }

    pub fn precision(&self) -> f64 {
        fraction(self.tp, self.tp + self.fp)
    }

    /// Equals the signal efficiency of the same cut.
    pub fn recall(&self) -> f64 {
        fraction(self.tp, self.tp + self.fn_)
    }

    /// Equals the background rejection of the same cut.
    pub fn specificity(&self) -> f64 {
        fraction(self.tn, self.tn + self.fp)
    }

    pub fn f1_score(&self) -> f64 {
        let precision = self.precision();
        let recall = self.recall();
        let denom = precision + recall;
        if denom == 0.0 {
            return 0.0;
        }
        2.0 * precision * recall / denom
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/evaluate/confusion.rs"]
mod tests;
