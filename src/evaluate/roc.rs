use serde::Serialize;

use crate::model::scores::ScoreSet;

/// One operating point. `tpr` is the signal efficiency and `fpr` is
/// `1 - background rejection` of the cut `score >= threshold`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RocPoint {
    pub threshold: f64,
    pub fpr: f64,
    pub tpr: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RocCurve {
    pub points: Vec<RocPoint>,
    pub auc: f64,
}

impl RocCurve {
    fn diagonal() -> Self {
        Self {
            points: vec![
                RocPoint {
                    threshold: f64::INFINITY,
                    fpr: 0.0,
                    tpr: 0.0,
                },
                RocPoint {
                    threshold: f64::NEG_INFINITY,
                    fpr: 1.0,
                    tpr: 1.0,
                },
            ],
            auc: 0.5,
        }
    }
}

/// ROC curve over every distinct score, highest first. Tied scores collapse
/// into one point so ties earn half credit in the AUC. NaN scores are skipped.
pub fn roc_curve(signal: &ScoreSet, background: &ScoreSet) -> RocCurve {
    let mut pairs: Vec<(f64, bool)> = Vec::with_capacity(signal.len() + background.len());
    pairs.extend(
        signal
            .scores
            .iter()
            .filter(|s| !s.is_nan())
            .map(|&s| (s, true)),
    );
    pairs.extend(
        background
            .scores
            .iter()
            .filter(|s| !s.is_nan())
            .map(|&s| (s, false)),
    );

    let n_pos = pairs.iter().filter(|(_, is_signal)| *is_signal).count();
    let n_neg = pairs.len() - n_pos;
    if n_pos == 0 || n_neg == 0 {
        return RocCurve::diagonal();
    }

    pairs.sort_by(|a, b| b.0.total_cmp(&a.0));

    let mut points = Vec::with_capacity(pairs.len() + 1);
    points.push(RocPoint {
        threshold: f64::INFINITY,
        fpr: 0.0,
        tpr: 0.0,
    });

    let mut tp = 0usize;
    let mut fp = 0usize;
    let mut auc = 0.0;
    let mut i = 0usize;
    while i < pairs.len() {
        let score = pairs[i].0;
        while i < pairs.len() && pairs[i].0 == score {
            if pairs[i].1 {
                tp += 1;
            } else {
                fp += 1;
            }
            i += 1;
        }
        let point = RocPoint {
            threshold: score,
            fpr: fp as f64 / n_neg as f64,
            tpr: tp as f64 / n_pos as f64,
        };
        if let Some(prev) = points.last() {
            auc += (point.fpr - prev.fpr) * (point.tpr + prev.tpr) / 2.0;
        }
        points.push(point);
    }

    RocCurve { points, auc }
}

#[cfg(test)]
#[path = "../../tests/src_inline/evaluate/roc.rs"]
mod tests;
