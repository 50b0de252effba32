use serde::Serialize;

/// Additive guard in the sensitivity denominator.
pub const SENSITIVITY_EPSILON: f64 = 1e-10;

/// Finest sweep spacing: at most a million grid points, each well above the
/// 1e-12 grid rounding.
pub const MIN_SWEEP_STEP: f64 = 1e-6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PassRule {
    /// score > threshold
    StrictlyAbove,
    /// score >= threshold
    AtOrAbove,
}

impl PassRule {
    pub fn as_str(self) -> &'static str {
        match self {
            PassRule::StrictlyAbove => "score > threshold",
            PassRule::AtOrAbove => "score >= threshold",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CutProfile {
    pub name: &'static str,
    pub epsilon: f64,
    pub pass_rule: PassRule,
    pub sweep_step: f64,
    pub histogram_bins: usize,
    pub target_efficiency: f64,
}

impl CutProfile {
    pub fn default_v1() -> Self {
        Self {
            name: "default_v1",
            epsilon: SENSITIVITY_EPSILON,
            pass_rule: PassRule::StrictlyAbove,
            sweep_step: 0.01,
            histogram_bins: 50,
            target_efficiency: 0.90,
        }
    }

    pub fn inclusive_v1() -> Self {
        let mut base = Self::default_v1();
        base.name = "inclusive_v1";
        base.pass_rule = PassRule::AtOrAbove;
        base
    }
}

impl Default for CutProfile {
    fn default() -> Self {
        Self::default_v1()
    }
}
