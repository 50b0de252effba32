use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Ground-truth class of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventClass {
    Signal,
    Background,
}

impl EventClass {
    pub fn as_str(self) -> &'static str {
        match self {
            EventClass::Signal => "signal",
            EventClass::Background => "background",
        }
    }
}

impl fmt::Display for EventClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "1.0" | "signal" | "sig" | "s" => Ok(EventClass::Signal),
            "0" | "0.0" | "background" | "bkg" | "b" => Ok(EventClass::Background),
            other => Err(format!("unknown event label '{other}'")),
        }
    }
}

/// Classifier probabilities of one ground-truth class, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreSet {
    pub class: EventClass,
    pub scores: Vec<f64>,
}

impl ScoreSet {
    pub fn new(class: EventClass, scores: Vec<f64>) -> Self {
        Self { class, scores }
    }

    pub fn signal(scores: Vec<f64>) -> Self {
        Self::new(EventClass::Signal, scores)
    }

    pub fn background(scores: Vec<f64>) -> Self {
        Self::new(EventClass::Background, scores)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.scores
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabeledScores {
    pub signal: ScoreSet,
    pub background: ScoreSet,
}

impl LabeledScores {
    pub fn new(signal: Vec<f64>, background: Vec<f64>) -> Self {
        Self {
            signal: ScoreSet::signal(signal),
            background: ScoreSet::background(background),
        }
    }

    /// Splits (score, class) pairs by class, keeping input order within each class.
    pub fn partition<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (f64, EventClass)>,
    {
        let mut signal = Vec::new();
        let mut background = Vec::new();
        for (score, class) in pairs {
            match class {
                EventClass::Signal => signal.push(score),
                EventClass::Background => background.push(score),
            }
        }
        Self::new(signal, background)
    }

    pub fn n_events(&self) -> usize {
        self.signal.len() + self.background.len()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/scores.rs"]
mod tests;
