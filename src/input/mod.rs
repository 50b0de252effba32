use std::path::{Path, PathBuf};

use thiserror::Error;

pub mod reader;
pub mod scores;

use crate::model::scores::LabeledScores;
use scores::{parse_score_list, parse_score_table};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreSource {
    /// One file with score and label columns.
    Table(PathBuf),
    /// One score list per class.
    Split { signal: PathBuf, background: PathBuf },
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("parse error: {path}:{line}: {msg}")]
    Parse {
        path: String,
        line: usize,
        msg: String,
    },
}

impl InputError {
    pub fn parse(path: &Path, line: usize, msg: impl Into<String>) -> Self {
        InputError::Parse {
            path: path.display().to_string(),
            line,
            msg: msg.into(),
        }
    }
}

pub fn load_scores(source: &ScoreSource) -> Result<LabeledScores, InputError> {
    match source {
        ScoreSource::Table(path) => {
            tracing::debug!(path = %path.display(), "reading score table");
            let rows = parse_score_table(path)?;
            Ok(LabeledScores::partition(rows))
        }
        ScoreSource::Split { signal, background } => {
            tracing::debug!(
                signal = %signal.display(),
                background = %background.display(),
                "reading per-class score lists"
            );
            let sig = parse_score_list(signal)?;
            let bkg = parse_score_list(background)?;
            Ok(LabeledScores::new(sig, bkg))
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
