use std::path::Path;

use crate::input::InputError;
use crate::input::reader::{is_skippable, open_maybe_gz, split_fields};
use crate::model::scores::EventClass;

const SCORE_COLUMNS: &[&str] = &["score", "prob", "proba", "probability", "y_score", "output"];
const LABEL_COLUMNS: &[&str] = &["label", "class", "target", "truth", "y", "y_true", "is_signal"];

/// Reads a per-class list: one probability per line.
pub fn parse_score_list(path: &Path) -> Result<Vec<f64>, InputError> {
    let mut reader = open_maybe_gz(path)?;
    let mut buf = String::new();
    let mut scores = Vec::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let read = reader.read_line(&mut buf)?;
        if read == 0 {
            break;
        }
        line_no += 1;
        let line = buf.trim_end();
        if is_skippable(line) {
            continue;
        }
        let fields = split_fields(line);
        if fields.len() > 1 {
            tracing::warn!(
                path = %path.display(),
                line = line_no,
                "score list line has {} fields; using the first",
                fields.len()
            );
        }
        scores.push(parse_score(path, line_no, fields[0])?);
    }

    if scores.is_empty() {
        tracing::warn!(path = %path.display(), "score list is empty");
    }

    Ok(scores)
}

/// Reads a combined table of `score` and `label` columns.
///
/// A header is detected when the first field of the first data line is not a
/// number; columns are then looked up by name. Without a header the first two
/// columns are score and label. A table with no events (empty, comments only,
/// or header only) is accepted with a warning, like an empty score list; both
/// classes are then empty and evaluate to 0.
pub fn parse_score_table(path: &Path) -> Result<Vec<(f64, EventClass)>, InputError> {
    let mut reader = open_maybe_gz(path)?;
    let mut buf = String::new();
    let mut rows = Vec::new();
    let mut line_no = 0usize;
    let mut columns: Option<(usize, usize)> = None;

    loop {
        buf.clear();
        let read = reader.read_line(&mut buf)?;
        if read == 0 {
            break;
        }
        line_no += 1;
        let line = buf.trim_end();
        if is_skippable(line) {
            continue;
        }
        let fields = split_fields(line);

        if columns.is_none() {
            if fields[0].parse::<f64>().is_err() {
                let cols = resolve_header(path, line_no, &fields)?;
                tracing::debug!(
                    path = %path.display(),
                    score_col = cols.0,
                    label_col = cols.1,
                    "score table header detected"
                );
                columns = Some(cols);
                continue;
            }
            columns = Some((0, 1));
        }
        let (score_col, label_col) = columns.unwrap_or((0, 1));

        let needed = score_col.max(label_col) + 1;
        if fields.len() < needed {
            return Err(InputError::parse(
                path,
                line_no,
                format!("expected at least {needed} columns, found {}", fields.len()),
            ));
        }
        let score = parse_score(path, line_no, fields[score_col])?;
        let class = fields[label_col]
            .parse::<EventClass>()
            .map_err(|msg| InputError::parse(path, line_no, msg))?;
        rows.push((score, class));
    }

    if rows.is_empty() {
        tracing::warn!(path = %path.display(), "score table has no events");
    }

    Ok(rows)
}

fn resolve_header(path: &Path, line_no: usize, fields: &[&str]) -> Result<(usize, usize), InputError> {
    let find = |names: &[&str]| {
        fields
            .iter()
            .position(|f| names.iter().any(|n| f.eq_ignore_ascii_case(n)))
    };
    let score_col = find(SCORE_COLUMNS)
        .ok_or_else(|| InputError::parse(path, line_no, "header has no score column"))?;
    let label_col = find(LABEL_COLUMNS)
        .ok_or_else(|| InputError::parse(path, line_no, "header has no label column"))?;
    Ok((score_col, label_col))
}

fn parse_score(path: &Path, line_no: usize, field: &str) -> Result<f64, InputError> {
    field
        .parse::<f64>()
        .map_err(|_| InputError::parse(path, line_no, format!("invalid score '{field}'")))
}
