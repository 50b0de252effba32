use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use flate2::Compression;
use flate2::write::GzEncoder;

use super::scores::{parse_score_list, parse_score_table};
use super::*;
use crate::model::scores::EventClass;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("kira_sigcut_input_test_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_file(path: &Path, contents: &str) {
    let mut f = BufWriter::new(File::create(path).unwrap());
    f.write_all(contents.as_bytes()).unwrap();
}

fn write_gz(path: &Path, contents: &str) {
    let mut enc = GzEncoder::new(File::create(path).unwrap(), Compression::default());
    enc.write_all(contents.as_bytes()).unwrap();
    enc.finish().unwrap();
}

#[test]
fn test_table_with_header() {
    let dir = make_temp_dir();
    let path = dir.join("scores.tsv");
    write_file(
        &path,
        "# mlp output\nevent\tprobability\tlabel\n1\t0.9\t1\n2\t0.7\t0\n\n3\t0.2\tsignal\n",
    );
    let rows = parse_score_table(&path).unwrap();
    assert_eq!(
        rows,
        vec![
            (0.9, EventClass::Signal),
            (0.7, EventClass::Background),
            (0.2, EventClass::Signal),
        ]
    );
}

#[test]
fn test_table_without_header_csv() {
    let dir = make_temp_dir();
    let path = dir.join("scores.csv");
    write_file(&path, "0.9,1\n0.3,0\n0.1,b\n");
    let labeled = load_scores(&ScoreSource::Table(path)).unwrap();
    assert_eq!(labeled.signal.scores, vec![0.9]);
    assert_eq!(labeled.background.scores, vec![0.3, 0.1]);
}

#[test]
fn test_table_gz() {
    let dir = make_temp_dir();
    let path = dir.join("scores.txt.gz");
    write_gz(&path, "score label\n0.8 1\n0.4 0\n");
    let rows = parse_score_table(&path).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1], (0.4, EventClass::Background));
}

#[test]
fn test_table_errors_carry_line_numbers() {
    let dir = make_temp_dir();
    let bad_label = dir.join("bad_label.tsv");
    write_file(&bad_label, "score\tlabel\n0.5\t1\n0.6\tmaybe\n");
    let err = parse_score_table(&bad_label).unwrap_err();
    match err {
        InputError::Parse { line, .. } => assert_eq!(line, 3),
        other => panic!("unexpected error: {other}"),
    }

    let bad_score = dir.join("bad_score.tsv");
    write_file(&bad_score, "0.5\t1\nabc\t0\n");
    let err = parse_score_table(&bad_score).unwrap_err();
    assert!(err.to_string().contains("invalid score 'abc'"));

    let no_label = dir.join("no_label.tsv");
    write_file(&no_label, "score\tweight\n0.5\t1\n");
    assert!(parse_score_table(&no_label).is_err());

    let short = dir.join("short.tsv");
    write_file(&short, "0.5\n");
    assert!(parse_score_table(&short).is_err());
}

#[test]
fn test_empty_table_gives_empty_sets() {
    let dir = make_temp_dir();
    let empty = dir.join("empty.tsv");
    write_file(&empty, "# nothing\n\n");
    assert!(parse_score_table(&empty).unwrap().is_empty());

    let header_only = dir.join("header_only.tsv");
    write_file(&header_only, "score\tlabel\n");
    let labeled = load_scores(&ScoreSource::Table(header_only)).unwrap();
    assert!(labeled.signal.is_empty());
    assert!(labeled.background.is_empty());
}

#[test]
fn test_split_lists() {
    let dir = make_temp_dir();
    let sig = dir.join("signal.txt");
    let bkg = dir.join("background.txt.gz");
    write_file(&sig, "0.9\n0.8\nnan\n");
    write_gz(&bkg, "");
    let labeled = load_scores(&ScoreSource::Split {
        signal: sig,
        background: bkg,
    })
    .unwrap();
    assert_eq!(labeled.signal.len(), 3);
    assert!(labeled.signal.scores[2].is_nan());
    assert!(labeled.background.is_empty());
}

#[test]
fn test_list_out_of_range_kept() {
    let dir = make_temp_dir();
    let path = dir.join("raw.txt");
    write_file(&path, "1.5\n-0.2\n0.3 extra\n");
    assert_eq!(parse_score_list(&path).unwrap(), vec![1.5, -0.2, 0.3]);
}

#[test]
fn test_missing_file() {
    let dir = make_temp_dir();
    let err = parse_score_list(&dir.join("absent.txt")).unwrap_err();
    assert!(matches!(err, InputError::MissingInput(_)));
}
