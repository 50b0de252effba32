use super::*;
use kira_sigcut::model::thresholds::PassRule;
use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("kira_sigcut_main_test_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn eval_args(cli: Cli) -> EvalArgs {
    match cli.command {
        Command::Eval(args) => args,
        other => panic!("expected eval, got {other:?}"),
    }
}

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

fn run_args(cli: Cli) -> RunArgs {
    match cli.command {
        Command::Run(args) => args,
        other => panic!("expected run, got {other:?}"),
    }
}

#[test]
fn test_run_defaults() {
    let cli = parse(&["kira-sigcut", "run", "--scores", "s.tsv", "--out", "out"]);
    let config = resolve_run_config(&run_args(cli)).unwrap();
    assert_eq!(config.source, ScoreSource::Table(PathBuf::from("s.tsv")));
    assert_eq!(config.out_dir, PathBuf::from("out"));
    assert_eq!(config.threshold, 0.5);
    assert_eq!(config.profile, CutProfile::default_v1());
}

#[test]
fn test_run_overrides() {
    let cli = parse(&[
        "kira-sigcut",
        "-vv",
        "run",
        "--signal",
        "sig.txt",
        "--background",
        "bkg.txt.gz",
        "--out",
        "out",
        "--threshold",
        "0.8",
        "--step",
        "0.05",
        "--bins",
        "20",
        "--target-efficiency",
        "0.6",
        "--inclusive",
    ]);
    assert_eq!(cli.verbose, 2);
    let config = resolve_run_config(&run_args(cli)).unwrap();
    assert_eq!(
        config.source,
        ScoreSource::Split {
            signal: PathBuf::from("sig.txt"),
            background: PathBuf::from("bkg.txt.gz"),
        }
    );
    assert_eq!(config.threshold, 0.8);
    assert_eq!(config.profile.sweep_step, 0.05);
    assert_eq!(config.profile.histogram_bins, 20);
    assert_eq!(config.profile.target_efficiency, 0.6);
    assert_eq!(config.profile.pass_rule, PassRule::AtOrAbove);
}

#[test]
fn test_run_invalid_values() {
    let cli = parse(&["kira-sigcut", "run", "--scores", "s", "--out", "o", "--step", "0"]);
    assert_eq!(resolve_run_config(&run_args(cli)), Err(ConfigError::Step(0.0)));

    let cli = parse(&["kira-sigcut", "run", "--scores", "s", "--out", "o", "--step", "1e-11"]);
    assert_eq!(resolve_run_config(&run_args(cli)), Err(ConfigError::Step(1e-11)));

    let cli = parse(&["kira-sigcut", "run", "--scores", "s", "--out", "o", "--bins", "0"]);
    assert_eq!(resolve_run_config(&run_args(cli)), Err(ConfigError::Bins));

    let cli = parse(&[
        "kira-sigcut",
        "run",
        "--scores",
        "s",
        "--out",
        "o",
        "--target-efficiency",
        "1.5",
    ]);
    assert_eq!(
        resolve_run_config(&run_args(cli)),
        Err(ConfigError::TargetEfficiency(1.5))
    );
}

#[test]
fn test_out_of_range_threshold_is_accepted() {
    let cli = parse(&["kira-sigcut", "run", "--scores", "s", "--out", "o", "--threshold", "1.2"]);
    let config = resolve_run_config(&run_args(cli)).unwrap();
    assert_eq!(config.threshold, 1.2);
    assert_eq!(check_threshold(f64::NAN), Err(ConfigError::NanThreshold));
}

#[test]
fn test_input_combinations() {
    let cli = parse(&["kira-sigcut", "run", "--signal", "s", "--out", "o"]);
    assert_eq!(resolve_run_config(&run_args(cli)), Err(ConfigError::Inputs));

    let cli = parse(&["kira-sigcut", "run", "--out", "o"]);
    assert_eq!(resolve_run_config(&run_args(cli)), Err(ConfigError::Inputs));

    assert!(
        Cli::try_parse_from(["kira-sigcut", "eval", "--scores", "a", "--signal", "b"]).is_err()
    );
}

#[test]
fn test_eval_args() {
    let cli = parse(&["kira-sigcut", "eval", "--scores", "s.tsv", "--threshold", "0.3", "--json"]);
    match cli.command {
        Command::Eval(args) => {
            assert_eq!(args.threshold, 0.3);
            assert!(args.json);
            assert!(!args.inclusive);
            assert_eq!(
                args.input.source().unwrap(),
                ScoreSource::Table(PathBuf::from("s.tsv"))
            );
        }
        other => panic!("expected eval, got {other:?}"),
    }
}

#[test]
fn test_describe_source() {
    let split = ScoreSource::Split {
        signal: PathBuf::from("a"),
        background: PathBuf::from("b"),
    };
    assert_eq!(describe_source(&split), "signal=a, background=b");
}

#[test]
fn test_eval_reads_table_and_prints_metrics() {
    let dir = make_temp_dir();
    let path = dir.join("scores.tsv");
    fs::write(
        &path,
        "score\tlabel\n0.9\t1\n0.8\t1\n0.4\t1\n0.2\t1\n0.7\t0\n0.3\t0\n0.1\t0\n0.05\t0\n",
    )
    .unwrap();
    let path_arg = path.to_str().unwrap();

    let cli = parse(&["kira-sigcut", "eval", "--scores", path_arg, "--threshold", "0.5"]);
    let out = eval_output(&eval_args(cli)).unwrap();
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(
        lines,
        vec![
            "threshold\t0.500000",
            "signal_efficiency\t0.500000",
            "background_rejection\t0.750000",
            "sensitivity\t0.500000",
        ]
    );

    let cli = parse(&[
        "kira-sigcut",
        "eval",
        "--scores",
        path_arg,
        "--threshold",
        "0.4",
        "--json",
    ]);
    let out = eval_output(&eval_args(cli)).unwrap();
    let value: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
    assert_eq!(value["signal_pass_count"], 2);
    assert_eq!(value["signal_efficiency"], 0.5);
    assert_eq!(value["background_rejection"], 0.75);

    let cli = parse(&[
        "kira-sigcut",
        "eval",
        "--scores",
        path_arg,
        "--threshold",
        "0.4",
        "--inclusive",
        "--json",
    ]);
    let out = eval_output(&eval_args(cli)).unwrap();
    let value: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
    assert_eq!(value["signal_pass_count"], 3);
    assert_eq!(value["signal_efficiency"], 0.75);
}

#[test]
fn test_eval_missing_file_is_error() {
    let dir = make_temp_dir();
    let path = dir.join("absent.tsv");
    let cli = parse(&["kira-sigcut", "eval", "--scores", path.to_str().unwrap()]);
    assert!(matches!(
        eval_output(&eval_args(cli)),
        Err(CliError::Input(_))
    ));
}
