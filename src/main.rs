use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use thiserror::Error;

use kira_sigcut::evaluate::{EvaluateError, evaluate_with};
use kira_sigcut::input::{InputError, ScoreSource};
use kira_sigcut::logging::init_logging;
use kira_sigcut::model::thresholds::{CutProfile, MIN_SWEEP_STEP};
use kira_sigcut::pipeline::stage1_scores::run_stage1;
use kira_sigcut::pipeline::stage2_evaluate::{Stage2Inputs, run_stage2};
use kira_sigcut::pipeline::stage3_report::{ReportError, Stage3Input, write_reports};
use kira_sigcut::report::format_f64_6;
use kira_sigcut::report::json::render_evaluation_json;
use kira_sigcut::simd;

#[derive(Debug, Parser)]
#[command(
    name = "kira-sigcut",
    version,
    about = "Signal efficiency / background rejection threshold studies for classifier scores"
)]
struct Cli {
    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Only warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate a single threshold and print the metrics
    Eval(EvalArgs),
    /// Full study: sweep, working point, ROC, histograms and reports
    Run(RunArgs),
}

#[derive(Debug, Clone, Args)]
struct InputArgs {
    /// Table with score and label columns (.gz accepted)
    #[arg(long, conflicts_with_all = ["signal", "background"])]
    scores: Option<PathBuf>,
    /// Scores of true-signal events, one per line
    #[arg(long)]
    signal: Option<PathBuf>,
    /// Scores of true-background events, one per line
    #[arg(long)]
    background: Option<PathBuf>,
}

#[derive(Debug, Clone, Args)]
struct EvalArgs {
    #[command(flatten)]
    input: InputArgs,
    #[arg(long, default_value_t = 0.5)]
    threshold: f64,
    /// Count scores equal to the threshold as passing
    #[arg(long)]
    inclusive: bool,
    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Args)]
struct RunArgs {
    #[command(flatten)]
    input: InputArgs,
    /// Output directory for the reports
    #[arg(long)]
    out: PathBuf,
    #[arg(long, default_value_t = 0.5)]
    threshold: f64,
    /// Sweep grid spacing
    #[arg(long)]
    step: Option<f64>,
    /// Histogram bins over [0, 1]
    #[arg(long)]
    bins: Option<usize>,
    /// Signal efficiency the working point must keep
    #[arg(long)]
    target_efficiency: Option<f64>,
    /// Count scores equal to the threshold as passing
    #[arg(long)]
    inclusive: bool,
}

#[derive(Debug, Clone, PartialEq)]
struct RunConfig {
    source: ScoreSource,
    out_dir: PathBuf,
    threshold: f64,
    profile: CutProfile,
}

#[derive(Debug, Error, PartialEq)]
enum ConfigError {
    #[error("provide either --scores or both --signal and --background")]
    Inputs,
    #[error("threshold must be a number")]
    NanThreshold,
    #[error("invalid --step {0}: expected a value in [1e-6, 1]")]
    Step(f64),
    #[error("--bins must be at least 1")]
    Bins,
    #[error("invalid --target-efficiency {0}: expected a value in [0, 1]")]
    TargetEfficiency(f64),
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Evaluate(#[from] EvaluateError),
    #[error(transparent)]
    Report(#[from] ReportError),
    #[error("failed to serialize result: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    tracing::debug!(backend = simd::backend_name(), "pass counting backend");
    if let Err(err) = run(cli.command) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::Eval(args) => run_eval(&args),
        Command::Run(args) => run_study(&args),
    }
}

fn run_eval(args: &EvalArgs) -> Result<(), CliError> {
    print!("{}", eval_output(args)?);
    Ok(())
}

/// Loads the inputs and renders the single-threshold metrics as printed by `eval`.
fn eval_output(args: &EvalArgs) -> Result<String, CliError> {
    let source = args.input.source()?;
    let threshold = check_threshold(args.threshold)?;
    let profile = base_profile(args.inclusive);

    let stage1 = run_stage1(&source)?;
    let result = evaluate_with(
        &stage1.scores.signal,
        &stage1.scores.background,
        threshold,
        &profile,
    );

    if args.json {
        return Ok(format!("{}\n", render_evaluation_json(&result)?));
    }
    let mut out = String::new();
    out.push_str(&format!("threshold\t{}\n", format_f64_6(result.threshold)));
    out.push_str(&format!(
        "signal_efficiency\t{}\n",
        format_f64_6(result.signal_efficiency)
    ));
    out.push_str(&format!(
        "background_rejection\t{}\n",
        format_f64_6(result.background_rejection)
    ));
    out.push_str(&format!("sensitivity\t{}\n", format_f64_6(result.sensitivity)));
    Ok(out)
}

fn run_study(args: &RunArgs) -> Result<(), CliError> {
    let config = resolve_run_config(args)?;
    tracing::info!(
        profile = config.profile.name,
        pass_rule = config.profile.pass_rule.as_str(),
        threshold = config.threshold,
        "starting threshold study"
    );

    let stage1 = run_stage1(&config.source)?;
    let stage2 = run_stage2(&Stage2Inputs {
        scores: &stage1.scores,
        threshold: config.threshold,
        profile: &config.profile,
    })?;

    let input = Stage3Input {
        source: describe_source(&config.source),
        scores: &stage1.scores,
        audit: &stage1.audit,
        profile: &config.profile,
        stage2: &stage2,
        tool_name: "kira-sigcut".to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
        simd_backend: simd::backend_name().to_string(),
    };
    write_reports(&input, &config.out_dir)?;
    Ok(())
}

impl InputArgs {
    fn source(&self) -> Result<ScoreSource, ConfigError> {
        match (&self.scores, &self.signal, &self.background) {
            (Some(table), None, None) => Ok(ScoreSource::Table(table.clone())),
            (None, Some(signal), Some(background)) => Ok(ScoreSource::Split {
                signal: signal.clone(),
                background: background.clone(),
            }),
            _ => Err(ConfigError::Inputs),
        }
    }
}

fn base_profile(inclusive: bool) -> CutProfile {
    if inclusive {
        CutProfile::inclusive_v1()
    } else {
        CutProfile::default_v1()
    }
}

/// NaN is rejected; values outside [0, 1] only warn since the metrics saturate.
fn check_threshold(threshold: f64) -> Result<f64, ConfigError> {
    if threshold.is_nan() {
        return Err(ConfigError::NanThreshold);
    }
    if !(0.0..=1.0).contains(&threshold) {
        tracing::warn!(threshold, "threshold outside [0, 1]; metrics will saturate");
    }
    Ok(threshold)
}

fn resolve_run_config(args: &RunArgs) -> Result<RunConfig, ConfigError> {
    let source = args.input.source()?;
    let threshold = check_threshold(args.threshold)?;

    let mut profile = base_profile(args.inclusive);
    if let Some(step) = args.step {
        if !(MIN_SWEEP_STEP..=1.0).contains(&step) {
            return Err(ConfigError::Step(step));
        }
        profile.sweep_step = step;
    }
    if let Some(bins) = args.bins {
        if bins == 0 {
            return Err(ConfigError::Bins);
        }
        profile.histogram_bins = bins;
    }
    if let Some(target) = args.target_efficiency {
        if !(0.0..=1.0).contains(&target) {
            return Err(ConfigError::TargetEfficiency(target));
        }
        profile.target_efficiency = target;
    }

    Ok(RunConfig {
        source,
        out_dir: args.out.clone(),
        threshold,
        profile,
    })
}

fn describe_source(source: &ScoreSource) -> String {
    match source {
        ScoreSource::Table(path) => path.display().to_string(),
        ScoreSource::Split { signal, background } => format!(
            "signal={}, background={}",
            signal.display(),
            background.display()
        ),
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
