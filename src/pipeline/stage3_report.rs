use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::model::scores::LabeledScores;
use crate::model::thresholds::CutProfile;
use crate::pipeline::stage1_scores::InputAudit;
use crate::pipeline::stage2_evaluate::Stage2Output;
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;
use crate::report::{
    ConfusionSummary, InputSummary, ScoreStats, SummaryData, ToolMeta, WorkingPointSummary,
    format_f64_6,
};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize summary: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct Stage3Input<'a> {
    pub source: String,
    pub scores: &'a LabeledScores,
    pub audit: &'a InputAudit,
    pub profile: &'a CutProfile,
    pub stage2: &'a Stage2Output,

    pub tool_name: String,
    pub tool_version: String,
    pub simd_backend: String,
}

pub fn write_reports(input: &Stage3Input<'_>, out_dir: &Path) -> Result<(), ReportError> {
    fs::create_dir_all(out_dir)?;

    write_sweep_tsv(input.stage2, &out_dir.join("sweep.tsv"))?;
    write_histogram_tsv(input.stage2, &out_dir.join("histogram.tsv"))?;
    write_roc_tsv(input.stage2, &out_dir.join("roc.tsv"))?;

    let summary = build_summary(input);
    let json = render_summary_json(&summary)?;
    write_text(&out_dir.join("summary.json"), &json)?;

    let report = render_report_text(&summary);
    write_text(&out_dir.join("report.txt"), &report)?;

    tracing::info!(out_dir = %out_dir.display(), "reports written");
    Ok(())
}

pub fn build_summary(input: &Stage3Input<'_>) -> SummaryData {
    let stage2 = input.stage2;
    SummaryData {
        tool: ToolMeta {
            name: input.tool_name.clone(),
            version: input.tool_version.clone(),
            simd_backend: input.simd_backend.clone(),
        },
        input: InputSummary {
            source: input.source.clone(),
            n_signal: input.audit.n_signal,
            n_background: input.audit.n_background,
            out_of_range: input.audit.out_of_range,
        },
        profile: input.profile.clone(),
        chosen: stage2.chosen,
        confusion: ConfusionSummary::from(stage2.confusion),
        best_sensitivity: stage2.best_sensitivity,
        working_point: WorkingPointSummary {
            target_efficiency: input.profile.target_efficiency,
            result: stage2.working_point,
        },
        roc_auc: stage2.roc.auc,
        signal: ScoreStats::from_scores(input.scores.signal.as_slice()),
        background: ScoreStats::from_scores(input.scores.background.as_slice()),
    }
}

fn write_sweep_tsv(stage2: &Stage2Output, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    let header = [
        "threshold",
        "signal_efficiency",
        "background_rejection",
        "sensitivity",
        "signal_pass",
        "background_pass",
        "background_efficiency",
    ]
    .join("\t");
    writeln!(w, "{}", header)?;
    for r in &stage2.sweep {
        let row = [
            format_f64_6(r.threshold),
            format_f64_6(r.signal_efficiency),
            format_f64_6(r.background_rejection),
            format_f64_6(r.sensitivity),
            r.signal_pass_count.to_string(),
            r.background_pass_count.to_string(),
            format_f64_6(r.background_efficiency()),
        ]
        .join("\t");
        writeln!(w, "{}", row)?;
    }
    w.flush()
}

fn write_histogram_tsv(stage2: &Stage2Output, path: &Path) -> std::io::Result<()> {
    let sig = &stage2.signal_histogram;
    let bkg = &stage2.background_histogram;
    let sig_density = sig.density();
    let bkg_density = bkg.density();

    let mut w = BufWriter::new(File::create(path)?);
    writeln!(
        w,
        "bin_lower\tbin_upper\tsignal_count\tbackground_count\tsignal_density\tbackground_density"
    )?;
    for bin in 0..sig.bins {
        let row = [
            format_f64_6(sig.lower_edge(bin)),
            format_f64_6(sig.upper_edge(bin)),
            sig.counts[bin].to_string(),
            bkg.counts.get(bin).copied().unwrap_or(0).to_string(),
            format_f64_6(sig_density[bin]),
            format_f64_6(bkg_density.get(bin).copied().unwrap_or(0.0)),
        ]
        .join("\t");
        writeln!(w, "{}", row)?;
    }
    w.flush()
}

fn write_roc_tsv(stage2: &Stage2Output, path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "threshold\tfpr\ttpr")?;
    for p in &stage2.roc.points {
        writeln!(
            w,
            "{}\t{}\t{}",
            format_f64_6(p.threshold),
            format_f64_6(p.fpr),
            format_f64_6(p.tpr)
        )?;
    }
    w.flush()
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_report.rs"]
mod tests;
