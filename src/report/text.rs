use crate::model::evaluation::EvaluationResult;
use crate::report::{SummaryData, format_f64_6};

pub fn render_report_text(data: &SummaryData) -> String {
    let mut out = String::new();

    out.push_str("Signal / Background Threshold Study\n");
    out.push_str("===================================\n\n");

    out.push_str("1. Inputs\n");
    out.push_str(&format!("Source: {}\n", data.input.source));
    out.push_str(&format!(
        "Signal events: {}\nBackground events: {}\n",
        data.input.n_signal, data.input.n_background
    ));
    out.push_str(&format!(
        "Signal score median / p10 / p90: {} / {} / {}\n",
        format_f64_6(data.signal.median),
        format_f64_6(data.signal.p10),
        format_f64_6(data.signal.p90)
    ));
    out.push_str(&format!(
        "Background score median / p10 / p90: {} / {} / {}\n",
        format_f64_6(data.background.median),
        format_f64_6(data.background.p10),
        format_f64_6(data.background.p90)
    ));
    out.push_str(&format!(
        "Profile: {} (pass rule: {})\n\n",
        data.profile.name,
        data.profile.pass_rule.as_str()
    ));

    out.push_str("2. Chosen threshold\n");
    push_result(&mut out, &data.chosen);
    out.push_str(&format!(
        "Accuracy: {}\nPrecision: {}\nF1: {}\n\n",
        format_f64_6(data.confusion.accuracy),
        format_f64_6(data.confusion.precision),
        format_f64_6(data.confusion.f1_score)
    ));

    out.push_str("3. Best sensitivity on the sweep grid\n");
    match &data.best_sensitivity {
        Some(best) => push_result(&mut out, best),
        None => out.push_str("No sweep points.\n"),
    }
    out.push('\n');

    out.push_str("4. Working point\n");
    out.push_str(&format!(
        "Target signal efficiency: {}\n",
        format_f64_6(data.working_point.target_efficiency)
    ));
    match &data.working_point.result {
        Some(wp) => push_result(&mut out, wp),
        None => out.push_str("No threshold on the grid reaches the target.\n"),
    }
    out.push('\n');

    out.push_str("5. Separation\n");
    out.push_str(&format!("ROC AUC: {}\n", format_f64_6(data.roc_auc)));
    out.push_str(&format!("{}\n\n", separation_statement(data.roc_auc)));

    out.push_str("6. Caveats\n");
    let caveats = caveats(data);
    if caveats.is_empty() {
        out.push_str("None.\n");
    } else {
        for c in caveats {
            out.push_str(&format!("- {}\n", c));
        }
    }
    out.push_str(
        "Sensitivity is efficiency / sqrt(passing background); it guides the cut choice and is not a calibrated significance.\n",
    );

    out
}

fn push_result(out: &mut String, r: &EvaluationResult) {
    out.push_str(&format!("Threshold: {}\n", format_f64_6(r.threshold)));
    out.push_str(&format!(
        "Signal efficiency: {} ({} / {})\n",
        format_f64_6(r.signal_efficiency),
        r.signal_pass_count,
        r.n_signal
    ));
    out.push_str(&format!(
        "Background rejection: {} ({} passing / {})\n",
        format_f64_6(r.background_rejection),
        r.background_pass_count,
        r.n_background
    ));
    out.push_str(&format!(
        "Background efficiency: {}\n",
        format_f64_6(r.background_efficiency())
    ));
    out.push_str(&format!("Sensitivity: {}\n", format_f64_6(r.sensitivity)));
}

pub fn separation_statement(auc: f64) -> &'static str {
    if auc >= 0.90 {
        "Strong separation between signal and background scores."
    } else if auc >= 0.75 {
        "Moderate separation; expect a visible efficiency/rejection trade-off."
    } else if auc > 0.55 {
        "Weak separation; cuts buy little rejection per unit of efficiency lost."
    } else if auc >= 0.45 {
        "Scores carry no usable separation."
    } else {
        "Scores are anti-correlated with truth; check the label convention."
    }
}

fn caveats(data: &SummaryData) -> Vec<String> {
    let mut out = Vec::new();
    if data.input.n_signal == 0 {
        out.push("signal set is empty; efficiencies are reported as 0".to_string());
    }
    if data.input.n_background == 0 {
        out.push("background set is empty; rejections are reported as 0".to_string());
    }
    let nan = data.signal.nan + data.background.nan;
    if nan > 0 {
        out.push(format!("{} NaN scores never pass any threshold", nan));
    }
    if data.input.out_of_range > 0 {
        out.push(format!(
            "{} scores lie outside [0, 1]; they pass or fail every threshold in the grid",
            data.input.out_of_range
        ));
    }
    if !(0.0..=1.0).contains(&data.chosen.threshold) {
        out.push("chosen threshold lies outside [0, 1]".to_string());
    }
    out
}
