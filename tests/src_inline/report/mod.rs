use super::*;

#[test]
fn test_quantiles() {
    let v = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    assert_eq!(median(&v), 3.0);
    assert_eq!(p90(&v), 5.0);
    assert_eq!(p10(&v), 2.0);
}

#[test]
fn test_quantiles_skip_nan_and_empty() {
    assert_eq!(median(&[]), 0.0);
    assert_eq!(median(&[f64::NAN]), 0.0);
    assert_eq!(median(&[f64::NAN, 0.4, 0.2, 0.8]), 0.4);
}

#[test]
fn test_score_stats() {
    let stats = ScoreStats::from_scores(&[0.9, f64::NAN, 0.1]);
    assert_eq!(stats.n, 3);
    assert_eq!(stats.nan, 1);
    assert_eq!(stats.median, 0.9);
}

#[test]
fn test_format() {
    assert_eq!(format_f64_6(0.5), "0.500000");
}
