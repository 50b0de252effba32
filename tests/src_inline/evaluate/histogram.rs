use super::*;

#[test]
fn test_binning_and_edges() {
    let h = ScoreHistogram::build(&[0.0, 0.05, 0.1, 0.55, 0.99, 1.0], 10).unwrap();
    assert_eq!(h.counts[0], 2);
    assert_eq!(h.counts[1], 1);
    assert_eq!(h.counts[5], 1);
    assert_eq!(h.counts[9], 2);
    assert_eq!(h.total(), 6);
    assert_eq!(h.lower_edge(5), 0.5);
    assert_eq!(h.upper_edge(9), 1.0);
}

#[test]
fn test_out_of_range_and_nan() {
    let h = ScoreHistogram::build(&[-0.3, 1.7, f64::NAN, f64::INFINITY], 4).unwrap();
    assert_eq!(h.counts, vec![1, 0, 0, 2]);
    assert_eq!(h.nan_count, 1);
}

#[test]
fn test_density_unit_area() {
    let h = ScoreHistogram::build(&[0.1, 0.2, 0.6, 0.7, 0.8], 5).unwrap();
    let area: f64 = h.density().iter().map(|d| d * h.width()).sum();
    assert!((area - 1.0).abs() < 1e-12);
}

#[test]
fn test_empty_and_zero_bins() {
    let h = ScoreHistogram::build(&[], 3).unwrap();
    assert_eq!(h.density(), vec![0.0, 0.0, 0.0]);
    assert_eq!(ScoreHistogram::build(&[0.5], 0), Err(EvaluateError::ZeroBins));
}
