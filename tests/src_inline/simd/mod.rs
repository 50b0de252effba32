use super::*;
use proptest::prelude::*;

#[test]
fn test_backend_name() {
    let name = backend_name();
    #[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
    assert_eq!(name, "avx2");
    #[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
    assert_eq!(name, "neon");
    #[cfg(not(any(
        all(target_arch = "x86_64", target_feature = "avx2"),
        all(target_arch = "aarch64", target_feature = "neon"),
    )))]
    assert_eq!(name, "scalar");
}

#[test]
fn test_count_boundary_is_strict() {
    let values = [0.5, 0.5, 0.6, 0.4];
    assert_eq!(count_above(&values, 0.5), 1);
    assert_eq!(count_at_or_above(&values, 0.5), 3);
}

#[test]
fn test_nan_never_passes() {
    let values = [f64::NAN, 0.9, f64::NAN, 0.1, 0.7];
    assert_eq!(count_above(&values, 0.0), 3);
    assert_eq!(count_at_or_above(&values, 0.0), 3);
    assert_eq!(count_nan(&values), 2);
    assert_eq!(count_above(&values, f64::NAN), 0);
}

#[test]
fn test_empty() {
    assert_eq!(count_above(&[], 0.5), 0);
    assert_eq!(count_at_or_above(&[], 0.5), 0);
}

proptest! {
    #[test]
    fn backend_matches_scalar(
        values in proptest::collection::vec(-0.5f64..1.5, 0..67),
        threshold in -0.2f64..1.2,
    ) {
        prop_assert_eq!(count_above(&values, threshold), scalar::count_above_f64(&values, threshold));
        prop_assert_eq!(
            count_at_or_above(&values, threshold),
            scalar::count_at_or_above_f64(&values, threshold)
        );
    }
}
