pub fn count_above_f64(values: &[f64], threshold: f64) -> usize {
    let mut count = 0usize;
    for &v in values {
        if v > threshold {
            count += 1;
        }
    }
    count
}

pub fn count_at_or_above_f64(values: &[f64], threshold: f64) -> usize {
    let mut count = 0usize;
    for &v in values {
        if v >= threshold {
            count += 1;
        }
    }
    count
}

pub fn backend_name() -> &'static str {
    "scalar"
}

#[cfg(test)]
#[path = "../../tests/src_inline/simd/scalar.rs"]
mod tests;
