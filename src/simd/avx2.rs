#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

pub fn count_above_f64(values: &[f64], threshold: f64) -> usize {
    let mut count = 0usize;
    let mut i = 0usize;
    let n = values.len();
    unsafe {
        let t = _mm256_set1_pd(threshold);
        while i + 4 <= n {
            let v = _mm256_loadu_pd(values.as_ptr().add(i));
            // Ordered compare: NaN lanes are false.
            let mask = _mm256_movemask_pd(_mm256_cmp_pd::<_CMP_GT_OQ>(v, t));
            count += (mask as u32).count_ones() as usize;
            i += 4;
        }
    }
    while i < n {
        if values[i] > threshold {
            count += 1;
        }
        i += 1;
    }
    count
}

pub fn count_at_or_above_f64(values: &[f64], threshold: f64) -> usize {
    let mut count = 0usize;
    let mut i = 0usize;
    let n = values.len();
    unsafe {
        let t = _mm256_set1_pd(threshold);
        while i + 4 <= n {
            let v = _mm256_loadu_pd(values.as_ptr().add(i));
            let mask = _mm256_movemask_pd(_mm256_cmp_pd::<_CMP_GE_OQ>(v, t));
            count += (mask as u32).count_ones() as usize;
            i += 4;
        }
    }
    while i < n {
        if values[i] >= threshold {
            count += 1;
        }
        i += 1;
    }
    count
}

pub fn backend_name() -> &'static str {
    "avx2"
}

#[cfg(test)]
#[path = "../../tests/src_inline/simd/avx2.rs"]
mod tests;
