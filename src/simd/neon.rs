#[cfg(target_arch = "aarch64")]
use std::arch::aarch64::*;

pub fn count_above_f64(values: &[f64], threshold: f64) -> usize {
    let mut count = 0usize;
    let mut i = 0usize;
    let n = values.len();
    unsafe {
        let t = vdupq_n_f64(threshold);
        while i + 2 <= n {
            let v = vld1q_f64(values.as_ptr().add(i));
            let m = vcgtq_f64(v, t);
            count += (vgetq_lane_u64::<0>(m) & 1) as usize;
            count += (vgetq_lane_u64::<1>(m) & 1) as usize;
            i += 2;
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
        let t = vdupq_n_f64(threshold);
        while i + 2 <= n {
            let v = vld1q_f64(values.as_ptr().add(i));
            let m = vcgeq_f64(v, t);
            count += (vgetq_lane_u64::<0>(m) & 1) as usize;
            count += (vgetq_lane_u64::<1>(m) & 1) as usize;
            i += 2;
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
    "neon"
}

#[cfg(test)]
#[path = "../../tests/src_inline/simd/neon.rs"]
mod tests;
