//! Pass counting over score slices.
//!
//! Every backend visits values in slice order and counts with integer
//! accumulators, so the result never depends on which backend is compiled in.
//! NaN scores never pass.

#[inline]
pub fn count_above(values: &[f64], threshold: f64) -> usize {
    backend::count_above_f64(values, threshold)
}

#[inline]
pub fn count_at_or_above(values: &[f64], threshold: f64) -> usize {
    backend::count_at_or_above_f64(values, threshold)
}

#[inline]
pub fn count_nan(values: &[f64]) -> usize {
    values.iter().filter(|v| v.is_nan()).count()
}

#[inline]
pub fn backend_name() -> &'static str {
    backend::backend_name()
}

#[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
mod backend {
    pub use crate::simd::avx2::*;
}

#[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
mod backend {
    pub use crate::simd::neon::*;
}

#[cfg(not(any(
    all(target_arch = "x86_64", target_feature = "avx2"),
    all(target_arch = "aarch64", target_feature = "neon"),
)))]
mod backend {
    pub use crate::simd::scalar::*;
}

#[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
pub mod avx2;
#[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
pub mod neon;
pub mod scalar;

#[cfg(test)]
#[path = "../../tests/src_inline/simd/mod.rs"]
mod tests;
