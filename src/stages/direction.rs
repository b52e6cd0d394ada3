use crate::stages::Stage;
use crate::FftFloat;

/// The direction stage: nothing going forward, scaling by `1/n` going backward.
#[derive(Debug, Clone, Copy)]
pub struct Normalize {
    n: usize,
    sign: i32,
}

impl Normalize {
    pub fn new(n: usize, sign: i32) -> Self {
        Self { n, sign }
    }
}

impl<T: FftFloat> Stage<T> for Normalize {
    fn apply(&self, data: &mut [T]) {
        if self.sign > 0 || self.n < 2 {
            return;
        }
        let scaling_factor = T::from_usize(self.n).recip();
        scale(&mut data[..self.n << 1], scaling_factor);
    }
}

#[multiversion::multiversion(targets(
    "x86_64+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
    "x86_64+avx2+fma",
    "x86_64+sse4.2",
    "x86+avx512f+avx512bw+avx512cd+avx512dq+avx512vl",
    "x86+avx2+fma",
    "x86+sse4.2",
    "x86+sse2",
    "aarch64+neon",
))]
#[inline]
fn scale<T: FftFloat>(data: &mut [T], factor: T) {
    for z in data.iter_mut() {
        *z = *z * factor;
    }
}
