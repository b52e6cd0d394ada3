//! Radix-2 recursive decomposition
//!
//! Both stages split an `n`-point transform into two `n/2`-point transforms over the two halves
//! of the buffer. In frequency, the butterflies run before the recursion: input in natural
//! order, output bit-reversed. In time, they run after it: input bit-reversed, output in natural
//! order. Either way the reorder stage supplies the missing permutation.
use crate::stages::Stage;
use crate::twiddles::Twiddles;
use crate::FftFloat;

/// Decimation-in-frequency split of `n` interleaved complex points.
#[derive(Debug, Clone, Copy)]
pub struct InFreqSplit {
    n: usize,
    sign: i32,
}

impl InFreqSplit {
    pub fn new(n: usize, sign: i32) -> Self {
        Self { n, sign }
    }
}

impl<T: FftFloat> Stage<T> for InFreqSplit {
    fn apply(&self, data: &mut [T]) {
        in_freq(&mut data[..self.n << 1], self.n, self.sign);
    }
}

/// Decimation-in-time split of `n` interleaved complex points.
#[derive(Debug, Clone, Copy)]
pub struct InTimeSplit {
    n: usize,
    sign: i32,
}

impl InTimeSplit {
    pub fn new(n: usize, sign: i32) -> Self {
        Self { n, sign }
    }
}

impl<T: FftFloat> Stage<T> for InTimeSplit {
    fn apply(&self, data: &mut [T]) {
        in_time(&mut data[..self.n << 1], self.n, self.sign);
    }
}

fn in_freq<T: FftFloat>(data: &mut [T], n: usize, sign: i32) {
    if n < 2 {
        return;
    }
    let dist = n >> 1;
    fft_dif_chunk(data, dist, sign);

    let (first_half, second_half) = data.split_at_mut(n);
    in_freq(first_half, dist, sign);
    in_freq(second_half, dist, sign);
}

fn in_time<T: FftFloat>(data: &mut [T], n: usize, sign: i32) {
    if n < 2 {
        return;
    }
    let dist = n >> 1;

    let (first_half, second_half) = data.split_at_mut(n);
    in_time(first_half, dist, sign);
    in_time(second_half, dist, sign);

    fft_dit_chunk(data, dist, sign);
}

/// DIF butterflies between point `k` and point `k + dist`, twiddle applied after the difference
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
fn fft_dif_chunk<T: FftFloat>(data: &mut [T], dist: usize, sign: i32) {
    let (s0, s1) = data.split_at_mut(dist << 1);

    s0.chunks_exact_mut(2)
        .zip(s1.chunks_exact_mut(2))
        .zip(Twiddles::new(dist, sign))
        .for_each(|((z0, z1), (w_re, w_im))| {
            let real_c0 = z0[0];
            let imag_c0 = z0[1];
            let real_c1 = z1[0];
            let imag_c1 = z1[1];

            z0[0] = real_c0 + real_c1;
            z0[1] = imag_c0 + imag_c1;
            let v_re = real_c0 - real_c1;
            let v_im = imag_c0 - imag_c1;
            z1[0] = v_re * w_re - v_im * w_im;
            z1[1] = v_re * w_im + v_im * w_re;
        });
}

/// DIT butterflies between point `k` and point `k + dist`, twiddle applied before the sum
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
fn fft_dit_chunk<T: FftFloat>(data: &mut [T], dist: usize, sign: i32) {
    let (s0, s1) = data.split_at_mut(dist << 1);

    s0.chunks_exact_mut(2)
        .zip(s1.chunks_exact_mut(2))
        .zip(Twiddles::new(dist, sign))
        .for_each(|((z0, z1), (w_re, w_im))| {
            let in0_re = z0[0];
            let in0_im = z0[1];
            let t_re = z1[0] * w_re - z1[1] * w_im;
            let t_im = z1[0] * w_im + z1[1] * w_re;

            z0[0] = in0_re + t_re;
            z0[1] = in0_im + t_im;
            z1[0] = in0_re - t_re;
            z1[1] = in0_im - t_im;
        });
}
