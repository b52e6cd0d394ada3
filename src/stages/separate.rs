//! Real/complex separation
//!
//! A real signal `x` of length `N` is read as the complex signal `z[k] = x[2k] + i·x[2k+1]` of
//! length `M = N/2`. Its spectrum `Z` holds the spectra of the even and odd samples folded
//! together:
//!
//! ```text
//! E[k] = (Z[k] + conj(Z[M-k])) / 2
//! O[k] = (Z[k] - conj(Z[M-k])) / 2i
//! X[k] = E[k] + W^k·O[k],   W = exp(-2πi/N)
//! ```
//!
//! and `X[M-k] = conj(E[k] - W^k·O[k])`, so each pair `(k, M-k)` is handled in one step. `X[0]`
//! and `X[M]` are both real and share the first complex slot of the packed output.
use crate::stages::Stage;
use crate::twiddles::Twiddles;
use crate::FftFloat;

/// Separator for a real transform of length `n`.
///
/// Going forward it turns the `n/2`-point complex spectrum into the packed real spectrum; going
/// backward it does the exact inverse.
#[derive(Debug, Clone, Copy)]
pub struct Separate {
    n: usize,
    sign: i32,
}

impl Separate {
    pub fn new(n: usize, sign: i32) -> Self {
        Self { n, sign }
    }
}

impl<T: FftFloat> Stage<T> for Separate {
    fn apply(&self, data: &mut [T]) {
        if self.n < 2 {
            return;
        }
        if self.sign > 0 {
            separate(&mut data[..self.n], self.sign);
        } else {
            combine(&mut data[..self.n], self.sign);
        }
    }
}

fn separate<T: FftFloat>(data: &mut [T], sign: i32) {
    let half = (T::one() + T::one()).recip();
    let m = data.len() >> 1;

    let z_re = data[0];
    let z_im = data[1];
    data[0] = z_re + z_im;
    data[1] = z_re - z_im;

    for (k, (w_re, w_im)) in (1..=m / 2).zip(Twiddles::new(m, sign).skip(1)) {
        let j = m - k;
        let (a_re, a_im) = (data[2 * k], data[2 * k + 1]);
        let (b_re, b_im) = (data[2 * j], data[2 * j + 1]);

        let e_re = half * (a_re + b_re);
        let e_im = half * (a_im - b_im);
        let o_re = half * (a_im + b_im);
        let o_im = half * (b_re - a_re);

        let t_re = o_re * w_re - o_im * w_im;
        let t_im = o_re * w_im + o_im * w_re;

        data[2 * k] = e_re + t_re;
        data[2 * k + 1] = e_im + t_im;
        data[2 * j] = e_re - t_re;
        data[2 * j + 1] = t_im - e_im;
    }
}

fn combine<T: FftFloat>(data: &mut [T], sign: i32) {
    let half = (T::one() + T::one()).recip();
    let m = data.len() >> 1;

    let x_0 = data[0];
    let x_m = data[1];
    data[0] = half * (x_0 + x_m);
    data[1] = half * (x_0 - x_m);

    for (k, (w_re, w_im)) in (1..=m / 2).zip(Twiddles::new(m, sign).skip(1)) {
        let j = m - k;
        let (a_re, a_im) = (data[2 * k], data[2 * k + 1]);
        let (b_re, b_im) = (data[2 * j], data[2 * j + 1]);

        let e_re = half * (a_re + b_re);
        let e_im = half * (a_im - b_im);
        let t_re = half * (a_re - b_re);
        let t_im = half * (a_im + b_im);

        let o_re = t_re * w_re - t_im * w_im;
        let o_im = t_re * w_im + t_im * w_re;

        data[2 * k] = e_re - o_im;
        data[2 * k + 1] = e_im + o_re;
        data[2 * j] = e_re + o_im;
        data[2 * j + 1] = o_re - e_im;
    }
}

#[cfg(test)]
mod tests {
    use utilities::assert_float_closeness;

    use super::*;

    #[test]
    fn length_two_is_sum_and_difference() {
        let mut data = [3.0, 1.0];
        Separate::new(2, 1).apply(&mut data);
        assert_eq!(data, [4.0, 2.0]);

        Separate::new(2, -1).apply(&mut data);
        assert_eq!(data, [3.0, 1.0]);
    }

    #[test]
    fn length_one_is_untouched() {
        let mut data = [7.5];
        Separate::new(1, 1).apply(&mut data);
        assert_eq!(data, [7.5]);
    }

    #[test]
    fn combine_undoes_separate() {
        for log_n in 1..12 {
            let n = 1 << log_n;
            let original: Vec<f64> = (0..n).map(|i| ((i * 13) % 17) as f64 - 8.0).collect();
            let mut data = original.clone();

            Separate::new(n, 1).apply(&mut data);
            Separate::new(n, -1).apply(&mut data);

            for (a, e) in data.iter().zip(original.iter()) {
                assert_float_closeness(*a, *e, 1e-9);
            }
        }
    }
}
