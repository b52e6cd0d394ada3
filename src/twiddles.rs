use crate::FftFloat;

/// Successive powers `w^0, w^1, w^2, ...` of the root `w = exp(-sign·πi / num_roots)`.
///
/// The roots come out of a trigonometric recurrence rather than one `sin_cos` per step, so a
/// stage can walk its twiddle factors without allocating a table. The increment is kept as
/// `cos θ - 1` so the rounding error stays small over long runs.
pub(crate) struct Twiddles<T> {
    w_re: T,
    w_im: T,
    wp_re: T,
    wp_im: T,
}

impl<T: FftFloat> Twiddles<T> {
    /// `num_roots` is half the period: the iterator reaches `-1` after `num_roots` steps.
    pub fn new(num_roots: usize, sign: i32) -> Self {
        let two = T::one() + T::one();
        let mut theta = T::PI() / T::from_usize(num_roots);
        if sign > 0 {
            theta = -theta;
        }
        let half_sin = (theta / two).sin();
        Self {
            w_re: T::one(),
            w_im: T::zero(),
            wp_re: -two * half_sin * half_sin,
            wp_im: theta.sin(),
        }
    }
}

impl<T: FftFloat> Iterator for Twiddles<T> {
    type Item = (T, T);

    #[inline]
    fn next(&mut self) -> Option<(T, T)> {
        let w_re = self.w_re;
        let w_im = self.w_im;

        self.w_re = w_re + (w_re * self.wp_re - w_im * self.wp_im);
        self.w_im = w_im + (w_im * self.wp_re + w_re * self.wp_im);

        Some((w_re, w_im))
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_1_SQRT_2, PI};

    use utilities::assert_float_closeness;

    use super::*;

    #[test]
    fn twiddles_4() {
        const N: usize = 4;
        let mut twiddle_iter = Twiddles::<f64>::new(N, 1);

        let (w_re, w_im) = twiddle_iter.next().unwrap();
        assert_float_closeness(w_re, 1.0, 1e-10);
        assert_float_closeness(w_im, 0.0, 1e-10);

        let (w_re, w_im) = twiddle_iter.next().unwrap();
        assert_float_closeness(w_re, (PI / 4.0).cos(), 1e-10);
        assert_float_closeness(w_im, -(PI / 4.0).sin(), 1e-10);

        let (w_re, w_im) = twiddle_iter.next().unwrap();
        assert_float_closeness(w_re, 0.0, 1e-10);
        assert_float_closeness(w_im, -1.0, 1e-10);

        let (w_re, w_im) = twiddle_iter.next().unwrap();
        assert_float_closeness(w_re, -FRAC_1_SQRT_2, 1e-10);
        assert_float_closeness(w_im, -FRAC_1_SQRT_2, 1e-10);
    }

    #[test]
    fn backward_roots_are_conjugates() {
        let forward = Twiddles::<f64>::new(64, 1);
        let backward = Twiddles::<f64>::new(64, -1);
        for ((f_re, f_im), (b_re, b_im)) in forward.zip(backward).take(64) {
            assert_float_closeness(f_re, b_re, 1e-12);
            assert_float_closeness(f_im, -b_im, 1e-12);
        }
    }

    #[test]
    fn recurrence_stays_on_the_unit_circle() {
        let num_roots = 1 << 16;
        for (k, (w_re, w_im)) in Twiddles::<f64>::new(num_roots, 1).take(num_roots).enumerate() {
            let angle = -PI * k as f64 / num_roots as f64;
            assert_float_closeness(w_re, angle.cos(), 1e-9);
            assert_float_closeness(w_im, angle.sin(), 1e-9);
        }
    }
}
