pub extern crate rustfft;

// rustfft is the reference implementation the kernels are checked against
use rand::{distributions::Uniform, prelude::*};
use rustfft::num_traits::Float;

/// Asserts that two fp numbers are approximately equal.
///
/// # Panics
///
/// Panics if `actual` and `expected` are too far from each other
#[allow(dead_code)]
#[track_caller]
pub fn assert_float_closeness<T: Float + std::fmt::Display>(actual: T, expected: T, epsilon: T) {
    if (actual - expected).abs() >= epsilon {
        panic!(
            "Assertion failed: {actual} too far from expected value {expected} (with epsilon {epsilon})",
        );
    }
}

/// Fill both buffers with values drawn uniformly from `[-1, 1)`
///
/// # Panics
///
/// Panics if `reals.len() != imags.len()`
pub fn gen_random_signal<T>(reals: &mut [T], imags: &mut [T])
where
    T: Float + rand::distributions::uniform::SampleUniform,
{
    assert_eq!(
        reals.len(),
        imags.len(),
        "Real and imaginary slices must be of equal length"
    );

    let mut rng = thread_rng();

    let uniform_dist = Uniform::new(T::from(-1.0).unwrap(), T::from(1.0).unwrap());
    for (real, imag) in reals.iter_mut().zip(imags.iter_mut()) {
        *real = uniform_dist.sample(&mut rng);
        *imag = uniform_dist.sample(&mut rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_random_signal() {
        let big_n = 1 << 12;
        let mut reals: Vec<f64> = vec![0.0; big_n];
        let mut imags: Vec<f64> = vec![0.0; big_n];

        gen_random_signal(&mut reals, &mut imags);

        assert!(reals
            .iter()
            .chain(imags.iter())
            .all(|z| (-1.0..1.0).contains(z)));

        let mean = reals.iter().sum::<f64>() / big_n as f64;
        assert_float_closeness(mean, 0.0, 0.1);
    }
}
