//! Views that let kernels run on [`num_complex`] buffers

use bytemuck::{cast_slice, cast_slice_mut, Pod};
use num_complex::Complex;

/// Reinterprets complex values as the interleaved `re, im` scalars a complex kernel expects.
///
/// ```
/// use gfft::{utils::as_interleaved_mut, Fft, Gfft, Options};
/// use num_complex::Complex64;
///
/// let kernel = Gfft::<f64, 1>::new(Options::default());
/// let mut signal = [Complex64::new(1.0, 2.0), Complex64::new(3.0, 4.0)];
/// kernel.fft(as_interleaved_mut(&mut signal));
/// assert_eq!(signal, [Complex64::new(4.0, 6.0), Complex64::new(-2.0, -2.0)]);
/// ```
pub fn as_interleaved_mut<T: Pod>(signal: &mut [Complex<T>]) -> &mut [T] {
    cast_slice_mut(signal)
}

/// Read-only counterpart of [`as_interleaved_mut`].
pub fn as_interleaved<T: Pod>(signal: &[Complex<T>]) -> &[T] {
    cast_slice(signal)
}

/// Utility function to combine separate vectors of real and imaginary components
/// into a single vector of Complex Number Structs.
///
/// # Panics
///
/// Panics if `reals.len() != imags.len()`.
pub fn combine_re_im<T: Copy>(reals: &[T], imags: &[T]) -> Vec<Complex<T>> {
    assert_eq!(reals.len(), imags.len());

    reals
        .iter()
        .zip(imags.iter())
        .map(|(z_re, z_im)| Complex::new(*z_re, *z_im))
        .collect()
}
