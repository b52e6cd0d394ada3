//! Generated families of fixed-length, power-of-two FFT kernels.
//!
//! Every kernel is a [`Gfft<T, P>`](kernel::Gfft): a transform of length `N = 2^P` whose
//! stage pipeline is composed once, at construction, from three selectors:
//!
//! - [`Domain`]: complex input, or real input packed through a separator stage
//! - [`Decimation`]: in-time (reorder, then split) or in-frequency (split, then reorder)
//! - [`Direction`]: forward, or backward with `1/N` normalization
//!
//! A [`Registry`] exposes a whole range of lengths behind one run-time lookup, so callers can
//! pick a length at run time while every kernel stays specialized to its own size.
//!
//! ```
//! use gfft::{Fft, LengthRange, Options, Registry};
//!
//! const RANGE: LengthRange = LengthRange::new(1, 11);
//!
//! let registry = Registry::<f64>::instance(Options::default(), RANGE);
//! let kernel = registry.create(1).unwrap();
//!
//! // [a, b] as interleaved complex values
//! let mut data = [3.0, 0.0, 1.0, 0.0];
//! kernel.fft(&mut data);
//! assert_eq!(data, [4.0, 0.0, 2.0, 0.0]);
//! ```
use std::fmt::Debug;

use num_traits::{Float, FloatConst};

pub use crate::error::GfftError;
pub use crate::family::{kernel_family, KernelBuilder, LengthRange, MAX_EXPONENT};
pub use crate::kernel::Gfft;
pub use crate::options::{Decimation, Direction, Domain, Options};
pub use crate::registry::Registry;
pub use crate::stages::{Stage, StageKind};

use crate::registry::RegistryMap;

pub mod error;
pub mod family;
pub mod kernel;
pub mod options;
pub mod registry;
pub mod stages;
mod twiddles;
#[cfg(feature = "complex-nums")]
pub mod utils;

/// Element types a kernel can be generated for.
///
/// Implemented for `f32` and `f64`.
pub trait FftFloat: Float + FloatConst + Debug + Send + Sync + 'static {
    /// Lossy conversion used for transform lengths and normalization factors.
    fn from_usize(n: usize) -> Self;

    /// Process-wide registries holding kernels of this element type.
    #[doc(hidden)]
    fn registries() -> &'static RegistryMap<Self>;
}

macro_rules! impl_fft_float {
    ($precision:ty) => {
        impl FftFloat for $precision {
            #[inline]
            fn from_usize(n: usize) -> Self {
                n as $precision
            }

            fn registries() -> &'static RegistryMap<Self> {
                static REGISTRIES: std::sync::OnceLock<RegistryMap<$precision>> =
                    std::sync::OnceLock::new();
                REGISTRIES.get_or_init(Default::default)
            }
        }
    };
}

impl_fft_float!(f32);
impl_fft_float!(f64);

/// A fixed-length transform, as handed out by a [`Registry`].
///
/// Kernels carry no per-call state, so a single instance can run on several threads at once as
/// long as each call gets its own buffer.
pub trait Fft<T: FftFloat>: Send + Sync {
    /// Transforms `data` in place.
    ///
    /// Complex kernels take `2 * N` scalars, `N` interleaved `re, im` pairs. Real kernels take
    /// `N` real scalars going forward and produce the packed half spectrum:
    /// `data[0] = Re X[0]`, `data[1] = Re X[N/2]`, then `X[k]` as a `re, im` pair at
    /// `data[2k], data[2k + 1]` for `1 <= k < N/2`. Backward real kernels read that same layout.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != self.buffer_len()`
    fn fft(&self, data: &mut [T]);

    /// The exponent `P` of the transform length `N = 2^P`.
    fn exponent(&self) -> u32;

    /// The selector tuple this kernel was built from.
    fn options(&self) -> Options;

    /// The composed pipeline, in execution order.
    fn stages(&self) -> &[StageKind];

    /// Transform length `N`.
    fn len(&self) -> usize {
        1 << self.exponent()
    }

    /// Always `false`: the shortest kernel still has one point.
    fn is_empty(&self) -> bool {
        false
    }

    /// Number of scalars `fft` expects.
    fn buffer_len(&self) -> usize {
        match self.options().domain {
            Domain::Complex => self.len() << 1,
            Domain::Real => self.len(),
        }
    }

    /// Like [`Fft::fft`], but reports a wrongly sized buffer instead of panicking.
    fn try_fft(&self, data: &mut [T]) -> Result<(), GfftError> {
        let expected = self.buffer_len();
        if data.len() != expected {
            return Err(GfftError::BufferLength {
                expected,
                actual: data.len(),
            });
        }
        self.fft(data);
        Ok(())
    }
}
