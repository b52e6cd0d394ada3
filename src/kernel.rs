//! Fixed-length kernels
//!
//! [`Gfft<T, P>`] binds the pipeline shape chosen by its [`Options`] to the length `N = 2^P`.
//! The length is part of the type, so each exponent is its own monomorphized kernel, and the
//! pipeline is assembled once in [`Gfft::new`]. Running it is a straight walk over the stages.
use log::trace;

use crate::options::{Decimation, Options};
use crate::stages::{
    BitReverse, InFreqSplit, InTimeSplit, Normalize, Separate, Stage, StageKind,
};
use crate::{Fft, FftFloat};

/// Stages bound to one length, run strictly in the order they were pushed.
pub struct Pipeline<T> {
    stages: Vec<Box<dyn Stage<T>>>,
}

impl<T> Pipeline<T> {
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    #[inline]
    pub fn run(&self, data: &mut [T]) {
        for stage in &self.stages {
            stage.apply(data);
        }
    }
}

impl<T> Default for Pipeline<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<Box<dyn Stage<T>>> for Pipeline<T> {
    fn from_iter<I: IntoIterator<Item = Box<dyn Stage<T>>>>(iter: I) -> Self {
        Self {
            stages: iter.into_iter().collect(),
        }
    }
}

/// Builds the concrete stage for `kind` in a transform of length `n`.
///
/// The separator works on all `n` real values; every other stage works on the complex points
/// the domain leaves it.
fn bind_stage<T: FftFloat>(kind: StageKind, n: usize, options: &Options) -> Box<dyn Stage<T>> {
    let sign = options.direction.sign();
    let points = options.domain.complex_len(n);

    match kind {
        StageKind::Reorder => Box::new(BitReverse::new(points)),
        StageKind::Split => match options.decimation {
            Decimation::InTime => Box::new(InTimeSplit::new(points, sign)),
            Decimation::InFreq => Box::new(InFreqSplit::new(points, sign)),
        },
        StageKind::Direction => Box::new(Normalize::new(points, sign)),
        StageKind::Separate => Box::new(Separate::new(n, sign)),
    }
}

/// FFT kernel of length `2^P`.
///
/// ```
/// use gfft::{Fft, Gfft, Options};
///
/// let kernel = Gfft::<f32, 0>::new(Options::default());
/// let mut data = [1.5, -2.0];
/// kernel.fft(&mut data);
/// assert_eq!(data, [1.5, -2.0]);
/// ```
pub struct Gfft<T: FftFloat, const P: u32> {
    options: Options,
    shape: Vec<StageKind>,
    pipeline: Pipeline<T>,
}

impl<T: FftFloat, const P: u32> Gfft<T, P> {
    /// Transform length.
    pub const N: usize = 1 << P;

    pub fn new(options: Options) -> Self {
        let shape = options.pipeline_shape();
        let pipeline = shape
            .iter()
            .map(|&kind| bind_stage::<T>(kind, Self::N, &options))
            .collect();

        Self {
            options,
            shape,
            pipeline,
        }
    }

    /// Factory entry stored by the registry: a fresh kernel, owned by the caller.
    pub fn create(options: Options) -> Box<dyn Fft<T>> {
        trace!("creating {}-point kernel with {:?}", Self::N, options);
        Box::new(Self::new(options))
    }
}

impl<T: FftFloat, const P: u32> Fft<T> for Gfft<T, P> {
    fn fft(&self, data: &mut [T]) {
        let expected = self.buffer_len();
        assert_eq!(
            data.len(),
            expected,
            "a {}-point kernel needs {expected} scalars",
            Self::N
        );
        self.pipeline.run(data);
    }

    fn exponent(&self) -> u32 {
        P
    }

    fn options(&self) -> Options {
        self.options
    }

    fn stages(&self) -> &[StageKind] {
        &self.shape
    }
}
