//! Length-range generator
//!
//! Every supported exponent gets its own concrete kernel type, `Gfft<T, 0>` through
//! `Gfft<T, MAX_EXPONENT>`. The list is produced by a recursive macro that peels one exponent
//! per step and stops on the empty list, so the compiler instantiates exactly one kernel per
//! length. A [`LengthRange`] then picks the slice of that list a registry is built from.
use std::ops::Range;

use crate::error::GfftError;
use crate::kernel::Gfft;
use crate::options::Options;
use crate::{Fft, FftFloat};

/// Largest supported exponent: kernels go up to `2^MAX_EXPONENT` points.
pub const MAX_EXPONENT: u32 = 26;

const SUPPORTED: usize = MAX_EXPONENT as usize + 1;

/// Creates a kernel for the given selectors.
pub type Factory<T> = fn(Options) -> Box<dyn Fft<T>>;

/// A half-open range `begin..end` of exponents.
///
/// ```
/// use gfft::LengthRange;
///
/// // Checked at compile time: `LengthRange::new(8, 8)` here would fail the build.
/// const RANGE: LengthRange = LengthRange::new(2, 8);
/// assert_eq!(RANGE.len(), 6);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct LengthRange {
    begin: u32,
    end: u32,
}

impl LengthRange {
    /// # Panics
    ///
    /// Panics if the range is empty, inverted, or ends past `MAX_EXPONENT + 1`. In a const
    /// context this is a compile error.
    pub const fn new(begin: u32, end: u32) -> Self {
        assert!(begin < end, "length range must not be empty or inverted");
        assert!(
            end <= MAX_EXPONENT + 1,
            "length range reaches past the largest supported exponent"
        );
        Self { begin, end }
    }

    pub fn try_new(begin: u32, end: u32) -> Result<Self, GfftError> {
        if begin < end && end <= MAX_EXPONENT + 1 {
            Ok(Self { begin, end })
        } else {
            Err(GfftError::InvalidRange {
                begin,
                end,
                limit: MAX_EXPONENT + 1,
            })
        }
    }

    /// Every supported exponent.
    pub const fn full() -> Self {
        Self::new(0, MAX_EXPONENT + 1)
    }

    pub const fn begin(&self) -> u32 {
        self.begin
    }

    pub const fn end(&self) -> u32 {
        self.end
    }

    pub const fn len(&self) -> usize {
        (self.end - self.begin) as usize
    }

    /// Always `false`: an empty range cannot be constructed.
    pub const fn is_empty(&self) -> bool {
        false
    }

    pub const fn contains(&self, id: u32) -> bool {
        self.begin <= id && id < self.end
    }

    pub fn exponents(&self) -> Range<u32> {
        self.begin..self.end
    }
}

/// One entry of a kernel family: the exponent and the constructor of its kernel type.
pub struct KernelBuilder<T: FftFloat> {
    exponent: u32,
    create: Factory<T>,
}

impl<T: FftFloat> Clone for KernelBuilder<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: FftFloat> Copy for KernelBuilder<T> {}

impl<T: FftFloat> KernelBuilder<T> {
    pub const fn new(exponent: u32, create: Factory<T>) -> Self {
        Self { exponent, create }
    }

    /// The registry id, which is the exponent `P`.
    pub const fn id(&self) -> u32 {
        self.exponent
    }

    pub fn factory(&self) -> Factory<T> {
        self.create
    }

    pub fn create(&self, options: Options) -> Box<dyn Fft<T>> {
        (self.create)(options)
    }
}

macro_rules! gfft_list {
    (@build $t:ty; [$($built:expr,)*];) => {
        [$($built,)*]
    };
    (@build $t:ty; [$($built:expr,)*]; $p:literal $($rest:literal)*) => {
        gfft_list!(@build $t; [$($built,)* KernelBuilder::<$t>::new($p, Gfft::<$t, $p>::create),]; $($rest)*)
    };
    ($t:ty; $($p:literal)*) => {
        gfft_list!(@build $t; []; $($p)*)
    };
}

/// One builder per supported exponent, indexed by exponent.
fn supported_kernels<T: FftFloat>() -> [KernelBuilder<T>; SUPPORTED] {
    gfft_list!(T; 0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26)
}

/// The builders for every exponent in `range`, in increasing order.
pub fn kernel_family<T: FftFloat>(range: LengthRange) -> Vec<KernelBuilder<T>> {
    let begin = range.begin() as usize;
    let end = range.end() as usize;
    supported_kernels::<T>()[begin..end].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_has_one_builder_per_exponent() {
        let family = kernel_family::<f64>(LengthRange::new(3, 9));
        let ids: Vec<u32> = family.iter().map(KernelBuilder::id).collect();
        assert_eq!(ids, vec![3, 4, 5, 6, 7, 8]);

        for builder in &family {
            let kernel = builder.create(Options::default());
            assert_eq!(kernel.exponent(), builder.id());
            assert_eq!(kernel.len(), 1 << builder.id());
        }
    }

    #[test]
    fn supported_list_is_indexed_by_exponent() {
        for (i, builder) in supported_kernels::<f32>().iter().enumerate() {
            assert_eq!(builder.id() as usize, i);
        }
    }

    #[test]
    fn full_range_covers_everything() {
        let full = LengthRange::full();
        assert_eq!(full.len(), SUPPORTED);
        assert_eq!(kernel_family::<f64>(full).len(), SUPPORTED);
    }

    #[test]
    fn invalid_ranges_are_rejected() {
        for (begin, end) in [(4, 4), (5, 2), (0, MAX_EXPONENT + 2)] {
            assert_eq!(
                LengthRange::try_new(begin, end),
                Err(GfftError::InvalidRange {
                    begin,
                    end,
                    limit: MAX_EXPONENT + 1
                })
            );
        }
        assert!(LengthRange::try_new(0, 1).is_ok());
    }

    #[test]
    #[should_panic(expected = "empty or inverted")]
    fn inverted_range_panics_at_run_time() {
        let end = 1;
        let _ = LengthRange::new(3, end);
    }

    #[test]
    fn contains_is_half_open() {
        let range = LengthRange::new(2, 5);
        assert!(!range.contains(1));
        assert!(range.contains(2));
        assert!(range.contains(4));
        assert!(!range.contains(5));
        assert_eq!(range.exponents().collect::<Vec<_>>(), vec![2, 3, 4]);
    }
}
