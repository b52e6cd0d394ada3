//! Process-wide kernel registries
//!
//! A [`Registry`] maps exponents to kernel factories for one element type, one [`Options`] tuple
//! and one [`LengthRange`]. Registries are created on first request, populated exactly once
//! from the length-range family, and then live for the rest of the process.
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use log::debug;

use crate::error::GfftError;
use crate::family::{kernel_family, Factory, LengthRange};
use crate::options::Options;
use crate::{Fft, FftFloat};

/// Every registry built so far for one element type.
#[doc(hidden)]
pub type RegistryMap<T> = Mutex<HashMap<(Options, LengthRange), &'static Registry<T>>>;

/// Run-time lookup from exponent to kernel factory.
pub struct Registry<T: FftFloat> {
    options: Options,
    range: LengthRange,
    factories: HashMap<u32, Factory<T>>,
}

impl<T: FftFloat> Registry<T> {
    /// The process-wide registry for `options` and `range`.
    ///
    /// The first call for a given pair builds and populates it; the lock held meanwhile makes
    /// concurrent first calls wait for that one population instead of racing it.
    pub fn instance(options: Options, range: LengthRange) -> &'static Self {
        let mut registries = T::registries()
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        *registries.entry((options, range)).or_insert_with(|| {
            let registry: &'static Self = Box::leak(Box::new(Self::populate(options, range)));
            registry
        })
    }

    fn populate(options: Options, range: LengthRange) -> Self {
        let mut factories = HashMap::with_capacity(range.len());
        for builder in kernel_family::<T>(range) {
            let previous = factories.insert(builder.id(), builder.factory());
            debug_assert!(previous.is_none(), "exponent {} registered twice", builder.id());
        }

        debug!(
            "registered {} {} kernels for exponents {}..{} with {:?}",
            factories.len(),
            std::any::type_name::<T>(),
            range.begin(),
            range.end(),
            options
        );

        Self {
            options,
            range,
            factories,
        }
    }

    /// A new kernel of length `2^id`, owned by the caller.
    pub fn create(&self, id: u32) -> Result<Box<dyn Fft<T>>, GfftError> {
        let create = self
            .factories
            .get(&id)
            .ok_or(GfftError::UnknownLength {
                id,
                begin: self.range.begin(),
                end: self.range.end(),
            })?;
        Ok(create(self.options))
    }

    pub fn contains(&self, id: u32) -> bool {
        self.factories.contains_key(&id)
    }

    /// Registered exponents in increasing order.
    pub fn ids(&self) -> Vec<u32> {
        let mut ids: Vec<u32> = self.factories.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    pub fn options(&self) -> Options {
        self.options
    }

    pub fn range(&self) -> LengthRange {
        self.range
    }
}
