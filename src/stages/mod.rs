//! Pipeline stages
//!
//! A stage is one in-place pass over a kernel's buffer. Stages only know their size and the
//! direction sign; everything else a transform needs is recomputed on the fly.
//!
//! ## Organization
//!
//! - `reorder`: bit-reversed permutation of complex points
//! - `split`: radix-2 recursive decomposition, in time or in frequency
//! - `direction`: the normalization a direction owes
//! - `separate`: conversion between real buffers and half-length complex spectra

mod direction;
mod reorder;
mod separate;
mod split;

pub use direction::Normalize;
pub use reorder::BitReverse;
pub use separate::Separate;
pub use split::{InFreqSplit, InTimeSplit};

/// One atomic pass of a kernel pipeline.
pub trait Stage<T>: Send + Sync {
    /// Mutates `data` in place.
    fn apply(&self, data: &mut [T]);
}

/// The stages a pipeline shape is made of, before they are bound to a length.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum StageKind {
    /// Bit-reversed permutation.
    Reorder,
    /// Recursive radix-2 split, in time or in frequency depending on the decimation.
    Split,
    /// Direction-specific normalization.
    Direction,
    /// Real/complex separation.
    Separate,
}
