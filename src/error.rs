//! Errors reported by the registry and by fallible kernel entry points
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GfftError {
    /// The registry has no kernel for the requested exponent.
    #[error("no kernel for exponent {id}; this registry covers exponents {begin}..{end}")]
    UnknownLength { id: u32, begin: u32, end: u32 },
    /// A length range that is empty, inverted, or reaches past the supported exponents.
    #[error("invalid length range {begin}..{end}: expected begin < end <= {limit}")]
    InvalidRange { begin: u32, end: u32, limit: u32 },
    /// A buffer whose size does not match the kernel.
    #[error("buffer holds {actual} scalars but the kernel expects {expected}")]
    BufferLength { expected: usize, actual: usize },
}
