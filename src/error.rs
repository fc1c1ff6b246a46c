//! Error surface for the fannkuch engine.
//!
//! Everything here is a caller contract violation detected eagerly, before
//! any permutation state is built. Computation itself is infallible.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FannkuchError {
    /// A positive permutation size was required.
    #[error("permutation size must be positive")]
    InvalidSize,

    /// `n!` does not fit in 64 bits (20! is the largest that does).
    #[error("{n}! exceeds the 64-bit index space (maximum supported size is 20)")]
    Overflow { n: usize },

    /// A global index (or slice end) past `n!`.
    #[error("index {index} is out of range for a space of {total} permutations")]
    IndexOutOfRange { index: u64, total: u64 },

    /// Multi-permutation slices must have an even start and an even size;
    /// the advance algorithm pairs adjacent permutations.
    #[error("slice [{start}, {start}+{size}) must be even-aligned and even-sized")]
    UnpairedSlice { start: u64, size: u64 },
}
