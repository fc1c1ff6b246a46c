//! Fannkuch-redux benchmark kernel: factoradic permutation indexing with
//! parallel slice evaluation.

pub mod error;
pub mod fannkuch;
pub mod naive;

pub use error::FannkuchError;
pub use fannkuch::{Fannkuch, FannkuchConfig, SliceOutcome};
