//! Fast engine internals and public API.

mod engine;
mod factorial;
mod flips;
mod state;
mod task;

pub use engine::Fannkuch;
pub use engine::FannkuchConfig;
pub use factorial::{FACTORIALS, MAX_N};
pub use flips::count_flips;
pub use state::{PermState, for_each_permutation};
pub use task::{SliceOutcome, evaluate_slice};
