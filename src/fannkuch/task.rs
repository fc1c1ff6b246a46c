//! Slice evaluation: one contiguous index range, one owned cursor.

use crate::error::FannkuchError;
use crate::fannkuch::factorial::index_space;
use crate::fannkuch::flips::count_flips;
use crate::fannkuch::state::PermState;

/// Result of evaluating one slice (or any merge of slices): the signed
/// checksum and the maximum flip count. Merging is associative and
/// commutative, so any partition of the index space reduces to the same
/// value in any order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SliceOutcome {
    /// Sum of flip counts, signed by global index parity (+ at even ranks).
    pub checksum: i64,
    /// Largest flip count seen.
    pub max_flips: u32,
}

impl SliceOutcome {
    #[inline]
    pub fn merge(self, other: Self) -> Self {
        Self {
            checksum: self.checksum + other.checksum,
            max_flips: self.max_flips.max(other.max_flips),
        }
    }
}

/// Evaluate the slice `[start, start + size)` of the index space of
/// permutations of `0..n`.
///
/// A slice of size 0 short-circuits to the empty outcome. A slice producing
/// more than one permutation must be even-aligned and even-sized, because
/// the advance algorithm pairs adjacent permutations; a single-permutation
/// probe may sit at any rank. Violations are contract errors, reported
/// eagerly and never silently truncated.
pub fn evaluate_slice(n: usize, start: u64, size: u64) -> Result<SliceOutcome, FannkuchError> {
    if size == 0 {
        return Ok(SliceOutcome::default());
    }
    let total = index_space(n)?;
    if start >= total || size > total - start {
        return Err(FannkuchError::IndexOutOfRange {
            index: start.saturating_add(size),
            total,
        });
    }
    if size > 1 && (start % 2 != 0 || size % 2 != 0) {
        return Err(FannkuchError::UnpairedSlice { start, size });
    }

    let mut state = PermState::decode(n, start)?;
    let mut scratch = vec![0u8; n];
    let mut outcome = SliceOutcome::default();
    let mut sign: i64 = if start % 2 == 0 { 1 } else { -1 };

    for offset in 0..size {
        let flips = count_flips(state.perm(), &mut scratch);
        outcome.checksum += sign * i64::from(flips);
        outcome.max_flips = outcome.max_flips.max(flips);
        sign = -sign;
        if offset + 1 < size {
            state.advance();
        }
    }
    Ok(outcome)
}
