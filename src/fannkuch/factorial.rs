//! Factorial table for the global permutation index space.

use crate::error::FannkuchError;

/// Largest permutation size whose index space fits in `u64` (20! < 2^64 < 21!).
pub const MAX_N: usize = 20;

const fn build_table() -> [u64; MAX_N + 1] {
    let mut table = [1u64; MAX_N + 1];
    let mut i = 2;
    while i <= MAX_N {
        table[i] = table[i - 1] * i as u64;
        i += 1;
    }
    table
}

/// `FACTORIALS[v] == v!` for `v` in `0..=MAX_N`.
pub const FACTORIALS: [u64; MAX_N + 1] = build_table();

/// Total index space `n!`, rejecting sizes the engine cannot represent.
#[inline]
pub fn index_space(n: usize) -> Result<u64, FannkuchError> {
    if n == 0 {
        return Err(FannkuchError::InvalidSize);
    }
    if n > MAX_N {
        return Err(FannkuchError::Overflow { n });
    }
    Ok(FACTORIALS[n])
}
