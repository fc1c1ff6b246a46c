//! Permutation state: factoradic decoding and incremental advance.
//!
//! The traversal order is the one induced by nested prefix rotations:
//! `counts[v]` records how many of the `v + 1` rotations of the prefix of
//! length `v + 1` have been consumed. `counts[1]` is the pair parity —
//! adjacent permutations at even/odd rank differ only by a swap of the
//! first two elements. The decoder and the advancer jointly define the
//! order; every consumer of a global index depends on it bit-exactly.

use crate::error::FannkuchError;
use crate::fannkuch::factorial::{FACTORIALS, index_space};

/// One slice's permutation cursor: the current permutation of `0..n` and its
/// rotation counts. Owned exclusively by the evaluator driving it; buffers
/// are reused in place across `advance` calls and never shared.
#[derive(Debug)]
pub struct PermState {
    perm: Vec<u8>,
    counts: Vec<u8>,
}

impl PermState {
    /// Decode the permutation ranked `start` in canonical order, in O(n),
    /// without visiting any prior permutation.
    ///
    /// For `v` from `n - 1` down to `1`: divide the running remainder by
    /// `v!` to get the consumed rotation count `c` (`0 <= c <= v`), record
    /// it, and left-rotate the identity's prefix of length `v + 1` by `c`.
    ///
    /// Any in-range `start` decodes, including odd ranks: `counts[1]`
    /// carries the pair parity, so a cursor seeded at an odd rank is valid
    /// for a single-permutation probe. Slices that will `advance` must
    /// start even; `evaluate_slice` enforces that at the slice boundary.
    pub fn decode(n: usize, start: u64) -> Result<Self, FannkuchError> {
        let total = index_space(n)?;
        if start >= total {
            return Err(FannkuchError::IndexOutOfRange {
                index: start,
                total,
            });
        }

        let mut perm: Vec<u8> = (0..n as u8).collect();
        let mut counts = vec![0u8; n];
        let mut remainder = start;
        for v in (1..n).rev() {
            let c = remainder / FACTORIALS[v];
            remainder %= FACTORIALS[v];
            counts[v] = c as u8;
            if c > 0 {
                perm[..=v].rotate_left(c as usize);
            }
        }
        debug_assert_eq!(remainder, 0);
        debug_assert!(n < 2 || counts[1] as u64 == start % 2);

        Ok(Self { perm, counts })
    }

    /// The current permutation of `0..n`.
    #[inline(always)]
    pub fn perm(&self) -> &[u8] {
        &self.perm
    }

    /// Step to the next permutation in canonical order. O(1) amortized:
    /// level-`i` carries happen once every `i!` steps.
    ///
    /// The first-two swap is the level-1 rotation; each carry from a
    /// saturated level extends the rotation one prefix deeper. The caller
    /// bounds the number of calls by its slice size — advancing past the
    /// end of the index space is a contract violation.
    #[inline]
    pub fn advance(&mut self) {
        self.perm.swap(0, 1);

        let mut i = 1;
        while self.counts[i] as usize >= i {
            self.counts[i] = 0;
            i += 1;
            debug_assert!(i < self.counts.len(), "advanced past end of index space");
            // Left-rotate the prefix of length i + 1 by one.
            let first = self.perm[0];
            self.perm.copy_within(1..=i, 0);
            self.perm[i] = first;
        }
        self.counts[i] += 1;
    }
}

/// Drive a cursor over the full index space `[0, n!)` in canonical order,
/// handing each permutation to `f`. Backs the diagnostic enumeration mode.
pub fn for_each_permutation<F>(n: usize, mut f: F) -> Result<(), FannkuchError>
where
    F: FnMut(&[u8]),
{
    let total = index_space(n)?;
    let mut state = PermState::decode(n, 0)?;
    for rank in 0..total {
        f(state.perm());
        if rank + 1 < total {
            state.advance();
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naive;

    #[test]
    fn decode_rank_zero_is_identity() {
        for n in 1..=8 {
            let state = PermState::decode(n, 0).unwrap();
            let identity: Vec<u8> = (0..n as u8).collect();
            assert_eq!(state.perm(), &identity[..]);
            assert!(state.counts.iter().all(|&c| c == 0));
        }
    }

    #[test]
    fn decode_rejects_out_of_range() {
        assert_eq!(
            PermState::decode(4, 24).unwrap_err(),
            FannkuchError::IndexOutOfRange {
                index: 24,
                total: 24
            }
        );
        assert_eq!(
            PermState::decode(0, 0).unwrap_err(),
            FannkuchError::InvalidSize
        );
    }

    #[test]
    fn decode_matches_naive_construction() {
        for n in [3usize, 5, 7] {
            let total = FACTORIALS[n];
            for rank in (0..total).step_by(7) {
                let state = PermState::decode(n, rank).unwrap();
                assert_eq!(
                    state.perm(),
                    &naive::permutation_at(n, rank)[..],
                    "n={n} rank={rank}"
                );
            }
        }
    }

    #[test]
    fn decode_accepts_odd_ranks_for_probes() {
        // counts[1] is the pair parity; odd ranks are valid probe seeds.
        for rank in [1u64, 3, 77, 119] {
            let state = PermState::decode(5, rank).unwrap();
            assert_eq!(state.counts[1] as u64, rank % 2);
            assert_eq!(state.perm(), &naive::permutation_at(5, rank)[..]);
        }
    }

    #[test]
    fn advance_walks_canonical_order_n3() {
        let expected: [[u8; 3]; 6] = [
            [0, 1, 2],
            [1, 0, 2],
            [1, 2, 0],
            [2, 1, 0],
            [2, 0, 1],
            [0, 2, 1],
        ];
        let mut state = PermState::decode(3, 0).unwrap();
        for (rank, want) in expected.iter().enumerate() {
            assert_eq!(state.perm(), want, "rank {rank}");
            if rank + 1 < expected.len() {
                state.advance();
            }
        }
    }

    #[test]
    fn advance_agrees_with_decode_at_every_rank() {
        let n = 6;
        let total = FACTORIALS[n];
        let mut state = PermState::decode(n, 0).unwrap();
        for rank in 0..total {
            let reseeded = PermState::decode(n, rank).unwrap();
            assert_eq!(state.perm(), reseeded.perm(), "rank {rank}");
            assert_eq!(state.counts, reseeded.counts, "rank {rank}");
            if rank + 1 < total {
                state.advance();
            }
        }
    }

    #[test]
    fn enumeration_covers_every_permutation_once() {
        use std::collections::HashSet;

        for n in 1..=7 {
            let mut seen = HashSet::new();
            for_each_permutation(n, |perm| {
                assert!(seen.insert(perm.to_vec()), "duplicate {perm:?}");
            })
            .unwrap();
            assert_eq!(seen.len() as u64, FACTORIALS[n]);
            assert_eq!(seen, naive::all_permutations(n));
        }
    }

    #[test]
    fn single_element_space() {
        let state = PermState::decode(1, 0).unwrap();
        assert_eq!(state.perm(), &[0]);
        for_each_permutation(1, |perm| assert_eq!(perm, &[0])).unwrap();
    }
}
