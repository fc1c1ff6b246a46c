//! Slow reference engine.
//!
//! Rebuilds every permutation directly from the factoradic definition of
//! its rank, one rotation step at a time, sharing no machinery with the
//! fast engine. O(n^2) per permutation instead of O(1) amortized — kept
//! for parity tests and independent cross-checks only.

/// The canonical permutation of `0..n` at `rank`, built rotation by
/// rotation. Panics on out-of-range inputs; this is test support, not a
/// production entry point.
pub fn permutation_at(n: usize, rank: u64) -> Vec<u8> {
    assert!(n >= 1 && n <= 20, "unsupported permutation size {n}");
    let mut fact = vec![1u64; n + 1];
    for i in 1..=n {
        fact[i] = fact[i - 1] * i as u64;
    }
    assert!(rank < fact[n], "rank {rank} out of range for n={n}");

    let mut perm: Vec<u8> = (0..n as u8).collect();
    let mut remainder = rank;
    for v in (1..n).rev() {
        let c = remainder / fact[v];
        remainder %= fact[v];
        // Apply c single left-rotations of the prefix of length v + 1.
        for _ in 0..c {
            let first = perm[0];
            for j in 0..v {
                perm[j] = perm[j + 1];
            }
            perm[v] = first;
        }
    }
    perm
}

/// Textbook flip count: reverse the prefix named by the first element
/// until a zero surfaces.
pub fn flips(perm: &[u8]) -> u32 {
    let mut copy = perm.to_vec();
    let mut count = 0;
    loop {
        let first = copy[0] as usize;
        if first == 0 {
            return count;
        }
        copy[..=first].reverse();
        count += 1;
    }
}

/// Signed checksum and maximum flip count over `[start, start + size)`,
/// each permutation rebuilt from scratch.
pub fn slice(n: usize, start: u64, size: u64) -> (i64, u32) {
    let mut checksum = 0i64;
    let mut max_flips = 0u32;
    for rank in start..start + size {
        let count = flips(&permutation_at(n, rank));
        let signed = i64::from(count);
        checksum += if rank % 2 == 0 { signed } else { -signed };
        max_flips = max_flips.max(count);
    }
    (checksum, max_flips)
}

/// Full-space reference result for size `n`.
pub fn run(n: usize) -> (i64, u32) {
    assert!(n >= 1 && n <= 20, "unsupported permutation size {n}");
    let mut total = 1u64;
    for i in 1..=n as u64 {
        total *= i;
    }
    slice(n, 0, total)
}

/// The set of all permutations of `0..n`, generated by Heap's algorithm.
pub fn all_permutations(n: usize) -> std::collections::HashSet<Vec<u8>> {
    fn heap(perm: &mut Vec<u8>, k: usize, out: &mut std::collections::HashSet<Vec<u8>>) {
        if k <= 1 {
            out.insert(perm.clone());
            return;
        }
        for i in 0..k {
            heap(perm, k - 1, out);
            if k % 2 == 0 {
                perm.swap(i, k - 1);
            } else {
                perm.swap(0, k - 1);
            }
        }
    }

    let mut perm: Vec<u8> = (0..n as u8).collect();
    let mut out = std::collections::HashSet::new();
    heap(&mut perm, n, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_zero_is_identity() {
        assert_eq!(permutation_at(5, 0), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn ranks_are_distinct() {
        let perms: Vec<Vec<u8>> = (0..24).map(|rank| permutation_at(4, rank)).collect();
        for (a, left) in perms.iter().enumerate() {
            for right in &perms[a + 1..] {
                assert_ne!(left, right);
            }
        }
    }

    #[test]
    fn known_small_results() {
        assert_eq!(run(1), (0, 0));
        assert_eq!(run(2), (-1, 1));
        assert_eq!(run(3), (2, 2));
        assert_eq!(run(4), (4, 4));
        assert_eq!(run(5), (11, 7));
    }

    #[test]
    fn heap_enumeration_size() {
        assert_eq!(all_permutations(5).len(), 120);
    }
}
