//! Prefix-reversal kernel.

/// Count the prefix reversals needed to bring element 0 to the front.
///
/// `perm` is copied into `scratch` (same length) and the reversals consume
/// the copy; its contents afterward are unspecified. Bounded by `n - 1`
/// reversals for every input the benchmark produces.
#[inline]
pub fn count_flips(perm: &[u8], scratch: &mut [u8]) -> u32 {
    debug_assert_eq!(perm.len(), scratch.len());
    scratch.copy_from_slice(perm);

    let mut flips = 0;
    let mut first = scratch[0] as usize;
    while first != 0 {
        scratch[..=first].reverse();
        flips += 1;
        first = scratch[0] as usize;
    }
    flips
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flips_of(perm: &[u8]) -> u32 {
        let mut scratch = vec![0u8; perm.len()];
        count_flips(perm, &mut scratch)
    }

    #[test]
    fn identity_needs_no_flips() {
        for n in 1..=10 {
            let identity: Vec<u8> = (0..n).collect();
            assert_eq!(flips_of(&identity), 0);
        }
    }

    #[test]
    fn small_cases() {
        assert_eq!(flips_of(&[1, 0, 2]), 1);
        assert_eq!(flips_of(&[2, 1, 0]), 1);
        assert_eq!(flips_of(&[1, 2, 0]), 2);
        assert_eq!(flips_of(&[2, 0, 1]), 2);
        assert_eq!(flips_of(&[0, 2, 1]), 0);
    }

    #[test]
    fn scratch_is_consumed_not_the_input() {
        let perm = [3u8, 1, 2, 0];
        let mut scratch = [0u8; 4];
        let flips = count_flips(&perm, &mut scratch);
        assert!(flips > 0);
        assert_eq!(perm, [3, 1, 2, 0]);
        assert_eq!(scratch[0], 0);
    }
}
