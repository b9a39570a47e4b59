use rand::Rng;

/// Fisher-Yates shuffle in place.
///
/// Walks from the last index down to 1, swapping each slot with a uniformly
/// drawn index in `0..=i`. Slices of length 0 or 1 are left untouched and
/// consume no randomness.
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        for len in 0..40usize {
            let original: Vec<usize> = (0..len).map(|i| i % 7).collect();
            let mut shuffled = original.clone();
            shuffle(&mut shuffled, &mut rng);

            let mut a = original.clone();
            let mut b = shuffled.clone();
            a.sort_unstable();
            b.sort_unstable();
            assert_eq!(a, b, "multiset changed for len={len}");
        }
    }

    #[test]
    fn empty_and_single_are_noops() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut empty: Vec<u32> = Vec::new();
        shuffle(&mut empty, &mut rng);
        assert!(empty.is_empty());

        let mut one = vec![7u32];
        shuffle(&mut one, &mut rng);
        assert_eq!(one, vec![7]);
    }

    #[test]
    fn shuffle_is_deterministic_with_seed() {
        let make = |seed: u64| -> Vec<u32> {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut v: Vec<u32> = (0..20).collect();
            shuffle(&mut v, &mut rng);
            v
        };
        assert_eq!(make(99), make(99));
        assert_ne!(make(99), make(100));
    }

    #[test]
    fn shuffle_reaches_every_position() {
        // Element 0 should land in each of 4 slots at least once over many runs.
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; 4];
        for _ in 0..200 {
            let mut v = [0u8, 1, 2, 3];
            shuffle(&mut v, &mut rng);
            let pos = v.iter().position(|&x| x == 0).unwrap();
            seen[pos] = true;
        }
        assert_eq!(seen, [true; 4]);
    }
}
