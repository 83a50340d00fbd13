//! Seedable draws for fixture order and bracket seeding.
//!
//! Engine functions take any `Rng`; production callers use [`from_entropy`],
//! tests and replays use [`seeded`] so the same seed always gives the same draw.

use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

/// Shuffle items in place (Fisher-Yates).
pub fn shuffle<T, R>(items: &mut [T], rng: &mut R)
where
    R: Rng + ?Sized,
{
    items.shuffle(rng);
}

/// Deterministic generator for reproducible draws.
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Generator seeded from the operating system.
pub fn from_entropy() -> StdRng {
    StdRng::from_os_rng()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shuffle_keeps_every_item() {
        let mut rng = seeded(7);
        let mut items: Vec<u32> = (0..20).collect();
        shuffle(&mut items, &mut rng);

        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_same_seed_same_order() {
        let mut first: Vec<u32> = (0..32).collect();
        let mut second = first.clone();
        shuffle(&mut first, &mut seeded(42));
        shuffle(&mut second, &mut seeded(42));
        assert_eq!(first, second);
    }

    #[test]
    fn test_shuffle_randomizes() {
        let original: Vec<u32> = (0..32).collect();
        let mut items = original.clone();
        shuffle(&mut items, &mut from_entropy());
        let mut again = original.clone();
        shuffle(&mut again, &mut from_entropy());

        // 32! orderings; two identical draws in a row would point at a broken source
        assert!(items != original || again != original);
    }

    #[test]
    fn test_empty_and_single() {
        let mut rng = seeded(1);
        let mut empty: Vec<u32> = Vec::new();
        shuffle(&mut empty, &mut rng);
        assert!(empty.is_empty());

        let mut single = vec![9];
        shuffle(&mut single, &mut rng);
        assert_eq!(single, vec![9]);
    }
}
