use rand::seq::SliceRandom;
use rand::Rng;

use crate::{CategoryId, CategoryRef, InsufficientPool};

/// Picks `count` distinct category ids from the pool, in random order.
///
/// The pool is shuffled as a copy (Fisher-Yates, via [`SliceRandom::shuffle`])
/// and the first `count` ids are returned, so every ordered subset is
/// equally likely. The caller's pool is left untouched.
///
/// Ids are only distinct if the pool entries are.
pub fn select_ids<R: Rng + ?Sized>(
    pool: &[CategoryRef],
    count: usize,
    rng: &mut R,
) -> Result<Vec<CategoryId>, InsufficientPool> {
    if pool.is_empty() || count > pool.len() {
        return Err(InsufficientPool {
            requested: count,
            available: pool.len(),
        });
    }
    let mut shuffled: Vec<CategoryId> = pool.iter().map(|category| category.id).collect();
    shuffled.shuffle(rng);
    shuffled.truncate(count);
    Ok(shuffled)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use quickcheck::quickcheck;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::arbitrary::UniquePool;

    quickcheck! {
        fn picks_distinct_ids_from_the_pool(pool: UniquePool, count: usize, seed: u64) -> bool {
            let count = count % (pool.0.len() + 1);
            let mut rng = StdRng::seed_from_u64(seed);
            let ids = select_ids(&pool.0, count, &mut rng).unwrap();
            let pool_ids: BTreeSet<CategoryId> = pool.0.iter().map(|c| c.id).collect();
            let distinct: BTreeSet<CategoryId> = ids.iter().copied().collect();
            ids.len() == count && distinct.len() == count && distinct.is_subset(&pool_ids)
        }
    }

    quickcheck! {
        fn pool_is_not_mutated(pool: UniquePool, seed: u64) -> bool {
            let before = pool.0.clone();
            let mut rng = StdRng::seed_from_u64(seed);
            let count = pool.0.len();
            select_ids(&pool.0, count, &mut rng).is_ok() && pool.0 == before
        }
    }

    quickcheck! {
        fn too_small_pool_is_rejected(pool: UniquePool, extra: u8) -> bool {
            let requested = pool.0.len() + 1 + extra as usize;
            let mut rng = StdRng::seed_from_u64(0);
            select_ids(&pool.0, requested, &mut rng)
                == Err(InsufficientPool { requested, available: pool.0.len() })
        }
    }

    #[test]
    fn empty_pool() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = select_ids(&[], 0, &mut rng).unwrap_err();
        assert_eq!(err, InsufficientPool { requested: 0, available: 0 });
        assert_eq!(err.to_string(), "Cannot pick 0 categories from an empty pool");
    }

    #[test]
    fn same_seed_same_selection() {
        let pool: Vec<CategoryRef> = (1..=100).map(|id| CategoryRef::new(CategoryId(id))).collect();
        let pick = |seed| select_ids(&pool, 6, &mut StdRng::seed_from_u64(seed)).unwrap();
        assert_eq!(pick(42), pick(42));
        assert_eq!(pick(42).len(), 6);
    }

    #[test]
    fn every_entry_comes_first_equally_often() {
        // Coarse bounds: the expected share is 1000 of 4000 per entry, with a
        // standard deviation of about 27.
        let pool: Vec<CategoryRef> = (0..4).map(|id| CategoryRef::new(CategoryId(id))).collect();
        let mut rng = StdRng::seed_from_u64(7);
        let mut firsts = [0usize; 4];
        for _ in 0..4000 {
            let first = select_ids(&pool, 2, &mut rng).unwrap()[0];
            firsts[first.0 as usize] += 1;
        }
        for (id, &count) in firsts.iter().enumerate() {
            assert!((800..=1200).contains(&count), "entry {id} came first {count} times");
        }
    }
}
