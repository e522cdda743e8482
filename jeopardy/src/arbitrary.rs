use std::collections::BTreeSet;

use quickcheck::{Arbitrary, Gen};

use crate::{Category, CategoryId, CategoryRef, Clue, RevealState};

/// A nonempty pool of categories with distinct ids.
#[derive(Clone, Debug)]
pub struct UniquePool(pub Vec<CategoryRef>);

impl Arbitrary for UniquePool {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut ids = BTreeSet::<u64>::arbitrary(g);
        ids.insert(u64::arbitrary(g));
        let mut pool: Vec<CategoryRef> = ids
            .into_iter()
            .map(|id| CategoryRef {
                id: CategoryId(id),
                title: format!("category {id}"),
                clues_count: usize::from(u8::arbitrary(g) % 10),
            })
            .collect();
        // The service does not list categories in id order.
        let len = pool.len();
        for i in 0..len {
            let j = usize::arbitrary(g) % len;
            pool.swap(i, j);
        }
        UniquePool(pool)
    }
}

/// Categories that form a valid, rectangular board.
#[derive(Clone, Debug)]
pub struct BoardInput {
    // Nonempty, all with the same number of clues
    pub categories: Vec<Category>,
}

impl Arbitrary for BoardInput {
    fn arbitrary(g: &mut Gen) -> Self {
        let columns = 1 + usize::from(u8::arbitrary(g) % 8);
        let rows = usize::from(u8::arbitrary(g) % 7);
        let categories = (0..columns)
            .map(|col| {
                let clues = (0..rows)
                    .map(|_| Clue::new(String::arbitrary(g), String::arbitrary(g)))
                    .collect();
                Category::new(format!("Category {col}"), clues)
            })
            .collect();
        BoardInput { categories }
    }
}

impl Arbitrary for RevealState {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&[RevealState::Hidden, RevealState::Question, RevealState::Answer])
            .unwrap()
    }
}
