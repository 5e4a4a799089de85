//! Property tests for selection store mutations.
//!
//! Random sequences of country and comparison edits must keep the
//! comparison set non-empty, bounded and duplicate-free, and must bump the
//! revision exactly once per applied edit.

use proptest::prelude::*;
use std::collections::HashSet;

use data_intelligence::domain::foundation::Country;
use data_intelligence::domain::selection::SelectionStore;

const POOL: [&str; 6] = ["India", "United States", "China", "Brazil", "Germany", "Japan"];

#[derive(Debug, Clone)]
enum Edit {
    Primary(usize),
    Add(usize),
    Remove(usize),
    Reseed,
}

fn edit() -> impl Strategy<Value = Edit> {
    prop_oneof![
        (0..POOL.len()).prop_map(Edit::Primary),
        (0..POOL.len()).prop_map(Edit::Add),
        (0..POOL.len()).prop_map(Edit::Remove),
        Just(Edit::Reseed),
    ]
}

fn country(index: usize) -> Country {
    Country::new(POOL[index]).unwrap()
}

proptest! {
    #[test]
    fn comparison_set_invariants_hold(
        max in 1usize..=POOL.len(),
        edits in prop::collection::vec(edit(), 0..80),
    ) {
        let mut store = SelectionStore::new(country(0), max);

        for edit in edits {
            let before = store.state().revision();
            let outcome = match edit {
                Edit::Primary(i) => store.set_primary_country(country(i)),
                Edit::Add(i) => store.add_to_comparison(country(i)),
                Edit::Remove(i) => store.remove_from_comparison(&country(i)),
                Edit::Reseed => store.reseed_comparison(),
            };

            let members = store.state().comparison_countries();
            prop_assert!(!members.is_empty());
            prop_assert!(members.len() <= max);
            let mut seen = HashSet::new();
            prop_assert!(members.iter().all(|c| seen.insert(c.clone())));

            let expected = if outcome.is_applied() { before + 1 } else { before };
            prop_assert_eq!(store.state().revision(), expected);
        }
    }

    #[test]
    fn repeated_add_is_idempotent(i in 0..POOL.len()) {
        let mut store = SelectionStore::new(country(0), POOL.len());
        store.add_to_comparison(country(i));
        let once = store.state().comparison_countries().to_vec();

        store.add_to_comparison(country(i));

        prop_assert_eq!(store.state().comparison_countries(), once.as_slice());
    }
}
