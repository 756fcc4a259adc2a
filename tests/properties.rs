//! Property-based tests: random operation sequences checked against
//! `BTreeSet` as the reference model.

use std::collections::BTreeSet;

use proptest::prelude::*;
use skipset::SkipSet;

#[derive(Clone, Debug)]
enum Op {
    Insert(i32),
    Remove(i32),
}

// A narrow value domain so inserts, duplicates and removals collide often.
fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (-20..20i32).prop_map(Op::Insert),
        (-20..20i32).prop_map(Op::Remove),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn matches_ordered_set_model(ops in prop::collection::vec(arbitrary_op(), 1..200)) {
        let mut set = SkipSet::new();
        let mut model = BTreeSet::new();

        for op in &ops {
            match *op {
                Op::Insert(v) => {
                    set.insert(v);
                    model.insert(v);
                }
                Op::Remove(v) => {
                    prop_assert_eq!(set.remove(&v), model.remove(&v));
                }
            }
            prop_assert_eq!(set.len(), model.len());
            prop_assert_eq!(set.is_empty(), model.is_empty());
        }

        let got: Vec<i32> = set.iter().copied().collect();
        let want: Vec<i32> = model.iter().copied().collect();
        prop_assert_eq!(got, want);

        for v in -20..20 {
            prop_assert_eq!(set.contains(&v), model.contains(&v));
            prop_assert_eq!(set.find(&v).is_end(), !model.contains(&v));
        }
    }

    #[test]
    fn iteration_is_seed_independent(
        values in prop::collection::vec(any::<i32>(), 0..100),
        s1 in any::<u64>(),
        s2 in any::<u64>(),
    ) {
        let mut a = SkipSet::with_seed(s1);
        let mut b = SkipSet::with_seed(s2);
        for &v in &values {
            a.insert(v);
            b.insert(v);
        }

        // The seed shapes the towers, never what iteration yields.
        prop_assert!(a == b);
        let sorted: Vec<i32> = values
            .iter()
            .copied()
            .collect::<BTreeSet<i32>>()
            .into_iter()
            .collect();
        let got: Vec<i32> = a.iter().copied().collect();
        prop_assert_eq!(got, sorted);
    }

    #[test]
    fn clone_is_equal_then_independent(
        values in prop::collection::vec(-50..50i32, 1..60),
    ) {
        let mut set: SkipSet<i32> = values.iter().copied().collect();
        let copy = set.clone();
        prop_assert!(copy == set);

        let before: Vec<i32> = copy.iter().copied().collect();
        for v in &values {
            set.remove(v);
        }
        prop_assert!(set.is_empty());

        let after: Vec<i32> = copy.iter().copied().collect();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn owning_and_borrowed_iteration_agree(
        values in prop::collection::vec(any::<i16>(), 0..80),
    ) {
        let set: SkipSet<i16> = values.iter().copied().collect();
        let borrowed: Vec<i16> = set.iter().copied().collect();
        let owned: Vec<i16> = set.into_iter().collect();
        prop_assert_eq!(borrowed, owned);
    }

    #[test]
    fn find_returns_the_stored_element(
        values in prop::collection::vec(any::<i32>(), 1..80),
    ) {
        let set: SkipSet<i32> = values.iter().copied().collect();
        for v in &values {
            prop_assert_eq!(set.find(v).value(), Ok(v));
        }
    }
}
