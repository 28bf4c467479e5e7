use std::collections::BTreeSet;

use proptest::prelude::*;
use rustavl::{link, AvlTree};

#[derive(Debug, Clone)]
enum Op {
    Insert(i16),
    Remove(i16),
}

fn arbitrary_key() -> impl Strategy<Value = i16> {
    -64_i16..64
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        arbitrary_key().prop_map(Op::Insert),
        arbitrary_key().prop_map(Op::Remove),
    ]
}

/// Upper bound on AVL height for `n` nodes, rounded up from ~1.44·log2(n+2).
fn max_height(n: usize) -> usize {
    (1.45 * ((n + 2) as f64).log2()).floor() as usize
}

proptest! {
    #[test]
    fn prop_operations_match_model(ops in prop::collection::vec(arbitrary_op(), 1..200)) {
        let mut tree = AvlTree::new();
        let mut model = BTreeSet::new();

        for op in ops {
            match op {
                Op::Insert(key) => prop_assert_eq!(tree.insert(key), model.insert(key)),
                Op::Remove(key) => prop_assert_eq!(tree.remove(key), model.remove(&key)),
            }
            let height = tree.validate();
            prop_assert!(height.is_ok(), "{:?}", height);
            prop_assert_eq!(height.unwrap(), tree.height());
            prop_assert!(tree.height() <= max_height(model.len()));
        }

        let expected: Vec<_> = model.into_iter().collect();
        prop_assert_eq!(tree.in_order(), expected);
    }

    #[test]
    fn prop_insert_all_then_remove_all(
        (keys, order) in prop::collection::vec(any::<i32>(), 0..150)
            .prop_flat_map(|keys| (Just(keys.clone()), Just(keys).prop_shuffle()))
    ) {
        let mut root = None;
        for key in keys {
            root = link::insert(root, key);
        }
        for key in order {
            root = link::delete(root, key);
        }
        prop_assert!(root.is_none());
    }

    #[test]
    fn prop_duplicate_insert_keeps_shape(
        keys in prop::collection::vec(arbitrary_key(), 1..100),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut tree: AvlTree<i16> = keys.iter().copied().collect();
        let before = tree.clone();
        let key = keys[pick.index(keys.len())];

        prop_assert!(!tree.insert(key));
        prop_assert_eq!(&tree, &before);

        let root = link::insert(tree.into_link(), key);
        prop_assert_eq!(AvlTree::from(root), before);
    }

    #[test]
    fn prop_missing_delete_keeps_shape(
        keys in prop::collection::btree_set(arbitrary_key(), 0..100),
        missing in 64_i16..200,
    ) {
        let tree: AvlTree<i16> = keys.iter().copied().collect();
        let before = tree.clone();

        let root = link::delete(tree.into_link(), missing);
        prop_assert_eq!(AvlTree::from(root), before);
    }

    #[test]
    fn prop_height_is_logarithmic(keys in prop::collection::btree_set(any::<i32>(), 1..500)) {
        let tree: AvlTree<i32> = keys.iter().copied().collect();
        prop_assert!(tree.height() <= max_height(keys.len()));
        prop_assert_eq!(tree.len(), keys.len());
    }
}
