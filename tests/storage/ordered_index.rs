//! OrderedIndex: sorted traversal and predicate search for any tree shape.

use proptest::prelude::*;
use reelstore::OrderedIndex;

fn by_key(a: &(String, usize), b: &(String, usize)) -> std::cmp::Ordering {
    a.0.cmp(&b.0)
}

#[test]
fn sort_key_order_regardless_of_insertion() {
    let mut index = OrderedIndex::new();
    for (pos, key) in ["You've Got Mail 1998", "Fargo 1996", "When Harry Met Sally 1989"]
        .into_iter()
        .enumerate()
    {
        index.insert((key.to_string(), pos), by_key);
    }
    let keys: Vec<&str> = index.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(
        keys,
        vec!["Fargo 1996", "When Harry Met Sally 1989", "You've Got Mail 1998"]
    );
}

#[test]
fn predicate_search_ignores_ordering() {
    let mut index = OrderedIndex::new();
    for (pos, key) in ["b", "a", "c"].into_iter().enumerate() {
        index.insert((key.to_string(), pos), by_key);
    }
    // Search on the payload, which has nothing to do with the tree order.
    assert_eq!(
        index.find_by_predicate(|(_, pos)| *pos == 2).map(|(k, _)| k.as_str()),
        Some("c")
    );
    assert_eq!(index.find_by_key(&"a".to_string(), |(k, _)| k.clone()).map(|(_, p)| *p), Some(1));
}

#[test]
fn sorted_input_builds_a_list_and_still_works() {
    let mut index = OrderedIndex::new();
    for n in 0..5_000u32 {
        index.insert(n, |a, b| a.cmp(b));
    }
    assert_eq!(index.depth(), 5_000);
    assert_eq!(index.find_by_predicate(|n| *n == 4_999), Some(&4_999));
    let mut count = 0;
    index.for_each_in_order(|_| count += 1);
    assert_eq!(count, 5_000);
}

proptest! {
    #[test]
    fn traversal_is_non_decreasing(keys in proptest::collection::vec("[a-e]{0,3}", 0..150)) {
        let mut index = OrderedIndex::new();
        for (pos, key) in keys.iter().enumerate() {
            index.insert((key.clone(), pos), by_key);
        }
        let traversed: Vec<&(String, usize)> = index.iter().collect();
        prop_assert_eq!(traversed.len(), keys.len());
        for pair in traversed.windows(2) {
            prop_assert!(pair[0].0 <= pair[1].0);
        }
    }

    #[test]
    fn predicate_finds_each_item(keys in proptest::collection::vec("[a-z]{1,4}", 1..100)) {
        let mut index = OrderedIndex::new();
        for (pos, key) in keys.iter().enumerate() {
            index.insert((key.clone(), pos), by_key);
        }
        for pos in 0..keys.len() {
            let found = index.find_by_predicate(|(_, p)| *p == pos);
            prop_assert_eq!(found.map(|(k, _)| k), Some(&keys[pos]));
        }
    }
}
