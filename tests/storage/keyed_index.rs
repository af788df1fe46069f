//! KeyedIndex: insert-if-absent, lookup after growth, load factor bound.

use proptest::prelude::*;
use reelstore::{CustomerHandle, CustomerId, KeyedIndex};
use reelstore_storage::MAX_LOAD_FACTOR;

fn id(n: u32) -> CustomerId {
    CustomerId::parse(&format!("{:04}", n)).unwrap()
}

#[test]
fn duplicate_id_keeps_first_handle() {
    let mut index = KeyedIndex::new();
    assert!(index.insert(id(1234), CustomerHandle::new(0)));
    assert!(!index.insert(id(1234), CustomerHandle::new(1)));
    assert_eq!(index.get(&id(1234)), Some(&CustomerHandle::new(0)));
    assert_eq!(index.len(), 1);
}

#[test]
fn every_four_digit_id_survives_growth() {
    let mut index = KeyedIndex::with_buckets(1);
    for n in 0..10_000 {
        assert!(index.insert(id(n), CustomerHandle::new(n as usize)));
        assert!(index.load_factor() <= MAX_LOAD_FACTOR);
    }
    assert_eq!(index.len(), 10_000);
    assert!(index.bucket_count().is_power_of_two());
    for n in (0..10_000).step_by(97) {
        assert_eq!(index.get(&id(n)), Some(&CustomerHandle::new(n as usize)));
    }
}

#[test]
fn get_mut_updates_in_place() {
    let mut index = KeyedIndex::new();
    index.insert(id(1), CustomerHandle::new(1));
    *index.get_mut(&id(1)).unwrap() = CustomerHandle::new(9);
    assert_eq!(index.get(&id(1)), Some(&CustomerHandle::new(9)));
    assert!(index.get_mut(&id(2)).is_none());
}

proptest! {
    #[test]
    fn insertion_order_does_not_matter(ids in proptest::collection::hash_set(0u32..10_000, 1..400)
        .prop_map(|set| set.into_iter().collect::<Vec<_>>())
        .prop_shuffle())
    {
        let mut ids = ids;
        let mut index = KeyedIndex::with_buckets(3);
        for (pos, n) in ids.iter().enumerate() {
            prop_assert!(index.insert(id(*n), pos));
            prop_assert!(index.load_factor() <= MAX_LOAD_FACTOR);
        }
        ids.reverse();
        for n in &ids {
            prop_assert!(index.contains_key(&id(*n)));
        }
        prop_assert_eq!(index.len(), ids.len());
        prop_assert_eq!(index.iter().count(), ids.len());
    }
}
