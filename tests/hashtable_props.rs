// Hashtable properties.
//
// Property 1: the load factor invariant. For any sequence of distinct-key puts, after every
// call size / capacity stays below 3/4, the capacity stays a power of two, and every inserted
// key remains retrievable with its last-written value across all triggered rehashes.
//
// Property 2: black-box agreement with std's HashMap over random put/remove/get streams,
// including the values reported back by put and remove.
use std::collections::HashMap;
use std::num::NonZero;

use indexed_collections::hash::Hashtable;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_load_factor_invariant(
        keys in proptest::collection::hash_set(any::<u16>(), 0..200),
    ) {
        // Minimal starting capacity, so growth is exercised from the first insert on.
        let mut table = Hashtable::with_capacity(NonZero::new(1).unwrap());

        for key in &keys {
            table.put(*key, u32::from(*key) * 2);
            prop_assert!(
                table.size() * 4 < table.capacity() * 3,
                "load factor reached 3/4 after an insert: size {} capacity {}",
                table.size(),
                table.capacity(),
            );
            prop_assert!(table.capacity().is_power_of_two());
        }

        prop_assert_eq!(table.size(), keys.len());
        for key in &keys {
            prop_assert_eq!(table.get(key), Some(&(u32::from(*key) * 2)));
        }
    }

    #[test]
    fn prop_matches_std_hashmap(
        ops in proptest::collection::vec((0_u8..3, any::<u8>(), any::<u16>()), 1..200),
    ) {
        let mut table = Hashtable::new();
        let mut model: HashMap<u8, u16> = HashMap::new();

        for (op, key, value) in ops {
            match op {
                0 => {
                    prop_assert_eq!(table.put(key, value), model.insert(key, value));
                },
                1 => {
                    prop_assert_eq!(table.remove(&key), model.remove(&key));
                },
                _ => {
                    prop_assert_eq!(table.get(&key), model.get(&key));
                },
            }
            prop_assert_eq!(table.size(), model.len());
        }

        let mut drained: Vec<_> = table.into_iter().collect();
        drained.sort_unstable();
        let mut expected: Vec<_> = model.into_iter().collect();
        expected.sort_unstable();
        prop_assert_eq!(drained, expected);
    }
}
