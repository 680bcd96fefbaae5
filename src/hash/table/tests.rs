#![cfg(test)]

use std::num::NonZero;

use super::*;
use crate::util::alloc::CountedDrop;
use crate::util::error::{CursorError, CursorExhausted, StaleCursor};
use crate::util::hash::{BadHasherBuilder, ManualHash};

fn capacity(value: usize) -> NonZero<usize> {
    NonZero::new(value).expect("test capacities are non-zero")
}

/// The three pairs used by the original scenario: a table with requested capacity 1, so every
/// insert exercises the load factor.
fn filled_table() -> Hashtable<&'static str, &'static str> {
    let mut table = Hashtable::with_capacity(capacity(1));
    table.put("Key", "Value");
    table.put("Mujo", "Haso");
    table.put("Knuth", "Donald");
    table
}

#[test]
fn test_capacity_rounds_to_power_of_two() {
    let table: Hashtable<u8, u8> = Hashtable::with_capacity(capacity(1));
    assert_eq!(table.capacity(), 1);

    let table: Hashtable<u8, u8> = Hashtable::with_capacity(capacity(5));
    assert_eq!(table.capacity(), 8);

    let table: Hashtable<u8, u8> = Hashtable::with_capacity(capacity(16));
    assert_eq!(table.capacity(), 16);
}

#[test]
fn test_putting() {
    let mut table = Hashtable::new();
    assert_eq!(table.put("Key", "Value"), None);
    assert_eq!(table.size(), 1);
    assert_eq!(table.get("Key"), Some(&"Value"));
}

#[test]
fn test_putting_over() {
    let mut table = Hashtable::new();
    table.put("Key", "Value");
    assert_eq!(
        table.put("Key", "Val"),
        Some("Value"),
        "Overwriting should return the previous value."
    );
    assert_eq!(table.size(), 1, "Overwriting should not grow the table.");
    assert_eq!(table.get("Key"), Some(&"Val"));
}

#[test]
fn test_minimal_capacity_scenario() {
    let mut table = filled_table();

    assert_eq!(table.size(), 3);
    assert_eq!(table.get("Knuth"), Some(&"Donald"));
    assert_eq!(table.remove("Mujo"), Some("Haso"));
    assert_eq!(table.size(), 2);
    assert_eq!(table.get("Mujo"), None);
}

#[test]
fn test_contains() {
    let table = filled_table();
    assert!(table.contains_key("Knuth"));
    assert!(!table.contains_key("Perica"));
    assert!(table.contains_value(&"Donald"));
    assert!(!table.contains_value(&"Ante"));
}

#[test]
fn test_get_borrowed_key() {
    let mut table = Hashtable::new();
    table.put(String::from("Kikiriki"), 7);

    // Lookup through &str against String keys.
    assert_eq!(table.get("Kikiriki"), Some(&7));
    assert_eq!(table.remove("Kikiriki"), Some(7));
}

#[test]
fn test_remove_from_every_chain_position() {
    // All keys collide into bucket zero, forming one chain in insertion order.
    let mut table = Hashtable::with_capacity_and_hasher(capacity(16), BadHasherBuilder);
    for name in ["first", "second", "third", "fourth"] {
        table.put(ManualHash::new(0, name), name);
    }

    assert_eq!(table.remove(&ManualHash::new(0, "second")), Some("second"), "Chain middle.");
    assert_eq!(table.remove(&ManualHash::new(0, "first")), Some("first"), "Chain head.");
    assert_eq!(table.remove(&ManualHash::new(0, "fourth")), Some("fourth"), "Chain tail.");
    assert_eq!(table.remove(&ManualHash::new(0, "fourth")), None, "Already gone.");

    assert_eq!(table.size(), 1);
    assert_eq!(table.get(&ManualHash::new(0, "third")), Some(&"third"));
}

#[test]
fn test_load_factor_invariant_and_retrievability() {
    let mut table = Hashtable::with_capacity(capacity(1));

    for i in 0..100_usize {
        table.put(i, i * 10);
        assert!(
            table.size() * 4 < table.capacity() * 3,
            "The load factor should stay below 3/4 after every insert (size {}, capacity {}).",
            table.size(),
            table.capacity(),
        );
    }

    assert_eq!(table.size(), 100);
    for i in 0..100 {
        assert_eq!(
            table.get(&i),
            Some(&(i * 10)),
            "Every key should survive the triggered rehashes with its last value."
        );
    }
}

#[test]
fn test_rehash_recomputes_slots() {
    let mut table = Hashtable::with_capacity_and_hasher(capacity(4), BadHasherBuilder);
    table.put(ManualHash::new(1, "one"), 1);
    table.put(ManualHash::new(5, "five"), 5);
    assert_eq!(
        table.chain(1).count(),
        2,
        "With capacity 4, hashes 1 and 5 share bucket 1."
    );

    table.put(ManualHash::new(2, "two"), 2);
    assert_eq!(table.capacity(), 8, "The third insert reaches 3/4 and doubles the table.");
    assert_eq!(
        table.chain(1).count(),
        1,
        "After the rehash, hash 5 moves out of bucket 1."
    );
    assert_eq!(table.chain(5).count(), 1);
    assert_eq!(table.get(&ManualHash::new(5, "five")), Some(&5));
}

#[test]
fn test_clear_keeps_capacity() {
    let mut table = filled_table();
    let old_capacity = table.capacity();
    table.clear();

    assert!(table.is_empty());
    assert_eq!(table.capacity(), old_capacity);
    assert_eq!(table.get("Key"), None);
}

#[test]
fn test_drop_and_clear_free_every_value() {
    let counter = CountedDrop::new(0);

    let mut table = Hashtable::with_capacity_and_hasher(capacity(16), BadHasherBuilder);
    for hash in 0..4_u64 {
        // Two entries per bucket, so chains and heads both get exercised.
        table.put(ManualHash::new(hash, hash), counter.clone());
        table.put(ManualHash::new(hash, hash + 100), counter.clone());
    }

    table.clear();
    assert_eq!(counter.take(), 8, "Clearing should drop every stored value once.");

    table.put(ManualHash::new(0, 0), counter.clone());
    drop(table);
    assert_eq!(counter.take(), 1, "Dropping should free entries added after a clear.");
}

#[test]
fn test_to_array_snapshot() {
    let mut table = Hashtable::with_capacity_and_hasher(capacity(8), BadHasherBuilder);
    table.put(ManualHash::new(2, "b"), 2);
    table.put(ManualHash::new(1, "a"), 1);
    table.put(ManualHash::new(2, "c"), 3);

    let values: Vec<_> = table.to_array().iter().map(|(_, value)| *value).collect();
    assert_eq!(
        values,
        [1, 2, 3],
        "The snapshot should follow bucket order, chains front to back."
    );
}

#[test]
fn test_display() {
    let mut table: Hashtable<&str, &str> = Hashtable::new();
    assert_eq!(format!("{table}"), "#{}");

    table.put("Key", "Value");
    assert_eq!(format!("{table}"), "#{\"Key\": \"Value\"}");
}

#[test]
fn test_cursor_traversal() {
    let mut table = Hashtable::with_capacity_and_hasher(capacity(8), BadHasherBuilder);
    table.put(ManualHash::new(3, "c"), 3);
    table.put(ManualHash::new(0, "a"), 1);
    table.put(ManualHash::new(0, "b"), 2);

    let mut cursor = table.cursor();
    let mut seen = Vec::new();
    while cursor.has_next(&table).expect("no mutation happened") {
        let (_, value) = cursor.next(&table).expect("has_next just returned true");
        seen.push(*value);
    }

    assert_eq!(seen, [1, 2, 3], "The cursor should skip empty buckets and walk chains in order.");
    assert_eq!(
        cursor.next(&table),
        Err(CursorError::Exhausted(CursorExhausted)),
        "An exhausted cursor should keep reporting exhaustion, not staleness."
    );
}

#[test]
fn test_cursor_stale_after_table_mutation() {
    let table_mutations: [fn(&mut Hashtable<&str, &str>); 4] = [
        |table| {
            table.put("Ante", "Neda");
        },
        |table| {
            // Overwriting also counts as a modification, as observed by cursors.
            table.put("Key", "Val");
        },
        |table| {
            table.remove("Mujo");
        },
        |table| table.clear(),
    ];

    for mutate in table_mutations {
        let mut table = filled_table();
        let mut cursor = table.cursor();
        cursor.next(&table).expect("the table starts with three entries");

        mutate(&mut table);

        assert_eq!(cursor.has_next(&table), Err(StaleCursor));
        assert_eq!(cursor.next(&table), Err(CursorError::Stale(StaleCursor)));
        assert_eq!(cursor.remove(&mut table), Err(RemoveError::Stale(StaleCursor)));
    }
}

#[test]
fn test_cursor_self_removal_continues() {
    let mut table = Hashtable::with_capacity_and_hasher(capacity(16), BadHasherBuilder);
    for (hash, name) in [(0, "a"), (0, "b"), (3, "c")] {
        table.put(ManualHash::new(hash, name), name);
    }

    let mut cursor = table.cursor();
    let mut kept = Vec::new();
    while cursor.has_next(&table).expect("only this cursor mutates the table") {
        let (_, value) = cursor.next(&table).expect("has_next just returned true");
        if *value == "a" {
            assert_eq!(
                cursor.remove(&mut table),
                Ok("a"),
                "Removing the last-returned entry through the cursor should succeed."
            );
        } else {
            kept.push(*value);
        }
    }

    assert_eq!(kept, ["b", "c"], "Self-removal should not disturb the rest of the traversal.");
    assert_eq!(table.size(), 2);
    assert!(!table.contains_key(&ManualHash::new(0, "a")));
}

#[test]
fn test_cursor_illegal_removal() {
    let mut table = filled_table();

    let mut cursor = table.cursor();
    assert_eq!(
        cursor.remove(&mut table),
        Err(RemoveError::Illegal(IllegalRemove)),
        "Removing before any next call should be rejected."
    );

    cursor.next(&table).expect("the table starts with three entries");
    assert!(cursor.remove(&mut table).is_ok());
    assert_eq!(
        cursor.remove(&mut table),
        Err(RemoveError::Illegal(IllegalRemove)),
        "The last-returned entry is already gone, so a second removal is rejected."
    );
}

#[test]
fn test_cursor_self_removal_fails_other_cursors() {
    let mut table = filled_table();

    let mut first = table.cursor();
    let mut second = table.cursor();
    first.next(&table).expect("the table starts with three entries");
    second.next(&table).expect("the table starts with three entries");

    first.remove(&mut table).expect("removing the last-returned entry");

    assert_eq!(second.has_next(&table), Err(StaleCursor));
    assert_eq!(second.next(&table), Err(CursorError::Stale(StaleCursor)));
    assert_eq!(second.remove(&mut table), Err(RemoveError::Stale(StaleCursor)));

    assert_eq!(
        first.has_next(&table),
        Ok(true),
        "The removing cursor itself should continue working."
    );
}

#[test]
fn test_into_iter_drains_all_entries() {
    let table = filled_table();
    let mut entries: Vec<_> = table.into_iter().collect();
    entries.sort();

    assert_eq!(entries, [("Key", "Value"), ("Knuth", "Donald"), ("Mujo", "Haso")]);
}

#[test]
fn test_keys_and_values() {
    let mut table = Hashtable::with_capacity_and_hasher(capacity(8), BadHasherBuilder);
    table.put(ManualHash::new(0, "a"), 1);
    table.put(ManualHash::new(1, "b"), 2);

    let keys: Vec<_> = table.keys().map(|key| key.clone().value()).collect();
    let values: Vec<_> = table.values().copied().collect();
    assert_eq!(keys, ["a", "b"]);
    assert_eq!(values, [1, 2]);
}
