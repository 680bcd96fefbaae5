use std::fmt::{self, Debug, Formatter};
use std::mem;

use crate::contiguous::ArrayIndexedCollection;
use crate::util::result::ResultExtension;

/// A key/value association stored as a flat list of pairs.
///
/// Keys are unique under [`PartialEq`]; lookup, insertion and removal all linear-scan the
/// backing list. That makes every operation `O(size)` — a deliberate simplicity choice for
/// small associations, not an optimization target. For hashed lookup see
/// [`Hashtable`](crate::hash::Hashtable).
///
/// Pairs keep the insertion order of their keys; overwriting a value does not move its pair.
///
/// # Examples
/// ```
/// use indexed_collections::dictionary::Dictionary;
///
/// let mut grades = Dictionary::new();
/// assert_eq!(grades.put("Ivana", 2), None);
/// assert_eq!(grades.put("Ivana", 5), Some(2));
///
/// assert_eq!(grades.get(&"Ivana"), Some(&5));
/// assert_eq!(grades.remove(&"Ivana"), Some(5));
/// assert!(grades.is_empty());
/// ```
pub struct Dictionary<K: PartialEq, V> {
    pairs: ArrayIndexedCollection<Pair<K, V>>,
}

struct Pair<K, V> {
    key: K,
    value: V,
}

impl<K: PartialEq, V> Dictionary<K, V> {
    /// Creates an empty Dictionary.
    pub fn new() -> Dictionary<K, V> {
        Dictionary {
            pairs: ArrayIndexedCollection::new(),
        }
    }

    /// Returns the number of stored pairs.
    pub fn size(&self) -> usize {
        self.pairs.size()
    }

    /// Returns true if the Dictionary contains no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Associates `value` with `key`. If the key is already present its value is overwritten
    /// and the previous value returned; otherwise the new pair is appended.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        match self.position_of(&key) {
            Some(index) => {
                // UNREACHABLE: the position came from a scan of the live pairs.
                let pair = self.pairs.try_get_mut(index).throw();
                Some(mem::replace(&mut pair.value, value))
            },
            None => {
                self.pairs.add(Pair { key, value });
                None
            },
        }
    }

    /// Returns a reference to the value associated with the given key, if any.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.pairs
            .iter()
            .find(|pair| pair.key == *key)
            .map(|pair| &pair.value)
    }

    /// Removes the pair with the given key, returning its value if it existed.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let index = self.position_of(key)?;
        // UNREACHABLE: the position came from a scan of the live pairs.
        Some(self.pairs.try_remove(index).throw().value)
    }

    /// Returns true if there is a value associated with the given key.
    pub fn contains_key(&self, key: &K) -> bool {
        self.position_of(key).is_some()
    }

    /// Drops all stored pairs.
    pub fn clear(&mut self) {
        self.pairs.clear();
    }

    fn position_of(&self, key: &K) -> Option<usize> {
        self.pairs.iter().position(|pair| pair.key == *key)
    }
}

impl<K: PartialEq, V> Default for Dictionary<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: PartialEq + Debug, V: Debug> Debug for Dictionary<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.pairs.iter().map(|pair| (&pair.key, &pair.value)))
            .finish()
    }
}
