use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::num::NonZero;

use super::{Getter, Iter};
use crate::contiguous::Array;
use crate::traits::{Collection, List};
use crate::util::fmt::DebugEntries;
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;
#[doc(inline)]
pub use crate::util::error::IndexOutOfBounds;

const GROWTH_FACTOR: usize = 2;

/// An indexed sequence backed by a contiguous growable [`Array`].
///
/// Elements occupy positions `0..size` with no gaps; the slots between `size` and the capacity
/// are cleared. The capacity never shrinks and doubles whenever an insertion finds the backing
/// array full.
///
/// Every structural mutation (a shift, a capacity growth, a clear — but *not* a plain append
/// into spare capacity) advances the collection's modification counter, which outstanding
/// [`Getter`]s validate against on every call.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the collection.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `add` | `O(1)`*, `O(n)` |
/// | `insert` | `O(n-i)` |
/// | `remove` | `O(n-i)` |
/// | `index_of` | `O(n)` |
/// | `clear` | `O(n)` |
///
/// \* If the backing array is full, `add` reallocates and takes `O(n)`.
///
/// # Examples
/// ```
/// use indexed_collections::contiguous::ArrayIndexedCollection;
/// use indexed_collections::traits::{Collection, List};
///
/// let mut col = ArrayIndexedCollection::new();
/// col.add("Mazda");
/// col.add("Toyota");
/// col.insert("Honda", 1);
///
/// assert_eq!(col.size(), 3);
/// assert_eq!(col.get(1), &"Honda");
/// assert_eq!(col.index_of(&"Toyota"), Some(2));
/// ```
pub struct ArrayIndexedCollection<T> {
    pub(crate) slots: Array<Option<T>>,
    pub(crate) size: usize,
    pub(crate) mod_count: u64,
}

impl<T> ArrayIndexedCollection<T> {
    /// The capacity used by [`new`](ArrayIndexedCollection::new).
    pub const DEFAULT_CAPACITY: NonZero<usize> = match NonZero::new(16) {
        Some(capacity) => capacity,
        None => unreachable!(),
    };

    /// Creates an empty collection with the default capacity.
    pub fn new() -> ArrayIndexedCollection<T> {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Creates an empty collection with the given initial capacity.
    ///
    /// # Examples
    /// ```
    /// # use indexed_collections::contiguous::ArrayIndexedCollection;
    /// # use std::num::NonZero;
    /// let col: ArrayIndexedCollection<u8> = ArrayIndexedCollection::with_capacity(
    ///     NonZero::new(4).unwrap()
    /// );
    /// assert_eq!(col.capacity(), 4);
    /// assert!(col.is_empty());
    /// ```
    pub fn with_capacity(capacity: NonZero<usize>) -> ArrayIndexedCollection<T> {
        ArrayIndexedCollection {
            slots: Array::repeat_default(capacity.get()),
            size: 0,
            mod_count: 0,
        }
    }

    /// Creates a collection holding clones of the elements of `other`, with capacity equal to
    /// `other`'s size (but at least 1).
    pub fn from_collection<C>(other: &C) -> ArrayIndexedCollection<T>
    where
        C: Collection<T>,
        T: Clone,
    {
        Self::from_collection_with_capacity(other, NonZero::<usize>::MIN)
    }

    /// Creates a collection holding clones of the elements of `other`, with capacity equal to
    /// the larger of `capacity` and `other`'s size.
    pub fn from_collection_with_capacity<C>(
        other: &C,
        capacity: NonZero<usize>,
    ) -> ArrayIndexedCollection<T>
    where
        C: Collection<T>,
        T: Clone,
    {
        let size = other.size();
        let mut slots = Array::repeat_default(cmp::max(capacity.get(), size));

        for (slot, value) in slots.iter_mut().zip(other.to_array()) {
            *slot = Some(value);
        }

        ArrayIndexedCollection {
            slots,
            size,
            mod_count: 0,
        }
    }

    /// Returns the number of stored elements.
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns true if the collection contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the size of the backing array. Always at least [`size`](ArrayIndexedCollection::size).
    pub fn capacity(&self) -> usize {
        self.slots.size()
    }

    /// Appends the given value. Runs in amortized constant time; when the backing array is full
    /// it doubles first, which advances the modification counter.
    pub fn add(&mut self, value: T) {
        self.grow_if_full();
        self.slots[self.size] = Some(value);
        self.size += 1;
    }

    /// Returns the element at `index`, for `index` in `0..size`.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        if index >= self.size {
            return Err(IndexOutOfBounds { index, len: self.size });
        }

        // UNREACHABLE: slots below size always hold a value.
        Ok(unsafe { self.slots[index].as_ref().unreachable() })
    }

    /// Returns the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns the element at `index` mutably, for `index` in `0..size`.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        if index >= self.size {
            return Err(IndexOutOfBounds { index, len: self.size });
        }

        // UNREACHABLE: slots below size always hold a value.
        Ok(unsafe { self.slots[index].as_mut().unreachable() })
    }

    /// Returns the element at `index` mutably.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Inserts the given value at `position`, for `position` in `0..=size`, shifting the tail
    /// one slot towards the end.
    pub fn try_insert(&mut self, value: T, position: usize) -> Result<(), IndexOutOfBounds> {
        if position > self.size {
            return Err(IndexOutOfBounds { index: position, len: self.size });
        }
        self.grow_if_full();

        for i in (position..self.size).rev() {
            self.slots[i + 1] = self.slots[i].take();
        }
        self.slots[position] = Some(value);
        self.size += 1;
        self.mod_count += 1;
        Ok(())
    }

    /// Inserts the given value at `position`.
    ///
    /// # Panics
    /// Panics if `position` is greater than `size`.
    pub fn insert(&mut self, value: T, position: usize) {
        self.try_insert(value, position).throw()
    }

    /// Returns the position of the first element equal to the given value, if any.
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|stored| stored == value)
    }

    /// Returns true if the collection contains an element equal to the given value.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.index_of(value).is_some()
    }

    /// Removes and returns the element at `index`, shifting the tail one slot towards the
    /// front.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        if index >= self.size {
            return Err(IndexOutOfBounds { index, len: self.size });
        }
        let removed = self.slots[index].take();

        for i in index..self.size - 1 {
            self.slots[i] = self.slots[i + 1].take();
        }
        self.size -= 1;
        self.mod_count += 1;

        // UNREACHABLE: slots below size always hold a value.
        Ok(unsafe { removed.unreachable() })
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes the first element equal to the given value, reporting whether anything was
    /// removed.
    pub fn remove_value(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self.index_of(value) {
            Some(index) => {
                // UNREACHABLE: the index came from a scan of the live elements.
                self.try_remove(index).throw();
                true
            },
            None => false,
        }
    }

    /// Drops all stored elements, keeping the current capacity.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
        self.size = 0;
        self.mod_count += 1;
    }

    /// Allocates a new array containing clones of the stored elements, in order.
    pub fn to_array(&self) -> Box<[T]>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Returns a borrowing iterator over the stored elements, in order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.slots[..self.size].iter(),
        }
    }

    /// Creates a fresh [`Getter`] bound to the collection's current state.
    pub fn create_elements_getter(&self) -> Getter {
        Getter {
            next: 0,
            saved_mod_count: self.mod_count,
        }
    }
}

impl<T> ArrayIndexedCollection<T> {
    /// Doubles the backing array if no spare slot is left for one more element.
    fn grow_if_full(&mut self) {
        if self.size == self.slots.size() {
            self.slots.realloc_with_default(self.size * GROWTH_FACTOR);
            self.mod_count += 1;
        }
    }
}

impl<T> Collection<T> for ArrayIndexedCollection<T> {
    type Getter = Getter;

    fn size(&self) -> usize {
        self.size()
    }

    fn add(&mut self, value: T) {
        self.add(value)
    }

    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.contains(value)
    }

    fn remove_value(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.remove_value(value)
    }

    fn to_array(&self) -> Box<[T]>
    where
        T: Clone,
    {
        self.to_array()
    }

    fn clear(&mut self) {
        self.clear()
    }

    fn create_elements_getter(&self) -> Getter {
        self.create_elements_getter()
    }
}

impl<T> List<T> for ArrayIndexedCollection<T> {
    fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.try_get(index)
    }

    fn try_insert(&mut self, value: T, position: usize) -> Result<(), IndexOutOfBounds> {
        self.try_insert(value, position)
    }

    fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.try_remove(index)
    }

    fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.index_of(value)
    }
}

impl<T> Default for ArrayIndexedCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for ArrayIndexedCollection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut col = ArrayIndexedCollection::new();
        for value in iter {
            col.add(value);
        }
        col
    }
}

impl<T: Clone> Clone for ArrayIndexedCollection<T> {
    fn clone(&self) -> Self {
        ArrayIndexedCollection {
            slots: self.slots.clone(),
            size: self.size,
            mod_count: 0,
        }
    }
}

impl<T: PartialEq> PartialEq for ArrayIndexedCollection<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for ArrayIndexedCollection<T> {}

impl<T: Debug> Debug for ArrayIndexedCollection<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayIndexedCollection")
            .field("contents", &DebugEntries(self.iter()))
            .field("size", &self.size)
            .field("capacity", &self.capacity())
            .finish()
    }
}

impl<T: Debug> Display for ArrayIndexedCollection<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "!")?;
        f.debug_list().entries(self.iter()).finish()
    }
}
