use super::Collection;
use crate::util::result::ResultExtension;
#[doc(inline)]
pub use crate::util::error::IndexOutOfBounds;

/// A [`Collection`] whose elements sit at contiguous positions `0..size`, addressable by index.
///
/// Every index-taking operation validates its index *before* mutating anything, so a failed call
/// leaves the list unchanged. The `try_` variants surface the violation as a typed
/// [`IndexOutOfBounds`]; their plain counterparts panic with the same message.
pub trait List<T>: Collection<T> {
    /// Returns the element stored at position `index`. Valid indexes are `0` to `size - 1`.
    fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds>;

    /// Returns the element stored at position `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Inserts (does not overwrite) the given value at the given position, shifting any elements
    /// at `position` and after one place towards the end. The legal positions are `0` to `size`,
    /// both included.
    fn try_insert(&mut self, value: T, position: usize) -> Result<(), IndexOutOfBounds>;

    /// Inserts the given value at the given position.
    ///
    /// # Panics
    /// Panics if `position` is greater than `size`.
    fn insert(&mut self, value: T, position: usize) {
        self.try_insert(value, position).throw()
    }

    /// Removes and returns the element at the given index. The element previously at
    /// `index + 1` ends up at `index`, and so on. Legal indexes are `0` to `size - 1`.
    fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds>;

    /// Removes and returns the element at the given index.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Returns the position of the first occurrence of the given value, or None if the value is
    /// not found.
    fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq;
}
