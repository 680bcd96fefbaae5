use super::ElementsGetter;
use crate::util::result::ResultExtension;

/// The behavioral contract satisfied by every container in this crate.
///
/// `size` always equals the number of live elements reachable via traversal. Stored values are
/// owned by the collection; removal hands them back to the caller.
pub trait Collection<T> {
    /// The cursor type produced by [`create_elements_getter`](Collection::create_elements_getter).
    type Getter: ElementsGetter<Self, T>;

    /// The number of currently stored elements.
    fn size(&self) -> usize;

    /// Returns true if the collection contains no elements.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Adds the given value into this collection.
    fn add(&mut self, value: T);

    /// Returns true only if the collection contains the given value, as determined by
    /// [`PartialEq`].
    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq;

    /// Removes one occurrence of the given value if present, reporting whether anything was
    /// removed.
    fn remove_value(&mut self, value: &T) -> bool
    where
        T: PartialEq;

    /// Allocates a new array containing a snapshot of this collection's content, in traversal
    /// order.
    fn to_array(&self) -> Box<[T]>
    where
        T: Clone;

    /// Removes all elements from this collection.
    fn clear(&mut self);

    /// Creates a fresh cursor bound to the collection's current state.
    fn create_elements_getter(&self) -> Self::Getter;

    /// Calls `process` once per element, in traversal order.
    fn for_each<F: FnMut(&T)>(&self, process: F)
    where
        Self: Sized,
    {
        // The shared borrow of self is held for the whole traversal, so the getter can't go
        // stale.
        self.create_elements_getter()
            .process_remaining(self, process)
            .throw()
    }

    /// Adds clones of all elements from the given collection into this one. The other collection
    /// remains unchanged.
    fn add_all<C>(&mut self, other: &C)
    where
        C: Collection<T>,
        T: Clone,
        Self: Sized,
    {
        other.for_each(|value| self.add(value.clone()));
    }

    /// Adds clones of the elements of `other` which pass the given test.
    fn add_all_satisfying<C, P>(&mut self, other: &C, mut test: P)
    where
        C: Collection<T>,
        P: FnMut(&T) -> bool,
        T: Clone,
        Self: Sized,
    {
        other.for_each(|value| {
            if test(value) {
                self.add(value.clone());
            }
        });
    }
}
