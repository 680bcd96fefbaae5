use crate::util::result::ResultExtension;
#[doc(inline)]
pub use crate::util::error::{CursorError, CursorExhausted, StaleCursor};

/// A single-pass cursor over a collection of type `C`, created by
/// [`Collection::create_elements_getter`](super::Collection::create_elements_getter).
///
/// A getter is a detached value object: it holds a position and the modification counter it
/// captured from its source at creation, and takes the source collection as an argument on every
/// call. Both query methods re-validate the captured counter against the live one *before*
/// touching any element, so any structural mutation of the source performed between cursor calls
/// is reported as [`StaleCursor`] instead of yielding data from a reshaped collection.
///
/// A getter must only ever be queried against the collection that created it.
///
/// # Examples
/// ```
/// use indexed_collections::contiguous::ArrayIndexedCollection;
/// use indexed_collections::traits::{Collection, ElementsGetter, List};
///
/// let mut col = ArrayIndexedCollection::new();
/// col.add("Ivo");
/// col.add("Ana");
///
/// let mut getter = col.create_elements_getter();
/// assert_eq!(getter.get_next_element(&col), Ok(&"Ivo"));
///
/// col.remove(0);
/// assert!(getter.get_next_element(&col).is_err());
/// ```
pub trait ElementsGetter<C: ?Sized, T> {
    /// Reports whether unread elements remain, or [`StaleCursor`] if the source has been
    /// structurally mutated since this getter was created.
    fn has_next_element(&self, source: &C) -> Result<bool, StaleCursor>;

    /// Returns the next element and advances, after running the same staleness check as
    /// [`has_next_element`](ElementsGetter::has_next_element). Asking beyond the last element
    /// yields [`CursorExhausted`].
    fn get_next_element<'c>(&mut self, source: &'c C) -> Result<&'c T, CursorError>;

    /// Drains the cursor, invoking `process` once per remaining element.
    fn process_remaining<F: FnMut(&T)>(
        &mut self,
        source: &C,
        mut process: F,
    ) -> Result<(), StaleCursor> {
        while self.has_next_element(source)? {
            // UNREACHABLE: the check above just confirmed that another element is available.
            process(self.get_next_element(source).throw());
        }
        Ok(())
    }
}
