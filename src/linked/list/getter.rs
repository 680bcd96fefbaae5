use super::LinkedListIndexedCollection;
use crate::traits::ElementsGetter;
use crate::util::error::{CursorError, CursorExhausted, StaleCursor};

/// The [`ElementsGetter`] implementation for [`LinkedListIndexedCollection`]: a captured
/// modification counter plus the index of the next unread element.
///
/// The getter deliberately holds an index rather than a node pointer, so it never dereferences
/// into a structure that may have changed — each step re-seeks from the nearer end of the live
/// list after the staleness check passes. A stale getter is therefore always an error value,
/// never a dangling pointer.
#[derive(Debug, Clone)]
pub struct Getter {
    pub(crate) next: usize,
    pub(crate) saved_mod_count: u64,
}

impl<T> ElementsGetter<LinkedListIndexedCollection<T>, T> for Getter {
    fn has_next_element(
        &self,
        source: &LinkedListIndexedCollection<T>,
    ) -> Result<bool, StaleCursor> {
        if self.saved_mod_count != source.mod_count {
            return Err(StaleCursor);
        }
        Ok(self.next < source.size)
    }

    fn get_next_element<'c>(
        &mut self,
        source: &'c LinkedListIndexedCollection<T>,
    ) -> Result<&'c T, CursorError> {
        if !self.has_next_element(source)? {
            return Err(CursorExhausted.into());
        }

        let value = source.node_at(self.next).value();
        self.next += 1;
        Ok(value)
    }
}
