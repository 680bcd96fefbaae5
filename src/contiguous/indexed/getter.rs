use super::ArrayIndexedCollection;
use crate::traits::ElementsGetter;
use crate::util::error::{CursorError, CursorExhausted, StaleCursor};
use crate::util::option::OptionExtension;

/// The [`ElementsGetter`] implementation for [`ArrayIndexedCollection`]: a captured modification
/// counter plus the index of the next unread element.
#[derive(Debug, Clone)]
pub struct Getter {
    pub(crate) next: usize,
    pub(crate) saved_mod_count: u64,
}

impl<T> ElementsGetter<ArrayIndexedCollection<T>, T> for Getter {
    fn has_next_element(&self, source: &ArrayIndexedCollection<T>) -> Result<bool, StaleCursor> {
        if self.saved_mod_count != source.mod_count {
            return Err(StaleCursor);
        }
        Ok(self.next < source.size)
    }

    fn get_next_element<'c>(
        &mut self,
        source: &'c ArrayIndexedCollection<T>,
    ) -> Result<&'c T, CursorError> {
        if !self.has_next_element(source)? {
            return Err(CursorExhausted.into());
        }

        // UNREACHABLE: the check above passed, so next is below size and the slot is occupied.
        let value = unsafe { source.slots[self.next].as_ref().unreachable() };
        self.next += 1;
        Ok(value)
    }
}
