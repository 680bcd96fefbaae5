use std::hash::{BuildHasher, Hash};

use super::{Hashtable, TableEntry};
#[doc(inline)]
pub use crate::util::error::{IllegalRemove, RemoveError};
use crate::util::error::{CursorError, CursorExhausted, StaleCursor};

/// A fail-fast cursor over a [`Hashtable`], visiting entries bucket by bucket and chains front
/// to back.
///
/// Like the sequence getters, a cursor is a detached value object holding a position (bucket
/// index plus chain offset) and the modification counter it captured at creation; every call
/// takes the table by reference and re-validates the counter first. A cursor must only ever be
/// queried against the table that created it.
///
/// On top of traversal, a cursor may remove the entry its last [`next`](TableCursor::next) call
/// returned, through [`remove`](TableCursor::remove). A successful self-removal advances the
/// cursor's saved counter in lock-step with the table's, so *this* cursor continues safely —
/// while every other cursor open on the same table fails its next check.
///
/// # Examples
/// ```
/// use indexed_collections::hash::Hashtable;
///
/// let mut table = Hashtable::new();
/// table.put("Ivana", 2);
/// table.put("Jasna", 4);
///
/// let mut cursor = table.cursor();
/// while cursor.has_next(&table).unwrap() {
///     let (name, grade) = cursor.next(&table).unwrap();
///     println!("{name}: {grade}");
/// }
/// ```
#[derive(Debug, Clone)]
pub struct TableCursor {
    pub(crate) bucket: usize,
    pub(crate) offset: usize,
    pub(crate) last_returned: Option<(usize, usize)>,
    pub(crate) saved_mod_count: u64,
}

impl TableCursor {
    /// Reports whether unvisited entries remain, or [`StaleCursor`] if the table has been
    /// modified through anything other than this cursor since its creation.
    pub fn has_next<K: Hash + Eq, V, B: BuildHasher>(
        &self,
        table: &Hashtable<K, V, B>,
    ) -> Result<bool, StaleCursor> {
        self.check(table)?;
        Ok(self.locate(table).is_some())
    }

    /// Returns the next entry and advances, after the same staleness check as
    /// [`has_next`](TableCursor::has_next). Asking beyond the last entry yields
    /// [`CursorExhausted`].
    pub fn next<'t, K: Hash + Eq, V, B: BuildHasher>(
        &mut self,
        table: &'t Hashtable<K, V, B>,
    ) -> Result<(&'t K, &'t V), CursorError> {
        self.check(table)?;

        match self.locate(table) {
            Some((bucket, offset, entry)) => {
                self.bucket = bucket;
                self.offset = offset + 1;
                self.last_returned = Some((bucket, offset));
                Ok((&entry.key, &entry.value))
            },
            None => Err(CursorExhausted.into()),
        }
    }

    /// Removes the entry returned by this cursor's most recent [`next`](TableCursor::next) call
    /// and hands back its value.
    ///
    /// Fails with [`StaleCursor`] if the table was modified through any other handle, and with
    /// [`IllegalRemove`] if no entry has been returned yet or the last-returned entry was
    /// already removed through this cursor. After a successful removal the cursor's saved
    /// counter advances with the table's, so iteration may continue.
    pub fn remove<K: Hash + Eq, V, B: BuildHasher>(
        &mut self,
        table: &mut Hashtable<K, V, B>,
    ) -> Result<V, RemoveError> {
        self.check(table)?;
        let (bucket, offset) = self.last_returned.take().ok_or(IllegalRemove)?;

        let value = table.remove_entry_at(bucket, offset);
        // Track the table's own increment so this cursor stays valid while every other goes
        // stale.
        self.saved_mod_count += 1;
        // The entries behind the removed one shifted an offset back.
        self.offset -= 1;
        Ok(value)
    }
}

impl TableCursor {
    fn check<K: Hash + Eq, V, B: BuildHasher>(
        &self,
        table: &Hashtable<K, V, B>,
    ) -> Result<(), StaleCursor> {
        if self.saved_mod_count != table.mod_count {
            return Err(StaleCursor);
        }
        Ok(())
    }

    /// Finds the next unvisited entry at or after the current position, scanning forward past
    /// empty buckets.
    fn locate<'t, K: Hash + Eq, V, B: BuildHasher>(
        &self,
        table: &'t Hashtable<K, V, B>,
    ) -> Option<(usize, usize, &'t TableEntry<K, V>)> {
        let mut bucket = self.bucket;
        let mut offset = self.offset;

        while bucket < table.capacity() {
            if let Some(entry) = table.chain(bucket).nth(offset) {
                return Some((bucket, offset, entry));
            }
            bucket += 1;
            offset = 0;
        }
        None
    }
}
