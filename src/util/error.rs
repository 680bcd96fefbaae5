use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaleCursor;

impl Display for StaleCursor {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Unexpected modification of the source collection during iteration!")
    }
}

impl Error for StaleCursor {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorExhausted;

impl Display for CursorExhausted {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "No next element for iteration!")
    }
}

impl Error for CursorExhausted {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IllegalRemove;

impl Display for IllegalRemove {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "No last-returned entry available to remove through this cursor!")
    }
}

impl Error for IllegalRemove {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, IsVariant)]
pub enum CursorError {
    Stale(StaleCursor),
    Exhausted(CursorExhausted),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, IsVariant)]
pub enum RemoveError {
    Stale(StaleCursor),
    Illegal(IllegalRemove),
}
