//! A key/value association with linear lookup, layered on the array-backed sequence.

mod dictionary;

pub use dictionary::*;
