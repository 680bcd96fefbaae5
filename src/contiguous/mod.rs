//! Contiguous collection types: [`Array`] as a fixed-size heap slab and
//! [`ArrayIndexedCollection`] for a sequence that grows at runtime.

pub mod array;
pub mod indexed;

#[doc(inline)]
pub use array::Array;
#[doc(inline)]
pub use indexed::ArrayIndexedCollection;
