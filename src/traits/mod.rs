//! The capability set shared by every container: the [`Collection`] contract, the indexed
//! [`List`] extension and the fail-fast [`ElementsGetter`] cursor contract.

mod collection;
mod getter;
mod list;

pub use collection::*;
pub use getter::*;
pub use list::*;
