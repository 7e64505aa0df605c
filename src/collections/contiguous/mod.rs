//! Contiguous collection types. Namely [`DynamicArray`] and the LIFO [`Stack`], both thin
//! adapters over [`Vec`]'s growable buffer.

pub mod dynamic_array;
pub mod stack;

#[doc(inline)]
pub use dynamic_array::DynamicArray;
#[doc(inline)]
pub use stack::Stack;
