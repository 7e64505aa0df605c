//! A module containing [`DynamicArray`] and associated types.
//!
//! [`IterMut`](std::slice::IterMut) and [`Iter`](std::slice::Iter) from [`std::slice`] are used
//! for borrowed iteration, [`IntoIter`](std::vec::IntoIter) from [`std::vec`] for owned
//! iteration.

mod dynamic_array;
mod iter;

pub use dynamic_array::*;
