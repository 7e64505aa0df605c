use std::collections::VecDeque;
use std::fmt::{self, Debug, Formatter};

use crate::collections::traits::Collection;
#[doc(inline)]
pub use crate::util::error::EmptyCollection;
use crate::util::result::ResultExtension;

/// A double-ended queue backed by [`VecDeque`]'s ring buffer, with `O(1)` insertion and removal
/// at both ends.
pub struct Deque<T> {
    pub(crate) data: VecDeque<T>,
}

impl<T> Deque<T> {
    /// Creates a new Deque with no elements.
    pub const fn new() -> Deque<T> {
        Deque {
            data: VecDeque::new(),
        }
    }

    /// Returns the number of elements in the Deque.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the Deque contains no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Adds the provided element at the front of the Deque.
    pub fn push_front(&mut self, value: T) {
        self.data.push_front(value);
    }

    /// Adds the provided element at the back of the Deque.
    pub fn push_back(&mut self, value: T) {
        self.data.push_back(value);
    }

    /// Removes and returns the front element, panicking on a failure.
    ///
    /// # Panics
    /// Panics if the Deque is empty.
    pub fn pop_front(&mut self) -> T {
        self.try_pop_front().throw()
    }

    /// Removes and returns the front element, returning an [`Err`] on a failure rather than
    /// panicking.
    pub fn try_pop_front(&mut self) -> Result<T, EmptyCollection> {
        self.data.pop_front().ok_or(EmptyCollection {
            operation: "pop_front",
            collection: "Deque",
        })
    }

    /// Removes and returns the back element, panicking on a failure.
    ///
    /// # Panics
    /// Panics if the Deque is empty.
    pub fn pop_back(&mut self) -> T {
        self.try_pop_back().throw()
    }

    /// Removes and returns the back element, returning an [`Err`] on a failure rather than
    /// panicking.
    pub fn try_pop_back(&mut self) -> Result<T, EmptyCollection> {
        self.data.pop_back().ok_or(EmptyCollection {
            operation: "pop_back",
            collection: "Deque",
        })
    }

    /// Returns a reference to the front element without removing it, panicking on a failure.
    ///
    /// # Panics
    /// Panics if the Deque is empty.
    pub fn front(&self) -> &T {
        self.try_front().throw()
    }

    /// Returns a reference to the front element without removing it, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_front(&self) -> Result<&T, EmptyCollection> {
        self.data.front().ok_or(EmptyCollection {
            operation: "front",
            collection: "Deque",
        })
    }

    /// Returns a reference to the back element without removing it, panicking on a failure.
    ///
    /// # Panics
    /// Panics if the Deque is empty.
    pub fn back(&self) -> &T {
        self.try_back().throw()
    }

    /// Returns a reference to the back element without removing it, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_back(&self) -> Result<&T, EmptyCollection> {
        self.data.back().ok_or(EmptyCollection {
            operation: "back",
            collection: "Deque",
        })
    }
}

impl<T> Collection for Deque<T> {
    fn len(&self) -> usize {
        self.data.len()
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Debug> Debug for Deque<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deque")
            .field("front_to_back", &self.data)
            .field("len", &self.len())
            .finish()
    }
}
