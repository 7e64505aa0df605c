use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// The error produced when removing or reading an element from a collection which contains no
/// elements. Carries the operation and collection names for diagnostics.
#[derive(Debug, PartialEq, Eq)]
pub struct EmptyCollection {
    pub operation: &'static str,
    pub collection: &'static str,
}

impl Display for EmptyCollection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot {} from an empty {}!", self.operation, self.collection)
    }
}

impl Error for EmptyCollection {}

/// The error produced when accessing an index beyond the end of a collection.
#[derive(Debug, PartialEq, Eq)]
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
