/// Behavior common to every collection in this crate: counting elements.
///
/// Each implementor also exposes `len` and `is_empty` as inherent methods; the trait exists for
/// code that wants to be generic over which collection it is measuring.
pub trait Collection {
    /// Returns the number of elements in the collection.
    fn len(&self) -> usize;

    /// Returns true if the collection contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
