use core::ptr::NonNull;

use super::error::ListError;

/// Anything holding a `next` pointer into a chain of nodes.
///
/// The list head and the pool's free chain implement this as well as the
/// nodes themselves, so splicing a node in or out looks the same whether
/// its parent is another node or the owner of the chain.
pub(crate) trait Link {
    /// The node type the link points at.
    type Target;

    /// Get the next pointer in the chain
    fn next(&self) -> Option<NonNull<Self::Target>>;

    /// Set the next pointer in the chain
    fn set_next(&mut self, next: Option<NonNull<Self::Target>>);
}

/// A singly linked list of borrowed items.
///
/// Items are compared by address, never by value: `contains_item` and
/// `remove_item` look for the very reference that was pushed.
pub trait List<'a> {
    /// The type the stored references point at.
    type Item: ?Sized + 'a;

    /// Put an item at the head of the list.
    fn push(&mut self, item: &'a Self::Item) -> Result<(), ListError>;

    /// Take the item at the head of the list.
    fn pull(&mut self) -> Option<&'a Self::Item>;

    /// Like [`pull`](List::pull), but reports an empty list as [`ListError::Empty`].
    fn try_pull(&mut self) -> Result<&'a Self::Item, ListError> {
        self.pull().ok_or(ListError::Empty)
    }

    /// Get the item `index` positions from the head without removing it.
    fn peek_by_index(&self, index: usize) -> Option<&'a Self::Item>;

    /// Check whether this exact item is in the list.
    fn contains_item(&self, item: &Self::Item) -> bool;

    /// Unlink the node holding this exact item, searching from the head.
    fn remove_item(&mut self, item: &Self::Item) -> Result<(), ListError>;

    /// Get the number of items in the list
    fn length(&self) -> usize;

    /// Check if the list is empty
    fn is_empty(&self) -> bool {
        self.length() == 0
    }

    /// Remove every item from the list
    fn clear(&mut self);
}
