use alloc::alloc::{Layout, alloc, dealloc};
use core::ptr::NonNull;

use super::traits::Link;

/// A heap node holding one borrowed item.
pub(crate) struct Node<'a, T: ?Sized> {
    item: &'a T,
    next: Option<NonNull<Self>>,
}

impl<'a, T: ?Sized> Node<'a, T> {
    /// Allocates a detached node for `item`.
    ///
    /// Returns `None` if the allocator is out of memory.
    pub(crate) fn allocate(item: &'a T) -> Option<NonNull<Self>> {
        let layout = Layout::new::<Self>();
        unsafe {
            let node = NonNull::new(alloc(layout).cast::<Self>())?;
            node.as_ptr().write(Self { item, next: None });
            Some(node)
        }
    }

    /// Frees a node obtained from [`Node::allocate`].
    ///
    /// # Safety
    ///
    /// The node must be detached from every chain and must not be used afterwards.
    pub(crate) unsafe fn deallocate(node: NonNull<Self>) {
        unsafe { dealloc(node.as_ptr().cast(), Layout::new::<Self>()) }
    }

    #[inline]
    pub(crate) fn item(&self) -> &'a T {
        self.item
    }

    #[inline]
    pub(crate) fn set_item(&mut self, item: &'a T) {
        self.item = item;
    }

    /// Splice this node in right after `parent`.
    #[inline]
    pub(crate) fn append_to<L>(&mut self, parent: &mut L)
    where
        L: Link<Target = Self>,
    {
        self.next = parent.next();
        parent.set_next(Some(NonNull::from(self)));
    }

    /// Splice this node out of the chain.
    ///
    /// `parent` must be the link currently pointing at this node; it is
    /// redirected to this node's successor.
    #[inline]
    pub(crate) fn detach<L>(&mut self, parent: &mut L)
    where
        L: Link<Target = Self>,
    {
        parent.set_next(self.next.take());
    }
}

impl<T: ?Sized> Link for Node<'_, T> {
    type Target = Self;

    #[inline]
    fn next(&self) -> Option<NonNull<Self>> {
        self.next
    }

    #[inline]
    fn set_next(&mut self, next: Option<NonNull<Self>>) {
        self.next = next;
    }
}
