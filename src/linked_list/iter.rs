use core::{iter::FusedIterator, marker::PhantomData, ptr::NonNull};

use super::{list::LinkedList, node::Node, traits::Link};

/// A cursor over a linked list, yielding items head to tail.
///
/// The cursor borrows the list, so the list cannot change underneath it.
pub struct Iter<'l, 'a, T: ?Sized> {
    current: Option<NonNull<Node<'a, T>>>,
    remaining: usize,
    _list: PhantomData<&'l LinkedList<'a, T>>,
}

impl<'l, 'a, T: ?Sized> Iter<'l, 'a, T> {
    pub(crate) fn new(head: Option<NonNull<Node<'a, T>>>, len: usize) -> Self {
        Self {
            current: head,
            remaining: len,
            _list: PhantomData,
        }
    }
}

impl<'a, T: ?Sized> Iterator for Iter<'_, 'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|current| {
            let node = unsafe { current.as_ref() };
            self.current = node.next();
            self.remaining -= 1;
            node.item()
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T: ?Sized> ExactSizeIterator for Iter<'_, '_, T> {}

impl<T: ?Sized> FusedIterator for Iter<'_, '_, T> {}

impl<T: ?Sized> Clone for Iter<'_, '_, T> {
    fn clone(&self) -> Self {
        Self {
            current: self.current,
            remaining: self.remaining,
            _list: PhantomData,
        }
    }
}

unsafe impl<T: ?Sized + Sync> Send for Iter<'_, '_, T> {}
unsafe impl<T: ?Sized + Sync> Sync for Iter<'_, '_, T> {}
