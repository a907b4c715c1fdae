use core::{fmt, ptr, ptr::NonNull};

use log::{debug, trace};

use super::{
    config::ListConfig,
    error::ListError,
    iter::Iter,
    node::Node,
    pool::NodePool,
    traits::{Link, List},
};

/// A singly linked list of borrowed items.
///
/// The list owns its nodes and only borrows the items: whatever is pushed
/// must outlive the list.
pub struct LinkedList<'a, T: ?Sized> {
    head: Option<NonNull<Node<'a, T>>>,
    len: usize,
    pool: NodePool<'a, T>,
}

impl<'a, T: ?Sized> LinkedList<'a, T> {
    /// Creates a new, empty linked list.
    pub const fn new() -> Self {
        Self::with_config(ListConfig::unbounded())
    }

    /// Creates a new, empty linked list with the given settings.
    pub const fn with_config(config: ListConfig) -> Self {
        LinkedList {
            head: None,
            len: 0,
            pool: NodePool::new(config),
        }
    }

    /// The settings the list was created with.
    pub fn config(&self) -> &ListConfig {
        self.pool.config()
    }

    /// Get a cursor at the head of the list, or `None` if the list is empty.
    pub fn cursor(&self) -> Option<Iter<'_, 'a, T>> {
        self.head.map(|_| self.iter())
    }

    /// Get an iterator over the items, head to tail.
    pub fn iter(&self) -> Iter<'_, 'a, T> {
        Iter::new(self.head, self.len)
    }

    /// Number of released nodes parked for reuse.
    pub fn free_nodes(&self) -> usize {
        self.pool.free_count()
    }

    /// Number of nodes currently allocated, live and parked.
    pub fn allocated_nodes(&self) -> usize {
        self.pool.allocated()
    }

    /// Free every parked node, returning how many were freed.
    pub fn shrink(&mut self) -> usize {
        let freed = self.pool.shrink();
        debug!("freed {} parked nodes", freed);
        freed
    }
}

impl<'a, T: ?Sized + 'a> List<'a> for LinkedList<'a, T> {
    type Item = T;

    fn push(&mut self, item: &'a T) -> Result<(), ListError> {
        let node = self.pool.acquire(item)?;
        unsafe { (*node.as_ptr()).append_to(&mut HeadLink(&mut self.head)) };
        self.len += 1;
        trace!("pushed item, length is now {}", self.len);
        Ok(())
    }

    fn pull(&mut self) -> Option<&'a T> {
        let head = self.head?;
        let item = unsafe {
            let head_ref = &mut *head.as_ptr();
            head_ref.detach(&mut HeadLink(&mut self.head));
            head_ref.item()
        };
        self.len -= 1;
        self.pool.release(head);
        trace!("pulled item, length is now {}", self.len);
        Some(item)
    }

    fn peek_by_index(&self, index: usize) -> Option<&'a T> {
        self.iter().nth(index)
    }

    fn contains_item(&self, item: &T) -> bool {
        self.iter()
            .any(|current| ptr::addr_eq(current as *const T, item as *const T))
    }

    fn remove_item(&mut self, item: &T) -> Result<(), ListError> {
        let mut prev: Option<NonNull<Node<'a, T>>> = None;
        let mut current = self.head;
        while let Some(node) = current {
            unsafe {
                let node_ref = &mut *node.as_ptr();
                if ptr::addr_eq(node_ref.item() as *const T, item as *const T) {
                    match prev {
                        Some(prev) => node_ref.detach(&mut *prev.as_ptr()),
                        None => node_ref.detach(&mut HeadLink(&mut self.head)),
                    }
                    self.len -= 1;
                    self.pool.release(node);
                    trace!("removed item, length is now {}", self.len);
                    return Ok(());
                }
                current = node_ref.next();
            }
            prev = Some(node);
        }
        Err(ListError::NotFound)
    }

    fn length(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        let mut current = self.head.take();
        while let Some(node) = current {
            current = unsafe { node.as_ref().next() };
            self.pool.release(node);
        }
        debug!("cleared {} items", self.len);
        self.len = 0;
    }
}

/// The head pointer of a list viewed as a [`Link`], so the first node is
/// spliced exactly like any other.
struct HeadLink<'h, 'a, T: ?Sized>(&'h mut Option<NonNull<Node<'a, T>>>);

impl<'a, T: ?Sized> Link for HeadLink<'_, 'a, T> {
    type Target = Node<'a, T>;

    fn next(&self) -> Option<NonNull<Node<'a, T>>> {
        *self.0
    }

    fn set_next(&mut self, next: Option<NonNull<Node<'a, T>>>) {
        *self.0 = next;
    }
}

impl<T: ?Sized> Default for LinkedList<'_, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Drop for LinkedList<'_, T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for LinkedList<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'l, 'a, T: ?Sized> IntoIterator for &'l LinkedList<'a, T> {
    type Item = &'a T;
    type IntoIter = Iter<'l, 'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// The list holds shared references and owns its nodes outright.
unsafe impl<T: ?Sized + Sync> Send for LinkedList<'_, T> {}
unsafe impl<T: ?Sized + Sync> Sync for LinkedList<'_, T> {}
