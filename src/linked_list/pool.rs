use core::ptr::NonNull;

use log::debug;

use super::{config::ListConfig, error::ListError, node::Node, traits::Link};

/// Hands out nodes to a list and takes them back.
///
/// Released nodes are parked on a free chain, up to the configured limit,
/// and reused before anything new is allocated.
pub(crate) struct NodePool<'a, T: ?Sized> {
    free: Option<NonNull<Node<'a, T>>>,
    free_count: usize,
    allocated: usize,
    config: ListConfig,
}

impl<'a, T: ?Sized> NodePool<'a, T> {
    pub(crate) const fn new(config: ListConfig) -> Self {
        Self {
            free: None,
            free_count: 0,
            allocated: 0,
            config,
        }
    }

    /// Get a detached node holding `item`.
    pub(crate) fn acquire(&mut self, item: &'a T) -> Result<NonNull<Node<'a, T>>, ListError> {
        if let Some(node) = self.free {
            unsafe {
                let node_ref = &mut *node.as_ptr();
                node_ref.detach(self);
                node_ref.set_item(item);
            }
            self.free_count -= 1;
            return Ok(node);
        }

        if let Some(limit) = self.config.node_limit {
            if self.allocated >= limit {
                debug!("node limit of {} reached", limit);
                return Err(ListError::Full);
            }
        }

        let Some(node) = Node::allocate(item) else {
            debug!("allocation failed with {} nodes allocated", self.allocated);
            return Err(ListError::Full);
        };
        self.allocated += 1;
        Ok(node)
    }

    /// Take back a node that is no longer linked into the list.
    pub(crate) fn release(&mut self, node: NonNull<Node<'a, T>>) {
        if self.free_count < self.config.free_list_limit {
            unsafe { (*node.as_ptr()).append_to(self) };
            self.free_count += 1;
        } else {
            unsafe { Node::deallocate(node) };
            self.allocated -= 1;
        }
    }

    /// Free every parked node, returning how many were freed.
    pub(crate) fn shrink(&mut self) -> usize {
        let freed = self.free_count;
        let mut current = self.free.take();
        while let Some(node) = current {
            unsafe {
                current = node.as_ref().next();
                Node::deallocate(node);
            }
        }
        self.free_count = 0;
        self.allocated -= freed;
        freed
    }

    pub(crate) fn free_count(&self) -> usize {
        self.free_count
    }

    pub(crate) fn allocated(&self) -> usize {
        self.allocated
    }

    pub(crate) fn config(&self) -> &ListConfig {
        &self.config
    }
}

impl<'a, T: ?Sized> Link for NodePool<'a, T> {
    type Target = Node<'a, T>;

    fn next(&self) -> Option<NonNull<Node<'a, T>>> {
        self.free
    }

    fn set_next(&mut self, next: Option<NonNull<Node<'a, T>>>) {
        self.free = next;
    }
}

impl<T: ?Sized> Drop for NodePool<'_, T> {
    fn drop(&mut self) {
        self.shrink();
    }
}
