/// Default number of released nodes kept for reuse.
pub const DEFAULT_FREE_LIST_LIMIT: usize = 32;

/// Construction-time settings of a [`LinkedList`](super::list::LinkedList).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListConfig {
    /// Upper bound on nodes the list keeps allocated, live and parked together.
    /// `None` means only the allocator limits the list.
    pub node_limit: Option<usize>,
    /// Upper bound on released nodes parked on the free list.
    pub free_list_limit: usize,
}

impl ListConfig {
    /// No node limit and the default free list limit.
    pub const fn unbounded() -> Self {
        Self {
            node_limit: None,
            free_list_limit: DEFAULT_FREE_LIST_LIMIT,
        }
    }

    /// Caps the number of allocated nodes, making `push` report
    /// [`ListError::Full`](super::error::ListError::Full) once `limit` items are live.
    pub const fn with_node_limit(mut self, limit: usize) -> Self {
        self.node_limit = Some(limit);
        self
    }

    /// Sets how many released nodes are kept for reuse. Zero disables the free list.
    pub const fn with_free_list_limit(mut self, limit: usize) -> Self {
        self.free_list_limit = limit;
        self
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self::unbounded()
    }
}
