use core::fmt;

/// Errors returned by list operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListError {
    /// The list holds no items.
    Empty,
    /// No node could be obtained for a new item.
    Full,
    /// The item is not in the list.
    NotFound,
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListError::Empty => write!(f, "list is empty"),
            ListError::Full => write!(f, "list is full, no node could be allocated"),
            ListError::NotFound => write!(f, "item not found in list"),
        }
    }
}

impl core::error::Error for ListError {}
