//! A singly linked list of borrowed items.
//!
//! Items are pushed and pulled at the head, like a stack. The list only
//! stores references: every item must outlive the list, and lookups compare
//! items by address rather than by value.
//!
//! Nodes released by `pull`, `remove_item` and `clear` are parked on a free
//! list and reused by later pushes. [`config::ListConfig`] bounds both the
//! free list and the total number of nodes; a push that cannot get a node
//! reports [`error::ListError::Full`] instead of aborting.
//!
//! # Examples
//!
//! ```
//! use mola_list::linked_list::{list::LinkedList, traits::List};
//!
//! let (a, b, c) = (1, 2, 3);
//! let mut list = LinkedList::new();
//!
//! list.push(&a).unwrap();
//! list.push(&b).unwrap();
//! list.push(&c).unwrap();
//!
//! assert_eq!(list.pull(), Some(&3));
//! assert_eq!(list.pull(), Some(&2));
//! assert_eq!(list.length(), 1);
//! assert_eq!(list.peek_by_index(0), Some(&1));
//!
//! assert!(list.contains_item(&a));
//! assert!(!list.contains_item(&1)); // equal value, different item
//!
//! let mut cursor = list.cursor().unwrap();
//! assert_eq!(cursor.next(), Some(&1));
//! assert_eq!(cursor.next(), None);
//! ```

pub mod config;
pub mod error;
pub mod iter;
pub mod list;
pub mod traits;

mod node;
mod pool;

#[cfg(test)]
mod tests;
