#![no_std]

extern crate alloc;

pub mod linked_list;

pub use linked_list::{
    config::ListConfig,
    error::ListError,
    iter::Iter,
    list::LinkedList,
    traits::List,
};
