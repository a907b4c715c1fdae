extern crate std;

use std::vec::Vec;

use hashbrown::HashMap;
use rand::{Rng, SeedableRng, rngs::StdRng};
use rpds::List as Stack;

use crate::linked_list::{
    config::ListConfig,
    error::ListError,
    list::LinkedList,
    traits::List,
};

use super::init_logger;

const SLOTS: usize = 12;
const STEPS: usize = 2_000;

/// Tracks what the list should hold: a persistent stack for the order and
/// a count of live occurrences per slot for membership.
struct Model {
    stack: Stack<usize>,
    live: HashMap<usize, usize>,
}

impl Model {
    fn new() -> Self {
        Self {
            stack: Stack::new(),
            live: HashMap::new(),
        }
    }

    fn push(&mut self, slot: usize) {
        self.stack.push_front_mut(slot);
        *self.live.entry(slot).or_default() += 1;
    }

    fn pull(&mut self) -> Option<usize> {
        let slot = self.stack.first().copied()?;
        self.stack.drop_first_mut();
        self.forget(slot);
        Some(slot)
    }

    fn contains(&self, slot: usize) -> bool {
        self.live.get(&slot).is_some_and(|&count| count > 0)
    }

    fn remove(&mut self, slot: usize) -> bool {
        if !self.contains(slot) {
            return false;
        }
        let mut kept: Vec<usize> = Vec::with_capacity(self.stack.len());
        let mut removed = false;
        for &current in self.stack.iter() {
            if !removed && current == slot {
                removed = true;
                continue;
            }
            kept.push(current);
        }
        self.stack = kept
            .iter()
            .rev()
            .fold(Stack::new(), |stack, &current| stack.push_front(current));
        self.forget(slot);
        true
    }

    fn clear(&mut self) {
        self.stack = Stack::new();
        self.live.clear();
    }

    fn forget(&mut self, slot: usize) {
        if let Some(count) = self.live.get_mut(&slot) {
            *count -= 1;
            if *count == 0 {
                self.live.remove(&slot);
            }
        }
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}

fn run(seed: u64, config: ListConfig) {
    let slots: Vec<usize> = (0..SLOTS).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut list = LinkedList::with_config(config);
    let mut model = Model::new();

    for _ in 0..STEPS {
        let slot = rng.random_range(0..SLOTS);
        match rng.random_range(0..100) {
            0..40 => {
                let pushed = list.push(&slots[slot]);
                let full = config.node_limit.is_some_and(|limit| model.len() >= limit);
                if full {
                    assert_eq!(pushed, Err(ListError::Full));
                } else {
                    assert_eq!(pushed, Ok(()));
                    model.push(slot);
                }
            }
            40..60 => {
                assert_eq!(list.pull().copied(), model.pull());
            }
            60..70 => {
                let index = rng.random_range(0..=model.len());
                assert_eq!(
                    list.peek_by_index(index).copied(),
                    model.stack.iter().nth(index).copied()
                );
            }
            70..80 => {
                assert_eq!(list.contains_item(&slots[slot]), model.contains(slot));
            }
            80..98 => {
                let expected = if model.remove(slot) {
                    Ok(())
                } else {
                    Err(ListError::NotFound)
                };
                assert_eq!(list.remove_item(&slots[slot]), expected);
            }
            _ => {
                list.clear();
                model.clear();
                assert_eq!(list.length(), 0);
            }
        }

        assert_eq!(list.length(), model.len());
        assert!(list.free_nodes() <= config.free_list_limit);
        assert!(list.iter().copied().eq(model.stack.iter().copied()));
    }
}

#[test]
fn test_matches_model_unbounded() {
    init_logger();
    for seed in 0..8 {
        run(seed, ListConfig::unbounded());
    }
}

#[test]
fn test_matches_model_with_node_limit() {
    init_logger();
    for seed in 0..8 {
        run(seed, ListConfig::unbounded().with_node_limit(6).with_free_list_limit(2));
    }
}

#[test]
fn test_matches_model_without_free_list() {
    for seed in 0..4 {
        run(seed, ListConfig::unbounded().with_free_list_limit(0));
    }
}
