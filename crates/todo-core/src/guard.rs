//! In-flight Operation Guard
//!
//! One key per running operation. A key that is already held rejects a second
//! acquisition until it is released; nothing is queued.

use std::collections::HashSet;
use std::hash::Hash;

/// Key of a guarded operation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OpKey {
    /// The single create submission
    Create,
    /// A toggle or delete on one item
    Item(String),
}

impl OpKey {
    pub fn item(id: impl Into<String>) -> Self {
        OpKey::Item(id.into())
    }
}

/// Set of keys whose operation is currently in flight
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpGuard<K: Eq + Hash> {
    held: HashSet<K>,
}

impl<K: Eq + Hash> Default for OpGuard<K> {
    fn default() -> Self {
        Self { held: HashSet::new() }
    }
}

impl<K: Eq + Hash> OpGuard<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the key; `false` if it is already held
    pub fn try_acquire(&mut self, key: K) -> bool {
        self.held.insert(key)
    }

    pub fn release(&mut self, key: &K) {
        self.held.remove(key);
    }

    pub fn is_held(&self, key: &K) -> bool {
        self.held.contains(key)
    }

    pub fn len(&self) -> usize {
        self.held.len()
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }
}
