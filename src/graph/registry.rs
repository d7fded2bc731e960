//! Per-graph record of which issued iterators still match the graph structure.

use std::collections::HashMap;

/// Identity of an issued traversal iterator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IteratorId(u64);

/// Maps every registered iterator to a "still consistent" flag.
///
/// Invalidation is deliberately coarse: any structural change flips every
/// flag, whether or not the iterator's component was touched.
#[derive(Debug, Default)]
pub struct ValidityRegistry {
    flags: HashMap<IteratorId, bool>,
    next_id: u64,
}

impl ValidityRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new iterator as valid.
    pub fn register(&mut self) -> IteratorId {
        let id = IteratorId(self.next_id);
        self.next_id += 1;
        self.flags.insert(id, true);
        id
    }

    /// Whether `id` is registered and still valid.
    pub fn is_valid(&self, id: IteratorId) -> bool {
        self.flags.get(&id).copied().unwrap_or(false)
    }

    /// Mark every registered iterator invalid. Returns how many were valid.
    pub fn invalidate_all(&mut self) -> usize {
        let mut flipped = 0;
        for flag in self.flags.values_mut() {
            if *flag {
                *flag = false;
                flipped += 1;
            }
        }
        flipped
    }

    /// Forget an iterator (called when it is dropped).
    pub fn release(&mut self, id: IteratorId) {
        self.flags.remove(&id);
    }

    /// Number of registered iterators, valid or not.
    pub fn outstanding(&self) -> usize {
        self.flags.len()
    }

    /// Number of registered iterators that are still valid.
    pub fn live(&self) -> usize {
        self.flags.values().filter(|&&v| v).count()
    }
}
