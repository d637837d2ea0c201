//! Duplicate suppression for matched words
//!
//! The word list may repeat entries; with `--unique` only the first
//! occurrence of each matched word is kept, so output order stays stable.

use ahash::RandomState;
use hashbrown::HashSet;

/// Trait for deduplication implementations
pub trait Deduplicator {
    /// Check if item is unique and add it if so
    /// Returns true if the item is unique (not seen before)
    fn insert(&mut self, item: &str) -> bool;

    /// Get the number of unique items
    fn len(&self) -> usize;
}

/// In-memory HashSet-based deduplicator
pub struct MemoryDeduplicator {
    set: HashSet<String, RandomState>,
}

impl MemoryDeduplicator {
    pub fn new() -> Self {
        Self {
            set: HashSet::with_hasher(RandomState::new()),
        }
    }
}

impl Default for MemoryDeduplicator {
    fn default() -> Self {
        Self::new()
    }
}

impl Deduplicator for MemoryDeduplicator {
    fn insert(&mut self, item: &str) -> bool {
        if self.set.contains(item) {
            return false;
        }
        self.set.insert(item.to_string())
    }

    fn len(&self) -> usize {
        self.set.len()
    }
}

/// Pass-through that accepts every word, duplicates included
#[derive(Default)]
pub struct NoOpDeduplicator {
    count: usize,
}

impl NoOpDeduplicator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Deduplicator for NoOpDeduplicator {
    fn insert(&mut self, _item: &str) -> bool {
        self.count += 1;
        true
    }

    fn len(&self) -> usize {
        self.count
    }
}

/// Pick the deduplicator for a run
pub fn create_deduplicator(unique: bool) -> Box<dyn Deduplicator> {
    if unique {
        Box::new(MemoryDeduplicator::new())
    } else {
        Box::new(NoOpDeduplicator::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_dedup() {
        let mut dedup = MemoryDeduplicator::new();

        assert!(dedup.insert("cat"));
        assert!(dedup.insert("act"));
        assert!(!dedup.insert("cat"));
        assert_eq!(dedup.len(), 2);
    }

    #[test]
    fn test_case_sensitive() {
        let mut dedup = MemoryDeduplicator::new();

        assert!(dedup.insert("Cat"));
        assert!(dedup.insert("cat"));
    }

    #[test]
    fn test_noop_keeps_everything() {
        let mut dedup = NoOpDeduplicator::new();

        assert!(dedup.insert("dog"));
        assert!(dedup.insert("dog"));
        assert_eq!(dedup.len(), 2);
    }

    #[test]
    fn test_factory() {
        let mut dedup = create_deduplicator(true);
        dedup.insert("god");
        assert!(!dedup.insert("god"));

        let mut dedup = create_deduplicator(false);
        dedup.insert("god");
        assert!(dedup.insert("god"));
    }
}
