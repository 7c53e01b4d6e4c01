use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Heap entry ordered by `priority`, then by insertion sequence.
struct Entry<T> {
    priority: i32,
    seq: u64,
    item: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest priority first,
        // and among equal priorities the earliest push.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue of items keyed by an integer distance.
///
/// Equal priorities pop in insertion order. Entries are never deduplicated:
/// pushing the same item twice yields two entries.
pub struct Frontier<T> {
    heap: BinaryHeap<Entry<T>>,
    seq: u64,
}

impl<T> Default for Frontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    /// Create an empty frontier with room for `cap` entries.
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(cap),
            seq: 0,
        }
    }

    /// Add `item` with the given priority.
    pub fn push(&mut self, item: T, priority: i32) {
        self.heap.push(Entry {
            priority,
            seq: self.seq,
            item,
        });
        self.seq += 1;
    }

    /// Remove and return the entry with the smallest priority.
    pub fn pop_min(&mut self) -> Option<(T, i32)> {
        self.heap.pop().map(|e| (e.item, e.priority))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Drop every entry and restart the insertion sequence.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.seq = 0;
    }
}
