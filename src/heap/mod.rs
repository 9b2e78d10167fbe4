//! Bounded binary min-heap
//!
//! Array-backed, 0-indexed complete binary tree. The parent of slot `i` is
//! `(i - 1) / 2`, its children are `2i + 1` and `2i + 2`. Capacity is fixed
//! at construction: a full heap rejects inserts instead of growing.

use std::fmt;
use thiserror::Error;

/// Errors raised by the bounded priority queue
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeapError {
    #[error("Heap is full (capacity {0})")]
    HeapFull(usize),

    #[error("Heap is empty")]
    HeapEmpty,
}

/// Result type for heap operations
pub type HeapResult<T> = Result<T, HeapError>;

/// A queued `(priority, payload)` pair
#[derive(Debug, Clone, PartialEq)]
pub struct HeapEntry<T> {
    pub priority: f64,
    pub payload: T,
}

impl<T> HeapEntry<T> {
    pub fn new(priority: f64, payload: T) -> Self {
        Self { priority, payload }
    }
}

/// Fixed-capacity min-heap keyed on `f64` priorities.
///
/// Entries with equal priority come out in no particular order.
#[derive(Debug, Clone)]
pub struct PriorityHeap<T> {
    slots: Vec<HeapEntry<T>>,
    capacity: usize,
}

impl<T> PriorityHeap<T> {
    /// Create an empty heap that holds at most `capacity` entries
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Build a heap from existing entries by repeated insertion.
    pub fn from_entries<I>(capacity: usize, entries: I) -> HeapResult<Self>
    where
        I: IntoIterator<Item = (f64, T)>,
    {
        let mut heap = Self::new(capacity);
        for (priority, payload) in entries {
            heap.insert(priority, payload)?;
        }
        Ok(heap)
    }

    /// Queue a payload. Fails with `HeapFull` once `size() == capacity()`.
    pub fn insert(&mut self, priority: f64, payload: T) -> HeapResult<()> {
        if self.slots.len() == self.capacity {
            return Err(HeapError::HeapFull(self.capacity));
        }
        self.slots.push(HeapEntry::new(priority, payload));
        self.sift_up(self.slots.len() - 1);
        Ok(())
    }

    /// Remove and return the entry with the smallest priority
    pub fn extract_min(&mut self) -> HeapResult<HeapEntry<T>> {
        if self.slots.is_empty() {
            return Err(HeapError::HeapEmpty);
        }
        // swap_remove moves the last live slot into the root
        let root = self.slots.swap_remove(0);
        if !self.slots.is_empty() {
            self.sift_down(0);
        }
        Ok(root)
    }

    /// The entry `extract_min` would return, without removing it
    pub fn peek(&self) -> HeapResult<&HeapEntry<T>> {
        self.slots.first().ok_or(HeapError::HeapEmpty)
    }

    pub fn size(&self) -> usize {
        self.slots.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.slots.len() == self.capacity
    }

    /// Live entries in slot (tree) order
    pub fn as_slice(&self) -> &[HeapEntry<T>] {
        &self.slots
    }

    /// Drain the heap into a vector ordered by non-decreasing priority.
    pub fn into_sorted_vec(mut self) -> Vec<HeapEntry<T>> {
        let mut sorted = Vec::with_capacity(self.slots.len());
        while let Ok(entry) = self.extract_min() {
            sorted.push(entry);
        }
        sorted
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.slots[index].priority < self.slots[parent].priority {
                self.slots.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let count = self.slots.len();
        loop {
            let left = index * 2 + 1;
            if left >= count {
                break;
            }
            let right = left + 1;
            let mut smaller = left;
            if right < count && self.slots[right].priority < self.slots[left].priority {
                smaller = right;
            }
            if self.slots[smaller].priority < self.slots[index].priority {
                self.slots.swap(smaller, index);
                index = smaller;
            } else {
                break;
            }
        }
    }
}

impl<T: fmt::Display> fmt::Display for PriorityHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.slots.iter().enumerate() {
            writeln!(f, "[{}] Priority: {} | Value: {}", i, entry.priority, entry.payload)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn sample_heap() -> PriorityHeap<&'static str> {
        let mut heap = PriorityHeap::new(10);
        heap.insert(50.0, "A").unwrap();
        heap.insert(10.0, "B").unwrap();
        heap.insert(1000.0, "C").unwrap();
        heap
    }

    fn assert_heap_property<T>(heap: &PriorityHeap<T>) {
        let slots = heap.as_slice();
        for i in 1..slots.len() {
            let parent = (i - 1) / 2;
            assert!(
                slots[i].priority >= slots[parent].priority,
                "slot {} ({}) is smaller than its parent {} ({})",
                i,
                slots[i].priority,
                parent,
                slots[parent].priority
            );
        }
    }

    #[test]
    fn test_insert_and_peek() {
        let mut heap = PriorityHeap::new(10);
        heap.insert(1.0, "A").unwrap();
        assert_eq!(heap.size(), 1);
        let top = heap.peek().unwrap();
        assert_eq!(top.priority, 1.0);
        assert_eq!(top.payload, "A");
    }

    #[test]
    fn test_extract_in_priority_order() {
        let mut heap = sample_heap();

        let removed = heap.extract_min().unwrap();
        assert_eq!((removed.priority, removed.payload), (10.0, "B"));
        assert_eq!(heap.size(), 2);

        let removed = heap.extract_min().unwrap();
        assert_eq!((removed.priority, removed.payload), (50.0, "A"));

        let removed = heap.extract_min().unwrap();
        assert_eq!((removed.priority, removed.payload), (1000.0, "C"));
        assert!(heap.is_empty());
    }

    #[test]
    fn test_full_heap_rejects_insert() {
        let mut heap = PriorityHeap::new(2);
        heap.insert(1.0, ()).unwrap();
        heap.insert(2.0, ()).unwrap();
        assert!(heap.is_full());
        assert_eq!(heap.insert(0.5, ()), Err(HeapError::HeapFull(2)));
        assert_eq!(heap.size(), 2);
    }

    #[test]
    fn test_empty_heap_errors() {
        let mut heap: PriorityHeap<u32> = PriorityHeap::new(4);
        assert_eq!(heap.extract_min(), Err(HeapError::HeapEmpty));
        assert_eq!(heap.peek().unwrap_err(), HeapError::HeapEmpty);
    }

    #[test]
    fn test_zero_capacity_heap() {
        let mut heap = PriorityHeap::new(0);
        assert!(heap.is_full());
        assert!(matches!(heap.insert(1.0, 'x'), Err(HeapError::HeapFull(0))));
    }

    #[test]
    fn test_display_lists_slots() {
        let heap = sample_heap();
        assert_eq!(
            heap.to_string(),
            "[0] Priority: 10 | Value: B\n[1] Priority: 50 | Value: A\n[2] Priority: 1000 | Value: C\n"
        );
    }

    #[test]
    fn test_heap_property_under_random_operations() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut heap = PriorityHeap::new(256);

        for round in 0..2000 {
            if heap.is_full() || (!heap.is_empty() && rng.gen_bool(0.4)) {
                let before = heap.peek().unwrap().priority;
                let min = heap.extract_min().unwrap();
                assert_eq!(min.priority, before);
            } else {
                heap.insert(rng.gen_range(0.0..500.0), round).unwrap();
            }
            assert_heap_property(&heap);
        }
    }

    #[test]
    fn test_sorted_drain_is_non_decreasing() {
        let mut rng = StdRng::seed_from_u64(42);
        let priorities: Vec<f64> = (0..100).map(|_| rng.gen_range(0..20) as f64).collect();
        let heap =
            PriorityHeap::from_entries(priorities.len(), priorities.iter().map(|&p| (p, p)))
                .unwrap();

        let drained: Vec<f64> = heap.into_sorted_vec().into_iter().map(|e| e.priority).collect();
        let mut expected = priorities.clone();
        expected.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(drained, expected);
    }

    #[test]
    fn test_from_entries_respects_capacity() {
        let result = PriorityHeap::from_entries(2, vec![(3.0, 'a'), (2.0, 'b'), (1.0, 'c')]);
        assert!(matches!(result, Err(HeapError::HeapFull(2))));
    }
}
