use crate::errors::QueueError;

use std::hash::Hash;
use rustc_hash::FxHashMap;


/// Entry stored in the heap array
/// order is the insertion sequence, used to break priority ties first-in first-out
#[derive(Debug, Clone)]
struct Slot<T, P> {
    item: T,
    priority: P,
    order: u64,
}


/// Binary min-heap with a position index for priority updates
/// https://en.wikipedia.org/wiki/Binary_heap
///
/// Every item is tracked at most once: `positions` maps an item to its slot in
/// the heap array, so `decrease_priority` finds it without a linear scan.
/// insert, extract_min and decrease_priority are all O(log n).
#[derive(Debug, Clone)]
pub struct IndexedMinHeap<T, P> {
    slots: Vec<Slot<T, P>>,
    positions: FxHashMap<T, usize>,
    next_order: u64,
}

impl<T, P> Default for IndexedMinHeap<T, P> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            positions: FxHashMap::default(),
            next_order: 0,
        }
    }
}

impl<T, P> IndexedMinHeap<T, P>
where
    T: Eq + Hash + Clone,
    P: PartialOrd + Copy,
{

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            positions: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            next_order: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn contains(&self, item: &T) -> bool {
        self.positions.contains_key(item)
    }

    /// Current priority of a queued item
    pub fn priority(&self, item: &T) -> Option<P> {
        self.positions.get(item).map(|&pos| self.slots[pos].priority)
    }

    /// Smallest item without removing it
    pub fn peek_min(&self) -> Option<(&T, P)> {
        self.slots.first().map(|slot| (&slot.item, slot.priority))
    }

    /// Add an item with the given priority
    /// If the item is already queued its priority is replaced instead, so the
    /// heap never holds the same item twice
    pub fn insert(&mut self, item: T, priority: P) {
        if let Some(&pos) = self.positions.get(&item) {
            let previous = self.slots[pos].priority;
            self.slots[pos].priority = priority;
            if priority < previous {
                self.sift_up(pos);
            } else {
                self.sift_down(pos);
            }
            return;
        }

        let pos = self.slots.len();
        self.positions.insert(item.clone(), pos);
        self.slots.push(Slot {
            item,
            priority,
            order: self.next_order,
        });
        self.next_order += 1;
        self.sift_up(pos);
    }

    /// Remove and return the item with the smallest priority
    pub fn extract_min(&mut self) -> Result<(T, P), QueueError> {
        let last = match self.slots.len() {
            0 => return Err(QueueError::Empty),
            n => n - 1,
        };

        self.swap(0, last);
        let slot = self.slots.pop().ok_or(QueueError::Empty)?;
        self.positions.remove(&slot.item);

        if !self.slots.is_empty() {
            self.sift_down(0);
        }

        Ok((slot.item, slot.priority))
    }

    /// Lower the priority of a queued item
    /// A new priority that is not lower than the current one is ignored
    pub fn decrease_priority(&mut self, item: &T, priority: P) -> Result<(), QueueError> {
        let pos = *self.positions.get(item).ok_or(QueueError::MissingItem)?;

        if priority < self.slots[pos].priority {
            self.slots[pos].priority = priority;
            self.sift_up(pos);
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.positions.clear();
        self.next_order = 0;
    }

    /// Slot a sorts before slot b
    fn less(&self, a: usize, b: usize) -> bool {
        let (x, y) = (&self.slots[a], &self.slots[b]);
        if x.priority < y.priority {
            return true;
        }
        if y.priority < x.priority {
            return false;
        }
        x.order < y.order
    }

    fn swap(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        self.slots.swap(a, b);
        if let Some(pos) = self.positions.get_mut(&self.slots[a].item) {
            *pos = a;
        }
        if let Some(pos) = self.positions.get_mut(&self.slots[b].item) {
            *pos = b;
        }
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.less(pos, parent) {
                break;
            }
            self.swap(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.slots.len();
        loop {
            let left = 2 * pos + 1;
            let right = left + 1;
            let mut smallest = pos;

            if left < len && self.less(left, smallest) {
                smallest = left;
            }
            if right < len && self.less(right, smallest) {
                smallest = right;
            }
            if smallest == pos {
                break;
            }
            self.swap(pos, smallest);
            pos = smallest;
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    // Drain the heap into a vector of (item, priority)
    fn drain<T: Eq + Hash + Clone, P: PartialOrd + Copy>(heap: &mut IndexedMinHeap<T, P>) -> Vec<(T, P)> {
        let mut out = Vec::new();
        while !heap.is_empty() {
            out.push(heap.extract_min().unwrap());
        }
        out
    }

    #[test]
    fn test_extract_in_priority_order() {
        let mut heap = IndexedMinHeap::new();
        for (item, priority) in [("e", 5.0), ("a", 1.0), ("d", 4.0), ("b", 2.0), ("c", 3.0)] {
            heap.insert(item, priority);
        }
        assert_eq!(heap.len(), 5);

        let items: Vec<_> = drain(&mut heap).into_iter().map(|(item, _)| item).collect();
        assert_eq!(items, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_extract_from_empty_heap() {
        let mut heap: IndexedMinHeap<u32, u32> = IndexedMinHeap::new();
        assert_eq!(heap.extract_min(), Err(QueueError::Empty));

        heap.insert(7, 1);
        heap.extract_min().unwrap();
        assert_eq!(heap.extract_min(), Err(QueueError::Empty));
    }

    #[test]
    fn test_decrease_priority_moves_item_forward() {
        let mut heap = IndexedMinHeap::new();
        heap.insert(1, 10);
        heap.insert(2, 20);
        heap.insert(3, 30);

        heap.decrease_priority(&3, 5).unwrap();
        assert_eq!(heap.peek_min(), Some((&3, 5)));
        assert_eq!(heap.priority(&3), Some(5));

        assert_eq!(drain(&mut heap), vec![(3, 5), (1, 10), (2, 20)]);
    }

    #[test]
    fn test_decrease_priority_ignores_higher_value() {
        let mut heap = IndexedMinHeap::new();
        heap.insert('a', 3);
        heap.insert('b', 4);

        heap.decrease_priority(&'a', 9).unwrap();
        assert_eq!(heap.priority(&'a'), Some(3));
        assert_eq!(heap.peek_min(), Some((&'a', 3)));
    }

    #[test]
    fn test_decrease_priority_of_missing_item() {
        let mut heap: IndexedMinHeap<u32, f64> = IndexedMinHeap::new();
        heap.insert(1, 1.0);
        assert_eq!(heap.decrease_priority(&2, 0.5), Err(QueueError::MissingItem));
    }

    #[test]
    fn test_insert_existing_item_updates_in_place() {
        let mut heap = IndexedMinHeap::new();
        heap.insert("x", 1);
        heap.insert("y", 2);
        heap.insert("x", 3);

        assert_eq!(heap.len(), 2);
        assert!(heap.contains(&"x"));
        assert_eq!(drain(&mut heap), vec![("y", 2), ("x", 3)]);
    }

    #[test]
    fn test_equal_priorities_leave_in_insertion_order() {
        let mut heap = IndexedMinHeap::new();
        for item in [4, 2, 9, 1] {
            heap.insert(item, 0);
        }
        let items: Vec<_> = drain(&mut heap).into_iter().map(|(item, _)| item).collect();
        assert_eq!(items, vec![4, 2, 9, 1]);
    }

    #[test]
    fn test_many_updates_keep_heap_consistent() {
        let mut rng = StdRng::seed_from_u64(17);
        let mut heap = IndexedMinHeap::with_capacity(64);
        let mut expected = std::collections::HashMap::new();
        for _ in 0..500 {
            let item = rng.random_range(0..40u64);
            let priority = rng.random_range(0..1000u64);
            if rng.random_bool(0.35) && heap.contains(&item) {
                heap.decrease_priority(&item, priority).unwrap();
                let current = expected.get_mut(&item).unwrap();
                if priority < *current {
                    *current = priority;
                }
            } else {
                heap.insert(item, priority);
                expected.insert(item, priority);
            }
        }

        let drained = drain(&mut heap);
        assert_eq!(drained.len(), expected.len());
        for window in drained.windows(2) {
            assert!(window[0].1 <= window[1].1);
        }
        for (item, priority) in drained {
            assert_eq!(expected[&item], priority);
        }
    }

    #[test]
    fn test_clear() {
        let mut heap = IndexedMinHeap::new();
        heap.insert(1u8, 1u8);
        heap.clear();
        assert!(heap.is_empty());
        assert!(!heap.contains(&1));
    }
}
