//! Variable-arity min priority queue.
//!
//! This module provides an array-backed d-ary min-heap that is generic over
//! any `Ord` payload. The tree builder uses it to drain the lightest nodes,
//! but nothing here knows about trees.
//!
//! Ties are resolved purely by heap position: sift-down prefers the
//! lowest-index child among equal minima, and neither sift direction swaps
//! equal elements. Given the same sequence of operations the extraction
//! order of equal elements is therefore always the same.

use crate::{KevinError, Result};

/// A d-ary min-heap.
#[derive(Debug, Clone)]
pub struct MinPriorityQueue<T> {
    /// Heap-ordered backing storage
    items: Vec<T>,
    /// Branching factor of the heap shape
    arity: usize,
}

impl<T: Ord> MinPriorityQueue<T> {
    /// Arity used by [`Default`].
    pub const DEFAULT_ARITY: usize = 2;

    /// Create an empty queue with the given arity.
    ///
    /// Fails with [`KevinError::InvalidConfig`] if `arity < 2`.
    pub fn new(arity: usize) -> Result<Self> {
        Self::with_items(std::iter::empty(), arity)
    }

    /// Create a queue from an initial sequence of items.
    ///
    /// The items are collected into fresh storage and heapified.
    pub fn with_items(items: impl IntoIterator<Item = T>, arity: usize) -> Result<Self> {
        if arity < 2 {
            return Err(KevinError::InvalidConfig(format!(
                "Heap arity must be at least 2, got {}",
                arity
            )));
        }

        let mut queue = Self {
            items: items.into_iter().collect(),
            arity,
        };
        if !queue.items.is_empty() {
            queue.heapify();
        }
        Ok(queue)
    }

    /// Restore heap order over arbitrary contents.
    fn heapify(&mut self) {
        if self.items.len() < 2 {
            return;
        }
        let last_parent = (self.items.len() - 2) / self.arity;
        for idx in (0..=last_parent).rev() {
            self.sift_down(idx);
        }
    }

    /// Insert an item.
    pub fn insert(&mut self, item: T) {
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
    }

    /// Peek at the minimum item without removing it.
    pub fn peek_min(&self) -> Result<&T> {
        self.items.first().ok_or(KevinError::EmptyContainer)
    }

    /// Remove and return the minimum item.
    pub fn extract_min(&mut self) -> Result<T> {
        if self.items.is_empty() {
            return Err(KevinError::EmptyContainer);
        }
        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let min = self.items.pop().ok_or(KevinError::EmptyContainer)?;
        self.sift_down(0);
        Ok(min)
    }

    /// Number of items in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the queue is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check the heap invariant over every non-root position.
    pub fn is_valid_heap(&self) -> bool {
        (1..self.items.len()).all(|idx| self.items[idx] >= self.items[self.parent(idx)])
    }

    #[inline]
    fn parent(&self, idx: usize) -> usize {
        (idx - 1) / self.arity
    }

    /// Index of the smallest child of `idx`, if it has any.
    fn min_child(&self, idx: usize) -> Option<usize> {
        let first = idx.checked_mul(self.arity)?.checked_add(1)?;
        if first >= self.items.len() {
            return None;
        }
        let end = (first + self.arity).min(self.items.len());

        let mut best = first;
        for child in first + 1..end {
            // Strict comparison keeps the lowest index among equal minima
            if self.items[child] < self.items[best] {
                best = child;
            }
        }
        Some(best)
    }

    fn sift_down(&mut self, mut idx: usize) {
        while let Some(child) = self.min_child(idx) {
            if self.items[idx] <= self.items[child] {
                break;
            }
            self.items.swap(idx, child);
            idx = child;
        }
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = self.parent(idx);
            if self.items[idx] >= self.items[parent] {
                break;
            }
            self.items.swap(idx, parent);
            idx = parent;
        }
    }
}

impl<T: Ord> Default for MinPriorityQueue<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            arity: Self::DEFAULT_ARITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_insert_extract_order() {
        let mut queue = MinPriorityQueue::new(2).unwrap();
        for value in [5, 3, 8, 1, 9, 2] {
            queue.insert(value);
        }
        assert_eq!(queue.len(), 6);

        let mut drained = Vec::new();
        while let Ok(value) = queue.extract_min() {
            drained.push(value);
        }
        assert_eq!(drained, vec![1, 2, 3, 5, 8, 9]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_with_items_heapifies() {
        let queue = MinPriorityQueue::with_items(vec![7, 6, 5, 4, 3, 2, 1], 3).unwrap();
        assert!(queue.is_valid_heap());
        assert_eq!(queue.peek_min().unwrap(), &1);
        assert_eq!(queue.len(), 7);
    }

    #[test]
    fn test_empty_queue_errors() {
        let mut queue: MinPriorityQueue<u32> = MinPriorityQueue::new(4).unwrap();
        assert!(matches!(queue.peek_min(), Err(KevinError::EmptyContainer)));
        assert!(matches!(queue.extract_min(), Err(KevinError::EmptyContainer)));

        let mut queue: MinPriorityQueue<u32> = MinPriorityQueue::default();
        assert!(matches!(queue.extract_min(), Err(KevinError::EmptyContainer)));
    }

    #[test]
    fn test_invalid_arity() {
        assert!(matches!(
            MinPriorityQueue::<u32>::new(1),
            Err(KevinError::InvalidConfig(_))
        ));
        assert!(matches!(
            MinPriorityQueue::with_items(vec![1u32], 0),
            Err(KevinError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_instances_do_not_share_storage() {
        let mut first: MinPriorityQueue<u32> = MinPriorityQueue::default();
        first.insert(42);

        let second: MinPriorityQueue<u32> = MinPriorityQueue::default();
        assert!(second.is_empty());
        assert_eq!(first.len(), 1);
    }

    #[test]
    fn test_peek_does_not_remove() {
        let mut queue = MinPriorityQueue::with_items([4, 2, 6], 2).unwrap();
        assert_eq!(queue.peek_min().unwrap(), &2);
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.extract_min().unwrap(), 2);
        assert_eq!(queue.len(), 2);
    }

    /// Equal keys tagged with their insertion order; ordering ignores the tag.
    #[derive(Debug, Clone, Copy)]
    struct Tagged(u32, usize);

    impl PartialEq for Tagged {
        fn eq(&self, other: &Self) -> bool {
            self.0 == other.0
        }
    }
    impl Eq for Tagged {}
    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }
    impl Ord for Tagged {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            self.0.cmp(&other.0)
        }
    }

    #[test]
    fn test_tie_order_is_positional() {
        // [t0, t1, t2] is already a heap. Extracting swaps t2 to the root;
        // t1 is never strictly smaller so t2 stays and comes out next.
        let mut queue =
            MinPriorityQueue::with_items((0..3).map(|tag| Tagged(1, tag)), 2).unwrap();
        let order: Vec<usize> = std::iter::from_fn(|| queue.extract_min().ok())
            .map(|t| t.1)
            .collect();
        assert_eq!(order, vec![0, 2, 1]);
    }

    #[test]
    fn test_tie_order_is_repeatable() {
        let run = || {
            let mut queue = MinPriorityQueue::new(3).unwrap();
            for (tag, key) in [2, 1, 1, 2, 1, 3, 1].into_iter().enumerate() {
                queue.insert(Tagged(key, tag));
            }
            std::iter::from_fn(|| queue.extract_min().ok())
                .map(|t| t.1)
                .collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
    }

    #[derive(Debug, Clone)]
    enum Op {
        Insert(i32),
        Extract,
    }

    fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
        let op = prop_oneof![
            3 => (-1000i32..1000).prop_map(Op::Insert),
            2 => Just(Op::Extract),
        ];
        prop::collection::vec(op, 0..300)
    }

    proptest! {
        #[test]
        fn prop_matches_sorted_model(
            arity in 2usize..9,
            initial in prop::collection::vec(-1000i32..1000, 0..64),
            ops in ops_strategy(),
        ) {
            let mut queue = MinPriorityQueue::with_items(initial.clone(), arity).unwrap();
            let mut model = initial;
            prop_assert!(queue.is_valid_heap());

            for op in ops {
                match op {
                    Op::Insert(value) => {
                        let before = queue.len();
                        queue.insert(value);
                        model.push(value);
                        prop_assert_eq!(queue.len(), before + 1);
                    }
                    Op::Extract => {
                        let expected = model.iter().min().copied();
                        match expected {
                            Some(min) => {
                                let before = queue.len();
                                prop_assert_eq!(queue.extract_min().unwrap(), min);
                                let pos = model.iter().position(|&v| v == min).unwrap();
                                model.swap_remove(pos);
                                prop_assert_eq!(queue.len(), before - 1);
                            }
                            None => prop_assert!(queue.extract_min().is_err()),
                        }
                    }
                }
                prop_assert!(queue.is_valid_heap());
                prop_assert_eq!(queue.len(), model.len());
            }
        }
    }
}
