//! Binary min-heap with a pluggable comparator
//!
//! The heap is an implicit complete binary tree stored in a `Vec`: the
//! children of index `i` live at `2i + 1` and `2i + 2`, and the parent of
//! index `i > 0` lives at `(i - 1) / 2`. Every parent compares less than or
//! equal to its children under the heap's [`TotalOrder`], so the minimum is
//! always at index 0.
//!
//! # Time Complexity
//!
//! | Operation  | Complexity         |
//! |------------|--------------------|
//! | `enqueue`  | O(log n)           |
//! | `dequeue`  | O(log n)           |
//! | `peek`     | O(1)               |
//! | `len`      | O(1)               |
//! | `merge`    | O(m log (n + m))   |
//!
//! # Example
//!
//! ```rust
//! use priority_heap::{BinaryHeap, Heap};
//!
//! let mut heap = BinaryHeap::new();
//! heap.enqueue(10);
//! heap.enqueue(30);
//! heap.enqueue(20);
//!
//! assert_eq!(heap.dequeue(), Ok(10));
//! assert_eq!(heap.dequeue(), Ok(20));
//! assert_eq!(heap.len(), 1);
//! ```

use std::fmt;
use std::iter::FusedIterator;

use crate::order::{OrdTotalOrder, TotalOrder};
use crate::traits::{Heap, HeapError, MergeableHeap};

/// A binary min-heap ordered by a [`TotalOrder`]
///
/// `C` defaults to [`OrdTotalOrder<T>`], so `BinaryHeap<T>` orders by `T`'s
/// own [`Ord`]. Any other comparator can be supplied with
/// [`with_order`](BinaryHeap::with_order).
///
/// When two children compare equal and both are smaller than their parent,
/// `dequeue` moves the parent towards the left child.
#[derive(Clone)]
pub struct BinaryHeap<T, C = OrdTotalOrder<T>> {
    /// The implicit tree, root first
    data: Vec<T>,
    order: C,
}

impl<T: Ord> BinaryHeap<T> {
    /// Creates an empty heap ordered by `T`'s [`Ord`] implementation
    pub fn new() -> Self {
        Self::with_order(OrdTotalOrder::new())
    }

    /// Creates an empty heap ordered by `T`'s [`Ord`] implementation, with
    /// room for at least `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_order(capacity, OrdTotalOrder::new())
    }
}

impl<T, C: TotalOrder<T>> BinaryHeap<T, C> {
    /// Creates an empty heap ordered by `order`
    ///
    /// ```rust
    /// use priority_heap::{BinaryHeap, Heap};
    ///
    /// // Earliest deadline first, ignoring the task name
    /// let mut tasks = BinaryHeap::with_order(|a: &(u32, &str), b: &(u32, &str)| a.0.cmp(&b.0));
    /// tasks.enqueue((30, "report"));
    /// tasks.enqueue((5, "standup"));
    /// assert_eq!(tasks.dequeue(), Ok((5, "standup")));
    /// ```
    pub fn with_order(order: C) -> Self {
        Self {
            data: Vec::new(),
            order,
        }
    }

    /// Creates an empty heap ordered by `order`, with room for at least
    /// `capacity` elements
    pub fn with_capacity_and_order(capacity: usize, order: C) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            order,
        }
    }

    /// Consumes the heap and returns its elements in non-decreasing order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(item) = self.pop() {
            sorted.push(item);
        }
        sorted
    }

    /// Returns an iterator that removes elements in non-decreasing order
    ///
    /// Elements not yet yielded when the iterator is dropped stay in the heap.
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T, C> {
        DrainSorted { heap: self }
    }

    /// Move element at index up to restore the heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.order.lt(&self.data[index], &self.data[parent]) {
                self.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down to restore the heap property
    ///
    /// The left child is checked first and only replaced by the right child
    /// on a strict `Less`, so equal children resolve to the left.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut smallest = index;

            if left < len && self.order.lt(&self.data[left], &self.data[smallest]) {
                smallest = left;
            }
            if right < len && self.order.lt(&self.data[right], &self.data[smallest]) {
                smallest = right;
            }

            if smallest != index {
                self.swap(index, smallest);
                index = smallest;
            } else {
                break;
            }
        }
    }
}

impl<T, C> BinaryHeap<T, C> {
    /// Returns the comparator this heap orders by
    pub fn order(&self) -> &C {
        &self.order
    }

    /// Returns the backing array in heap order
    ///
    /// Index 0 is the minimum; beyond that the order is only constrained by
    /// the heap property.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns an iterator over the elements in heap order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Returns the number of elements the heap can hold without reallocating
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Removes every element
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Consumes the heap and returns the backing array in heap order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Exchanges two positions in the backing array
    ///
    /// All reordering performed by sift-up and sift-down goes through here.
    fn swap(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
    }
}

impl<T, C: TotalOrder<T>> Heap<T> for BinaryHeap<T, C> {
    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn enqueue(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    fn dequeue(&mut self) -> Result<T, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::Empty);
        }

        let last_idx = self.data.len() - 1;
        self.swap(0, last_idx);
        let result = self.data.pop().ok_or(HeapError::Empty)?;

        if !self.data.is_empty() {
            self.sift_down(0);
        }

        Ok(result)
    }
}

impl<T, C: TotalOrder<T>> MergeableHeap<T> for BinaryHeap<T, C> {
    fn merge(&mut self, other: Self) {
        self.data.reserve(other.data.len());
        for item in other.data {
            self.enqueue(item);
        }
    }
}

impl<T, C: TotalOrder<T> + Default> Default for BinaryHeap<T, C> {
    fn default() -> Self {
        Self::with_order(C::default())
    }
}

impl<T: fmt::Debug, C> fmt::Debug for BinaryHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

impl<T, C: TotalOrder<T>> Extend<T> for BinaryHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for item in iter {
            self.enqueue(item);
        }
    }
}

impl<T: Ord> FromIterator<T> for BinaryHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = BinaryHeap::new();
        heap.extend(iter);
        heap
    }
}

impl<T, C> IntoIterator for BinaryHeap<T, C> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    /// Yields the elements in heap order, not sorted order
    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T, C> IntoIterator for &'a BinaryHeap<T, C> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

/// Sorted draining iterator returned by [`BinaryHeap::drain_sorted`]
pub struct DrainSorted<'a, T, C> {
    heap: &'a mut BinaryHeap<T, C>,
}

impl<T, C: TotalOrder<T>> Iterator for DrainSorted<'_, T, C> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.heap.data.len();
        (len, Some(len))
    }
}

impl<T, C: TotalOrder<T>> ExactSizeIterator for DrainSorted<'_, T, C> {}

impl<T, C: TotalOrder<T>> FusedIterator for DrainSorted<'_, T, C> {}
