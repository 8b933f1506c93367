//! Common traits for priority queues
//!
//! This module provides the queue contract shared by the heaps in this crate:
//!
//! - [`Heap`]: enqueue, dequeue, peek and the size queries
//! - [`MergeableHeap`]: adds consuming another heap of the same type
//!
//! Unlike `std::collections::BinaryHeap`, [`Heap::dequeue`] reports an empty
//! queue through [`HeapError`] instead of `None`, so an empty pop is visible
//! at the call site. [`Heap::pop`] keeps the `Option` form for callers that
//! prefer it.

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// `dequeue` was called on a heap holding no elements
    Empty,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::Empty => write!(f, "heap is empty"),
        }
    }
}

impl std::error::Error for HeapError {}

/// Base trait for priority queues
///
/// Elements are ordered by the queue's comparator and always leave smallest
/// first, so this is a min-queue. Wrap the comparator in
/// [`ReverseOrder`](crate::order::ReverseOrder) for max-first behaviour.
///
/// # Example
///
/// ```rust
/// use priority_heap::{BinaryHeap, Heap, HeapError};
///
/// let mut heap = BinaryHeap::new();
/// heap.enqueue(3);
/// heap.enqueue(1);
/// heap.enqueue(2);
///
/// assert_eq!(heap.peek(), Some(&1));
/// assert_eq!(heap.dequeue(), Ok(1));
/// assert_eq!(heap.dequeue(), Ok(2));
/// assert_eq!(heap.dequeue(), Ok(3));
/// assert_eq!(heap.dequeue(), Err(HeapError::Empty));
/// ```
pub trait Heap<T> {
    /// Returns true if the heap holds no elements
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n) comparisons, amortized O(1) for the append itself.
    fn enqueue(&mut self, item: T);

    /// Returns the minimum element without removing it
    ///
    /// # Time Complexity
    /// O(1)
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the minimum element
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] if the heap holds no elements. The heap is
    /// left unchanged in that case.
    ///
    /// # Time Complexity
    /// O(log n)
    fn dequeue(&mut self) -> Result<T, HeapError>;

    /// Removes and returns the minimum element, or `None` if the heap is empty
    ///
    /// This mirrors `BinaryHeap::pop`, except that the minimum (not the
    /// maximum) comes out first.
    fn pop(&mut self) -> Option<T> {
        self.dequeue().ok()
    }
}

/// Heaps that can absorb another heap of the same type
pub trait MergeableHeap<T>: Heap<T> {
    /// Merges another heap into this one, consuming the other heap
    ///
    /// The result holds every element of both heaps.
    fn merge(&mut self, other: Self);
}
