//! Binary Heap Priority Queues for Rust
//!
//! This crate provides an array-backed binary min-heap whose ordering is
//! supplied by the caller. Elements do not need to implement [`Ord`]: any
//! [`TotalOrder`], including a plain comparison closure, decides which
//! element leaves the queue first.
//!
//! # Features
//!
//! - **O(log n) enqueue and dequeue**, O(1) peek and length
//! - **Pluggable ordering**: natural [`Ord`] by default, closures, or
//!   [`ReverseOrder`](order::ReverseOrder) for max-first queues
//! - **Explicit empty errors**: [`Heap::dequeue`] returns
//!   [`HeapError::Empty`] instead of a sentinel value
//!
//! # Example
//!
//! ```rust
//! use priority_heap::{BinaryHeap, Heap, HeapError};
//!
//! let mut heap = BinaryHeap::new();
//! heap.enqueue("Cherry");
//! heap.enqueue("Apple");
//! heap.enqueue("Banana");
//!
//! assert_eq!(heap.dequeue(), Ok("Apple"));
//! assert_eq!(heap.dequeue(), Ok("Banana"));
//! assert_eq!(heap.len(), 1);
//!
//! let mut empty: BinaryHeap<u32> = BinaryHeap::new();
//! assert_eq!(empty.dequeue(), Err(HeapError::Empty));
//! ```

pub mod binary;
pub mod order;
pub mod traits;

// Re-export the main types for convenience
pub use binary::BinaryHeap;
pub use order::{OrdTotalOrder, TotalOrder};
pub use traits::{Heap, HeapError, MergeableHeap};
