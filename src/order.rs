//! Comparators for ordering heap elements
//!
//! A heap does not require its elements to implement [`Ord`]. Instead it asks
//! a [`TotalOrder`] to compare them, which lets the same element type be
//! queued by different criteria:
//!
//! - [`OrdTotalOrder`] delegates to `T: Ord` and is the default
//! - any `Fn(&T, &T) -> Ordering` closure is an order
//! - [`ReverseOrder`] flips another order, turning a min-heap into a max-heap
//! - `&OrdTotalOrder<T>` and `&ReverseOrder<C>` let several heaps share one order
//!
//! # Example
//!
//! ```rust
//! use priority_heap::{BinaryHeap, Heap};
//! use priority_heap::order::{OrdTotalOrder, ReverseOrder};
//!
//! // Shortest string first
//! let mut by_len = BinaryHeap::with_order(|a: &&str, b: &&str| a.len().cmp(&b.len()));
//! by_len.enqueue("banana");
//! by_len.enqueue("fig");
//! assert_eq!(by_len.dequeue(), Ok("fig"));
//!
//! // Largest number first
//! let mut max = BinaryHeap::with_order(ReverseOrder(OrdTotalOrder::<i32>::new()));
//! max.enqueue(1);
//! max.enqueue(7);
//! assert_eq!(max.dequeue(), Ok(7));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

/// A total preorder over `T`
///
/// Implementations must be consistent across calls: reflexive, transitive,
/// and agreeing with themselves when the arguments are swapped. A heap built
/// on an inconsistent order stays memory safe but may hand out elements in
/// the wrong order.
pub trait TotalOrder<T: ?Sized> {
    /// Compares `this` with `that`
    fn cmp(&self, this: &T, that: &T) -> Ordering;

    /// Returns true if `this` orders strictly before `that`
    fn lt(&self, this: &T, that: &T) -> bool {
        self.cmp(this, that) == Ordering::Less
    }

    /// Returns true if `this` orders before or together with `that`
    fn le(&self, this: &T, that: &T) -> bool {
        self.cmp(this, that) != Ordering::Greater
    }
}

impl<T: ?Sized, F> TotalOrder<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn cmp(&self, this: &T, that: &T) -> Ordering {
        self(this, that)
    }
}

/// A zero-sized total order that delegates to the [`Ord`] implementation
/// of its type parameter `T`.
pub struct OrdTotalOrder<T: ?Sized>(PhantomData<fn(&T)>);

impl<T: ?Sized + Ord> OrdTotalOrder<T> {
    /// Creates the natural order of `T`
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T: ?Sized + Ord> Default for OrdTotalOrder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized + Ord> Clone for OrdTotalOrder<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized + Ord> Copy for OrdTotalOrder<T> {}

impl<T: ?Sized + Ord> fmt::Debug for OrdTotalOrder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OrdTotalOrder")
    }
}

impl<T: ?Sized + Ord> TotalOrder<T> for OrdTotalOrder<T> {
    fn cmp(&self, this: &T, that: &T) -> Ordering {
        Ord::cmp(this, that)
    }

    // Overridden so that `T`'s own `PartialOrd` operators are used.
    fn lt(&self, this: &T, that: &T) -> bool {
        this < that
    }
    fn le(&self, this: &T, that: &T) -> bool {
        this <= that
    }
}

/// Reverses another order
///
/// `BinaryHeap<T, ReverseOrder<OrdTotalOrder<T>>>` behaves like
/// `std::collections::BinaryHeap<T>`: the largest element comes out first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReverseOrder<C>(pub C);

impl<T: ?Sized, C: TotalOrder<T>> TotalOrder<T> for ReverseOrder<C> {
    fn cmp(&self, this: &T, that: &T) -> Ordering {
        TotalOrder::cmp(&self.0, that, this)
    }
}

// Borrowed orders are implemented per type: a blanket `&C` impl would
// overlap the closure impl above, since `&F` is itself `Fn`.

impl<T: ?Sized + Ord> TotalOrder<T> for &OrdTotalOrder<T> {
    fn cmp(&self, this: &T, that: &T) -> Ordering {
        Ord::cmp(this, that)
    }
}

impl<T: ?Sized, C: TotalOrder<T>> TotalOrder<T> for &ReverseOrder<C> {
    fn cmp(&self, this: &T, that: &T) -> Ordering {
        TotalOrder::cmp(&self.0, that, this)
    }
}
