//! Stress tests that push the heap through long operation sequences
//!
//! These tests perform large numbers of operations in various patterns
//! to catch edge cases and verify correctness under load.

use priority_heap::order::{OrdTotalOrder, ReverseOrder};
use priority_heap::{BinaryHeap, Heap, MergeableHeap};

/// Deterministic pseudo-random sequence so failures reproduce
struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Lcg { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state
    }

    fn next_i32(&mut self, bound: i32) -> i32 {
        ((self.next() >> 33) % bound as u64) as i32
    }
}

fn assert_heap_property<T, C>(heap: &BinaryHeap<T, C>)
where
    T: std::fmt::Debug,
    C: priority_heap::TotalOrder<T>,
{
    let data = heap.as_slice();
    for i in 1..data.len() {
        let parent = (i - 1) / 2;
        assert!(
            heap.order().le(&data[parent], &data[i]),
            "parent {:?} at {} orders after child {:?} at {}",
            data[parent],
            parent,
            data[i],
            i
        );
    }
}

/// Test massive numbers of enqueues and dequeues
#[test]
fn test_massive_operations() {
    let mut heap = BinaryHeap::new();

    for i in 0..10_000 {
        heap.enqueue(i);
    }

    assert_eq!(heap.len(), 10_000);
    assert_heap_property(&heap);

    for i in 0..10_000 {
        assert_eq!(heap.dequeue(), Ok(i));
    }

    assert!(heap.is_empty());
}

/// Test descending input, the worst case for sift-up
#[test]
fn test_massive_descending() {
    let mut heap = BinaryHeap::with_capacity(10_000);

    for i in (0..10_000).rev() {
        heap.enqueue(i);
    }
    assert_heap_property(&heap);

    for i in 0..10_000 {
        assert_eq!(heap.dequeue(), Ok(i));
    }
}

/// Test alternating enqueue and dequeue
#[test]
fn test_alternating_ops() {
    let mut heap = BinaryHeap::new();

    // Enqueue-enqueue-dequeue pattern
    for i in 0..2_000 {
        heap.enqueue(i * 2);
        heap.enqueue(i * 2 + 1);

        // The smallest still queued is always `i`
        assert_eq!(heap.dequeue(), Ok(i));
    }

    assert_eq!(heap.len(), 2_000);
    assert_heap_property(&heap);

    let mut last = i32::MIN;
    while let Ok(value) = heap.dequeue() {
        assert!(value >= last);
        last = value;
    }
    assert!(heap.is_empty());
}

/// Test random interleavings against a sorted reference
#[test]
fn test_random_interleaving() {
    let mut rng = Lcg::new(0x5eed);
    let mut heap: BinaryHeap<i32> = BinaryHeap::new();
    // Kept sorted in descending order so the minimum is at the end
    let mut reference: Vec<i32> = Vec::new();

    for _ in 0..20_000 {
        if rng.next() % 3 == 0 {
            assert_eq!(heap.pop(), reference.pop());
        } else {
            let value = rng.next_i32(500);
            heap.enqueue(value);
            let pos = reference.partition_point(|&x| x > value);
            reference.insert(pos, value);
        }
        assert_eq!(heap.len(), reference.len());
    }

    assert_heap_property(&heap);
    reference.reverse();
    assert_eq!(heap.into_sorted_vec(), reference);
}

/// Test merge with large heaps
#[test]
fn test_large_merge() {
    let mut heap1 = BinaryHeap::new();
    let mut heap2 = BinaryHeap::new();

    for i in 0..5_000 {
        heap1.enqueue(i * 2);
        heap2.enqueue(i * 2 + 1);
    }

    heap1.merge(heap2);

    assert_eq!(heap1.len(), 10_000);
    assert_heap_property(&heap1);

    for i in 0..10_000 {
        assert_eq!(heap1.dequeue(), Ok(i));
    }
}

/// Test with extreme values
#[test]
fn test_extreme_values() {
    let mut heap = BinaryHeap::new();

    heap.enqueue(i64::MAX);
    heap.enqueue(0);
    heap.enqueue(i64::MIN);
    heap.enqueue(-1);

    assert_eq!(heap.dequeue(), Ok(i64::MIN));
    assert_eq!(heap.dequeue(), Ok(-1));
    assert_eq!(heap.dequeue(), Ok(0));
    assert_eq!(heap.dequeue(), Ok(i64::MAX));
}

/// Test a reversed comparator under load
#[test]
fn test_reverse_order_under_load() {
    let mut rng = Lcg::new(42);
    let mut heap = BinaryHeap::with_order(ReverseOrder(OrdTotalOrder::<i32>::new()));

    for _ in 0..5_000 {
        heap.enqueue(rng.next_i32(1_000));
    }
    assert_heap_property(&heap);

    let mut last = i32::MAX;
    for value in heap.drain_sorted() {
        assert!(value <= last);
        last = value;
    }
}

/// Test many equal elements tagged with their insertion order
#[test]
fn test_many_ties() {
    let mut heap = BinaryHeap::with_order(|a: &(u8, u32), b: &(u8, u32)| a.0.cmp(&b.0));

    for seq in 0..3_000u32 {
        heap.enqueue(((seq % 3) as u8, seq));
    }
    assert_heap_property(&heap);

    let mut counts = [0usize; 3];
    let mut last_key = 0u8;
    while let Ok((key, _)) = heap.dequeue() {
        assert!(key >= last_key);
        last_key = key;
        counts[key as usize] += 1;
    }
    assert_eq!(counts, [1_000, 1_000, 1_000]);
}

/// Test draining and refilling the same heap
#[test]
fn test_refill_after_empty() {
    let mut heap = BinaryHeap::new();

    for round in 0..50 {
        for i in 0..100 {
            heap.enqueue(round * 100 + (99 - i));
        }
        for i in 0..100 {
            assert_eq!(heap.dequeue(), Ok(round * 100 + i));
        }
        assert!(heap.is_empty());
        assert!(heap.dequeue().is_err());
    }
}
