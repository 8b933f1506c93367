//! Priority queue walkthrough
//!
//! Queues integers and strings with their natural ordering and prints the
//! first two elements to come out of each queue.
//!
//! ```bash
//! cargo run --example priority_queue
//! ```

use priority_heap::{BinaryHeap, Heap, HeapError};

fn main() -> Result<(), HeapError> {
    let mut numbers = BinaryHeap::new();
    numbers.enqueue(10);
    numbers.enqueue(30);
    numbers.enqueue(20);

    println!("{}", numbers.dequeue()?); // 10
    println!("{}", numbers.dequeue()?); // 20

    let mut fruit = BinaryHeap::new();
    fruit.enqueue(String::from("Apple"));
    fruit.enqueue(String::from("Banana"));
    fruit.enqueue(String::from("Cherry"));

    println!("{}", fruit.dequeue()?); // Apple
    println!("{}", fruit.dequeue()?); // Banana

    Ok(())
}
