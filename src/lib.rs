//! The `ring_queues` crate defines FIFO queues and double-ended queues
//! over two storage strategies: a growable circular buffer, and linked
//! nodes.
//!
//! The array-backed containers, [`ArrayQueue`] and [`ArrayDeque`], keep
//! their elements in a ring of slots addressed modulo the capacity, so
//! removing from the front only advances an index.  Inserting into a
//! full ring doubles its capacity, which amortises insertion to constant
//! time.  [`ArrayDeque`] additionally supports signed random access
//! (`-1` is the last element), search and removal by value, rotation,
//! and an optional maximum length.
//!
//! The linked containers, [`LinkedQueue`], [`CircularQueue`] and
//! [`LinkedDeque`], never move elements once inserted.  Their nodes live
//! in an index-addressed arena and link to each other by index;
//! [`LinkedDeque`] is built on [`DoublyLinkedBase`], a list bounded by two
//! sentinel nodes.
//!
//! Every container reports failures with the same [`QueueError`]
//! vocabulary, and a failed call leaves its container unchanged.
//!
//! # Examples
//!
//! ```rust
//! use ring_queues::{ArrayDeque, QueueError};
//!
//! let mut deque = ArrayDeque::new();
//! deque.add_last(1)?;
//! deque.add_last(2)?;
//! deque.add_first(0)?;
//!
//! assert_eq!(deque.get(-1), Ok(&2));
//! assert_eq!(deque.delete_first(), Ok(0));
//! assert_eq!(deque.remove(&7), Err(QueueError::ValueNotFound));
//!
//! deque.rotate(1)?;
//! assert_eq!(deque.first(), Ok(&2));
//! # Ok::<(), QueueError>(())
//! ```
//!
//! ```rust
//! use std::num::NonZeroUsize;
//! use ring_queues::{ArrayDeque, QueueError};
//!
//! let max_length = NonZeroUsize::new(2).unwrap();
//! let mut deque = ArrayDeque::with_max_length(max_length);
//! deque.add_last('a').unwrap();
//! deque.add_last('b').unwrap();
//!
//! assert!(deque.is_full());
//! assert_eq!(deque.add_last('c'), Err(QueueError::CapacityExceeded { max_length }));
//! ```
//!
//! ```rust
//! use ring_queues::CircularQueue;
//!
//! let mut queue = CircularQueue::new();
//! queue.enqueue("x");
//! queue.enqueue("y");
//! queue.rotate();
//! assert_eq!(queue.dequeue(), Ok("y"));
//! assert_eq!(queue.dequeue(), Ok("x"));
//! ```

mod arena;
mod array_deque;
mod array_queue;
mod circular_queue;
mod error;
mod index;
mod linked_deque;
mod linked_list;
mod linked_queue;

pub use array_deque::ArrayDeque;
pub use array_deque::DEFAULT_CAPACITY;
pub use array_queue::ArrayQueue;
pub use circular_queue::CircularQueue;
pub use error::QueueError;
pub use error::Result;
pub use index::DequeIndex;
pub use linked_deque::LinkedDeque;
pub use linked_list::DoublyLinkedBase;
pub use linked_list::NodeId;
pub use linked_queue::LinkedQueue;

// Every container honours the same FIFO contract.
#[test]
fn test_queues_agree_miri() {
    let mut array = ArrayQueue::new();
    let mut linked = LinkedQueue::new();
    let mut circular = CircularQueue::new();

    for i in 0..25 {
        array.enqueue(i);
        linked.enqueue(i);
        circular.enqueue(i);

        if i % 3 == 0 {
            let expected = array.dequeue();
            assert_eq!(linked.dequeue(), expected);
            assert_eq!(circular.dequeue(), expected);
        }
    }

    assert_eq!(array.len(), linked.len());
    assert_eq!(array.len(), circular.len());
    while !array.is_empty() {
        assert_eq!(array.first(), linked.first());
        assert_eq!(array.first(), circular.first());

        let expected = array.dequeue();
        assert_eq!(linked.dequeue(), expected);
        assert_eq!(circular.dequeue(), expected);
    }

    assert!(linked.is_empty());
    assert!(circular.is_empty());
}

#[test]
fn test_deques_agree_miri() {
    let mut array = ArrayDeque::new();
    let mut linked = LinkedDeque::new();

    for i in 0..30 {
        if i % 2 == 0 {
            array.add_first(i).unwrap();
            linked.insert_first(i);
        } else {
            array.add_last(i).unwrap();
            linked.insert_last(i);
        }

        if i % 5 == 4 {
            assert_eq!(array.delete_first(), linked.delete_first());
            assert_eq!(array.delete_last(), linked.delete_last());
        }

        assert_eq!(array.first(), linked.first());
        assert_eq!(array.last(), linked.last());
        assert_eq!(array.len(), linked.len());
    }
}
