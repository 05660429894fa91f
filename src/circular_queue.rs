//! The `circular_queue` module defines [`CircularQueue`], a FIFO queue
//! over a singly linked ring.
//!
//! Only the tail is tracked: the head is always `tail.next`.  A single
//! node is a ring of one, whose `next` is itself.
use crate::arena::NodeArena;
use crate::QueueError;
use crate::Result;

#[derive(Clone, Debug)]
struct Node<T> {
    element: T,
    next: usize,
}

/// A [`CircularQueue`] is a [`crate::LinkedQueue`] that can also rotate
/// its front element to the back in constant time.
#[derive(Clone)]
pub struct CircularQueue<T> {
    nodes: NodeArena<Node<T>>,
    tail: Option<usize>,
    len: usize,
}

impl<T> CircularQueue<T> {
    pub fn new() -> Self {
        CircularQueue {
            nodes: NodeArena::default(),
            tail: None,
            len: 0,
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the element at the front of the queue.
    pub fn first(&self) -> Result<&T> {
        let tail = self.tail.ok_or(QueueError::Empty)?;
        let head = self.nodes.get(tail).next;
        Ok(&self.nodes.get(head).element)
    }

    /// Adds `item` to the back of the queue.
    pub fn enqueue(&mut self, item: T) {
        // Placeholder link, fixed up below once we know our own index.
        let newest = self.nodes.alloc(Node {
            element: item,
            next: usize::MAX,
        });

        match self.tail {
            None => self.nodes.get_mut(newest).next = newest,
            Some(tail) => {
                let head = self.nodes.get(tail).next;
                self.nodes.get_mut(newest).next = head;
                self.nodes.get_mut(tail).next = newest;
            }
        }

        self.tail = Some(newest);
        self.len += 1;
    }

    /// Removes and returns the element at the front of the queue.
    pub fn dequeue(&mut self) -> Result<T> {
        let tail = self.tail.ok_or(QueueError::Empty)?;
        let old_head = self.nodes.get(tail).next;
        let node = self.nodes.release(old_head);

        if self.len == 1 {
            self.tail = None;
        } else {
            self.nodes.get_mut(tail).next = node.next;
        }

        self.len -= 1;
        Ok(node.element)
    }

    /// Moves the front element to the back of the queue.  Does nothing
    /// on an empty queue.
    pub fn rotate(&mut self) {
        if let Some(tail) = self.tail {
            self.tail = Some(self.nodes.get(tail).next);
        }
    }
}

impl<T> Default for CircularQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Lists the elements from the current front (`tail.next`) around to the
/// tail.
impl<T: std::fmt::Debug> std::fmt::Debug for CircularQueue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut entries = f.debug_list();
        if let Some(tail) = self.tail {
            let mut cursor = self.nodes.get(tail).next;
            for _ in 0..self.len {
                let node = self.nodes.get(cursor);
                entries.entry(&node.element);
                cursor = node.next;
            }
        }
        entries.finish()
    }
}

#[test]
fn test_fifo_miri() {
    let mut queue = CircularQueue::new();

    assert_eq!(queue.first(), Err(QueueError::Empty));
    assert_eq!(queue.dequeue(), Err(QueueError::Empty));
    queue.rotate();
    assert!(queue.is_empty());

    queue.enqueue(1);
    assert_eq!(queue.first(), Ok(&1));
    // A ring of one rotates onto itself.
    queue.rotate();
    assert_eq!(queue.first(), Ok(&1));

    queue.enqueue(2);
    queue.enqueue(3);
    assert_eq!(queue.len(), 3);
    assert_eq!(queue.dequeue(), Ok(1));
    assert_eq!(queue.dequeue(), Ok(2));
    assert_eq!(queue.dequeue(), Ok(3));
    assert!(queue.is_empty());
    assert_eq!(queue.first(), Err(QueueError::Empty));
}

#[test]
fn test_rotate_miri() {
    let mut queue = CircularQueue::new();
    for i in 0..4 {
        queue.enqueue(i);
    }

    queue.rotate();
    assert_eq!(queue.first(), Ok(&1));
    queue.rotate();
    assert_eq!(queue.first(), Ok(&2));

    // The rotated elements come back out after the rest, in order.
    queue.enqueue(4);
    let drained = std::iter::from_fn(|| queue.dequeue().ok()).collect::<Vec<_>>();
    assert_eq!(drained, [2, 3, 0, 1, 4]);
}

#[test]
fn test_round_robin_miri() {
    let mut queue = CircularQueue::new();
    for i in 0..3 {
        queue.enqueue(i);
    }

    let mut served = Vec::new();
    for _ in 0..7 {
        served.push(*queue.first().unwrap());
        queue.rotate();
    }
    assert_eq!(served, [0, 1, 2, 0, 1, 2, 0]);
    assert_eq!(queue.len(), 3);
}

#[test]
fn test_debug_after_rotate_miri() {
    let mut queue = CircularQueue::new();
    assert_eq!(format!("{:?}", queue), "[]");

    for i in 0..4 {
        queue.enqueue(i);
    }
    queue.rotate();
    queue.rotate();
    // Front first, even though the ring's slots are in insertion order.
    assert_eq!(format!("{:?}", queue), "[2, 3, 0, 1]");

    assert_eq!(queue.dequeue(), Ok(2));
    queue.enqueue(4);
    assert_eq!(format!("{:?}", queue), "[3, 0, 1, 4]");
}
