//! The `linked_queue` module defines [`LinkedQueue`], a FIFO queue over a
//! singly linked list with head and tail references.
use crate::arena::NodeArena;
use crate::QueueError;
use crate::Result;

#[derive(Clone, Debug)]
struct Node<T> {
    element: T,
    next: Option<usize>,
}

/// A [`LinkedQueue`] enqueues at the tail and dequeues at the head, in
/// constant time and without ever moving existing elements.
#[derive(Clone)]
pub struct LinkedQueue<T> {
    nodes: NodeArena<Node<T>>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> LinkedQueue<T> {
    pub fn new() -> Self {
        LinkedQueue {
            nodes: NodeArena::default(),
            head: None,
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
        let head = self.head.ok_or(QueueError::Empty)?;
        Ok(&self.nodes.get(head).element)
    }

    /// Adds `item` to the back of the queue.
    pub fn enqueue(&mut self, item: T) {
        let newest = self.nodes.alloc(Node {
            element: item,
            next: None,
        });

        match self.tail {
            Some(tail) => self.nodes.get_mut(tail).next = Some(newest),
            None => self.head = Some(newest),
        }

        self.tail = Some(newest);
        self.len += 1;
    }

    /// Removes and returns the element at the front of the queue.
    pub fn dequeue(&mut self) -> Result<T> {
        let head = self.head.ok_or(QueueError::Empty)?;
        let node = self.nodes.release(head);

        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }

        self.len -= 1;
        Ok(node.element)
    }
}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Lists the elements from head to tail.
impl<T: std::fmt::Debug> std::fmt::Debug for LinkedQueue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut entries = f.debug_list();
        let mut cursor = self.head;
        while let Some(idx) = cursor {
            let node = self.nodes.get(idx);
            entries.entry(&node.element);
            cursor = node.next;
        }
        entries.finish()
    }
}

#[test]
fn test_fifo_miri() {
    let mut queue = LinkedQueue::new();

    assert_eq!(queue.first(), Err(QueueError::Empty));
    assert_eq!(queue.dequeue(), Err(QueueError::Empty));

    queue.enqueue(1);
    queue.enqueue(2);
    queue.enqueue(3);
    assert_eq!(queue.len(), 3);
    assert_eq!(queue.first(), Ok(&1));

    assert_eq!(queue.dequeue(), Ok(1));
    assert_eq!(queue.dequeue(), Ok(2));
    assert_eq!(queue.dequeue(), Ok(3));
    assert!(queue.is_empty());
    assert_eq!(queue.dequeue(), Err(QueueError::Empty));
}

#[test]
fn test_refill_after_empty_miri() {
    let mut queue = LinkedQueue::new();

    for round in 0..3 {
        for i in 0..5 {
            queue.enqueue(round * 10 + i);
        }
        for i in 0..5 {
            assert_eq!(queue.first(), Ok(&(round * 10 + i)));
            assert_eq!(queue.dequeue(), Ok(round * 10 + i));
        }
        assert!(queue.is_empty());
    }

    // Interleaved.
    queue.enqueue(1);
    queue.enqueue(2);
    assert_eq!(queue.dequeue(), Ok(1));
    queue.enqueue(3);
    assert_eq!(queue.dequeue(), Ok(2));
    assert_eq!(queue.dequeue(), Ok(3));
    assert_eq!(queue.len(), 0);
}

#[test]
fn test_debug_miri() {
    let mut queue = LinkedQueue::new();
    assert_eq!(format!("{:?}", queue), "[]");

    for i in 0..3 {
        queue.enqueue(i);
    }
    assert_eq!(queue.dequeue(), Ok(0));
    // Lands in the slot freed above.
    queue.enqueue(3);
    assert_eq!(format!("{:?}", queue), "[1, 2, 3]");
}
