//! The `linked_deque` module defines [`LinkedDeque`], a double-ended
//! queue over a [`DoublyLinkedBase`].
use crate::linked_list::DoublyLinkedBase;
use crate::QueueError;
use crate::Result;

/// A [`LinkedDeque`] inserts and removes at both ends in constant time by
/// splicing next to the base list's sentinels.
#[derive(Clone)]
pub struct LinkedDeque<T> {
    list: DoublyLinkedBase<T>,
}

impl<T> LinkedDeque<T> {
    pub fn new() -> Self {
        LinkedDeque {
            list: DoublyLinkedBase::new(),
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns a reference to the element at the front of the deque.
    pub fn first(&self) -> Result<&T> {
        self.list
            .next(self.list.header())
            .and_then(|id| self.list.element(id))
            .ok_or(QueueError::Empty)
    }

    /// Returns a reference to the element at the back of the deque.
    pub fn last(&self) -> Result<&T> {
        self.list
            .prev(self.list.trailer())
            .and_then(|id| self.list.element(id))
            .ok_or(QueueError::Empty)
    }

    pub fn insert_first(&mut self, item: T) {
        let header = self.list.header();
        let after = self.list.next(header).unwrap_or_else(|| self.list.trailer());
        self.list.insert_between(item, header, after);
    }

    pub fn insert_last(&mut self, item: T) {
        let trailer = self.list.trailer();
        let before = self.list.prev(trailer).unwrap_or_else(|| self.list.header());
        self.list.insert_between(item, before, trailer);
    }

    /// Removes and returns the element at the front of the deque.
    pub fn delete_first(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(QueueError::Empty);
        }

        let first = self.list.next(self.list.header()).ok_or(QueueError::Empty)?;
        Ok(self.list.delete_node(first))
    }

    /// Removes and returns the element at the back of the deque.
    pub fn delete_last(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(QueueError::Empty);
        }

        let last = self.list.prev(self.list.trailer()).ok_or(QueueError::Empty)?;
        Ok(self.list.delete_node(last))
    }
}

impl<T> Default for LinkedDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for LinkedDeque<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.list.fmt(f)
    }
}

#[test]
fn test_empty_miri() {
    let mut deque: LinkedDeque<u32> = LinkedDeque::new();

    assert!(deque.is_empty());
    assert_eq!(deque.first(), Err(QueueError::Empty));
    assert_eq!(deque.last(), Err(QueueError::Empty));
    assert_eq!(deque.delete_first(), Err(QueueError::Empty));
    assert_eq!(deque.delete_last(), Err(QueueError::Empty));
    assert_eq!(deque.len(), 0);
}

#[test]
fn test_both_ends_miri() {
    let mut deque = LinkedDeque::new();

    deque.insert_first(2);
    deque.insert_last(3);
    deque.insert_first(1);
    deque.insert_last(4);
    assert_eq!(deque.len(), 4);
    assert_eq!(deque.first(), Ok(&1));
    assert_eq!(deque.last(), Ok(&4));

    assert_eq!(deque.delete_last(), Ok(4));
    assert_eq!(deque.delete_first(), Ok(1));
    assert_eq!(deque.first(), Ok(&2));
    assert_eq!(deque.last(), Ok(&3));

    assert_eq!(deque.delete_first(), Ok(2));
    assert_eq!(deque.first(), deque.last());
    assert_eq!(deque.delete_last(), Ok(3));
    assert!(deque.is_empty());
    assert_eq!(deque.first(), Err(QueueError::Empty));
}

#[test]
fn test_as_queue_and_stack_miri() {
    let mut deque = LinkedDeque::new();
    for i in 0..6 {
        deque.insert_last(i);
    }

    // Front removal is FIFO, back removal is LIFO.
    assert_eq!(deque.delete_first(), Ok(0));
    assert_eq!(deque.delete_last(), Ok(5));
    assert_eq!(deque.delete_first(), Ok(1));
    assert_eq!(deque.delete_last(), Ok(4));
    assert_eq!(deque.len(), 2);

    // Slots freed above are reused.
    deque.insert_first(-1);
    assert_eq!(deque.first(), Ok(&-1));
    assert_eq!(deque.last(), Ok(&3));
}

#[test]
fn test_debug_with_reused_slots_miri() {
    let mut deque = LinkedDeque::new();
    assert_eq!(format!("{:?}", deque), "[]");

    for i in 0..4 {
        deque.insert_last(i);
    }
    assert_eq!(deque.delete_last(), Ok(3));
    assert_eq!(deque.delete_first(), Ok(0));

    // Both new nodes reuse freed slots, at the opposite ends.
    deque.insert_first(10);
    deque.insert_last(20);
    assert_eq!(format!("{:?}", deque), "[10, 1, 2, 20]");
}
