//! The `array_queue` module defines [`ArrayQueue`], a FIFO queue over a
//! growable circular buffer.
use smallvec::SmallVec;

use crate::QueueError;
use crate::Result;
use crate::DEFAULT_CAPACITY;

/// Backing storage for the circular buffers.  The default-sized buffer
/// lives inline; grown buffers spill to the heap.
pub(crate) type Slots<T> = SmallVec<[Option<T>; DEFAULT_CAPACITY]>;

/// Returns `capacity` empty slots.
pub(crate) fn vacant_slots<T>(capacity: usize) -> Slots<T> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

/// Moves the `len` live elements that start at physical index `front`
/// in `old` to the beginning of a fresh buffer of `capacity` slots.
pub(crate) fn relayout<T>(
    old: &mut Slots<T>,
    front: usize,
    len: usize,
    capacity: usize,
) -> Slots<T> {
    debug_assert!(len <= capacity);
    let old_capacity = old.len();
    let mut slots = vacant_slots(capacity);

    let mut walk = front;
    for slot in slots.iter_mut().take(len) {
        *slot = old[walk].take();
        walk = (walk + 1) % old_capacity;
    }

    slots
}

/// An [`ArrayQueue`] is a first-in first-out queue stored in a circular
/// buffer.
///
/// Enqueueing into a full buffer doubles its capacity (amortised
/// constant time); dequeueing only advances the front index.  The buffer
/// never shrinks.
pub struct ArrayQueue<T> {
    slots: Slots<T>,
    front: usize,
    len: usize,
}

impl<T> ArrayQueue<T> {
    /// Creates a new empty [`ArrayQueue`] with [`DEFAULT_CAPACITY`] slots.
    pub fn new() -> Self {
        ArrayQueue {
            slots: vacant_slots(DEFAULT_CAPACITY),
            front: 0,
            len: 0,
        }
    }

    /// Returns the number of elements in the queue.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots in the backing buffer.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns a reference to the element at the front of the queue,
    /// without removing it.
    pub fn first(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(QueueError::Empty);
        }

        self.slots[self.front].as_ref().ok_or(QueueError::Empty)
    }

    /// Adds `item` to the back of the queue.
    pub fn enqueue(&mut self, item: T) {
        if self.len == self.capacity() {
            self.resize(2 * self.capacity());
        }

        let last_in_line = (self.front + self.len) % self.capacity();
        self.slots[last_in_line] = Some(item);
        self.len += 1;
        self.check_rep();
    }

    /// Removes and returns the element at the front of the queue.
    pub fn dequeue(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(QueueError::Empty);
        }

        let ret = self.slots[self.front].take().ok_or(QueueError::Empty)?;
        self.front = (self.front + 1) % self.capacity();
        self.len -= 1;
        self.check_rep();
        Ok(ret)
    }

    fn resize(&mut self, capacity: usize) {
        self.slots = relayout(&mut self.slots, self.front, self.len, capacity);
        self.front = 0;
    }

    #[inline(always)]
    #[cfg_attr(test, mutants::skip)] // removing checks will not be detected.
    fn check_rep(&self) {
        debug_assert!(self.len <= self.capacity());
        debug_assert!(self.front < self.capacity());
        debug_assert!(self.len == 0 || self.slots[self.front].is_some());
        debug_assert!(
            self.len == self.capacity()
                || self.slots[(self.front + self.len) % self.capacity()].is_none()
        );
    }
}

impl<T> Default for ArrayQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for ArrayQueue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let capacity = self.capacity();
        f.debug_list()
            .entries(
                (0..self.len).filter_map(|i| self.slots[(self.front + i) % capacity].as_ref()),
            )
            .finish()
    }
}

#[test]
fn test_fifo_miri() {
    let mut queue = ArrayQueue::new();

    assert!(queue.is_empty());
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
    assert_eq!(queue.dequeue(), Err(QueueError::Empty));
    assert!(queue.is_empty());
}

#[test]
fn test_grow_wrapped_miri() {
    let mut queue = ArrayQueue::new();

    // Move the front away from slot 0 so that the buffer wraps.
    for i in 0..6 {
        queue.enqueue(i);
    }
    for i in 0..6 {
        assert_eq!(queue.dequeue(), Ok(i));
    }

    for i in 0..25 {
        queue.enqueue(i);
    }
    assert_eq!(queue.capacity(), 40);
    assert_eq!(queue.len(), 25);
    assert_eq!(format!("{:?}", queue), format!("{:?}", (0..25).collect::<Vec<_>>()));

    for i in 0..25 {
        assert_eq!(queue.first(), Ok(&i));
        assert_eq!(queue.dequeue(), Ok(i));
    }
    assert!(queue.is_empty());
    // Never shrinks.
    assert_eq!(queue.capacity(), 40);
}

#[test]
fn test_single_resize() {
    let mut queue = ArrayQueue::new();

    for i in 0..DEFAULT_CAPACITY {
        queue.enqueue(i);
    }
    assert_eq!(queue.capacity(), DEFAULT_CAPACITY);

    queue.enqueue(DEFAULT_CAPACITY);
    assert_eq!(queue.capacity(), 2 * DEFAULT_CAPACITY);
}

#[test]
fn test_drops_on_dequeue_miri() {
    use std::rc::Rc;

    let item = Rc::new(());
    let mut queue = ArrayQueue::new();

    queue.enqueue(item.clone());
    assert_eq!(Rc::strong_count(&item), 2);

    drop(queue.dequeue());
    // The slot no longer holds a reference.
    assert_eq!(Rc::strong_count(&item), 1);
}
