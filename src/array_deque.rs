//! The `array_deque` module defines [`ArrayDeque`], a double-ended queue
//! over a growable (and optionally bounded) circular buffer.
//!
//! Logical index `i` lives at physical slot `(front + i) % capacity`.
//! Exactly `len` slots, starting at `front` and wrapping around, hold
//! live elements; every other slot is vacant.
use std::num::NonZeroUsize;

use crate::array_queue::relayout;
use crate::array_queue::vacant_slots;
use crate::array_queue::Slots;
use crate::DequeIndex;
use crate::QueueError;
use crate::Result;

/// Number of slots allocated by a fresh container.
pub const DEFAULT_CAPACITY: usize = 10;

/// An [`ArrayDeque`] supports constant-time insertion and removal at
/// both ends, and constant-time random access by logical index.
///
/// Insertion into a full buffer doubles the capacity.  When the deque
/// is constructed [`with_max_length`](ArrayDeque::with_max_length), the
/// capacity is clamped at that bound, and insertions into a deque that
/// already holds `max_length` elements fail with
/// [`QueueError::CapacityExceeded`].
pub struct ArrayDeque<T> {
    slots: Slots<T>,
    front: usize,
    len: usize,
    max_length: Option<NonZeroUsize>,
}

impl<T> ArrayDeque<T> {
    /// Creates a new empty, unbounded, [`ArrayDeque`].
    pub fn new() -> Self {
        ArrayDeque {
            slots: vacant_slots(DEFAULT_CAPACITY),
            front: 0,
            len: 0,
            max_length: None,
        }
    }

    /// Creates a new empty [`ArrayDeque`] that will never hold more than
    /// `max_length` elements.
    pub fn with_max_length(max_length: NonZeroUsize) -> Self {
        ArrayDeque {
            slots: vacant_slots(Self::initial_capacity(Some(max_length))),
            front: 0,
            len: 0,
            max_length: Some(max_length),
        }
    }

    #[inline(always)]
    fn initial_capacity(max_length: Option<NonZeroUsize>) -> usize {
        match max_length {
            Some(max) => max.get().min(DEFAULT_CAPACITY),
            None => DEFAULT_CAPACITY,
        }
    }

    /// Returns the number of elements in the deque.
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

    #[inline(always)]
    pub fn max_length(&self) -> Option<NonZeroUsize> {
        self.max_length
    }

    /// Returns true iff the deque has a maximum length and its buffer
    /// has grown to that many slots.
    ///
    /// This is a statement about capacity, not about the number of
    /// elements: a deque bounded below [`DEFAULT_CAPACITY`] is full
    /// from the start.
    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.max_length.map(NonZeroUsize::get) == Some(self.capacity())
    }

    /// Maps logical offset `i` (from the front) to its physical slot.
    #[inline(always)]
    fn physical(&self, i: usize) -> usize {
        (self.front + i) % self.capacity()
    }

    /// Validates a signed logical index and maps it to its physical slot.
    fn locate(&self, index: impl DequeIndex) -> Result<usize> {
        let index = index.offset()?;
        let len = self.len as isize;

        if index < -len || index >= len {
            return Err(QueueError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }

        let logical = if index < 0 { len + index } else { index };
        Ok(self.physical(logical as usize))
    }

    /// Returns a reference to the element at logical `index`.  Negative
    /// indices count from the back, so `-1` is the last element.
    pub fn get(&self, index: impl DequeIndex) -> Result<&T> {
        let slot = self.locate(index)?;
        Ok(self.slots[slot]
            .as_ref()
            .expect("live slots are always occupied"))
    }

    /// Returns a mutable reference to the element at logical `index`.
    pub fn get_mut(&mut self, index: impl DequeIndex) -> Result<&mut T> {
        let slot = self.locate(index)?;
        Ok(self.slots[slot]
            .as_mut()
            .expect("live slots are always occupied"))
    }

    /// Replaces the element at logical `index` with `item`, and returns
    /// the previous element.
    pub fn set(&mut self, index: impl DequeIndex, item: T) -> Result<T> {
        Ok(std::mem::replace(self.get_mut(index)?, item))
    }

    /// Makes room for one more element, growing the buffer if needed.
    fn reserve_one(&mut self) -> Result<()> {
        if self.len < self.capacity() {
            return Ok(());
        }

        let doubled = 2 * self.capacity();
        let capacity = match self.max_length {
            Some(max) if self.capacity() >= max.get() => {
                return Err(QueueError::CapacityExceeded { max_length: max })
            }
            Some(max) => doubled.min(max.get()),
            None => doubled,
        };

        self.resize(capacity);
        Ok(())
    }

    fn resize(&mut self, capacity: usize) {
        self.slots = relayout(&mut self.slots, self.front, self.len, capacity);
        self.front = 0;
    }

    /// Adds `item` to the front of the deque.
    pub fn add_first(&mut self, item: T) -> Result<()> {
        self.reserve_one()?;
        self.push_front_unchecked(item);
        self.check_rep();
        Ok(())
    }

    /// Adds `item` to the back of the deque.
    pub fn add_last(&mut self, item: T) -> Result<()> {
        self.reserve_one()?;
        self.push_back_unchecked(item);
        self.check_rep();
        Ok(())
    }

    /// Inserts at the front; the caller guarantees a vacant slot.
    #[inline(always)]
    fn push_front_unchecked(&mut self, item: T) {
        debug_assert!(self.len < self.capacity());
        self.front = (self.front + self.capacity() - 1) % self.capacity();
        self.slots[self.front] = Some(item);
        self.len += 1;
    }

    /// Inserts at the back; the caller guarantees a vacant slot.
    #[inline(always)]
    fn push_back_unchecked(&mut self, item: T) {
        debug_assert!(self.len < self.capacity());
        let last_in_line = self.physical(self.len);
        self.slots[last_in_line] = Some(item);
        self.len += 1;
    }

    /// Removes and returns the element at the front of the deque.
    pub fn delete_first(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(QueueError::Empty);
        }

        let ret = self.slots[self.front].take().ok_or(QueueError::Empty)?;
        self.front = self.physical(1);
        self.len -= 1;
        self.check_rep();
        Ok(ret)
    }

    /// Removes and returns the element at the back of the deque.
    pub fn delete_last(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(QueueError::Empty);
        }

        let last_in_line = self.physical(self.len - 1);
        let ret = self.slots[last_in_line].take().ok_or(QueueError::Empty)?;
        self.len -= 1;
        self.check_rep();
        Ok(ret)
    }

    /// Returns a reference to the element at the front of the deque.
    pub fn first(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(QueueError::Empty);
        }

        self.slots[self.front].as_ref().ok_or(QueueError::Empty)
    }

    /// Returns a reference to the element at the back of the deque.
    pub fn last(&self) -> Result<&T> {
        if self.is_empty() {
            return Err(QueueError::Empty);
        }

        self.slots[self.physical(self.len - 1)]
            .as_ref()
            .ok_or(QueueError::Empty)
    }

    /// Removes every element, and restores the buffer to its initial
    /// capacity.
    pub fn clear(&mut self) {
        self.slots = vacant_slots(Self::initial_capacity(self.max_length));
        self.front = 0;
        self.len = 0;
    }

    /// Rotates the deque `n` steps to the right (the last element becomes
    /// the first).  If `n` is negative, rotates to the left.
    ///
    /// Rotating an empty deque by a non-zero `n` fails with
    /// [`QueueError::Empty`], since there is no element to move.
    pub fn rotate(&mut self, n: isize) -> Result<()> {
        if self.is_empty() {
            return if n == 0 { Ok(()) } else { Err(QueueError::Empty) };
        }

        // A full turn is the identity.
        let steps = n.unsigned_abs() % self.len;
        for _ in 0..steps {
            if n >= 0 {
                let last_in_line = self.physical(self.len - 1);
                let item = self.slots[last_in_line].take();
                self.front = (self.front + self.capacity() - 1) % self.capacity();
                self.slots[self.front] = item;
            } else {
                let item = self.slots[self.front].take();
                let last_in_line = self.physical(self.len);
                self.slots[last_in_line] = item;
                self.front = self.physical(1);
            }
        }

        self.check_rep();
        Ok(())
    }

    #[inline(always)]
    #[cfg_attr(test, mutants::skip)] // removing checks will not be detected.
    fn check_rep(&self) {
        debug_assert!(self.len <= self.capacity());
        debug_assert!(self.front < self.capacity());
        debug_assert!(self
            .max_length
            .map_or(true, |max| self.capacity() <= max.get()));
        debug_assert!(self.len == 0 || self.slots[self.front].is_some());
        debug_assert!(self.len == 0 || self.slots[self.physical(self.len - 1)].is_some());
        debug_assert!(
            self.len == self.capacity() || self.slots[self.physical(self.len)].is_none()
        );
    }
}

impl<T: PartialEq> ArrayDeque<T> {
    /// Returns the logical index of the first element equal to `value`.
    fn position(&self, value: &T) -> Option<usize> {
        (0..self.len).find(|&i| self.slots[self.physical(i)].as_ref() == Some(value))
    }

    /// Returns the number of elements equal to `value`.
    pub fn count(&self, value: &T) -> usize {
        (0..self.len)
            .filter(|&i| self.slots[self.physical(i)].as_ref() == Some(value))
            .count()
    }

    pub fn contains(&self, value: &T) -> bool {
        self.position(value).is_some()
    }

    /// Removes and returns the first element (from the front) equal to
    /// `value`.
    ///
    /// The hole is closed by shifting whichever side of it is shorter,
    /// so removal at logical index `i` moves `min(i, len - i)` elements.
    pub fn remove(&mut self, value: &T) -> Result<T> {
        let idx = self.position(value).ok_or(QueueError::ValueNotFound)?;
        let hole = self.physical(idx);
        let ret = self.slots[hole].take().ok_or(QueueError::ValueNotFound)?;

        if idx > self.len / 2 {
            // Pull the tail forward over the hole.
            for i in idx..self.len - 1 {
                let (current, next) = (self.physical(i), self.physical(i + 1));
                self.slots[current] = self.slots[next].take();
            }
        } else {
            // Push the head backward over the hole.
            for i in (1..=idx).rev() {
                let (current, prev) = (self.physical(i), self.physical(i - 1));
                self.slots[current] = self.slots[prev].take();
            }
            self.front = self.physical(1);
        }

        self.len -= 1;
        self.check_rep();
        Ok(ret)
    }
}

impl<T> Default for ArrayDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::ops::Index<isize> for ArrayDeque<T> {
    type Output = T;

    /// Panics if `index` is out of range.
    #[inline(always)]
    fn index(&self, index: isize) -> &T {
        match self.get(index) {
            Ok(item) => item,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T> std::ops::IndexMut<isize> for ArrayDeque<T> {
    #[inline(always)]
    fn index_mut(&mut self, index: isize) -> &mut T {
        match self.get_mut(index) {
            Ok(item) => item,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for ArrayDeque<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries((0..self.len).filter_map(|i| self.slots[self.physical(i)].as_ref()))
            .finish()
    }
}

#[cfg(test)]
fn contents<T: Clone>(deque: &ArrayDeque<T>) -> Vec<T> {
    (0..deque.len()).map(|i| deque[i as isize].clone()).collect()
}

#[cfg(test)]
fn bounded<T>(max_length: usize) -> ArrayDeque<T> {
    ArrayDeque::with_max_length(NonZeroUsize::new(max_length).unwrap())
}

#[test]
fn test_happy_path_miri() {
    let mut deque = ArrayDeque::new();

    deque.add_last(1).unwrap();
    deque.add_last(2).unwrap();
    deque.add_last(3).unwrap();

    assert_eq!(deque.delete_first(), Ok(1));
    assert_eq!(deque.first(), Ok(&2));
    assert_eq!(deque.last(), Ok(&3));
    assert_eq!(deque.len(), 2);
}

#[test]
fn test_empty_errors_miri() {
    let mut deque: ArrayDeque<u32> = ArrayDeque::new();

    assert!(deque.is_empty());
    assert_eq!(deque.first(), Err(QueueError::Empty));
    assert_eq!(deque.last(), Err(QueueError::Empty));
    assert_eq!(deque.delete_first(), Err(QueueError::Empty));
    assert_eq!(deque.delete_last(), Err(QueueError::Empty));
    assert_eq!(
        deque.get(0),
        Err(QueueError::IndexOutOfBounds { index: 0, len: 0 })
    );

    // Nothing moved.
    assert_eq!(deque.len(), 0);
    assert_eq!(deque.capacity(), DEFAULT_CAPACITY);
    deque.add_first(4).unwrap();
    assert_eq!(contents(&deque), [4]);
}

#[test]
fn test_both_ends_miri() {
    let mut deque = ArrayDeque::new();

    deque.add_first(2).unwrap();
    deque.add_last(3).unwrap();
    deque.add_first(1).unwrap();
    deque.add_last(4).unwrap();
    assert_eq!(contents(&deque), [1, 2, 3, 4]);
    assert_eq!(format!("{:?}", deque), "[1, 2, 3, 4]");

    assert_eq!(deque.delete_last(), Ok(4));
    assert_eq!(deque.delete_first(), Ok(1));
    assert_eq!(deque.first(), Ok(&2));
    assert_eq!(deque.last(), Ok(&3));

    assert_eq!(deque.delete_last(), Ok(3));
    assert_eq!(deque.first(), deque.last());
    assert_eq!(deque.delete_first(), Ok(2));
    assert!(deque.is_empty());
}

#[test]
fn test_single_resize_miri() {
    let mut deque = ArrayDeque::new();

    for i in 0..DEFAULT_CAPACITY {
        deque.add_last(i).unwrap();
    }
    assert_eq!(deque.capacity(), DEFAULT_CAPACITY);

    deque.add_last(DEFAULT_CAPACITY).unwrap();
    assert_eq!(deque.capacity(), 2 * DEFAULT_CAPACITY);
    assert_eq!(contents(&deque), (0..=DEFAULT_CAPACITY).collect::<Vec<_>>());
}

#[test]
fn test_resize_wrapped_front_miri() {
    let mut deque = ArrayDeque::new();

    // Fill from the front so that the live range wraps around slot 0.
    for i in 0..5 {
        deque.add_last(i).unwrap();
    }
    for i in 1..=5 {
        deque.add_first(-i).unwrap();
    }
    let before = contents(&deque);
    assert_eq!(before, [-5, -4, -3, -2, -1, 0, 1, 2, 3, 4]);

    deque.add_first(-6).unwrap();
    assert_eq!(deque.capacity(), 20);
    assert_eq!(&contents(&deque)[1..], &before[..]);
    assert_eq!(deque.first(), Ok(&-6));
}

#[test]
fn test_negative_index_miri() {
    let mut deque = ArrayDeque::new();
    for i in 0..4 {
        deque.add_first(i).unwrap();
    }

    let n = deque.len() as isize;
    assert_eq!(deque.get(-1), deque.get(n - 1));
    assert_eq!(deque.get(-n), deque.get(0));
    assert_eq!(deque[-1], 0);
    assert_eq!(deque[-4], 3);

    assert_eq!(
        deque.get(-5),
        Err(QueueError::IndexOutOfBounds { index: -5, len: 4 })
    );
    assert_eq!(
        deque.get(4usize),
        Err(QueueError::IndexOutOfBounds { index: 4, len: 4 })
    );
}

#[test]
fn test_index_argument_errors_miri() {
    let mut deque = ArrayDeque::new();
    deque.add_last('a').unwrap();

    assert_eq!(deque.get(u64::MAX), Err(QueueError::InvalidArgument));
    assert_eq!(deque.get(0..1), Err(QueueError::UnsupportedOperation));
    assert_eq!(deque.set(.., 'b'), Err(QueueError::UnsupportedOperation));
    assert_eq!(
        deque.set(1, 'b'),
        Err(QueueError::IndexOutOfBounds { index: 1, len: 1 })
    );
    assert_eq!(contents(&deque), ['a']);
}

#[test]
fn test_set_miri() {
    let mut deque = ArrayDeque::new();
    for i in 0..3 {
        deque.add_last(i).unwrap();
    }

    assert_eq!(deque.set(-1, 20), Ok(2));
    assert_eq!(deque.set(0u8, 10), Ok(0));
    *deque.get_mut(1).unwrap() = 15;
    deque[-2] += 1;
    assert_eq!(contents(&deque), [10, 16, 20]);
}

#[test]
#[should_panic]
fn test_index_out_of_range_panics() {
    let deque: ArrayDeque<u8> = ArrayDeque::new();
    let _ = deque[0];
}

#[test]
fn test_count_and_remove_back_half_miri() {
    let mut deque = ArrayDeque::new();
    for x in [1, 2, 3, 4, 5, 6, 5] {
        deque.add_last(x).unwrap();
    }

    assert_eq!(deque.count(&5), 2);
    assert_eq!(deque.remove(&5), Ok(5));
    assert_eq!(deque.count(&5), 1);
    assert_eq!(contents(&deque), [1, 2, 3, 4, 6, 5]);
    assert_eq!(deque.last(), Ok(&5));
}

#[test]
fn test_remove_front_half_miri() {
    let mut deque = ArrayDeque::new();
    for x in [1, 2, 3, 4, 5, 6, 7] {
        deque.add_last(x).unwrap();
    }

    assert_eq!(deque.remove(&2), Ok(2));
    assert_eq!(contents(&deque), [1, 3, 4, 5, 6, 7]);
    assert_eq!(deque.remove(&1), Ok(1));
    assert_eq!(contents(&deque), [3, 4, 5, 6, 7]);
    assert_eq!(deque.remove(&7), Ok(7));
    assert_eq!(contents(&deque), [3, 4, 5, 6]);
    assert_eq!(deque.first(), Ok(&3));
    assert_eq!(deque.last(), Ok(&6));
}

#[test]
fn test_remove_wrapped_miri() {
    let mut deque = ArrayDeque::new();
    for x in 0..5 {
        deque.add_last(x).unwrap();
        deque.add_first(-x - 1).unwrap();
    }
    assert_eq!(contents(&deque), [-5, -4, -3, -2, -1, 0, 1, 2, 3, 4]);

    // Both halves, across the physical wrap point.
    assert_eq!(deque.remove(&-1), Ok(-1));
    assert_eq!(deque.remove(&2), Ok(2));
    assert_eq!(contents(&deque), [-5, -4, -3, -2, 0, 1, 3, 4]);

    // The freed slots are usable again without growing.
    deque.add_first(-6).unwrap();
    deque.add_last(5).unwrap();
    assert_eq!(deque.capacity(), DEFAULT_CAPACITY);
    assert_eq!(contents(&deque), [-6, -5, -4, -3, -2, 0, 1, 3, 4, 5]);
}

#[test]
fn test_remove_missing_miri() {
    let mut deque = ArrayDeque::new();
    for x in [1, 2, 3] {
        deque.add_last(x).unwrap();
    }

    assert_eq!(deque.remove(&4), Err(QueueError::ValueNotFound));
    assert_eq!(contents(&deque), [1, 2, 3]);
    assert!(deque.contains(&2));
    assert!(!deque.contains(&4));

    let mut empty: ArrayDeque<u8> = ArrayDeque::new();
    assert_eq!(empty.remove(&0), Err(QueueError::ValueNotFound));
}

#[test]
fn test_remove_single_miri() {
    let mut deque = ArrayDeque::new();
    deque.add_last("x").unwrap();

    assert_eq!(deque.remove(&"x"), Ok("x"));
    assert!(deque.is_empty());
    assert_eq!(deque.first(), Err(QueueError::Empty));
}

#[test]
fn test_rotate_miri() {
    let mut deque = ArrayDeque::new();
    for x in 0..5 {
        deque.add_last(x).unwrap();
    }

    deque.rotate(1).unwrap();
    assert_eq!(contents(&deque), [4, 0, 1, 2, 3]);
    deque.rotate(-1).unwrap();
    assert_eq!(contents(&deque), [0, 1, 2, 3, 4]);
    deque.rotate(-2).unwrap();
    assert_eq!(contents(&deque), [2, 3, 4, 0, 1]);
    deque.rotate(2).unwrap();
    assert_eq!(contents(&deque), [0, 1, 2, 3, 4]);

    // More steps than elements.
    deque.rotate(7).unwrap();
    assert_eq!(contents(&deque), [3, 4, 0, 1, 2]);
    deque.rotate(-7).unwrap();
    assert_eq!(contents(&deque), [0, 1, 2, 3, 4]);

    deque.rotate(0).unwrap();
    assert_eq!(contents(&deque), [0, 1, 2, 3, 4]);
}

#[test]
fn test_rotate_full_buffer_miri() {
    let mut deque = ArrayDeque::new();
    for x in 0..DEFAULT_CAPACITY {
        deque.add_last(x).unwrap();
    }

    for k in [1, 3, 9, 10, 11, 25] {
        deque.rotate(k).unwrap();
        deque.rotate(-k).unwrap();
        assert_eq!(contents(&deque), (0..DEFAULT_CAPACITY).collect::<Vec<_>>());
    }
    assert_eq!(deque.capacity(), DEFAULT_CAPACITY);
}

#[test]
fn test_rotate_empty_miri() {
    let mut deque: ArrayDeque<u8> = ArrayDeque::new();

    assert_eq!(deque.rotate(1), Err(QueueError::Empty));
    assert_eq!(deque.rotate(-3), Err(QueueError::Empty));
    // Zero steps never needs an element.
    assert_eq!(deque.rotate(0), Ok(()));

    // Nothing moved.
    assert!(deque.is_empty());
    assert_eq!(deque.capacity(), DEFAULT_CAPACITY);
    deque.add_last(7).unwrap();
    deque.rotate(1).unwrap();
    assert_eq!(contents(&deque), [7]);
}

#[test]
fn test_clear_miri() {
    let mut deque = ArrayDeque::new();
    for x in 0..30 {
        deque.add_last(x).unwrap();
    }
    assert_eq!(deque.capacity(), 40);

    deque.clear();
    assert!(deque.is_empty());
    assert_eq!(deque.capacity(), DEFAULT_CAPACITY);
    assert_eq!(deque.first(), Err(QueueError::Empty));

    let mut small = bounded::<u8>(3);
    small.add_last(1).unwrap();
    small.clear();
    assert_eq!(small.capacity(), 3);
}

#[test]
fn test_bounded_small_miri() {
    let mut deque = bounded(3);

    assert_eq!(deque.capacity(), 3);
    assert!(deque.is_full());
    assert_eq!(deque.max_length(), NonZeroUsize::new(3));

    deque.add_last(1).unwrap();
    deque.add_last(2).unwrap();
    deque.add_first(0).unwrap();

    let overflow = QueueError::CapacityExceeded {
        max_length: NonZeroUsize::new(3).unwrap(),
    };
    assert_eq!(deque.add_last(3), Err(overflow));
    assert_eq!(deque.add_first(-1), Err(overflow));
    assert_eq!(contents(&deque), [0, 1, 2]);
    assert_eq!(deque.capacity(), 3);

    // Rotation never needs room.
    deque.rotate(1).unwrap();
    assert_eq!(contents(&deque), [2, 0, 1]);

    assert_eq!(deque.delete_first(), Ok(2));
    deque.add_last(3).unwrap();
    assert_eq!(contents(&deque), [0, 1, 3]);
}

#[test]
fn test_bounded_growth_clamped_miri() {
    let mut deque = bounded(15);

    assert_eq!(deque.capacity(), DEFAULT_CAPACITY);
    assert!(!deque.is_full());

    for x in 0..15 {
        deque.add_last(x).unwrap();
    }
    assert_eq!(deque.capacity(), 15);
    assert!(deque.is_full());
    assert!(deque.add_last(15).is_err());
    assert_eq!(contents(&deque), (0..15).collect::<Vec<_>>());
}

#[test]
fn test_unbounded_never_full_miri() {
    let mut deque = ArrayDeque::new();

    for x in 0..100 {
        deque.add_first(x).unwrap();
        assert!(!deque.is_full());
    }
    assert_eq!(deque.len(), 100);
    assert_eq!(deque.capacity(), 160);
}

#[test]
fn test_drops_on_removal_miri() {
    use std::rc::Rc;

    let item = Rc::new(());
    let mut deque = ArrayDeque::new();
    for _ in 0..4 {
        deque.add_last(item.clone()).unwrap();
    }
    assert_eq!(Rc::strong_count(&item), 5);

    drop(deque.delete_first());
    drop(deque.delete_last());
    drop(deque.remove(&item));
    assert_eq!(Rc::strong_count(&item), 2);

    deque.clear();
    assert_eq!(Rc::strong_count(&item), 1);
}

/// Mirrors a random sequence of operations against [`std::collections::VecDeque`].
#[test]
fn test_against_vecdeque() {
    use std::collections::VecDeque;

    let mut expected = VecDeque::new();
    let mut deque = ArrayDeque::new();

    // Small deterministic LCG; we only need a mix of operations.
    let mut state = 0x2545F4914F6CDD1Du64;
    for step in 0..5000u64 {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let value = (state >> 33) % 16;

        match (state >> 60) % 7 {
            0 | 1 => {
                deque.add_last(value).unwrap();
                expected.push_back(value);
            }
            2 => {
                deque.add_first(value).unwrap();
                expected.push_front(value);
            }
            3 => assert_eq!(deque.delete_first().ok(), expected.pop_front()),
            4 => assert_eq!(deque.delete_last().ok(), expected.pop_back()),
            5 => {
                let removed = deque.remove(&value).ok();
                let idx = expected.iter().position(|x| *x == value);
                assert_eq!(removed, idx.and_then(|i| expected.remove(i)));
            }
            _ => {
                let n = (step % 11) as isize - 5;
                let rotated = deque.rotate(n);
                if expected.is_empty() && n != 0 {
                    assert_eq!(rotated, Err(QueueError::Empty));
                } else {
                    assert_eq!(rotated, Ok(()));
                }
                if !expected.is_empty() {
                    let k = n.unsigned_abs() % expected.len();
                    if n >= 0 {
                        expected.rotate_right(k);
                    } else {
                        expected.rotate_left(k);
                    }
                }
            }
        }

        assert_eq!(deque.len(), expected.len());
        assert_eq!(deque.count(&value), expected.iter().filter(|x| **x == value).count());
        assert_eq!(contents(&deque), expected.iter().copied().collect::<Vec<_>>());
    }
}
