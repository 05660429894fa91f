//! The `error` module defines the single error vocabulary shared by
//! every container in the crate.
use std::num::NonZeroUsize;

use thiserror::Error;

/// Failures reported by queue and deque operations.
///
/// A failed operation never mutates the container it was called on.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum QueueError {
    /// Peek or removal on a container that holds no element.
    #[error("the container is empty")]
    Empty,
    /// Logical index outside `-len..len`.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfBounds { index: isize, len: usize },
    /// The index argument could not be interpreted as a logical offset.
    #[error("invalid index argument")]
    InvalidArgument,
    /// Multi-element (range) access.
    #[error("deque does not support slicing")]
    UnsupportedOperation,
    /// `remove` found no equal element.
    #[error("value not found in deque")]
    ValueNotFound,
    /// Insertion into a bounded deque that already holds `max_length` elements.
    #[error("deque is at its maximum length of {max_length}")]
    CapacityExceeded { max_length: NonZeroUsize },
}

pub type Result<T> = std::result::Result<T, QueueError>;

#[test]
fn test_display_miri() {
    assert_eq!(QueueError::Empty.to_string(), "the container is empty");
    assert_eq!(
        QueueError::IndexOutOfBounds { index: -4, len: 3 }.to_string(),
        "index -4 out of range for length 3"
    );
    assert_eq!(
        QueueError::CapacityExceeded {
            max_length: NonZeroUsize::new(5).unwrap()
        }
        .to_string(),
        "deque is at its maximum length of 5"
    );
}
