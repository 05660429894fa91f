//! Index arguments for [`crate::ArrayDeque`] element access.
//!
//! Any primitive integer is accepted as a logical index, as long as it
//! fits in an `isize`; negative values count from the back.  Range
//! arguments are recognised but rejected, since the deque does not hand
//! out multi-element views.
use std::ops::Range;
use std::ops::RangeFrom;
use std::ops::RangeFull;
use std::ops::RangeInclusive;
use std::ops::RangeTo;
use std::ops::RangeToInclusive;

use crate::QueueError;
use crate::Result;

/// Something that may name a single logical position in a deque.
pub trait DequeIndex {
    /// Returns the signed logical offset, or an error if `self` is not
    /// a single-position index.
    fn offset(self) -> Result<isize>;
}

macro_rules! integer_index {
    ($($ty:ty),*) => {
        $(
            impl DequeIndex for $ty {
                #[inline(always)]
                fn offset(self) -> Result<isize> {
                    isize::try_from(self).map_err(|_| QueueError::InvalidArgument)
                }
            }
        )*
    };
}

integer_index!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! range_index {
    ($($ty:ty),*) => {
        $(
            impl<T> DequeIndex for $ty {
                #[inline(always)]
                fn offset(self) -> Result<isize> {
                    Err(QueueError::UnsupportedOperation)
                }
            }
        )*
    };
}

range_index!(
    Range<T>,
    RangeFrom<T>,
    RangeInclusive<T>,
    RangeTo<T>,
    RangeToInclusive<T>
);

impl DequeIndex for RangeFull {
    #[inline(always)]
    fn offset(self) -> Result<isize> {
        Err(QueueError::UnsupportedOperation)
    }
}

#[test]
fn test_integer_offsets_miri() {
    assert_eq!(3u8.offset(), Ok(3));
    assert_eq!((-2i32).offset(), Ok(-2));
    assert_eq!(7usize.offset(), Ok(7));
    assert_eq!(u64::MAX.offset(), Err(QueueError::InvalidArgument));
    assert_eq!(i128::MIN.offset(), Err(QueueError::InvalidArgument));
}

#[test]
fn test_ranges_rejected_miri() {
    assert_eq!((0..2).offset(), Err(QueueError::UnsupportedOperation));
    assert_eq!((1..).offset(), Err(QueueError::UnsupportedOperation));
    assert_eq!((..=4).offset(), Err(QueueError::UnsupportedOperation));
    assert_eq!((..).offset(), Err(QueueError::UnsupportedOperation));
}
