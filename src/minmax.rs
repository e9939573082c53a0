//! Simultaneous minimum & maximum by divide and conquer.
//!
//! Splitting the range in half and combining the two partial answers costs 2 comparisons per
//! split, and a pair at the bottom costs 1. That comes to `3n/2 - 2` comparisons when `n` is a
//! power of two, against `2n - 2` for scanning once for the minimum and once for the maximum.
use log::trace;
use thiserror::Error;

use crate::utils::min_max;


/// An inclusive `start..=end` range which can't be used on a sequence.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    #[error("range start ({start}) is after range end ({end})")]
    Reversed { start: usize, end: usize },

    #[error("range end ({end}) is out of bounds for a sequence of length {len}")]
    OutOfBounds { end: usize, len: usize },
}

/// Check that `start..=end` is a non-empty range inside a sequence of length `len`.
pub fn check_range(len: usize, start: usize, end: usize) -> Result<(), RangeError> {
    if start > end {
        return Err(RangeError::Reversed { start, end });
    }
    if end >= len {
        return Err(RangeError::OutOfBounds { end, len });
    }
    Ok(())
}

/// Return `(min, max)` of `seq[start..=end]`.
///
/// The range must be non-empty and in bounds (`start <= end < seq.len()`). It is not recovered
/// from: an invalid range panics.
///
/// ```
/// let (min, max) = minmax_select::minmax::find(&[3, 7, 1, 9, 5, 2, 8, 4, 6], 0, 8);
/// assert_eq!((min, max), (1, 9));
/// ```
pub fn find<T: PartialOrd + Clone>(seq: &[T], start: usize, end: usize) -> (T, T) {
    if let Err(e) = check_range(seq.len(), start, end) {
        panic!("Invalid range for min/max: {}", e);
    }
    let (lo, hi) = select(seq, start, end);
    (lo.clone(), hi.clone())
}

/// Like [`find`], but an invalid range is returned as an error rather than panicking.
pub fn try_find<T: PartialOrd + Clone>(
    seq: &[T],
    start: usize,
    end: usize,
) -> Result<(T, T), RangeError> {
    check_range(seq.len(), start, end)?;
    let (lo, hi) = select(seq, start, end);
    Ok((lo.clone(), hi.clone()))
}

/// `(min, max)` of the whole sequence, or `(None, None)` when it's empty.
pub fn find_or_empty<T: PartialOrd + Clone>(seq: &[T]) -> (Option<T>, Option<T>) {
    match find_all(seq) {
        Some((lo, hi)) => (Some(lo), Some(hi)),
        None => (None, None),
    }
}

/// `(min, max)` of the whole sequence, `None` when it's empty.
pub fn find_all<T: PartialOrd + Clone>(seq: &[T]) -> Option<(T, T)> {
    if seq.is_empty() {
        trace!("Empty sequence, there is no min or max");
        return None;
    }
    Some(find(seq, 0, seq.len() - 1))
}

/// Recursive step. The range has already been checked.
fn select<T: PartialOrd>(seq: &[T], start: usize, end: usize) -> (&T, &T) {
    if start == end {
        return (&seq[start], &seq[start]);
    }
    if end == start + 1 {
        return min_max(&seq[start], &seq[end]);
    }

    // floor((start+end)/2), left half gets the extra element
    let mid = start + (end - start) / 2;
    let (left_min, left_max) = select(seq, start, mid);
    let (right_min, right_max) = select(seq, mid + 1, end);

    let min = if left_min < right_min {
        left_min
    } else {
        right_min
    };
    let max = if left_max > right_max {
        left_max
    } else {
        right_max
    };
    (min, max)
}
