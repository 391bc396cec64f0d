//! Positional accessors and slicers.
//!
//! Accessors that need an element (`head`, `tail`, `last`) fail with
//! [`ListError::EmptySequence`] on empty input. Slicers (`take`, `drop`)
//! clamp their count to the sequence length and never fail.

use crate::error::ListError;

/// Returns the first element.
///
/// # Errors
///
/// Returns [`ListError::EmptySequence`] if `sequence` is empty.
///
/// # Examples
///
/// ```rust
/// use foldkit::sequence::head;
///
/// assert_eq!(head(&[1, 2, 3]), Ok(1));
/// assert!(head::<i32>(&[]).is_err());
/// ```
pub fn head<T: Clone>(sequence: &[T]) -> Result<T, ListError> {
    sequence
        .first()
        .cloned()
        .ok_or_else(|| failure!(ListError::EmptySequence { operation: "head" }))
}

/// Returns every element except the first.
///
/// A one-element sequence yields an empty `Vec`.
///
/// # Errors
///
/// Returns [`ListError::EmptySequence`] if `sequence` is empty.
///
/// # Examples
///
/// ```rust
/// use foldkit::sequence::tail;
///
/// assert_eq!(tail(&[1, 2, 3]), Ok(vec![2, 3]));
/// assert_eq!(tail(&[1]), Ok(vec![]));
/// ```
pub fn tail<T: Clone>(sequence: &[T]) -> Result<Vec<T>, ListError> {
    match sequence.split_first() {
        Some((_, rest)) => Ok(rest.to_vec()),
        None => Err(failure!(ListError::EmptySequence { operation: "tail" })),
    }
}

/// Returns the final element.
///
/// # Errors
///
/// Returns [`ListError::EmptySequence`] if `sequence` is empty.
///
/// # Examples
///
/// ```rust
/// use foldkit::sequence::last;
///
/// assert_eq!(last(&["a", "b", "c"]), Ok("c"));
/// ```
pub fn last<T: Clone>(sequence: &[T]) -> Result<T, ListError> {
    sequence
        .last()
        .cloned()
        .ok_or_else(|| failure!(ListError::EmptySequence { operation: "last" }))
}

/// Returns the first `count` elements.
///
/// A `count` larger than the sequence yields the whole sequence; a `count`
/// of zero yields an empty `Vec`.
///
/// # Examples
///
/// ```rust
/// use foldkit::sequence::take;
///
/// assert_eq!(take(&[1, 2, 3, 4], 2), vec![1, 2]);
/// assert_eq!(take(&[1, 2], 10), vec![1, 2]);
/// assert_eq!(take(&[1, 2], 0), Vec::<i32>::new());
/// ```
pub fn take<T: Clone>(sequence: &[T], count: usize) -> Vec<T> {
    sequence[..count.min(sequence.len())].to_vec()
}

/// Returns the elements remaining after skipping exactly `count`.
///
/// A `count` of at least the sequence length yields an empty `Vec`; a `count`
/// of zero yields a copy of the whole sequence.
///
/// # Examples
///
/// ```rust
/// use foldkit::sequence::drop;
///
/// assert_eq!(drop(&[1, 2, 3, 4], 2), vec![3, 4]);
/// assert_eq!(drop(&[1, 2], 2), Vec::<i32>::new());
/// assert_eq!(drop(&[1, 2], 0), vec![1, 2]);
/// ```
pub fn drop<T: Clone>(sequence: &[T], count: usize) -> Vec<T> {
    sequence[count.min(sequence.len())..].to_vec()
}

/// Returns a `Vec` holding `count` clones of `value`.
///
/// # Examples
///
/// ```rust
/// use foldkit::sequence::replicate;
///
/// assert_eq!(replicate(3, 5), vec![5, 5, 5]);
/// assert!(replicate(0, "unused").is_empty());
/// ```
pub fn replicate<T: Clone>(count: usize, value: T) -> Vec<T> {
    vec![value; count]
}

/// Returns the number of elements.
#[inline]
pub const fn length<T>(sequence: &[T]) -> usize {
    sequence.len()
}
