//! Method syntax for the sequence primitives.

use super::primitives;
use crate::error::ListError;

/// Extension methods exposing the sequence primitives on slices.
///
/// `take_front`/`drop_front` are named to avoid clashing with
/// [`Iterator::take`] and friends.
///
/// # Examples
///
/// ```rust
/// use foldkit::sequence::SequenceExt;
///
/// let values = vec![1, 2, 3, 4];
/// assert_eq!(values.head(), Ok(1));
/// assert_eq!(values.last_element(), Ok(4));
/// assert_eq!(values.tail(), Ok(vec![2, 3, 4]));
/// assert_eq!(values.take_front(2), vec![1, 2]);
/// assert_eq!(values.drop_front(3), vec![4]);
/// ```
pub trait SequenceExt<T> {
    /// See [`head`](primitives::head).
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptySequence`] if the sequence is empty.
    fn head(&self) -> Result<T, ListError>;

    /// See [`tail`](primitives::tail).
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptySequence`] if the sequence is empty.
    fn tail(&self) -> Result<Vec<T>, ListError>;

    /// See [`last`](primitives::last).
    ///
    /// # Errors
    ///
    /// Returns [`ListError::EmptySequence`] if the sequence is empty.
    fn last_element(&self) -> Result<T, ListError>;

    /// See [`take`](primitives::take).
    fn take_front(&self, count: usize) -> Vec<T>;

    /// See [`drop`](primitives::drop).
    fn drop_front(&self, count: usize) -> Vec<T>;
}

impl<T: Clone> SequenceExt<T> for [T] {
    fn head(&self) -> Result<T, ListError> {
        primitives::head(self)
    }

    fn tail(&self) -> Result<Vec<T>, ListError> {
        primitives::tail(self)
    }

    fn last_element(&self) -> Result<T, ListError> {
        primitives::last(self)
    }

    fn take_front(&self, count: usize) -> Vec<T> {
        primitives::take(self, count)
    }

    fn drop_front(&self, count: usize) -> Vec<T> {
        primitives::drop(self, count)
    }
}
