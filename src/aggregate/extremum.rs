//! Extrema by three-way comparison.
//!
//! The running extremum is only replaced when a later element strictly beats
//! it, so ties resolve to the first occurrence. With the equality fallback,
//! where unequal values always compare as `Greater`, `maximum` never replaces
//! its first element while `minimum` moves to every element that differs from
//! the current one.

use crate::error::ListError;
use crate::ordering::{Compare, Comparison};

/// Returns the greatest element.
///
/// # Errors
///
/// Returns [`ListError::EmptySequence`] if `sequence` is empty.
///
/// # Examples
///
/// ```rust
/// use foldkit::aggregate::maximum;
///
/// assert_eq!(maximum(&[1, 5, 3, 9, 2]), Ok(9));
/// assert_eq!(maximum(&["pear", "apple", "zucchini"]), Ok("zucchini"));
/// ```
pub fn maximum<T: Compare + Clone>(sequence: &[T]) -> Result<T, ListError> {
    extremum(sequence, Comparison::Less, "maximum")
}

/// Returns the least element.
///
/// # Errors
///
/// Returns [`ListError::EmptySequence`] if `sequence` is empty.
///
/// # Examples
///
/// ```rust
/// use foldkit::aggregate::minimum;
///
/// assert_eq!(minimum(&["zebra", "apple", "banana"]), Ok("apple"));
/// assert_eq!(minimum(&[2.5, -1.0, 0.0]), Ok(-1.0));
/// ```
pub fn minimum<T: Compare + Clone>(sequence: &[T]) -> Result<T, ListError> {
    extremum(sequence, Comparison::Greater, "minimum")
}

/// Folds `sequence`, replacing the current best whenever
/// `compare(best, candidate) == replace_when`.
fn extremum<T: Compare + Clone>(
    sequence: &[T],
    replace_when: Comparison,
    operation: &'static str,
) -> Result<T, ListError> {
    let (first, rest) = sequence
        .split_first()
        .ok_or_else(|| failure!(ListError::EmptySequence { operation }))?;
    let best = rest.iter().fold(first, |best, candidate| {
        if best.compare(candidate) == replace_when {
            candidate
        } else {
            best
        }
    });
    Ok(best.clone())
}
