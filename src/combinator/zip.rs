//! Pairwise combination of two sequences.

use crate::sequence::Pair;

/// Combines elements of two sequences pairwise with `function`.
///
/// The output stops at the shorter sequence, so an empty input on either
/// side yields an empty `Vec`.
///
/// # Examples
///
/// ```rust
/// use foldkit::combinator::zip_with;
///
/// let add = |left: &i32, right: &i32| left + right;
/// assert_eq!(zip_with(add, &[1, 2, 3], &[4, 5, 6]), vec![5, 7, 9]);
/// assert_eq!(zip_with(add, &[1, 2, 3], &[10]), vec![11]);
/// assert!(zip_with(add, &[1, 2, 3], &[]).is_empty());
/// ```
pub fn zip_with<A, B, C, F>(mut function: F, left: &[A], right: &[B]) -> Vec<C>
where
    F: FnMut(&A, &B) -> C,
{
    left.iter().zip(right).map(|(first, second)| function(first, second)).collect()
}

/// Pairs up elements of two sequences.
///
/// # Examples
///
/// ```rust
/// use foldkit::combinator::zip;
/// use foldkit::sequence::Pair;
///
/// let pairs = zip(&[1, 2, 3], &["one", "two"]);
/// assert_eq!(pairs, vec![Pair::new(1, "one"), Pair::new(2, "two")]);
/// ```
pub fn zip<A: Clone, B: Clone>(left: &[A], right: &[B]) -> Vec<Pair<A, B>> {
    zip_with(
        |first: &A, second: &B| Pair::new(first.clone(), second.clone()),
        left,
        right,
    )
}
