//! Element-wise transforms: `map` and `filter`.

use super::foldl;

/// Applies `function` to every element, in order.
///
/// The output has the same length as the input and may have a different
/// element type.
///
/// # Examples
///
/// ```rust
/// use foldkit::combinator::map;
///
/// assert_eq!(map(|value: &i32| value * 2, &[1, 2, 3]), vec![2, 4, 6]);
/// assert_eq!(map(|value: &i32| value.to_string(), &[7]), vec!["7"]);
/// ```
pub fn map<A, B, F>(mut function: F, sequence: &[A]) -> Vec<B>
where
    F: FnMut(&A) -> B,
{
    foldl(
        |mut mapped: Vec<B>, element| {
            mapped.push(function(element));
            mapped
        },
        Vec::with_capacity(sequence.len()),
        sequence,
    )
}

/// Returns the elements satisfying `predicate`, preserving their order.
///
/// # Examples
///
/// ```rust
/// use foldkit::combinator::filter;
///
/// let evens = filter(|value: &i32| value % 2 == 0, &[1, 2, 3, 4, 5, 6]);
/// assert_eq!(evens, vec![2, 4, 6]);
/// ```
pub fn filter<A, P>(mut predicate: P, sequence: &[A]) -> Vec<A>
where
    A: Clone,
    P: FnMut(&A) -> bool,
{
    foldl(
        |mut kept: Vec<A>, element| {
            if predicate(element) {
                kept.push(element.clone());
            }
            kept
        },
        Vec::new(),
        sequence,
    )
}
