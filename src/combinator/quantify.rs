//! Short-circuiting quantifiers.

/// Returns `true` if any element satisfies `predicate`.
///
/// Stops at the first satisfying element. An empty sequence yields `false`.
///
/// # Examples
///
/// ```rust
/// use foldkit::combinator::any;
///
/// assert!(any(|value: &i32| *value > 2, &[1, 2, 3]));
/// assert!(!any(|value: &i32| *value > 2, &[]));
/// ```
pub fn any<A, P>(predicate: P, sequence: &[A]) -> bool
where
    P: FnMut(&A) -> bool,
{
    sequence.iter().any(predicate)
}

/// Returns `true` if every element satisfies `predicate`.
///
/// Stops at the first failing element. An empty sequence yields `true`.
///
/// # Examples
///
/// ```rust
/// use foldkit::combinator::all;
///
/// assert!(all(|value: &i32| *value > 0, &[1, 2, 3]));
/// assert!(all(|value: &i32| *value > 0, &[]));
/// assert!(!all(|value: &i32| *value > 1, &[1, 2, 3]));
/// ```
pub fn all<A, P>(predicate: P, sequence: &[A]) -> bool
where
    P: FnMut(&A) -> bool,
{
    sequence.iter().all(predicate)
}
