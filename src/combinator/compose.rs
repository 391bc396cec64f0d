//! Function composition.

/// Composes two functions right-to-left: `compose(g, f)(x) == g(f(x))`.
///
/// # Examples
///
/// ```rust
/// use foldkit::combinator::compose;
///
/// let add_one = |value: i32| value + 1;
/// let double = |value: i32| value * 2;
///
/// let composed = compose(add_one, double);
/// assert_eq!(composed(5), 11); // add_one(double(5))
/// ```
pub fn compose<A, B, C, G, F>(outer: G, inner: F) -> impl Fn(A) -> C
where
    F: Fn(A) -> B,
    G: Fn(B) -> C,
{
    move |input| outer(inner(input))
}
