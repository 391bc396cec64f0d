//! An immutable two-element product type.

use std::fmt;

/// An immutable ordered pair of two independently typed values.
///
/// Produced by [`zip`](crate::combinator::zip) and
/// [`flatten`](crate::aggregate::flatten).
///
/// # Examples
///
/// ```rust
/// use foldkit::sequence::{Pair, fst, snd};
///
/// let pair = Pair::new(1, "hello");
/// assert_eq!(*pair.first(), 1);
/// assert_eq!(*pair.second(), "hello");
/// assert_eq!(fst(&pair), 1);
/// assert_eq!(snd(&pair), "hello");
/// assert_eq!(pair.into_tuple(), (1, "hello"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pair<A, B> {
    first: A,
    second: B,
}

impl<A, B> Pair<A, B> {
    /// Creates a pair from its two components.
    #[inline]
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Returns a reference to the first component.
    #[inline]
    pub const fn first(&self) -> &A {
        &self.first
    }

    /// Returns a reference to the second component.
    #[inline]
    pub const fn second(&self) -> &B {
        &self.second
    }

    /// Returns a pair with the components swapped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldkit::sequence::Pair;
    ///
    /// assert_eq!(Pair::new('a', 1).swap(), Pair::new(1, 'a'));
    /// ```
    #[inline]
    pub fn swap(self) -> Pair<B, A> {
        Pair::new(self.second, self.first)
    }

    /// Consumes the pair, returning its components as a tuple.
    #[inline]
    pub fn into_tuple(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A, B> From<(A, B)> for Pair<A, B> {
    fn from((first, second): (A, B)) -> Self {
        Self::new(first, second)
    }
}

impl<A, B> From<Pair<A, B>> for (A, B) {
    fn from(pair: Pair<A, B>) -> Self {
        pair.into_tuple()
    }
}

impl<A: fmt::Display, B: fmt::Display> fmt::Display for Pair<A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "({}, {})", self.first, self.second)
    }
}

/// Returns a copy of the pair's first component.
#[inline]
pub fn fst<A: Clone, B>(pair: &Pair<A, B>) -> A {
    pair.first.clone()
}

/// Returns a copy of the pair's second component.
#[inline]
pub fn snd<A, B: Clone>(pair: &Pair<A, B>) -> B {
    pair.second.clone()
}

static_assertions::assert_impl_all!(Pair<i32, String>: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(Pair<std::rc::Rc<i32>, i32>: Send, Sync);
