//! The three-way comparison result.

use std::fmt;

/// The result of a three-way comparison.
///
/// Every pair of comparable values maps to exactly one variant. Unlike
/// [`std::cmp::Ordering`], a `Comparison` may come from the equality
/// fallback (see [`compare_by_equality`](super::compare_by_equality)), so
/// `compare(a, b) == Greater` does not imply `compare(b, a) == Less`.
///
/// # Examples
///
/// ```rust
/// use foldkit::ordering::{Comparison, compare};
///
/// assert_eq!(compare(&5, &10), Comparison::Less);
/// assert_eq!(Comparison::Less.to_string(), "LT");
/// assert_eq!(Comparison::Less.reverse(), Comparison::Greater);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Comparison {
    /// The left operand orders before the right operand.
    Less,
    /// The operands are equal.
    Equal,
    /// The left operand orders after the right operand, or the operands
    /// differ under the equality fallback.
    Greater,
}

impl Comparison {
    /// Returns `true` for [`Comparison::Less`].
    #[inline]
    #[must_use]
    pub const fn is_less(self) -> bool {
        matches!(self, Self::Less)
    }

    /// Returns `true` for [`Comparison::Equal`].
    #[inline]
    #[must_use]
    pub const fn is_equal(self) -> bool {
        matches!(self, Self::Equal)
    }

    /// Returns `true` for [`Comparison::Greater`].
    #[inline]
    #[must_use]
    pub const fn is_greater(self) -> bool {
        matches!(self, Self::Greater)
    }

    /// Swaps `Less` and `Greater`, leaving `Equal` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldkit::ordering::Comparison;
    ///
    /// assert_eq!(Comparison::Greater.reverse(), Comparison::Less);
    /// assert_eq!(Comparison::Equal.reverse(), Comparison::Equal);
    /// ```
    #[inline]
    #[must_use]
    pub const fn reverse(self) -> Self {
        match self {
            Self::Less => Self::Greater,
            Self::Equal => Self::Equal,
            Self::Greater => Self::Less,
        }
    }

    /// Builds a `Comparison` from the outcome of `<` and `>` tests.
    ///
    /// Neither test holding (as with a NaN operand) yields `Equal`.
    #[inline]
    pub(crate) const fn from_tests(less: bool, greater: bool) -> Self {
        if less {
            Self::Less
        } else if greater {
            Self::Greater
        } else {
            Self::Equal
        }
    }
}

impl From<std::cmp::Ordering> for Comparison {
    fn from(ordering: std::cmp::Ordering) -> Self {
        match ordering {
            std::cmp::Ordering::Less => Self::Less,
            std::cmp::Ordering::Equal => Self::Equal,
            std::cmp::Ordering::Greater => Self::Greater,
        }
    }
}

impl From<Comparison> for std::cmp::Ordering {
    fn from(comparison: Comparison) -> Self {
        match comparison {
            Comparison::Less => Self::Less,
            Comparison::Equal => Self::Equal,
            Comparison::Greater => Self::Greater,
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Less => "LT",
            Self::Equal => "EQ",
            Self::Greater => "GT",
        };
        formatter.write_str(symbol)
    }
}

static_assertions::assert_impl_all!(Comparison: Send, Sync, Copy);
