//! The `Compare` trait and its implementations.
//!
//! Primitive kinds compare by their native order. Operands always share one
//! concrete type: an `i8` never meets an `i64`, so there is no widening and
//! no silent drop to the equality fallback.

use super::Comparison;

/// Three-way comparison between two values of the same type.
///
/// Implemented for every integer width, both float widths, `char`, `bool`,
/// `str` and `String`, and through references and `Box`. Types without a
/// natural order can opt into the equality fallback with
/// [`impl_compare_by_equality!`](crate::impl_compare_by_equality) or by
/// wrapping values in [`ByEquality`].
///
/// # Examples
///
/// ```rust
/// use foldkit::ordering::{Compare, Comparison};
///
/// assert_eq!(3_u8.compare(&7), Comparison::Less);
/// assert_eq!("pear".compare("apple"), Comparison::Greater);
/// assert_eq!(false.compare(&true), Comparison::Less);
/// ```
pub trait Compare {
    /// Compares `self` against `other`.
    fn compare(&self, other: &Self) -> Comparison;
}

/// Compares two values of the same type.
///
/// # Examples
///
/// ```rust
/// use foldkit::ordering::{Comparison, compare};
///
/// assert_eq!(compare(&5, &10), Comparison::Less);
/// assert_eq!(compare(&"banana", &"apple"), Comparison::Greater);
/// assert_eq!(compare(&true, &true), Comparison::Equal);
/// ```
#[inline]
pub fn compare<T: Compare + ?Sized>(left: &T, right: &T) -> Comparison {
    left.compare(right)
}

/// Compares two values by equality alone.
///
/// Equal values yield [`Comparison::Equal`]; unequal values *always* yield
/// [`Comparison::Greater`], whichever side is passed first. This is not a
/// total order. `maximum` over such values keeps the first element and
/// `minimum` keeps the last one that differs from the running minimum.
///
/// # Examples
///
/// ```rust
/// use foldkit::ordering::{Comparison, compare_by_equality};
///
/// assert_eq!(compare_by_equality(&[1, 2], &[1, 2]), Comparison::Equal);
/// assert_eq!(compare_by_equality(&[1, 2], &[3, 4]), Comparison::Greater);
/// assert_eq!(compare_by_equality(&[3, 4], &[1, 2]), Comparison::Greater);
/// ```
#[inline]
pub fn compare_by_equality<T: PartialEq + ?Sized>(left: &T, right: &T) -> Comparison {
    if left == right {
        Comparison::Equal
    } else {
        Comparison::Greater
    }
}

/// Wraps a value so that it compares by equality.
///
/// # Examples
///
/// ```rust
/// use foldkit::ordering::{ByEquality, Comparison, compare};
///
/// #[derive(PartialEq)]
/// struct Person {
///     name: &'static str,
///     age: u32,
/// }
///
/// let alice = ByEquality(Person { name: "Alice", age: 30 });
/// let bob = ByEquality(Person { name: "Bob", age: 25 });
///
/// assert_eq!(compare(&alice, &alice), Comparison::Equal);
/// assert_eq!(compare(&alice, &bob), Comparison::Greater);
/// assert_eq!(compare(&bob, &alice), Comparison::Greater);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ByEquality<T>(pub T);

impl<T> ByEquality<T> {
    /// Unwraps the inner value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: PartialEq> Compare for ByEquality<T> {
    #[inline]
    fn compare(&self, other: &Self) -> Comparison {
        compare_by_equality(&self.0, &other.0)
    }
}

/// Implements [`Compare`] for one or more `PartialEq` types using the
/// equality fallback.
///
/// # Examples
///
/// ```rust
/// use foldkit::impl_compare_by_equality;
/// use foldkit::ordering::{Comparison, compare};
///
/// #[derive(PartialEq)]
/// enum Color {
///     Red,
///     Blue,
/// }
///
/// impl_compare_by_equality!(Color);
///
/// assert_eq!(compare(&Color::Red, &Color::Red), Comparison::Equal);
/// assert_eq!(compare(&Color::Blue, &Color::Red), Comparison::Greater);
/// ```
#[macro_export]
macro_rules! impl_compare_by_equality {
    ($($implementor:ty),+ $(,)?) => {
        $(
            impl $crate::ordering::Compare for $implementor {
                #[inline]
                fn compare(&self, other: &Self) -> $crate::ordering::Comparison {
                    $crate::ordering::compare_by_equality(self, other)
                }
            }
        )+
    };
}

macro_rules! impl_compare_natively {
    ($($primitive:ty),+ $(,)?) => {
        $(
            impl Compare for $primitive {
                #[inline]
                fn compare(&self, other: &Self) -> Comparison {
                    Comparison::from_tests(self < other, self > other)
                }
            }
        )+
    };
}

impl_compare_natively!(i8, i16, i32, i64, i128, isize);
impl_compare_natively!(u8, u16, u32, u64, u128, usize);
impl_compare_natively!(f32, f64);
impl_compare_natively!(char, bool);
impl_compare_natively!(str, String);

impl_compare_by_equality!(());

impl<T: Compare + ?Sized> Compare for &T {
    #[inline]
    fn compare(&self, other: &Self) -> Comparison {
        (**self).compare(*other)
    }
}

impl<T: Compare + ?Sized> Compare for Box<T> {
    #[inline]
    fn compare(&self, other: &Self) -> Comparison {
        (**self).compare(&**other)
    }
}
