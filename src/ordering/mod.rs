//! Three-way comparison.
//!
//! [`compare`] maps two values of one type to a [`Comparison`]. Dispatch is
//! resolved at compile time through the [`Compare`] trait: numeric kinds,
//! `char`, `bool` and text use their native order, and other types opt into
//! the equality fallback, under which unequal values always compare as
//! [`Comparison::Greater`].
//!
//! # Examples
//!
//! ```rust
//! use foldkit::ordering::{ByEquality, Comparison, compare};
//!
//! assert_eq!(compare(&5, &10), Comparison::Less);
//! assert_eq!(compare(&"banana", &"apple"), Comparison::Greater);
//! assert_eq!(compare(&true, &true), Comparison::Equal);
//!
//! let left = ByEquality((1, "one"));
//! let right = ByEquality((2, "two"));
//! assert_eq!(compare(&left, &right), Comparison::Greater);
//! ```

mod compare;
mod comparison;

pub use compare::{ByEquality, Compare, compare, compare_by_equality};
pub use comparison::Comparison;
