//! # foldkit
//!
//! Haskell-style list combinators for Rust: positional accessors, folds,
//! zips, aggregation, three-way comparison and guarded selection.
//!
//! ## Overview
//!
//! - **Ordering**: [`Compare`](ordering::Compare) and the [`Comparison`](ordering::Comparison)
//!   result, with an opt-in equality fallback for types without a natural order
//! - **Guards**: ordered `(condition, producer)` selection that fails instead of falling through
//! - **Sequence primitives**: `head`, `tail`, `last`, `take`, `drop`, `replicate` and [`Pair`](sequence::Pair)
//! - **Combinators**: `map`, `filter`, `foldl`, `foldr`, `any`, `all`, `zip_with`, `zip`, `compose`
//! - **Aggregates**: `sum`, `product`, `maximum`, `minimum`, `flatten`, `flatten_with`
//!
//! Every operation reads its input through a borrowed slice or mapping and
//! returns freshly allocated output. Nothing is mutated in place and no
//! operation keeps state between calls.
//!
//! ## Feature Flags
//!
//! - `ordering`: Three-way comparison
//! - `guard`: Guarded selection
//! - `sequence`: Sequence primitives and `Pair`
//! - `combinator`: Folds, maps, zips and composition
//! - `aggregate`: Sums, products, extrema and mapping flattening
//! - `serde`: `Serialize`/`Deserialize` for `Pair` and `Comparison`
//! - `tracing`: Emit a `debug` event for every error the library returns
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use foldkit::prelude::*;
//!
//! let doubled = map(|value: &i32| value * 2, &[1, 2, 3]);
//! assert_eq!(doubled, vec![2, 4, 6]);
//!
//! let total = foldl(|accumulator: i32, value: &i32| accumulator + value, 0, &doubled);
//! assert_eq!(total, 12);
//!
//! assert_eq!(maximum(&[1, 5, 3, 9, 2]), Ok(9));
//! assert_eq!(compare(&"banana", &"apple"), Comparison::Greater);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every enabled module together with the error type.
///
/// # Usage
///
/// ```rust
/// use foldkit::prelude::*;
/// ```
///
/// # Shadowed names
///
/// The glob brings in [`sequence::drop`](crate::sequence::drop), which takes
/// precedence over the standard prelude's `drop`. Release a value with
/// `std::mem::drop` when both are needed in one scope:
///
/// ```rust
/// use foldkit::prelude::*;
///
/// let values = vec![1, 2, 3];
/// assert_eq!(drop(&values, 1), vec![2, 3]);
///
/// std::mem::drop(values);
/// ```
pub mod prelude {
    pub use crate::error::ListError;

    #[cfg(feature = "ordering")]
    pub use crate::ordering::*;

    #[cfg(feature = "guard")]
    pub use crate::guard::*;

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;

    #[cfg(feature = "combinator")]
    pub use crate::combinator::*;

    #[cfg(feature = "aggregate")]
    pub use crate::aggregate::*;
}

#[macro_use]
mod trace;

pub mod error;

#[cfg(feature = "ordering")]
pub mod ordering;

#[cfg(feature = "guard")]
pub mod guard;

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "combinator")]
pub mod combinator;

#[cfg(feature = "aggregate")]
pub mod aggregate;
