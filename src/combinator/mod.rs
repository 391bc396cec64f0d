//! Sequence combinators.
//!
//! Folds, maps, filters, quantifiers, zips and function composition. Every
//! combinator takes its callback first and the sequence last, reads the
//! sequence through a borrowed slice and processes it with a loop, so long
//! inputs cost no call-stack depth.
//!
//! # Examples
//!
//! ```rust
//! use foldkit::combinator::{all, filter, foldr, map, zip_with};
//!
//! let values = [1, 2, 3, 4, 5, 6];
//!
//! let evens = filter(|value: &i32| value % 2 == 0, &values);
//! let squares = map(|value: &i32| value * value, &evens);
//! assert_eq!(squares, vec![4, 16, 36]);
//!
//! let rebuilt = foldr(
//!     |value: &i32, mut rest: Vec<i32>| {
//!         rest.insert(0, *value);
//!         rest
//!     },
//!     Vec::new(),
//!     &values,
//! );
//! assert_eq!(rebuilt, values);
//!
//! let sums = zip_with(|left: &i32, right: &i32| left + right, &[1, 2, 3], &[4, 5, 6]);
//! assert!(all(|sum: &i32| *sum > 4, &sums));
//! ```

mod compose;
mod fold;
mod quantify;
mod transform;
mod zip;

pub use compose::compose;
pub use fold::{foldl, foldr};
pub use quantify::{all, any};
pub use transform::{filter, map};
pub use zip::{zip, zip_with};
