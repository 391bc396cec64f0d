//! Aggregate operations.
//!
//! Reductions built on the folds in [`combinator`](crate::combinator) and the
//! comparison in [`ordering`](crate::ordering), plus conversion of mappings
//! into sequences.
//!
//! # Examples
//!
//! ```rust
//! use foldkit::aggregate::{maximum, minimum, product, sum};
//!
//! let values = [3, 1, 4, 1, 5];
//! assert_eq!(sum(&values), 14);
//! assert_eq!(product(&values), 60);
//! assert_eq!(maximum(&values), Ok(5));
//! assert_eq!(minimum(&values), Ok(1));
//! ```

mod extremum;
mod flatten;
mod numeric;

pub use extremum::{maximum, minimum};
pub use flatten::{flatten, flatten_with};
pub use numeric::{Numeric, product, sum};
