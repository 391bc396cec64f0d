//! Sequence primitives.
//!
//! Positional accessors (`head`, `tail`, `last`), clamping slicers (`take`,
//! `drop`), `replicate`, and the [`Pair`] type used by `zip` and `flatten`.
//!
//! All functions read from a borrowed slice and return owned values; the
//! caller's slice is never modified or aliased by the output.
//!
//! # Examples
//!
//! ```rust
//! use foldkit::sequence::{drop, head, take};
//!
//! let values = [1, 2, 3, 4, 5];
//! let mut rebuilt = take(&values, 2);
//! rebuilt.extend(drop(&values, 2));
//! assert_eq!(rebuilt, values);
//! assert_eq!(head(&values), Ok(1));
//! ```

mod ext;
mod pair;
mod primitives;

pub use ext::SequenceExt;
pub use pair::{Pair, fst, snd};
pub use primitives::{drop, head, last, length, replicate, tail, take};
