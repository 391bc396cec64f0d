//! Guarded selection.
//!
//! A guard list is an ordered sequence of `(condition, producer)` clauses.
//! Evaluating it runs the producer of the first clause whose condition is
//! true and ignores the rest. If no condition holds the evaluation fails with
//! [`ListError::ExhaustedGuards`] instead of falling through to a default.
//!
//! Two forms are provided:
//!
//! - [`guards`] over a list of [`Guard`] values, where every condition is
//!   computed up front and producers are boxed closures
//! - the [`guards!`](crate::guards) macro, which expands to an `if`/`else if`
//!   chain so that conditions are evaluated lazily, in order
//!
//! # Examples
//!
//! ```rust
//! use foldkit::guard::{Guard, guards};
//!
//! let age = 25;
//! let category = guards([
//!     Guard::new(age < 18, || "minor"),
//!     Guard::new((18..65).contains(&age), || "adult"),
//!     Guard::new(age >= 65, || "senior"),
//! ]);
//! assert_eq!(category, Ok("adult"));
//! ```

mod guards_macro;

use std::fmt;

use crate::error::ListError;

/// A single guard clause: a condition and a lazily invoked producer.
///
/// The producer is only called when the clause is selected by [`guards`].
pub struct Guard<'a, T> {
    condition: bool,
    producer: Box<dyn FnOnce() -> T + 'a>,
}

impl<'a, T> Guard<'a, T> {
    /// Creates a clause that is selected when `condition` is true.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldkit::guard::Guard;
    ///
    /// let clause = Guard::new(1 < 2, || "yes");
    /// assert!(clause.condition());
    /// ```
    pub fn new<F>(condition: bool, producer: F) -> Self
    where
        F: FnOnce() -> T + 'a,
    {
        Self {
            condition,
            producer: Box::new(producer),
        }
    }

    /// Creates a clause whose condition is always true.
    ///
    /// Placed last, it turns a guard list into an exhaustive one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use foldkit::guard::{Guard, guards};
    ///
    /// let result = guards([Guard::new(false, || 1), Guard::otherwise(|| 2)]);
    /// assert_eq!(result, Ok(2));
    /// ```
    pub fn otherwise<F>(producer: F) -> Self
    where
        F: FnOnce() -> T + 'a,
    {
        Self::new(true, producer)
    }

    /// Returns the clause's condition.
    #[must_use]
    pub const fn condition(&self) -> bool {
        self.condition
    }

    /// Invokes the producer, consuming the clause.
    pub fn produce(self) -> T {
        (self.producer)()
    }
}

impl<T> fmt::Debug for Guard<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Guard")
            .field("condition", &self.condition)
            .finish_non_exhaustive()
    }
}

/// Runs the producer of the first clause whose condition is true.
///
/// Clauses after the selected one are dropped without their producers being
/// invoked.
///
/// # Errors
///
/// Returns [`ListError::ExhaustedGuards`] when no clause's condition holds,
/// including when `clauses` is empty.
///
/// # Examples
///
/// ```rust
/// use foldkit::error::ListError;
/// use foldkit::guard::{Guard, guards};
///
/// let first = guards([Guard::new(true, || "first"), Guard::new(true, || "second")]);
/// assert_eq!(first, Ok("first"));
///
/// let none = guards([Guard::new(false, || 1), Guard::new(false, || 2)]);
/// assert_eq!(none, Err(ListError::ExhaustedGuards { clauses: 2 }));
/// ```
pub fn guards<'a, T, I>(clauses: I) -> Result<T, ListError>
where
    I: IntoIterator<Item = Guard<'a, T>>,
{
    let mut inspected = 0;
    for clause in clauses {
        inspected += 1;
        if clause.condition {
            return Ok(clause.produce());
        }
    }
    Err(exhausted_guards(inspected))
}

/// Builds the error returned when `clauses` clauses were inspected and none
/// matched. Used by the [`guards!`](crate::guards) expansion.
#[doc(hidden)]
#[must_use]
pub fn exhausted_guards(clauses: usize) -> ListError {
    failure!(ListError::ExhaustedGuards { clauses })
}
