//! The `guards!` macro.
//!
//! Expands a clause list into an `if`/`else if` chain. Each condition is
//! evaluated only if every earlier condition was false, and only the
//! selected value expression is evaluated.

/// Selects the value of the first clause whose condition is true.
///
/// Evaluates to `Result<T, ListError>`: `Ok` with the selected value, or
/// [`ListError::ExhaustedGuards`](crate::error::ListError::ExhaustedGuards)
/// carrying the number of clauses when none matched. An empty clause list
/// is always exhausted.
///
/// # Syntax
///
/// ```text
/// guards! {
///     condition => value,
///     condition => value,
///     ...
/// }
/// ```
///
/// # Examples
///
/// ```rust
/// use foldkit::error::ListError;
/// use foldkit::guards;
///
/// fn classify(number: i32) -> Result<&'static str, ListError> {
///     guards! {
///         number < 0 => "negative",
///         number == 0 => "zero",
///         true => "positive",
///     }
/// }
///
/// assert_eq!(classify(-4), Ok("negative"));
/// assert_eq!(classify(0), Ok("zero"));
/// assert_eq!(classify(9), Ok("positive"));
/// ```
///
/// ## Exhaustion
///
/// ```rust
/// use foldkit::error::ListError;
/// use foldkit::guards;
///
/// let result: Result<i32, ListError> = guards! {
///     1 > 2 => 1,
///     2 > 3 => 2,
/// };
/// assert_eq!(result, Err(ListError::ExhaustedGuards { clauses: 2 }));
/// ```
#[macro_export]
macro_rules! guards {
    (@clauses [$inspected:expr]) => {
        ::core::result::Result::Err($crate::guard::exhausted_guards($inspected))
    };

    (@clauses [$inspected:expr] $condition:expr => $value:expr $(, $($rest:tt)*)?) => {
        if $condition {
            ::core::result::Result::Ok($value)
        } else {
            $crate::guards!(@clauses [$inspected + 1] $($($rest)*)?)
        }
    };

    () => {
        $crate::guards!(@clauses [0_usize])
    };

    ($($clauses:tt)+) => {
        $crate::guards!(@clauses [0_usize] $($clauses)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::error::ListError;
    use std::cell::Cell;

    #[test]
    fn test_guards_macro_first_match() {
        let result: Result<&str, ListError> = guards! {
            true => "first",
            true => "second",
        };
        assert_eq!(result, Ok("first"));
    }

    #[test]
    fn test_guards_macro_counts_clauses_on_exhaustion() {
        let result: Result<u8, ListError> = guards! {
            false => 1,
            false => 2,
            false => 3
        };
        assert_eq!(result, Err(ListError::ExhaustedGuards { clauses: 3 }));
    }

    #[test]
    fn test_guards_macro_without_clauses_is_exhausted() {
        let result: Result<i32, ListError> = guards! {};
        assert_eq!(result, Err(ListError::ExhaustedGuards { clauses: 0 }));
    }

    #[test]
    fn test_guards_macro_conditions_are_lazy() {
        let evaluated = Cell::new(0);
        let check = |outcome: bool| {
            evaluated.set(evaluated.get() + 1);
            outcome
        };
        let result: Result<i32, ListError> = guards! {
            check(false) => 1,
            check(true) => 2,
            check(true) => 3,
        };
        assert_eq!(result, Ok(2));
        assert_eq!(evaluated.get(), 2);
    }
}
