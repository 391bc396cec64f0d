//! Left and right folds.
//!
//! Both folds are loops rather than recursion, so sequence length never
//! translates into call-stack depth.

/// Folds a sequence from left to right.
///
/// `function(accumulator, element)` is applied to each element in order,
/// starting from `initial`. An empty sequence returns `initial` unchanged.
///
/// # Examples
///
/// ```rust
/// use foldkit::combinator::foldl;
///
/// let digits = foldl(|accumulator: String, digit: &u8| accumulator + &digit.to_string(), String::new(), &[1, 2, 3]);
/// assert_eq!(digits, "123");
///
/// let difference = foldl(|accumulator: i32, value: &i32| accumulator - value, 10, &[1, 2, 3]);
/// assert_eq!(difference, 4); // ((10 - 1) - 2) - 3
/// ```
pub fn foldl<A, B, F>(mut function: F, initial: B, sequence: &[A]) -> B
where
    F: FnMut(B, &A) -> B,
{
    let mut accumulator = initial;
    for element in sequence {
        accumulator = function(accumulator, element);
    }
    accumulator
}

/// Folds a sequence from right to left.
///
/// `function(element, accumulator)` is applied to each element starting from
/// the last, so the result is `f(x0, f(x1, ... f(xn, initial)))`. A
/// single-element sequence yields `function(x0, initial)`.
///
/// # Examples
///
/// ```rust
/// use foldkit::combinator::foldr;
///
/// let difference = foldr(|value: &i32, accumulator: i32| value - accumulator, 0, &[1, 2, 3]);
/// assert_eq!(difference, 2); // 1 - (2 - (3 - 0))
/// ```
pub fn foldr<A, B, F>(mut function: F, initial: B, sequence: &[A]) -> B
where
    F: FnMut(&A, B) -> B,
{
    let mut accumulator = initial;
    for element in sequence.iter().rev() {
        accumulator = function(element, accumulator);
    }
    accumulator
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_foldl_empty_returns_initial() {
        let result = foldl(|accumulator: i32, value: &i32| accumulator + value, 42, &[]);
        assert_eq!(result, 42);
    }

    #[test]
    fn test_foldr_empty_returns_initial() {
        let result = foldr(|value: &i32, accumulator: i32| value + accumulator, 42, &[]);
        assert_eq!(result, 42);
    }

    #[test]
    fn test_foldr_single_element() {
        let result = foldr(|value: &i32, accumulator: i32| value * 10 + accumulator, 7, &[3]);
        assert_eq!(result, 37);
    }

    #[test]
    fn test_fold_order() {
        let left = foldl(
            |mut visited: Vec<i32>, value: &i32| {
                visited.push(*value);
                visited
            },
            Vec::new(),
            &[1, 2, 3],
        );
        let right = foldr(
            |value: &i32, mut visited: Vec<i32>| {
                visited.push(*value);
                visited
            },
            Vec::new(),
            &[1, 2, 3],
        );
        assert_eq!(left, vec![1, 2, 3]);
        assert_eq!(right, vec![3, 2, 1]);
    }

    #[test]
    fn test_folds_handle_long_sequences() {
        let values = vec![1_u64; 1_000_000];
        assert_eq!(foldl(|accumulator: u64, value: &u64| accumulator + value, 0, &values), 1_000_000);
        assert_eq!(foldr(|value: &u64, accumulator: u64| accumulator + value, 0, &values), 1_000_000);
    }
}
