//! Unit tests for the sequence combinators.

#![cfg(feature = "combinator")]

use foldkit::combinator::{all, any, compose, filter, foldl, foldr, map, zip, zip_with};
use foldkit::sequence::Pair;
use rstest::rstest;

// =============================================================================
// map / filter
// =============================================================================

#[test]
fn test_map_doubles() {
    assert_eq!(map(|value: &i32| value * 2, &[1, 2, 3]), vec![2, 4, 6]);
}

#[test]
fn test_map_to_strings() {
    let labels = map(|value: &i32| format!("#{value}"), &[1, 2]);
    assert_eq!(labels, vec!["#1", "#2"]);
}

#[test]
fn test_map_empty() {
    let mapped = map(|value: &i32| value * 2, &[]);
    assert!(mapped.is_empty());
}

#[rstest]
#[case(vec![1, 2, 3, 4, 5, 6], vec![2, 4, 6])]
#[case(vec![1, 3, 5], vec![])]
#[case(vec![], vec![])]
fn test_filter_evens(#[case] values: Vec<i32>, #[case] expected: Vec<i32>) {
    assert_eq!(filter(|value: &i32| value % 2 == 0, &values), expected);
}

// =============================================================================
// Folds
// =============================================================================

#[test]
fn test_foldl_sum() {
    assert_eq!(foldl(|accumulator: i32, value: &i32| accumulator + value, 0, &[1, 2, 3, 4]), 10);
}

#[test]
fn test_foldl_concatenates_left_to_right() {
    let joined = foldl(
        |accumulator: String, word: &&str| accumulator + word,
        String::new(),
        &["a", "b", "c"],
    );
    assert_eq!(joined, "abc");
}

#[test]
fn test_foldr_concatenates_right_to_left() {
    let joined = foldr(
        |word: &&str, accumulator: String| accumulator + word,
        String::new(),
        &["a", "b", "c"],
    );
    assert_eq!(joined, "cba");
}

#[test]
fn test_foldr_subtraction_is_right_associative() {
    // 10 - (20 - (30 - 0))
    assert_eq!(foldr(|value: &i32, accumulator: i32| value - accumulator, 0, &[10, 20, 30]), 20);
}

#[test]
fn test_foldr_single_element_applies_once() {
    let result = foldr(
        |value: &i32, mut accumulator: Vec<i32>| {
            accumulator.push(*value);
            accumulator
        },
        vec![0],
        &[1],
    );
    assert_eq!(result, vec![0, 1]);
}

// =============================================================================
// Quantifiers
// =============================================================================

#[rstest]
#[case(vec![1, 2, 3], true)]
#[case(vec![-1, -2], false)]
#[case(vec![], false)]
fn test_any_positive(#[case] values: Vec<i32>, #[case] expected: bool) {
    assert_eq!(any(|value: &i32| *value > 0, &values), expected);
}

#[rstest]
#[case(vec![1, 2, 3], true)]
#[case(vec![1, -2], false)]
#[case(vec![], true)]
fn test_all_positive(#[case] values: Vec<i32>, #[case] expected: bool) {
    assert_eq!(all(|value: &i32| *value > 0, &values), expected);
}

// =============================================================================
// Zips
// =============================================================================

#[rstest]
#[case(vec![1, 2, 3], vec![4, 5, 6], vec![5, 7, 9])]
#[case(vec![1, 2, 3], vec![], vec![])]
#[case(vec![], vec![1], vec![])]
#[case(vec![1, 2, 3, 4], vec![10, 20], vec![11, 22])]
fn test_zip_with_addition(
    #[case] left: Vec<i32>,
    #[case] right: Vec<i32>,
    #[case] expected: Vec<i32>,
) {
    assert_eq!(zip_with(|first: &i32, second: &i32| first + second, &left, &right), expected);
}

#[test]
fn test_zip_mixed_types() {
    let pairs = zip(&[1, 2, 3], &["one", "two", "three"]);
    assert_eq!(
        pairs,
        vec![Pair::new(1, "one"), Pair::new(2, "two"), Pair::new(3, "three")]
    );
}

#[test]
fn test_zip_truncates_to_shorter() {
    let pairs = zip(&["a", "b", "c"], &[true]);
    assert_eq!(pairs.len(), 1);
    assert_eq!(pairs[0].into_tuple(), ("a", true));
}

// =============================================================================
// compose
// =============================================================================

#[test]
fn test_compose_applies_inner_first() {
    let add_one = |value: i32| value + 1;
    let double = |value: i32| value * 2;
    assert_eq!(compose(add_one, double)(5), 11);
    assert_eq!(compose(double, add_one)(5), 12);
}

#[test]
fn test_compose_with_map() {
    let describe = compose(|length: usize| format!("{length} chars"), |word: &str| word.len());
    assert_eq!(map(|word: &&str| describe(*word), &["hi", "hello"]), vec!["2 chars", "5 chars"]);
}
