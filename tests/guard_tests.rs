//! Unit tests for guarded selection.

#![cfg(feature = "guard")]

use foldkit::error::ListError;
use foldkit::guard::{Guard, guards};
use foldkit::guards;
use rstest::rstest;

#[test]
fn test_first_guard_matches() {
    let result = guards([
        Guard::new(true, || "first"),
        Guard::new(true, || "second"),
        Guard::new(true, || "third"),
    ]);
    assert_eq!(result, Ok("first"));
}

#[test]
fn test_last_guard_matches() {
    let result = guards([
        Guard::new(false, || 1.0),
        Guard::new(false, || 2.0),
        Guard::new(true, || 3.0),
    ]);
    assert_eq!(result, Ok(3.0));
}

#[test]
fn test_no_guard_matches() {
    let result = guards([
        Guard::new(false, || "first"),
        Guard::new(false, || "second"),
        Guard::new(false, || "third"),
    ]);
    assert_eq!(result, Err(ListError::ExhaustedGuards { clauses: 3 }));
}

#[test]
fn test_single_false_guard() {
    let result = guards([Guard::new(false, || 0)]);
    assert!(result.unwrap_err().is_exhausted_guards());
}

#[test]
fn test_producers_can_borrow_locals() {
    let names = vec![String::from("ada"), String::from("grace")];
    let result = guards([
        Guard::new(names.is_empty(), || String::from("nobody")),
        Guard::otherwise(|| names.join(", ")),
    ]);
    assert_eq!(result.as_deref(), Ok("ada, grace"));
}

#[test]
fn test_guards_from_iterator() {
    let thresholds = [10, 20, 30];
    let value = 25;
    let clauses = thresholds
        .iter()
        .map(|threshold| Guard::new(value < *threshold, move || *threshold));
    assert_eq!(guards(clauses), Ok(30));
}

#[rstest]
#[case(5, "minor")]
#[case(25, "adult")]
#[case(80, "senior")]
fn test_guards_with_complex_conditions(#[case] age: u32, #[case] expected: &str) {
    let with_function = guards([
        Guard::new(age < 18, || "minor"),
        Guard::new((18..65).contains(&age), || "adult"),
        Guard::new(age >= 65, || "senior"),
    ]);
    let with_macro: Result<&str, ListError> = guards! {
        age < 18 => "minor",
        (18..65).contains(&age) => "adult",
        age >= 65 => "senior",
    };
    assert_eq!(with_function, Ok(expected));
    assert_eq!(with_macro, Ok(expected));
}

#[test]
fn test_guards_macro_single_clause_exhaustion() {
    let result: Result<(), ListError> = guards! { false => () };
    assert_eq!(result, Err(ListError::ExhaustedGuards { clauses: 1 }));
}

#[test]
fn test_guards_macro_propagates_with_question_mark() {
    fn sign(value: i32) -> Result<i32, ListError> {
        let magnitude = guards! {
            value > 0 => 1,
            value < 0 => -1,
        }?;
        Ok(magnitude)
    }

    assert_eq!(sign(8), Ok(1));
    assert_eq!(sign(-8), Ok(-1));
    assert_eq!(sign(0), Err(ListError::ExhaustedGuards { clauses: 2 }));
}

#[test]
fn test_empty_clause_lists_agree() {
    let from_function: Result<u8, ListError> = guards(Vec::new());
    let from_macro: Result<u8, ListError> = guards! {};
    assert_eq!(from_function, Err(ListError::ExhaustedGuards { clauses: 0 }));
    assert_eq!(from_macro, from_function);
}
