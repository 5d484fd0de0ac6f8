//! Integration tests for the checker functions through the public API.
//!
//! These mirror the way a caller uses the crate: literal inputs, matching on
//! the returned booleans and on the exact failure messages.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use checkers::prelude::*;
use checkers::{assert_invalid_specification, assert_passes, assert_validation_failure};

// ============================================================================
// Type membership
// ============================================================================

#[test]
fn single_value_type_checks() {
    assert_eq!(is_value_of_type(&5, ValueType::Int), Ok(true));
    assert_eq!(
        is_value_of_type(&"5", [ValueType::Int, ValueType::Float]),
        Ok(false)
    );
    assert_eq!(is_value_of_type(&2.5f32, ValueType::Number), Ok(true));
    assert_eq!(is_value_of_type(&true, ValueType::Int), Ok(false));
    assert_eq!(is_value_of_type(&None::<i32>, ValueType::Null), Ok(true));
    assert_eq!(is_value_of_type(&Some(3), ValueType::Int), Ok(true));
    assert_eq!(is_value_of_type(&vec![1, 2], ValueType::List), Ok(true));

    let mut map = BTreeMap::new();
    map.insert("k".to_string(), 1);
    assert_eq!(is_value_of_type(&map, ValueType::Map), Ok(true));
}

#[test]
fn collection_type_checks() {
    assert_eq!(is_all_values_of_type(&[1, 2, 3], ValueType::Int), Ok(true));
    assert_eq!(
        is_all_values_of_type(&values![1, "2", 3], ValueType::Int),
        Ok(false)
    );
    assert_eq!(
        is_any_values_of_type(&values![1, "2", 3], ValueType::Str),
        Ok(true)
    );
    assert_eq!(
        check_values_of_type(&values![1.0, 2], ValueType::Number, Mode::All),
        Ok(true)
    );
}

#[test]
fn empty_collections_are_vacuous() {
    let empty = values![];
    assert_eq!(is_all_values_of_type(&empty, ValueType::Int), Ok(true));
    assert_eq!(is_any_values_of_type(&empty, ValueType::Int), Ok(false));
    assert_eq!(is_all_values_in_iterable(&empty, &values![1]), Ok(true));
    assert_eq!(is_any_values_in_iterable(&empty, &values![1]), Ok(false));
}

#[test]
fn empty_type_specification_is_rejected_even_for_empty_collections() {
    let none = Vec::<ValueType>::new();
    assert_invalid_specification!(is_value_of_type(&1, none.clone()));
    assert_invalid_specification!(is_all_values_of_type(&values![], none.clone()));
    assert_invalid_specification!(is_any_values_of_type(&values![], none.clone()));
    assert_invalid_specification!(assert_all_values_of_type(&values![], none));
}

#[test]
fn set_type_checks() {
    let set = Value::set(values![1.0, 1.0]);
    assert_eq!(is_value_of_type(&set, ValueType::Set), Ok(true));
    assert_eq!(is_value_of_type(&"a", ValueType::Set), Ok(false));
    assert_eq!(
        is_value_of_type(&set, [ValueType::Tuple, ValueType::Set]),
        Ok(true)
    );
    assert_eq!(
        is_value_of_type(&vec![1, 2], [ValueType::Tuple, ValueType::Set]),
        Ok(false)
    );

    let letters: HashSet<&str> = ["a", "b"].into_iter().collect();
    assert_eq!(
        is_value_of_type(&letters, [ValueType::Tuple, ValueType::List]),
        Ok(false)
    );

    let sets = [
        Value::set(values![1.0, 2.0]),
        Value::set(values![3.0, 4.0]),
        Value::set(values![5.0, 6.0]),
    ];
    assert_eq!(is_all_values_of_type(&sets, ValueType::Set), Ok(true));

    let err = assert_value_of_type(&1, ValueType::Set).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Value '1' is not correct type: 'int'. Must be: 'set'."
    );
}

// ============================================================================
// Value membership
// ============================================================================

#[test]
fn membership_checks() {
    assert_eq!(is_value_in_iterable(&3, &[1, 2, 3]), Ok(true));
    assert_eq!(is_value_in_iterable(&4, &[1, 2, 3]), Ok(false));
    assert_eq!(
        is_all_values_in_iterable(&["a", "b"], &["a", "b", "c"]),
        Ok(true)
    );
    assert_eq!(is_any_values_in_iterable(&["x", "y"], &["a"]), Ok(false));
    assert_eq!(
        check_values_in_iterable(&[1, 9], &[1, 2], Mode::Any),
        Ok(true)
    );
}

#[test]
fn membership_uses_numeric_equality_for_dynamic_values() {
    assert_eq!(
        is_value_in_iterable(&Value::Float(2.0), &values![1, 2, 3]),
        Ok(true)
    );
    assert_eq!(
        is_value_in_iterable(&Value::Bool(true), &values![1, 2, 3]),
        Ok(false)
    );
}

#[test]
fn membership_against_set_candidates() {
    let set: BTreeSet<i32> = [3, 1, 2].into_iter().collect();
    let candidates: Vec<i32> = set.into_iter().collect();
    assert_eq!(is_value_in_iterable(&1, &candidates), Ok(true));
    assert_eq!(is_all_values_in_iterable(&[1, 2], &candidates), Ok(true));
    assert_passes!(assert_any_values_in_iterable(
        &values![1, 2, "z"],
        &values![1.0, 2.0, 3.0]
    ));

    let set = Value::set(values![1.0, 2.0, 3.0]);
    assert_eq!(is_valid_comparison(&1, "in", &set), Ok(true));
    assert_eq!(is_valid_comparison(&"z", "not in", &set), Ok(true));
}

#[test]
fn empty_candidates_are_rejected() {
    let none: [&str; 0] = [];
    assert_invalid_specification!(is_value_in_iterable(&"a", &none));
    assert_invalid_specification!(is_any_values_in_iterable(&["a"], &none));
    assert_invalid_specification!(assert_value_in_iterable(&"a", &none));
}

// ============================================================================
// Composite valid-value check
// ============================================================================

#[test]
fn valid_value_is_conjunctive() {
    let allowed = values![1, 2, "3"];
    let int = || Some(TypeSpec::from(ValueType::Int));

    assert_eq!(is_valid_value(&Value::Int(2), int(), Some(&allowed[..])), Ok(true));
    // in the candidates but not an int
    assert_eq!(
        is_valid_value(&Value::from("3"), int(), Some(&allowed[..])),
        Ok(false)
    );
    // an int but not in the candidates
    assert_eq!(is_valid_value(&Value::Int(7), int(), Some(&allowed[..])), Ok(false));
}

#[test]
fn valid_value_with_one_constraint_delegates() {
    assert_eq!(is_valid(&7, Some(ValueType::Int.into()), None), Ok(true));
    assert_eq!(is_valid(&7, None, Some(&[1, 2][..])), Ok(false));
}

#[test]
fn valid_value_without_constraint_is_rejected() {
    assert_invalid_specification!(is_valid_value::<i32>(&1, None, None));
    assert_invalid_specification!(assert_is_valid_value::<i32>(&1, None, None));
}

// ============================================================================
// Assertions and their messages
// ============================================================================

#[test]
fn assertion_messages() {
    let cases: Vec<(CheckResult<()>, &str)> = vec![
        (
            assert_value_of_type(&"x", ValueType::Int),
            "Value 'x' is not correct type: 'str'. Must be: 'int'.",
        ),
        (
            assert_all_values_of_type(&values![1, "2", 3], ValueType::Int),
            "Some elements ['2'] have the incorrect type ['str']. Must be: 'int' (mode: all).",
        ),
        (
            assert_any_values_of_type(&values!["a", "b"], ValueType::Int),
            "None of the elements in ['a', 'b'] have the correct type. Must be: 'int' (mode: any).",
        ),
        (
            assert_value_in_iterable(&Value::from("a"), &values![1, 2, 3]),
            "Value 'a' not found in iterable: [1, 2, 3]",
        ),
        (
            assert_all_values_in_iterable(&["a", "d"], &["a", "b", "c"]),
            "Some values ['d'] are missing from ['a', 'b', 'c'] (mode: all)",
        ),
        (
            assert_any_values_in_iterable(&values!["a", "b"], &values![1, 2, 3]),
            "None of the values in ['a', 'b'] can be found in [1, 2, 3] (mode: any)",
        ),
        (
            assert_is_valid_value(&7, Some(ValueType::Int.into()), Some(&[1, 2, 3][..])),
            "Value '7' is not valid: must be of type 'int' and in [1, 2, 3]",
        ),
        (
            assert_valid_comparison(&5, "<", &3),
            "Validation failed: '5 < 3' is not true",
        ),
        (
            assert_value_between(&11, &0, &10),
            "Invalid value: 11 is not between 0 and 10",
        ),
        (
            assert_all_values_between(&[1, 6, -1], &0, &5),
            "Values [6, -1] not between 0 and 5 (mode: all)",
        ),
    ];

    for (result, expected) in cases {
        match result {
            Err(CheckError::ValidationFailure(failure)) => {
                assert_eq!(failure.to_string(), expected);
                assert_eq!(failure.message(), expected);
            }
            other => panic!("Expected failure '{}', got {:?}", expected, other),
        }
    }
}

#[test]
fn failure_carries_structured_data() {
    let err = assert_any_values_in_iterable(&[7, 8], &[1, 2]).unwrap_err();
    let failure = err.failure().expect("validation failure");

    assert_eq!(failure.kind(), FailureKind::Membership);
    assert_eq!(failure.mode(), Some(Mode::Any));
    assert_eq!(failure.offending(), &[Value::Int(7), Value::Int(8)]);
    assert_eq!(failure.expected(), "[1, 2]");
}

#[test]
fn assertions_pass_silently() {
    assert_passes!(assert_value_of_type(&5, ValueType::Int));
    assert_passes!(assert_all_values_of_type(&[1, 2], ValueType::Int));
    assert_passes!(assert_any_values_of_type(&values!["a", 1], ValueType::Int));
    assert_passes!(assert_value_in_iterable(&1, &[1, 2]));
    assert_passes!(assert_all_values_in_iterable(&[1], &[1, 2]));
    assert_passes!(assert_any_values_in_iterable(&[3, 1], &[1, 2]));
    assert_passes!(assert_is_valid_value(&1, None, Some(&[1, 2][..])));
}

#[test]
fn assertion_aliases() {
    assert_validation_failure!(assert_type(&"x", ValueType::Int), FailureKind::Type);
    assert_validation_failure!(assert_is_type(&"x", ValueType::Int), FailureKind::Type);
    assert_validation_failure!(assert_all_type(&values!["x"], ValueType::Int));
    assert_validation_failure!(assert_all_is_type(&values!["x"], ValueType::Int));
    assert_validation_failure!(assert_any_type(&values!["x"], ValueType::Int));
    assert_validation_failure!(assert_any_is_type(&values!["x"], ValueType::Int));
    assert_validation_failure!(assert_in(&4, &[1]), FailureKind::Membership);
    assert_validation_failure!(assert_all_in(&[4], &[1]));
    assert_validation_failure!(assert_any_in(&[4], &[1]));
    assert_validation_failure!(
        assert_is_valid(&4, None, Some(&[1][..])),
        FailureKind::Composite
    );
}

// ============================================================================
// Comparisons and ranges
// ============================================================================

#[test]
fn comparison_operators() {
    assert_eq!(is_valid_comparison(&5, ">", &3), Ok(true));
    assert_eq!(is_valid_comparison(&5, "<=", &5.0), Ok(true));
    assert_eq!(is_valid_comparison(&"a", "in", &vec!["a", "b"]), Ok(true));
    assert_eq!(is_valid_comparison(&"z", "not in", &"abc"), Ok(true));
    assert_eq!(is_valid_comparison(&1, "is", &1.0), Ok(false));
    assert_eq!(is_valid_comparison(&1, "==", &1.0), Ok(true));
    assert_invalid_specification!(is_valid_comparison(&1, "<>", &2));
    assert_invalid_specification!(is_valid_comparison(&"a", "<", &2));
    assert_invalid_specification!(is_valid_comparison(&1, "in", &2));
}

#[test]
fn range_checks() {
    assert_eq!(is_value_between(&5, &0, &10), Ok(true));
    assert_eq!(is_value_between(&10, &0, &10), Ok(true));
    assert_eq!(is_value_between(&10.5, &0.0, &10.0), Ok(false));
    assert_eq!(is_all_values_between(&[1, 2], &0, &2), Ok(true));
    assert_eq!(is_all_values_between::<i32>(&[], &0, &2), Ok(true));
    assert_invalid_specification!(is_all_values_between::<i32>(&[], &3, &2));
}

// ============================================================================
// Containment
// ============================================================================

#[test]
fn containment_helpers() {
    assert!(any_element_contains(&["apple", "banana"], "an"));
    let fruit = ["apple", "banana", "cherry"];
    let found: Vec<_> = get_elements_containing(&fruit, "an").collect();
    assert_eq!(found, vec![&"banana"]);
    assert!(!all_elements_contains(&["apple", "banana"], "an"));
}

#[test]
fn containment_is_re_evaluated_on_each_call() {
    let mut words = vec![String::from("plan"), String::from("plot")];
    assert_eq!(get_elements_containing(&words, "an").count(), 1);
    words.push(String::from("span"));
    assert_eq!(get_elements_containing(&words, "an").count(), 2);
}

// ============================================================================
// Concurrency
// ============================================================================

#[test]
fn checks_run_concurrently() {
    let data = values![1, 2, "three"];
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| is_all_values_of_type(&data, ValueType::Int)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().expect("thread panicked"), Ok(false));
        }
    });
}
