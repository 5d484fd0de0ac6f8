//! Checkers Example
//!
//! This example walks through the checker functions: type and value
//! membership, comparisons and ranges, assertions with their messages,
//! custom predicates and the alias registry.
//!
//! Run with: cargo run --example checkers

use std::collections::BTreeSet;

use checkers::aliases::{aliases_of, resolve};
use checkers::predicate::{self, PredicateExt};
use checkers::prelude::*;

fn main() {
    println!("=== Checkers Example ===\n");

    type_checks();
    membership_checks();
    comparisons_and_ranges();
    assertions();
    custom_predicates();
    containment();
    alias_registry();
}

/// Demonstrates type membership
fn type_checks() {
    println!("--- Type Checks ---\n");

    println!("is_value_of_type(5, int): {:?}", is_value_of_type(&5, ValueType::Int));
    println!(
        "is_value_of_type('5', [int, float]): {:?}",
        is_value_of_type(&"5", [ValueType::Int, ValueType::Float])
    );
    // bool is never an int
    println!(
        "is_value_of_type(true, int): {:?}",
        is_value_of_type(&true, ValueType::Int)
    );

    let mixed = values![1, 2.5, "three"];
    println!(
        "\nis_all_values_of_type({}, number): {:?}",
        Value::List(mixed.clone()),
        is_all_values_of_type(&mixed, ValueType::Number)
    );
    println!(
        "is_any_values_of_type({}, str): {:?}",
        Value::List(mixed.clone()),
        is_any_values_of_type(&mixed, ValueType::Str)
    );

    let tags: BTreeSet<&str> = ["red", "green"].into_iter().collect();
    println!(
        "is_value_of_type({}, set): {:?}",
        tags.to_value(),
        is_value_of_type(&tags, ValueType::Set)
    );

    let empty = values![];
    println!(
        "\nEmpty collections: all={:?}, any={:?}",
        is_all_values_of_type(&empty, ValueType::Int),
        is_any_values_of_type(&empty, ValueType::Int)
    );
    println!(
        "Empty type list: {}",
        is_value_of_type(&1, Vec::<ValueType>::new()).unwrap_err()
    );
    println!();
}

/// Demonstrates value membership and the composite check
fn membership_checks() {
    println!("--- Membership Checks ---\n");

    let allowed = ["draft", "review", "published"];
    println!(
        "is_value_in_iterable('review', {:?}): {:?}",
        allowed,
        is_value_in_iterable(&"review", &allowed)
    );
    println!(
        "is_all_values_in_iterable(['draft', 'gone'], ...): {:?}",
        is_all_values_in_iterable(&["draft", "gone"], &allowed)
    );
    println!(
        "is_any_values_in_iterable(['draft', 'gone'], ...): {:?}",
        is_any_values_in_iterable(&["draft", "gone"], &allowed)
    );

    // numeric equality crosses int and float
    println!(
        "\nis_value_in_iterable(2, [1.0, 2.0]): {:?}",
        is_value_in_iterable(&Value::Int(2), &values![1.0, 2.0])
    );

    let ports = [80, 443, 8080];
    println!(
        "\nis_valid_value(443, int, {:?}): {:?}",
        ports,
        is_valid_value(&443, Some(ValueType::Int.into()), Some(&ports[..]))
    );
    println!(
        "is_valid_value(22, int, {:?}): {:?}",
        ports,
        is_valid_value(&22, Some(ValueType::Int.into()), Some(&ports[..]))
    );
    println!();
}

/// Demonstrates comparison operators and inclusive ranges
fn comparisons_and_ranges() {
    println!("--- Comparisons and Ranges ---\n");

    for op in ["<", "<=", ">", ">=", "==", "!="] {
        println!("5 {} 3: {:?}", op, is_valid_comparison(&5, op, &3));
    }
    println!(
        "2 in [1, 2, 3]: {:?}",
        is_valid_comparison(&2, "in", &values![1, 2, 3])
    );
    println!(
        "'an' in 'banana': {:?}",
        is_valid_comparison(&"an", "in", &"banana")
    );
    println!("1 is 1.0: {:?}", is_valid_comparison(&1, "is", &1.0));
    println!(
        "{{1}} < {{1, 2}}: {:?}",
        is_valid_comparison(&Value::set(values![1]), "<", &Value::set(values![1, 2]))
    );
    println!(
        "'a' < 1: {}",
        is_valid_comparison(&"a", "<", &1).unwrap_err()
    );
    println!(
        "5 =~ 3: {}",
        is_valid_comparison(&5, "=~", &3).unwrap_err()
    );

    println!("\nis_value_between(5, 0, 10): {:?}", is_value_between(&5, &0, &10));
    println!(
        "is_all_values_between([1, 11], 0, 10): {:?}",
        is_all_values_between(&[1, 11], &0, &10)
    );
    println!(
        "is_value_between(5, 10, 0): {}",
        is_value_between(&5, &10, &0).unwrap_err()
    );
    println!();
}

/// Demonstrates assertions and their structured failures
fn assertions() {
    println!("--- Assertions ---\n");

    let failures = [
        assert_value_of_type(&"x", ValueType::Int),
        assert_all_values_of_type(&values![1, "2", 3.0], ValueType::Int),
        assert_value_in_iterable(&4, &[1, 2, 3]),
        assert_any_values_in_iterable(&["x", "y"], &["a", "b"]),
        assert_valid_comparison(&5, "<", &3),
        assert_all_values_between(&[6, -1, 3], &0, &5),
    ];
    for result in failures {
        match result {
            Ok(()) => println!("passed"),
            Err(err) => println!("{}", err),
        }
    }

    println!(
        "\nassert_value_in_iterable(2, [1, 2, 3]): {:?}",
        assert_value_in_iterable(&2, &[1, 2, 3])
    );

    if let Err(CheckError::ValidationFailure(failure)) =
        assert_all_values_of_type(&values![1, "2", "3"], ValueType::Int)
    {
        println!("\nStructured failure:");
        println!("  kind: {:?}", failure.kind());
        println!("  mode: {:?}", failure.mode());
        println!("  offending: {}", Value::List(failure.offending().to_vec()));
        println!("  expected: {}", failure.expected());
    }
    println!();
}

/// Demonstrates building constraints from predicates
fn custom_predicates() {
    println!("--- Custom Predicates ---\n");

    let palette = values!["red", "green", "blue"];
    let colour = predicate::of_type(ValueType::Str).and(predicate::one_of(&palette));
    println!("colour.check('red'): {:?}", colour.check(&Value::from("red")));
    println!("colour.check('pink'): {:?}", colour.check(&Value::from("pink")));

    let every = predicate::all(colour);
    let picks = values!["red", "pink", 3];
    println!(
        "all(colour).check({}): {:?}",
        Value::List(picks.clone()),
        every.check(&picks)
    );
    if let Ok(failing) = every.failing(&picks) {
        println!("  failing: {:?}", failing);
    }

    let small = predicate::between(0, 9).and(predicate::compare_with(Operator::Ne, 4));
    println!("\n0..=9 except 4, check(4): {:?}", small.check(&4));
    println!("0..=9 except 4, check(7): {:?}", small.check(&7));

    let checked = predicate::ensure_with(&12, &predicate::between(0, 9), |value, expectation| {
        Failure::new(
            FailureKind::Range,
            expectation,
            format!("{} is not a digit", value),
        )
    });
    println!("ensure_with(12, digit): {:?}", checked.map_err(|e| e.to_string()));
    println!();
}

/// Demonstrates containment over collections of containers
fn containment() {
    println!("--- Containment ---\n");

    let fruit = ["apple", "banana", "mango"];
    println!("any contains 'an': {}", any_element_contains(&fruit, "an"));
    println!("all contain 'an': {}", all_elements_contains(&fruit, "an"));
    let found: Vec<_> = get_elements_containing(&fruit, "an").collect();
    println!("elements containing 'an': {:?}", found);

    let rows = [vec![1, 2], vec![2, 3], vec![4]];
    let found: Vec<_> = get_elements_containing(&rows, &2).collect();
    println!("rows containing 2: {:?}", found);
    println!();
}

/// Demonstrates the alias registry
fn alias_registry() {
    println!("--- Aliases ---\n");

    println!("is_in(3, [1, 2, 3]): {:?}", is_in(&3, &[1, 2, 3]));
    println!("assert_type(5, int): {:?}", assert_type(&5, ValueType::Int));

    for name in ["is_all_in", "assert_any_is_type", "is_valid_value", "nope"] {
        match resolve(name) {
            Some(op) => println!("{} -> {}", name, op),
            None => println!("{} -> (unknown)", name),
        }
    }
    if let Some(op) = resolve("assert_value_of_type") {
        let names: Vec<_> = aliases_of(op).collect();
        println!("aliases of {}: {:?}", op, names);
    }
}
