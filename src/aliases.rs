//! Alternate spellings of the checkers
//!
//! Every alias is a plain re-export of its canonical function, so both names
//! share one implementation and one contract:
//!
//! ```
//! use checkers::aliases::{assert_in, is_type};
//! use checkers::ValueType;
//!
//! assert_eq!(is_type(&1.5, ValueType::Number), Ok(true));
//! assert!(assert_in(&4, &[1, 2, 3]).is_err());
//! ```
//!
//! The names are also recorded in an immutable registry so documentation
//! and tooling can discover them at runtime:
//!
//! ```
//! use checkers::aliases::{aliases_of, resolve, Operation};
//!
//! assert_eq!(resolve("is_in"), Some(Operation::IsValueInIterable));
//! assert_eq!(aliases_of(Operation::IsValidValue).collect::<Vec<_>>(), vec!["is_valid"]);
//! ```

use std::fmt;

pub use crate::checkers::{
    assert_all_values_in_iterable as assert_all_in,
    assert_all_values_of_type as assert_all_is_type,
    assert_all_values_of_type as assert_all_type,
    assert_any_values_in_iterable as assert_any_in,
    assert_any_values_of_type as assert_any_is_type,
    assert_any_values_of_type as assert_any_type, assert_is_valid_value as assert_is_valid,
    assert_value_in_iterable as assert_in, assert_value_of_type as assert_is_type,
    assert_value_of_type as assert_type, is_all_values_in_iterable as is_all_in,
    is_all_values_of_type as is_all_type, is_any_values_in_iterable as is_any_in,
    is_any_values_of_type as is_any_type, is_valid_value as is_valid,
    is_value_in_iterable as is_in, is_value_of_type as is_type,
};

/// What an operation returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    /// Answers `Ok(bool)`.
    Predicate,
    /// Answers `Ok(())` or a validation failure.
    Assertion,
    /// Containment helper over collections of containers.
    Containment,
}

/// Canonical operations exposed by [`checkers`](crate::checkers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum Operation {
    IsValueOfType,
    IsAllValuesOfType,
    IsAnyValuesOfType,
    CheckValuesOfType,
    IsValueInIterable,
    IsAllValuesInIterable,
    IsAnyValuesInIterable,
    CheckValuesInIterable,
    IsValidValue,
    IsValidComparison,
    IsValueBetween,
    IsAllValuesBetween,
    AssertValueOfType,
    AssertAllValuesOfType,
    AssertAnyValuesOfType,
    AssertValueInIterable,
    AssertAllValuesInIterable,
    AssertAnyValuesInIterable,
    AssertIsValidValue,
    AssertValidComparison,
    AssertValueBetween,
    AssertAllValuesBetween,
    AnyElementContains,
    AllElementsContains,
    GetElementsContaining,
}

impl Operation {
    /// Every operation, in declaration order.
    pub const ALL: [Operation; 25] = [
        Operation::IsValueOfType,
        Operation::IsAllValuesOfType,
        Operation::IsAnyValuesOfType,
        Operation::CheckValuesOfType,
        Operation::IsValueInIterable,
        Operation::IsAllValuesInIterable,
        Operation::IsAnyValuesInIterable,
        Operation::CheckValuesInIterable,
        Operation::IsValidValue,
        Operation::IsValidComparison,
        Operation::IsValueBetween,
        Operation::IsAllValuesBetween,
        Operation::AssertValueOfType,
        Operation::AssertAllValuesOfType,
        Operation::AssertAnyValuesOfType,
        Operation::AssertValueInIterable,
        Operation::AssertAllValuesInIterable,
        Operation::AssertAnyValuesInIterable,
        Operation::AssertIsValidValue,
        Operation::AssertValidComparison,
        Operation::AssertValueBetween,
        Operation::AssertAllValuesBetween,
        Operation::AnyElementContains,
        Operation::AllElementsContains,
        Operation::GetElementsContaining,
    ];

    /// The canonical function name.
    pub fn name(self) -> &'static str {
        match self {
            Operation::IsValueOfType => "is_value_of_type",
            Operation::IsAllValuesOfType => "is_all_values_of_type",
            Operation::IsAnyValuesOfType => "is_any_values_of_type",
            Operation::CheckValuesOfType => "check_values_of_type",
            Operation::IsValueInIterable => "is_value_in_iterable",
            Operation::IsAllValuesInIterable => "is_all_values_in_iterable",
            Operation::IsAnyValuesInIterable => "is_any_values_in_iterable",
            Operation::CheckValuesInIterable => "check_values_in_iterable",
            Operation::IsValidValue => "is_valid_value",
            Operation::IsValidComparison => "is_valid_comparison",
            Operation::IsValueBetween => "is_value_between",
            Operation::IsAllValuesBetween => "is_all_values_between",
            Operation::AssertValueOfType => "assert_value_of_type",
            Operation::AssertAllValuesOfType => "assert_all_values_of_type",
            Operation::AssertAnyValuesOfType => "assert_any_values_of_type",
            Operation::AssertValueInIterable => "assert_value_in_iterable",
            Operation::AssertAllValuesInIterable => "assert_all_values_in_iterable",
            Operation::AssertAnyValuesInIterable => "assert_any_values_in_iterable",
            Operation::AssertIsValidValue => "assert_is_valid_value",
            Operation::AssertValidComparison => "assert_valid_comparison",
            Operation::AssertValueBetween => "assert_value_between",
            Operation::AssertAllValuesBetween => "assert_all_values_between",
            Operation::AnyElementContains => "any_element_contains",
            Operation::AllElementsContains => "all_elements_contains",
            Operation::GetElementsContaining => "get_elements_containing",
        }
    }

    /// Whether this operation is a predicate, an assertion or a containment helper.
    pub fn kind(self) -> OperationKind {
        match self {
            Operation::AnyElementContains
            | Operation::AllElementsContains
            | Operation::GetElementsContaining => OperationKind::Containment,
            op if op.name().starts_with("assert_") => OperationKind::Assertion,
            _ => OperationKind::Predicate,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An alternate name bound to a canonical operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alias {
    /// The alternate spelling.
    pub name: &'static str,
    /// The operation it calls.
    pub target: Operation,
}

const fn alias(name: &'static str, target: Operation) -> Alias {
    Alias { name, target }
}

/// Every alias, matching the re-exports in this module.
pub static ALIASES: [Alias; 17] = [
    alias("is_type", Operation::IsValueOfType),
    alias("is_all_type", Operation::IsAllValuesOfType),
    alias("is_any_type", Operation::IsAnyValuesOfType),
    alias("is_in", Operation::IsValueInIterable),
    alias("is_all_in", Operation::IsAllValuesInIterable),
    alias("is_any_in", Operation::IsAnyValuesInIterable),
    alias("is_valid", Operation::IsValidValue),
    alias("assert_type", Operation::AssertValueOfType),
    alias("assert_is_type", Operation::AssertValueOfType),
    alias("assert_all_type", Operation::AssertAllValuesOfType),
    alias("assert_all_is_type", Operation::AssertAllValuesOfType),
    alias("assert_any_type", Operation::AssertAnyValuesOfType),
    alias("assert_any_is_type", Operation::AssertAnyValuesOfType),
    alias("assert_in", Operation::AssertValueInIterable),
    alias("assert_all_in", Operation::AssertAllValuesInIterable),
    alias("assert_any_in", Operation::AssertAnyValuesInIterable),
    alias("assert_is_valid", Operation::AssertIsValidValue),
];

/// Look up an operation by canonical name or alias.
pub fn resolve(name: &str) -> Option<Operation> {
    Operation::ALL
        .iter()
        .copied()
        .find(|op| op.name() == name)
        .or_else(|| {
            ALIASES
                .iter()
                .find(|alias| alias.name == name)
                .map(|alias| alias.target)
        })
}

/// The aliases bound to `op`, in registry order.
pub fn aliases_of(op: Operation) -> impl Iterator<Item = &'static str> {
    ALIASES
        .iter()
        .filter(move |alias| alias.target == op)
        .map(|alias| alias.name)
}
