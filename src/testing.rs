//! Testing utilities for code that uses checkers
//!
//! This module provides assertion macros for [`CheckResult`](crate::CheckResult)
//! values and, behind the `proptest` feature, [`Arbitrary`] implementations for
//! [`Value`](crate::Value) and [`ValueType`](crate::ValueType).
//!
//! # Examples
//!
//! ```rust
//! use checkers::{assert_passes, assert_validation_failure, assert_invalid_specification};
//! use checkers::{assert_value_of_type, FailureKind, ValueType};
//!
//! assert_passes!(assert_value_of_type(&1, ValueType::Int));
//! assert_validation_failure!(assert_value_of_type(&"1", ValueType::Int));
//! assert_validation_failure!(assert_value_of_type(&"1", ValueType::Int), FailureKind::Type);
//! assert_invalid_specification!(assert_value_of_type(&1, Vec::<ValueType>::new()));
//! ```
//!
//! [`Arbitrary`]: https://docs.rs/proptest/latest/proptest/arbitrary/trait.Arbitrary.html

/// Assert that a check succeeds.
///
/// This macro will panic if the result is an error.
///
/// # Example
///
/// ```rust
/// use checkers::{assert_passes, is_value_of_type, ValueType};
///
/// assert_passes!(is_value_of_type(&1, ValueType::Int));
/// ```
#[macro_export]
macro_rules! assert_passes {
    ($result:expr) => {
        match $result {
            ::std::result::Result::Ok(_) => {}
            ::std::result::Result::Err(e) => {
                panic!("Expected Ok, got Err: {:?}", e);
            }
        }
    };
}

/// Assert that an assertion reports a validation failure.
///
/// With a second argument, also asserts the failure's
/// [`FailureKind`](crate::FailureKind).
///
/// # Example
///
/// ```rust
/// use checkers::{assert_validation_failure, assert_value_in_iterable, FailureKind};
///
/// assert_validation_failure!(assert_value_in_iterable(&4, &[1, 2]), FailureKind::Membership);
/// ```
#[macro_export]
macro_rules! assert_validation_failure {
    ($result:expr) => {
        match $result {
            ::std::result::Result::Err($crate::CheckError::ValidationFailure(_)) => {}
            other => {
                panic!("Expected ValidationFailure, got {:?}", other);
            }
        }
    };
    ($result:expr, $kind:expr) => {
        match $result {
            ::std::result::Result::Err($crate::CheckError::ValidationFailure(failure)) => {
                assert_eq!(failure.kind(), $kind);
            }
            other => {
                panic!("Expected ValidationFailure of kind {:?}, got {:?}", $kind, other);
            }
        }
    };
}

/// Assert that a check rejected its constraint as malformed.
///
/// # Example
///
/// ```rust
/// use checkers::{assert_invalid_specification, is_value_between};
///
/// assert_invalid_specification!(is_value_between(&5, &10, &0));
/// ```
#[macro_export]
macro_rules! assert_invalid_specification {
    ($result:expr) => {
        match $result {
            ::std::result::Result::Err($crate::CheckError::InvalidSpecification { .. }) => {}
            other => {
                panic!("Expected InvalidSpecification, got {:?}", other);
            }
        }
    };
}

#[cfg(feature = "proptest")]
use crate::value::{Value, ValueType};
#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl Arbitrary for ValueType {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            Just(ValueType::Null),
            Just(ValueType::Bool),
            Just(ValueType::Int),
            Just(ValueType::Float),
            Just(ValueType::Number),
            Just(ValueType::Str),
            Just(ValueType::List),
            Just(ValueType::Tuple),
            Just(ValueType::Map),
            Just(ValueType::Set),
        ]
        .boxed()
    }
}

#[cfg(feature = "proptest")]
impl Arbitrary for Value {
    /// Maximum nesting depth of generated collections.
    type Parameters = u32;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(depth: Self::Parameters) -> Self::Strategy {
        // NaN breaks reflexive equality, so only finite floats are generated
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(Value::Int),
            (-1.0e9..1.0e9f64).prop_map(Value::Float),
            "[a-z]{0,6}".prop_map(Value::Str),
        ];
        leaf.prop_recursive(depth.max(1), 32, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::List),
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Tuple),
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::set),
                prop::collection::btree_map("[a-z]{1,3}", inner, 0..4).prop_map(Value::Map),
            ]
        })
        .boxed()
    }
}
