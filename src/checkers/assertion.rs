//! Assertion checkers
//!
//! Each assertion wraps the boolean checker of the same name and turns a
//! `false` answer into a [`CheckError::ValidationFailure`] whose message names
//! the offending value(s), the expected constraint and, for collections, the
//! aggregation mode. Malformed constraints are reported exactly as the boolean
//! checkers report them.
//!
//! [`CheckError::ValidationFailure`]: crate::CheckError::ValidationFailure

use crate::error::{CheckResult, Failure, FailureKind};
use crate::mode::Mode;
use crate::predicate::{
    all, any, between, compare, ensure_with, fail, of_type, one_of, Predicate, PredicateExt,
};
use crate::types::TypeSpec;
use crate::value::{AsValue, Value};

use super::logical::no_constraint;

fn list<'a, T: AsValue + 'a>(values: impl IntoIterator<Item = &'a T>) -> Value {
    Value::List(values.into_iter().map(AsValue::to_value).collect())
}

/// Assert a value is of a specified type or one of several types.
///
/// # Example
///
/// ```
/// use checkers::{assert_value_of_type, ValueType};
///
/// assert!(assert_value_of_type(&5, ValueType::Int).is_ok());
///
/// let err = assert_value_of_type(&"x", ValueType::Int).unwrap_err();
/// assert_eq!(err.to_string(), "Value 'x' is not correct type: 'str'. Must be: 'int'.");
/// ```
pub fn assert_value_of_type<V>(value: &V, types: impl Into<TypeSpec>) -> CheckResult<()>
where
    V: AsValue + ?Sized,
{
    let spec = types.into();
    let expected = spec.to_string();
    ensure_with(value, &of_type(spec), |value, _| {
        Failure::new(
            FailureKind::Type,
            expected.as_str(),
            format!(
                "Value '{}' is not correct type: '{}'. Must be: {}.",
                value.to_value(),
                value.value_type(),
                expected
            ),
        )
        .with_offending(vec![value.to_value()])
    })
}

/// Assert every value is of the specified type(s).
///
/// # Example
///
/// ```
/// use checkers::{assert_all_values_of_type, values, ValueType};
///
/// let err = assert_all_values_of_type(&values![1, "2", 3], ValueType::Int).unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "Some elements ['2'] have the incorrect type ['str']. Must be: 'int' (mode: all)."
/// );
/// ```
pub fn assert_all_values_of_type<V: AsValue>(
    values: &[V],
    types: impl Into<TypeSpec>,
) -> CheckResult<()> {
    let spec = types.into();
    let predicate = all(of_type(spec.clone()));
    if predicate.check(values)? {
        return Ok(());
    }
    let failing = predicate.failing(values)?;
    let failing_types: Vec<Value> = failing
        .iter()
        .map(|value| Value::from(value.value_type().name()))
        .collect();
    Err(fail(
        Failure::new(
            FailureKind::Type,
            spec.to_string(),
            format!(
                "Some elements {} have the incorrect type {}. Must be: {} (mode: {}).",
                list(failing.iter().copied()),
                Value::List(failing_types),
                spec,
                Mode::All
            ),
        )
        .with_mode(Mode::All)
        .with_offending(failing.iter().map(|value| value.to_value()).collect()),
    ))
}

/// Assert at least one value is of the specified type(s).
///
/// # Example
///
/// ```
/// use checkers::{assert_any_values_of_type, values, ValueType};
///
/// let err = assert_any_values_of_type(&values!["a", "b"], ValueType::Int).unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "None of the elements in ['a', 'b'] have the correct type. Must be: 'int' (mode: any)."
/// );
/// ```
pub fn assert_any_values_of_type<V: AsValue>(
    values: &[V],
    types: impl Into<TypeSpec>,
) -> CheckResult<()> {
    let spec = types.into();
    if any(of_type(spec.clone())).check(values)? {
        return Ok(());
    }
    // nothing matched, so every element is offending
    Err(fail(
        Failure::new(
            FailureKind::Type,
            spec.to_string(),
            format!(
                "None of the elements in {} have the correct type. Must be: {} (mode: {}).",
                list(values),
                spec,
                Mode::Any
            ),
        )
        .with_mode(Mode::Any)
        .with_offending(values.iter().map(AsValue::to_value).collect()),
    ))
}

/// Assert a value equals one of the candidates.
///
/// # Example
///
/// ```
/// use checkers::assert_value_in_iterable;
///
/// let err = assert_value_in_iterable(&"a", &["b", "c"]).unwrap_err();
/// assert_eq!(err.to_string(), "Value 'a' not found in iterable: ['b', 'c']");
/// ```
pub fn assert_value_in_iterable<T>(value: &T, candidates: &[T]) -> CheckResult<()>
where
    T: PartialEq + AsValue + Sync,
{
    let predicate = one_of(candidates);
    ensure_with(value, &predicate, |value, _| {
        let expected = predicate.render().to_string();
        Failure::new(
            FailureKind::Membership,
            expected.as_str(),
            format!(
                "Value '{}' not found in iterable: {}",
                value.to_value(),
                expected
            ),
        )
        .with_offending(vec![value.to_value()])
    })
}

/// Assert every value is one of the candidates.
///
/// # Example
///
/// ```
/// use checkers::assert_all_values_in_iterable;
///
/// let err = assert_all_values_in_iterable(&["a", "d"], &["a", "b", "c"]).unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "Some values ['d'] are missing from ['a', 'b', 'c'] (mode: all)"
/// );
/// ```
pub fn assert_all_values_in_iterable<T>(values: &[T], candidates: &[T]) -> CheckResult<()>
where
    T: PartialEq + AsValue + Sync,
{
    let predicate = all(one_of(candidates));
    if predicate.check(values)? {
        return Ok(());
    }
    let missing = predicate.failing(values)?;
    let expected = list(candidates).to_string();
    Err(fail(
        Failure::new(
            FailureKind::Membership,
            expected.as_str(),
            format!(
                "Some values {} are missing from {} (mode: {})",
                list(missing.iter().copied()),
                expected,
                Mode::All
            ),
        )
        .with_mode(Mode::All)
        .with_offending(missing.iter().map(|value| value.to_value()).collect()),
    ))
}

/// Assert at least one value is one of the candidates.
///
/// # Example
///
/// ```
/// use checkers::assert_any_values_in_iterable;
///
/// let err = assert_any_values_in_iterable(&[4, 5], &[1, 2, 3]).unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "None of the values in [4, 5] can be found in [1, 2, 3] (mode: any)"
/// );
/// ```
pub fn assert_any_values_in_iterable<T>(values: &[T], candidates: &[T]) -> CheckResult<()>
where
    T: PartialEq + AsValue + Sync,
{
    if any(one_of(candidates)).check(values)? {
        return Ok(());
    }
    let expected = list(candidates).to_string();
    Err(fail(
        Failure::new(
            FailureKind::Membership,
            expected.as_str(),
            format!(
                "None of the values in {} can be found in {} (mode: {})",
                list(values),
                expected,
                Mode::Any
            ),
        )
        .with_mode(Mode::Any)
        .with_offending(values.iter().map(AsValue::to_value).collect()),
    ))
}

fn invalid_value<V: AsValue + ?Sized>(value: &V, expectation: &str) -> Failure {
    Failure::new(
        FailureKind::Composite,
        expectation,
        format!(
            "Value '{}' is not valid: must be {}",
            value.to_value(),
            expectation
        ),
    )
    .with_offending(vec![value.to_value()])
}

/// Assert a value satisfies a type spec, a candidate set, or both.
///
/// # Example
///
/// ```
/// use checkers::{assert_is_valid_value, ValueType};
///
/// let allowed = [1, 2, 3];
/// let err = assert_is_valid_value(&7, Some(ValueType::Int.into()), Some(&allowed[..]))
///     .unwrap_err();
/// assert_eq!(err.to_string(), "Value '7' is not valid: must be of type 'int' and in [1, 2, 3]");
/// ```
pub fn assert_is_valid_value<V>(
    value: &V,
    types: Option<TypeSpec>,
    candidates: Option<&[V]>,
) -> CheckResult<()>
where
    V: PartialEq + AsValue + Sync,
{
    match (types, candidates) {
        (Some(types), Some(candidates)) => {
            ensure_with(value, &of_type(types).and(one_of(candidates)), invalid_value)
        }
        (Some(types), None) => ensure_with(value, &of_type(types), invalid_value),
        (None, Some(candidates)) => ensure_with(value, &one_of(candidates), invalid_value),
        (None, None) => Err(no_constraint()),
    }
}

/// Assert `value <op> target` for an operator symbol such as `"<="` or `"in"`.
///
/// # Example
///
/// ```
/// use checkers::assert_valid_comparison;
///
/// assert!(assert_valid_comparison(&5, ">", &3).is_ok());
///
/// let err = assert_valid_comparison(&5, "<", &3).unwrap_err();
/// assert_eq!(err.to_string(), "Validation failed: '5 < 3' is not true");
/// ```
pub fn assert_valid_comparison<V, U>(value: &V, op: &str, target: &U) -> CheckResult<()>
where
    V: AsValue + ?Sized,
    U: AsValue + ?Sized,
{
    let predicate = compare(op, target.to_value())?;
    ensure_with(value, &predicate, |value, expectation| {
        Failure::new(
            FailureKind::Comparison,
            expectation,
            format!(
                "Validation failed: '{} {} {}' is not true",
                value.to_value(),
                predicate.op(),
                predicate.target()
            ),
        )
        .with_offending(vec![value.to_value()])
    })
}

/// Assert a value lies in `[min, max]`.
///
/// # Example
///
/// ```
/// use checkers::assert_value_between;
///
/// assert!(assert_value_between(&5, &0, &10).is_ok());
///
/// let err = assert_value_between(&11, &0, &10).unwrap_err();
/// assert_eq!(err.to_string(), "Invalid value: 11 is not between 0 and 10");
/// ```
pub fn assert_value_between<T>(value: &T, min: &T, max: &T) -> CheckResult<()>
where
    T: PartialOrd + AsValue + Sync,
{
    ensure_with(&value, &between(min, max), |value, expectation| {
        Failure::new(
            FailureKind::Range,
            expectation,
            format!("Invalid value: {} is not {}", value.to_value(), expectation),
        )
        .with_offending(vec![value.to_value()])
    })
}

/// Assert every value lies in `[min, max]`.
///
/// # Example
///
/// ```
/// use checkers::assert_all_values_between;
///
/// let err = assert_all_values_between(&[1, 6, -1], &0, &5).unwrap_err();
/// assert_eq!(err.to_string(), "Values [6, -1] not between 0 and 5 (mode: all)");
/// ```
pub fn assert_all_values_between<T>(values: &[T], min: &T, max: &T) -> CheckResult<()>
where
    T: PartialOrd + AsValue + Sync,
{
    let range = between(min, max);
    range.validate()?;
    let mut outside = Vec::new();
    for value in values {
        if !range.check(&value)? {
            outside.push(value);
        }
    }
    if outside.is_empty() {
        return Ok(());
    }
    let expectation = range.expectation();
    Err(fail(
        Failure::new(
            FailureKind::Range,
            expectation.as_str(),
            format!(
                "Values {} not {} (mode: {})",
                list(outside.iter().copied()),
                expectation,
                Mode::All
            ),
        )
        .with_mode(Mode::All)
        .with_offending(outside.iter().map(|value| value.to_value()).collect()),
    ))
}
