//! Boolean checkers
//!
//! Every function here answers `Ok(true)` or `Ok(false)` for a well-formed
//! constraint and only returns `Err(CheckError::InvalidSpecification)` when
//! the constraint itself is malformed.

use crate::error::{CheckError, CheckResult};
use crate::mode::Mode;
use crate::predicate::{
    between, compare, of_type, one_of, quantified, Predicate, PredicateExt,
};
use crate::types::TypeSpec;
use crate::value::AsValue;

/// Check if a value is of a specified type or one of several types.
///
/// # Example
///
/// ```
/// use checkers::{is_value_of_type, ValueType};
///
/// assert_eq!(is_value_of_type(&5, ValueType::Int), Ok(true));
/// assert_eq!(is_value_of_type(&"5", [ValueType::Int, ValueType::Float]), Ok(false));
/// ```
pub fn is_value_of_type<V>(value: &V, types: impl Into<TypeSpec>) -> CheckResult<bool>
where
    V: AsValue + ?Sized,
{
    of_type(types).check(value)
}

/// Check values of a collection against a type spec, aggregating with `mode`.
pub fn check_values_of_type<V: AsValue>(
    values: &[V],
    types: impl Into<TypeSpec>,
    mode: Mode,
) -> CheckResult<bool> {
    quantified(of_type(types), mode).check(values)
}

/// Check if every value is of the specified type(s).
///
/// An empty collection is vacuously `true`.
///
/// # Example
///
/// ```
/// use checkers::{is_all_values_of_type, values, ValueType};
///
/// assert_eq!(is_all_values_of_type(&[1, 2, 3], ValueType::Int), Ok(true));
/// assert_eq!(is_all_values_of_type(&values![1, "2", 3], ValueType::Int), Ok(false));
/// assert_eq!(is_all_values_of_type(&values![], ValueType::Int), Ok(true));
/// ```
pub fn is_all_values_of_type<V: AsValue>(
    values: &[V],
    types: impl Into<TypeSpec>,
) -> CheckResult<bool> {
    check_values_of_type(values, types, Mode::All)
}

/// Check if at least one value is of the specified type(s).
///
/// An empty collection is `false`.
///
/// # Example
///
/// ```
/// use checkers::{is_any_values_of_type, values, ValueType};
///
/// assert_eq!(is_any_values_of_type(&values![1, "a", 3.0], ValueType::Str), Ok(true));
/// assert_eq!(is_any_values_of_type(&values![1, "a", 3.0], ValueType::Map), Ok(false));
/// ```
pub fn is_any_values_of_type<V: AsValue>(
    values: &[V],
    types: impl Into<TypeSpec>,
) -> CheckResult<bool> {
    check_values_of_type(values, types, Mode::Any)
}

/// Check if a value equals one of the candidates.
///
/// An empty candidate set is a malformed constraint.
///
/// # Example
///
/// ```
/// use checkers::is_value_in_iterable;
///
/// assert_eq!(is_value_in_iterable(&3, &[1, 2, 3]), Ok(true));
/// assert_eq!(is_value_in_iterable(&4, &[1, 2, 3]), Ok(false));
/// assert!(is_value_in_iterable(&4, &[] as &[i32]).is_err());
/// ```
pub fn is_value_in_iterable<T>(value: &T, candidates: &[T]) -> CheckResult<bool>
where
    T: PartialEq + AsValue + Sync,
{
    one_of(candidates).check(value)
}

/// Check values of a collection for membership, aggregating with `mode`.
pub fn check_values_in_iterable<T>(
    values: &[T],
    candidates: &[T],
    mode: Mode,
) -> CheckResult<bool>
where
    T: PartialEq + AsValue + Sync,
{
    quantified(one_of(candidates), mode).check(values)
}

/// Check if every value is one of the candidates.
///
/// An empty collection is vacuously `true`.
///
/// # Example
///
/// ```
/// use checkers::is_all_values_in_iterable;
///
/// assert_eq!(is_all_values_in_iterable(&[1, 2], &[1, 2, 3]), Ok(true));
/// assert_eq!(is_all_values_in_iterable(&[1, 4], &[1, 2, 3]), Ok(false));
/// ```
pub fn is_all_values_in_iterable<T>(values: &[T], candidates: &[T]) -> CheckResult<bool>
where
    T: PartialEq + AsValue + Sync,
{
    check_values_in_iterable(values, candidates, Mode::All)
}

/// Check if at least one value is one of the candidates.
///
/// An empty collection is `false`.
///
/// # Example
///
/// ```
/// use checkers::is_any_values_in_iterable;
///
/// assert_eq!(is_any_values_in_iterable(&[1, 4], &[1, 2, 3]), Ok(true));
/// assert_eq!(is_any_values_in_iterable(&[4, 5], &[1, 2, 3]), Ok(false));
/// ```
pub fn is_any_values_in_iterable<T>(values: &[T], candidates: &[T]) -> CheckResult<bool>
where
    T: PartialEq + AsValue + Sync,
{
    check_values_in_iterable(values, candidates, Mode::Any)
}

/// Check a value against a type spec, a candidate set, or both.
///
/// With both constraints the value must satisfy both. With neither, the call
/// is a malformed constraint rather than vacuously true.
///
/// # Example
///
/// ```
/// use checkers::{is_valid_value, ValueType};
///
/// let allowed = [1, 2, 3];
/// assert_eq!(is_valid_value(&2, Some(ValueType::Int.into()), Some(&allowed[..])), Ok(true));
/// assert_eq!(is_valid_value(&7, Some(ValueType::Int.into()), Some(&allowed[..])), Ok(false));
/// assert_eq!(is_valid_value(&7, Some(ValueType::Int.into()), None), Ok(true));
/// assert!(is_valid_value(&7, None, None).is_err());
/// ```
pub fn is_valid_value<V>(
    value: &V,
    types: Option<TypeSpec>,
    candidates: Option<&[V]>,
) -> CheckResult<bool>
where
    V: PartialEq + AsValue + Sync,
{
    match (types, candidates) {
        (Some(types), Some(candidates)) => of_type(types).and(one_of(candidates)).check(value),
        (Some(types), None) => of_type(types).check(value),
        (None, Some(candidates)) => one_of(candidates).check(value),
        (None, None) => Err(no_constraint()),
    }
}

pub(crate) fn no_constraint() -> CheckError {
    CheckError::invalid_specification(
        "a valid-value check needs a type specification, candidate values, or both",
    )
}

/// Check `value <op> target` for an operator symbol such as `"<="` or `"in"`.
///
/// # Example
///
/// ```
/// use checkers::{is_valid_comparison, values, Value};
///
/// assert_eq!(is_valid_comparison(&5, ">", &3), Ok(true));
/// assert_eq!(is_valid_comparison(&5, "<=", &3), Ok(false));
/// assert_eq!(is_valid_comparison(&2, "in", &values![1, 2]), Ok(true));
/// assert!(is_valid_comparison(&5, "=~", &3).is_err());
/// ```
pub fn is_valid_comparison<V, U>(value: &V, op: &str, target: &U) -> CheckResult<bool>
where
    V: AsValue + ?Sized,
    U: AsValue + ?Sized,
{
    compare(op, target.to_value())?.check(value)
}

/// Check if a value lies in `[min, max]`.
///
/// `min > max` is a malformed constraint.
///
/// # Example
///
/// ```
/// use checkers::is_value_between;
///
/// assert_eq!(is_value_between(&5, &0, &10), Ok(true));
/// assert_eq!(is_value_between(&10, &0, &10), Ok(true));
/// assert_eq!(is_value_between(&-1, &0, &10), Ok(false));
/// assert!(is_value_between(&5, &10, &0).is_err());
/// ```
pub fn is_value_between<T>(value: &T, min: &T, max: &T) -> CheckResult<bool>
where
    T: PartialOrd + AsValue + Sync,
{
    between(min, max).check(&value)
}

/// Check if every value lies in `[min, max]`.
///
/// An empty collection is vacuously `true`.
///
/// # Example
///
/// ```
/// use checkers::is_all_values_between;
///
/// assert_eq!(is_all_values_between(&[1, 2, 3], &0, &5), Ok(true));
/// assert_eq!(is_all_values_between(&[1, 2, 6], &0, &5), Ok(false));
/// ```
pub fn is_all_values_between<T>(values: &[T], min: &T, max: &T) -> CheckResult<bool>
where
    T: PartialOrd + AsValue + Sync,
{
    let range = between(min, max);
    range.validate()?;
    Mode::All.try_aggregate(values.iter().map(|value| range.check(&value)))
}
