//! Comparison and range predicates
//!
//! This module provides the closed [`Operator`] table and the predicates built
//! on it, plus the inclusive [`Between`] range predicate.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::combinators::Predicate;
use crate::error::{CheckError, CheckResult};
use crate::value::{AsValue, Value, ValueType};

/// A comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operator {
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `in`: the value is held by the target container.
    In,
    /// `not in`
    NotIn,
    /// `is`: same type tag and equal.
    Is,
    /// `is not`
    IsNot,
}

impl Operator {
    /// Every operator, in table order.
    pub const ALL: [Operator; 10] = [
        Operator::Lt,
        Operator::Le,
        Operator::Gt,
        Operator::Ge,
        Operator::Eq,
        Operator::Ne,
        Operator::In,
        Operator::NotIn,
        Operator::Is,
        Operator::IsNot,
    ];

    /// The operator's textual symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Lt => "<",
            Operator::Le => "<=",
            Operator::Gt => ">",
            Operator::Ge => ">=",
            Operator::Eq => "==",
            Operator::Ne => "!=",
            Operator::In => "in",
            Operator::NotIn => "not in",
            Operator::Is => "is",
            Operator::IsNot => "is not",
        }
    }

    /// Apply `value <op> target`.
    ///
    /// Ordering two values that have no order between them (e.g. `'a' < 1`)
    /// is a malformed constraint, except for numbers, where NaN compares false,
    /// and for sets, which are ordered by inclusion. `in`/`not in` need a
    /// container or string target.
    ///
    /// ```
    /// use checkers::predicate::Operator;
    /// use checkers::{values, Value};
    ///
    /// let target = Value::List(values![1, 2, 3]);
    /// assert_eq!(Operator::In.evaluate(&Value::Int(2), &target), Ok(true));
    /// assert_eq!(Operator::Gt.evaluate(&Value::Int(5), &Value::Int(3)), Ok(true));
    /// assert!(Operator::Lt.evaluate(&Value::from("a"), &Value::Int(1)).is_err());
    /// ```
    pub fn evaluate(self, value: &Value, target: &Value) -> CheckResult<bool> {
        match self {
            Operator::Lt => self.ordered(value, target, Ordering::is_lt),
            Operator::Le => self.ordered(value, target, Ordering::is_le),
            Operator::Gt => self.ordered(value, target, Ordering::is_gt),
            Operator::Ge => self.ordered(value, target, Ordering::is_ge),
            Operator::Eq => Ok(value == target),
            Operator::Ne => Ok(value != target),
            Operator::In => self.membership(value, target),
            Operator::NotIn => self.membership(value, target).map(|held| !held),
            Operator::Is => Ok(value.is_identical(target)),
            Operator::IsNot => Ok(!value.is_identical(target)),
        }
    }

    fn ordered(
        self,
        value: &Value,
        target: &Value,
        accept: fn(Ordering) -> bool,
    ) -> CheckResult<bool> {
        match value.partial_cmp(target) {
            Some(ordering) => Ok(accept(ordering)),
            None if is_number(value) && is_number(target) => Ok(false),
            // neither set includes the other
            None if is_set(value) && is_set(target) => Ok(false),
            None => Err(CheckError::invalid_specification(format!(
                "'{}' not supported between '{}' and '{}'",
                self.symbol(),
                value.value_type(),
                target.value_type()
            ))),
        }
    }

    fn membership(self, value: &Value, target: &Value) -> CheckResult<bool> {
        target.holds(value).ok_or_else(|| {
            CheckError::invalid_specification(format!(
                "'{}' needs a container target, got '{}'",
                self.symbol(),
                target.value_type()
            ))
        })
    }
}

fn is_number(value: &Value) -> bool {
    ValueType::Number.admits(value.value_type())
}

fn is_set(value: &Value) -> bool {
    matches!(value, Value::Set(_))
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operator {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operator::ALL
            .into_iter()
            .find(|op| op.symbol() == s)
            .ok_or_else(|| {
                let valid: Vec<String> = Operator::ALL
                    .iter()
                    .map(|op| format!("'{}'", op.symbol()))
                    .collect();
                CheckError::invalid_specification(format!(
                    "Unknown operator '{}'. Valid operators are: [{}]",
                    s,
                    valid.join(", ")
                ))
            })
    }
}

/// Predicate for `value <op> target`.
#[derive(Clone, Debug, PartialEq)]
pub struct Compare {
    op: Operator,
    target: Value,
}

impl Compare {
    /// The operator applied.
    pub fn op(&self) -> Operator {
        self.op
    }

    /// The right-hand side.
    pub fn target(&self) -> &Value {
        &self.target
    }
}

impl<T: AsValue + ?Sized> Predicate<T> for Compare {
    #[inline]
    fn check(&self, value: &T) -> CheckResult<bool> {
        self.op.evaluate(&value.to_value(), &self.target)
    }

    fn expectation(&self) -> String {
        format!("{} {}", self.op, self.target.repr())
    }
}

/// Create a comparison predicate from an operator symbol.
///
/// Fails when the symbol is not one of the known operators.
///
/// # Example
///
/// ```rust
/// use checkers::predicate::*;
///
/// let p = compare("<=", 10).unwrap();
/// assert_eq!(p.check(&10), Ok(true));
/// assert_eq!(p.check(&11), Ok(false));
///
/// assert!(compare("~", 10).is_err());
/// ```
pub fn compare(op: &str, target: impl Into<Value>) -> CheckResult<Compare> {
    Ok(compare_with(op.parse()?, target))
}

/// Create a comparison predicate from a typed operator.
pub fn compare_with(op: Operator, target: impl Into<Value>) -> Compare {
    Compare {
        op,
        target: target.into(),
    }
}

/// Predicate that checks if value is between min and max (inclusive).
#[derive(Clone, Copy, Debug)]
pub struct Between<T> {
    min: T,
    max: T,
}

impl<T> Between<T> {
    /// Lower bound.
    pub fn min(&self) -> &T {
        &self.min
    }

    /// Upper bound.
    pub fn max(&self) -> &T {
        &self.max
    }
}

impl<T: PartialOrd + AsValue + Send + Sync> Predicate<T> for Between<T> {
    #[inline]
    fn check(&self, value: &T) -> CheckResult<bool> {
        Predicate::<T>::validate(self)?;
        Ok(*value >= self.min && *value <= self.max)
    }

    fn validate(&self) -> CheckResult<()> {
        match self.min.partial_cmp(&self.max) {
            Some(Ordering::Less | Ordering::Equal) => Ok(()),
            _ => Err(CheckError::invalid_specification(format!(
                "Invalid range: min {} is not less than or equal to max {}",
                self.min.to_value(),
                self.max.to_value()
            ))),
        }
    }

    fn expectation(&self) -> String {
        format!(
            "between {} and {}",
            self.min.to_value(),
            self.max.to_value()
        )
    }
}

/// Create a predicate that checks if value is between min and max (inclusive).
///
/// `min > max` is a malformed constraint.
///
/// # Example
///
/// ```rust
/// use checkers::predicate::*;
///
/// let p = between(0, 100);
/// assert_eq!(p.check(&0), Ok(true));
/// assert_eq!(p.check(&100), Ok(true));
/// assert_eq!(p.check(&101), Ok(false));
/// assert!(between(10, 0).check(&5).is_err());
/// ```
pub fn between<T: PartialOrd + AsValue + Send + Sync>(min: T, max: T) -> Between<T> {
    Between { min, max }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values;

    #[test]
    fn test_parse_every_symbol() {
        for op in Operator::ALL {
            assert_eq!(op.symbol().parse::<Operator>(), Ok(op));
        }
    }

    #[test]
    fn test_unknown_operator_lists_valid_ones() {
        let err = "=~".parse::<Operator>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid specification: Unknown operator '=~'. Valid operators are: \
             ['<', '<=', '>', '>=', '==', '!=', 'in', 'not in', 'is', 'is not']"
        );
    }

    #[test]
    fn test_ordering_operators() {
        let five = Value::Int(5);
        let three = Value::Int(3);
        assert_eq!(Operator::Lt.evaluate(&five, &three), Ok(false));
        assert_eq!(Operator::Le.evaluate(&three, &three), Ok(true));
        assert_eq!(Operator::Gt.evaluate(&five, &three), Ok(true));
        assert_eq!(Operator::Ge.evaluate(&five, &Value::Float(5.0)), Ok(true));
    }

    #[test]
    fn test_nan_compares_false() {
        let nan = Value::Float(f64::NAN);
        assert_eq!(Operator::Lt.evaluate(&nan, &Value::Int(1)), Ok(false));
        assert_eq!(Operator::Ge.evaluate(&nan, &Value::Int(1)), Ok(false));
    }

    #[test]
    fn test_unordered_pair_is_invalid() {
        let err = Operator::Lt
            .evaluate(&Value::from("5"), &Value::Int(3))
            .unwrap_err();
        assert!(err.is_invalid_specification());
        assert!(err.to_string().contains("'<' not supported between 'str' and 'int'"));
    }

    #[test]
    fn test_equality_operators() {
        assert_eq!(Operator::Eq.evaluate(&Value::Int(1), &Value::Float(1.0)), Ok(true));
        assert_eq!(Operator::Ne.evaluate(&Value::Int(1), &Value::Int(2)), Ok(true));
    }

    #[test]
    fn test_identity_operators() {
        assert_eq!(Operator::Is.evaluate(&Value::Int(1), &Value::Float(1.0)), Ok(false));
        assert_eq!(Operator::Is.evaluate(&Value::Null, &Value::Null), Ok(true));
        assert_eq!(Operator::IsNot.evaluate(&Value::Int(1), &Value::Float(1.0)), Ok(true));
    }

    #[test]
    fn test_membership_operators() {
        let list = Value::List(values![1, 2, 3]);
        assert_eq!(Operator::In.evaluate(&Value::Int(2), &list), Ok(true));
        assert_eq!(Operator::NotIn.evaluate(&Value::Int(4), &list), Ok(true));
        assert_eq!(
            Operator::In.evaluate(&Value::from("an"), &Value::from("banana")),
            Ok(true)
        );
        assert!(Operator::In.evaluate(&Value::Int(1), &Value::Int(1)).is_err());
    }

    #[test]
    fn test_set_operators() {
        let small = Value::set(values![1, 2]);
        let large = Value::set(values![3, 2, 1]);
        let other = Value::set(values![4]);
        assert_eq!(Operator::In.evaluate(&Value::Float(2.0), &small), Ok(true));
        assert_eq!(Operator::NotIn.evaluate(&Value::Int(3), &small), Ok(true));
        assert_eq!(Operator::Lt.evaluate(&small, &large), Ok(true));
        assert_eq!(Operator::Ge.evaluate(&large, &small), Ok(true));
        assert_eq!(Operator::Le.evaluate(&small, &other), Ok(false));
        assert_eq!(Operator::Gt.evaluate(&small, &other), Ok(false));
        assert!(Operator::Lt.evaluate(&small, &Value::List(values![1, 2])).is_err());
    }

    #[test]
    fn test_large_int_against_float() {
        let two_53 = 9_007_199_254_740_992_i64;
        assert_eq!(
            Operator::Lt.evaluate(&Value::Float(two_53 as f64), &Value::Int(two_53 + 1)),
            Ok(true)
        );
        assert_eq!(
            Operator::Eq.evaluate(&Value::Int(two_53 + 1), &Value::Float(two_53 as f64)),
            Ok(false)
        );
    }

    #[test]
    fn test_compare_predicate() {
        let p = compare(">", 3).unwrap();
        assert_eq!(p.check(&5), Ok(true));
        assert_eq!(p.check(&2.5), Ok(false));
        assert_eq!(Predicate::<i32>::expectation(&p), "> 3");
        assert_eq!(p.op(), Operator::Gt);
        assert_eq!(p.target(), &Value::Int(3));
    }

    #[test]
    fn test_between() {
        let p = between(0, 10);
        assert_eq!(p.check(&5), Ok(true));
        assert_eq!(p.check(&0), Ok(true));
        assert_eq!(p.check(&10), Ok(true));
        assert_eq!(p.check(&-1), Ok(false));
        assert_eq!(p.check(&11), Ok(false));
        assert_eq!(between(5.0, 6.0).check(&5.5), Ok(true));
    }

    #[test]
    fn test_between_inverted_range() {
        let err = between(10, 0).check(&5).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid specification: Invalid range: min 10 is not less than or equal to max 0"
        );
    }
}
