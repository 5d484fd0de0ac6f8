//! Type predicates

use super::combinators::Predicate;
use crate::error::CheckResult;
use crate::types::TypeSpec;
use crate::value::AsValue;

/// Predicate that checks a value is an instance of one of the spec's types.
#[derive(Clone, Debug, PartialEq)]
pub struct OfType {
    spec: TypeSpec,
}

impl OfType {
    /// The type specification checked against.
    pub fn spec(&self) -> &TypeSpec {
        &self.spec
    }
}

impl<T: AsValue + ?Sized> Predicate<T> for OfType {
    #[inline]
    fn check(&self, value: &T) -> CheckResult<bool> {
        self.spec.validate()?;
        Ok(self.spec.matches(value.value_type()))
    }

    fn validate(&self) -> CheckResult<()> {
        self.spec.validate()
    }

    fn expectation(&self) -> String {
        format!("of type {}", self.spec)
    }
}

/// Create a predicate that checks a value's runtime type.
///
/// # Example
///
/// ```rust
/// use checkers::predicate::*;
/// use checkers::ValueType;
///
/// assert_eq!(of_type(ValueType::Int).check(&5), Ok(true));
/// assert_eq!(of_type([ValueType::Int, ValueType::Float]).check(&"5"), Ok(false));
/// ```
pub fn of_type(types: impl Into<TypeSpec>) -> OfType {
    OfType { spec: types.into() }
}
