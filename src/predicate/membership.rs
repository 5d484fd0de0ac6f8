//! Membership predicates

use super::combinators::Predicate;
use crate::error::{CheckError, CheckResult};
use crate::value::{AsValue, Value};

/// Predicate that checks a value equals one of a set of candidates.
#[derive(Clone, Copy, Debug)]
pub struct OneOf<'a, T> {
    candidates: &'a [T],
}

impl<'a, T: AsValue> OneOf<'a, T> {
    /// The allowed values.
    pub fn candidates(&self) -> &'a [T] {
        self.candidates
    }

    /// The candidate set as a single list value, for messages.
    pub fn render(&self) -> Value {
        self.candidates.to_value()
    }
}

impl<T: PartialEq + AsValue + Sync> Predicate<T> for OneOf<'_, T> {
    #[inline]
    fn check(&self, value: &T) -> CheckResult<bool> {
        Predicate::<T>::validate(self)?;
        Ok(self.candidates.contains(value))
    }

    fn validate(&self) -> CheckResult<()> {
        if self.candidates.is_empty() {
            return Err(CheckError::invalid_specification(
                "candidate values must not be empty",
            ));
        }
        Ok(())
    }

    fn expectation(&self) -> String {
        format!("in {}", self.render())
    }
}

/// Create a predicate that checks membership in `candidates` using `==`.
///
/// An empty candidate set is a malformed constraint.
///
/// # Example
///
/// ```rust
/// use checkers::predicate::*;
///
/// let allowed = [1, 2, 3];
/// assert_eq!(one_of(&allowed).check(&3), Ok(true));
/// assert_eq!(one_of(&allowed).check(&4), Ok(false));
/// ```
pub fn one_of<T>(candidates: &[T]) -> OneOf<'_, T> {
    OneOf { candidates }
}
