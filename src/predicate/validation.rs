//! Assertion integration for predicates
//!
//! This module turns a predicate's `Ok(false)` into a [`Failure`].

use super::combinators::Predicate;
use crate::error::{CheckError, CheckResult, Failure};

/// Assert a value satisfies a predicate.
///
/// Returns `Ok(())` if the predicate holds, the failure built by `on_failure`
/// if it does not, and any malformed-constraint error unchanged.
///
/// # Example
///
/// ```rust
/// use checkers::predicate::*;
/// use checkers::{Failure, FailureKind, ValueType};
///
/// let result = ensure_with(&"x", &of_type(ValueType::Int), |value, expectation| {
///     Failure::new(
///         FailureKind::Type,
///         expectation,
///         format!("'{}' should be {}", value, expectation),
///     )
/// });
/// assert_eq!(result.unwrap_err().to_string(), "'x' should be of type 'int'");
/// ```
pub fn ensure_with<T, P, F>(value: &T, predicate: &P, on_failure: F) -> CheckResult<()>
where
    T: ?Sized,
    P: Predicate<T>,
    F: FnOnce(&T, &str) -> Failure,
{
    if predicate.check(value)? {
        Ok(())
    } else {
        let expectation = predicate.expectation();
        Err(fail(on_failure(value, expectation.as_str())))
    }
}

/// Wrap a failure as an error, logging it.
pub(crate) fn fail(failure: Failure) -> CheckError {
    #[cfg(feature = "tracing")]
    tracing::debug!(
        kind = %failure.kind(),
        mode = ?failure.mode(),
        "assertion failed: {}",
        failure
    );
    CheckError::ValidationFailure(failure)
}
