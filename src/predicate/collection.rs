//! Collection predicates
//!
//! This module lifts an element predicate to a slice, aggregating the
//! per-element results with a [`Mode`].

use super::combinators::Predicate;
use crate::error::CheckResult;
use crate::mode::Mode;

/// Predicate that checks all or any elements satisfy an element predicate.
///
/// Over an empty slice `All` is vacuously true and `Any` is false, but the
/// element predicate's constraint is still validated.
#[derive(Clone, Copy, Debug)]
pub struct Quantified<P> {
    inner: P,
    mode: Mode,
}

impl<P> Quantified<P> {
    /// The element predicate.
    pub fn inner(&self) -> &P {
        &self.inner
    }

    /// The aggregation mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Elements that do not satisfy the element predicate, in order.
    pub fn failing<'v, T>(&self, values: &'v [T]) -> CheckResult<Vec<&'v T>>
    where
        P: Predicate<T>,
    {
        self.inner.validate()?;
        let mut failing = Vec::new();
        for value in values {
            if !self.inner.check(value)? {
                failing.push(value);
            }
        }
        Ok(failing)
    }
}

impl<T, P: Predicate<T>> Predicate<[T]> for Quantified<P> {
    #[inline]
    fn check(&self, values: &[T]) -> CheckResult<bool> {
        self.inner.validate()?;
        self.mode
            .try_aggregate(values.iter().map(|value| self.inner.check(value)))
    }

    fn validate(&self) -> CheckResult<()> {
        self.inner.validate()
    }

    fn expectation(&self) -> String {
        format!("{} elements {}", self.mode, self.inner.expectation())
    }
}

impl<T, P: Predicate<T>> Predicate<Vec<T>> for Quantified<P> {
    #[inline]
    fn check(&self, values: &Vec<T>) -> CheckResult<bool> {
        Predicate::<[T]>::check(self, values.as_slice())
    }

    fn validate(&self) -> CheckResult<()> {
        self.inner.validate()
    }

    fn expectation(&self) -> String {
        Predicate::<[T]>::expectation(self)
    }
}

/// Create a predicate that checks elements with the given aggregation mode.
///
/// # Example
///
/// ```rust
/// use checkers::predicate::*;
/// use checkers::{Mode, ValueType};
///
/// let ints = quantified(of_type(ValueType::Int), Mode::All);
/// assert_eq!(ints.check(&[1, 2, 3][..]), Ok(true));
/// ```
pub fn quantified<P>(predicate: P, mode: Mode) -> Quantified<P> {
    Quantified {
        inner: predicate,
        mode,
    }
}

/// Create a predicate that checks if all elements satisfy a condition.
///
/// # Example
///
/// ```rust
/// use checkers::predicate::*;
/// use checkers::{values, ValueType};
///
/// assert_eq!(all(of_type(ValueType::Int)).check(&values![1, 2, 3]), Ok(true));
/// assert_eq!(all(of_type(ValueType::Int)).check(&values![1, "2", 3]), Ok(false));
/// ```
pub fn all<P>(predicate: P) -> Quantified<P> {
    quantified(predicate, Mode::All)
}

/// Create a predicate that checks if any element satisfies a condition.
///
/// # Example
///
/// ```rust
/// use checkers::predicate::*;
/// use checkers::{values, ValueType};
///
/// assert_eq!(any(of_type(ValueType::Str)).check(&values![1, "a"]), Ok(true));
/// assert_eq!(any(of_type(ValueType::Str)).check(&values![1, 2]), Ok(false));
/// ```
pub fn any<P>(predicate: P) -> Quantified<P> {
    quantified(predicate, Mode::Any)
}
