//! Core predicate trait and logical combinators
//!
//! This module provides the fallible `Predicate` trait and the logical
//! combinators used to compose predicates.

use crate::error::CheckResult;

/// A composable, fallible predicate over values of type T.
///
/// `check` answers `Ok(true)`/`Ok(false)` for a well-formed predicate and only
/// returns `Err` when the predicate's own constraint is malformed (an empty
/// type spec, no candidates, an inverted range).
///
/// Predicates can be combined using logical operators:
/// - `and`: Both predicates must be true
/// - `or`: Either predicate must be true
/// - `not`: Inverts the predicate
///
/// # Example
///
/// ```rust
/// use checkers::predicate::*;
/// use checkers::ValueType;
///
/// let candidates = [1, 2, 3];
/// let p = of_type(ValueType::Int).and(one_of(&candidates));
/// assert_eq!(p.check(&2), Ok(true));
/// assert_eq!(p.check(&7), Ok(false));
/// ```
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &T) -> CheckResult<bool>;

    /// Reject a malformed constraint without looking at any value.
    ///
    /// Collection predicates call this first so that a bad constraint is
    /// reported even when there are no elements to check.
    fn validate(&self) -> CheckResult<()> {
        Ok(())
    }

    /// What a satisfying value looks like, e.g. `of type 'int'`.
    fn expectation(&self) -> String {
        "satisfy a custom predicate".to_string()
    }
}

// Blanket impl for closures
impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> CheckResult<bool> {
        Ok(self(value))
    }
}

/// Extension trait for predicate combinators.
///
/// All methods return concrete types. The trait is not tied to a value type:
/// predicates such as `of_type` apply to every [`AsValue`](crate::AsValue)
/// type, and the value type is only fixed when `check` is called.
pub trait PredicateExt: Sized {
    /// Combine with AND logic.
    ///
    /// Both constraints are validated before either is evaluated, so a
    /// malformed right-hand side is reported even when the left-hand side
    /// already fails.
    ///
    /// # Example
    ///
    /// ```rust
    /// use checkers::predicate::*;
    ///
    /// let p = compare(">", 0).unwrap().and(compare("<", 100).unwrap());
    /// assert_eq!(p.check(&50), Ok(true));
    /// assert_eq!(p.check(&100), Ok(false));
    /// ```
    fn and<P>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Combine with OR logic.
    ///
    /// # Example
    ///
    /// ```rust
    /// use checkers::predicate::*;
    /// use checkers::ValueType;
    ///
    /// let p = of_type(ValueType::Int).or(of_type(ValueType::Null));
    /// assert_eq!(p.check(&None::<i32>), Ok(true));
    /// assert_eq!(p.check(&5), Ok(true));
    /// assert_eq!(p.check(&"x"), Ok(false));
    /// ```
    fn or<P>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Invert the predicate.
    ///
    /// A malformed constraint stays an error; only the answer is inverted.
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<P> PredicateExt for P {}

/// AND combinator - both predicates must be true.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for And<P1, P2> {
    fn check(&self, value: &T) -> CheckResult<bool> {
        self.validate()?;
        Ok(self.0.check(value)? && self.1.check(value)?)
    }

    fn validate(&self) -> CheckResult<()> {
        self.0.validate()?;
        self.1.validate()
    }

    fn expectation(&self) -> String {
        format!("{} and {}", self.0.expectation(), self.1.expectation())
    }
}

/// OR combinator - either predicate must be true.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Or<P1, P2> {
    fn check(&self, value: &T) -> CheckResult<bool> {
        self.validate()?;
        Ok(self.0.check(value)? || self.1.check(value)?)
    }

    fn validate(&self) -> CheckResult<()> {
        self.0.validate()?;
        self.1.validate()
    }

    fn expectation(&self) -> String {
        format!("{} or {}", self.0.expectation(), self.1.expectation())
    }
}

/// NOT combinator - inverts the predicate.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    fn check(&self, value: &T) -> CheckResult<bool> {
        Ok(!self.0.check(value)?)
    }

    fn validate(&self) -> CheckResult<()> {
        self.0.validate()
    }

    fn expectation(&self) -> String {
        format!("not {}", self.0.expectation())
    }
}
