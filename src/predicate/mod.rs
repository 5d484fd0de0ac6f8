//! Predicate combinators for composable checks
//!
//! Every checker function in this crate is a thin wrapper around one of the
//! predicates defined here. Predicates can also be used directly and combined
//! using logical operators (`and`, `or`, `not`) to build richer constraints
//! from simple, reusable pieces.
//!
//! Predicates are fallible: `check` returns `Ok(bool)` for a well-formed
//! constraint and `Err(CheckError::InvalidSpecification)` for a malformed one,
//! such as an empty type specification or an empty candidate set.
//!
//! # Example
//!
//! ```rust
//! use checkers::predicate::*;
//! use checkers::{values, Value, ValueType};
//!
//! let allowed = values!["red", "green", "blue"];
//! let colour = of_type(ValueType::Str).and(one_of(&allowed));
//!
//! assert_eq!(colour.check(&Value::from("green")), Ok(true));
//! assert_eq!(colour.check(&Value::from("pink")), Ok(false));
//!
//! let palette = all(colour);
//! assert_eq!(palette.check(&values!["red", "blue"]), Ok(true));
//! ```
//!
//! # Turning predicates into assertions
//!
//! ```rust
//! use checkers::predicate::*;
//! use checkers::{Failure, FailureKind};
//!
//! let result = ensure_with(&42, &between(0, 10), |value, expectation| {
//!     Failure::new(FailureKind::Range, expectation, format!("{} is out of range", value))
//! });
//! assert!(result.unwrap_err().is_validation_failure());
//! ```

mod collection;
mod combinators;
mod comparison;
mod contains;
mod membership;
mod types;
mod validation;

// Re-export core trait
pub use combinators::{Predicate, PredicateExt};

// Re-export combinator types
pub use combinators::{And, Not, Or};

// Re-export type and membership predicates
pub use membership::{one_of, OneOf};
pub use types::{of_type, OfType};

// Re-export collection predicates
pub use collection::{all, any, quantified, Quantified};

// Re-export comparison predicates
pub use comparison::{between, compare, compare_with, Between, Compare, Operator};

// Re-export containment predicates
pub use contains::{contains_part, Contains, ContainsPart};

// Re-export assertion integration
pub use validation::ensure_with;

pub(crate) use validation::fail;
