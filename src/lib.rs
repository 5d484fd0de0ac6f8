//! # Checkers
//!
//! A small library of runtime type and value checks, each available as a
//! boolean predicate and as an assertion with a descriptive failure message.
//!
//! ## Philosophy
//!
//! A check can go wrong in two very different ways, and **checkers** keeps
//! them apart:
//! - the value does not satisfy the constraint: predicates answer
//!   `Ok(false)`, assertions return [`CheckError::ValidationFailure`]
//! - the constraint itself is malformed (no types, no candidates, an unknown
//!   operator): everything returns [`CheckError::InvalidSpecification`]
//!
//! ## Quick Example
//!
//! ```rust
//! use checkers::prelude::*;
//!
//! // Ask a question
//! assert_eq!(is_value_of_type(&3.5, [ValueType::Int, ValueType::Float]), Ok(true));
//! assert_eq!(is_all_values_in_iterable(&["a", "b"], &["a", "b", "c"]), Ok(true));
//!
//! // Or demand an answer
//! let err = assert_all_values_of_type(&values![1, "2", 3], ValueType::Int).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "Some elements ['2'] have the incorrect type ['str']. Must be: 'int' (mode: all)."
//! );
//!
//! // Shorter spellings call the same functions
//! assert_eq!(is_in(&2, &[1, 2, 3]), is_value_in_iterable(&2, &[1, 2, 3]));
//! ```
//!
//! Values are inspected through [`AsValue`], implemented for the primitive
//! types, strings, options, sequences and string-keyed maps. Heterogeneous
//! data is written as [`Value`]s, most easily with the [`values!`] macro.
//!
//! For building custom constraints, see the [`predicate`] module.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod aliases;
pub mod checkers;
pub mod error;
pub mod mode;
pub mod predicate;
pub mod testing;
pub mod types;
pub mod value;

// Re-exports
pub use checkers::*;
pub use error::{CheckError, CheckResult, Failure, FailureKind};
pub use mode::Mode;
pub use predicate::{Operator, Predicate, PredicateExt};
pub use types::TypeSpec;
pub use value::{AsValue, Value, ValueType};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::aliases::*;
    pub use crate::checkers::*;
    pub use crate::error::{CheckError, CheckResult, Failure, FailureKind};
    pub use crate::mode::Mode;
    pub use crate::predicate::{Operator, Predicate, PredicateExt};
    pub use crate::types::TypeSpec;
    pub use crate::value::{AsValue, Value, ValueType};
    pub use crate::values;
}
