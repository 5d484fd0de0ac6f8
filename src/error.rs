//! Error taxonomy for checks and assertions
//!
//! Two things can go wrong:
//!
//! - [`CheckError::InvalidSpecification`]: the caller supplied a malformed
//!   constraint (no types, no candidates, an unknown operator, an inverted
//!   range). Returned by predicates and assertions alike.
//! - [`CheckError::ValidationFailure`]: an assertion's constraint did not hold.
//!   Only assertions return it; predicates answer `Ok(false)` instead.
//!
//! # Example
//!
//! ```
//! use checkers::{assert_value_of_type, CheckError, FailureKind, ValueType};
//!
//! match assert_value_of_type(&"x", ValueType::Int) {
//!     Err(CheckError::ValidationFailure(failure)) => {
//!         assert_eq!(failure.kind(), FailureKind::Type);
//!         assert_eq!(
//!             failure.to_string(),
//!             "Value 'x' is not correct type: 'str'. Must be: 'int'."
//!         );
//!     }
//!     other => panic!("expected a validation failure, got {:?}", other),
//! }
//! ```

use std::fmt;

use thiserror::Error;

use crate::mode::Mode;
use crate::value::Value;

/// Result alias used throughout the crate.
pub type CheckResult<T> = Result<T, CheckError>;

/// Everything a check can report besides a plain `false`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CheckError {
    /// The constraint itself is malformed. Always a caller bug.
    #[error("invalid specification: {reason}")]
    InvalidSpecification {
        /// What is wrong with the constraint.
        reason: String,
    },

    /// An assertion's constraint did not hold.
    #[error(transparent)]
    ValidationFailure(#[from] Failure),
}

impl CheckError {
    /// Build an [`CheckError::InvalidSpecification`].
    pub fn invalid_specification(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        #[cfg(feature = "tracing")]
        tracing::warn!(reason = %reason, "invalid check specification");
        CheckError::InvalidSpecification { reason }
    }

    /// The failure, if this is a [`CheckError::ValidationFailure`].
    pub fn failure(&self) -> Option<&Failure> {
        match self {
            CheckError::ValidationFailure(failure) => Some(failure),
            CheckError::InvalidSpecification { .. } => None,
        }
    }

    /// Whether the caller supplied a malformed constraint.
    pub fn is_invalid_specification(&self) -> bool {
        matches!(self, CheckError::InvalidSpecification { .. })
    }

    /// Whether an assertion's constraint did not hold.
    pub fn is_validation_failure(&self) -> bool {
        matches!(self, CheckError::ValidationFailure(_))
    }
}

/// Which family of constraint an assertion enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// Instance-of check.
    Type,
    /// Membership in a candidate set.
    Membership,
    /// Type and/or membership combined.
    Composite,
    /// Operator comparison against a target.
    Comparison,
    /// Inclusive range.
    Range,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FailureKind::Type => "type",
            FailureKind::Membership => "membership",
            FailureKind::Composite => "composite",
            FailureKind::Comparison => "comparison",
            FailureKind::Range => "range",
        })
    }
}

/// A violated assertion.
///
/// Carries the offending value(s), the rendered expectation, and the
/// aggregation mode for collection assertions. [`Display`](fmt::Display)
/// yields the full human-readable message.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct Failure {
    kind: FailureKind,
    mode: Option<Mode>,
    offending: Vec<Value>,
    expected: String,
    message: String,
}

impl Failure {
    /// Create a failure with its message. Mode and offending values start empty.
    pub fn new(kind: FailureKind, expected: impl Into<String>, message: impl Into<String>) -> Self {
        Failure {
            kind,
            mode: None,
            offending: Vec::new(),
            expected: expected.into(),
            message: message.into(),
        }
    }

    /// Record the aggregation mode that was in effect.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Record the value(s) that failed.
    pub fn with_offending(mut self, offending: Vec<Value>) -> Self {
        self.offending = offending;
        self
    }

    /// Constraint family.
    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    /// Aggregation mode, `None` for single-value assertions.
    pub fn mode(&self) -> Option<Mode> {
        self.mode
    }

    /// The failing value, or the failing subset for collection assertions.
    pub fn offending(&self) -> &[Value] {
        &self.offending
    }

    /// Rendered expectation, e.g. `'int' or 'float'`.
    pub fn expected(&self) -> &str {
        &self.expected
    }

    /// The full message.
    pub fn message(&self) -> &str {
        &self.message
    }
}
