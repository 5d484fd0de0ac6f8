//! Aggregation modes for collection checks

use std::fmt;
use std::str::FromStr;

use crate::error::CheckError;

/// How a collection-level check aggregates the per-element results.
///
/// # Example
///
/// ```
/// use checkers::Mode;
///
/// assert!(Mode::All.aggregate([true, true]));
/// assert!(!Mode::All.aggregate([true, false]));
/// assert!(Mode::Any.aggregate([false, true]));
///
/// // Empty collections: vacuous truth for `All`, vacuous falsity for `Any`
/// assert!(Mode::All.aggregate([]));
/// assert!(!Mode::Any.aggregate([]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Mode {
    /// Every element must satisfy the check.
    All,
    /// At least one element must satisfy the check.
    Any,
}

impl Mode {
    /// Result over an empty collection.
    pub fn vacuous(self) -> bool {
        match self {
            Mode::All => true,
            Mode::Any => false,
        }
    }

    /// Fold per-element results, short-circuiting.
    pub fn aggregate(self, results: impl IntoIterator<Item = bool>) -> bool {
        let mut results = results.into_iter();
        match self {
            Mode::All => results.all(|r| r),
            Mode::Any => results.any(|r| r),
        }
    }

    /// Fold fallible per-element results, stopping at the first error or
    /// at the first result that decides the outcome.
    pub fn try_aggregate<E>(
        self,
        results: impl IntoIterator<Item = Result<bool, E>>,
    ) -> Result<bool, E> {
        for result in results {
            match (self, result?) {
                (Mode::All, false) => return Ok(false),
                (Mode::Any, true) => return Ok(true),
                _ => {}
            }
        }
        Ok(self.vacuous())
    }

    /// Lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::All => "all",
            Mode::Any => "any",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Mode::All),
            "any" => Ok(Mode::Any),
            other => Err(CheckError::invalid_specification(format!(
                "Unknown aggregation mode '{}'. Valid modes are: ['all', 'any']",
                other
            ))),
        }
    }
}
