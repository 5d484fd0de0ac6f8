//! Type specifications
//!
//! A [`TypeSpec`] is one [`ValueType`] or an ordered set of alternatives. A value
//! satisfies the spec when it is an instance of at least one member.

use std::fmt;

use crate::error::{CheckError, CheckResult};
use crate::value::ValueType;

/// One type, or an ordered set of alternative types.
///
/// Construction never fails; an empty spec is rejected when it is used.
///
/// # Example
///
/// ```
/// use checkers::{TypeSpec, ValueType};
///
/// let spec = TypeSpec::from([ValueType::Int, ValueType::Float]);
/// assert!(spec.matches(ValueType::Float));
/// assert!(!spec.matches(ValueType::Str));
/// assert_eq!(spec.to_string(), "'int' or 'float'");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeSpec {
    types: Vec<ValueType>,
}

impl TypeSpec {
    /// Build a spec from any sequence of types, keeping their order.
    pub fn new(types: impl IntoIterator<Item = ValueType>) -> Self {
        TypeSpec {
            types: types.into_iter().collect(),
        }
    }

    /// The member types in order.
    pub fn types(&self) -> &[ValueType] {
        &self.types
    }

    /// Whether the spec names no types at all.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Reject an empty spec.
    pub fn validate(&self) -> CheckResult<()> {
        if self.types.is_empty() {
            return Err(CheckError::invalid_specification(
                "type specification must name at least one type",
            ));
        }
        Ok(())
    }

    /// Whether a value tagged `actual` is an instance of any member.
    pub fn matches(&self, actual: ValueType) -> bool {
        self.types.iter().any(|expected| expected.admits(actual))
    }
}

impl fmt::Display for TypeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, ty) in self.types.iter().enumerate() {
            if i > 0 {
                write!(f, " or ")?;
            }
            write!(f, "'{}'", ty)?;
        }
        Ok(())
    }
}

impl From<ValueType> for TypeSpec {
    fn from(ty: ValueType) -> Self {
        TypeSpec { types: vec![ty] }
    }
}

impl<const N: usize> From<[ValueType; N]> for TypeSpec {
    fn from(types: [ValueType; N]) -> Self {
        TypeSpec::new(types)
    }
}

impl From<&[ValueType]> for TypeSpec {
    fn from(types: &[ValueType]) -> Self {
        TypeSpec::new(types.iter().copied())
    }
}

impl From<Vec<ValueType>> for TypeSpec {
    fn from(types: Vec<ValueType>) -> Self {
        TypeSpec { types }
    }
}

impl From<&TypeSpec> for TypeSpec {
    fn from(spec: &TypeSpec) -> Self {
        spec.clone()
    }
}
