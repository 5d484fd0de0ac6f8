//! Type and value checkers
//!
//! Checkers come in pairs. The `is_*` functions answer a question with
//! `Ok(bool)`; the `assert_*` functions answer `Ok(())` or a
//! [`Failure`](crate::Failure) carrying a human-readable message. Both return
//! [`CheckError::InvalidSpecification`](crate::CheckError::InvalidSpecification)
//! when the constraint itself is malformed, so a bad check is never mistaken
//! for a failing one.
//!
//! # Example
//!
//! ```rust
//! use checkers::checkers::*;
//! use checkers::ValueType;
//!
//! assert_eq!(is_all_values_of_type(&[1, 2, 3], ValueType::Int), Ok(true));
//! assert_eq!(is_any_values_in_iterable(&["x", "b"], &["a", "b"]), Ok(true));
//!
//! let err = assert_value_in_iterable(&"z", &["a", "b"]).unwrap_err();
//! assert_eq!(err.to_string(), "Value 'z' not found in iterable: ['a', 'b']");
//! ```

mod assertion;
mod contains;
mod logical;

pub use assertion::{
    assert_all_values_between, assert_all_values_in_iterable, assert_all_values_of_type,
    assert_any_values_in_iterable, assert_any_values_of_type, assert_is_valid_value,
    assert_valid_comparison, assert_value_between, assert_value_in_iterable,
    assert_value_of_type,
};
pub use contains::{
    all_elements_contains, any_element_contains, get_elements_containing, ElementsContaining,
};
pub use logical::{
    check_values_in_iterable, check_values_of_type, is_all_values_between,
    is_all_values_in_iterable, is_all_values_of_type, is_any_values_in_iterable,
    is_any_values_of_type, is_valid_comparison, is_valid_value, is_value_between,
    is_value_in_iterable, is_value_of_type,
};
