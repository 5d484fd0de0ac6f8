//! Containment predicates
//!
//! Containment is sub-part testing (a substring of a string, an element of a
//! sequence), as opposed to the exact membership of [`one_of`](super::one_of).

use std::collections::{BTreeSet, HashSet};
use std::hash::{BuildHasher, Hash};

use super::combinators::Predicate;
use crate::error::CheckResult;
use crate::value::Value;

/// Types that can hold a sub-part of type `N`.
pub trait Contains<N: ?Sized> {
    /// Whether `needle` is a sub-part of `self`.
    fn contains_part(&self, needle: &N) -> bool;
}

impl Contains<str> for str {
    #[inline]
    fn contains_part(&self, needle: &str) -> bool {
        self.contains(needle)
    }
}

impl Contains<str> for String {
    #[inline]
    fn contains_part(&self, needle: &str) -> bool {
        self.contains(needle)
    }
}

impl Contains<str> for &str {
    #[inline]
    fn contains_part(&self, needle: &str) -> bool {
        self.contains(needle)
    }
}

impl<T: PartialEq> Contains<T> for [T] {
    #[inline]
    fn contains_part(&self, needle: &T) -> bool {
        self.contains(needle)
    }
}

impl<T: PartialEq> Contains<T> for Vec<T> {
    #[inline]
    fn contains_part(&self, needle: &T) -> bool {
        self.contains(needle)
    }
}

impl<T: Ord> Contains<T> for BTreeSet<T> {
    #[inline]
    fn contains_part(&self, needle: &T) -> bool {
        self.contains(needle)
    }
}

impl<T: Eq + Hash, S: BuildHasher> Contains<T> for HashSet<T, S> {
    #[inline]
    fn contains_part(&self, needle: &T) -> bool {
        self.contains(needle)
    }
}

impl Contains<Value> for Value {
    /// Strings hold substrings, lists, tuples and sets hold elements, maps
    /// hold keys. Scalars hold nothing.
    #[inline]
    fn contains_part(&self, needle: &Value) -> bool {
        self.holds(needle).unwrap_or(false)
    }
}

/// Predicate that checks if a container holds a sub-part.
#[derive(Clone, Copy, Debug)]
pub struct ContainsPart<'n, N: ?Sized>(pub &'n N);

impl<C, N> Predicate<C> for ContainsPart<'_, N>
where
    C: Contains<N> + ?Sized,
    N: ?Sized + Sync,
{
    #[inline]
    fn check(&self, value: &C) -> CheckResult<bool> {
        Ok(value.contains_part(self.0))
    }

    fn expectation(&self) -> String {
        "contain the given part".to_string()
    }
}

/// Create a predicate that checks if a container holds `needle`.
///
/// # Example
///
/// ```rust
/// use checkers::predicate::*;
///
/// assert_eq!(contains_part("@").check("user@example.com"), Ok(true));
/// assert_eq!(contains_part("@").check("invalid"), Ok(false));
/// assert_eq!(contains_part(&5).check(&vec![1, 5, 10]), Ok(true));
/// ```
pub fn contains_part<N: ?Sized>(needle: &N) -> ContainsPart<'_, N> {
    ContainsPart(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values;

    #[test]
    fn test_substring() {
        assert!("banana".contains_part("an"));
        assert!(String::from("banana").contains_part("nan"));
        assert!(!"apple".contains_part("an"));
        // the empty string is a substring of everything
        assert!("apple".contains_part(""));
    }

    #[test]
    fn test_element() {
        assert!(vec![1, 2, 3].contains_part(&2));
        assert!(![1, 2, 3][..].contains_part(&4));
    }

    #[test]
    fn test_set_element() {
        let ordered: BTreeSet<i32> = [1, 2].into_iter().collect();
        assert!(ordered.contains_part(&2));
        let hashed: HashSet<&str> = ["a"].into_iter().collect();
        assert!(!hashed.contains_part(&"b"));
        let rows = [ordered, [3].into_iter().collect()];
        let found: Vec<_> = crate::get_elements_containing(&rows, &3).collect();
        assert_eq!(found, vec![&rows[1]]);
        assert!(Value::set(values![1.0, 2.0]).contains_part(&Value::Int(1)));
    }

    #[test]
    fn test_dynamic_value() {
        assert!(Value::from("banana").contains_part(&Value::from("an")));
        assert!(Value::List(values![1, "a"]).contains_part(&Value::from("a")));
        assert!(!Value::Int(12).contains_part(&Value::Int(1)));
    }

    #[test]
    fn test_contains_part_predicate() {
        assert_eq!(contains_part("an").check("banana"), Ok(true));
        assert_eq!(contains_part("an").check(&String::from("cherry")), Ok(false));
    }
}
