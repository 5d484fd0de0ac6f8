//! Dynamic values and their type tags
//!
//! Checkers operate on values whose type is only known at runtime. This module
//! provides the closed [`Value`] model, the [`ValueType`] tags that type
//! specifications are built from, and the [`AsValue`] trait that lets plain
//! Rust values take part in the same checks.
//!
//! # Examples
//!
//! ```
//! use checkers::{values, AsValue, Value, ValueType};
//!
//! assert_eq!(5.value_type(), ValueType::Int);
//! assert_eq!("5".value_type(), ValueType::Str);
//!
//! let mixed = values![1, "two", 3.0];
//! assert_eq!(mixed[1], Value::Str("two".to_string()));
//! assert_eq!(Value::List(mixed).to_string(), "[1, 'two', 3.0]");
//! ```

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fmt;
use std::hash::BuildHasher;

/// A dynamically typed value.
///
/// Equality is numeric across `Int` and `Float` (`Int(1) == Float(1.0)`) and
/// exact at any magnitude, but a `Bool` never equals a number and a `List`
/// never equals a `Tuple`. Sets compare without regard to order.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    /// The absent value.
    Null,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// A string.
    Str(String),
    /// A growable sequence.
    List(Vec<Value>),
    /// A fixed sequence.
    Tuple(Vec<Value>),
    /// A string-keyed mapping.
    Map(BTreeMap<String, Value>),
    /// An unordered collection of distinct values.
    ///
    /// Build it with [`Value::set`] so duplicates are dropped.
    Set(Vec<Value>),
}

impl Value {
    /// The type tag of this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Null => ValueType::Null,
            Value::Bool(_) => ValueType::Bool,
            Value::Int(_) => ValueType::Int,
            Value::Float(_) => ValueType::Float,
            Value::Str(_) => ValueType::Str,
            Value::List(_) => ValueType::List,
            Value::Tuple(_) => ValueType::Tuple,
            Value::Map(_) => ValueType::Map,
            Value::Set(_) => ValueType::Set,
        }
    }

    /// Build a set, keeping the first of any equal items.
    ///
    /// ```
    /// use checkers::{values, Value};
    ///
    /// let set = Value::set(values![1.0, 1.0, 2]);
    /// assert_eq!(set.to_string(), "{1.0, 2}");
    /// assert_eq!(set, Value::set(values![2, 1]));
    /// ```
    pub fn set(items: impl IntoIterator<Item = Value>) -> Value {
        let mut distinct: Vec<Value> = Vec::new();
        for item in items {
            if !distinct.contains(&item) {
                distinct.push(item);
            }
        }
        Value::Set(distinct)
    }

    /// Quoted rendering, as the value appears inside a collection.
    ///
    /// Only strings differ from the [`Display`](fmt::Display) form.
    ///
    /// ```
    /// use checkers::Value;
    ///
    /// assert_eq!(Value::from("x").repr(), "'x'");
    /// assert_eq!(Value::from("x").to_string(), "x");
    /// assert_eq!(Value::from(5).repr(), "5");
    /// ```
    pub fn repr(&self) -> String {
        match self {
            Value::Str(s) => format!("'{}'", s),
            other => other.to_string(),
        }
    }

    /// Same type tag and equal.
    ///
    /// Stricter than `==`: `Int(1)` and `Float(1.0)` are equal but not identical.
    pub fn is_identical(&self, other: &Value) -> bool {
        self.value_type() == other.value_type() && self == other
    }

    /// Whether this value, used as a container, holds `needle`.
    ///
    /// Lists, tuples and sets hold their elements, maps hold their keys and
    /// strings hold their substrings. Returns `None` for scalars.
    pub fn holds(&self, needle: &Value) -> Option<bool> {
        match self {
            Value::List(items) | Value::Tuple(items) | Value::Set(items) => {
                Some(items.contains(needle))
            }
            Value::Map(map) => Some(match needle {
                Value::Str(key) => map.contains_key(key),
                _ => false,
            }),
            Value::Str(haystack) => Some(match needle {
                Value::Str(part) => haystack.contains(part.as_str()),
                _ => false,
            }),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => {
                cmp_int_float(*a, *b) == Some(Ordering::Equal)
            }
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Tuple(a), Value::Tuple(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Set(a), Value::Set(b)) => a.len() == b.len() && is_subset(a, b),
            _ => false,
        }
    }
}

fn is_subset(a: &[Value], b: &[Value]) -> bool {
    a.iter().all(|item| b.contains(item))
}

/// Compare an integer with a float without rounding the integer.
fn cmp_int_float(int: i64, float: f64) -> Option<Ordering> {
    // 2^63, exactly representable
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    if float.is_nan() {
        return None;
    }
    if float >= LIMIT {
        return Some(Ordering::Less);
    }
    if float < -LIMIT {
        return Some(Ordering::Greater);
    }
    let whole = float.trunc();
    // in range, so the cast is exact
    match int.cmp(&(whole as i64)) {
        Ordering::Equal => whole.partial_cmp(&float),
        unequal => Some(unequal),
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a.partial_cmp(b),
            (Value::Int(a), Value::Int(b)) => a.partial_cmp(b),
            (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
            (Value::Int(a), Value::Float(b)) => cmp_int_float(*a, *b),
            (Value::Float(a), Value::Int(b)) => cmp_int_float(*b, *a).map(Ordering::reverse),
            (Value::Str(a), Value::Str(b)) => a.partial_cmp(b),
            (Value::List(a), Value::List(b)) | (Value::Tuple(a), Value::Tuple(b)) => {
                a.partial_cmp(b)
            }
            // sets are ordered by inclusion
            (Value::Set(a), Value::Set(b)) => match (is_subset(a, b), is_subset(b, a)) {
                (true, true) => Some(Ordering::Equal),
                (true, false) => Some(Ordering::Less),
                (false, true) => Some(Ordering::Greater),
                (false, false) => None,
            },
            _ => None,
        }
    }
}

fn write_float(f: &mut fmt::Formatter<'_>, x: f64) -> fmt::Result {
    if x.is_nan() {
        write!(f, "nan")
    } else if x.is_infinite() {
        write!(f, "{}", if x > 0.0 { "inf" } else { "-inf" })
    } else {
        // Debug keeps the fractional part (1.0 rather than 1) and switches to
        // an exponent outside [1e-4, 1e16); the exponent is signed and padded
        // to two digits: 1e+16, 1.5e-07
        let debug = format!("{:?}", x);
        match debug.split_once('e') {
            Some((mantissa, exponent)) => {
                let (sign, digits) = match exponent.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exponent),
                };
                write!(f, "{}e{}{:0>2}", mantissa, sign, digits)
            }
            None => f.write_str(&debug),
        }
    }
}

fn write_items(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item.repr())?;
    }
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write_float(f, *x),
            Value::Str(s) => write!(f, "{}", s),
            Value::List(items) => {
                write!(f, "[")?;
                write_items(f, items)?;
                write!(f, "]")
            }
            Value::Tuple(items) => {
                write!(f, "(")?;
                write_items(f, items)?;
                if items.len() == 1 {
                    write!(f, ",")?;
                }
                write!(f, ")")
            }
            Value::Map(map) => {
                write!(f, "{{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "'{}': {}", key, value.repr())?;
                }
                write!(f, "}}")
            }
            Value::Set(items) if items.is_empty() => write!(f, "set()"),
            Value::Set(items) => {
                write!(f, "{{")?;
                write_items(f, items)?;
                write!(f, "}}")
            }
        }
    }
}

/// Runtime type tag used by type specifications.
///
/// `Number` is the only tag that admits other tags (`Int` and `Float`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ValueType {
    /// Matches [`Value::Null`].
    Null,
    /// Matches [`Value::Bool`].
    Bool,
    /// Matches [`Value::Int`].
    Int,
    /// Matches [`Value::Float`].
    Float,
    /// Matches both [`Value::Int`] and [`Value::Float`].
    Number,
    /// Matches [`Value::Str`].
    Str,
    /// Matches [`Value::List`].
    List,
    /// Matches [`Value::Tuple`].
    Tuple,
    /// Matches [`Value::Map`].
    Map,
    /// Matches [`Value::Set`].
    Set,
}

impl ValueType {
    /// Whether a value tagged `actual` is an instance of `self`.
    ///
    /// ```
    /// use checkers::ValueType;
    ///
    /// assert!(ValueType::Number.admits(ValueType::Int));
    /// assert!(!ValueType::Int.admits(ValueType::Bool));
    /// ```
    pub fn admits(self, actual: ValueType) -> bool {
        match self {
            ValueType::Number => matches!(actual, ValueType::Int | ValueType::Float),
            expected => expected == actual,
        }
    }

    /// Lowercase display name.
    pub fn name(self) -> &'static str {
        match self {
            ValueType::Null => "null",
            ValueType::Bool => "bool",
            ValueType::Int => "int",
            ValueType::Float => "float",
            ValueType::Number => "number",
            ValueType::Str => "str",
            ValueType::List => "list",
            ValueType::Tuple => "tuple",
            ValueType::Map => "map",
            ValueType::Set => "set",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Anything that can be inspected as a [`Value`].
///
/// `value_type` is called on every check and should not allocate;
/// `to_value` is only used to render failure messages.
pub trait AsValue {
    /// The runtime type tag of this value.
    fn value_type(&self) -> ValueType;

    /// Convert into the dynamic representation.
    fn to_value(&self) -> Value;
}

impl AsValue for Value {
    fn value_type(&self) -> ValueType {
        Value::value_type(self)
    }

    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl<T: AsValue + ?Sized> AsValue for &T {
    fn value_type(&self) -> ValueType {
        (**self).value_type()
    }

    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl AsValue for bool {
    fn value_type(&self) -> ValueType {
        ValueType::Bool
    }

    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

macro_rules! impl_as_value_int {
    ($($t:ty),*) => {
        $(
            impl AsValue for $t {
                fn value_type(&self) -> ValueType {
                    ValueType::Int
                }

                fn to_value(&self) -> Value {
                    Value::Int(i64::from(*self))
                }
            }

            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Value::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_as_value_int!(i8, i16, i32, i64, u8, u16, u32);

impl AsValue for isize {
    fn value_type(&self) -> ValueType {
        ValueType::Int
    }

    fn to_value(&self) -> Value {
        // isize is at most 64 bits on every supported target
        Value::Int(*self as i64)
    }
}

impl AsValue for f32 {
    fn value_type(&self) -> ValueType {
        ValueType::Float
    }

    fn to_value(&self) -> Value {
        Value::Float(f64::from(*self))
    }
}

impl AsValue for f64 {
    fn value_type(&self) -> ValueType {
        ValueType::Float
    }

    fn to_value(&self) -> Value {
        Value::Float(*self)
    }
}

impl AsValue for char {
    fn value_type(&self) -> ValueType {
        ValueType::Str
    }

    fn to_value(&self) -> Value {
        Value::Str(self.to_string())
    }
}

impl AsValue for str {
    fn value_type(&self) -> ValueType {
        ValueType::Str
    }

    fn to_value(&self) -> Value {
        Value::Str(self.to_string())
    }
}

impl AsValue for String {
    fn value_type(&self) -> ValueType {
        ValueType::Str
    }

    fn to_value(&self) -> Value {
        Value::Str(self.clone())
    }
}

impl<T: AsValue> AsValue for Option<T> {
    fn value_type(&self) -> ValueType {
        match self {
            Some(inner) => inner.value_type(),
            None => ValueType::Null,
        }
    }

    fn to_value(&self) -> Value {
        match self {
            Some(inner) => inner.to_value(),
            None => Value::Null,
        }
    }
}

impl<T: AsValue> AsValue for [T] {
    fn value_type(&self) -> ValueType {
        ValueType::List
    }

    fn to_value(&self) -> Value {
        Value::List(self.iter().map(AsValue::to_value).collect())
    }
}

impl<T: AsValue> AsValue for Vec<T> {
    fn value_type(&self) -> ValueType {
        ValueType::List
    }

    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}

impl<T: AsValue> AsValue for BTreeMap<String, T> {
    fn value_type(&self) -> ValueType {
        ValueType::Map
    }

    fn to_value(&self) -> Value {
        Value::Map(
            self.iter()
                .map(|(key, value)| (key.clone(), value.to_value()))
                .collect(),
        )
    }
}

impl<T: AsValue> AsValue for BTreeSet<T> {
    fn value_type(&self) -> ValueType {
        ValueType::Set
    }

    fn to_value(&self) -> Value {
        Value::set(self.iter().map(AsValue::to_value))
    }
}

impl<T: AsValue, S: BuildHasher> AsValue for HashSet<T, S> {
    fn value_type(&self) -> ValueType {
        ValueType::Set
    }

    /// Element order follows the hasher and is not stable across runs.
    fn to_value(&self) -> Value {
        Value::set(self.iter().map(AsValue::to_value))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(f64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<BTreeSet<T>> for Value {
    fn from(value: BTreeSet<T>) -> Self {
        Value::set(value.into_iter().map(Into::into))
    }
}

impl<T: Into<Value>> From<BTreeMap<String, T>> for Value {
    fn from(value: BTreeMap<String, T>) -> Self {
        Value::Map(value.into_iter().map(|(k, v)| (k, v.into())).collect())
    }
}

/// Build a `Vec<Value>` from heterogeneous expressions.
///
/// ```
/// use checkers::{values, Value};
///
/// let v = values![1, "a", 2.5, true];
/// assert_eq!(v.len(), 4);
/// assert_eq!(v[3], Value::Bool(true));
///
/// let empty = values![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! values {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($item:expr),+ $(,)?) => {
        ::std::vec![$($crate::Value::from($item)),+]
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_type_tags() {
        assert_eq!(Value::Null.value_type(), ValueType::Null);
        assert_eq!(Value::from(true).value_type(), ValueType::Bool);
        assert_eq!(Value::from(1).value_type(), ValueType::Int);
        assert_eq!(Value::from(1.5).value_type(), ValueType::Float);
        assert_eq!(Value::from("s").value_type(), ValueType::Str);
        assert_eq!(Value::from(vec![1, 2]).value_type(), ValueType::List);
        assert_eq!(Value::Tuple(vec![]).value_type(), ValueType::Tuple);
        assert_eq!(Value::Map(BTreeMap::new()).value_type(), ValueType::Map);
        assert_eq!(Value::set(values![1.0, 1.0]).value_type(), ValueType::Set);
    }

    #[test]
    fn test_number_admits_int_and_float_only() {
        assert!(ValueType::Number.admits(ValueType::Int));
        assert!(ValueType::Number.admits(ValueType::Float));
        assert!(!ValueType::Number.admits(ValueType::Bool));
        assert!(!ValueType::Number.admits(ValueType::Str));
        assert!(!ValueType::Int.admits(ValueType::Number));
    }

    #[test]
    fn test_bool_is_not_an_int() {
        assert!(!ValueType::Int.admits(true.value_type()));
        assert_ne!(Value::Bool(true), Value::Int(1));
    }

    #[test]
    fn test_numeric_cross_equality() {
        assert_eq!(Value::Int(1), Value::Float(1.0));
        assert_eq!(Value::Float(2.0), Value::Int(2));
        assert_ne!(Value::Int(1), Value::Float(1.5));
        assert!(!Value::Int(1).is_identical(&Value::Float(1.0)));
        assert!(Value::Int(1).is_identical(&Value::Int(1)));
    }

    #[test]
    fn test_int_float_comparison_is_exact() {
        let two_53 = 9_007_199_254_740_992_i64;
        let float = Value::Float(two_53 as f64);
        assert_eq!(Value::Int(two_53), float);
        assert_ne!(Value::Int(two_53 + 1), float);
        assert_ne!(float, Value::Int(two_53 + 1));
        assert!(float < Value::Int(two_53 + 1));
        assert!(Value::Int(two_53 + 1) > float);
        // equality stays transitive
        assert_ne!(Value::Int(two_53), Value::Int(two_53 + 1));

        assert!(Value::Int(i64::MAX) < Value::Float(9_223_372_036_854_775_808.0));
        assert_eq!(Value::Int(i64::MIN), Value::Float(-9_223_372_036_854_775_808.0));
        assert!(Value::Int(i64::MIN) > Value::Float(f64::NEG_INFINITY));
        assert!(Value::Int(-3) < Value::Float(-2.5));
        assert!(Value::Int(-2) > Value::Float(-2.5));
        assert_eq!(Value::Int(0).partial_cmp(&Value::Float(f64::NAN)), None);
    }

    #[test]
    fn test_sets() {
        let set = Value::set(values![1.0, 1.0]);
        assert_eq!(set, Value::Set(values![1.0]));
        assert_eq!(Value::set(values![1, 2]), Value::set(values![2.0, 1]));
        assert_ne!(Value::set(values![1, 2]), Value::List(values![1, 2]));
        assert_ne!(Value::set(values![1, 2]), Value::set(values![1, 3]));
        assert!(Value::set(values![1]) < Value::set(values![1, 2]));
        assert_eq!(
            Value::set(values![1]).partial_cmp(&Value::set(values![2])),
            None
        );
        assert_eq!(set.holds(&Value::Int(1)), Some(true));
        assert_eq!(Value::set(values![]).to_string(), "set()");
        assert_eq!(Value::set(values!["a", 1]).to_string(), "{'a', 1}");
    }

    #[test]
    fn test_list_and_tuple_never_equal() {
        assert_ne!(Value::List(values![1]), Value::Tuple(values![1]));
    }

    #[test]
    fn test_partial_cmp() {
        assert!(Value::Int(1) < Value::Float(1.5));
        assert!(Value::from("a") < Value::from("b"));
        assert!(Value::List(values![1, 2]) < Value::List(values![1, 3]));
        assert_eq!(Value::from("a").partial_cmp(&Value::Int(1)), None);
        assert_eq!(Value::Null.partial_cmp(&Value::Null), None);
    }

    #[test]
    fn test_display_and_repr() {
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::from(false).to_string(), "false");
        assert_eq!(Value::from(1.0).to_string(), "1.0");
        assert_eq!(Value::from(-2.5).to_string(), "-2.5");
        assert_eq!(Value::Float(f64::NAN).to_string(), "nan");
        assert_eq!(Value::Float(1e15).to_string(), "1000000000000000.0");
        assert_eq!(Value::Float(1e16).to_string(), "1e+16");
        assert_eq!(Value::Float(-2.5e20).to_string(), "-2.5e+20");
        assert_eq!(Value::Float(1e-7).to_string(), "1e-07");
        assert_eq!(Value::Float(1.5e-5).to_string(), "1.5e-05");
        assert_eq!(Value::Float(1e-100).to_string(), "1e-100");
        assert_eq!(Value::from("x").to_string(), "x");
        assert_eq!(Value::from("x").repr(), "'x'");
        assert_eq!(Value::List(values![1, "a"]).to_string(), "[1, 'a']");
        assert_eq!(Value::Tuple(values![1]).to_string(), "(1,)");
        assert_eq!(Value::Tuple(values![1, 2]).to_string(), "(1, 2)");

        let mut map = BTreeMap::new();
        map.insert("k".to_string(), Value::from("v"));
        assert_eq!(Value::Map(map).to_string(), "{'k': 'v'}");
    }

    #[test]
    fn test_holds() {
        let list = Value::List(values![1, 2]);
        assert_eq!(list.holds(&Value::Int(2)), Some(true));
        assert_eq!(list.holds(&Value::Int(3)), Some(false));
        assert_eq!(Value::from("banana").holds(&Value::from("an")), Some(true));
        assert_eq!(Value::from("banana").holds(&Value::Int(1)), Some(false));
        assert_eq!(Value::Int(5).holds(&Value::Int(5)), None);
    }

    #[test]
    fn test_as_value_for_rust_types() {
        assert_eq!(5u8.value_type(), ValueType::Int);
        assert_eq!(5isize.to_value(), Value::Int(5));
        assert_eq!(1.5f32.value_type(), ValueType::Float);
        assert_eq!('c'.to_value(), Value::from("c"));
        assert_eq!(None::<i32>.value_type(), ValueType::Null);
        assert_eq!(Some(3).to_value(), Value::Int(3));
        assert_eq!(vec!["a", "b"].to_value(), Value::List(values!["a", "b"]));
        assert_eq!((&&"x").value_type(), ValueType::Str);
    }

    #[test]
    fn test_as_value_for_sets() {
        let ordered: BTreeSet<i32> = [2, 1, 2].into_iter().collect();
        assert_eq!(ordered.value_type(), ValueType::Set);
        assert_eq!(ordered.to_value().to_string(), "{1, 2}");
        assert_eq!(Value::from(ordered), Value::set(values![2, 1]));

        let hashed: HashSet<&str> = ["a", "b"].into_iter().collect();
        assert_eq!(hashed.value_type(), ValueType::Set);
        assert_eq!(hashed.to_value(), Value::set(values!["b", "a"]));
    }

    #[test]
    fn test_values_macro() {
        let v = values![1, "two", 3.0, None::<i32>];
        assert_eq!(
            v,
            vec![
                Value::Int(1),
                Value::Str("two".to_string()),
                Value::Float(3.0),
                Value::Null
            ]
        );
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_deserialize_untagged() {
        let value: Value = serde_json::from_str(r#"[1, "a", null, 2.5, true]"#).unwrap();
        assert_eq!(
            value,
            Value::List(vec![
                Value::Int(1),
                Value::from("a"),
                Value::Null,
                Value::Float(2.5),
                Value::Bool(true),
            ])
        );
    }

    #[test]
    fn test_serialize_map() {
        let value: Value = serde_json::from_str(r#"{"k": [1]}"#).unwrap();
        assert_eq!(value.value_type(), ValueType::Map);
        assert_eq!(serde_json::to_string(&value).unwrap(), r#"{"k":[1]}"#);
    }

    #[test]
    fn test_set_serializes_as_array() {
        let set = Value::set(values![1, 1, 2]);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, "[1,2]");
        let back: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(back.value_type(), ValueType::List);
        assert_eq!(serde_json::to_string(&ValueType::Set).unwrap(), r#""set""#);
    }

    #[test]
    fn test_value_type_lowercase() {
        assert_eq!(serde_json::to_string(&ValueType::Str).unwrap(), r#""str""#);
        let parsed: ValueType = serde_json::from_str(r#""number""#).unwrap();
        assert_eq!(parsed, ValueType::Number);
    }
}
