//! Built-in schemas for query-string scalars and objects.
//!
//! Values coming out of a query string are strings, so the scalar schemas
//! accept a string form and convert it. They also accept the matching JSON
//! type, which lets them double as validators for already-typed trees.

use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::schema::value_type_name;
use crate::{Schema, SchemaError};

/// Any string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Text;

impl Schema for Text {
    type Output = String;

    fn parse(&self, input: &Value) -> Result<String, SchemaError> {
        input
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| expected("string", input))
    }
}

/// A decimal number written as a string, or a JSON number.
///
/// The whole (trimmed) string must be a decimal literal: `"1.5"`, `"-2e3"`,
/// `"Infinity"`. Empty strings, `NaN` and the `inf`/`infinity` spellings are
/// rejected, so an element accepted here reads the same as the `number`
/// decoder reads it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumberFromString;

impl Schema for NumberFromString {
    type Output = f64;

    fn parse(&self, input: &Value) -> Result<f64, SchemaError> {
        match input {
            Value::Number(n) => n.as_f64().ok_or_else(|| expected("number", input)),
            Value::String(s) => {
                let trimmed = s.trim();
                match trimmed.parse::<f64>() {
                    Ok(n) if is_decimal_literal(trimmed) => Ok(n),
                    _ => Err(SchemaError::new(format!("'{s}' is not a number"))),
                }
            }
            other => Err(expected("number", other)),
        }
    }
}

/// A base-10 integer written as a string, or a JSON integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntegerFromString;

impl Schema for IntegerFromString {
    type Output = i64;

    fn parse(&self, input: &Value) -> Result<i64, SchemaError> {
        match input {
            Value::Number(n) => n.as_i64().ok_or_else(|| expected("integer", input)),
            Value::String(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| SchemaError::new(format!("'{s}' is not an integer"))),
            other => Err(expected("integer", other)),
        }
    }
}

/// `"true"` / `"false"`, or a JSON boolean.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BooleanFromString;

impl Schema for BooleanFromString {
    type Output = bool;

    fn parse(&self, input: &Value) -> Result<bool, SchemaError> {
        match input {
            Value::Bool(b) => Ok(*b),
            Value::String(s) if s == "true" => Ok(true),
            Value::String(s) if s == "false" => Ok(false),
            Value::String(s) => Err(SchemaError::new(format!("'{s}' is not a boolean"))),
            other => Err(expected("boolean", other)),
        }
    }
}

/// The generic "object" shape: any key/value map, returned as-is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnyObject;

impl Schema for AnyObject {
    type Output = Map<String, Value>;

    fn parse(&self, input: &Value) -> Result<Self::Output, SchemaError> {
        input
            .as_object()
            .cloned()
            .ok_or_else(|| expected("object", input))
    }
}

/// Any type implementing [`serde::Deserialize`].
///
/// ```rust
/// use quarry_schema::{Deserialized, Schema};
/// use serde::Deserialize;
/// use serde_json::json;
///
/// #[derive(Debug, Deserialize, PartialEq)]
/// struct Range {
///     from: String,
///     to: String,
/// }
///
/// let schema = Deserialized::<Range>::new();
/// let range = schema.parse_option(&json!({"from": "a", "to": "z"}));
/// assert_eq!(range, Some(Range { from: "a".into(), to: "z".into() }));
/// ```
pub struct Deserialized<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> Deserialized<T> {
    /// Creates the schema.
    #[must_use]
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for Deserialized<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Deserialized<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Deserialized<T> {}

impl<T> fmt::Debug for Deserialized<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deserialized")
            .field("type", &std::any::type_name::<T>())
            .finish()
    }
}

impl<T: DeserializeOwned> Schema for Deserialized<T> {
    type Output = T;

    fn parse(&self, input: &Value) -> Result<T, SchemaError> {
        T::deserialize(input).map_err(|e| SchemaError::new(e.to_string()))
    }
}

/// Digits, sign, point and exponent only, or a signed `Infinity`.
fn is_decimal_literal(text: &str) -> bool {
    let unsigned = text.strip_prefix(|c| c == '+' || c == '-').unwrap_or(text);
    unsigned == "Infinity"
        || (unsigned.bytes().any(|b| b.is_ascii_digit())
            && unsigned
                .bytes()
                .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-')))
}

fn expected(what: &str, got: &Value) -> SchemaError {
    SchemaError::new(format!("expected {what}, got {}", value_type_name(got)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[test]
    fn test_text() {
        assert_eq!(Text.parse(&json!("hello")), Ok("hello".to_string()));
        assert_eq!(Text.parse(&json!("")), Ok(String::new()));
        assert!(Text.parse(&json!(1)).is_err());
        assert!(Text.parse(&json!(null)).is_err());
    }

    #[test]
    fn test_number_from_string() {
        assert_eq!(NumberFromString.parse_option(&json!("3.7")), Some(3.7));
        assert_eq!(NumberFromString.parse_option(&json!(" -2e3 ")), Some(-2000.0));
        assert_eq!(NumberFromString.parse_option(&json!(12)), Some(12.0));
        assert_eq!(
            NumberFromString.parse_option(&json!("Infinity")),
            Some(f64::INFINITY)
        );
        assert_eq!(
            NumberFromString.parse_option(&json!("-Infinity")),
            Some(f64::NEG_INFINITY)
        );
    }

    #[test]
    fn test_number_from_string_rejects() {
        assert_eq!(NumberFromString.parse_option(&json!("x")), None);
        assert_eq!(NumberFromString.parse_option(&json!("")), None);
        assert_eq!(NumberFromString.parse_option(&json!("   ")), None);
        assert_eq!(NumberFromString.parse_option(&json!("NaN")), None);
        assert_eq!(NumberFromString.parse_option(&json!("nan")), None);
        assert_eq!(NumberFromString.parse_option(&json!("inf")), None);
        assert_eq!(NumberFromString.parse_option(&json!("-infinity")), None);
        assert_eq!(NumberFromString.parse_option(&json!("INFINITY")), None);
        assert_eq!(NumberFromString.parse_option(&json!("3.7px")), None);
        assert_eq!(NumberFromString.parse_option(&json!(true)), None);
    }

    #[test]
    fn test_integer_from_string() {
        assert_eq!(IntegerFromString.parse_option(&json!("42")), Some(42));
        assert_eq!(IntegerFromString.parse_option(&json!("-7")), Some(-7));
        assert_eq!(IntegerFromString.parse_option(&json!(5)), Some(5));
        assert_eq!(IntegerFromString.parse_option(&json!("4.2")), None);
        assert_eq!(IntegerFromString.parse_option(&json!(4.2)), None);
    }

    #[test]
    fn test_boolean_from_string() {
        assert_eq!(BooleanFromString.parse_option(&json!("true")), Some(true));
        assert_eq!(BooleanFromString.parse_option(&json!("false")), Some(false));
        assert_eq!(BooleanFromString.parse_option(&json!(false)), Some(false));
        assert_eq!(BooleanFromString.parse_option(&json!("TRUE")), None);
        assert_eq!(BooleanFromString.parse_option(&json!("1")), None);
    }

    #[test]
    fn test_any_object() {
        let parsed = AnyObject.parse(&json!({"a": {"b": "1"}})).unwrap();
        assert_eq!(parsed.get("a"), Some(&json!({"b": "1"})));

        assert!(AnyObject.parse(&json!({})).unwrap().is_empty());
        assert!(AnyObject.parse(&json!([1])).is_err());
        assert!(AnyObject.parse(&json!("a")).is_err());
    }

    #[test]
    fn test_deserialized() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct Filter {
            status: String,
            #[serde(default)]
            owner: Option<String>,
        }

        let schema = Deserialized::<Filter>::new();
        assert_eq!(
            schema.parse_option(&json!({"status": "open"})),
            Some(Filter {
                status: "open".to_string(),
                owner: None,
            })
        );
        assert!(schema.parse(&json!({"owner": "ann"})).is_err());
    }

    #[test]
    fn test_deserialized_debug() {
        let schema = Deserialized::<u8>::new();
        assert!(format!("{schema:?}").contains("u8"));
    }
}
