//! Composite field decoders backed by a schema.
//!
//! [`array`] splits one parameter on [`ARRAY_DELIMITER`] and validates the
//! pieces; [`object`] and [`object_with`] read one parameter as a nested
//! query string and validate the resulting tree. Rejections are traced at
//! `trace` level and surface as `None`.

use quarry_schema::{AnyObject, ArrayOf, Map, NestedParser, QsParser, Schema, Value};
use quarry_telemetry::trace_absent;

use crate::{string, ParamBag};

/// The separator between array elements. There is no escaping, so elements
/// cannot contain it.
pub const ARRAY_DELIMITER: char = ',';

/// Reads a delimited list and validates it as "array of `schema`".
///
/// Each element reaches the schema as a JSON string. The empty string is a
/// one-element list containing `""`.
///
/// ```rust
/// use quarry_core::array;
/// use quarry_core::schema::NumberFromString;
/// use std::collections::HashMap;
///
/// let params = HashMap::from([("ids", "1,2,3"), ("bad", "1,x,3")]);
/// assert_eq!(array(&params, "ids", &NumberFromString), Some(vec![1.0, 2.0, 3.0]));
/// assert_eq!(array(&params, "bad", &NumberFromString), None);
/// assert_eq!(array(&params, "missing", &NumberFromString), None);
/// ```
pub fn array<S>(params: &dyn ParamBag, name: &str, schema: &S) -> Option<Vec<S::Output>>
where
    S: Schema + ?Sized,
{
    let raw = string(params, name)?;
    let items = raw
        .split(ARRAY_DELIMITER)
        .map(|item| Value::String(item.to_owned()))
        .collect();

    match ArrayOf::new(schema).parse(&Value::Array(items)) {
        Ok(values) => Some(values),
        Err(err) => {
            trace_absent!(name, "{err}");
            None
        }
    }
}

/// Reads a nested query string as a generic object.
///
/// Uses [`QsParser`] with its default limits and accepts any object.
///
/// ```rust
/// use quarry_core::object;
/// use std::collections::HashMap;
///
/// let params = HashMap::from([("filter", "a[b]=1&c=2")]);
/// let filter = object(&params, "filter").unwrap();
/// assert_eq!(filter["a"]["b"], "1");
/// assert_eq!(filter["c"], "2");
/// ```
#[must_use]
pub fn object(params: &dyn ParamBag, name: &str) -> Option<Map<String, Value>> {
    object_with(params, name, &QsParser::default(), &AnyObject)
}

/// Reads a nested query string with `parser` and validates the tree with
/// `schema`.
///
/// ```rust
/// use quarry_core::object_with;
/// use quarry_core::schema::{Deserialized, QsParser};
/// use serde::Deserialize;
/// use std::collections::HashMap;
///
/// #[derive(Debug, Deserialize, PartialEq)]
/// struct Price {
///     min: String,
/// }
///
/// let schema = Deserialized::<Price>::new();
/// let params = HashMap::from([("price", "min=10"), ("bad", "max=3")]);
///
/// let price = object_with(&params, "price", &QsParser::default(), &schema);
/// assert_eq!(price, Some(Price { min: "10".to_string() }));
/// assert_eq!(object_with(&params, "bad", &QsParser::default(), &schema), None);
/// ```
pub fn object_with<P, S>(
    params: &dyn ParamBag,
    name: &str,
    parser: &P,
    schema: &S,
) -> Option<S::Output>
where
    P: NestedParser + ?Sized,
    S: Schema + ?Sized,
{
    let raw = string(params, name)?;

    let tree = match parser.parse_nested(&raw) {
        Ok(tree) => tree,
        Err(err) => {
            trace_absent!(name, "{err}");
            return None;
        }
    };

    match schema.parse(&tree) {
        Ok(value) => Some(value),
        Err(err) => {
            trace_absent!(name, "{err}");
            None
        }
    }
}

/// A field decoder running [`array`] with a fixed schema.
///
/// Useful wherever a field decoder is expected, such as a record field.
pub fn array_field<S>(schema: S) -> impl Fn(&dyn ParamBag, &str) -> Option<Vec<S::Output>>
where
    S: Schema,
{
    move |params: &dyn ParamBag, name: &str| array(params, name, &schema)
}

/// A field decoder running [`object_with`] with a fixed parser and schema.
pub fn object_field<P, S>(parser: P, schema: S) -> impl Fn(&dyn ParamBag, &str) -> Option<S::Output>
where
    P: NestedParser,
    S: Schema,
{
    move |params: &dyn ParamBag, name: &str| object_with(params, name, &parser, &schema)
}
