//! The schema capability.

use std::rc::Rc;
use std::sync::Arc;

use serde_json::Value;

use crate::SchemaError;

/// An external validator able to attempt parsing a structural value.
///
/// Decoders only ever look at whether [`parse_option`](Schema::parse_option)
/// produced a value; the error is for callers testing a schema directly.
///
/// # Implementing `Schema`
///
/// ```rust
/// use quarry_schema::{Schema, SchemaError, Value};
///
/// /// Accepts lowercase ASCII slugs.
/// struct Slug;
///
/// impl Schema for Slug {
///     type Output = String;
///
///     fn parse(&self, input: &Value) -> Result<String, SchemaError> {
///         let s = input.as_str().ok_or_else(|| SchemaError::new("expected string"))?;
///         if s.is_empty() || !s.bytes().all(|b| b.is_ascii_lowercase() || b == b'-') {
///             return Err(SchemaError::new(format!("'{s}' is not a slug")));
///         }
///         Ok(s.to_string())
///     }
/// }
///
/// assert!(Slug.parse_option(&Value::from("hello-world")).is_some());
/// assert!(Slug.parse_option(&Value::from("Hello")).is_none());
/// ```
pub trait Schema {
    /// The typed value produced on success.
    type Output;

    /// Attempts to parse `input`.
    ///
    /// # Errors
    ///
    /// Returns a [`SchemaError`] describing the first rejected location.
    fn parse(&self, input: &Value) -> Result<Self::Output, SchemaError>;

    /// Attempts to parse `input`, discarding failure detail.
    fn parse_option(&self, input: &Value) -> Option<Self::Output> {
        self.parse(input).ok()
    }
}

impl<S: Schema + ?Sized> Schema for &S {
    type Output = S::Output;

    fn parse(&self, input: &Value) -> Result<Self::Output, SchemaError> {
        (**self).parse(input)
    }
}

impl<S: Schema + ?Sized> Schema for Box<S> {
    type Output = S::Output;

    fn parse(&self, input: &Value) -> Result<Self::Output, SchemaError> {
        (**self).parse(input)
    }
}

impl<S: Schema + ?Sized> Schema for Rc<S> {
    type Output = S::Output;

    fn parse(&self, input: &Value) -> Result<Self::Output, SchemaError> {
        (**self).parse(input)
    }
}

impl<S: Schema + ?Sized> Schema for Arc<S> {
    type Output = S::Output;

    fn parse(&self, input: &Value) -> Result<Self::Output, SchemaError> {
        (**self).parse(input)
    }
}

/// "Array of `S`": accepts an array whose every element passes `S`.
///
/// Elements are parsed in order and the first failure rejects the whole
/// array; its path is reported below the element index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArrayOf<S>(pub S);

impl<S> ArrayOf<S> {
    /// Wraps an element schema.
    #[must_use]
    pub fn new(element: S) -> Self {
        Self(element)
    }

    /// Returns the element schema.
    #[must_use]
    pub fn element(&self) -> &S {
        &self.0
    }
}

impl<S: Schema> Schema for ArrayOf<S> {
    type Output = Vec<S::Output>;

    fn parse(&self, input: &Value) -> Result<Self::Output, SchemaError> {
        let items = input.as_array().ok_or_else(|| {
            SchemaError::new(format!("expected array, got {}", value_type_name(input)))
        })?;

        items
            .iter()
            .enumerate()
            .map(|(idx, item)| self.0.parse(item).map_err(|e| e.within(&format!("[{idx}]"))))
            .collect()
    }
}

/// Returns a human-readable name for a JSON value type.
pub(crate) fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
