//! Schema and nested-parse error types.
//!
//! These carry the detail the decoders deliberately throw away. They are
//! public so that schemas can be tested and debugged on their own.

use thiserror::Error;

/// A value was rejected by a [`Schema`](crate::Schema).
///
/// `path` is a JSON-path-like location rooted at `$`, e.g. `$[2]` or
/// `$.address.city`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation error at '{path}': {message}")]
pub struct SchemaError {
    /// Where in the input the failure occurred.
    pub path: String,
    /// What was wrong.
    pub message: String,
}

impl SchemaError {
    /// Creates an error at the root of the input.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self::at("$", message)
    }

    /// Creates an error at a given path.
    #[must_use]
    pub fn at(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Re-roots this error below `segment`, so an element failure at `$`
    /// becomes `$[3]` when reported by the enclosing array.
    #[must_use]
    pub fn within(mut self, segment: &str) -> Self {
        let rest = self.path.strip_prefix('$').unwrap_or(&self.path);
        self.path = format!("${segment}{rest}");
        self
    }
}

/// A nested-object string could not be turned into a key/value tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NestedParseError {
    /// A key nests deeper than a strict parser allows.
    #[error("key '{key}' exceeds the maximum depth of {depth}")]
    TooDeep {
        /// The decoded key.
        key: String,
        /// Configured maximum depth.
        depth: usize,
    },
}
