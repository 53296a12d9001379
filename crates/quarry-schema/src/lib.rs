//! # Quarry Schema
//!
//! The two collaborators the composite decoders delegate to:
//!
//! - a **schema capability** ([`Schema`]): given a structural value, attempt
//!   to parse it into a typed output, reporting only success or failure to
//!   the decoders;
//! - a **nested parser** ([`NestedParser`]): turn one string in
//!   bracket notation (`a[b]=1&c[]=2`) into a generic key/value tree.
//!
//! Both are narrow traits so that the decoders stay swappable and can be
//! tested against a mock.
//!
//! ## Built-in schemas
//!
//! | Schema | Accepts | Output |
//! |--------|---------|--------|
//! | [`Text`] | string | `String` |
//! | [`NumberFromString`] | numeric string or number | `f64` |
//! | [`IntegerFromString`] | integer string or integer | `i64` |
//! | [`BooleanFromString`] | `"true"`/`"false"` or boolean | `bool` |
//! | [`ArrayOf`] | array whose elements pass the inner schema | `Vec<_>` |
//! | [`AnyObject`] | any object | `Map<String, Value>` |
//! | [`Deserialized`] | anything `T: Deserialize` accepts | `T` |
//!
//! ## Example
//!
//! ```rust
//! use quarry_schema::{ArrayOf, NumberFromString, Schema};
//! use serde_json::json;
//!
//! let ids = ArrayOf::new(NumberFromString);
//! assert_eq!(ids.parse_option(&json!(["1", "2.5"])), Some(vec![1.0, 2.5]));
//! assert_eq!(ids.parse_option(&json!(["1", "x"])), None);
//! ```

#![doc(html_root_url = "https://docs.rs/quarry-schema/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod builtin;
mod error;
mod nested;
mod schema;

pub use builtin::{
    AnyObject, BooleanFromString, Deserialized, IntegerFromString, NumberFromString, Text,
};
pub use error::{NestedParseError, SchemaError};
pub use nested::{NestedParser, QsParser};
pub use schema::{ArrayOf, Schema};

// Re-export the value model the schemas operate on
pub use serde_json::{Map, Value};
