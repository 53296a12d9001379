//! # Quarry Core
//!
//! A decoder algebra for pulling typed values out of a flat bag of query
//! parameters.
//!
//! Every decoder answers with an [`Option`]: `Some` when the parameter
//! exists, is well-formed and passes any validation attached to it, `None`
//! otherwise. Missing, malformed and rejected collapse into the same `None`.
//!
//! ## Layers
//!
//! | Layer | Items |
//! |-------|-------|
//! | Primitive | [`string`], [`number`], [`integer`] |
//! | Composite | [`record`], [`array`], [`object`], [`object_with`] |
//! | Combinator | [`map`], [`flat_map`], [`or_else`], [`get_or_else`], [`get_or_null`] |
//!
//! Primitives are *field decoders*: plain functions of `(params, name)`.
//! Combinators work on any [`Decoder`], whether it reads just the bag
//! (`Decoder<()>`) or the bag plus a field name (`Decoder<str>`).
//!
//! ## Example
//!
//! ```rust
//! use quarry_core::{bind, get_or_else, integer, map, string, QueryParams, RunDecoder};
//!
//! let params = QueryParams::parse("q=rust&page=2.6").unwrap();
//!
//! assert_eq!(string(&params, "q"), Some("rust".to_string()));
//! assert_eq!(integer(&params, "page"), Some(3.0));
//!
//! let page = get_or_else(bind("page", integer), || 1.0);
//! assert_eq!(page.run(&params), 3.0);
//! assert_eq!(page.run(&QueryParams::new()), 1.0);
//!
//! let shout = map(bind("q", string), |q: String| q.to_uppercase());
//! assert_eq!(shout.run(&params), Some("RUST".to_string()));
//! ```

#![doc(html_root_url = "https://docs.rs/quarry-core/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod combinator;
mod composite;
mod decoder;
mod params;
mod primitive;
mod record;

pub use combinator::{
    flat_map, get_or_else, get_or_null, map, or_else, DecoderExt, FlatMap, GetOrElse, GetOrNull,
    Map, OrElse,
};
pub use composite::{array, array_field, object, object_field, object_with, ARRAY_DELIMITER};
pub use decoder::{bind, Bound, Decoder, RunDecoder};
pub use params::{ParamBag, ParamsError, QueryParams};
pub use primitive::{integer, number, parse_float, round_half_up, string};
pub use record::{field, from_params, record, Field, FromParams, Record, Shape};

// Re-export the schema capability so callers need only one import
pub use quarry_schema as schema;
