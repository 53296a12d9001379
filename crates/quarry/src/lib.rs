//! # Quarry
//!
//! **Typed, composable decoders for URL query parameters**
//!
//! Quarry turns a flat bag of query parameters into typed values. Every
//! decoder answers with an [`Option`]: present, well-formed and valid
//! parameters come back as `Some`, everything else as `None`.
//!
//! - **Primitives** – [`string`], [`number`], [`integer`]
//! - **Composites** – [`record`], [`array`], [`object`], [`object_with`]
//! - **Combinators** – [`map`], [`flat_map`], [`or_else`], [`get_or_else`], [`get_or_null`]
//!
//! ## Two calling conventions
//!
//! Every operation exists data-first at the crate root and data-last in
//! [`pipe`]. The data-last forms return functions waiting for the bag (or
//! for the decoder, in the case of combinators), which chain with
//! [`Pipe::pipe`]:
//!
//! ```rust
//! use quarry::prelude::*;
//!
//! let params = QueryParams::parse("q=rust&page=2.5").unwrap();
//!
//! // data-first
//! let page = get_or_else(bind("page", integer), || 1.0);
//! assert_eq!(page.run(&params), 3.0);
//!
//! // data-last
//! let page = pipe::integer("page").pipe(pipe::get_or_else(|| 1.0));
//! assert_eq!(page.run(&params), 3.0);
//!
//! assert_eq!(quarry::string(&params, "q"), pipe::string("q")(&params));
//! ```
//!
//! ## Architecture
//!
//! ```text
//! quarry-telemetry ← quarry-config ← quarry-schema ← quarry-core ← quarry
//! ```

#![doc(html_root_url = "https://docs.rs/quarry/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod pipe;
mod setup;

pub use pipe::Pipe;
pub use setup::{init, SetupError};

// Re-export the data-first surface
pub use quarry_core::{
    array, array_field, bind, field, flat_map, from_params, get_or_else, get_or_null, integer,
    map, number, object, object_field, object_with, or_else, parse_float, record, round_half_up,
    string, Bound, Decoder, DecoderExt, FlatMap, FromParams, GetOrElse, GetOrNull, Map, OrElse,
    ParamBag, ParamsError, QueryParams, Record, RunDecoder, Shape, ARRAY_DELIMITER,
};

// Re-export schema types
pub use quarry_schema as schema;

// Re-export configuration types
pub use quarry_config as config;

// Re-export telemetry types
pub use quarry_telemetry as telemetry;

/// Prelude module for convenient imports.
///
/// # Example
///
/// ```rust
/// use quarry::prelude::*;
///
/// let params = QueryParams::parse("ids=1,2").unwrap();
/// assert_eq!(array(&params, "ids", &NumberFromString), Some(vec![1.0, 2.0]));
/// ```
pub mod prelude {
    pub use crate::pipe::{self, Pipe};

    pub use quarry_core::{
        array, array_field, bind, field, flat_map, get_or_else, get_or_null, integer, map,
        number, object, object_field, object_with, or_else, record, string, Decoder, DecoderExt,
        FromParams, ParamBag, QueryParams, Record, RunDecoder,
    };

    // Re-export the common schemas
    pub use quarry_schema::{
        AnyObject, ArrayOf, BooleanFromString, Deserialized, IntegerFromString, NumberFromString,
        QsParser, Schema, Text,
    };
}
