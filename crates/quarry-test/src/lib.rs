//! # Quarry Test
//!
//! Test utilities for code built on quarry decoders.
//!
//! ## Key Features
//!
//! - **Parameter builder**: [`TestParams`] and the [`params!`] macro
//! - **Call counting**: [`CallCounter`] wraps closures to prove laziness
//! - **Mock schema**: [`MockSchema`] accepts or rejects on demand and
//!   records what it was asked to parse
//! - **Nested queries**: [`nested_query`] and [`embed`] build the encoded
//!   values the `object` decoders read
//!
//! ## Example
//!
//! ```rust
//! use quarry_core::{map, string, Decoder};
//! use quarry_test::{params, CallCounter};
//!
//! let counter = CallCounter::new();
//! let decoder = map(string, counter.wrap(|s: String| s.len()));
//!
//! let bag = params! { "q" => "hello" };
//! assert_eq!(decoder.decode(&bag, "missing"), None);
//! assert_eq!(counter.count(), 0);
//!
//! assert_eq!(decoder.decode(&bag, "q"), Some(5));
//! assert_eq!(counter.count(), 1);
//! ```

#![doc(html_root_url = "https://docs.rs/quarry-test/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod counter;
mod error;
mod nested;
mod params;
mod schema;

pub use counter::CallCounter;
pub use error::TestError;
pub use nested::{embed, nested_query};
pub use params::TestParams;
pub use schema::MockSchema;

/// Builds a [`QueryParams`](quarry_core::QueryParams) from `name => value`
/// pairs, in order.
///
/// ```rust
/// let bag = quarry_test::params! { "a" => "1", "b" => "2" };
/// assert_eq!(bag.get("b"), Some("2"));
///
/// let empty = quarry_test::params! {};
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! params {
    ($($name:expr => $value:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut bag = $crate::TestParams::new();
        $(bag = bag.param($name, $value);)*
        bag.build()
    }};
}
