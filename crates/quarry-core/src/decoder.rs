//! The decoder abstraction.

use std::borrow::Cow;
use std::fmt;

use crate::ParamBag;

/// A pure function from a parameter bag (plus arguments) to a value.
///
/// `A` is what the decoder needs besides the bag:
///
/// - `Decoder<()>`: reads the bag alone, like a [`record`](crate::record)
///   or a decoder [`bind`]-ed to a name;
/// - `Decoder<str>`: a *field decoder*, told which parameter to read, like
///   [`string`](crate::string) or [`number`](crate::number).
///
/// Closures and function items of the matching shape are decoders already:
///
/// ```rust
/// use quarry_core::{Decoder, ParamBag};
/// use std::collections::HashMap;
///
/// fn shout(params: &dyn ParamBag, name: &str) -> Option<String> {
///     params.get(name).map(str::to_uppercase)
/// }
///
/// let params = HashMap::from([("q", "hi")]);
/// assert_eq!(shout.decode(&params, "q"), Some("HI".to_string()));
///
/// let both = |params: &dyn ParamBag| (params.get("a").is_some(), params.get("q").is_some());
/// assert_eq!(both.decode(&params, &()), (false, true));
/// ```
///
/// Decoders must not mutate shared state: given equal bags and arguments
/// they return equal outputs.
pub trait Decoder<A: ?Sized = ()> {
    /// What the decoder produces, usually an `Option`.
    type Output;

    /// Decodes from `params`.
    fn decode(&self, params: &dyn ParamBag, args: &A) -> Self::Output;
}

impl<F, T> Decoder for F
where
    F: Fn(&dyn ParamBag) -> T,
{
    type Output = T;

    fn decode(&self, params: &dyn ParamBag, _args: &()) -> T {
        self(params)
    }
}

impl<F, T> Decoder<str> for F
where
    F: Fn(&dyn ParamBag, &str) -> T,
{
    type Output = T;

    fn decode(&self, params: &dyn ParamBag, name: &str) -> T {
        self(params, name)
    }
}

/// Convenience for decoders that read the bag alone.
pub trait RunDecoder: Decoder {
    /// Runs the decoder against `params`.
    fn run(&self, params: &dyn ParamBag) -> Self::Output {
        self.decode(params, &())
    }
}

impl<D: Decoder + ?Sized> RunDecoder for D {}

/// A field decoder with its parameter name fixed.
///
/// Created by [`bind`].
#[derive(Clone)]
pub struct Bound<D> {
    name: Cow<'static, str>,
    decoder: D,
}

impl<D> Bound<D> {
    /// The parameter this decoder reads.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The wrapped field decoder.
    pub fn inner(&self) -> &D {
        &self.decoder
    }
}

impl<D> fmt::Debug for Bound<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bound").field("name", &self.name).finish_non_exhaustive()
    }
}

impl<D: Decoder<str>> Decoder for Bound<D> {
    type Output = D::Output;

    fn decode(&self, params: &dyn ParamBag, _args: &()) -> Self::Output {
        self.decoder.decode(params, &self.name)
    }
}

/// Fixes the parameter name of a field decoder.
///
/// ```rust
/// use quarry_core::{bind, number, RunDecoder};
/// use std::collections::HashMap;
///
/// let price = bind("price", number);
/// assert_eq!(price.run(&HashMap::from([("price", "9.99")])), Some(9.99));
/// ```
pub fn bind<D: Decoder<str>>(name: impl Into<Cow<'static, str>>, decoder: D) -> Bound<D> {
    Bound {
        name: name.into(),
        decoder,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn echo(params: &dyn ParamBag, name: &str) -> Option<String> {
        params.get(name).map(str::to_owned)
    }

    #[test]
    fn test_fn_item_is_field_decoder() {
        let params = HashMap::from([("a", "1")]);
        assert_eq!(echo.decode(&params, "a"), Some("1".to_string()));
        assert_eq!(echo.decode(&params, "b"), None);
    }

    #[test]
    fn test_closure_is_bag_decoder() {
        let params = HashMap::from([("a", "1"), ("b", "2")]);
        let count = |params: &dyn ParamBag| ["a", "b", "c"].iter().filter(|n| params.contains(n)).count();
        assert_eq!(count.run(&params), 2);
    }

    #[test]
    fn test_bind_reads_bound_name() {
        let params = HashMap::from([("a", "1")]);
        let bound = bind("a", echo);
        assert_eq!(bound.name(), "a");
        assert_eq!(bound.run(&params), Some("1".to_string()));
        assert_eq!(bind(String::from("b"), echo).run(&params), None);
    }

    #[test]
    fn test_bound_debug_shows_name() {
        let rendered = format!("{:?}", bind("page", echo));
        assert!(rendered.contains("page"));
    }
}
