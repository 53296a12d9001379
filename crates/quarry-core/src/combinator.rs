//! Combinators over `Option`-producing decoders.
//!
//! Every combinator wraps one decoder and forwards the bag and arguments to
//! it unchanged, so a combinator over a field decoder is itself a field
//! decoder and a combinator over a bag decoder is a bag decoder.
//!
//! Supplied functions run lazily: [`map`] and [`flat_map`] only on the
//! present path, [`or_else`] and [`get_or_else`] only on the absent path.
//! Each call re-invokes the inner decoder; nothing is cached.

use crate::{Decoder, ParamBag};

/// Transforms a present value. Created by [`map`].
#[derive(Debug, Clone, Copy)]
pub struct Map<D, F> {
    decoder: D,
    f: F,
}

impl<A, D, F, X, Y> Decoder<A> for Map<D, F>
where
    A: ?Sized,
    D: Decoder<A, Output = Option<X>>,
    F: Fn(X) -> Y,
{
    type Output = Option<Y>;

    fn decode(&self, params: &dyn ParamBag, args: &A) -> Option<Y> {
        self.decoder.decode(params, args).map(&self.f)
    }
}

/// Transforms a present value with a function that may itself reject it.
/// Created by [`flat_map`].
#[derive(Debug, Clone, Copy)]
pub struct FlatMap<D, F> {
    decoder: D,
    f: F,
}

impl<A, D, F, X, Y> Decoder<A> for FlatMap<D, F>
where
    A: ?Sized,
    D: Decoder<A, Output = Option<X>>,
    F: Fn(X) -> Option<Y>,
{
    type Output = Option<Y>;

    fn decode(&self, params: &dyn ParamBag, args: &A) -> Option<Y> {
        self.decoder.decode(params, args).and_then(&self.f)
    }
}

/// Supplies an alternative when the value is absent. Created by [`or_else`].
#[derive(Debug, Clone, Copy)]
pub struct OrElse<D, F> {
    decoder: D,
    fallback: F,
}

impl<A, D, F, X> Decoder<A> for OrElse<D, F>
where
    A: ?Sized,
    D: Decoder<A, Output = Option<X>>,
    F: Fn() -> Option<X>,
{
    type Output = Option<X>;

    fn decode(&self, params: &dyn ParamBag, args: &A) -> Option<X> {
        self.decoder.decode(params, args).or_else(&self.fallback)
    }
}

/// Unwraps the value, computing a default when absent. Created by
/// [`get_or_else`].
#[derive(Debug, Clone, Copy)]
pub struct GetOrElse<D, F> {
    decoder: D,
    default: F,
}

impl<A, D, F, X> Decoder<A> for GetOrElse<D, F>
where
    A: ?Sized,
    D: Decoder<A, Output = Option<X>>,
    F: Fn() -> X,
{
    type Output = X;

    fn decode(&self, params: &dyn ParamBag, args: &A) -> X {
        self.decoder.decode(params, args).unwrap_or_else(&self.default)
    }
}

/// Unwraps the value, using the type's empty value when absent. Created by
/// [`get_or_null`].
#[derive(Debug, Clone, Copy)]
pub struct GetOrNull<D> {
    decoder: D,
}

impl<A, D, X> Decoder<A> for GetOrNull<D>
where
    A: ?Sized,
    D: Decoder<A, Output = Option<X>>,
    X: Default,
{
    type Output = X;

    fn decode(&self, params: &dyn ParamBag, args: &A) -> X {
        self.decoder.decode(params, args).unwrap_or_default()
    }
}

/// Applies `f` to the value when present.
///
/// ```rust
/// use quarry_core::{map, string, Decoder};
/// use std::collections::HashMap;
///
/// let len = map(string, |s: String| s.len());
/// let params = HashMap::from([("q", "hello")]);
/// assert_eq!(len.decode(&params, "q"), Some(5));
/// assert_eq!(len.decode(&params, "x"), None);
/// ```
pub fn map<A, D, F, X, Y>(decoder: D, f: F) -> Map<D, F>
where
    A: ?Sized,
    D: Decoder<A, Output = Option<X>>,
    F: Fn(X) -> Y,
{
    Map { decoder, f }
}

/// Applies `f` to the value when present; `f` returning `None` rejects it.
///
/// ```rust
/// use quarry_core::{flat_map, integer, Decoder};
/// use std::collections::HashMap;
///
/// let positive = flat_map(integer, |n: f64| (n > 0.0).then_some(n));
/// let params = HashMap::from([("a", "5"), ("b", "-5")]);
/// assert_eq!(positive.decode(&params, "a"), Some(5.0));
/// assert_eq!(positive.decode(&params, "b"), None);
/// ```
pub fn flat_map<A, D, F, X, Y>(decoder: D, f: F) -> FlatMap<D, F>
where
    A: ?Sized,
    D: Decoder<A, Output = Option<X>>,
    F: Fn(X) -> Option<Y>,
{
    FlatMap { decoder, f }
}

/// Calls `fallback` when the value is absent.
///
/// ```rust
/// use quarry_core::{or_else, string, Decoder};
/// use std::collections::HashMap;
///
/// let sort = or_else(string, || Some("relevance".to_string()));
/// let params: HashMap<&str, &str> = HashMap::new();
/// assert_eq!(sort.decode(&params, "sort"), Some("relevance".to_string()));
/// ```
pub fn or_else<A, D, F, X>(decoder: D, fallback: F) -> OrElse<D, F>
where
    A: ?Sized,
    D: Decoder<A, Output = Option<X>>,
    F: Fn() -> Option<X>,
{
    OrElse { decoder, fallback }
}

/// Returns the value, or `default()` when absent.
///
/// ```rust
/// use quarry_core::{get_or_else, integer, Decoder};
/// use std::collections::HashMap;
///
/// let page = get_or_else(integer, || 1.0);
/// let params = HashMap::from([("page", "abc")]);
/// assert_eq!(page.decode(&params, "page"), 1.0);
/// ```
pub fn get_or_else<A, D, F, X>(decoder: D, default: F) -> GetOrElse<D, F>
where
    A: ?Sized,
    D: Decoder<A, Output = Option<X>>,
    F: Fn() -> X,
{
    GetOrElse { decoder, default }
}

/// Returns the value, or `X::default()` when absent.
///
/// The default plays the role of a null sentinel: an empty string, zero, an
/// empty collection, or `None` for an `Option` payload.
///
/// ```rust
/// use quarry_core::{get_or_null, string, Decoder};
/// use std::collections::HashMap;
///
/// let q = get_or_null(string);
/// let params = HashMap::from([("q", "rust")]);
/// assert_eq!(q.decode(&params, "q"), "rust");
/// assert_eq!(q.decode(&params, "x"), "");
/// ```
pub fn get_or_null<A, D, X>(decoder: D) -> GetOrNull<D>
where
    A: ?Sized,
    D: Decoder<A, Output = Option<X>>,
    X: Default,
{
    GetOrNull { decoder }
}

/// Method-call forms of the combinators.
///
/// ```rust
/// use quarry_core::{bind, number, DecoderExt, RunDecoder};
/// use std::collections::HashMap;
///
/// let cents = bind("price", number)
///     .map(|p: f64| (p * 100.0).round())
///     .get_or_else(|| 0.0);
/// assert_eq!(cents.run(&HashMap::from([("price", "1.25")])), 125.0);
/// ```
pub trait DecoderExt<A: ?Sized, X>: Decoder<A, Output = Option<X>> + Sized {
    /// See [`map`].
    fn map<F, Y>(self, f: F) -> Map<Self, F>
    where
        F: Fn(X) -> Y,
    {
        Map { decoder: self, f }
    }

    /// See [`flat_map`].
    fn flat_map<F, Y>(self, f: F) -> FlatMap<Self, F>
    where
        F: Fn(X) -> Option<Y>,
    {
        FlatMap { decoder: self, f }
    }

    /// See [`or_else`].
    fn or_else<F>(self, fallback: F) -> OrElse<Self, F>
    where
        F: Fn() -> Option<X>,
    {
        OrElse {
            decoder: self,
            fallback,
        }
    }

    /// See [`get_or_else`].
    fn get_or_else<F>(self, default: F) -> GetOrElse<Self, F>
    where
        F: Fn() -> X,
    {
        GetOrElse {
            decoder: self,
            default,
        }
    }

    /// See [`get_or_null`].
    fn get_or_null(self) -> GetOrNull<Self>
    where
        X: Default,
    {
        GetOrNull { decoder: self }
    }
}

impl<A, D, X> DecoderExt<A, X> for D
where
    A: ?Sized,
    D: Decoder<A, Output = Option<X>>,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{bind, integer, number, string, RunDecoder};
    use std::cell::Cell;
    use std::collections::HashMap;

    fn bag(pairs: &[(&'static str, &'static str)]) -> HashMap<&'static str, &'static str> {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_map_present_and_absent() {
        let params = bag(&[("q", "abc")]);
        let upper = map(string, |s: String| s.to_uppercase());
        assert_eq!(upper.decode(&params, "q"), Some("ABC".to_string()));
        assert_eq!(upper.decode(&params, "x"), None);
    }

    #[test]
    fn test_map_not_called_when_absent() {
        let calls = Cell::new(0);
        let counted = map(number, |n: f64| {
            calls.set(calls.get() + 1);
            n
        });
        assert_eq!(counted.decode(&bag(&[]), "n"), None);
        assert_eq!(calls.get(), 0);
        assert_eq!(counted.decode(&bag(&[("n", "2")]), "n"), Some(2.0));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_flat_map_can_reject() {
        let params = bag(&[("a", "3"), ("b", "0")]);
        let reciprocal = flat_map(number, |n: f64| (n != 0.0).then(|| 1.0 / n));
        assert_eq!(reciprocal.decode(&params, "a"), Some(1.0 / 3.0));
        assert_eq!(reciprocal.decode(&params, "b"), None);
        assert_eq!(reciprocal.decode(&params, "c"), None);
    }

    #[test]
    fn test_or_else_only_on_absent() {
        let calls = Cell::new(0);
        let decoder = or_else(string, || {
            calls.set(calls.get() + 1);
            Some("fallback".to_string())
        });
        let params = bag(&[("q", "real")]);

        assert_eq!(decoder.decode(&params, "q"), Some("real".to_string()));
        assert_eq!(calls.get(), 0);
        assert_eq!(decoder.decode(&params, "x"), Some("fallback".to_string()));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_or_else_fallback_may_be_absent() {
        let decoder = or_else(string, || None);
        assert_eq!(decoder.decode(&bag(&[]), "q"), None);
    }

    #[test]
    fn test_get_or_else_on_malformed() {
        let page = get_or_else(integer, || 1.0);
        let params = bag(&[("page", "abc"), ("ok", "2.5")]);
        assert_eq!(page.decode(&params, "page"), 1.0);
        assert_eq!(page.decode(&params, "ok"), 3.0);
    }

    #[test]
    fn test_get_or_null_uses_default() {
        let params = bag(&[]);
        assert_eq!(get_or_null(string).decode(&params, "q"), String::new());
        assert_eq!(get_or_null(number).decode(&params, "n"), 0.0);

        let optional = map(string, Some);
        assert_eq!(get_or_null(optional).decode(&params, "q"), None::<String>);
    }

    #[test]
    fn test_combinators_on_bag_decoders() {
        let params = bag(&[("a", "1")]);
        let decoder = get_or_else(map(bind("a", number), |n: f64| n + 1.0), || 0.0);
        assert_eq!(decoder.run(&params), 2.0);
        assert_eq!(decoder.run(&bag(&[])), 0.0);
    }

    #[test]
    fn test_chaining_through_ext() {
        let params = bag(&[("n", "4")]);
        let decoder = bind("n", number)
            .flat_map(|n: f64| (n > 0.0).then_some(n))
            .map(f64::sqrt)
            .or_else(|| Some(-1.0))
            .get_or_null();
        assert_eq!(decoder.run(&params), 2.0);
        assert_eq!(decoder.run(&bag(&[("n", "-4")])), -1.0);
    }

    #[test]
    fn test_repeated_decode_reinvokes_inner() {
        let calls = Cell::new(0);
        let counted = |params: &dyn ParamBag| {
            calls.set(calls.get() + 1);
            params.get("a").map(str::len)
        };
        let decoder = map(counted, |n: usize| n * 2);
        let params = bag(&[("a", "xyz")]);
        assert_eq!(decoder.run(&params), Some(6));
        assert_eq!(decoder.run(&params), Some(6));
        assert_eq!(calls.get(), 2);
    }
}
