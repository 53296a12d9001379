//! Data-last forms of every operation.
//!
//! Each function here takes the arguments of its data-first twin minus the
//! data, and returns a function expecting that data. Decoders expect the
//! bag; combinators expect the decoder they wrap. Every returned function
//! calls the data-first form, so both conventions behave identically.
//!
//! ```rust
//! use quarry::prelude::*;
//!
//! let params = QueryParams::parse("tags=a,b,c").unwrap();
//!
//! let count = pipe::array("tags", Text)
//!     .pipe(pipe::map(|tags: Vec<String>| tags.len()))
//!     .pipe(pipe::get_or_else(|| 0));
//!
//! assert_eq!(count.run(&params), 3);
//! ```

use quarry_core::{
    Decoder, FlatMap, GetOrElse, GetOrNull, Map, OrElse, ParamBag, Shape,
};
use quarry_schema::{Map as JsonMap, NestedParser, Schema, Value};

/// Applies a function to a value, for left-to-right chains.
///
/// Implemented for every type.
///
/// ```rust
/// use quarry::Pipe;
///
/// assert_eq!(3.pipe(|n| n * 2).pipe(|n| n + 1), 7);
/// ```
pub trait Pipe: Sized {
    /// Returns `f(self)`.
    fn pipe<R, F>(self, f: F) -> R
    where
        F: FnOnce(Self) -> R,
    {
        f(self)
    }
}

impl<T> Pipe for T {}

/// Data-last [`string`](quarry_core::string).
pub fn string(name: &str) -> impl Fn(&dyn ParamBag) -> Option<String> {
    let name = name.to_owned();
    move |params: &dyn ParamBag| quarry_core::string(params, &name)
}

/// Data-last [`number`](quarry_core::number).
pub fn number(name: &str) -> impl Fn(&dyn ParamBag) -> Option<f64> {
    let name = name.to_owned();
    move |params: &dyn ParamBag| quarry_core::number(params, &name)
}

/// Data-last [`integer`](quarry_core::integer).
pub fn integer(name: &str) -> impl Fn(&dyn ParamBag) -> Option<f64> {
    let name = name.to_owned();
    move |params: &dyn ParamBag| quarry_core::integer(params, &name)
}

/// Data-last [`record`](quarry_core::record).
pub fn record<S: Shape>(shape: S) -> impl Fn(&dyn ParamBag) -> S::Output {
    move |params: &dyn ParamBag| quarry_core::record(params, &shape)
}

/// Data-last [`array`](quarry_core::array).
pub fn array<S: Schema>(name: &str, schema: S) -> impl Fn(&dyn ParamBag) -> Option<Vec<S::Output>> {
    let name = name.to_owned();
    move |params: &dyn ParamBag| quarry_core::array(params, &name, &schema)
}

/// Data-last [`object`](quarry_core::object).
pub fn object(name: &str) -> impl Fn(&dyn ParamBag) -> Option<JsonMap<String, Value>> {
    let name = name.to_owned();
    move |params: &dyn ParamBag| quarry_core::object(params, &name)
}

/// Data-last [`object_with`](quarry_core::object_with).
pub fn object_with<P, S>(
    name: &str,
    parser: P,
    schema: S,
) -> impl Fn(&dyn ParamBag) -> Option<S::Output>
where
    P: NestedParser,
    S: Schema,
{
    let name = name.to_owned();
    move |params: &dyn ParamBag| quarry_core::object_with(params, &name, &parser, &schema)
}

/// Data-last [`map`](quarry_core::map).
pub fn map<A, D, F, X, Y>(f: F) -> impl FnOnce(D) -> Map<D, F>
where
    A: ?Sized,
    D: Decoder<A, Output = Option<X>>,
    F: Fn(X) -> Y,
{
    move |decoder: D| quarry_core::map::<A, D, F, X, Y>(decoder, f)
}

/// Data-last [`flat_map`](quarry_core::flat_map).
pub fn flat_map<A, D, F, X, Y>(f: F) -> impl FnOnce(D) -> FlatMap<D, F>
where
    A: ?Sized,
    D: Decoder<A, Output = Option<X>>,
    F: Fn(X) -> Option<Y>,
{
    move |decoder: D| quarry_core::flat_map::<A, D, F, X, Y>(decoder, f)
}

/// Data-last [`or_else`](quarry_core::or_else).
pub fn or_else<A, D, F, X>(fallback: F) -> impl FnOnce(D) -> OrElse<D, F>
where
    A: ?Sized,
    D: Decoder<A, Output = Option<X>>,
    F: Fn() -> Option<X>,
{
    move |decoder: D| quarry_core::or_else::<A, D, F, X>(decoder, fallback)
}

/// Data-last [`get_or_else`](quarry_core::get_or_else).
pub fn get_or_else<A, D, F, X>(default: F) -> impl FnOnce(D) -> GetOrElse<D, F>
where
    A: ?Sized,
    D: Decoder<A, Output = Option<X>>,
    F: Fn() -> X,
{
    move |decoder: D| quarry_core::get_or_else::<A, D, F, X>(decoder, default)
}

/// Data-last [`get_or_null`](quarry_core::get_or_null).
pub fn get_or_null<A, D, X>() -> impl FnOnce(D) -> GetOrNull<D>
where
    A: ?Sized,
    D: Decoder<A, Output = Option<X>>,
    X: Default,
{
    |decoder: D| quarry_core::get_or_null::<A, D, X>(decoder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quarry_core::{Decoder, QueryParams, RunDecoder};
    use quarry_schema::{AnyObject, NumberFromString, QsParser};

    fn query(raw: &str) -> QueryParams {
        QueryParams::parse(raw).unwrap()
    }

    #[test]
    fn test_primitives_match_data_first() {
        let params = query("s=hi&n=2.5");
        assert_eq!(string("s")(&params), quarry_core::string(&params, "s"));
        assert_eq!(number("n")(&params), quarry_core::number(&params, "n"));
        assert_eq!(integer("n")(&params), quarry_core::integer(&params, "n"));
        assert_eq!(integer("missing")(&params), None);
    }

    #[test]
    fn test_name_is_owned() {
        let decoder = {
            let name = String::from("s");
            string(&name)
        };
        assert_eq!(decoder(&query("s=x")), Some("x".to_string()));
    }

    #[test]
    fn test_composites_match_data_first() {
        let params = query("ids=1,2&f=a%3D1");
        assert_eq!(
            array("ids", NumberFromString)(&params),
            quarry_core::array(&params, "ids", &NumberFromString)
        );
        assert_eq!(object("f")(&params), quarry_core::object(&params, "f"));

        let parser = QsParser::default().with_max_depth(1);
        assert_eq!(
            object_with("f", parser, AnyObject)(&params),
            quarry_core::object_with(&params, "f", &parser, &AnyObject)
        );
    }

    #[test]
    fn test_record_data_last() {
        let params = query("a=x");
        let shape = (quarry_core::field("a", quarry_core::string), quarry_core::field("b", quarry_core::number));
        assert_eq!(record(shape.clone())(&params), quarry_core::record(&params, &shape));
    }

    #[test]
    fn test_combinators_wrap_field_decoders() {
        let params = query("n=4");
        let doubled = map(|n: f64| n * 2.0)(quarry_core::number);
        assert_eq!(doubled.decode(&params, "n"), Some(8.0));

        let defaulted = get_or_else(|| -1.0)(quarry_core::number);
        assert_eq!(defaulted.decode(&params, "x"), -1.0);
    }

    #[test]
    fn test_combinators_chain_with_pipe() {
        let decoder = number("n")
            .pipe(flat_map(|n: f64| (n > 0.0).then_some(n)))
            .pipe(or_else(|| Some(10.0)))
            .pipe(get_or_null());

        assert_eq!(decoder.run(&query("n=4")), 4.0);
        assert_eq!(decoder.run(&query("n=-4")), 10.0);
    }
}
