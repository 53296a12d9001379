//! Records: many fields decoded independently.
//!
//! A [`Shape`] describes which parameters make up a record and how each is
//! decoded. Every field decoder is called with its own name and its result
//! is stored as-is, so one field being absent never affects its siblings and
//! the record as a whole never fails.

use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;

use indexmap::IndexMap;

use crate::{Decoder, ParamBag};

/// Describes how to decode a record out of a bag.
///
/// Implemented for a single [`Field`], for tuples of shapes (producing a
/// tuple of outputs, so each field keeps its own type), and for name-keyed
/// collections of one decoder type (producing an [`IndexMap`] in input
/// order).
pub trait Shape {
    /// The decoded record.
    type Output;

    /// Decodes every field of the shape.
    fn decode_shape(&self, params: &dyn ParamBag) -> Self::Output;

    /// The parameter names read by this shape, in order.
    fn names(&self) -> Vec<&str>;
}

impl<S: Shape + ?Sized> Shape for &S {
    type Output = S::Output;

    fn decode_shape(&self, params: &dyn ParamBag) -> Self::Output {
        (**self).decode_shape(params)
    }

    fn names(&self) -> Vec<&str> {
        (**self).names()
    }
}

/// One named field of a record.
#[derive(Clone)]
pub struct Field<D> {
    name: Cow<'static, str>,
    decoder: D,
}

impl<D> fmt::Debug for Field<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field").field("name", &self.name).finish_non_exhaustive()
    }
}

/// Pairs a parameter name with the field decoder that reads it.
pub fn field<D: Decoder<str>>(name: impl Into<Cow<'static, str>>, decoder: D) -> Field<D> {
    Field {
        name: name.into(),
        decoder,
    }
}

impl<D: Decoder<str>> Shape for Field<D> {
    type Output = D::Output;

    fn decode_shape(&self, params: &dyn ParamBag) -> Self::Output {
        self.decoder.decode(params, &self.name)
    }

    fn names(&self) -> Vec<&str> {
        vec![self.name.as_ref()]
    }
}

macro_rules! impl_shape_for_tuple {
    ($($T:ident),*) => {
        impl<$($T: Shape),*> Shape for ($($T,)*) {
            type Output = ($($T::Output,)*);

            #[allow(non_snake_case)]
            fn decode_shape(&self, params: &dyn ParamBag) -> Self::Output {
                let ($($T,)*) = self;
                ($($T.decode_shape(params),)*)
            }

            #[allow(non_snake_case)]
            fn names(&self) -> Vec<&str> {
                let ($($T,)*) = self;
                let mut names = Vec::new();
                $(names.extend($T.names());)*
                names
            }
        }
    };
}

impl_shape_for_tuple!(T1);
impl_shape_for_tuple!(T1, T2);
impl_shape_for_tuple!(T1, T2, T3);
impl_shape_for_tuple!(T1, T2, T3, T4);
impl_shape_for_tuple!(T1, T2, T3, T4, T5);
impl_shape_for_tuple!(T1, T2, T3, T4, T5, T6);
impl_shape_for_tuple!(T1, T2, T3, T4, T5, T6, T7);
impl_shape_for_tuple!(T1, T2, T3, T4, T5, T6, T7, T8);
impl_shape_for_tuple!(T1, T2, T3, T4, T5, T6, T7, T8, T9);
impl_shape_for_tuple!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10);
impl_shape_for_tuple!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11);
impl_shape_for_tuple!(T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12);

impl<D: Decoder<str>, H> Shape for IndexMap<String, D, H> {
    type Output = IndexMap<String, D::Output>;

    fn decode_shape(&self, params: &dyn ParamBag) -> Self::Output {
        self.iter()
            .map(|(name, decoder)| (name.clone(), decoder.decode(params, name)))
            .collect()
    }

    fn names(&self) -> Vec<&str> {
        self.keys().map(String::as_str).collect()
    }
}

impl<D: Decoder<str>> Shape for Vec<(&str, D)> {
    type Output = IndexMap<String, D::Output>;

    fn decode_shape(&self, params: &dyn ParamBag) -> Self::Output {
        self.iter()
            .map(|(name, decoder)| ((*name).to_owned(), decoder.decode(params, name)))
            .collect()
    }

    fn names(&self) -> Vec<&str> {
        self.iter().map(|(name, _)| *name).collect()
    }
}

/// Decodes every field of `shape` from `params`.
///
/// ```rust
/// use quarry_core::{field, get_or_else, integer, record, string};
/// use std::collections::HashMap;
///
/// let params = HashMap::from([("q", "rust")]);
/// let (q, page) = record(&params, &(field("q", string), field("page", get_or_else(integer, || 1.0))));
///
/// assert_eq!(q, Some("rust".to_string()));
/// assert_eq!(page, 1.0);
/// ```
///
/// # Panics
///
/// In debug builds, panics if two fields of `shape` share a name.
pub fn record<S: Shape + ?Sized>(params: &dyn ParamBag, shape: &S) -> S::Output {
    debug_assert_unique(shape);
    shape.decode_shape(params)
}

/// A [`Shape`] packaged as a bag decoder.
#[derive(Debug, Clone)]
pub struct Record<S> {
    shape: S,
}

impl<S: Shape> Record<S> {
    /// Wraps `shape`.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if two fields of `shape` share a name.
    pub fn new(shape: S) -> Self {
        debug_assert_unique(&shape);
        Self { shape }
    }

    /// The wrapped shape.
    pub fn shape(&self) -> &S {
        &self.shape
    }
}

impl<S: Shape> Decoder for Record<S> {
    type Output = S::Output;

    fn decode(&self, params: &dyn ParamBag, _args: &()) -> Self::Output {
        self.shape.decode_shape(params)
    }
}

fn debug_assert_unique<S: Shape + ?Sized>(shape: &S) {
    if cfg!(debug_assertions) {
        let mut seen = HashSet::new();
        for name in shape.names() {
            assert!(seen.insert(name), "duplicate record field '{name}'");
        }
    }
}

/// Types that decode themselves from a bag.
///
/// Usually implemented through [`record!`](crate::record!).
pub trait FromParams: Sized {
    /// Decodes `Self` from `params`.
    fn from_params(params: &dyn ParamBag) -> Self;
}

/// Decodes a [`FromParams`] type; usable directly as a bag decoder.
///
/// ```rust
/// use quarry_core::{from_params, number, RunDecoder};
/// use std::collections::HashMap;
///
/// quarry_core::record! {
///     struct Price {
///         min: Option<f64> = number,
///         max: Option<f64> = number,
///     }
/// }
///
/// let price = from_params::<Price>.run(&HashMap::from([("min", "2")]));
/// assert_eq!(price.min, Some(2.0));
/// assert_eq!(price.max, None);
/// ```
pub fn from_params<T: FromParams>(params: &dyn ParamBag) -> T {
    T::from_params(params)
}

/// Declares a struct whose fields are decoded from a bag.
///
/// Each field names the field decoder that reads it; the parameter name is
/// the field name. The declared type must match the decoder's output.
///
/// ```rust
/// use quarry_core::{get_or_else, integer, string, FromParams, QueryParams};
///
/// quarry_core::record! {
///     /// A search request.
///     #[derive(Debug, PartialEq)]
///     pub struct Search {
///         pub q: Option<String> = string,
///         pub page: f64 = get_or_else(integer, || 1.0),
///     }
/// }
///
/// let params = QueryParams::parse("q=rust").unwrap();
/// assert_eq!(
///     Search::from_params(&params),
///     Search { q: Some("rust".to_string()), page: 1.0 }
/// );
/// ```
#[macro_export]
macro_rules! record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty = $decoder:expr
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty,
            )*
        }

        impl $crate::FromParams for $name {
            #[allow(unused_variables)]
            fn from_params(params: &dyn $crate::ParamBag) -> Self {
                Self {
                    $(
                        $field: $crate::Decoder::<str>::decode(
                            &$decoder,
                            params,
                            stringify!($field),
                        ),
                    )*
                }
            }
        }
    };
}
