//! Parameter bags.
//!
//! A [`ParamBag`] is the read-only view every decoder is given: a flat
//! mapping from parameter name to raw string value. Any map-like type can be
//! a bag; [`QueryParams`] is the one built from a raw query string.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use indexmap::IndexMap;
use smallvec::SmallVec;

/// Maximum number of parameters stored inline (stack allocated).
const INLINE_PARAMS: usize = 4;

/// A flat, read-only mapping from parameter name to raw string value.
///
/// Decoders only ever call [`get`](ParamBag::get); they never mutate or
/// retain the bag.
pub trait ParamBag {
    /// Returns the raw value for `name`, if present.
    fn get(&self, name: &str) -> Option<&str>;

    /// Returns true if `name` is present.
    fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

impl<B: ParamBag + ?Sized> ParamBag for &B {
    fn get(&self, name: &str) -> Option<&str> {
        (**self).get(name)
    }
}

impl<K, V, S> ParamBag for HashMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    V: AsRef<str>,
    S: BuildHasher,
{
    fn get(&self, name: &str) -> Option<&str> {
        HashMap::get(self, name).map(AsRef::as_ref)
    }
}

impl<K, V> ParamBag for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: AsRef<str>,
{
    fn get(&self, name: &str) -> Option<&str> {
        BTreeMap::get(self, name).map(AsRef::as_ref)
    }
}

impl<K, V, S> ParamBag for IndexMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    V: AsRef<str>,
    S: BuildHasher,
{
    fn get(&self, name: &str) -> Option<&str> {
        IndexMap::get(self, name).map(AsRef::as_ref)
    }
}

/// Pair lists: the first occurrence of a name wins.
impl<K, V> ParamBag for [(K, V)]
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn get(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.as_ref())
    }
}

impl<K, V> ParamBag for Vec<(K, V)>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn get(&self, name: &str) -> Option<&str> {
        ParamBag::get(self.as_slice(), name)
    }
}

impl<K, V, const N: usize> ParamBag for [(K, V); N]
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    fn get(&self, name: &str) -> Option<&str> {
        ParamBag::get(self.as_slice(), name)
    }
}

/// Errors from building [`QueryParams`] out of a raw query string.
#[derive(Debug, thiserror::Error)]
pub enum ParamsError {
    /// The query string is not valid `application/x-www-form-urlencoded`.
    #[error("invalid query string: {0}")]
    Malformed(#[from] serde_urlencoded::de::Error),
}

/// Query parameters parsed out of a URL.
///
/// Uses small-vector optimization to avoid heap allocation for the common
/// case of a handful of parameters. Pairs keep their original order; when a
/// name repeats, [`get`](Self::get) returns the first value and
/// [`get_all`](Self::get_all) returns every one.
///
/// # Example
///
/// ```rust
/// use quarry_core::QueryParams;
///
/// let params = QueryParams::parse("?q=hello%20world&tag=a&tag=b").unwrap();
///
/// assert_eq!(params.get("q"), Some("hello world"));
/// assert_eq!(params.get("tag"), Some("a"));
/// assert_eq!(params.get_all("tag").collect::<Vec<_>>(), vec!["a", "b"]);
/// assert_eq!(params.get("unknown"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryParams {
    /// Storage for parameter (name, value) pairs
    inner: SmallVec<[(String, String); INLINE_PARAMS]>,
}

impl QueryParams {
    /// Creates a new empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a params set with the given capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: SmallVec::with_capacity(capacity),
        }
    }

    /// Parses a raw query string, with or without its leading `?`.
    ///
    /// Names and values are percent-decoded and `+` becomes a space.
    ///
    /// # Errors
    ///
    /// Returns [`ParamsError::Malformed`] if the input cannot be decoded.
    pub fn parse(query: &str) -> Result<Self, ParamsError> {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query)?;
        Ok(pairs.into_iter().collect())
    }

    /// Parses the query component of a URI or request target.
    ///
    /// Anything up to the first `?` and from the first `#` is ignored. A URI
    /// without a query yields an empty set.
    ///
    /// # Errors
    ///
    /// Returns [`ParamsError::Malformed`] if the query cannot be decoded.
    pub fn from_uri(uri: &str) -> Result<Self, ParamsError> {
        let uri = uri.split_once('#').map_or(uri, |(before, _)| before);
        match uri.split_once('?') {
            Some((_, query)) => Self::parse(query),
            None => Ok(Self::new()),
        }
    }

    /// Adds a parameter to the set.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.inner.push((name.into(), value.into()));
    }

    /// Returns the first value for a parameter by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.inner
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns every value for a parameter, in order of appearance.
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.inner
            .iter()
            .filter(move |(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns true if there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of parameters, counting repeats.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns an iterator over the parameters.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl ParamBag for QueryParams {
    fn get(&self, name: &str) -> Option<&str> {
        QueryParams::get(self, name)
    }
}

impl std::str::FromStr for QueryParams {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<'a> IntoIterator for &'a QueryParams {
    type Item = (&'a str, &'a str);
    type IntoIter = std::iter::Map<
        std::slice::Iter<'a, (String, String)>,
        fn(&'a (String, String)) -> (&'a str, &'a str),
    >;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(n, v)| (n.to_owned(), v.to_owned()))
            .collect()
    }
}
