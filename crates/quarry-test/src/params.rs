//! Test parameter building.

use quarry_core::{QueryParams, ARRAY_DELIMITER};

use crate::error::TestError;
use crate::nested::nested_query;

/// Builder for parameter bags used in tests.
///
/// Values are stored decoded, exactly as a decoder will see them.
///
/// # Example
///
/// ```rust
/// use quarry_test::TestParams;
///
/// let bag = TestParams::new()
///     .param("q", "shoes")
///     .list("ids", ["1", "2", "3"])
///     .nested("filter", &[("price[min]", "10"), ("color", "red")])
///     .build();
///
/// assert_eq!(bag.get("ids"), Some("1,2,3"));
/// assert_eq!(bag.get("filter"), Some("price[min]=10&color=red"));
/// ```
#[must_use]
#[derive(Debug, Clone, Default)]
pub struct TestParams {
    params: QueryParams,
}

impl TestParams {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a raw (encoded) query string as the starting point.
    pub fn from_query(query: &str) -> Result<Self, TestError> {
        Ok(Self {
            params: QueryParams::parse(query)?,
        })
    }

    /// Adds a parameter.
    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push(name, value);
        self
    }

    /// Adds a list parameter, joined the way `array` splits it.
    pub fn list<I, S>(self, name: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = items
            .into_iter()
            .map(|item| item.as_ref().to_owned())
            .collect::<Vec<_>>()
            .join(&ARRAY_DELIMITER.to_string());
        self.param(name, joined)
    }

    /// Adds a parameter holding a nested query built from `pairs`.
    pub fn nested(self, name: impl Into<String>, pairs: &[(&str, &str)]) -> Self {
        self.param(name, nested_query(pairs))
    }

    /// Renders the parameters as an encoded query string.
    pub fn to_query_string(&self) -> String {
        self.params
            .iter()
            .map(|(name, value)| {
                format!(
                    "{}={}",
                    urlencoding::encode(name),
                    urlencoding::encode(value)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Finishes the bag.
    pub fn build(self) -> QueryParams {
        self.params
    }
}
