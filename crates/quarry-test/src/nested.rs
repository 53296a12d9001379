//! Nested query helpers.

/// Builds a bracket-notation query from `(key, value)` pairs.
///
/// Values are percent-encoded; keys are kept as written so that brackets
/// stay readable to the nested parser.
///
/// ```rust
/// use quarry_test::nested_query;
///
/// assert_eq!(
///     nested_query(&[("owner[name]", "Ann Lee"), ("tags[]", "a&b")]),
///     "owner[name]=Ann%20Lee&tags[]=a%26b"
/// );
/// ```
pub fn nested_query(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Encodes one outer `name=value` pair whose value is a nested query, ready
/// to be placed in a URL.
///
/// ```rust
/// use quarry_test::{embed, nested_query};
///
/// let outer = embed("filter", &nested_query(&[("a[b]", "1")]));
/// assert_eq!(outer, "filter=a%5Bb%5D%3D1");
/// ```
pub fn embed(name: &str, nested: &str) -> String {
    format!(
        "{}={}",
        urlencoding::encode(name),
        urlencoding::encode(nested)
    )
}
