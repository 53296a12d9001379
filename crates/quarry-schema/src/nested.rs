//! Nested-object parsing.
//!
//! A single query value can itself carry a bracket-notation query, e.g. the
//! value of `filter` in `?filter=status%3Dopen%26owner%5Bname%5D%3Dann`
//! decodes to `status=open&owner[name]=ann`, which parses to
//! `{"status": "open", "owner": {"name": "ann"}}`. Leaf values stay strings.
//!
//! [`QsParser`] follows the conventions of the `qs` package:
//!
//! - only the first `parameter_limit` `&`-separated pairs are read;
//! - a repeated key collects its values into an array;
//! - `a[]=x` appends, `a[3]=x` places at an index (up to [`QsParser::ARRAY_LIMIT`],
//!   larger indices become object keys);
//! - brackets beyond `max_depth` are kept as one literal key, or rejected
//!   when the parser is strict.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use quarry_config::NestedConfig;
use serde_json::{Map, Value};

use crate::NestedParseError;

/// Turns one string into a generic key/value tree.
pub trait NestedParser {
    /// Parses `raw`.
    ///
    /// # Errors
    ///
    /// Returns a [`NestedParseError`] if `raw` is not acceptable input.
    fn parse_nested(&self, raw: &str) -> Result<Value, NestedParseError>;
}

impl<P: NestedParser + ?Sized> NestedParser for &P {
    fn parse_nested(&self, raw: &str) -> Result<Value, NestedParseError> {
        (**self).parse_nested(raw)
    }
}

/// `qs`-style bracket-notation parser.
///
/// # Example
///
/// ```
/// use quarry_schema::{NestedParser, QsParser};
/// use serde_json::json;
///
/// let tree = QsParser::new().parse_nested("a[b]=1&c=2&c=3").unwrap();
/// assert_eq!(tree, json!({"a": {"b": "1"}, "c": ["2", "3"]}));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QsParser {
    max_depth: usize,
    strict: bool,
    parameter_limit: usize,
}

impl Default for QsParser {
    fn default() -> Self {
        Self::from_config(&NestedConfig::default())
    }
}

impl QsParser {
    /// Highest bracket index that still produces an array element.
    pub const ARRAY_LIMIT: usize = 20;

    /// Creates a parser with the default limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser from the `[nested]` configuration section.
    #[must_use]
    pub fn from_config(config: &NestedConfig) -> Self {
        Self {
            max_depth: config.max_depth,
            strict: config.strict,
            parameter_limit: config.parameter_limit,
        }
    }

    /// Sets the maximum bracket depth.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Rejects keys deeper than the maximum depth instead of keeping the
    /// remainder as a literal key.
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Sets how many `&`-separated pairs are read; the rest are ignored.
    #[must_use]
    pub fn with_parameter_limit(mut self, limit: usize) -> Self {
        self.parameter_limit = limit;
        self
    }

    /// Returns the maximum bracket depth.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Returns the parameter limit.
    #[must_use]
    pub fn parameter_limit(&self) -> usize {
        self.parameter_limit
    }

    /// Returns whether over-deep keys are rejected.
    #[must_use]
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Splits `key` into its parent and bracket segments, e.g.
    /// `a[b][]` into `a`, `[b]`, `[]`.
    fn segments(&self, key: &str) -> Result<Vec<String>, NestedParseError> {
        if self.max_depth == 0 {
            return Ok(vec![key.to_owned()]);
        }

        let first = next_group(key, 0);
        let parent = first.map_or(key, |(start, _)| &key[..start]);

        let mut segments = Vec::new();
        if !parent.is_empty() {
            segments.push(parent.to_owned());
        }

        let mut cursor = first;
        let mut depth = 0;
        while let Some((start, end)) = cursor {
            if depth == self.max_depth {
                if self.strict {
                    return Err(NestedParseError::TooDeep {
                        key: key.to_owned(),
                        depth: self.max_depth,
                    });
                }
                segments.push(format!("[{}]", &key[start..]));
                break;
            }
            segments.push(key[start..end].to_owned());
            depth += 1;
            cursor = next_group(key, end);
        }

        Ok(segments)
    }
}

impl NestedParser for QsParser {
    fn parse_nested(&self, raw: &str) -> Result<Value, NestedParseError> {
        let raw = raw
            .replace("%5B", "[")
            .replace("%5b", "[")
            .replace("%5D", "]")
            .replace("%5d", "]");

        let mut flat: IndexMap<String, Node> = IndexMap::new();
        for part in raw.split('&').take(self.parameter_limit) {
            let (key, value) = split_pair(part);
            if key.is_empty() {
                continue;
            }
            let value = Node::Leaf(Value::String(value));
            match flat.get_mut(&key) {
                Some(slot) => slot.replace_with(|existing| existing.combine(value)),
                None => {
                    flat.insert(key, value);
                }
            }
        }

        let mut root = Node::Map(IndexMap::new());
        for (key, value) in flat {
            let segments = self.segments(&key)?;
            root = root.merge(nest(&segments, value));
        }

        Ok(root.into_value())
    }
}

/// Decodes one `key=value` pair. A `]=` takes precedence over the first
/// `=` so that values may contain `=` after a bracketed key.
fn split_pair(part: &str) -> (String, String) {
    let position = part
        .find("]=")
        .map(|bracket| bracket + 1)
        .or_else(|| part.find('='));

    match position {
        Some(at) => (decode_component(&part[..at]), decode_component(&part[at + 1..])),
        None => (decode_component(part), String::new()),
    }
}

/// `+` is a space; undecodable input is kept as written.
fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    let decoded = urlencoding::decode(&spaced).ok().map(std::borrow::Cow::into_owned);
    decoded.unwrap_or(spaced)
}

/// Finds the next `[...]` group without inner brackets at or after `from`.
fn next_group(key: &str, from: usize) -> Option<(usize, usize)> {
    let mut open = None;
    for (index, byte) in key.bytes().enumerate().skip(from) {
        match byte {
            b'[' => open = Some(index),
            b']' => {
                if let Some(start) = open {
                    return Some((start, index + 1));
                }
            }
            _ => {}
        }
    }
    None
}

/// Wraps `leaf` in the containers described by `segments`, innermost last.
fn nest(segments: &[String], leaf: Node) -> Node {
    segments.iter().rev().fold(leaf, |child, segment| {
        if segment == "[]" {
            return match child {
                list @ Node::List(_) => list,
                other => Node::List(BTreeMap::from([(0, other)])),
            };
        }

        let clean = segment
            .strip_prefix('[')
            .and_then(|inner| inner.strip_suffix(']'))
            .unwrap_or(segment);

        match array_index(segment, clean) {
            Some(index) => Node::List(BTreeMap::from([(index, child)])),
            None => Node::Map(IndexMap::from([(clean.to_owned(), child)])),
        }
    })
}

/// `[3]` is an index when written canonically and within the array limit.
fn array_index(segment: &str, clean: &str) -> Option<usize> {
    if segment == clean {
        return None;
    }
    clean
        .parse::<usize>()
        .ok()
        .filter(|index| index.to_string() == clean && *index <= QsParser::ARRAY_LIMIT)
}

/// Intermediate tree. Lists stay sparse until the end so that indexed
/// and appended elements can be merged in any order.
#[derive(Debug)]
enum Node {
    Leaf(Value),
    List(BTreeMap<usize, Node>),
    Map(IndexMap<String, Node>),
}

impl Node {
    fn is_branch(&self) -> bool {
        !matches!(self, Self::Leaf(_))
    }

    fn replace_with(&mut self, f: impl FnOnce(Self) -> Self) {
        let taken = std::mem::replace(self, Self::Leaf(Value::Null));
        *self = f(taken);
    }

    /// Repeated flat key.
    fn combine(self, value: Self) -> Self {
        match self {
            Self::List(mut items) => {
                push(&mut items, value);
                Self::List(items)
            }
            other => Self::List(BTreeMap::from([(0, other), (1, value)])),
        }
    }

    fn merge(self, source: Self) -> Self {
        match (self, source) {
            (Self::List(mut target), source @ Self::Leaf(_)) => {
                push(&mut target, source);
                Self::List(target)
            }
            (Self::Map(mut target), Self::Leaf(key)) => {
                let key = match key {
                    Value::String(key) => key,
                    other => other.to_string(),
                };
                target.insert(key, Self::Leaf(Value::Bool(true)));
                Self::Map(target)
            }
            (target @ Self::Leaf(_), Self::List(source)) => {
                let mut items = BTreeMap::from([(0, target)]);
                for item in source.into_values() {
                    push(&mut items, item);
                }
                Self::List(items)
            }
            (target @ Self::Leaf(_), source) => {
                Self::List(BTreeMap::from([(0, target), (1, source)]))
            }
            (Self::List(mut target), Self::List(source)) => {
                for (index, item) in source {
                    match target.get_mut(&index) {
                        Some(slot) if slot.is_branch() && item.is_branch() => {
                            slot.replace_with(|existing| existing.merge(item));
                        }
                        Some(_) => push(&mut target, item),
                        None => {
                            target.insert(index, item);
                        }
                    }
                }
                Self::List(target)
            }
            (Self::List(target), source @ Self::Map(_)) => {
                Self::Map(keyed_by_index(target)).merge(source)
            }
            (Self::Map(target), Self::List(source)) => {
                Self::Map(target).merge(Self::Map(keyed_by_index(source)))
            }
            (Self::Map(mut target), Self::Map(source)) => {
                for (key, value) in source {
                    match target.get_mut(&key) {
                        Some(slot) => slot.replace_with(|existing| existing.merge(value)),
                        None => {
                            target.insert(key, value);
                        }
                    }
                }
                Self::Map(target)
            }
        }
    }

    fn into_value(self) -> Value {
        match self {
            Self::Leaf(value) => value,
            Self::List(items) => Value::Array(items.into_values().map(Self::into_value).collect()),
            Self::Map(entries) => Value::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, value.into_value()))
                    .collect::<Map<String, Value>>(),
            ),
        }
    }
}

fn push(items: &mut BTreeMap<usize, Node>, item: Node) {
    let next = items.keys().next_back().map_or(0, |last| last + 1);
    items.insert(next, item);
}

fn keyed_by_index(items: BTreeMap<usize, Node>) -> IndexMap<String, Node> {
    items
        .into_iter()
        .map(|(index, item)| (index.to_string(), item))
        .collect()
}
