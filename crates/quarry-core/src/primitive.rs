//! Primitive field decoders.
//!
//! Each takes the bag and a parameter name and reads exactly that one
//! parameter.

use crate::ParamBag;

/// Reads a parameter as text.
///
/// Present means `Some`, including the empty string.
///
/// ```rust
/// use quarry_core::string;
/// use std::collections::HashMap;
///
/// let params = HashMap::from([("q", "hello"), ("empty", "")]);
/// assert_eq!(string(&params, "q"), Some("hello".to_string()));
/// assert_eq!(string(&params, "empty"), Some(String::new()));
/// assert_eq!(string(&params, "missing"), None);
/// ```
#[must_use]
pub fn string(params: &dyn ParamBag, name: &str) -> Option<String> {
    params.get(name).map(str::to_owned)
}

/// Reads a parameter as a floating-point number.
///
/// Parsing follows [`parse_float`]: the longest numeric prefix counts and
/// trailing characters are ignored. `None` when the parameter is missing or
/// has no numeric prefix.
///
/// ```rust
/// use quarry_core::number;
/// use std::collections::HashMap;
///
/// let params = HashMap::from([("a", "3.7"), ("b", "12px"), ("c", "abc")]);
/// assert_eq!(number(&params, "a"), Some(3.7));
/// assert_eq!(number(&params, "b"), Some(12.0));
/// assert_eq!(number(&params, "c"), None);
/// ```
#[must_use]
pub fn number(params: &dyn ParamBag, name: &str) -> Option<f64> {
    string(params, name).as_deref().and_then(parse_float)
}

/// Reads a parameter as a number rounded to the nearest integer.
///
/// Halves round toward positive infinity (see [`round_half_up`]). The result
/// stays an `f64` so that magnitudes beyond `i64` and the infinities survive.
///
/// ```rust
/// use quarry_core::integer;
/// use std::collections::HashMap;
///
/// let params = HashMap::from([("a", "3.5"), ("b", "-3.5"), ("c", "-3.6")]);
/// assert_eq!(integer(&params, "a"), Some(4.0));
/// assert_eq!(integer(&params, "b"), Some(-3.0));
/// assert_eq!(integer(&params, "c"), Some(-4.0));
/// ```
#[must_use]
pub fn integer(params: &dyn ParamBag, name: &str) -> Option<f64> {
    number(params, name).map(round_half_up)
}

/// Parses the longest numeric prefix of `input`.
///
/// Accepted, after optional leading whitespace (the ECMAScript set, which
/// includes U+FEFF and excludes U+0085): an optional sign, then either
/// `Infinity` or a decimal literal (`12`, `1.5`, `.5`, `5.`, `1e3`,
/// `2.5E-2`). Anything after the literal is ignored. There is no hex,
/// octal or binary form and `NaN` is never produced.
///
/// ```rust
/// use quarry_core::parse_float;
///
/// assert_eq!(parse_float("  -1.5e2xyz"), Some(-150.0));
/// assert_eq!(parse_float("0x10"), Some(0.0));
/// assert_eq!(parse_float("Infinity"), Some(f64::INFINITY));
/// assert_eq!(parse_float(""), None);
/// assert_eq!(parse_float("NaN"), None);
/// ```
#[must_use]
pub fn parse_float(input: &str) -> Option<f64> {
    let s = input.trim_start_matches(is_js_whitespace);
    let bytes = s.as_bytes();
    let mut end = 0;

    let negative = bytes.first() == Some(&b'-');
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if s[end..].starts_with("Infinity") {
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits + frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = count_digits(&bytes[exp.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// Rounds to the nearest integer, halves toward positive infinity.
///
/// `2.5` becomes `3` and `-2.5` becomes `-2`. Negative input that rounds to
/// zero gives `-0.0`. Non-finite input is returned unchanged.
#[must_use]
pub fn round_half_up(x: f64) -> f64 {
    if !x.is_finite() {
        return x;
    }
    let floor = x.floor();
    let rounded = if x - floor >= 0.5 { floor + 1.0 } else { floor };
    if rounded == 0.0 && x.is_sign_negative() {
        -0.0
    } else {
        rounded
    }
}

fn is_js_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{0085}')
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
