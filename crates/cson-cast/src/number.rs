use serde_json::{Number, Value};

/// Converts a value to `f64`. Never fails.
///
/// - `null` → `0.0`
/// - booleans → `1.0` / `0.0`
/// - numbers → their value
/// - strings → parsed as a float (`"1.5"`, `"-2e3"`, `"inf"`), else `0.0`
/// - arrays and objects → `0.0`
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use cson_cast::to_f64;
///
/// assert_eq!(to_f64(&json!(1.5)), 1.5);
/// assert_eq!(to_f64(&json!("2.25")), 2.25);
/// assert_eq!(to_f64(&json!(true)), 1.0);
/// assert_eq!(to_f64(&json!("abc")), 0.0);
/// ```
pub fn to_f64(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => bool_num(*b) as f64,
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.parse::<f64>().unwrap_or(0.0),
        Value::Array(_) | Value::Object(_) => 0.0,
    }
}

/// Converts a value to `i64`. Never fails.
///
/// - `null` → `0`
/// - booleans → `1` / `0`
/// - integers → their value (saturating above `i64::MAX`)
/// - floats → truncated toward zero (saturating, `NaN` → `0`)
/// - strings → [`parse_int`], else `0`
/// - arrays and objects → `0`
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use cson_cast::to_i64;
///
/// assert_eq!(to_i64(&json!(3698)), 3698);
/// assert_eq!(to_i64(&json!(-2.9)), -2);
/// assert_eq!(to_i64(&json!("0x1f")), 31);
/// assert_eq!(to_i64(&json!("12.00")), 12);
/// assert_eq!(to_i64(&json!("12.5")), 0);
/// ```
pub fn to_i64(value: &Value) -> i64 {
    match value {
        Value::Null => 0,
        Value::Bool(b) => bool_num(*b),
        Value::Number(n) => number_to_i64(n),
        Value::String(s) => parse_int(s).unwrap_or(0),
        Value::Array(_) | Value::Object(_) => 0,
    }
}

fn bool_num(b: bool) -> i64 {
    if b {
        1
    } else {
        0
    }
}

fn number_to_i64(n: &Number) -> i64 {
    if let Some(i) = n.as_i64() {
        return i;
    }
    if n.as_u64().is_some() {
        return i64::MAX;
    }
    // `as` truncates toward zero and saturates; NaN maps to 0.
    n.as_f64().map_or(0, |f| f as i64)
}

/// Parses an integer literal.
///
/// Accepts an optional sign followed by decimal digits, or a radix prefix:
/// `0x` (hex), `0o` or a bare leading `0` (octal), `0b` (binary).
/// Underscores may separate digits. A fraction made only of zeros
/// (`"10.000"`) is dropped first. Returns `None` on anything else,
/// including overflow.
///
/// # Examples
///
/// ```
/// use cson_cast::parse_int;
///
/// assert_eq!(parse_int("42"), Some(42));
/// assert_eq!(parse_int("-0x10"), Some(-16));
/// assert_eq!(parse_int("010"), Some(8));
/// assert_eq!(parse_int("0b101"), Some(5));
/// assert_eq!(parse_int("1_000"), Some(1000));
/// assert_eq!(parse_int("7.0"), Some(7));
/// assert_eq!(parse_int(" 7"), None);
/// ```
pub fn parse_int(s: &str) -> Option<i64> {
    let s = trim_zero_fraction(s);
    let (negative, unsigned) = match s.as_bytes().first()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };

    let lower = unsigned.get(..2).map(str::to_ascii_lowercase);
    let (radix, digits, prefixed) = match lower.as_deref() {
        Some("0x") => (16, &unsigned[2..], true),
        Some("0o") => (8, &unsigned[2..], true),
        Some("0b") => (2, &unsigned[2..], true),
        _ if unsigned.len() > 1 && unsigned.starts_with('0') => (8, &unsigned[1..], true),
        _ => (10, unsigned, false),
    };

    let digits = strip_underscores(digits, prefixed)?;
    if digits.is_empty() || digits.starts_with(|c: char| c == '+' || c == '-') {
        return None;
    }
    let magnitude = u64::from_str_radix(&digits, radix).ok()?;
    if negative {
        if magnitude == i64::MIN.unsigned_abs() {
            Some(i64::MIN)
        } else {
            i64::try_from(magnitude).ok().map(|m| -m)
        }
    } else {
        i64::try_from(magnitude).ok()
    }
}

/// Drops a trailing `.0…0` fraction. `"10."` is left alone.
fn trim_zero_fraction(s: &str) -> &str {
    let Some(dot) = s.rfind('.') else {
        return s;
    };
    let fraction = &s[dot + 1..];
    if !fraction.is_empty() && fraction.bytes().all(|b| b == b'0') {
        &s[..dot]
    } else {
        s
    }
}

/// Removes digit separators. An underscore must sit between two digits,
/// or directly after a radix prefix.
fn strip_underscores(digits: &str, prefixed: bool) -> Option<String> {
    if !digits.contains('_') {
        return Some(digits.to_string());
    }
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(digits.len());
    for (i, &b) in bytes.iter().enumerate() {
        if b != b'_' {
            out.push(b as char);
            continue;
        }
        let after_prefix = i == 0 && prefixed;
        let between_digits = i > 0 && bytes[i - 1] != b'_';
        let followed = bytes.get(i + 1).is_some_and(|&n| n != b'_');
        if !(after_prefix || between_digits) || !followed {
            return None;
        }
    }
    Some(out)
}
