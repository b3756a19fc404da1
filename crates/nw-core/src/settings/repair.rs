//! Repair of stored settings blobs.
//!
//! Stored data may come from an older build, a hand edit, or a truncated
//! write. Decoding never fails: each field is repaired on its own, so a bad
//! name list does not reset a good die count.

use serde_json::{Map, Number, Value};
use tracing::warn;

use super::{MAX_DICE, Settings};

/// Decode a stored blob into valid [`Settings`].
///
/// - Unparseable JSON, or a bare `null`, yields the defaults.
/// - `numDice` is read leniently (see [`parse_die_count`]) and clamped.
/// - `diceNames` must be an array of exactly six entries, otherwise all six
///   names fall back to their defaults. Entries are coerced to text.
pub fn decode(raw: &str) -> Settings {
    let parsed: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            warn!("error parsing stored settings, using defaults: {e}");
            return Settings::default();
        }
    };
    if parsed.is_null() {
        warn!("stored settings are null, using defaults");
        return Settings::default();
    }

    let empty = Map::new();
    let fields = parsed.as_object().unwrap_or(&empty);
    let count = parse_die_count(fields.get("numDice"));

    let names = match fields.get("diceNames").and_then(Value::as_array) {
        Some(items) if items.len() == MAX_DICE => {
            std::array::from_fn(|i| coerce_name(&items[i]))
        }
        _ => {
            warn!("invalid dice names in stored settings, using defaults");
            Default::default()
        }
    };

    Settings::new(count, names)
}

/// Read a die count the way a lenient form field would.
///
/// Numbers are truncated toward zero; strings are read by their leading
/// decimal digits. Zero, a missing field, or anything else becomes 1. The
/// result is clamped into `1..=MAX_DICE`.
pub fn parse_die_count(value: Option<&Value>) -> usize {
    let parsed = match value {
        Some(Value::Number(n)) => truncate_number(n),
        Some(Value::String(s)) => parse_leading_int(s),
        _ => None,
    };
    match parsed {
        Some(n) if n != 0 => n.clamp(1, MAX_DICE as i64) as usize,
        _ => 1,
    }
}

fn truncate_number(n: &Number) -> Option<i64> {
    n.as_i64()
        .or_else(|| parse_leading_int(&float_text(n.as_f64()?)))
}

fn parse_leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    Some(sign * magnitude)
}

/// Coerce one stored name entry to text.
///
/// Empty-ish values (`null`, `false`, `0`, `""`) become the empty string,
/// which [`Settings::new`] later replaces with the default name.
pub fn coerce_name(value: &Value) -> String {
    if is_blank(value) {
        String::new()
    } else {
        to_text(value)
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

fn to_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| {
                if item.is_null() {
                    String::new()
                } else {
                    to_text(item)
                }
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn number_text(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else {
        n.as_f64().map(float_text).unwrap_or_default()
    }
}

/// Shortest text for `f`, switching to exponent form below `1e-6` and from
/// `1e21` up (`5e-7`, `1e+21`).
fn float_text(f: f64) -> String {
    if f == 0.0 {
        return "0".to_string();
    }
    let scientific = format!("{f:e}");
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return f.to_string();
    };
    match exponent.parse::<i32>() {
        Ok(exp) if exp >= 21 => format!("{mantissa}e+{exp}"),
        Ok(exp) if exp <= -7 => format!("{mantissa}e{exp}"),
        _ => f.to_string(),
    }
}
