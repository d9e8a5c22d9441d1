use std::sync::OnceLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;
use url::Url;

/// ISO forms without seconds but with `Z` or a numeric offset.
const ZONED_MINUTE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M%#z", "%Y-%m-%dT%H:%M%:z"];

const DATETIME_LOCAL_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
];

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"))
}

/// Loose shape check: something, an `@`, something, a dot, something.
pub(crate) fn is_plausible_email(raw: &str) -> bool {
    email_pattern().is_match(raw)
}

/// Parse free text the way a browser number coercion would.
///
/// Surrounding whitespace is ignored, an empty string is not a number, and
/// `0x`/`0o`/`0b` integer literals and `Infinity` are accepted. Rust-only
/// spellings such as `inf` or `NaN` are rejected.
pub(crate) fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = trimmed.strip_prefix(prefix) {
            return parse_radix_literal(digits, radix);
        }
    }

    let unsigned = trimmed
        .strip_prefix('+')
        .or_else(|| trimmed.strip_prefix('-'))
        .unwrap_or(trimmed);
    if unsigned == "Infinity" {
        return Some(if trimmed.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }
    if !unsigned
        .chars()
        .all(|ch| ch.is_ascii_digit() || matches!(ch, '.' | 'e' | 'E' | '+' | '-'))
    {
        return None;
    }

    trimmed.parse::<f64>().ok().filter(|value| !value.is_nan())
}

/// Integer literal digits accumulated as a float, so values past `u64::MAX`
/// still parse (with float precision).
fn parse_radix_literal(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0_f64, |acc, ch| {
        ch.to_digit(radix)
            .map(|digit| acc * f64::from(radix) + f64::from(digit))
    })
}

/// Absolute URL with a scheme; relative references are rejected.
pub(crate) fn is_absolute_url(raw: &str) -> bool {
    Url::parse(raw.trim()).is_ok()
}

/// Parse the interview slot into a local calendar date-time.
pub(crate) fn parse_date_time(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.naive_local());
    }
    if let Ok(parsed) = DateTime::parse_from_rfc2822(trimmed) {
        return Some(parsed.naive_local());
    }
    for format in ZONED_MINUTE_FORMATS {
        if let Ok(parsed) = DateTime::parse_from_str(trimmed, format) {
            return Some(parsed.naive_local());
        }
    }
    for format in DATETIME_LOCAL_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(parsed);
        }
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}
