//! Lenient numeric parsing for values typed into the entry form.
//!
//! Both parsers read the longest numeric prefix after leading whitespace and
//! ignore whatever follows, so `"60kg"` reads as 60. Text without a numeric
//! prefix yields `None`; callers store that as a not-a-number marker instead
//! of rejecting the input.

use regex::Regex;
use std::num::IntErrorKind;
use std::sync::LazyLock;

static INT_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([+-]?\d+)").expect("valid integer prefix pattern"));

static FLOAT_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([+-]?(?:Infinity|(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?))")
        .expect("valid decimal prefix pattern")
});

/// Parse the leading integer of `raw`. A fractional part is truncated
/// (`"3.7"` reads as 3). Digits beyond the `i64` range saturate.
pub fn parse_int(raw: &str) -> Option<i64> {
    let captures = INT_PREFIX.captures(raw)?;
    match captures[1].parse::<i64>() {
        Ok(value) => Some(value),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

/// Parse the leading decimal number of `raw`, including an exponent.
///
/// Only finite values are returned. `Infinity` or an exponent that overflows
/// (`"1e999"`) gives `None`, since JSON has no way to store them.
pub fn parse_float(raw: &str) -> Option<f64> {
    let captures = FLOAT_PREFIX.captures(raw)?;
    captures[1].parse::<f64>().ok().filter(|value| value.is_finite())
}
