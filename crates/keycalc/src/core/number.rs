//! Operand text and canonical number formatting
//!
//! Operands are kept as the raw text the user typed ("3." stays "3.") with
//! a cached parse of it. Parsing accepts the longest leading numeric prefix
//! and formatting produces the shortest round-trip decimal, switching to
//! exponent notation outside `1e-7 <= |x| < 1e21`.

use crate::core::{CalcError, CalcResult};

/// Display text plus the number it parses to
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Operand {
    raw: String,
    value: Option<f64>,
}

impl Operand {
    /// Creates an operand from raw text, parsing it once
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let value = parse_operand(&raw);
        Self { raw, value }
    }

    /// Creates an empty operand
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates an operand from a computed number in canonical form
    #[must_use]
    pub fn from_value(value: f64) -> Self {
        Self {
            raw: format_number(value),
            value: Some(value),
        }
    }

    /// Returns the raw text
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Returns the cached numeric value, if the text has a numeric prefix
    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        self.value
    }

    /// Returns the numeric value or [`CalcError::ParseFailure`]
    pub fn parse(&self) -> CalcResult<f64> {
        self.value.ok_or(CalcError::ParseFailure)
    }

    /// Returns true if the text is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns true if the text already holds a decimal point
    #[must_use]
    pub fn has_decimal_point(&self) -> bool {
        self.raw.contains('.')
    }

    /// Appends a character and refreshes the cached value
    pub fn push(&mut self, ch: char) {
        self.raw.push(ch);
        self.value = parse_operand(&self.raw);
    }

    /// Removes the last character and refreshes the cached value
    pub fn pop(&mut self) -> Option<char> {
        let ch = self.raw.pop();
        self.value = parse_operand(&self.raw);
        ch
    }
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Parses the longest numeric prefix of `text`
///
/// Grammar: optional leading whitespace, optional sign, then `Infinity` or
/// `digits[.digits][(e|E)[sign]digits]` with at least one mantissa digit.
/// Trailing garbage is ignored (`"12abc"` is `12`); no prefix yields `None`.
#[must_use]
pub fn parse_operand(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            end = 1;
            true
        }
        Some(b'+') => {
            end = 1;
            false
        }
        _ => false,
    };

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
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse::<f64>().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Formats a number in canonical decimal form
///
/// Shortest digits that round-trip, plain notation for decimal exponents in
/// `[-7, 21)`, otherwise `d.ddde+N`. Negative zero prints as `"0"`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };

    // `{:e}` yields the shortest round-trip mantissa, e.g. "1.2345e-7"
    let sci = format!("{:e}", value.abs());
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let k = digits.len() as i32;
    let n = exponent + 1;

    let body = if k <= n && n <= 21 {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{int_part}.{frac_part}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat((-n) as usize))
    } else {
        let e = n - 1;
        let e_sign = if e >= 0 { '+' } else { '-' };
        if k == 1 {
            format!("{digits}e{e_sign}{}", e.abs())
        } else {
            let (first, rest) = digits.split_at(1);
            format!("{first}.{rest}e{e_sign}{}", e.abs())
        }
    };

    format!("{sign}{body}")
}
