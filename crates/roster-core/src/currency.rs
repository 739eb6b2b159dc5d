//! # Currency Module
//!
//! The Rupiah codec: converts between raw integer amounts and the display
//! strings shown in the table and the form.
//!
//! ## Two Shapes, Two Types
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  AT REST (roster)                    WHILE EDITING (form buffer)        │
//! │                                                                         │
//! │  Rupiah(5000000)  ──── encode ────►  DisplayAmount("Rp.5.000.000")      │
//! │                   ◄─── decode ────                                      │
//! │                                                                         │
//! │  Raw integer, smallest unit          Canonically formatted string       │
//! │  Never carries a prefix              Never stored in the roster         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Keeping the two shapes in distinct types means a value cannot be decoded
//! twice or stored formatted by accident.
//!
//! ## Usage
//! ```rust
//! use roster_core::currency::{decode, encode, encode_str};
//!
//! assert_eq!(encode(1_000), "Rp.1.000");
//! assert_eq!(encode(0), "Rp.0");
//! assert_eq!(encode_str(""), "");
//! assert_eq!(decode("Rp.12.345"), 12_345);
//! assert_eq!(decode("abc"), 0);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use ts_rs::TS;

/// Prefix placed before every encoded amount.
pub const CURRENCY_PREFIX: &str = "Rp.";

/// Thousands separator of the Indonesian locale.
pub const GROUP_SEPARATOR: char = '.';

// =============================================================================
// Codec Functions
// =============================================================================

/// Encodes a raw amount as `"Rp."` followed by dot-grouped digits.
///
/// ## Example
/// ```rust
/// use roster_core::currency::encode;
///
/// assert_eq!(encode(5_000_000), "Rp.5.000.000");
/// assert_eq!(encode(999), "Rp.999");
/// ```
pub fn encode(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(CURRENCY_PREFIX.len() + digits.len() + digits.len() / 3);
    out.push_str(CURRENCY_PREFIX);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }

    out
}

/// Encodes a numeric string.
///
/// Fails closed: empty input, anything that is not a non-negative integer,
/// and negative numbers all yield an empty string instead of an error.
/// Whitespace-only input is a blank number and encodes as zero.
///
/// ## Example
/// ```rust
/// use roster_core::currency::encode_str;
///
/// assert_eq!(encode_str("1000"), "Rp.1.000");
/// assert_eq!(encode_str(" 42 "), "Rp.42");
/// assert_eq!(encode_str("  "), "Rp.0");
/// assert_eq!(encode_str("NaN"), "");
/// assert_eq!(encode_str("-5"), "");
/// ```
pub fn encode_str(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        return encode(0);
    }

    match trimmed.parse::<u64>() {
        Ok(amount) => encode(amount),
        Err(_) => String::new(),
    }
}

/// Decodes a display string by keeping only its ASCII digits.
///
/// This is a normalizing decode: prefix and separators are discarded, and
/// input with no digits at all is `0`. A digit run too large for `u64`
/// saturates at `u64::MAX`.
///
/// ## Example
/// ```rust
/// use roster_core::currency::decode;
///
/// assert_eq!(decode("Rp.1.000"), 1_000);
/// assert_eq!(decode("1.2x3"), 123);
/// assert_eq!(decode(""), 0);
/// ```
pub fn decode(display: &str) -> u64 {
    display
        .bytes()
        .filter(u8::is_ascii_digit)
        .fold(0u64, |acc, b| {
            acc.saturating_mul(10).saturating_add(u64::from(b - b'0'))
        })
}

// =============================================================================
// Rupiah (raw amount)
// =============================================================================

/// A raw monetary amount in the smallest Rupiah unit.
///
/// This is the only shape a monetary value has inside the roster.
/// Arithmetic saturates so totals never wrap.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Rupiah(u64);

impl Rupiah {
    /// Wraps a raw amount.
    #[inline]
    pub const fn from_raw(amount: u64) -> Self {
        Rupiah(amount)
    }

    /// Returns the raw amount.
    #[inline]
    pub const fn raw(&self) -> u64 {
        self.0
    }

    /// The zero amount, `Rp.0`.
    #[inline]
    pub const fn zero() -> Self {
        Rupiah(0)
    }

    /// Checks if the amount is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Decodes a display string into a raw amount.
    ///
    /// ## Example
    /// ```rust
    /// use roster_core::currency::Rupiah;
    ///
    /// assert_eq!(Rupiah::decode("Rp.3.500.000").raw(), 3_500_000);
    /// ```
    pub fn decode(display: &str) -> Self {
        Rupiah(decode(display))
    }

    /// Encodes this amount for display.
    pub fn encode(&self) -> String {
        encode(self.0)
    }
}

impl fmt::Display for Rupiah {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl From<u64> for Rupiah {
    fn from(amount: u64) -> Self {
        Rupiah(amount)
    }
}

impl Add for Rupiah {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Rupiah(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Rupiah {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sum for Rupiah {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Rupiah::zero(), Add::add)
    }
}

// =============================================================================
// DisplayAmount (form shape)
// =============================================================================

/// A monetary value as the form control shows it.
///
/// Either empty (new, untouched form) or a canonical encoding produced by
/// [`encode`]. There is no constructor taking an arbitrary string verbatim;
/// user input always goes through [`DisplayAmount::from_input`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DisplayAmount(String);

impl DisplayAmount {
    /// The empty field of a fresh form.
    pub fn empty() -> Self {
        DisplayAmount(String::new())
    }

    /// Formats a stored amount for editing.
    pub fn from_raw(amount: Rupiah) -> Self {
        DisplayAmount(amount.encode())
    }

    /// Canonicalizes whatever the user typed: decode, then re-encode.
    ///
    /// ## Live Formatting
    /// ```text
    /// keystroke   control value      buffer after from_input
    /// ─────────   ─────────────      ───────────────────────
    ///    5        "5"                "Rp.5"
    ///    0        "Rp.50"            "Rp.50"
    ///    0        "Rp.500"           "Rp.500"
    ///    0        "Rp.5000"          "Rp.5.000"
    ///  (clear)    ""                 "Rp.0"
    /// ```
    ///
    /// ## Example
    /// ```rust
    /// use roster_core::currency::DisplayAmount;
    ///
    /// assert_eq!(DisplayAmount::from_input("Rp.5000").as_str(), "Rp.5.000");
    /// assert_eq!(DisplayAmount::from_input("").as_str(), "Rp.0");
    /// ```
    pub fn from_input(raw: &str) -> Self {
        DisplayAmount(encode(decode(raw)))
    }

    /// Decodes back to the stored shape. An empty field is zero.
    pub fn decode(&self) -> Rupiah {
        Rupiah::decode(&self.0)
    }

    /// The text shown in the form control.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True only for the untouched field of a fresh form.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for DisplayAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DisplayAmount {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for n in [0, 1, 999, 1_000, 1_000_000, 123_456_789, u64::MAX] {
            assert_eq!(decode(&encode(n)), n, "round trip failed for {}", n);
        }
    }

    #[test]
    fn test_encode_format() {
        assert_eq!(encode(0), "Rp.0");
        assert_eq!(encode(12), "Rp.12");
        assert_eq!(encode(1_000), "Rp.1.000");
        assert_eq!(encode(10_000), "Rp.10.000");
        assert_eq!(encode(100_000), "Rp.100.000");
        assert_eq!(encode(1_234_567), "Rp.1.234.567");
    }

    #[test]
    fn test_encode_str_fails_closed() {
        assert_eq!(encode_str(""), "");
        assert_eq!(encode_str("   "), "Rp.0");
        assert_eq!(encode_str("\t"), "Rp.0");
        assert_eq!(encode_str("NaN"), "");
        assert_eq!(encode_str("abc"), "");
        assert_eq!(encode_str("-1000"), "");
        assert_eq!(encode_str("0"), "Rp.0");
        assert_eq!(encode_str("2500000"), "Rp.2.500.000");
    }

    #[test]
    fn test_decode_tolerance() {
        assert_eq!(decode("Rp.12.345"), 12_345);
        assert_eq!(decode(""), 0);
        assert_eq!(decode("abc"), 0);
        assert_eq!(decode("Rp."), 0);
        assert_eq!(decode("007"), 7);
        assert_eq!(decode("Rp.1.2.3"), 123);
    }

    #[test]
    fn test_decode_saturates() {
        assert_eq!(decode("99999999999999999999999999"), u64::MAX);
    }

    /// encode(decode(s)) is not the identity, only a normalization.
    #[test]
    fn test_reverse_round_trip_normalizes() {
        let messy = "Rp.12.34.5";
        assert_ne!(encode(decode(messy)), messy);
        assert_eq!(encode(decode(messy)), "Rp.12.345");
    }

    #[test]
    fn test_rupiah_arithmetic() {
        let base = Rupiah::from_raw(3_000_000);
        let allowance = Rupiah::from_raw(500_000);
        assert_eq!((base + allowance).raw(), 3_500_000);

        let total: Rupiah = [base, allowance, Rupiah::zero()].into_iter().sum();
        assert_eq!(total.to_string(), "Rp.3.500.000");

        let mut capped = Rupiah::from_raw(u64::MAX);
        capped += Rupiah::from_raw(1);
        assert_eq!(capped.raw(), u64::MAX);
    }

    #[test]
    fn test_display_amount_live_formatting() {
        let mut field = DisplayAmount::empty();
        let mut seen = Vec::new();
        for key in ['5', '0', '0', '0'] {
            let mut typed = field.as_str().to_string();
            typed.push(key);
            field = DisplayAmount::from_input(&typed);
            seen.push(field.to_string());
        }
        assert_eq!(seen, ["Rp.5", "Rp.50", "Rp.500", "Rp.5.000"]);
        assert_eq!(field.decode().raw(), 5_000);
    }

    #[test]
    fn test_display_amount_empty_decodes_to_zero() {
        let field = DisplayAmount::empty();
        assert!(field.is_empty());
        assert!(field.decode().is_zero());
    }

    #[test]
    fn test_display_amount_from_raw() {
        let field = DisplayAmount::from_raw(Rupiah::from_raw(5_000_000));
        assert_eq!(field.to_string(), "Rp.5.000.000");
        assert_eq!(field.decode(), Rupiah::from_raw(5_000_000));
    }
}
