//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! In floating point: 0.1 + 0.2 = 0.30000000000000004  -> WRONG
//!
//! OUR SOLUTION: integer rappen (CHF cents)
//!   CHF 2.55 is stored as 255
//!   All arithmetic, comparison and persistence use the integer value.
//!   Only display and the history-file codec render a decimal.
//! ```
//!
//! ## Usage
//! ```rust
//! use brew_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(255); // CHF 2.55
//!
//! let total = price + Money::from_cents(305); // CHF 5.60
//! assert_eq!(total.cents(), 560);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::error::ValidationError;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (rappen for CHF).
///
/// ## Design Decisions
/// - **i64 (signed)**: discounts can be subtracted below zero in intermediate
///   arithmetic; validation rejects negative *inputs*, not negative results
/// - **Single field tuple struct**: zero-cost abstraction over i64
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ```rust
    /// use brew_core::money::Money;
    ///
    /// let price = Money::from_cents(255); // CHF 2.55
    /// assert_eq!(price.cents(), 255);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (francs and rappen).
    ///
    /// For negative amounts only the major unit carries the sign:
    /// `from_major_minor(-5, 50)` is CHF -5.50, not CHF -4.50.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (francs) portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (rappen) portion, always 0-99.
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parses a plain decimal amount such as `"2.55"` or `"4"`.
    ///
    /// This is the format used by the order-history file. At most two
    /// fractional digits are accepted; a missing fraction means whole francs.
    ///
    /// ```rust
    /// use brew_core::money::Money;
    ///
    /// assert_eq!(Money::from_decimal_str("2.55").unwrap().cents(), 255);
    /// assert_eq!(Money::from_decimal_str("4").unwrap().cents(), 400);
    /// assert!(Money::from_decimal_str("2.5.5").is_err());
    /// ```
    pub fn from_decimal_str(s: &str) -> Result<Self, ValidationError> {
        let s = s.trim();
        let invalid = || ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: format!("'{s}' is not a decimal amount"),
        };

        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let (major_str, minor_str) = match digits.split_once('.') {
            Some((m, f)) => (m, f),
            None => (digits, ""),
        };

        if major_str.is_empty() || minor_str.len() > 2 {
            return Err(invalid());
        }

        let major: i64 = major_str.parse().map_err(|_| invalid())?;
        let minor: i64 = if minor_str.is_empty() {
            0
        } else {
            let parsed: i64 = minor_str.parse().map_err(|_| invalid())?;
            // "2.5" means 50 rappen, "2.55" means 55
            if minor_str.len() == 1 {
                parsed * 10
            } else {
                parsed
            }
        };

        // A well-formed amount can still exceed the i64 cent range; treat
        // that as unparseable rather than wrapping.
        let cents = major
            .checked_mul(100)
            .and_then(|c| c.checked_add(minor))
            .ok_or_else(invalid)?;
        let cents = if negative {
            cents.checked_neg().ok_or_else(invalid)?
        } else {
            cents
        };
        Ok(Money(cents))
    }

    /// Renders the amount as a plain decimal string (`"2.55"`, `"-5.50"`).
    ///
    /// Counterpart of [`Money::from_decimal_str`], used by the history codec.
    pub fn to_decimal_string(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.major().abs(), self.minor())
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows money with the currency marker, e.g. `CHF 2.55`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "CHF {}{}.{:02}", sign, self.major().abs(), self.minor())
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(255);
        assert_eq!(money.cents(), 255);
        assert_eq!(money.major(), 2);
        assert_eq!(money.minor(), 55);
    }

    #[test]
    fn test_from_major_minor() {
        assert_eq!(Money::from_major_minor(3, 5).cents(), 305);
        assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(255)), "CHF 2.55");
        assert_eq!(format!("{}", Money::from_cents(500)), "CHF 5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "CHF -5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "CHF 0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);

        let mut acc = Money::zero();
        acc += a;
        acc += b;
        assert_eq!(acc.cents(), 1500);
    }

    #[test]
    fn test_sum() {
        let total: Money = [255, 305, 355]
            .into_iter()
            .map(Money::from_cents)
            .sum();
        assert_eq!(total.cents(), 915);
    }

    #[test]
    fn test_decimal_round_trip() {
        for cents in [0, 32, 255, 453, 10000] {
            let money = Money::from_cents(cents);
            let parsed = Money::from_decimal_str(&money.to_decimal_string()).unwrap();
            assert_eq!(parsed, money);
        }
    }

    #[test]
    fn test_decimal_parse_variants() {
        assert_eq!(Money::from_decimal_str("4").unwrap().cents(), 400);
        assert_eq!(Money::from_decimal_str("2.5").unwrap().cents(), 250);
        assert_eq!(Money::from_decimal_str(" 2.55 ").unwrap().cents(), 255);
        assert_eq!(Money::from_decimal_str("-1.05").unwrap().cents(), -105);
    }

    #[test]
    fn test_decimal_parse_rejects_garbage() {
        assert!(Money::from_decimal_str("").is_err());
        assert!(Money::from_decimal_str("abc").is_err());
        assert!(Money::from_decimal_str("2.555").is_err());
        assert!(Money::from_decimal_str("2.5.5").is_err());
        assert!(Money::from_decimal_str(".55").is_err());
    }

    #[test]
    fn test_decimal_parse_rejects_out_of_range_amounts() {
        // Well-formed digits whose cent value exceeds i64; must be an
        // InvalidFormat error, never an arithmetic wrap.
        assert!(Money::from_decimal_str("92233720368547758.08").is_err());
        assert!(Money::from_decimal_str("-92233720368547758.08").is_err());
        // Largest representable value still parses.
        let max = Money::from_cents(i64::MAX);
        assert_eq!(
            Money::from_decimal_str(&max.to_decimal_string()).unwrap(),
            max
        );
    }
}
