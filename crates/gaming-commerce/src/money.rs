//! Price type for catalog and cart amounts.
//!
//! Amounts are held in cents so that cart totals never accumulate
//! floating-point error. On the wire a price is a plain JSON number in
//! dollars (`499.99`), which keeps stored carts readable.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;

/// Number of minor units per major unit.
const CENTS_PER_UNIT: i64 = 100;

/// A price in US cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Price {
    cents: i64,
}

impl Price {
    /// Zero.
    pub const ZERO: Price = Price { cents: 0 };

    /// Create a price from cents.
    pub const fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Create a price from a decimal dollar amount, rounding to the cent.
    ///
    /// ```
    /// use gaming_commerce::money::Price;
    /// assert_eq!(Price::from_decimal(499.99).cents(), 49999);
    /// ```
    pub fn from_decimal(amount: f64) -> Self {
        Self::from_cents((amount * CENTS_PER_UNIT as f64).round() as i64)
    }

    /// Amount in cents.
    pub const fn cents(&self) -> i64 {
        self.cents
    }

    /// Amount in dollars.
    pub fn to_decimal(&self) -> f64 {
        self.cents as f64 / CENTS_PER_UNIT as f64
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.cents == 0
    }

    /// Multiply by a quantity, saturating at the numeric bounds.
    pub fn saturating_mul(&self, quantity: i64) -> Self {
        Self::from_cents(self.cents.saturating_mul(quantity))
    }

    /// Add another price, saturating at the numeric bounds.
    pub fn saturating_add(&self, other: Price) -> Self {
        Self::from_cents(self.cents.saturating_add(other.cents))
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        let sign = if self.cents < 0 { "-" } else { "" };
        let abs = self.cents.unsigned_abs();
        let unit = CENTS_PER_UNIT as u64;
        format!("{}${}.{:02}", sign, abs / unit, abs % unit)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Self {
        iter.fold(Price::ZERO, |acc, p| acc.saturating_add(p))
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_decimal())
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        if !amount.is_finite() {
            return Err(serde::de::Error::custom("price must be a finite number"));
        }
        Ok(Price::from_decimal(amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_conversion() {
        assert_eq!(Price::from_decimal(69.99).cents(), 6999);
        assert_eq!(Price::from_decimal(10.0).cents(), 1000);
        assert_eq!(Price::from_cents(34999).to_decimal(), 349.99);
    }

    #[test]
    fn test_display() {
        assert_eq!(Price::from_cents(49999).display(), "$499.99");
        assert_eq!(Price::from_cents(5).display(), "$0.05");
        assert_eq!(Price::ZERO.to_string(), "$0.00");
        assert_eq!(Price::from_cents(-150).display(), "-$1.50");
    }

    #[test]
    fn test_arithmetic_saturates() {
        let p = Price::from_cents(i64::MAX / 2 + 1);
        assert_eq!(p.saturating_mul(2).cents(), i64::MAX);
        assert_eq!(p.saturating_add(p).cents(), i64::MAX);
    }

    #[test]
    fn test_sum() {
        let total: Price = [Price::from_cents(100), Price::from_cents(250)]
            .into_iter()
            .sum();
        assert_eq!(total, Price::from_cents(350));
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_string(&Price::from_cents(49999)).unwrap();
        assert_eq!(json, "499.99");

        let parsed: Price = serde_json::from_str("399.99").unwrap();
        assert_eq!(parsed.cents(), 39999);

        let integer: Price = serde_json::from_str("10").unwrap();
        assert_eq!(integer.cents(), 1000);

        assert!(serde_json::from_str::<Price>(r#""10""#).is_err());
    }
}
