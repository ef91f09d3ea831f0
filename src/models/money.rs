//! Money type for representing spend amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues in running totals. Spend amounts are non-negative by construction
//! at the validation boundary; arithmetic here never needs to go below zero.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

/// A monetary amount stored as cents (hundredths of a rand)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use spendwatch::models::Money;
    /// let amount = Money::from_cents(105_000); // R1050.00
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a Money amount from whole rands
    ///
    /// # Panics
    ///
    /// Panics if the amount overflows the cents representation. User input
    /// goes through [`Money::parse`], which reports overflow as an error
    /// instead.
    pub const fn from_rands(rands: i64) -> Self {
        match rands.checked_mul(100) {
            Some(cents) => Self(cents),
            None => panic!("rand amount overflows cents representation"),
        }
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole rands portion
    pub const fn rands(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        self.0 % 100
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "4000", "4000.01", "4000.5", "R4000.01". Negative
    /// amounts are rejected; spend entries only record money going out.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        if s.starts_with('-') {
            return Err(MoneyParseError::Negative(s.to_string()));
        }

        // Remove currency symbol if present
        let s = s.strip_prefix('R').unwrap_or(s).trim_start();

        if s.is_empty() {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let invalid = || MoneyParseError::InvalidFormat(s.to_string());

        let cents = if let Some((whole, frac)) = s.split_once('.') {
            let rands: i64 = whole.parse().map_err(|_| invalid())?;

            // The fraction is at most two cent digits; "5.-5" or "10.999"
            // are malformed, not values to coerce
            if frac.len() > 2 || !frac.chars().all(|c| c.is_ascii_digit()) {
                return Err(invalid());
            }

            let frac_cents: i64 = match frac.len() {
                0 => 0,
                1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
                _ => frac.parse().map_err(|_| invalid())?,
            };

            rands
                .checked_mul(100)
                .and_then(|c| c.checked_add(frac_cents))
                .ok_or_else(invalid)?
        } else {
            // Integer format - whole rands
            s.parse::<i64>()
                .map_err(|_| invalid())?
                .checked_mul(100)
                .ok_or_else(invalid)?
        };

        if cents < 0 {
            return Err(MoneyParseError::Negative(s.to_string()));
        }

        Ok(Self(cents))
    }

    /// Plain decimal rendering without a currency symbol, e.g. "4000.01".
    ///
    /// Used for the CSV wire format, where amounts round-trip through
    /// [`Money::parse`].
    pub fn to_decimal_string(&self) -> String {
        format!("{}.{:02}", self.rands(), self.cents_part())
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        format!("{}{}.{:02}", symbol, self.rands(), self.cents_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}.{:02}", self.rands(), self.cents_part())
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    Negative(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "not a decimal number: '{}'", s),
            MoneyParseError::Negative(s) => write!(f, "amount must not be negative: '{}'", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
