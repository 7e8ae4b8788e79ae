//! Prices in integer minor units.
//!
//! The data store sends prices as decimal numbers. They are converted once,
//! on the way in, to the currency's minor unit (halalas for SAR); ordering,
//! summing and formatting all work on the integer.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CommerceError;

const PRECISION_TOLERANCE: f64 = 1e-9;

/// Currencies a store can price in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    SAR,
    AED,
    KWD,
    USD,
}

impl Currency {
    /// ISO 4217 code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::SAR => "SAR",
            Currency::AED => "AED",
            Currency::KWD => "KWD",
            Currency::USD => "USD",
        }
    }

    /// Symbol printed on product cards.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::SAR => "ر.س",
            Currency::AED => "د.إ",
            Currency::KWD => "د.ك",
            Currency::USD => "$",
        }
    }

    /// Digits after the decimal point.
    pub fn minor_digits(&self) -> u32 {
        match self {
            Currency::KWD => 3,
            Currency::SAR | Currency::AED | Currency::USD => 2,
        }
    }

    fn minor_per_major(&self) -> i64 {
        10_i64.pow(self.minor_digits())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// An amount of money in a currency's minor unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    pub amount_minor: i64,
    pub currency: Currency,
}

impl Money {
    pub fn new(amount_minor: i64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Convert a decimal price to minor units.
    ///
    /// Negative and non-finite amounts are rejected, and so are amounts with
    /// more decimal places than the currency has minor digits; two such
    /// prices could otherwise collapse to the same minor amount.
    ///
    /// ```
    /// use fakheem_commerce::money::{Currency, Money};
    /// let price = Money::from_decimal(249.5, Currency::SAR).unwrap();
    /// assert_eq!(price.amount_minor, 24950);
    /// assert!(Money::from_decimal(10.004, Currency::SAR).is_err());
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Result<Self, CommerceError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(CommerceError::InvalidPrice(amount.to_string()));
        }

        let scaled = amount * currency.minor_per_major() as f64;
        let minor = scaled.round();
        // Allow the binary representation error of a decimal like 49.99.
        if (scaled - minor).abs() > PRECISION_TOLERANCE * minor.max(1.0) {
            return Err(CommerceError::ExcessPrecision {
                amount: amount.to_string(),
                digits: currency.minor_digits(),
            });
        }
        if minor >= i64::MAX as f64 {
            return Err(CommerceError::Overflow);
        }
        Ok(Self::new(minor as i64, currency))
    }

    /// Price label, e.g. `"249.50 ر.س"` or `"$49.99"`.
    pub fn display(&self) -> String {
        let per_major = self.currency.minor_per_major();
        let sign = if self.amount_minor < 0 { "-" } else { "" };
        let magnitude = self.amount_minor.unsigned_abs();
        let amount = format!(
            "{}{}.{:0width$}",
            sign,
            magnitude / per_major as u64,
            magnitude % per_major as u64,
            width = self.currency.minor_digits() as usize
        );

        match self.currency {
            Currency::USD => format!("{}{}", self.currency.symbol(), amount),
            _ => format!("{} {}", amount, self.currency.symbol()),
        }
    }

    /// Add two amounts of the same currency.
    pub fn try_add(&self, other: &Money) -> Result<Money, CommerceError> {
        if self.currency != other.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency,
                found: other.currency,
            });
        }
        let sum = self
            .amount_minor
            .checked_add(other.amount_minor)
            .ok_or(CommerceError::Overflow)?;
        Ok(Money::new(sum, self.currency))
    }

    /// Sum amounts, starting from zero in `currency`.
    pub fn try_sum<'a>(
        mut amounts: impl Iterator<Item = &'a Money>,
        currency: Currency,
    ) -> Result<Money, CommerceError> {
        amounts.try_fold(Money::zero(currency), |total, m| total.try_add(m))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}
