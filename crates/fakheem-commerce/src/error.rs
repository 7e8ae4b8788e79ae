//! Commerce error types.

use thiserror::Error;

use crate::money::Currency;

/// Errors that can occur while building catalog values.
///
/// Filtering, sorting and selection changes are total and never produce
/// these; they come from parsing user input, constructing prices and
/// totalling the cart.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommerceError {
    /// Sort key string not recognized.
    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),

    /// Price is negative or not a finite number.
    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    /// Price has more decimal places than the currency's minor unit.
    #[error("Price {amount} has more than {digits} decimal places")]
    ExcessPrecision { amount: String, digits: u32 },

    /// Amounts in different currencies were combined.
    #[error("Currency mismatch: expected {expected}, found {found}")]
    CurrencyMismatch { expected: Currency, found: Currency },

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,
}
