//! Session cart.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::money::{Currency, Money};

/// Ordered cart entries for the current session.
///
/// Adding the same product twice yields two entries; there is no quantity
/// merging and no availability check at this level.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    entries: Vec<Product>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a product to the end of the cart.
    pub fn push(&mut self, product: Product) {
        self.entries.push(product);
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[Product] {
        &self.entries
    }

    /// Sum of entry prices.
    ///
    /// An empty cart totals zero in `currency`. Returns an error on mixed
    /// currencies or overflow.
    pub fn subtotal(&self, currency: Currency) -> Result<Money, CommerceError> {
        Money::try_sum(self.entries.iter().map(|p| &p.price), currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring() -> Product {
        Product::new("1", "خاتم", Money::new(10000, Currency::SAR), "women")
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(Currency::SAR).unwrap(), Money::zero(Currency::SAR));
    }

    #[test]
    fn test_duplicates_are_separate_entries() {
        let mut cart = Cart::new();
        cart.push(ring());
        cart.push(ring());

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.subtotal(Currency::SAR).unwrap().amount_minor, 20000);
    }

    #[test]
    fn test_subtotal_overflow() {
        let mut cart = Cart::new();
        cart.push(Product::new("a", "a", Money::new(i64::MAX, Currency::SAR), "men"));
        cart.push(Product::new("b", "b", Money::new(1, Currency::SAR), "men"));

        assert_eq!(cart.subtotal(Currency::SAR), Err(CommerceError::Overflow));
    }

    #[test]
    fn test_subtotal_in_other_currency_is_mismatch() {
        let mut cart = Cart::new();
        cart.push(ring());

        assert_eq!(
            cart.subtotal(Currency::USD),
            Err(CommerceError::CurrencyMismatch {
                expected: Currency::USD,
                found: Currency::SAR
            })
        );
    }
}
