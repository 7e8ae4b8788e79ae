//! Selection module.
//!
//! Favorites and cart for the current session. Nothing here is persisted;
//! the state lives as long as the view that owns it.

mod cart;
mod favorites;

pub use cart::Cart;
pub use favorites::{Favorites, ToggleOutcome};

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};

/// Combined favorites set and cart sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    favorites: Favorites,
    cart: Cart,
}

impl SelectionState {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the product to favorites, or remove it if already there.
    pub fn toggle_favorite(&mut self, id: &ProductId) -> ToggleOutcome {
        self.favorites.toggle(id)
    }

    /// Append a product to the cart unconditionally.
    pub fn add_to_cart(&mut self, product: Product) {
        self.cart.push(product);
    }

    /// Number of cart entries.
    pub fn cart_count(&self) -> usize {
        self.cart.len()
    }

    pub fn is_favorite(&self, id: &ProductId) -> bool {
        self.favorites.contains(id)
    }

    pub fn favorite_count(&self) -> usize {
        self.favorites.len()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    /// Sum of cart prices.
    pub fn cart_subtotal(&self, currency: Currency) -> Result<Money, CommerceError> {
        self.cart.subtotal(currency)
    }
}
