//! Storefront error types.

use fakheem_commerce::ProductId;
use thiserror::Error;

/// Errors from shopper actions on the view.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// The product is not in the loaded catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// The product cannot be added to the cart.
    #[error("Product unavailable: {0}")]
    ProductUnavailable(ProductId),
}
