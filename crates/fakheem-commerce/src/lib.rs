//! Catalog types and listing logic for the Fakheem storefront.
//!
//! This crate is pure: no I/O, no async. It provides:
//!
//! - **Catalog**: products, categories, SAR prices
//! - **Search**: the filter/sort engine behind the product grid
//! - **Selection**: favorites set and session cart
//!
//! # Example
//!
//! ```rust,ignore
//! use fakheem_commerce::prelude::*;
//!
//! let engine = FilterSortEngine::new();
//! let params = FilterSortParams::new()
//!     .with_category(CategoryFilter::only("women"))
//!     .with_sort(SortKey::PriceLow);
//!
//! let listing = engine.listing(&catalog, &params);
//! for product in listing.iter() {
//!     println!("{} {}", product.name, product.price);
//! }
//!
//! let mut selection = SelectionState::new();
//! selection.toggle_favorite(&catalog[0].id);
//! selection.add_to_cart(catalog[0].clone());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod collation;
pub mod search;
pub mod selection;

pub use catalog::{Category, Product};
pub use error::CommerceError;
pub use ids::ProductId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Category, Product};

    // Search
    pub use crate::search::{CategoryFilter, FilterSortEngine, FilterSortParams, Listing, SortKey};

    // Selection
    pub use crate::selection::{Cart, Favorites, SelectionState, ToggleOutcome};
}
