//! Catalog module.
//!
//! Contains the product record and its category tag.

mod category;
mod product;

pub use category::Category;
pub use product::Product;
