//! Product source abstraction for the Fakheem storefront.
//!
//! This crate provides:
//! - `ProductSource` - the read-only "list available products" query
//! - `ProductRow` - wire record of the `products` table
//! - `StaticSource` / `JsonFileSource` - sources that apply the same
//!   availability filter and newest-first ordering as the remote store
//! - `FetchError` - why a catalog could not be loaded

mod error;
mod row;
mod source;

pub use error::*;
pub use row::*;
pub use source::*;
