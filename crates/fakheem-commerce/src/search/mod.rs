//! Search module.
//!
//! Text search, category filter and sort over an in-memory catalog.

mod engine;
mod filter;
mod query;
mod results;

pub use engine::FilterSortEngine;
pub use filter::TextFilter;
pub use query::{CategoryFilter, FilterSortParams, SortKey};
pub use results::Listing;
