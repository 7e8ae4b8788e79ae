//! Listing results.

use crate::catalog::Product;
use crate::search::FilterSortParams;

/// The products the grid shows, borrowed from the catalog.
#[derive(Debug, Clone)]
pub struct Listing<'a> {
    items: Vec<&'a Product>,
    catalog_size: usize,
    params: FilterSortParams,
}

impl<'a> Listing<'a> {
    /// Create a listing.
    pub fn new(items: Vec<&'a Product>, catalog_size: usize, params: FilterSortParams) -> Self {
        Self {
            items,
            catalog_size,
            params,
        }
    }

    /// Create an empty listing for the given parameters.
    pub fn empty(params: FilterSortParams) -> Self {
        Self::new(Vec::new(), 0, params)
    }

    /// Products in display order.
    pub fn items(&self) -> &[&'a Product] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Product> + '_ {
        self.items.iter().copied()
    }

    /// Number of products shown.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of products in the catalog before filtering.
    pub fn catalog_size(&self) -> usize {
        self.catalog_size
    }

    /// Parameters that produced this listing.
    pub fn params(&self) -> &FilterSortParams {
        &self.params
    }

    /// Whether filtering hid anything.
    pub fn is_filtered(&self) -> bool {
        self.items.len() < self.catalog_size
    }
}
