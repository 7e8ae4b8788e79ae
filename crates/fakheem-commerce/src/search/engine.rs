//! Filter/sort engine behind the product grid.

use crate::catalog::Product;
use crate::collation::NameCollator;
use crate::search::filter::TextFilter;
use crate::search::{FilterSortParams, Listing, SortKey};

/// Computes the displayed product sequence from a catalog snapshot.
///
/// The engine holds only the name collator; every call is a pure function
/// of its inputs and never mutates the catalog.
#[derive(Debug, Default)]
pub struct FilterSortEngine {
    collator: NameCollator,
}

impl FilterSortEngine {
    /// Create an engine with Arabic name ordering.
    pub fn new() -> Self {
        Self {
            collator: NameCollator::arabic(),
        }
    }

    /// Create an engine with a specific collator.
    pub fn with_collator(collator: NameCollator) -> Self {
        Self { collator }
    }

    /// Filter by search text and category, then order by the sort key.
    pub fn apply<'a>(&self, catalog: &'a [Product], params: &FilterSortParams) -> Vec<&'a Product> {
        let text = TextFilter::new(&params.search_query);

        let mut products: Vec<&'a Product> = catalog
            .iter()
            .filter(|p| text.matches(p))
            .filter(|p| params.category.matches(&p.category))
            .collect();

        match params.sort_key {
            SortKey::Name => {
                products.sort_by(|a, b| self.collator.compare(&a.name, &b.name));
            }
            SortKey::PriceLow => {
                products.sort_by_key(|p| p.price.amount_minor);
            }
            SortKey::PriceHigh => {
                products.sort_by(|a, b| b.price.amount_minor.cmp(&a.price.amount_minor));
            }
            SortKey::Featured => {
                products = featured_first(products);
            }
        }

        tracing::trace!(
            catalog = catalog.len(),
            shown = products.len(),
            sort = params.sort_key.as_str(),
            "listing computed"
        );

        products
    }

    /// Same as [`apply`](Self::apply), wrapped with the context the grid needs.
    pub fn listing<'a>(&self, catalog: &'a [Product], params: &FilterSortParams) -> Listing<'a> {
        Listing::new(self.apply(catalog, params), catalog.len(), params.clone())
    }
}

/// Move featured products to the front in one pass.
///
/// This is a partition, not a multi-key sort: within each group the
/// filtered order is kept as-is.
fn featured_first(products: Vec<&Product>) -> Vec<&Product> {
    let (mut featured, rest): (Vec<&Product>, Vec<&Product>) =
        products.into_iter().partition(|p| p.featured);
    featured.extend(rest);
    featured
}
