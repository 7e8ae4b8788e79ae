//! Listing parameters: search text, category and sort key.

use std::fmt;
use std::str::FromStr;

use crate::catalog::Category;
use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// Sort options for the product grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Sort by name using Arabic collation (default).
    #[default]
    Name,
    /// Sort by price, low to high.
    PriceLow,
    /// Sort by price, high to low.
    PriceHigh,
    /// Featured products first, otherwise unchanged.
    Featured,
}

impl SortKey {
    /// All sort keys in dropdown order.
    pub const ALL: [SortKey; 4] = [
        SortKey::Name,
        SortKey::PriceLow,
        SortKey::PriceHigh,
        SortKey::Featured,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::PriceLow => "price-low",
            SortKey::PriceHigh => "price-high",
            SortKey::Featured => "featured",
        }
    }

    /// Arabic label for the sort dropdown.
    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Name => "الاسم",
            SortKey::PriceLow => "السعر: من الأقل للأعلى",
            SortKey::PriceHigh => "السعر: من الأعلى للأقل",
            SortKey::Featured => "المنتجات المميزة",
        }
    }
}

impl FromStr for SortKey {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(SortKey::Name),
            "price-low" => Ok(SortKey::PriceLow),
            "price-high" => Ok(SortKey::PriceHigh),
            "featured" => Ok(SortKey::Featured),
            other => Err(CommerceError::UnknownSortKey(other.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category selection for the grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    /// Show every category.
    #[default]
    All,
    /// Show only products tagged with this category.
    Only(Category),
}

impl CategoryFilter {
    /// The string form that selects every category.
    pub const ALL_VALUE: &'static str = "all";

    /// Filter to a single category tag.
    pub fn only(category: impl Into<Category>) -> Self {
        CategoryFilter::Only(category.into())
    }

    /// Parse the string form used by the category buttons.
    ///
    /// `"all"` selects everything; any other value is taken as a tag verbatim.
    pub fn parse(value: &str) -> Self {
        if value == Self::ALL_VALUE {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(Category::new(value))
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => Self::ALL_VALUE,
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    /// Check whether a product category passes this filter.
    pub fn matches(&self, category: &Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters the grid is currently showing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSortParams {
    /// Free text matched against name and description.
    pub search_query: String,
    /// Category selection.
    pub category: CategoryFilter,
    /// Sort order.
    pub sort_key: SortKey,
}

impl FilterSortParams {
    /// Defaults: empty search, all categories, sort by name.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search text.
    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into();
        self
    }

    /// Set the category filter.
    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    /// Set the sort key.
    pub fn with_sort(mut self, sort_key: SortKey) -> Self {
        self.sort_key = sort_key;
        self
    }

    /// Reset to defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
