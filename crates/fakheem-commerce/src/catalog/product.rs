//! Product type.

use crate::catalog::Category;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Products are read-only once loaded; the listing engine only reorders
/// references to them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Optional description shown under the name.
    pub description: Option<String>,
    /// Unit price.
    pub price: Money,
    /// Category tag.
    pub category: Category,
    /// Product image URL.
    pub image_url: String,
    /// Whether the product can be added to the cart.
    pub is_available: bool,
    /// Whether the product carries the featured badge.
    pub featured: bool,
    /// Unix timestamp of creation.
    pub created_at: i64,
}

impl Product {
    /// Create an available, non-featured product.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        category: impl Into<Category>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            price,
            category: category.into(),
            image_url: String::new(),
            is_available: true,
            featured: false,
            created_at: 0,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the image URL.
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image_url = url.into();
        self
    }

    /// Mark as featured or not.
    pub fn with_featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    /// Mark as available or not.
    pub fn with_available(mut self, available: bool) -> Self {
        self.is_available = available;
        self
    }

    /// Set the creation timestamp.
    pub fn with_created_at(mut self, created_at: i64) -> Self {
        self.created_at = created_at;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_product_creation() {
        let product = Product::new("1", "خاتم", Money::new(10000, Currency::SAR), "women");
        assert_eq!(product.id.as_str(), "1");
        assert_eq!(product.name, "خاتم");
        assert!(product.is_available);
        assert!(!product.featured);
        assert!(product.description.is_none());
    }

    #[test]
    fn test_product_builders() {
        let product = Product::new("2", "ساعة", Money::new(5000, Currency::SAR), "men")
            .with_description("ساعة ذهبية")
            .with_image("/img/watch.jpg")
            .with_featured(true)
            .with_available(false);

        assert_eq!(product.description.as_deref(), Some("ساعة ذهبية"));
        assert_eq!(product.image_url, "/img/watch.jpg");
        assert!(product.featured);
        assert!(!product.is_available);
    }
}
