//! Wire record of the `products` table.

use chrono::{DateTime, Utc};
use fakheem_commerce::{Currency, Money, Product, ProductId};
use fakheem_commerce::catalog::Category;
use serde::{Deserialize, Serialize};

use crate::error::FetchError;

/// A row as returned by the data store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductRow {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Decimal price in the store's currency.
    pub price: f64,
    pub category: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default = "default_true")]
    pub is_available: bool,
    #[serde(default)]
    pub featured: bool,
    pub created_at: DateTime<Utc>,
}

fn default_true() -> bool {
    true
}

impl ProductRow {
    /// Convert to a catalog product priced in `currency`.
    ///
    /// Rejects negative or non-finite prices and prices with more decimal
    /// places than `currency` has minor digits.
    pub fn into_product(self, currency: Currency) -> Result<Product, FetchError> {
        let price = Money::from_decimal(self.price, currency).map_err(|e| {
            FetchError::InvalidRecord {
                id: self.id.clone(),
                reason: e.to_string(),
            }
        })?;

        Ok(Product {
            id: ProductId::new(self.id),
            name: self.name,
            description: self.description,
            price,
            category: Category::new(self.category),
            image_url: self.image_url,
            is_available: self.is_available,
            featured: self.featured,
            created_at: self.created_at.timestamp(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_from_json() {
        let json = r#"{
            "id": "9b1c",
            "name": "خاتم ألماس",
            "description": null,
            "price": 1499.5,
            "category": "women",
            "image_url": "https://cdn.example/ring.jpg",
            "is_available": true,
            "featured": true,
            "created_at": "2024-03-01T10:00:00Z"
        }"#;
        let row: ProductRow = serde_json::from_str(json).unwrap();
        let product = row.into_product(Currency::SAR).unwrap();

        assert_eq!(product.id.as_str(), "9b1c");
        assert_eq!(product.price.amount_minor, 149950);
        assert_eq!(product.category.as_str(), "women");
        assert!(product.description.is_none());
        assert!(product.featured);
        assert_eq!(product.created_at, 1709287200);
    }

    #[test]
    fn test_optional_columns_default() {
        let json = r#"{"id":"1","name":"n","price":1,"category":"men","created_at":"2024-01-01T00:00:00Z"}"#;
        let row: ProductRow = serde_json::from_str(json).unwrap();

        assert!(row.is_available);
        assert!(!row.featured);
        assert_eq!(row.image_url, "");
    }

    #[test]
    fn test_negative_price_rejected() {
        let json = r#"{"id":"bad","name":"n","price":-5,"category":"men","created_at":"2024-01-01T00:00:00Z"}"#;
        let row: ProductRow = serde_json::from_str(json).unwrap();

        match row.into_product(Currency::SAR) {
            Err(FetchError::InvalidRecord { id, .. }) => assert_eq!(id, "bad"),
            other => panic!("expected invalid record, got {:?}", other),
        }
    }

    #[test]
    fn test_sub_halala_price_rejected() {
        let json = r#"{"id":"odd","name":"n","price":10.004,"category":"men","created_at":"2024-01-01T00:00:00Z"}"#;
        let row: ProductRow = serde_json::from_str(json).unwrap();

        match row.clone().into_product(Currency::SAR) {
            Err(FetchError::InvalidRecord { id, reason }) => {
                assert_eq!(id, "odd");
                assert!(reason.contains("decimal places"));
            }
            other => panic!("expected invalid record, got {:?}", other),
        }
        assert_eq!(row.into_product(Currency::KWD).unwrap().price.amount_minor, 10004);
    }

    #[test]
    fn test_price_uses_given_currency() {
        let json = r#"{"id":"w","name":"ساعة","price":49.99,"category":"men","created_at":"2024-01-01T00:00:00Z"}"#;
        let row: ProductRow = serde_json::from_str(json).unwrap();
        let product = row.into_product(Currency::USD).unwrap();

        assert_eq!(product.price, Money::new(4999, Currency::USD));
        assert_eq!(product.price.display(), "$49.99");
    }
}
