//! Product sources.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use fakheem_commerce::{Currency, Product};

use crate::error::FetchError;
use crate::row::ProductRow;

/// Read-only catalog query.
///
/// Implementations return only available products, newest first. There is
/// no pagination and no server-side search or category filtering.
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// List every available product.
    async fn list_available_products(&self) -> Result<Vec<Product>, FetchError>;

    /// Name used in logs.
    fn name(&self) -> &str;
}

/// Apply the store's query semantics to raw rows.
///
/// Drops unavailable rows and orders by `created_at` descending. Rows with
/// equal timestamps keep their input order. Prices are read in `currency`;
/// one bad row fails the whole query.
pub fn query_available(
    rows: Vec<ProductRow>,
    currency: Currency,
) -> Result<Vec<Product>, FetchError> {
    let mut rows: Vec<ProductRow> = rows.into_iter().filter(|r| r.is_available).collect();
    rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    rows.into_iter().map(|row| row.into_product(currency)).collect()
}

/// In-memory source.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    rows: Vec<ProductRow>,
    currency: Currency,
}

impl StaticSource {
    /// Create a source over the given rows, priced in SAR.
    pub fn new(rows: Vec<ProductRow>) -> Self {
        Self {
            rows,
            currency: Currency::default(),
        }
    }

    /// Read prices in `currency`.
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Parse rows from a JSON array.
    pub fn from_json(json: &str) -> Result<Self, FetchError> {
        let rows: Vec<ProductRow> = serde_json::from_str(json)?;
        Ok(Self::new(rows))
    }

    pub fn rows(&self) -> &[ProductRow] {
        &self.rows
    }
}

#[async_trait]
impl ProductSource for StaticSource {
    async fn list_available_products(&self) -> Result<Vec<Product>, FetchError> {
        query_available(self.rows.clone(), self.currency)
    }

    fn name(&self) -> &str {
        "static"
    }
}

/// Source backed by a JSON export of the `products` table.
///
/// The file is read on every call.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
    currency: Currency,
}

impl JsonFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            currency: Currency::default(),
        }
    }

    /// Read prices in `currency`.
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ProductSource for JsonFileSource {
    async fn list_available_products(&self) -> Result<Vec<Product>, FetchError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| FetchError::Io {
                path: self.path.display().to_string(),
                source,
            })?;
        let rows: Vec<ProductRow> = serde_json::from_slice(&bytes)?;
        query_available(rows, self.currency)
    }

    fn name(&self) -> &str {
        "json-file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const ROWS: &str = r#"[
        {"id":"old","name":"سوار","price":300,"category":"women","created_at":"2023-05-01T00:00:00Z"},
        {"id":"hidden","name":"قلادة","price":900,"category":"women","is_available":false,"created_at":"2024-06-01T00:00:00Z"},
        {"id":"new","name":"ساعة","price":50,"category":"men","featured":true,"created_at":"2024-02-01T00:00:00Z"}
    ]"#;

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_static_source_filters_and_orders() {
        let source = StaticSource::from_json(ROWS).unwrap();
        let products = source.list_available_products().await.unwrap();

        assert_eq!(ids(&products), vec!["new", "old"]);
    }

    #[tokio::test]
    async fn test_prices_below_minor_unit_fail_the_fetch() {
        let source = StaticSource::from_json(
            r#"[
                {"id":"hi","name":"أ","price":10.004,"category":"men","created_at":"2024-01-01T00:00:00Z"},
                {"id":"lo","name":"ب","price":10.001,"category":"men","created_at":"2024-01-01T00:00:00Z"}
            ]"#,
        )
        .unwrap();

        let err = source.list_available_products().await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidRecord { ref id, .. } if id == "hi"));
    }

    #[tokio::test]
    async fn test_source_currency() {
        let source = StaticSource::from_json(ROWS).unwrap().with_currency(Currency::USD);
        let products = source.list_available_products().await.unwrap();

        assert!(products.iter().all(|p| p.price.currency == Currency::USD));
        assert_eq!(products[0].price.display(), "$50.00");
    }

    #[tokio::test]
    async fn test_empty_source() {
        let source = StaticSource::default();
        assert!(source.list_available_products().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_json_file_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(ROWS.as_bytes()).unwrap();

        let source = JsonFileSource::new(file.path());
        let products = source.list_available_products().await.unwrap();

        assert_eq!(ids(&products), vec!["new", "old"]);
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonFileSource::new(dir.path().join("missing.json"));

        let err = source.list_available_products().await.unwrap_err();
        assert!(matches!(err, FetchError::Io { .. }));
    }

    #[tokio::test]
    async fn test_malformed_json_is_deserialization_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{not json").unwrap();

        let source = JsonFileSource::new(file.path());
        let err = source.list_available_products().await.unwrap_err();
        assert!(matches!(err, FetchError::Deserialization(_)));
    }
}
