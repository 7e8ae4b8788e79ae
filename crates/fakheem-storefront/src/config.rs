//! Storefront configuration.

use std::path::Path;

use anyhow::{Context, Result};
use fakheem_commerce::search::{CategoryFilter, SortKey};
use fakheem_commerce::Currency;
use fakheem_observability::{LogFormat, LogLevel};
use serde::{Deserialize, Serialize};

use crate::theme::Theme;

/// Storefront configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StorefrontConfig {
    /// Store branding.
    #[serde(default)]
    pub store: StoreConfig,

    /// Product grid defaults.
    #[serde(default)]
    pub listing: ListingConfig,

    /// Log output.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Theme defaults.
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl StorefrontConfig {
    /// Load config from a file.
    ///
    /// Files ending in `.json` are parsed as JSON, everything else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading storefront config");
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            Self::from_toml_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Parse config from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize to TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Store branding shown in the header and footer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreConfig {
    /// Store name.
    #[serde(default = "default_store_name")]
    pub name: String,

    /// Tagline under the name.
    #[serde(default = "default_tagline")]
    pub tagline: String,

    /// Currency that catalog prices are read in and the cart is totalled in.
    #[serde(default)]
    pub currency: Currency,

    /// Contact details for the footer.
    #[serde(default)]
    pub contact: ContactConfig,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: default_store_name(),
            tagline: default_tagline(),
            currency: Currency::SAR,
            contact: ContactConfig::default(),
        }
    }
}

fn default_store_name() -> String {
    "متجر فخيم".to_string()
}

fn default_tagline() -> String {
    "للمجوهرات والإكسسوارات".to_string()
}

/// Footer contact details.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactConfig {
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            phone: "+966 50 123 4567".to_string(),
            email: "info@fakhimstore.com".to_string(),
            address: "الرياض، المملكة العربية السعودية".to_string(),
        }
    }
}

/// Product grid defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListingConfig {
    /// Sort key the grid starts with and returns to on every mount.
    #[serde(default)]
    pub default_sort: SortKey,

    /// Category buttons in display order.
    #[serde(default = "default_categories")]
    pub categories: Vec<CategoryOption>,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            default_sort: SortKey::Name,
            categories: default_categories(),
        }
    }
}

/// One category button.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryOption {
    /// Filter value: `"all"` or a category tag.
    pub value: String,
    /// Button label.
    pub label: String,
}

impl CategoryOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// The filter this button selects.
    pub fn filter(&self) -> CategoryFilter {
        CategoryFilter::parse(&self.value)
    }
}

fn default_categories() -> Vec<CategoryOption> {
    vec![
        CategoryOption::new("all", "جميع الفئات"),
        CategoryOption::new("men", "رجالي"),
        CategoryOption::new("women", "نسائي"),
        CategoryOption::new("unisex", "للجنسين"),
    ]
}

/// Log output settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,

    /// Lines below this level are dropped.
    #[serde(default)]
    pub min_level: LogLevel,
}

/// Theme settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ThemeConfig {
    /// Theme used when nothing is stored.
    #[serde(default)]
    pub default: Theme,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_match_storefront() {
        let config = StorefrontConfig::default();
        assert_eq!(config.store.name, "متجر فخيم");
        assert_eq!(config.store.currency, Currency::SAR);
        assert_eq!(config.listing.default_sort, SortKey::Name);
        assert_eq!(config.listing.categories.len(), 4);
        assert_eq!(config.listing.categories[0].filter(), CategoryFilter::All);
        assert_eq!(config.theme.default, Theme::Light);
    }

    #[test]
    fn test_partial_toml() {
        let config = StorefrontConfig::from_toml_str(
            r#"
[store]
name = "Fakheem"

[listing]
default_sort = "price-high"

[logging]
format = "human"
min_level = "debug"
"#,
        )
        .unwrap();

        assert_eq!(config.store.name, "Fakheem");
        assert_eq!(config.store.tagline, "للمجوهرات والإكسسوارات");
        assert_eq!(config.listing.default_sort, SortKey::PriceHigh);
        assert_eq!(config.listing.categories.len(), 4);
        assert_eq!(config.logging.format, LogFormat::Human);
        assert_eq!(config.logging.min_level, LogLevel::Debug);
    }

    #[test]
    fn test_custom_categories() {
        let config = StorefrontConfig::from_toml_str(
            r#"
[[listing.categories]]
value = "all"
label = "All"

[[listing.categories]]
value = "kids"
label = "Kids"
"#,
        )
        .unwrap();

        let filters: Vec<CategoryFilter> =
            config.listing.categories.iter().map(|c| c.filter()).collect();
        assert_eq!(filters, vec![CategoryFilter::All, CategoryFilter::only("kids")]);
    }

    #[test]
    fn test_unknown_sort_key_is_rejected() {
        let result = StorefrontConfig::from_toml_str("[listing]\ndefault_sort = \"newest\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_toml_roundtrip_through_file() {
        let config = StorefrontConfig::default();
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(config.to_toml_string().unwrap().as_bytes()).unwrap();

        assert_eq!(StorefrontConfig::load(file.path()).unwrap(), config);
    }

    #[test]
    fn test_load_json() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(br#"{"theme": {"default": "dark"}}"#).unwrap();

        let config = StorefrontConfig::load(file.path()).unwrap();
        assert_eq!(config.theme.default, Theme::Dark);
    }

    #[test]
    fn test_missing_file_has_context() {
        let err = StorefrontConfig::load("/nonexistent/fakheem.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
