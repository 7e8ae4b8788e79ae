//! Search text matching.

use crate::catalog::Product;

/// A lowercased search needle.
///
/// Built once per listing so each product comparison only lowercases the
/// product's own text.
#[derive(Debug, Clone)]
pub struct TextFilter {
    needle: String,
}

impl TextFilter {
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.to_lowercase(),
        }
    }

    /// An empty query matches everything.
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Substring match against name, then description.
    ///
    /// A missing description never matches.
    pub fn matches(&self, product: &Product) -> bool {
        if self.is_empty() {
            return true;
        }
        if product.name.to_lowercase().contains(&self.needle) {
            return true;
        }
        product
            .description
            .as_deref()
            .map(|d| d.to_lowercase().contains(&self.needle))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    fn product(name: &str, description: Option<&str>) -> Product {
        let p = Product::new("p", name, Money::new(100, Currency::SAR), "unisex");
        match description {
            Some(d) => p.with_description(d),
            None => p,
        }
    }

    #[test]
    fn test_empty_query_matches_all() {
        assert!(TextFilter::new("").matches(&product("anything", None)));
    }

    #[test]
    fn test_case_insensitive_name_match() {
        let p = product("Gold Ring", None);
        assert!(TextFilter::new("gold").matches(&p));
        assert!(TextFilter::new("GOLD").matches(&p));
        assert!(TextFilter::new("d r").matches(&p));
    }

    #[test]
    fn test_description_match() {
        let p = product("خاتم", Some("خاتم من الذهب عيار 21"));
        assert!(TextFilter::new("الذهب").matches(&p));
    }

    #[test]
    fn test_missing_description_never_matches() {
        let p = product("خاتم", None);
        assert!(!TextFilter::new("ذهب").matches(&p));
    }

    #[test]
    fn test_query_is_not_trimmed() {
        let p = product("Ring", None);
        assert!(!TextFilter::new(" ring ").matches(&p));
    }
}
