//! Product identifiers.
//!
//! Identifiers are opaque strings assigned by the data store; the storefront
//! never generates them, and compares them byte for byte.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a catalog product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        ProductId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        ProductId(id)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        ProductId(id.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_as_plain_string() {
        let id = ProductId::new("7f3c");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"7f3c\"");

        let back: ProductId = serde_json::from_str("\"7f3c\"").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_comparison_is_exact() {
        assert_eq!(ProductId::from("a1"), ProductId::new(String::from("a1")));
        assert_ne!(ProductId::from("a1"), ProductId::from("A1"));
        assert_eq!(ProductId::from("42").to_string(), "42");
    }
}
