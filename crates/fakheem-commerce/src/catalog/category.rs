//! Category tags for product organization.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A product category tag.
///
/// The set is open-ended: `men`, `women` and `unisex` are the tags the
/// storefront knows labels for, any other value is carried through as-is.
/// Equality is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub const MEN: &'static str = "men";
    pub const WOMEN: &'static str = "women";
    pub const UNISEX: &'static str = "unisex";

    /// Create a category from its raw tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    pub fn men() -> Self {
        Self::new(Self::MEN)
    }

    pub fn women() -> Self {
        Self::new(Self::WOMEN)
    }

    pub fn unisex() -> Self {
        Self::new(Self::UNISEX)
    }

    /// Get the raw tag.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Arabic label shown on product cards.
    ///
    /// Unknown tags are shown verbatim.
    pub fn label(&self) -> &str {
        match self.0.as_str() {
            Self::MEN => "رجالي",
            Self::WOMEN => "نسائي",
            Self::UNISEX => "للجنسين",
            other => other,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        Self(s)
    }
}
