//! Locale-aware ordering for product names.
//!
//! Names are compared with the CLDR Arabic collation, so harakat do not
//! decide primary order and Arabic script sorts ahead of Latin.

use std::cmp::Ordering;
use std::fmt;

use icu_collator::{Collator, CollatorOptions, Strength};
use icu_locid::locale;

/// Compares product names using the Arabic collation tables.
pub struct NameCollator {
    collator: Option<Collator>,
}

impl NameCollator {
    /// Build a collator for the `ar` locale.
    ///
    /// If the collation data cannot be loaded, names fall back to code point
    /// order and a warning is logged.
    pub fn arabic() -> Self {
        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Tertiary);

        match Collator::try_new(&locale!("ar").into(), options) {
            Ok(collator) => Self {
                collator: Some(collator),
            },
            Err(e) => {
                tracing::warn!(error = %e, "arabic collation unavailable, using code point order");
                Self { collator: None }
            }
        }
    }

    /// Compare two names.
    pub fn compare(&self, left: &str, right: &str) -> Ordering {
        match &self.collator {
            Some(collator) => collator.compare(left, right),
            None => left.cmp(right),
        }
    }

    /// Whether the locale tables were loaded.
    pub fn is_locale_aware(&self) -> bool {
        self.collator.is_some()
    }
}

impl Default for NameCollator {
    fn default() -> Self {
        Self::arabic()
    }
}

impl fmt::Debug for NameCollator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NameCollator")
            .field("locale_aware", &self.is_locale_aware())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loads_arabic_tables() {
        assert!(NameCollator::arabic().is_locale_aware());
    }

    #[test]
    fn test_harakat_do_not_decide_order() {
        let collator = NameCollator::arabic();
        // Code point order puts U+064A (yeh) before U+064E (fatha).
        assert_eq!("بيت".cmp("بَاب"), Ordering::Less);
        assert_eq!(collator.compare("بَاب", "بيت"), Ordering::Less);
    }

    #[test]
    fn test_arabic_script_before_latin() {
        let collator = NameCollator::arabic();
        assert_eq!(collator.compare("ساعة", "Watch"), Ordering::Less);
    }

    #[test]
    fn test_equal_names() {
        let collator = NameCollator::arabic();
        assert_eq!(collator.compare("خاتم", "خاتم"), Ordering::Equal);
    }
}
