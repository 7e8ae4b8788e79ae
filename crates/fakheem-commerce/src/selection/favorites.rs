//! Favorited products.

use std::collections::HashSet;

use crate::ids::ProductId;

/// Result of toggling a favorite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleOutcome {
    /// True if the product was added, false if it was removed.
    pub added: bool,
}

/// Set of favorited product IDs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Favorites {
    ids: HashSet<ProductId>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove the ID if present, otherwise insert it.
    ///
    /// Unknown IDs are simply treated as not yet favorited.
    pub fn toggle(&mut self, id: &ProductId) -> ToggleOutcome {
        if self.ids.remove(id) {
            ToggleOutcome { added: false }
        } else {
            self.ids.insert(id.clone());
            ToggleOutcome { added: true }
        }
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut favorites = Favorites::new();
        let id = ProductId::new("1");

        assert_eq!(favorites.toggle(&id), ToggleOutcome { added: true });
        assert!(favorites.contains(&id));

        assert_eq!(favorites.toggle(&id), ToggleOutcome { added: false });
        assert!(!favorites.contains(&id));
    }

    #[test]
    fn test_paired_toggles_restore_state() {
        let mut favorites = Favorites::new();
        favorites.toggle(&ProductId::new("keep"));
        let before = favorites.clone();

        let id = ProductId::new("x");
        favorites.toggle(&id);
        favorites.toggle(&id);

        assert_eq!(favorites, before);
    }
}
