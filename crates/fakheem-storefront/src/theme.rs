//! Light/dark theme preference.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Page color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Interpret a stored preference.
    ///
    /// Only `"dark"` selects the dark theme; any other stored value is light.
    /// `None` means nothing was stored.
    pub fn from_stored(value: Option<&str>) -> Option<Theme> {
        value.map(|v| if v == "dark" { Theme::Dark } else { Theme::Light })
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Storage for the theme preference.
///
/// The view reads it once when created and writes on every toggle.
pub trait ThemeStore: Send {
    fn load(&self) -> Option<String>;
    fn save(&mut self, value: &str);
}

/// Theme storage that lives in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryThemeStore {
    value: Option<String>,
}

impl MemoryThemeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a stored value.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Option<String> {
        self.value.clone()
    }

    fn save(&mut self, value: &str) {
        self.value = Some(value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_stored() {
        assert_eq!(Theme::from_stored(Some("dark")), Some(Theme::Dark));
        assert_eq!(Theme::from_stored(Some("light")), Some(Theme::Light));
        assert_eq!(Theme::from_stored(Some("sepia")), Some(Theme::Light));
        assert_eq!(Theme::from_stored(None), None);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryThemeStore::new();
        assert_eq!(store.load(), None);
        store.save("dark");
        assert_eq!(store.load().as_deref(), Some("dark"));
    }
}
