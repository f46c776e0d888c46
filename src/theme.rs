//! Light/dark theme preference.
//!
//! The theme is plain application state: it is read from local storage once,
//! handed to whatever renders output, and written back when it changes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::storage::LocalStorage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => anyhow::bail!("Unknown theme '{}', expected 'light' or 'dark'", other),
        }
    }
}

/// Theme state bound to the store it persists into.
pub struct ThemeState {
    theme: Theme,
    storage: LocalStorage,
}

impl ThemeState {
    /// Load the stored preference, or `fallback` when none is stored.
    pub fn load(storage: LocalStorage, fallback: Theme) -> Self {
        let theme = storage.load_theme().unwrap_or(fallback);
        Self { theme, storage }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set(&mut self, theme: Theme) {
        self.theme = theme;
        self.storage.store_theme(theme);
    }

    pub fn toggle(&mut self) -> Theme {
        self.set(self.theme.toggled());
        self.theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_parse_and_toggle() {
        assert_eq!("Dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert!("purple".parse::<Theme>().is_err());
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn test_theme_state_persists_toggle() {
        let storage = LocalStorage::in_memory();
        let mut state = ThemeState::load(storage.clone(), Theme::Light);
        assert_eq!(state.theme(), Theme::Light);

        assert_eq!(state.toggle(), Theme::Dark);
        let reloaded = ThemeState::load(storage, Theme::Light);
        assert_eq!(reloaded.theme(), Theme::Dark);
    }
}
