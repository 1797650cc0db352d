//! Light/dark mode preference.
//!
//! The mode is read once at load and written on every toggle under a single
//! storage key. Anything other than `"dark"` in storage means light.

use log::{info, warn};

pub const DEFAULT_THEME_KEY: &str = "theme";
pub const DARK_MODE_CLASS: &str = "dark-mode";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_stored(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn icon(self) -> ThemeIcon {
        match self {
            Self::Light => ThemeIcon::Moon,
            Self::Dark => ThemeIcon::Sun,
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.toggled().as_str();
        format!("Switch to {next} theme")
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// Icon shown on the toggle button. It advertises the mode you would switch to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeIcon {
    Moon,
    Sun,
}

impl ThemeIcon {
    pub fn class(self) -> &'static str {
        match self {
            Self::Moon => "fa-moon",
            Self::Sun => "fa-sun",
        }
    }
}

/// Page-scoped key/value storage holding the persisted mode.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), String>;
}

pub struct ThemePreference<S: PreferenceStore> {
    store: S,
    key: String,
    mode: ThemeMode,
}

impl<S: PreferenceStore> ThemePreference<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            mode: ThemeMode::Light,
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn icon(&self) -> ThemeIcon {
        self.mode.icon()
    }

    /// Applies a stored `"dark"` preference. Storage is only read here.
    pub fn restore(&mut self) -> ThemeMode {
        if self.store.get(&self.key).as_deref().and_then(ThemeMode::from_stored)
            == Some(ThemeMode::Dark)
        {
            self.mode = ThemeMode::Dark;
            info!("theme restored: {}", self.mode.as_str());
        }

        self.mode
    }

    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();

        if let Err(message) = self.store.set(&self.key, self.mode.as_str()) {
            warn!("theme preference not persisted: {message}");
        }

        info!("theme toggled: {}", self.mode.as_str());
        self.mode
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
