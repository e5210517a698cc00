//! Theme preference: load, toggle, apply, persist.
//!
//! The preference lives in durable storage under a single key as `"dark"`
//! or `"light"`, and on the page as the root element's `data-theme`
//! attribute. Storage problems never block the page: the theme falls back
//! to dark and failed writes are reported to the caller.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::cell::Cell;
use std::fmt;
use std::str::FromStr;

use crate::dom::{Element, Host, KeyValueStore};
use crate::error::UiError;

pub const THEME_ATTR: &str = "data-theme";

/// Display mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Glyph shown on the toggle control while this theme is active.
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Dark => "☀️",
            Self::Light => "🌙",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = UiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(UiError::UnknownTheme(other.to_owned())),
        }
    }
}

/// The user's theme choice plus the storage key it persists under.
///
/// Shared by the theme handlers through an `Rc`; interior mutability keeps
/// toggling possible from `Fn` listeners.
#[derive(Debug)]
pub struct ThemePreference {
    key: String,
    current: Cell<Theme>,
}

impl ThemePreference {
    #[must_use]
    pub fn new(key: &str, theme: Theme) -> Self {
        Self { key: key.to_owned(), current: Cell::new(theme) }
    }

    /// Read the persisted preference. Absent, unreadable or unrecognized
    /// values yield [`Theme::Dark`].
    pub fn load<H: Host>(host: &H, key: &str) -> Self {
        let stored = match host.store().and_then(|store| store.get(key)) {
            Ok(stored) => stored,
            Err(err) => {
                log::warn!("theme preference unreadable, using default: {err}");
                None
            }
        };
        let theme = match stored.as_deref().map(Theme::from_str) {
            Some(Ok(theme)) => theme,
            Some(Err(err)) => {
                log::debug!("{err}, using default");
                Theme::default()
            }
            None => Theme::default(),
        };
        Self::new(key, theme)
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current.get()
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Flip the in-memory preference and return the new theme.
    pub fn toggle(&self) -> Theme {
        let next = self.current().toggled();
        self.current.set(next);
        next
    }

    /// Write the current theme onto `root` as `data-theme`.
    pub fn apply<E: Element>(&self, root: &E) {
        root.set_attribute(THEME_ATTR, self.current().as_str());
    }

    /// Persist the current theme.
    pub fn save<H: Host>(&self, host: &H) -> Result<(), UiError> {
        host.store()?.set(&self.key, self.current().as_str())
    }
}
