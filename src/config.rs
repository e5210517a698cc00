//! Behavior configuration.
//!
//! Every constant the behaviors use has a default here. A page may override
//! any subset by putting JSON on the root element:
//!
//! ```html
//! <html data-ui-config='{"flashDismissDelayMs": 8000}'>
//! ```
//!
//! Unknown keys are ignored; a malformed override is logged and the defaults
//! are used.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use serde::Deserialize;

use crate::dom::{Element, Host};
use crate::error::UiError;
use crate::util::loading::DEFAULT_LOADING_TEXT;

pub const CONFIG_ATTR: &str = "data-ui-config";

pub const DEFAULT_THEME_STORAGE_KEY: &str = "theme";
pub const DEFAULT_THEME_TOGGLE_ID: &str = "themeToggle";
pub const DEFAULT_FLASH_DISMISS_DELAY_MS: u64 = 5000;
pub const DEFAULT_FLASH_FADE_MS: u64 = 500;
pub const DEFAULT_THEME_PULSE_MS: u64 = 300;
pub const DEFAULT_REVEAL_DURATION_MS: u64 = 600;
pub const DEFAULT_REVEAL_STAGGER_MS: u64 = 100;
pub const DEFAULT_DELETE_PROMPT: &str = "Are you sure you want to delete this expense?";
pub const DEFAULT_SETTLE_PROMPT: &str = "Mark this lent amount as settled?";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UiConfig {
    pub theme_storage_key: String,
    pub theme_toggle_id: String,
    pub flash_dismiss_delay_ms: u64,
    pub flash_fade_ms: u64,
    pub theme_pulse_ms: u64,
    pub reveal_duration_ms: u64,
    pub reveal_stagger_ms: u64,
    pub delete_prompt: String,
    pub settle_prompt: String,
    pub loading_text: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.to_owned(),
            theme_toggle_id: DEFAULT_THEME_TOGGLE_ID.to_owned(),
            flash_dismiss_delay_ms: DEFAULT_FLASH_DISMISS_DELAY_MS,
            flash_fade_ms: DEFAULT_FLASH_FADE_MS,
            theme_pulse_ms: DEFAULT_THEME_PULSE_MS,
            reveal_duration_ms: DEFAULT_REVEAL_DURATION_MS,
            reveal_stagger_ms: DEFAULT_REVEAL_STAGGER_MS,
            delete_prompt: DEFAULT_DELETE_PROMPT.to_owned(),
            settle_prompt: DEFAULT_SETTLE_PROMPT.to_owned(),
            loading_text: DEFAULT_LOADING_TEXT.to_owned(),
        }
    }
}

impl UiConfig {
    /// Parse a JSON override; missing keys keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, UiError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Read the override from the root element's `data-ui-config`.
    pub fn from_host<H: Host>(host: &H) -> Self {
        let Some(raw) = host.root().attribute(CONFIG_ATTR) else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("ignoring {CONFIG_ATTR}: {err}");
                Self::default()
            }
        }
    }

    #[must_use]
    pub fn flash_dismiss_delay(&self) -> Duration {
        Duration::from_millis(self.flash_dismiss_delay_ms)
    }

    #[must_use]
    pub fn flash_fade(&self) -> Duration {
        Duration::from_millis(self.flash_fade_ms)
    }

    #[must_use]
    pub fn theme_pulse(&self) -> Duration {
        Duration::from_millis(self.theme_pulse_ms)
    }

    #[must_use]
    pub fn reveal_duration(&self) -> Duration {
        Duration::from_millis(self.reveal_duration_ms)
    }

    #[must_use]
    pub fn reveal_stagger(&self) -> Duration {
        Duration::from_millis(self.reveal_stagger_ms)
    }
}
