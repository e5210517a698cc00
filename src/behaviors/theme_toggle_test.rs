use super::*;
use crate::behaviors::attach;
use crate::dom::memory::{MemoryElement, MemoryHost};
use crate::state::theme::THEME_ATTR;

fn page_with_toggle() -> (MemoryHost, MemoryElement) {
    let host = MemoryHost::new();
    let toggle = MemoryElement::new("button").with_id("themeToggle");
    host.body().append(&toggle);
    (host, toggle)
}

fn wire(host: &MemoryHost) -> Rc<ThemePreference> {
    let config = UiConfig::default();
    let theme = Rc::new(ThemePreference::load(host, &config.theme_storage_key));
    attach(host, &capabilities::<MemoryHost>(&config, &theme));
    theme
}

#[test]
fn no_stored_value_applies_dark_with_sun_icon() {
    let (host, toggle) = page_with_toggle();
    wire(&host);
    assert_eq!(host.root().attribute(THEME_ATTR).as_deref(), Some("dark"));
    assert_eq!(toggle.text(), "☀️");
}

#[test]
fn stored_light_applies_light_with_moon_icon() {
    let (host, toggle) = page_with_toggle();
    host.storage().insert("theme", "light");
    wire(&host);
    assert_eq!(host.root().attribute(THEME_ATTR).as_deref(), Some("light"));
    assert_eq!(toggle.text(), "🌙");
}

#[test]
fn click_flips_applies_persists_and_updates_icon() {
    let (host, toggle) = page_with_toggle();
    let theme = wire(&host);

    host.click(&toggle);
    assert_eq!(theme.current(), Theme::Light);
    assert_eq!(host.root().attribute(THEME_ATTR).as_deref(), Some("light"));
    assert_eq!(host.storage().entry("theme").as_deref(), Some("light"));
    assert_eq!(toggle.text(), "🌙");
}

#[test]
fn two_clicks_restore_original_state() {
    let (host, toggle) = page_with_toggle();
    host.storage().insert("theme", "light");
    wire(&host);

    host.click(&toggle);
    host.click(&toggle);
    assert_eq!(host.root().attribute(THEME_ATTR).as_deref(), Some("light"));
    assert_eq!(host.storage().entry("theme").as_deref(), Some("light"));
    assert_eq!(toggle.text(), "🌙");
}

#[test]
fn pulse_is_cleared_after_300ms() {
    let (host, toggle) = page_with_toggle();
    wire(&host);

    host.click(&toggle);
    assert_eq!(toggle.style("animation"), "pulse 0.3s ease");
    host.advance(Duration::from_millis(299));
    assert_eq!(toggle.style("animation"), "pulse 0.3s ease");
    host.advance(Duration::from_millis(1));
    assert_eq!(toggle.style("animation"), "");
}

#[test]
fn failed_write_still_switches_theme() {
    let (host, toggle) = page_with_toggle();
    wire(&host);
    host.storage().reject_writes(true);

    host.click(&toggle);
    assert_eq!(host.root().attribute(THEME_ATTR).as_deref(), Some("light"));
    assert!(host.storage().entry("theme").is_none());
}

#[test]
fn missing_toggle_still_applies_theme() {
    let host = MemoryHost::new();
    wire(&host);
    assert_eq!(host.root().attribute(THEME_ATTR).as_deref(), Some("dark"));
    assert_eq!(host.listener_count(), 0);
}
