use std::cell::Cell;

use super::*;
use crate::dom::Element;
use crate::dom::memory::{MemoryElement, MemoryHost};
use crate::state::theme::{THEME_ATTR, Theme};

// =============================================================
// attach
// =============================================================

#[test]
fn load_capabilities_run_immediately_per_target() {
    let host = MemoryHost::new();
    host.body().append(&MemoryElement::new("div").with_class("alert"));
    host.body().append(&MemoryElement::new("div").with_class("alert"));

    let seen = Rc::new(Cell::new(0));
    let counter = Rc::clone(&seen);
    let table = vec![Capability::<MemoryHost>::new(
        "count",
        EventKind::Load,
        Scope::All(Selector::class("alert")),
        move |_, _| {
            counter.set(counter.get() + 1);
            Propagation::Continue
        },
    )];

    assert_eq!(attach(&host, &table), 2);
    assert_eq!(seen.get(), 2);
    assert_eq!(host.listener_count(), 0);
}

#[test]
fn event_capabilities_register_listeners() {
    let host = MemoryHost::new();
    host.body().append(&MemoryElement::new("button").with_id("go"));
    let table = vec![
        Capability::<MemoryHost>::new("click", EventKind::Click, Scope::Id("go".to_owned()), |_, _| {
            Propagation::Continue
        }),
        Capability::<MemoryHost>::new("scroll", EventKind::Scroll, Scope::Window, |_, _| Propagation::Continue),
    ];
    assert_eq!(attach(&host, &table), 2);
    assert_eq!(host.listener_count(), 2);
}

#[test]
fn missing_targets_bind_nothing() {
    let host = MemoryHost::new();
    let table = vec![
        Capability::<MemoryHost>::new("id", EventKind::Click, Scope::Id("nope".to_owned()), |_, _| {
            Propagation::Continue
        }),
        Capability::<MemoryHost>::new("all", EventKind::Load, Scope::All(Selector::class("none")), |_, _| {
            Propagation::Continue
        }),
    ];
    assert_eq!(attach(&host, &table), 0);
}

#[test]
fn window_load_receives_root_element() {
    let host = MemoryHost::new();
    let table = vec![Capability::<MemoryHost>::new("mark", EventKind::Load, Scope::Window, |_, el| {
        el.set_attribute("data-seen", "yes");
        Propagation::Continue
    })];
    attach(&host, &table);
    assert_eq!(host.root().attribute("data-seen").as_deref(), Some("yes"));
}

// =============================================================
// capabilities / init
// =============================================================

#[test]
fn table_applies_theme_before_anything_else() {
    let theme = Rc::new(ThemePreference::new("theme", Theme::Dark));
    let table = capabilities::<MemoryHost>(&UiConfig::default(), &theme);
    assert_eq!(table[0].name, "theme.apply");
    assert_eq!(table[0].event, EventKind::Load);
    assert_eq!(table[0].scope, Scope::Document);
}

#[test]
fn table_names_are_unique() {
    let theme = Rc::new(ThemePreference::new("theme", Theme::Dark));
    let table = capabilities::<MemoryHost>(&UiConfig::default(), &theme);
    let mut names: Vec<&str> = table.iter().map(|c| c.name).collect();
    let total = names.len();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), total);
}

#[test]
fn init_on_empty_document_applies_theme_and_keyframes() {
    let host = MemoryHost::new();
    let session = init(&host);
    assert_eq!(session.theme.current(), Theme::Dark);
    assert_eq!(host.root().attribute(THEME_ATTR).as_deref(), Some("dark"));
    assert_eq!(host.head().children().len(), 1);
    // Scroll listener is the only event binding without page content.
    assert_eq!(host.listener_count(), 1);
}

#[test]
fn init_honours_config_override() {
    let host = MemoryHost::new();
    host.root().set_attribute("data-ui-config", r#"{"themeStorageKey": "expense.theme"}"#);
    host.storage().insert("expense.theme", "light");
    let session = init(&host);
    assert_eq!(session.config.theme_storage_key, "expense.theme");
    assert_eq!(session.theme.current(), Theme::Light);
}
