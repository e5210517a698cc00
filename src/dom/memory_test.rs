use super::*;

fn noop_listener() -> Listener<MemoryHost> {
    Rc::new(|_: &MemoryHost, _: &MemoryElement| Propagation::Continue)
}

// =============================================================
// Tree
// =============================================================

#[test]
fn new_host_has_head_and_body_under_root() {
    let host = MemoryHost::new();
    let children = host.root().children();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0].tag(), "head");
    assert_eq!(children[1].tag(), "body");
}

#[test]
fn select_all_returns_document_order() {
    let host = MemoryHost::new();
    let first = MemoryElement::new("div").with_class("alert").with_text("first");
    let nested = MemoryElement::new("div").with_class("alert").with_text("nested");
    let wrapper = MemoryElement::new("section").with_child(first).with_child(
        MemoryElement::new("div").with_child(nested),
    );
    host.body().append(&wrapper);
    host.body().append(&MemoryElement::new("div").with_class("alert").with_text("last"));

    let texts: Vec<String> = host.select_all(&Selector::class("alert")).iter().map(Element::text).collect();
    assert_eq!(texts, vec!["first", "nested", "last"]);
}

#[test]
fn remove_detaches_from_parent() {
    let host = MemoryHost::new();
    let alert = MemoryElement::new("div").with_class("alert");
    host.body().append(&alert);
    alert.remove();
    assert!(alert.parent().is_none());
    assert!(host.select_all(&Selector::class("alert")).is_empty());
}

#[test]
fn append_moves_element_between_parents() {
    let a = MemoryElement::new("div");
    let b = MemoryElement::new("div");
    let child = MemoryElement::new("span");
    a.append(&child);
    b.append(&child);
    assert!(a.children().is_empty());
    assert_eq!(b.children().len(), 1);
    assert!(child.parent().is_some_and(|p| p.same(&b)));
}

#[test]
fn with_class_keeps_existing_tokens() {
    let el = MemoryElement::new("div").with_class("card").with_class("expense-card");
    assert_eq!(el.attribute("class").as_deref(), Some("card expense-card"));
}

#[test]
fn empty_style_value_clears_property() {
    let el = MemoryElement::new("div");
    el.set_style("animation", "pulse 0.3s ease");
    assert_eq!(el.style("animation"), "pulse 0.3s ease");
    el.set_style("animation", "");
    assert_eq!(el.style("animation"), "");
}

#[test]
fn by_id_and_find_search_descendants() {
    let host = MemoryHost::new();
    let button = MemoryElement::new("button").with_attribute("type", "submit");
    let form = MemoryElement::new("form").with_id("add").with_child(button.clone());
    host.body().append(&form);

    let found = host.by_id("add").expect("form by id");
    assert!(found.same(&form));
    assert!(form.find(&Selector::SubmitButton).is_some_and(|b| b.same(&button)));
    assert!(host.by_id("missing").is_none());
}

// =============================================================
// Storage
// =============================================================

#[test]
fn store_round_trips_and_can_reject_writes() {
    let host = MemoryHost::new();
    let store = host.store().expect("storage available");
    store.set("theme", "light").expect("write");
    assert_eq!(store.get("theme").expect("read").as_deref(), Some("light"));

    host.storage().reject_writes(true);
    assert!(matches!(store.set("theme", "dark"), Err(UiError::StorageWrite { .. })));
    assert_eq!(host.storage().entry("theme").as_deref(), Some("light"));
}

#[test]
fn unavailable_storage_is_an_error() {
    let host = MemoryHost::new();
    host.set_storage_available(false);
    assert!(matches!(host.store(), Err(UiError::StorageUnavailable(_))));
}

// =============================================================
// Timers
// =============================================================

#[test]
fn timers_fire_in_deadline_order_when_clock_advances() {
    let host = MemoryHost::new();
    let log = Rc::new(RefCell::new(Vec::new()));
    for (label, ms) in [("late", 300), ("early", 100), ("tie", 100)] {
        let log = Rc::clone(&log);
        host.set_timeout(Duration::from_millis(ms), Box::new(move || log.borrow_mut().push(label)));
    }

    host.advance(Duration::from_millis(99));
    assert!(log.borrow().is_empty());
    host.advance(Duration::from_millis(1));
    assert_eq!(*log.borrow(), vec!["early", "tie"]);
    host.advance(Duration::from_secs(1));
    assert_eq!(*log.borrow(), vec!["early", "tie", "late"]);
    assert_eq!(host.now(), Duration::from_millis(1100));
    assert_eq!(host.pending_timers(), 0);
}

#[test]
fn timer_scheduled_by_timer_fires_within_same_advance() {
    let host = MemoryHost::new();
    let fired = Rc::new(Cell::new(false));
    let inner_host = host.clone();
    let flag = Rc::clone(&fired);
    host.set_timeout(
        Duration::from_millis(10),
        Box::new(move || {
            inner_host.set_timeout(Duration::from_millis(10), Box::new(move || flag.set(true)));
        }),
    );
    host.advance(Duration::from_millis(20));
    assert!(fired.get());
}

// =============================================================
// Events
// =============================================================

#[test]
fn submit_records_action_unless_cancelled() {
    let host = MemoryHost::new();
    let form = MemoryElement::new("form").with_attribute("action", "/delete/1");
    host.body().append(&form);
    host.listen(
        Target::Element(form.clone()),
        EventKind::Submit,
        Rc::new(|_: &MemoryHost, _: &MemoryElement| Propagation::Cancel),
    );
    host.listen(Target::Element(form.clone()), EventKind::Submit, noop_listener());

    assert!(!host.submit(&form));
    assert!(host.submissions().is_empty());
}

#[test]
fn scroll_only_reaches_window_listeners() {
    let host = MemoryHost::new();
    let hits = Rc::new(Cell::new(0));
    let counter = Rc::clone(&hits);
    host.listen(
        Target::Window,
        EventKind::Scroll,
        Rc::new(move |_: &MemoryHost, _: &MemoryElement| {
            counter.set(counter.get() + 1);
            Propagation::Continue
        }),
    );
    host.listen(Target::Element(host.body()), EventKind::Scroll, noop_listener());

    host.scroll();
    host.scroll();
    assert_eq!(hits.get(), 2);
    assert_eq!(host.listener_count(), 2);
}

#[test]
fn confirm_records_prompt_and_returns_scripted_answer() {
    let host = MemoryHost::new();
    assert!(host.confirm("first?"));
    host.answer_confirm(false);
    assert!(!host.confirm("second?"));
    assert_eq!(host.prompts(), vec!["first?", "second?"]);
}

#[test]
fn append_style_adds_style_element_to_head() {
    let host = MemoryHost::new();
    host.append_style("@keyframes x {}");
    let styles = host.head().children();
    assert_eq!(styles.len(), 1);
    assert_eq!(styles[0].tag(), "style");
    assert_eq!(styles[0].text(), "@keyframes x {}");
}
