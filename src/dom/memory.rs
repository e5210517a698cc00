//! In-memory host: a small element tree, key-value storage, a virtual clock
//! and scripted confirmation answers.
//!
//! DESIGN
//! ======
//! Mirrors the browser's observable behavior closely enough to drive every
//! behavior end to end without a browser. Events are dispatched explicitly
//! (`click`, `submit`, `scroll`, ...) and timers only fire when the clock is
//! advanced, so timing assertions are deterministic.

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Duration;

use chrono::NaiveDate;

use super::{Bounds, Element, EventKind, Host, KeyValueStore, Listener, Propagation, Selector, Target};
use crate::error::UiError;

const DEFAULT_VIEWPORT_HEIGHT: f64 = 800.0;

// =============================================================
// Elements
// =============================================================

struct Node {
    tag: String,
    attributes: BTreeMap<String, String>,
    style: BTreeMap<String, String>,
    text: String,
    value: String,
    disabled: bool,
    bounds: Bounds,
    parent: Weak<RefCell<Node>>,
    children: Vec<MemoryElement>,
}

/// Shared handle to a node in the in-memory tree.
#[derive(Clone)]
pub struct MemoryElement(Rc<RefCell<Node>>);

impl fmt::Debug for MemoryElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.0.borrow();
        f.debug_struct("MemoryElement")
            .field("tag", &node.tag)
            .field("attributes", &node.attributes)
            .field("style", &node.style)
            .finish_non_exhaustive()
    }
}

impl MemoryElement {
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self(Rc::new(RefCell::new(Node {
            tag: tag.to_ascii_lowercase(),
            attributes: BTreeMap::new(),
            style: BTreeMap::new(),
            text: String::new(),
            value: String::new(),
            disabled: false,
            bounds: Bounds::default(),
            parent: Weak::new(),
            children: Vec::new(),
        })))
    }

    #[must_use]
    pub fn with_attribute(self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    #[must_use]
    pub fn with_id(self, id: &str) -> Self {
        self.with_attribute("id", id)
    }

    /// Add a class token, keeping existing ones.
    #[must_use]
    pub fn with_class(self, class: &str) -> Self {
        let classes = match self.attribute("class") {
            Some(existing) if !existing.trim().is_empty() => format!("{existing} {class}"),
            _ => class.to_owned(),
        };
        self.with_attribute("class", &classes)
    }

    #[must_use]
    pub fn with_text(self, text: &str) -> Self {
        self.set_text(text);
        self
    }

    #[must_use]
    pub fn with_value(self, value: &str) -> Self {
        self.set_value(value);
        self
    }

    #[must_use]
    pub fn with_bounds(self, top: f64, bottom: f64) -> Self {
        self.0.borrow_mut().bounds = Bounds::new(top, bottom);
        self
    }

    #[must_use]
    pub fn with_disabled(self) -> Self {
        self.set_disabled(true);
        self
    }

    #[must_use]
    pub fn with_child(self, child: MemoryElement) -> Self {
        self.append(&child);
        self
    }

    /// Move `child` under this element, detaching it from any previous parent.
    pub fn append(&self, child: &MemoryElement) {
        if self.same(child) {
            return;
        }
        child.remove();
        child.0.borrow_mut().parent = Rc::downgrade(&self.0);
        self.0.borrow_mut().children.push(child.clone());
    }

    #[must_use]
    pub fn tag(&self) -> String {
        self.0.borrow().tag.clone()
    }

    #[must_use]
    pub fn parent(&self) -> Option<MemoryElement> {
        self.0.borrow().parent.upgrade().map(MemoryElement)
    }

    #[must_use]
    pub fn children(&self) -> Vec<MemoryElement> {
        self.0.borrow().children.clone()
    }

    /// Same underlying node.
    #[must_use]
    pub fn same(&self, other: &MemoryElement) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    #[must_use]
    pub fn matches(&self, selector: &Selector) -> bool {
        let node = self.0.borrow();
        selector.matches(&node.tag, &node.attributes)
    }

    /// Descendants in document (pre-)order, excluding `self`.
    #[must_use]
    pub fn descendants(&self) -> Vec<MemoryElement> {
        let mut out = Vec::new();
        self.collect_descendants(&mut out);
        out
    }

    fn collect_descendants(&self, out: &mut Vec<MemoryElement>) {
        for child in self.children() {
            out.push(child.clone());
            child.collect_descendants(out);
        }
    }
}

impl Element for MemoryElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.0.borrow_mut().attributes.insert(name.to_owned(), value.to_owned());
    }

    fn remove_attribute(&self, name: &str) {
        self.0.borrow_mut().attributes.remove(name);
    }

    fn style(&self, property: &str) -> String {
        self.0.borrow().style.get(property).cloned().unwrap_or_default()
    }

    fn set_style(&self, property: &str, value: &str) {
        let mut node = self.0.borrow_mut();
        if value.is_empty() {
            node.style.remove(property);
        } else {
            node.style.insert(property.to_owned(), value.to_owned());
        }
    }

    fn text(&self) -> String {
        self.0.borrow().text.clone()
    }

    fn set_text(&self, text: &str) {
        text.clone_into(&mut self.0.borrow_mut().text);
    }

    fn value(&self) -> String {
        self.0.borrow().value.clone()
    }

    fn set_value(&self, value: &str) {
        value.clone_into(&mut self.0.borrow_mut().value);
    }

    fn is_disabled(&self) -> bool {
        self.0.borrow().disabled
    }

    fn set_disabled(&self, disabled: bool) {
        self.0.borrow_mut().disabled = disabled;
    }

    fn bounds(&self) -> Bounds {
        self.0.borrow().bounds
    }

    fn find(&self, selector: &Selector) -> Option<Self> {
        self.descendants().into_iter().find(|el| el.matches(selector))
    }

    fn remove(&self) {
        let parent = self.0.borrow().parent.upgrade();
        if let Some(parent) = parent {
            parent.borrow_mut().children.retain(|child| !Rc::ptr_eq(&child.0, &self.0));
        }
        self.0.borrow_mut().parent = Weak::new();
    }
}

// =============================================================
// Storage
// =============================================================

/// Shared string map standing in for `localStorage`.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
    reject_writes: Rc<Cell<bool>>,
}

impl MemoryStore {
    pub fn insert(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    #[must_use]
    pub fn entry(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Make subsequent writes fail, like a full quota.
    pub fn reject_writes(&self, reject: bool) {
        self.reject_writes.set(reject);
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, UiError> {
        Ok(self.entry(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), UiError> {
        if self.reject_writes.get() {
            return Err(UiError::StorageWrite { key: key.to_owned(), reason: "quota exceeded".to_owned() });
        }
        self.insert(key, value);
        Ok(())
    }
}

// =============================================================
// Host
// =============================================================

struct Registration {
    target: Target<MemoryElement>,
    event: EventKind,
    handler: Listener<MemoryHost>,
}

struct PendingTimer {
    due: Duration,
    seq: u64,
    task: Box<dyn FnOnce()>,
}

struct Inner {
    root: MemoryElement,
    head: MemoryElement,
    body: MemoryElement,
    store: MemoryStore,
    storage_available: Cell<bool>,
    listeners: RefCell<Vec<Registration>>,
    timers: RefCell<Vec<PendingTimer>>,
    now: Cell<Duration>,
    next_seq: Cell<u64>,
    confirm_answer: Cell<bool>,
    prompts: RefCell<Vec<String>>,
    viewport_height: Cell<f64>,
    scroll_to_top_calls: Cell<usize>,
    today: Cell<NaiveDate>,
    submissions: RefCell<Vec<String>>,
}

/// Headless document host.
#[derive(Clone)]
pub struct MemoryHost {
    inner: Rc<Inner>,
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryHost {
    /// An empty `<html><head/><body/></html>` document.
    #[must_use]
    pub fn new() -> Self {
        let head = MemoryElement::new("head");
        let body = MemoryElement::new("body");
        let root = MemoryElement::new("html").with_child(head.clone()).with_child(body.clone());
        Self {
            inner: Rc::new(Inner {
                root,
                head,
                body,
                store: MemoryStore::default(),
                storage_available: Cell::new(true),
                listeners: RefCell::new(Vec::new()),
                timers: RefCell::new(Vec::new()),
                now: Cell::new(Duration::ZERO),
                next_seq: Cell::new(0),
                confirm_answer: Cell::new(true),
                prompts: RefCell::new(Vec::new()),
                viewport_height: Cell::new(DEFAULT_VIEWPORT_HEIGHT),
                scroll_to_top_calls: Cell::new(0),
                today: Cell::new(NaiveDate::default()),
                submissions: RefCell::new(Vec::new()),
            }),
        }
    }

    #[must_use]
    pub fn head(&self) -> MemoryElement {
        self.inner.head.clone()
    }

    #[must_use]
    pub fn body(&self) -> MemoryElement {
        self.inner.body.clone()
    }

    #[must_use]
    pub fn storage(&self) -> &MemoryStore {
        &self.inner.store
    }

    pub fn set_storage_available(&self, available: bool) {
        self.inner.storage_available.set(available);
    }

    /// Answer every following confirmation prompt with `accept`.
    pub fn answer_confirm(&self, accept: bool) {
        self.inner.confirm_answer.set(accept);
    }

    /// Messages shown through [`Host::confirm`], oldest first.
    #[must_use]
    pub fn prompts(&self) -> Vec<String> {
        self.inner.prompts.borrow().clone()
    }

    pub fn set_viewport_height(&self, height: f64) {
        self.inner.viewport_height.set(height);
    }

    #[must_use]
    pub fn scroll_to_top_calls(&self) -> usize {
        self.inner.scroll_to_top_calls.get()
    }

    pub fn set_today(&self, date: NaiveDate) {
        self.inner.today.set(date);
    }

    /// Virtual time elapsed since the host was created.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.inner.now.get()
    }

    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.inner.timers.borrow().len()
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    /// Advance the clock by `by`, firing due timers in deadline order.
    /// Timers scheduled by a firing timer run too if they fall due in range.
    pub fn advance(&self, by: Duration) {
        let deadline = self.inner.now.get() + by;
        loop {
            let next = {
                let mut timers = self.inner.timers.borrow_mut();
                let due = timers
                    .iter()
                    .enumerate()
                    .filter(|(_, timer)| timer.due <= deadline)
                    .min_by_key(|(_, timer)| (timer.due, timer.seq))
                    .map(|(index, _)| index);
                due.map(|index| timers.remove(index))
            };
            let Some(timer) = next else {
                break;
            };
            self.inner.now.set(timer.due);
            (timer.task)();
        }
        self.inner.now.set(deadline);
    }

    /// Run every listener bound to `target` for `event`. All listeners run
    /// even after one cancels, as in the DOM.
    pub fn dispatch(&self, target: &MemoryElement, event: EventKind) -> Propagation {
        let handlers = self.handlers_for(event, |bound| matches!(bound, Target::Element(el) if el.same(target)));
        run_handlers(self, target, &handlers)
    }

    pub fn click(&self, target: &MemoryElement) -> Propagation {
        self.dispatch(target, EventKind::Click)
    }

    pub fn focus(&self, target: &MemoryElement) -> Propagation {
        self.dispatch(target, EventKind::Focus)
    }

    pub fn blur(&self, target: &MemoryElement) -> Propagation {
        self.dispatch(target, EventKind::Blur)
    }

    pub fn mouse_enter(&self, target: &MemoryElement) -> Propagation {
        self.dispatch(target, EventKind::MouseEnter)
    }

    /// Type `value` into an input and fire `input`.
    pub fn input(&self, target: &MemoryElement, value: &str) -> Propagation {
        target.set_value(value);
        self.dispatch(target, EventKind::Input)
    }

    /// Fire `submit` on a form. Returns whether the submission went through;
    /// accepted submissions are recorded by their `action`.
    pub fn submit(&self, form: &MemoryElement) -> bool {
        if self.dispatch(form, EventKind::Submit) == Propagation::Cancel {
            return false;
        }
        self.inner.submissions.borrow_mut().push(form.attribute("action").unwrap_or_default());
        true
    }

    /// Actions of forms whose submission reached the server.
    #[must_use]
    pub fn submissions(&self) -> Vec<String> {
        self.inner.submissions.borrow().clone()
    }

    /// Fire `scroll` on the window.
    pub fn scroll(&self) -> Propagation {
        let handlers = self.handlers_for(EventKind::Scroll, |bound| matches!(bound, Target::Window));
        run_handlers(self, &self.inner.root, &handlers)
    }

    fn handlers_for(
        &self,
        event: EventKind,
        target_matches: impl Fn(&Target<MemoryElement>) -> bool,
    ) -> Vec<Listener<MemoryHost>> {
        self.inner
            .listeners
            .borrow()
            .iter()
            .filter(|reg| reg.event == event && target_matches(&reg.target))
            .map(|reg| Rc::clone(&reg.handler))
            .collect()
    }
}

fn run_handlers(host: &MemoryHost, target: &MemoryElement, handlers: &[Listener<MemoryHost>]) -> Propagation {
    let mut outcome = Propagation::Continue;
    for handler in handlers {
        if handler(host, target) == Propagation::Cancel {
            outcome = Propagation::Cancel;
        }
    }
    outcome
}

impl Host for MemoryHost {
    type Element = MemoryElement;
    type Store = MemoryStore;

    fn root(&self) -> MemoryElement {
        self.inner.root.clone()
    }

    fn by_id(&self, id: &str) -> Option<MemoryElement> {
        self.inner
            .root
            .descendants()
            .into_iter()
            .find(|el| el.attribute("id").as_deref() == Some(id))
    }

    fn select_all(&self, selector: &Selector) -> Vec<MemoryElement> {
        std::iter::once(self.root())
            .chain(self.inner.root.descendants())
            .filter(|el| el.matches(selector))
            .collect()
    }

    fn store(&self) -> Result<MemoryStore, UiError> {
        if self.inner.storage_available.get() {
            Ok(self.inner.store.clone())
        } else {
            Err(UiError::StorageUnavailable("storage disabled".to_owned()))
        }
    }

    fn listen(&self, target: Target<MemoryElement>, event: EventKind, handler: Listener<Self>) {
        self.inner.listeners.borrow_mut().push(Registration { target, event, handler });
    }

    fn set_timeout(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        let seq = self.inner.next_seq.get();
        self.inner.next_seq.set(seq + 1);
        let due = self.inner.now.get() + delay;
        self.inner.timers.borrow_mut().push(PendingTimer { due, seq, task });
    }

    fn confirm(&self, message: &str) -> bool {
        self.inner.prompts.borrow_mut().push(message.to_owned());
        self.inner.confirm_answer.get()
    }

    fn viewport_height(&self) -> f64 {
        self.inner.viewport_height.get()
    }

    fn scroll_to_top(&self) {
        self.inner.scroll_to_top_calls.set(self.inner.scroll_to_top_calls.get() + 1);
    }

    fn today(&self) -> NaiveDate {
        self.inner.today.get()
    }

    fn append_style(&self, css: &str) {
        self.inner.head.append(&MemoryElement::new("style").with_text(css));
    }
}
