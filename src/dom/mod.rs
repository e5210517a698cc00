//! Host environment abstraction.
//!
//! SYSTEM CONTEXT
//! ==============
//! Behaviors never touch `web-sys` directly. They query and mutate elements
//! through [`Element`] and reach timers, storage, dialogs and the viewport
//! through [`Host`]. The browser implementation lives in `browser` (hydrate
//! only); [`memory::MemoryHost`] backs tests and headless use.

#[cfg(feature = "hydrate")]
pub mod browser;
pub mod memory;
pub mod selector;

use std::rc::Rc;
use std::time::Duration;

use chrono::NaiveDate;

use crate::error::UiError;

pub use selector::Selector;

/// DOM events a capability can bind to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Not a DOM event: the handler runs once while attaching.
    Load,
    Click,
    Submit,
    Focus,
    Blur,
    Input,
    Scroll,
    MouseEnter,
}

impl EventKind {
    /// DOM event name, or `None` for [`EventKind::Load`].
    #[must_use]
    pub fn dom_name(self) -> Option<&'static str> {
        match self {
            Self::Load => None,
            Self::Click => Some("click"),
            Self::Submit => Some("submit"),
            Self::Focus => Some("focus"),
            Self::Blur => Some("blur"),
            Self::Input => Some("input"),
            Self::Scroll => Some("scroll"),
            Self::MouseEnter => Some("mouseenter"),
        }
    }
}

/// What a handler wants done with the event's default action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Propagation {
    #[default]
    Continue,
    /// Prevent the default action (cancels a form submission).
    Cancel,
}

/// Listener registration target.
#[derive(Clone, Debug)]
pub enum Target<E> {
    Window,
    Element(E),
}

/// Vertical extent of an element relative to the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub top: f64,
    pub bottom: f64,
}

impl Bounds {
    #[must_use]
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// True when any part of the element lies inside `[0, viewport_height)`.
    #[must_use]
    pub fn intersects_viewport(&self, viewport_height: f64) -> bool {
        self.top < viewport_height && self.bottom > 0.0
    }
}

/// Event handler shared between the capability table and the host.
pub type Listener<H> = Rc<dyn Fn(&H, &<H as Host>::Element) -> Propagation>;

/// Handle to a document element. Clones refer to the same element.
pub trait Element: Clone + 'static {
    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str);
    fn remove_attribute(&self, name: &str);

    /// Inline style property value, empty when unset.
    fn style(&self, property: &str) -> String;
    /// Set an inline style property. An empty value clears it.
    fn set_style(&self, property: &str, value: &str);

    fn text(&self) -> String;
    fn set_text(&self, text: &str);

    /// Current form control value, empty for non-controls.
    fn value(&self) -> String;
    fn set_value(&self, value: &str);

    fn is_disabled(&self) -> bool;
    fn set_disabled(&self, disabled: bool);

    fn bounds(&self) -> Bounds;

    /// First descendant matching `selector`.
    fn find(&self, selector: &Selector) -> Option<Self>;

    /// Detach the element from the document.
    fn remove(&self);
}

/// Durable string key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, UiError>;
    fn set(&self, key: &str, value: &str) -> Result<(), UiError>;
}

/// The environment behaviors run in.
///
/// Hosts are cheap handles; timer callbacks clone them to reach the host
/// again when they fire.
pub trait Host: Clone + 'static {
    type Element: Element;
    type Store: KeyValueStore;

    /// The document's root (`<html>`) element.
    fn root(&self) -> Self::Element;
    fn by_id(&self, id: &str) -> Option<Self::Element>;
    /// All matching elements in document order.
    fn select_all(&self, selector: &Selector) -> Vec<Self::Element>;

    fn store(&self) -> Result<Self::Store, UiError>;

    fn listen(&self, target: Target<Self::Element>, event: EventKind, handler: Listener<Self>);
    /// Run `task` once after `delay`. Not cancellable.
    fn set_timeout(&self, delay: Duration, task: Box<dyn FnOnce()>);

    /// Blocking yes/no prompt.
    fn confirm(&self, message: &str) -> bool;

    fn viewport_height(&self) -> f64;
    fn scroll_to_top(&self);

    /// Current local calendar date.
    fn today(&self) -> NaiveDate;

    /// Append a `<style>` element with `css` to the document head.
    fn append_style(&self, css: &str);
}
