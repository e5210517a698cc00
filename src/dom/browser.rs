//! `web-sys` host for the real page.
//!
//! ERROR HANDLING
//! ==============
//! DOM calls that can throw are logged at `warn` and otherwise ignored; the
//! page keeps working without the affected affordance.

use std::time::Duration;

use chrono::NaiveDate;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use super::{Bounds, Element, EventKind, Host, KeyValueStore, Listener, Propagation, Selector, Target};
use crate::error::UiError;

// =============================================================
// Elements
// =============================================================

#[derive(Clone, Debug)]
pub struct BrowserElement(web_sys::Element);

impl BrowserElement {
    #[must_use]
    pub fn new(element: web_sys::Element) -> Self {
        Self(element)
    }

    #[must_use]
    pub fn as_web_sys(&self) -> &web_sys::Element {
        &self.0
    }

    fn style_declaration(&self) -> Option<web_sys::CssStyleDeclaration> {
        self.0.dyn_ref::<web_sys::HtmlElement>().map(web_sys::HtmlElement::style)
    }
}

impl Element for BrowserElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) {
        if let Err(err) = self.0.set_attribute(name, value) {
            log::warn!("set_attribute({name}) failed: {err:?}");
        }
    }

    fn remove_attribute(&self, name: &str) {
        if let Err(err) = self.0.remove_attribute(name) {
            log::warn!("remove_attribute({name}) failed: {err:?}");
        }
    }

    fn style(&self, property: &str) -> String {
        match self.style_declaration().map(|style| style.get_property_value(property)) {
            Some(Ok(value)) => value,
            Some(Err(err)) => {
                log::warn!("reading style {property} failed: {err:?}");
                String::new()
            }
            None => String::new(),
        }
    }

    fn set_style(&self, property: &str, value: &str) {
        let Some(style) = self.style_declaration() else {
            return;
        };
        if let Err(err) = style.set_property(property, value) {
            log::warn!("setting style {property} failed: {err:?}");
        }
    }

    fn text(&self) -> String {
        self.0.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn value(&self) -> String {
        if let Some(input) = self.0.dyn_ref::<web_sys::HtmlInputElement>() {
            return input.value();
        }
        if let Some(button) = self.0.dyn_ref::<web_sys::HtmlButtonElement>() {
            return button.value();
        }
        String::new()
    }

    fn set_value(&self, value: &str) {
        if let Some(input) = self.0.dyn_ref::<web_sys::HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(button) = self.0.dyn_ref::<web_sys::HtmlButtonElement>() {
            button.set_value(value);
        }
    }

    fn is_disabled(&self) -> bool {
        if let Some(button) = self.0.dyn_ref::<web_sys::HtmlButtonElement>() {
            return button.disabled();
        }
        if let Some(input) = self.0.dyn_ref::<web_sys::HtmlInputElement>() {
            return input.disabled();
        }
        self.0.has_attribute("disabled")
    }

    fn set_disabled(&self, disabled: bool) {
        if let Some(button) = self.0.dyn_ref::<web_sys::HtmlButtonElement>() {
            button.set_disabled(disabled);
        } else if let Some(input) = self.0.dyn_ref::<web_sys::HtmlInputElement>() {
            input.set_disabled(disabled);
        } else if disabled {
            self.set_attribute("disabled", "");
        } else {
            self.remove_attribute("disabled");
        }
    }

    fn bounds(&self) -> Bounds {
        let rect = self.0.get_bounding_client_rect();
        Bounds::new(rect.top(), rect.bottom())
    }

    fn find(&self, selector: &Selector) -> Option<Self> {
        match self.0.query_selector(&selector.to_css()) {
            Ok(found) => found.map(Self),
            Err(err) => {
                log::warn!("query_selector({}) failed: {err:?}", selector.to_css());
                None
            }
        }
    }

    fn remove(&self) {
        self.0.remove();
    }
}

// =============================================================
// Storage
// =============================================================

#[derive(Clone, Debug)]
pub struct BrowserStore(web_sys::Storage);

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, UiError> {
        self.0
            .get_item(key)
            .map_err(|err| UiError::StorageRead { key: key.to_owned(), reason: format!("{err:?}") })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), UiError> {
        self.0
            .set_item(key, value)
            .map_err(|err| UiError::StorageWrite { key: key.to_owned(), reason: format!("{err:?}") })
    }
}

// =============================================================
// Host
// =============================================================

#[derive(Clone, Debug)]
pub struct BrowserHost {
    window: web_sys::Window,
    document: web_sys::Document,
    root: BrowserElement,
}

impl BrowserHost {
    pub fn new() -> Result<Self, UiError> {
        let window = web_sys::window().ok_or(UiError::NoWindow)?;
        let document = window.document().ok_or(UiError::NoDocument)?;
        let root = document.document_element().ok_or(UiError::NoDocument)?;
        Ok(Self { window, document, root: BrowserElement(root) })
    }

    #[must_use]
    pub fn document(&self) -> &web_sys::Document {
        &self.document
    }
}

impl Host for BrowserHost {
    type Element = BrowserElement;
    type Store = BrowserStore;

    fn root(&self) -> BrowserElement {
        self.root.clone()
    }

    fn by_id(&self, id: &str) -> Option<BrowserElement> {
        self.document.get_element_by_id(id).map(BrowserElement)
    }

    fn select_all(&self, selector: &Selector) -> Vec<BrowserElement> {
        let css = selector.to_css();
        let list = match self.document.query_selector_all(&css) {
            Ok(list) => list,
            Err(err) => {
                log::warn!("query_selector_all({css}) failed: {err:?}");
                return Vec::new();
            }
        };
        (0..list.length())
            .filter_map(|index| list.item(index))
            .filter_map(|node| node.dyn_ref::<web_sys::Element>().cloned().map(BrowserElement))
            .collect()
    }

    fn store(&self) -> Result<BrowserStore, UiError> {
        match self.window.local_storage() {
            Ok(Some(storage)) => Ok(BrowserStore(storage)),
            Ok(None) => Err(UiError::StorageUnavailable("no localStorage".to_owned())),
            Err(err) => Err(UiError::StorageUnavailable(format!("{err:?}"))),
        }
    }

    fn listen(&self, target: Target<BrowserElement>, event: EventKind, handler: Listener<Self>) {
        let Some(name) = event.dom_name() else {
            return;
        };
        let host = self.clone();
        let current = match &target {
            Target::Window => self.root(),
            Target::Element(element) => element.clone(),
        };
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |dom_event: web_sys::Event| {
            if handler(&host, &current) == Propagation::Cancel {
                dom_event.prevent_default();
            }
        });
        let registered = match &target {
            Target::Window => self.window.add_event_listener_with_callback(name, callback.as_ref().unchecked_ref()),
            Target::Element(element) => {
                element.0.add_event_listener_with_callback(name, callback.as_ref().unchecked_ref())
            }
        };
        if let Err(err) = registered {
            log::warn!("adding {name} listener failed: {err:?}");
        }
        // Listeners live for the whole page.
        callback.forget();
    }

    fn set_timeout(&self, delay: Duration, task: Box<dyn FnOnce()>) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Timeout::new(millis, task).forget();
    }

    fn confirm(&self, message: &str) -> bool {
        match self.window.confirm_with_message(message) {
            Ok(accepted) => accepted,
            Err(err) => {
                log::warn!("confirm dialog failed, treating as declined: {err:?}");
                false
            }
        }
    }

    fn viewport_height(&self) -> f64 {
        match self.window.inner_height() {
            Ok(height) => height.as_f64().unwrap_or_default(),
            Err(err) => {
                log::warn!("inner_height unavailable: {err:?}");
                0.0
            }
        }
    }

    fn scroll_to_top(&self) {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }

    fn append_style(&self, css: &str) {
        let style = match self.document.create_element("style") {
            Ok(style) => style,
            Err(err) => {
                log::warn!("creating style element failed: {err:?}");
                return;
            }
        };
        style.set_text_content(Some(css));
        let Some(head) = self.document.head() else {
            return;
        };
        if let Err(err) = head.append_child(&style) {
            log::warn!("appending style element failed: {err:?}");
        }
    }
}
