//! Typed element selectors.
//!
//! Each variant renders to a CSS selector for `querySelectorAll` and can be
//! evaluated directly against a tag name and attribute map for hosts
//! without a selector engine.

#[cfg(test)]
#[path = "selector_test.rs"]
mod selector_test;

use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selector {
    /// Elements with this tag name (`form`).
    Tag(String),
    /// Elements carrying this class (`.alert`).
    Class(String),
    /// `input[type="..."]`.
    InputType(String),
    /// `form[action^="..."]`.
    ActionPrefix(String),
    /// `a[href="..."]`.
    Href(String),
    /// `button[type="submit"]`.
    SubmitButton,
}

impl Selector {
    #[must_use]
    pub fn tag(name: &str) -> Self {
        Self::Tag(name.to_owned())
    }

    #[must_use]
    pub fn class(name: &str) -> Self {
        Self::Class(name.to_owned())
    }

    #[must_use]
    pub fn input_type(kind: &str) -> Self {
        Self::InputType(kind.to_owned())
    }

    #[must_use]
    pub fn action_prefix(prefix: &str) -> Self {
        Self::ActionPrefix(prefix.to_owned())
    }

    #[must_use]
    pub fn href(target: &str) -> Self {
        Self::Href(target.to_owned())
    }

    /// Render as a CSS selector.
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            Self::Tag(name) => name.clone(),
            Self::Class(name) => format!(".{name}"),
            Self::InputType(kind) => format!("input[type={}]", quote(kind)),
            Self::ActionPrefix(prefix) => format!("form[action^={}]", quote(prefix)),
            Self::Href(target) => format!("a[href={}]", quote(target)),
            Self::SubmitButton => "button[type=\"submit\"]".to_owned(),
        }
    }

    /// Evaluate against an element's tag name and attributes.
    #[must_use]
    pub fn matches(&self, tag: &str, attributes: &BTreeMap<String, String>) -> bool {
        let attr = |name: &str| attributes.get(name).map(String::as_str);
        // `type` is an enumerated attribute: its value matches ASCII case-insensitively.
        let type_is = |kind: &str| attr("type").is_some_and(|value| value.eq_ignore_ascii_case(kind));
        match self {
            Self::Tag(name) => tag.eq_ignore_ascii_case(name),
            Self::Class(name) => attr("class").is_some_and(|classes| classes.split_whitespace().any(|c| c == name)),
            Self::InputType(kind) => tag.eq_ignore_ascii_case("input") && type_is(kind),
            Self::ActionPrefix(prefix) => {
                tag.eq_ignore_ascii_case("form") && attr("action").is_some_and(|action| action.starts_with(prefix.as_str()))
            }
            Self::Href(target) => tag.eq_ignore_ascii_case("a") && attr("href") == Some(target.as_str()),
            Self::SubmitButton => tag.eq_ignore_ascii_case("button") && type_is("submit"),
        }
    }
}

fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        if ch == '"' || ch == '\\' {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push('"');
    out
}
