//! # expense-ui
//!
//! Browser behavior layer for the expense tracker's server-rendered pages.
//! The server owns markup, routing and data; this crate only decorates the
//! document once it becomes interactive: theme toggling, flash dismissal,
//! confirmation gates on destructive forms, input defaulting and a few
//! animations.
//!
//! Behaviors are written against the [`dom::Host`] and [`dom::Element`]
//! traits. The `hydrate` feature provides the `web-sys` host and the wasm
//! entry point; without it the crate builds natively and runs against the
//! in-memory host in [`dom::memory`].

pub mod behaviors;
pub mod config;
pub mod dom;
pub mod error;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
pub mod bindings;

pub use behaviors::{Session, init};
pub use config::UiConfig;
pub use error::UiError;
pub use state::theme::{Theme, ThemePreference};
pub use util::currency::format_currency;
