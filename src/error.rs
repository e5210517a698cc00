//! Error type shared by hosts, storage and configuration.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here reaches the user. Callers log the error and fall back to a
//! default (dark theme, skipped write, default config) so a broken storage
//! backend or a malformed override never breaks the page.

/// Failure raised while talking to the host environment.
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    /// No global `window` object (not running in a browser main thread).
    #[error("browser window is unavailable")]
    NoWindow,
    /// The window has no document or the document has no root element.
    #[error("document is unavailable")]
    NoDocument,
    /// Durable key-value storage is disabled or blocked.
    #[error("local storage is unavailable: {0}")]
    StorageUnavailable(String),
    /// Reading a key failed.
    #[error("failed to read `{key}` from storage: {reason}")]
    StorageRead { key: String, reason: String },
    /// Writing a key failed (quota, private mode).
    #[error("failed to write `{key}` to storage: {reason}")]
    StorageWrite { key: String, reason: String },
    /// A stored theme string is neither `dark` nor `light`.
    #[error("unknown theme: {0:?}")]
    UnknownTheme(String),
    /// The `data-ui-config` override is not valid JSON for [`crate::UiConfig`].
    #[error("invalid ui config: {0}")]
    Config(#[from] serde_json::Error),
}
