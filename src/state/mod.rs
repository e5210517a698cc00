//! Client-side state owned by the behavior layer.
//!
//! DESIGN
//! ======
//! The only state that outlives an event is the theme preference. It is an
//! explicit value shared by the handlers that need it, never read back from
//! the document.

pub mod theme;
