//! Collaborators the theme controller reads from and writes to.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller never touches browser APIs directly. The `web` module
//! implements these traits over web-sys; [`crate::memory`] implements them
//! in plain Rust so controller behavior runs under native tests.

use crate::error::ThemeError;

/// Durable, origin-scoped key/value store (`localStorage`).
pub trait PreferenceStore {
    /// Stored value for `key`, or `None` when nothing was ever written.
    ///
    /// # Errors
    ///
    /// Fails when the store is unavailable or the read is rejected.
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Fails when the store is unavailable or the write is rejected (quota).
    fn save(&mut self, key: &str, value: &str) -> Result<(), ThemeError>;
}

/// Read-only platform appearance signal.
pub trait AppearanceSignal {
    /// Whether `query` currently matches. `None` when the platform cannot
    /// evaluate media queries.
    fn matches(&self, query: &str) -> Option<bool>;
}

/// The page elements the controller mutates.
pub trait PageDom {
    /// Current value of `name` on the root element.
    fn root_attribute(&self, name: &str) -> Option<String>;

    /// Set `name` on the root element.
    ///
    /// # Errors
    ///
    /// Fails when the document or its root element is missing, or the
    /// attribute name is rejected.
    fn set_root_attribute(&mut self, name: &str, value: &str) -> Result<(), ThemeError>;

    /// Replace the text of the element with `id`. Returns `false` when no
    /// such element exists.
    fn set_label(&mut self, id: &str, text: &str) -> bool;
}
