//! In-memory collaborators.
//!
//! Used by the native test suite and by embedders that drive the controller
//! outside a browser (SSR previews, snapshot tests).

#[cfg(test)]
#[path = "memory_test.rs"]
mod memory_test;

use std::collections::HashMap;

use crate::error::ThemeError;
use crate::page::{AppearanceSignal, PageDom, PreferenceStore};

/// Key/value store backed by a `HashMap`. Can simulate an unavailable store
/// or a store that rejects writes.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    unavailable: bool,
    reject_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.entries.insert(key.to_owned(), value.to_owned());
        store
    }

    /// Store whose every access fails with [`ThemeError::StorageUnavailable`].
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Store that reads normally but rejects writes.
    #[must_use]
    pub fn rejecting_writes(mut self) -> Self {
        self.reject_writes = true;
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError> {
        if self.unavailable {
            return Err(ThemeError::StorageUnavailable);
        }
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        if self.unavailable {
            return Err(ThemeError::StorageUnavailable);
        }
        if self.reject_writes {
            return Err(ThemeError::Storage(format!("quota exceeded writing {key}")));
        }
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Appearance signal with a fixed answer for every query. `None` models a
/// platform without media query support.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedAppearance(pub Option<bool>);

impl AppearanceSignal for FixedAppearance {
    fn matches(&self, _query: &str) -> Option<bool> {
        self.0
    }
}

/// Root element attributes plus labelled elements by id.
#[derive(Clone, Debug, Default)]
pub struct MemoryDom {
    root: HashMap<String, String>,
    labels: HashMap<String, String>,
}

impl MemoryDom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Document containing an element with `id` and empty text.
    pub fn with_element(id: &str) -> Self {
        let mut dom = Self::default();
        dom.labels.insert(id.to_owned(), String::new());
        dom
    }

    /// Pre-set a root attribute, as server-rendered markup would.
    #[must_use]
    pub fn with_root_attribute(mut self, name: &str, value: &str) -> Self {
        self.root.insert(name.to_owned(), value.to_owned());
        self
    }

    /// Text of the element with `id`, if it exists.
    pub fn label(&self, id: &str) -> Option<&str> {
        self.labels.get(id).map(String::as_str)
    }
}

impl PageDom for MemoryDom {
    fn root_attribute(&self, name: &str) -> Option<String> {
        self.root.get(name).cloned()
    }

    fn set_root_attribute(&mut self, name: &str, value: &str) -> Result<(), ThemeError> {
        if name.is_empty() {
            return Err(ThemeError::Dom("empty attribute name".to_owned()));
        }
        self.root.insert(name.to_owned(), value.to_owned());
        Ok(())
    }

    fn set_label(&mut self, id: &str, text: &str) -> bool {
        match self.labels.get_mut(id) {
            Some(label) => {
                text.clone_into(label);
                true
            }
            None => false,
        }
    }
}
