//! Theme controller: initial theme selection, apply, and toggle.
//!
//! DESIGN
//! ======
//! The root attribute is the single source of truth for the current theme;
//! the stored preference only seeds it at init and is rewritten on every
//! toggle. Collaborator failures are absorbed here so that no operation can
//! fail from the page's point of view.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::config::ThemeConfig;
use crate::page::{AppearanceSignal, PageDom, PreferenceStore};
use crate::theme::Theme;

/// Picks, applies, and toggles the page theme over its three collaborators.
pub struct ThemeController<S, A, D> {
    config: ThemeConfig,
    store: S,
    appearance: A,
    dom: D,
}

impl<S, A, D> ThemeController<S, A, D>
where
    S: PreferenceStore,
    A: AppearanceSignal,
    D: PageDom,
{
    /// Controller owning `config` and the collaborators for its lifetime.
    pub fn new(config: ThemeConfig, store: S, appearance: A, dom: D) -> Self {
        Self {
            config,
            store,
            appearance,
            dom,
        }
    }

    /// Names and labels this controller was built with.
    pub fn config(&self) -> &ThemeConfig {
        &self.config
    }

    /// Give the collaborators back, mostly so tests can inspect them.
    pub fn into_parts(self) -> (S, A, D) {
        (self.store, self.appearance, self.dom)
    }

    /// Stored preference if valid, else the platform light signal, else dark.
    pub fn determine_initial_theme(&self) -> Theme {
        if let Some(theme) = self.stored_theme() {
            return theme;
        }
        match self.appearance.matches(&self.config.light_query) {
            Some(true) => Theme::Light,
            Some(false) => Theme::Dark,
            None => {
                log::debug!("appearance signal unavailable, defaulting to dark");
                Theme::Dark
            }
        }
    }

    /// Write `theme` to the root attribute and refresh the button label.
    pub fn apply(&mut self, theme: Theme) {
        if let Err(err) = self
            .dom
            .set_root_attribute(&self.config.attribute, theme.as_str())
        {
            log::warn!("failed to apply theme {theme}: {err}");
        }
        let label = self.config.label_for(theme);
        if !self.dom.set_label(&self.config.button_id, label) {
            log::trace!("no #{} element, label skipped", self.config.button_id);
        }
    }

    /// Flip the applied theme, persist it, and apply it. Returns the new theme.
    pub fn toggle(&mut self) -> Theme {
        let next = match self.applied_value() {
            None => Theme::Dark.toggled(),
            Some(raw) => match Theme::from_value(&raw) {
                Some(current) => current.toggled(),
                None => {
                    log::debug!("unrecognised applied theme {raw:?}, resetting to dark");
                    Theme::Dark
                }
            },
        };
        if let Err(err) = self.store.save(&self.config.storage_key, next.as_str()) {
            log::warn!("failed to persist theme {next}: {err}");
        }
        self.apply(next);
        log::debug!("theme toggled to {next}");
        next
    }

    /// Page-load sequence: pick the initial theme and apply it.
    pub fn init(&mut self) -> Theme {
        let theme = self.determine_initial_theme();
        self.apply(theme);
        log::debug!("theme initialised to {theme}");
        theme
    }

    /// Theme currently on the root attribute. Unset, empty, or unrecognised
    /// reads as dark.
    pub fn current(&self) -> Theme {
        self.applied_value()
            .and_then(|raw| Theme::from_value(&raw))
            .unwrap_or_default()
    }

    /// Root attribute value, with an empty attribute counted as unset.
    fn applied_value(&self) -> Option<String> {
        self.dom
            .root_attribute(&self.config.attribute)
            .filter(|raw| !raw.is_empty())
    }

    fn stored_theme(&self) -> Option<Theme> {
        let raw = match self.store.load(&self.config.storage_key) {
            Ok(raw) => raw?,
            Err(err) => {
                log::debug!("stored theme unreadable: {err}");
                return None;
            }
        };
        let theme = Theme::from_value(&raw);
        if theme.is_none() {
            log::debug!("ignoring stored theme {raw:?}");
        }
        theme
    }
}
