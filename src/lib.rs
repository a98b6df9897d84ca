//! # page-theme
//!
//! Dark/light theme switching for server-rendered pages, compiled to
//! WebAssembly. On load the crate picks the initial theme from `localStorage`
//! (falling back to the platform `prefers-color-scheme` signal), writes it to
//! the `data-theme` attribute of `<html>`, and wires the `#themeToggle` button
//! to flip and persist the choice.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | The binary [`theme::Theme`] value |
//! | [`config`] | Storage key, attribute, button id, and labels |
//! | [`page`] | Collaborator traits the controller is written against |
//! | [`memory`] | In-memory collaborators for native tests and embedders |
//! | [`controller`] | [`controller::ThemeController`]: init, apply, toggle |
//! | `web` | web-sys collaborators and page boot (`hydrate` only) |

pub mod config;
pub mod controller;
pub mod error;
pub mod memory;
pub mod page;
pub mod theme;
#[cfg(feature = "hydrate")]
pub mod web;

pub use config::ThemeConfig;
pub use controller::ThemeController;
pub use error::ThemeError;
pub use theme::Theme;

/// WASM entrypoint: boots the controller against the current document.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("console logger already installed");
    }
    web::boot(ThemeConfig::default());
}
