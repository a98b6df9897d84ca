//! Browser collaborators and page boot.
//!
//! TRADE-OFFS
//! ==========
//! Every browser lookup is best-effort: a missing `window`, `localStorage`, or
//! `matchMedia` degrades to "absent" so the page still gets a theme.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;

use crate::config::ThemeConfig;
use crate::controller::ThemeController;
use crate::error::ThemeError;
use crate::page::{AppearanceSignal, PageDom, PreferenceStore};

pub type WebController = ThemeController<LocalStorage, MediaQuery, DocumentDom>;

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, ThemeError> {
        let window = web_sys::window().ok_or(ThemeError::StorageUnavailable)?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) => Err(ThemeError::StorageUnavailable),
            Err(err) => Err(ThemeError::Storage(describe(&err))),
        }
    }
}

impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> Result<Option<String>, ThemeError> {
        Self::storage()?
            .get_item(key)
            .map_err(|err| ThemeError::Storage(describe(&err)))
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|err| ThemeError::Storage(describe(&err)))
    }
}

/// `window.matchMedia`, evaluated on each call.
#[derive(Clone, Copy, Debug, Default)]
pub struct MediaQuery;

impl AppearanceSignal for MediaQuery {
    fn matches(&self, query: &str) -> Option<bool> {
        let window = web_sys::window()?;
        match window.match_media(query) {
            Ok(list) => list.map(|mq| mq.matches()),
            Err(err) => {
                log::debug!("matchMedia({query}) failed: {}", describe(&err));
                None
            }
        }
    }
}

/// The current `document`.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentDom;

impl DocumentDom {
    fn document() -> Option<web_sys::Document> {
        web_sys::window().and_then(|w| w.document())
    }
}

impl PageDom for DocumentDom {
    fn root_attribute(&self, name: &str) -> Option<String> {
        Self::document()?.document_element()?.get_attribute(name)
    }

    fn set_root_attribute(&mut self, name: &str, value: &str) -> Result<(), ThemeError> {
        let root = Self::document()
            .and_then(|doc| doc.document_element())
            .ok_or_else(|| ThemeError::Dom("no root element".to_owned()))?;
        root.set_attribute(name, value)
            .map_err(|err| ThemeError::Dom(describe(&err)))
    }

    fn set_label(&mut self, id: &str, text: &str) -> bool {
        match Self::document().and_then(|doc| doc.get_element_by_id(id)) {
            Some(el) => {
                el.set_text_content(Some(text));
                true
            }
            None => false,
        }
    }
}

/// Controller over the live browser collaborators.
pub fn controller(config: ThemeConfig) -> WebController {
    ThemeController::new(config, LocalStorage, MediaQuery, DocumentDom)
}

/// Build a controller over the browser, apply the initial theme, and wire the
/// toggle button's click handler when the button exists.
pub fn boot(config: ThemeConfig) -> Rc<RefCell<WebController>> {
    let controller = Rc::new(RefCell::new(controller(config)));
    let theme = controller.borrow_mut().init();
    log::info!("page theme: {theme}");

    let button_id = controller.borrow().config().button_id.clone();
    let Some(button) = DocumentDom::document().and_then(|doc| doc.get_element_by_id(&button_id))
    else {
        log::debug!("no #{button_id} element, toggle not wired");
        return controller;
    };

    let handler = {
        let controller = Rc::clone(&controller);
        Closure::<dyn FnMut()>::new(move || {
            controller.borrow_mut().toggle();
        })
    };
    if let Err(err) =
        button.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
    {
        log::warn!("failed to wire #{button_id}: {}", describe(&err));
    }
    // The button lives as long as the page; so does its listener.
    handler.forget();

    controller
}
