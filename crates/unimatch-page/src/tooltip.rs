//! Tooltip attachment. The tooltip widget itself is the page's vendor
//! script; this module only constructs one per flagged element and keeps
//! the handles alive.

use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{Document, Element};

#[wasm_bindgen]
extern "C" {
    /// `Tooltip` class provided by the page's vendor script.
    pub(crate) type Tooltip;

    #[wasm_bindgen(constructor)]
    fn new(element: &Element) -> Tooltip;
}

pub(crate) fn install(document: &Document) -> Vec<Tooltip> {
    let flagged = crate::dom::query_all(document, ".tooltip");
    if flagged.is_empty() {
        return Vec::new();
    }
    if !vendor_script_loaded() {
        log::warn!("tooltip elements present but no Tooltip constructor is loaded");
        return Vec::new();
    }
    flagged.iter().map(Tooltip::new).collect()
}

fn vendor_script_loaded() -> bool {
    let Ok(window) = crate::dom::window() else {
        return false;
    };
    js_sys::Reflect::get(&window, &"Tooltip".into())
        .map(|value| value.is_function())
        .unwrap_or(false)
}
