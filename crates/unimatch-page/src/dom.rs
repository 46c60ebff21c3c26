//! Typed DOM accessors shared by the behavior modules.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, Window};

pub(crate) fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "window is unavailable".to_string())
}

pub(crate) fn document() -> Result<Document, String> {
    window()?
        .document()
        .ok_or_else(|| "document is unavailable".to_string())
}

/// All elements under the document matching `selector`. An invalid selector
/// is logged and yields nothing.
pub(crate) fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    match document.query_selector_all(selector) {
        Ok(list) => collect_elements(&list),
        Err(_) => {
            log::warn!("invalid selector: {selector}");
            Vec::new()
        }
    }
}

/// All elements under `root` matching `selector`.
pub(crate) fn query_all_within(root: &Element, selector: &str) -> Vec<Element> {
    match root.query_selector_all(selector) {
        Ok(list) => collect_elements(&list),
        Err(_) => {
            log::warn!("invalid selector: {selector}");
            Vec::new()
        }
    }
}

fn collect_elements(list: &web_sys::NodeList) -> Vec<Element> {
    let mut elements = Vec::with_capacity(list.length() as usize);
    for index in 0..list.length() {
        if let Some(element) = list.get(index).and_then(|node| node.dyn_into::<Element>().ok()) {
            elements.push(element);
        }
    }
    elements
}

/// Current value of a form field, for the element kinds that carry one.
pub(crate) fn field_value(field: &Element) -> Option<String> {
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        Some(input.value())
    } else if let Some(area) = field.dyn_ref::<HtmlTextAreaElement>() {
        Some(area.value())
    } else if let Some(select) = field.dyn_ref::<HtmlSelectElement>() {
        Some(select.value())
    } else {
        None
    }
}
