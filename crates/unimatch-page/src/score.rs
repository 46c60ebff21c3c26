//! Score visualization: tier the score circles by value and color the
//! component bars by position.

use unimatch_core::score::{bar_color, tier_for_text};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

pub(crate) fn install(document: &Document) {
    for circle in crate::dom::query_all(document, ".score-circle") {
        let tier = tier_for_text(&circle.text_content().unwrap_or_default());
        let _ = circle.remove_attribute("data-score");
        let _ = circle.set_attribute("data-score", tier.label());
        if let Some(element) = circle.dyn_ref::<HtmlElement>() {
            let _ = element.style().set_property("background-color", tier.color());
        }
    }

    // Bars are colored cyclically by position, not by value.
    for (index, bar) in crate::dom::query_all(document, ".score-fill").iter().enumerate() {
        if let Some(element) = bar.dyn_ref::<HtmlElement>() {
            let _ = element.style().set_property("background-color", bar_color(index));
        }
    }
}
