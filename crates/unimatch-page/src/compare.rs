//! Comparison selection gating: the compare submit control is usable only
//! while enough universities are ticked.
//!
//! Historically this behavior was wired twice with diverging side effects
//! (one copy toggled a `disabled` class, the other an `active` class). It is
//! implemented once here, driven by the shared predicate, and keeps both
//! visual effects in sync.

use gloo_events::EventListener;
use unimatch_core::compare::submit_enabled;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlButtonElement};

pub(crate) fn install(document: &Document, listeners: &mut Vec<EventListener>) {
    let Some(form) = document.get_element_by_id("compare-form") else {
        return;
    };
    let Ok(Some(submit)) = form.query_selector("button[type=\"submit\"]") else {
        return;
    };

    for checkbox in crate::dom::query_all_within(&form, "input[type=\"checkbox\"]") {
        let gated_form = form.clone();
        let gated_submit = submit.clone();
        listeners.push(EventListener::new(&checkbox, "change", move |_event: &Event| {
            refresh(&gated_form, &gated_submit);
        }));
    }

    // Initial state.
    refresh(&form, &submit);
}

fn refresh(form: &Element, submit: &Element) {
    apply_gating(submit, submit_enabled(checked_count(form)));
}

fn checked_count(form: &Element) -> usize {
    form.query_selector_all("input[type=\"checkbox\"]:checked")
        .map(|list| list.length() as usize)
        .unwrap_or(0)
}

fn apply_gating(submit: &Element, enabled: bool) {
    if let Some(button) = submit.dyn_ref::<HtmlButtonElement>() {
        button.set_disabled(!enabled);
    }
    let classes = submit.class_list();
    if enabled {
        let _ = classes.remove_1("disabled");
        let _ = classes.add_1("active");
    } else {
        let _ = classes.add_1("disabled");
        let _ = classes.remove_1("active");
    }
}
