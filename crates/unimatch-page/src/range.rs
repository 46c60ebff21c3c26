//! Range-input echo: mirror each slider's value into its paired `<output>`.

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlInputElement};

pub(crate) fn install(document: &Document, listeners: &mut Vec<EventListener>) {
    for element in crate::dom::query_all(document, "input[type=\"range\"]") {
        let Ok(input) = element.dyn_into::<HtmlInputElement>() else {
            continue;
        };
        let id = input.id();
        if id.is_empty() {
            continue;
        }
        let Ok(Some(output)) = document.query_selector(&format!("output[for=\"{id}\"]")) else {
            continue;
        };

        // Initial value, then echo on every input event.
        output.set_text_content(Some(&input.value()));
        let echo_input = input.clone();
        let echo_output = output.clone();
        listeners.push(EventListener::new(&input, "input", move |_event: &Event| {
            echo_output.set_text_content(Some(&echo_input.value()));
        }));
    }
}
