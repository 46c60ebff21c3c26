//! The asynchronous "save university" action.

use gloo_events::{EventListener, EventListenerOptions, EventListenerPhase};
use gloo_net::http::Request;
use unimatch_core::notify::Severity;
use unimatch_core::save::{self, SaveResponse};
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event};

use crate::notify::notify;

pub(crate) fn install(document: &Document, listeners: &mut Vec<EventListener>) {
    for button in crate::dom::query_all(document, ".save-university") {
        let Some(university_id) = button.get_attribute("data-id") else {
            continue;
        };
        let clicked_button = button.clone();
        listeners.push(EventListener::new_with_options(
            &button,
            "click",
            EventListenerOptions {
                phase: EventListenerPhase::Bubble,
                passive: false,
            },
            move |event: &Event| {
                event.prevent_default();
                let id = university_id.clone();
                let button = clicked_button.clone();
                spawn_local(async move {
                    save_university(id, button).await;
                });
            },
        ));
    }
}

/// Issue the save request and reflect the outcome: flip the button on
/// confirmed success, otherwise raise an error notification. The button has
/// no in-flight state; double activation is not guarded.
async fn save_university(university_id: String, button: Element) {
    match request_save(&university_id).await {
        Ok(response) if response.success => {
            mark_saved(&button);
            notify(save::SUCCESS_MESSAGE, Severity::Success);
        }
        Ok(response) => {
            notify(response.error_message(), Severity::Error);
        }
        Err(error) => {
            log::error!("saving university {university_id} failed: {error}");
            notify(save::GENERIC_ERROR_MESSAGE, Severity::Error);
        }
    }
}

async fn request_save(university_id: &str) -> Result<SaveResponse, gloo_net::Error> {
    let response = Request::post(&save::endpoint(university_id))
        .header("Content-Type", "application/json")
        .header("X-Requested-With", "XMLHttpRequest")
        .send()
        .await?;
    response.json::<SaveResponse>().await
}

/// Flip the control from the actionable to the confirmed style: info color,
/// "Saved" label, checkmark glyph.
fn mark_saved(button: &Element) {
    let classes = button.class_list();
    let _ = classes.add_1("is-info");
    let _ = classes.remove_1("is-success");

    if let Ok(Some(label)) = button.query_selector("span:not(.icon)") {
        label.set_text_content(Some(save::SAVED_LABEL));
    }
    if let Ok(Some(icon)) = button.query_selector(".fas") {
        let icon_classes = icon.class_list();
        let _ = icon_classes.remove_1("fa-bookmark");
        let _ = icon_classes.add_1("fa-check");
    }
}
