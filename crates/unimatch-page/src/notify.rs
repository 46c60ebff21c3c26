//! Toast notifications: creation, dismissal and timed expiry.
//!
//! A notification lives in the shared `.notifications-container` (created
//! lazily under `<body>`). It disappears when its delete button is pressed,
//! or after [`AUTO_DISMISS_MS`] it fades over [`FADE_MS`] and is removed.
//! Expiry timers are never cancelled; they no-op when the element has
//! already left the document.

use std::time::Duration;

use gloo_events::EventListener;
use gloo_timers::future::sleep;
use unimatch_core::notify::{AUTO_DISMISS_MS, FADE_MS, Severity};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, HtmlElement};

/// Raise a transient notification. Failure to build one is logged and
/// otherwise ignored; notifications must never take the page down.
pub fn notify(message: &str, severity: Severity) {
    let document = match crate::dom::document() {
        Ok(document) => document,
        Err(error) => {
            log::error!("notification dropped: {error}");
            return;
        }
    };
    let Some(notification) = build(&document, message, severity) else {
        log::error!("notification dropped: failed to build element");
        return;
    };
    schedule_expiry(notification);
}

/// Wire the notifications the server already rendered into the page: their
/// delete buttons dismiss them, and one shared timer sweeps the rest away.
pub(crate) fn install(document: &Document, listeners: &mut Vec<EventListener>) {
    for delete in crate::dom::query_all(document, ".notification .delete") {
        let Some(notification) = delete.parent_element() else {
            continue;
        };
        listeners.push(EventListener::new(&delete, "click", move |_event: &Event| {
            notification.remove();
        }));
    }

    let rendered = crate::dom::query_all(document, ".notification");
    if !rendered.is_empty() {
        spawn_local(async move {
            sleep(Duration::from_millis(AUTO_DISMISS_MS as u64)).await;
            for notification in &rendered {
                fade(notification);
            }
            sleep(Duration::from_millis(FADE_MS as u64)).await;
            for notification in rendered {
                if notification.is_connected() {
                    notification.remove();
                }
            }
        });
    }
}

fn build(document: &Document, message: &str, severity: Severity) -> Option<Element> {
    let container = container(document)?;

    let notification = document.create_element("div").ok()?;
    notification.set_class_name(&format!("notification {}", severity.class_name()));

    let delete = document.create_element("button").ok()?;
    delete.set_class_name("delete");
    notification.append_child(&delete).ok()?;

    let text = document.create_text_node(message);
    notification.append_child(&text).ok()?;
    container.append_child(&notification).ok()?;

    let dismissed = notification.clone();
    EventListener::once(&delete, "click", move |_event: &Event| {
        dismissed.remove();
    })
    .forget();

    Some(notification)
}

/// The shared container, created under `<body>` on first use.
fn container(document: &Document) -> Option<Element> {
    if let Ok(Some(existing)) = document.query_selector(".notifications-container") {
        return Some(existing);
    }
    let container = document.create_element("div").ok()?;
    container.set_class_name("notifications-container");
    document.body()?.append_child(&container).ok()?;
    Some(container)
}

fn schedule_expiry(notification: Element) {
    spawn_local(async move {
        sleep(Duration::from_millis(AUTO_DISMISS_MS as u64)).await;
        if !notification.is_connected() {
            return;
        }
        fade(&notification);
        sleep(Duration::from_millis(FADE_MS as u64)).await;
        if notification.is_connected() {
            notification.remove();
        }
    });
}

fn fade(notification: &Element) {
    if let Some(element) = notification.dyn_ref::<HtmlElement>() {
        let style = element.style();
        let _ = style.set_property("transition", &format!("opacity {}ms", FADE_MS));
        let _ = style.set_property("opacity", "0");
    }
}
