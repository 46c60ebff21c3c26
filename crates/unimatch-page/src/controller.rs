//! Controller lifecycle: one installation pass over the document, with the
//! resulting listener and tooltip handles parked for the page's lifetime.

use std::cell::RefCell;

use gloo_events::EventListener;
use web_sys::Document;

use crate::tooltip::Tooltip;
use crate::{compare, forms, nav, notify, range, save, score, tooltip};

pub(crate) struct PageController {
    _listeners: Vec<EventListener>,
    _tooltips: Vec<Tooltip>,
}

thread_local! {
    static CONTROLLER: RefCell<Option<PageController>> = const { RefCell::new(None) };
}

/// Install immediately if the document has already been parsed, otherwise
/// wait for `DOMContentLoaded`.
pub(crate) fn boot() {
    let document = match crate::dom::document() {
        Ok(document) => document,
        Err(error) => {
            log::error!("page controller not installed: {error}");
            return;
        }
    };
    if document.ready_state() == "loading" {
        let ready_document = document.clone();
        EventListener::once(&document, "DOMContentLoaded", move |_| {
            install(&ready_document);
        })
        .forget();
    } else {
        install(&document);
    }
}

/// Wire every page behavior against `document`. Components whose elements
/// are missing from the current page install as no-ops.
pub fn install(document: &Document) {
    let mut listeners = Vec::new();

    range::install(document, &mut listeners);
    nav::install(document, &mut listeners);
    forms::install(document, &mut listeners);
    compare::install(document, &mut listeners);
    notify::install(document, &mut listeners);
    save::install(document, &mut listeners);
    score::install(document);
    let tooltips = tooltip::install(document);

    log::debug!(
        "page controller installed: {} listeners, {} tooltips",
        listeners.len(),
        tooltips.len()
    );

    CONTROLLER.with(|slot| {
        *slot.borrow_mut() = Some(PageController {
            _listeners: listeners,
            _tooltips: tooltips,
        });
    });
}
