//! Navigation toggles: the fixed mobile nav toggle and the per-target
//! burger variant.

use gloo_events::EventListener;
use web_sys::{Document, Event};

pub(crate) fn install(document: &Document, listeners: &mut Vec<EventListener>) {
    // Fixed-target toggle: .nav-toggle flips .main-nav.
    if let Ok(Some(toggle)) = document.query_selector(".nav-toggle") {
        if let Ok(Some(nav)) = document.query_selector(".main-nav") {
            listeners.push(EventListener::new(&toggle, "click", move |_event: &Event| {
                let _ = nav.class_list().toggle("active");
            }));
        }
    }

    // Burger variant: each .navbar-burger names its menu in data-target and
    // flips is-active on both itself and the menu.
    for burger in crate::dom::query_all(document, ".navbar-burger") {
        let Some(target_id) = burger.get_attribute("data-target") else {
            continue;
        };
        let Some(target) = document.get_element_by_id(&target_id) else {
            continue;
        };
        let toggled_burger = burger.clone();
        listeners.push(EventListener::new(&burger, "click", move |_event: &Event| {
            let _ = toggled_burger.class_list().toggle("is-active");
            let _ = target.class_list().toggle("is-active");
        }));
    }
}
