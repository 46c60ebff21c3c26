//! Submit-time validation for forms flagged with `data-validate`.
//!
//! The whole form is re-validated on every submit attempt. A failing field
//! gets an `error` class and exactly one `.form-error` message appended to
//! its container; a passing field has both cleared. Any failure cancels the
//! native submit.

use gloo_events::{EventListener, EventListenerOptions, EventListenerPhase};
use unimatch_core::validate::{self, FieldStatus};
use web_sys::{Document, Element, Event};

pub(crate) fn install(document: &Document, listeners: &mut Vec<EventListener>) {
    for form in crate::dom::query_all(document, "form[data-validate]") {
        let validated_form = form.clone();
        listeners.push(EventListener::new_with_options(
            &form,
            "submit",
            EventListenerOptions {
                phase: EventListenerPhase::Bubble,
                passive: false,
            },
            move |event: &Event| {
                if !validate_form(&validated_form) {
                    event.prevent_default();
                }
            },
        ));
    }
}

/// Run every rule against `form`, render the per-field outcomes and report
/// whether the submit may proceed.
fn validate_form(form: &Element) -> bool {
    let mut all_valid = true;

    for field in crate::dom::query_all_within(form, "[required]") {
        let value = crate::dom::field_value(&field).unwrap_or_default();
        let status = validate::check_required(&value);
        all_valid &= !status.is_invalid();
        render_status(&field, status);
    }

    let named_rules: [(&str, fn(&str) -> FieldStatus); 3] = [
        ("input[name=\"gpa\"]", validate::check_gpa),
        ("input[name=\"sat_score\"]", validate::check_sat),
        ("input[name=\"budget\"]", validate::check_budget),
    ];
    for (selector, rule) in named_rules {
        let Ok(Some(field)) = form.query_selector(selector) else {
            continue;
        };
        let value = crate::dom::field_value(&field).unwrap_or_default();
        let status = rule(&value);
        all_valid &= !status.is_invalid();
        if status == FieldStatus::Unchecked {
            // Empty and optional: drop any stale message from an earlier
            // attempt. A required field was already judged by the required
            // pass; leave that verdict alone.
            if !field.has_attribute("required") {
                clear_error(&field);
            }
            continue;
        }
        render_status(&field, status);
    }

    all_valid
}

fn render_status(field: &Element, status: FieldStatus) {
    match status {
        FieldStatus::Invalid(message) => show_error(field, message),
        FieldStatus::Valid | FieldStatus::Unchecked => clear_error(field),
    }
}

/// Attach one `.form-error` message right after `field`, replacing any prior
/// message for that field.
fn show_error(field: &Element, message: &str) {
    clear_error(field);
    let _ = field.class_list().add_1("error");
    let (Some(parent), Some(document)) = (field.parent_element(), field.owner_document()) else {
        return;
    };
    let Ok(error) = document.create_element("div") else {
        return;
    };
    error.set_class_name("form-error");
    error.set_text_content(Some(message));
    let _ = parent.append_child(&error);
}

fn clear_error(field: &Element) {
    let _ = field.class_list().remove_1("error");
    if let Some(parent) = field.parent_element() {
        if let Ok(Some(prior)) = parent.query_selector(".form-error") {
            prior.remove();
        }
    }
}
