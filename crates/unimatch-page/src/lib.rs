//! Page behavior controller for the UniMatch university-search pages.
//!
//! The server renders the HTML; this crate attaches the client-side behavior
//! to it once the DOM is ready: slider value echoing, navigation toggles,
//! form validation, comparison gating, the asynchronous save action, toast
//! notifications, score visualization and tooltip attachment.
//!
//! Every component installs independently against the selectors the page
//! templates own. A page section that is absent is skipped, never an error.

#[cfg(target_arch = "wasm32")]
mod compare;
#[cfg(target_arch = "wasm32")]
mod controller;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod forms;
#[cfg(target_arch = "wasm32")]
mod nav;
#[cfg(target_arch = "wasm32")]
mod notify;
#[cfg(target_arch = "wasm32")]
mod range;
#[cfg(target_arch = "wasm32")]
mod save;
#[cfg(target_arch = "wasm32")]
mod score;
#[cfg(target_arch = "wasm32")]
mod tooltip;

#[cfg(target_arch = "wasm32")]
pub use controller::install;
#[cfg(target_arch = "wasm32")]
pub use notify::notify;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::wasm_bindgen;

/// Module entry point: set up diagnostics and install the controller as soon
/// as the document is ready.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    controller::boot();
}
