//! Pure page logic for the UniMatch web client.
//!
//! Everything here is DOM-free so it compiles and tests on native targets.
//! The `unimatch-page` crate wires these rules to the browser.

pub mod compare;
pub mod notify;
pub mod save;
pub mod score;
pub mod validate;
