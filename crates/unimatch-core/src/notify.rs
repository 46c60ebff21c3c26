//! Notification severities and lifetime constants.

/// How long a notification stays fully visible before it starts fading.
pub const AUTO_DISMISS_MS: u32 = 5_000;
/// Length of the opacity fade that precedes removal.
pub const FADE_MS: u32 = 1_000;

/// Severity tag of a notification, mapped onto an `is-*` class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn class_name(self) -> &'static str {
        match self {
            Severity::Info => "is-info",
            Severity::Success => "is-success",
            Severity::Error => "is-error",
        }
    }
}
