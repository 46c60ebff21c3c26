//! Field validation rules for the student profile forms.
//!
//! All parsing is strict: a field value must be a complete number, not a
//! numeric prefix. `"12.5"` is not a valid SAT score even though a JS-style
//! `parseInt` would happily read it as `12`.

pub const REQUIRED_MESSAGE: &str = "This field is required";
pub const GPA_MESSAGE: &str = "GPA must be between 0 and 4.0";
pub const SAT_MESSAGE: &str = "SAT score must be between 400 and 1600";
pub const BUDGET_MESSAGE: &str = "Budget must be a positive number";

/// Validation outcome for a single form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldStatus {
    /// No rule applied: the field is optional and was left empty.
    Unchecked,
    Valid,
    Invalid(&'static str),
}

impl FieldStatus {
    pub fn is_invalid(self) -> bool {
        matches!(self, FieldStatus::Invalid(_))
    }
}

/// A required field fails when its trimmed value is empty.
pub fn check_required(raw: &str) -> FieldStatus {
    if raw.trim().is_empty() {
        FieldStatus::Invalid(REQUIRED_MESSAGE)
    } else {
        FieldStatus::Valid
    }
}

/// GPA is optional; when present it must be a number in `[0, 4.0]`.
pub fn check_gpa(raw: &str) -> FieldStatus {
    let raw = raw.trim();
    if raw.is_empty() {
        return FieldStatus::Unchecked;
    }
    match parse_number(raw) {
        Some(gpa) if (0.0..=4.0).contains(&gpa) => FieldStatus::Valid,
        _ => FieldStatus::Invalid(GPA_MESSAGE),
    }
}

/// SAT score is optional; when present it must be an integer in `[400, 1600]`.
pub fn check_sat(raw: &str) -> FieldStatus {
    let raw = raw.trim();
    if raw.is_empty() {
        return FieldStatus::Unchecked;
    }
    match parse_integer(raw) {
        Some(sat) if (400..=1600).contains(&sat) => FieldStatus::Valid,
        _ => FieldStatus::Invalid(SAT_MESSAGE),
    }
}

/// Budget is optional; when present it must be a positive integer.
pub fn check_budget(raw: &str) -> FieldStatus {
    let raw = raw.trim();
    if raw.is_empty() {
        return FieldStatus::Unchecked;
    }
    match parse_integer(raw) {
        Some(budget) if budget > 0 => FieldStatus::Valid,
        _ => FieldStatus::Invalid(BUDGET_MESSAGE),
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|number| number.is_finite())
}

fn parse_integer(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok()
}
