//! Comparison form gating.

/// Minimum number of universities that make a comparison meaningful.
pub const MIN_SELECTION: usize = 2;

/// The compare submit control is enabled iff at least [`MIN_SELECTION`]
/// checkboxes are checked.
pub fn submit_enabled(checked: usize) -> bool {
    checked >= MIN_SELECTION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn needs_at_least_two_selections() {
        assert!(!submit_enabled(0));
        assert!(!submit_enabled(1));
        assert!(submit_enabled(2));
        assert!(submit_enabled(3));
        assert!(submit_enabled(4));
    }
}
