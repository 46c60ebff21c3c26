//! Save-university endpoint model.

use serde::Deserialize;

pub const SUCCESS_MESSAGE: &str = "University saved to your list!";
pub const GENERIC_ERROR_MESSAGE: &str = "Error saving university";
pub const SAVED_LABEL: &str = "Saved";

/// Response body of `POST /save_university/{id}`.
#[derive(Debug, Deserialize)]
pub struct SaveResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

impl SaveResponse {
    /// Message to surface on an application-level failure.
    pub fn error_message(&self) -> &str {
        self.message.as_deref().unwrap_or(GENERIC_ERROR_MESSAGE)
    }
}

/// Endpoint path for a given university identifier, substituted verbatim.
pub fn endpoint(university_id: &str) -> String {
    format!("/save_university/{university_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_success_response() {
        let response: SaveResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(response.success);
        assert!(response.message.is_none());
    }

    #[test]
    fn decodes_failure_with_server_message() {
        let response: SaveResponse =
            serde_json::from_str(r#"{"success": false, "message": "Already saved"}"#).unwrap();
        assert!(!response.success);
        assert_eq!(response.error_message(), "Already saved");
    }

    #[test]
    fn failure_without_message_falls_back() {
        let response: SaveResponse = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert_eq!(response.error_message(), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn endpoint_substitutes_id_verbatim() {
        assert_eq!(endpoint("42"), "/save_university/42");
        assert_eq!(endpoint("mit"), "/save_university/mit");
    }
}
