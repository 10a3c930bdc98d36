// crates/distortion-app/src/error.rs
// Failure kinds for one submission

use thiserror::Error;

/// Generic status text when an error carries no message
pub const UNEXPECTED_ERROR: &str = "Unexpected error";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    /// Input was empty after trimming; never reaches the network
    #[error("Please enter some text.")]
    Validation,

    #[error("Enter the API base URL (api_endpoint output).")]
    Configuration,

    /// Request could not be completed (DNS, CORS, connection reset...)
    #[error("{0}")]
    Network(String),

    #[error("API error {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Invalid JSON response: {0}")]
    MalformedResponse(String),
}

impl ClassifyError {
    /// Text for the status region
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            UNEXPECTED_ERROR.to_string()
        } else {
            message
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_message() {
        let err = ClassifyError::Http {
            status: 500,
            body: "internal error".to_string(),
        };
        assert_eq!(err.user_message(), "API error 500: internal error");
    }

    #[test]
    fn test_empty_network_message_is_generic() {
        assert_eq!(ClassifyError::Network(String::new()).user_message(), UNEXPECTED_ERROR);
        assert_eq!(
            ClassifyError::Network("Failed to fetch".into()).user_message(),
            "Failed to fetch"
        );
    }

    #[test]
    fn test_local_messages() {
        assert_eq!(ClassifyError::Validation.user_message(), "Please enter some text.");
        assert!(ClassifyError::Configuration.user_message().starts_with("Enter the API base URL"));
    }
}
