//! Errors produced by the StyleMate API client.

use thiserror::Error;

use crate::copy;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid API URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Server responded with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Response is missing `{0}`")]
    MissingField(&'static str),

    #[error("Request rejected by server: {}", rejection_text(.message))]
    Rejected { message: Option<String> },
}

impl ApiError {
    /// Text shown in the error region when a recommendation request fails.
    ///
    /// A non-blank server-supplied rejection message is shown verbatim;
    /// everything else gets the generic copy.
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected { message: Some(message) } if !message.trim().is_empty() => {
                message.clone()
            }
            Self::Rejected { .. } => copy::RECOMMENDATION_FAILED.to_string(),
            other => format!("{}{}", copy::RECOMMENDATION_ERROR_PREFIX, other),
        }
    }

    /// Whether the server answered but declined the request.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

fn rejection_text(message: &Option<String>) -> &str {
    message.as_deref().unwrap_or("no message")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_with_message_is_shown_verbatim() {
        let err = ApiError::Rejected { message: Some("No items found".into()) };
        assert_eq!(err.user_message(), "No items found");
        assert!(err.is_rejection());
    }

    #[test]
    fn rejection_without_message_uses_fallback() {
        let err = ApiError::Rejected { message: None };
        assert_eq!(err.user_message(), "Gagal mendapatkan rekomendasi");
    }

    #[test]
    fn blank_rejection_message_uses_fallback() {
        let err = ApiError::Rejected { message: Some(String::new()) };
        assert_eq!(err.user_message(), "Gagal mendapatkan rekomendasi");

        let err = ApiError::Rejected { message: Some("  ".into()) };
        assert_eq!(err.user_message(), "Gagal mendapatkan rekomendasi");
    }

    #[test]
    fn connectivity_errors_include_raw_text() {
        let err = ApiError::Status { status: 502, body: "Bad Gateway".into() };
        let msg = err.user_message();

        assert!(msg.starts_with("Terjadi kesalahan saat mengambil rekomendasi: "));
        assert!(msg.contains("502"));
        assert!(!err.is_rejection());
    }
}
