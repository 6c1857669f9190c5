use thiserror::Error;

/// Shown when a rating is missing or outside 1..=5.
pub const INVALID_RATING_MESSAGE: &str = "Please enter a valid rating (1-5)";
/// Shown for transport failures and undecodable responses.
pub const NETWORK_ERROR_MESSAGE: &str = "An error occurred. Please try again.";

/// Everything that can go wrong between a user action and the review endpoints.
///
/// None of these are fatal: each one ends up as inline text in the modal or
/// as an error toast, and the user retries or cancels.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReviewError {
    #[error("rating must be an integer between 1 and 5")]
    InvalidRating,

    #[error("a review request is already in flight")]
    AlreadyInFlight,

    #[error("server rejected the request: {}", message.as_deref().unwrap_or("no message"))]
    Rejected { message: Option<String> },

    #[error("network error: {0}")]
    Network(String),

    #[error("could not decode server response: {0}")]
    Decode(String),

    #[error("trigger element is missing the `{0}` attribute")]
    MissingAttribute(&'static str),
}

impl ReviewError {
    /// Text to put in front of the user.
    ///
    /// `fallback` is used when the server rejected the request without
    /// saying why.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ReviewError::InvalidRating => INVALID_RATING_MESSAGE.to_string(),
            ReviewError::Rejected { message } => message
                .as_deref()
                .filter(|m| !m.trim().is_empty())
                .unwrap_or(fallback)
                .to_string(),
            ReviewError::Network(_) | ReviewError::Decode(_) => NETWORK_ERROR_MESSAGE.to_string(),
            ReviewError::AlreadyInFlight | ReviewError::MissingAttribute(_) => fallback.to_string(),
        }
    }
}
