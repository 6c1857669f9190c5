// src/models/review.rs
use serde::{Deserialize, Deserializer, Serialize};
use crate::error::ReviewError;

/// JSON body sent to the create and edit endpoints.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ReviewPayload {
    pub rating: u8,          // 1..=5, validated before sending
    pub review_text: String, // may be empty
}

/// Review as echoed back by the create endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ReviewSummary {
    pub user: String,
    pub event: String,
    pub rating: u8,
    pub review_text: String,
    pub created_at: String, // preformatted by the server, e.g. "26 Oct 2025"
}

/// A review as listed on an event page, with the ids needed to edit or delete it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ReviewListing {
    pub id: String,
    pub event_id: String,
    pub event_name: String,
    pub user: String,
    pub rating: u8,
    pub review_text: String,
    pub created_at: String,
    #[serde(default)]
    pub editable: bool, // true when the viewer wrote it
}

/// Response shape shared by the create, edit and delete endpoints.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    // informational only; an unexpected shape must not fail the response
    #[serde(default, deserialize_with = "lenient_summary")]
    pub review: Option<ReviewSummary>,
}

fn lenient_summary<'de, D>(deserializer: D) -> Result<Option<ReviewSummary>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

impl ReviewResponse {
    /// Turns a `success: false` body into a [`ReviewError::Rejected`],
    /// preferring `error` over `message`.
    pub fn into_result(self) -> Result<ReviewResponse, ReviewError> {
        if self.success {
            Ok(self)
        } else {
            Err(ReviewError::Rejected {
                message: self.error.or(self.message),
            })
        }
    }
}

/// The three review endpoints. Create and edit go through the same dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewEndpoint {
    Create { event_id: String },
    Update { review_id: String },
    Delete { review_id: String },
}

impl ReviewEndpoint {
    /// Path relative to `base`, with ids percent-encoded.
    pub fn path(&self, base: &str) -> String {
        let base = base.trim_end_matches('/');
        match self {
            ReviewEndpoint::Create { event_id } => {
                format!("{}/review/create/{}/", base, urlencoding::encode(event_id))
            }
            ReviewEndpoint::Update { review_id } => {
                format!("{}/review/{}/edit/", base, urlencoding::encode(review_id))
            }
            ReviewEndpoint::Delete { review_id } => {
                format!("{}/review/{}/delete/", base, urlencoding::encode(review_id))
            }
        }
    }

    /// Fallback text when the server rejects without a message.
    pub fn failure_fallback(&self) -> &'static str {
        match self {
            ReviewEndpoint::Delete { .. } => "Failed to delete review",
            _ => "Failed to submit review",
        }
    }

    /// Confirmation shown once the server accepted the request.
    pub fn success_message(&self) -> &'static str {
        match self {
            ReviewEndpoint::Create { .. } => "Review posted successfully!",
            ReviewEndpoint::Update { .. } => "Review updated successfully!",
            ReviewEndpoint::Delete { .. } => "Review deleted successfully!",
        }
    }
}

/// A fully validated request, ready to hand to [`crate::api::send_review`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRequest {
    pub endpoint: ReviewEndpoint,
    pub payload: Option<ReviewPayload>, // None for deletes
}

impl ReviewRequest {
    pub fn delete(review_id: impl Into<String>) -> Self {
        Self {
            endpoint: ReviewEndpoint::Delete {
                review_id: review_id.into(),
            },
            payload: None,
        }
    }
}
