use crate::error::ReviewError;
use crate::models::review::{ReviewEndpoint, ReviewPayload, ReviewRequest};

/// Whether the modal creates a new review or edits an existing one.
///
/// The review id only exists in edit mode.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ModalMode {
    #[default]
    Create,
    Edit { review_id: String },
}

impl ModalMode {
    /// Value of the hidden `modal_mode` input.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModalMode::Create => "create",
            ModalMode::Edit { .. } => "edit",
        }
    }

    pub fn review_id(&self) -> Option<&str> {
        match self {
            ModalMode::Create => None,
            ModalMode::Edit { review_id } => Some(review_id),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ModalMode::Create => "Rate & Review",
            ModalMode::Edit { .. } => "Edit Review",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            ModalMode::Create => "Submit Review",
            ModalMode::Edit { .. } => "Update Review",
        }
    }
}

/// Form values of one modal session.
///
/// `rating` holds the raw input text so an empty or out-of-range value can be
/// reported instead of silently coerced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalSession {
    pub mode: ModalMode,
    pub event_id: String,
    pub event_name: String,
    pub rating: String,
    pub review_text: String,
}

impl ModalSession {
    pub fn create(event_id: impl Into<String>, event_name: impl Into<String>) -> Self {
        Self {
            mode: ModalMode::Create,
            event_id: event_id.into(),
            event_name: event_name.into(),
            ..Self::default()
        }
    }

    pub fn edit(
        review_id: impl Into<String>,
        event_id: impl Into<String>,
        event_name: impl Into<String>,
        rating: impl Into<String>,
        review_text: impl Into<String>,
    ) -> Self {
        Self {
            mode: ModalMode::Edit {
                review_id: review_id.into(),
            },
            event_id: event_id.into(),
            event_name: event_name.into(),
            rating: rating.into(),
            review_text: review_text.into(),
        }
    }

    /// Parses the rating, accepting only integers in 1..=5.
    pub fn validated_rating(&self) -> Result<u8, ReviewError> {
        parse_rating(&self.rating)
    }

    /// Validates the form and picks the endpoint for the current mode.
    /// An edit without a review id is refused rather than posted.
    pub fn to_request(&self) -> Result<ReviewRequest, ReviewError> {
        let rating = self.validated_rating()?;
        let endpoint = match &self.mode {
            ModalMode::Create => ReviewEndpoint::Create {
                event_id: self.event_id.clone(),
            },
            ModalMode::Edit { review_id } if review_id.trim().is_empty() => {
                return Err(ReviewError::MissingAttribute("data-review-id"));
            }
            ModalMode::Edit { review_id } => ReviewEndpoint::Update {
                review_id: review_id.clone(),
            },
        };
        Ok(ReviewRequest {
            endpoint,
            payload: Some(ReviewPayload {
                rating,
                review_text: self.review_text.clone(),
            }),
        })
    }
}

/// Parses a user-entered rating.
pub fn parse_rating(raw: &str) -> Result<u8, ReviewError> {
    match raw.trim().parse::<u8>() {
        Ok(rating) if (1..=5).contains(&rating) => Ok(rating),
        _ => Err(ReviewError::InvalidRating),
    }
}

/// Lifecycle of a single submission.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    InFlight,
    SucceededPendingReload,
    Failed,
}

impl SubmissionPhase {
    /// True while another submit must be refused.
    pub fn is_busy(self) -> bool {
        matches!(self, SubmissionPhase::InFlight | SubmissionPhase::SucceededPendingReload)
    }

    /// Moves to `InFlight`, refusing while a previous request is unresolved.
    pub fn begin(&mut self) -> Result<(), ReviewError> {
        if self.is_busy() {
            return Err(ReviewError::AlreadyInFlight);
        }
        *self = SubmissionPhase::InFlight;
        Ok(())
    }

    pub fn finish(&mut self, succeeded: bool) {
        *self = if succeeded {
            SubmissionPhase::SucceededPendingReload
        } else {
            SubmissionPhase::Failed
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_clears_previous_edit_fields() {
        let mut session = ModalSession::edit("7", "3", "Marathon", "4", "Good");
        assert_eq!(session.mode.review_id(), Some("7"));

        session = ModalSession::create("42", "Concert");
        assert_eq!(session.mode, ModalMode::Create);
        assert_eq!(session.mode.as_str(), "create");
        assert_eq!(session.mode.review_id(), None);
        assert_eq!(session.event_id, "42");
        assert_eq!(session.event_name, "Concert");
        assert!(session.rating.is_empty());
        assert!(session.review_text.is_empty());
    }

    #[test]
    fn test_edit_sets_all_fields() {
        let session = ModalSession::edit("7", "3", "Marathon", "3", "Decent route");
        assert_eq!(session.mode.as_str(), "edit");
        assert_eq!(session.mode.review_id(), Some("7"));
        assert_eq!(session.mode.title(), "Edit Review");
        assert_eq!(session.mode.submit_label(), "Update Review");
        assert_eq!(session.rating, "3");
        assert_eq!(session.review_text, "Decent route");
    }

    #[test]
    fn test_create_wording() {
        let session = ModalSession::create("42", "Concert");
        assert_eq!(session.mode.title(), "Rate & Review");
        assert_eq!(session.mode.submit_label(), "Submit Review");
    }

    #[test]
    fn test_parse_rating_bounds() {
        for ok in ["1", "3", "5", " 4 "] {
            assert!(parse_rating(ok).is_ok(), "{ok} should be valid");
        }
        for bad in ["", "0", "6", "-1", "2.5", "five", "300"] {
            assert_eq!(parse_rating(bad), Err(ReviewError::InvalidRating), "{bad} should be invalid");
        }
    }

    #[test]
    fn test_create_request_targets_event() {
        let mut session = ModalSession::create("42", "Concert");
        session.rating = "5".into();
        session.review_text = "Great show".into();

        let request = session.to_request().unwrap();
        assert_eq!(request.endpoint, ReviewEndpoint::Create { event_id: "42".into() });
        assert_eq!(
            request.payload,
            Some(ReviewPayload {
                rating: 5,
                review_text: "Great show".into()
            })
        );
    }

    #[test]
    fn test_edit_request_targets_review() {
        let session = ModalSession::edit("7", "3", "Marathon", "2", "");
        let request = session.to_request().unwrap();
        assert_eq!(request.endpoint, ReviewEndpoint::Update { review_id: "7".into() });
        assert_eq!(request.endpoint.path(""), "/review/7/edit/");
    }

    #[test]
    fn test_invalid_rating_yields_no_request() {
        let mut session = ModalSession::edit("7", "3", "Marathon", "3", "");
        session.rating = "0".into();
        assert_eq!(session.to_request(), Err(ReviewError::InvalidRating));
    }

    #[test]
    fn test_edit_without_review_id_yields_no_request() {
        let session = ModalSession::edit("", "3", "Marathon", "4", "Hilly");
        assert_eq!(
            session.to_request(),
            Err(ReviewError::MissingAttribute("data-review-id"))
        );

        let blank = ModalSession::edit("  ", "3", "Marathon", "4", "Hilly");
        assert!(blank.to_request().is_err());
    }

    #[test]
    fn test_phase_blocks_double_submit() {
        let mut phase = SubmissionPhase::default();
        assert!(phase.begin().is_ok());
        assert_eq!(phase.begin(), Err(ReviewError::AlreadyInFlight));

        phase.finish(false);
        assert_eq!(phase, SubmissionPhase::Failed);
        assert!(phase.begin().is_ok());

        phase.finish(true);
        assert_eq!(phase, SubmissionPhase::SucceededPendingReload);
        assert_eq!(phase.begin(), Err(ReviewError::AlreadyInFlight));
    }
}
