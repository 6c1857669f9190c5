//! HTTP calls to the review endpoints.
//!
//! Every call is a POST carrying the anti-forgery token and the
//! `X-Requested-With` marker the server uses to recognise AJAX requests.
//! Create and edit send a JSON [`ReviewPayload`](crate::models::review::ReviewPayload);
//! delete sends no body.

use gloo_net::http::{Request, RequestBuilder};
use leptos::logging::{error, log};

use crate::config::ReviewConfig;
use crate::error::ReviewError;
use crate::models::review::{ReviewRequest, ReviewResponse};

/// Decodes a response body. Non-2xx statuses are decoded too, because the
/// server reports rejections as `{"success": false, ...}` with a 4xx status.
pub fn decode_response(status: u16, body: &str) -> Result<ReviewResponse, ReviewError> {
    match serde_json::from_str::<ReviewResponse>(body) {
        Ok(response) => response.into_result(),
        Err(err) => Err(ReviewError::Decode(format!("status {}: {}", status, err))),
    }
}

fn builder(request: &ReviewRequest, config: &ReviewConfig, csrf_token: &str) -> RequestBuilder {
    let url = request.endpoint.path(&config.base_path);
    Request::post(&url)
        .header(&config.csrf_header, csrf_token)
        .header("X-Requested-With", "XMLHttpRequest")
}

/// Sends `request` and maps the outcome onto [`ReviewError`].
pub async fn send_review(
    request: &ReviewRequest,
    config: &ReviewConfig,
    csrf_token: &str,
) -> Result<ReviewResponse, ReviewError> {
    let url = request.endpoint.path(&config.base_path);
    log!("[API] POST {}", url);

    let builder = builder(request, config, csrf_token);
    let sent = match &request.payload {
        Some(payload) => {
            let req = builder
                .json(payload)
                .map_err(|e| ReviewError::Network(e.to_string()))?;
            req.send().await
        }
        None => builder.send().await,
    };

    let response = sent.map_err(|e| {
        error!("[API] Request to {} failed: {}", url, e);
        ReviewError::Network(e.to_string())
    })?;

    let status = response.status();
    let body = response.text().await.map_err(|e| {
        error!("[API] Could not read body from {}: {}", url, e);
        ReviewError::Network(e.to_string())
    })?;

    let result = decode_response(status, &body);
    match &result {
        Ok(resp) => {
            if let Some(review) = &resp.review {
                log!("[API] {} accepted, review for {} rated {}", url, review.event, review.rating);
            } else {
                log!("[API] {} accepted", url);
            }
        }
        Err(err) => log!("[API] {} answered {}: {}", url, status, err),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_success() {
        let resp = decode_response(200, r#"{"success":true}"#).unwrap();
        assert!(resp.success);
    }

    #[test]
    fn test_decode_success_with_unexpected_review_shape() {
        let resp = decode_response(200, r#"{"success":true,"review":{"id":7,"rating":4}}"#).unwrap();
        assert!(resp.success);
        assert!(resp.review.is_none());
    }

    #[test]
    fn test_decode_rejection_with_error_status() {
        let err = decode_response(400, r#"{"success":false,"error":"Rating must be between 1 and 5"}"#)
            .unwrap_err();
        assert_eq!(
            err.user_message("Failed to submit review"),
            "Rating must be between 1 and 5"
        );
    }

    #[test]
    fn test_decode_html_error_page() {
        let err = decode_response(403, "<html><body>CSRF verification failed</body></html>")
            .unwrap_err();
        assert!(matches!(err, ReviewError::Decode(_)));
        assert_eq!(
            err.user_message("Failed to submit review"),
            "An error occurred. Please try again."
        );
    }
}
