use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use leptos::logging::{log, warn};
use leptos::*;
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::config::ReviewConfig;
use crate::error::ReviewError;
use crate::models::review::{ReviewEndpoint, ReviewRequest, ReviewResponse};
use crate::models::session::{ModalSession, SubmissionPhase};
use crate::state::toast::ToastNotifier;
use crate::utils::dom;

const SUBMIT_FAILURE: &str = "Failed to submit review";

pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this review?";

/// Owner of the one review modal on the page.
///
/// All fields are reactive handles, so the controller is `Copy` and can be
/// moved into every event handler. It is provided through context by
/// [`crate::state::provide_review_context`].
#[derive(Clone, Copy)]
pub struct ReviewModalController {
    session: RwSignal<ModalSession>,
    open: RwSignal<bool>,
    error: RwSignal<Option<String>>,
    phase: RwSignal<SubmissionPhase>,
    // bumped on every open and close; responses for an older value are stale
    generation: StoredValue<u64>,
    config: StoredValue<ReviewConfig>,
    toasts: ToastNotifier,
    reload: StoredValue<Rc<dyn Fn()>>,
}

impl ReviewModalController {
    pub fn new(config: ReviewConfig, toasts: ToastNotifier, reload: impl Fn() + 'static) -> Self {
        Self {
            session: create_rw_signal(ModalSession::default()),
            open: create_rw_signal(false),
            error: create_rw_signal(None),
            phase: create_rw_signal(SubmissionPhase::Idle),
            generation: store_value(0),
            config: store_value(config),
            toasts,
            reload: store_value(Rc::new(reload) as Rc<dyn Fn()>),
        }
    }

    pub fn config(&self) -> ReviewConfig {
        self.config.get_value()
    }

    pub fn toasts(&self) -> ToastNotifier {
        self.toasts
    }

    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    pub fn is_busy(&self) -> bool {
        self.phase.get().is_busy()
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase.get()
    }

    pub fn error(&self) -> Option<String> {
        self.error.get()
    }

    pub fn session(&self) -> ModalSession {
        self.session.get()
    }

    pub fn with_session<R>(&self, f: impl FnOnce(&ModalSession) -> R) -> R {
        self.session.with(f)
    }

    pub fn set_rating(&self, rating: String) {
        self.session.update(|s| s.rating = rating);
    }

    pub fn set_review_text(&self, text: String) {
        self.session.update(|s| s.review_text = text);
    }

    pub fn open_create(&self, event_id: &str, event_name: &str) {
        log!("[MODAL] Opening create for event {} ({})", event_id, event_name);
        self.begin_session(ModalSession::create(event_id, event_name));
    }

    pub fn open_edit(
        &self,
        review_id: &str,
        event_id: &str,
        event_name: &str,
        rating: &str,
        review_text: &str,
    ) {
        if review_id.trim().is_empty() {
            warn!("[MODAL] Refusing to edit event {} without a review id", event_id);
            return;
        }
        log!("[MODAL] Opening edit for review {} of event {}", review_id, event_id);
        self.begin_session(ModalSession::edit(
            review_id,
            event_id,
            event_name,
            rating,
            review_text,
        ));
    }

    /// Hides the modal, clears the inline error and resets every field.
    /// Calling it on a closed modal changes nothing visible.
    pub fn close(&self) {
        self.bump_generation();
        self.open.set(false);
        self.error.set(None);
        self.session.set(ModalSession::default());
        self.settle_failed_phase();
    }

    fn begin_session(&self, session: ModalSession) {
        self.bump_generation();
        self.error.set(None);
        self.session.set(session);
        self.settle_failed_phase();
        self.open.set(true);
    }

    fn bump_generation(&self) {
        self.generation.update_value(|g| *g += 1);
    }

    fn settle_failed_phase(&self) {
        if self.phase.get_untracked() == SubmissionPhase::Failed {
            self.phase.set(SubmissionPhase::Idle);
        }
    }

    /// Validates the form and, if valid, sends it.
    ///
    /// Returns the validation outcome synchronously; the network result is
    /// applied to the modal when it arrives.
    pub fn submit(&self, csrf_token: String) -> Result<(), ReviewError> {
        self.error.set(None);

        let request = match self.session.with_untracked(ModalSession::to_request) {
            Ok(request) => request,
            Err(err) => {
                log!("[MODAL] Validation failed: {}", err);
                self.error.set(Some(err.user_message(SUBMIT_FAILURE)));
                return Err(err);
            }
        };

        self.begin_request()?;

        let this = *self;
        let generation = self.generation.get_value();
        spawn_local(async move {
            let config = this.config.get_value();
            let result = api::send_review(&request, &config, &csrf_token).await;
            this.finish_submission(generation, &request.endpoint, result);
        });
        Ok(())
    }

    /// Asks for confirmation, then deletes `review_id`.
    ///
    /// Outcomes are reported through toasts, since delete is triggered from
    /// outside the modal.
    pub fn delete_review(&self, review_id: &str, csrf_token: String) -> Result<(), ReviewError> {
        if !dom::confirm(DELETE_CONFIRMATION) {
            log!("[MODAL] Delete of review {} cancelled", review_id);
            return Ok(());
        }

        self.begin_request()?;

        let this = *self;
        let request = ReviewRequest::delete(review_id);
        spawn_local(async move {
            let config = this.config.get_value();
            match api::send_review(&request, &config, &csrf_token).await {
                Ok(_) => {
                    this.phase.update(|phase| phase.finish(true));
                    this.toasts
                        .show(&config.success_toast_id, request.endpoint.success_message());
                    this.schedule_reload();
                }
                Err(err) => {
                    this.phase.update(|phase| phase.finish(false));
                    let message = err.user_message(request.endpoint.failure_fallback());
                    this.toasts.show(&config.error_toast_id, &message);
                }
            }
        });
        Ok(())
    }

    fn begin_request(&self) -> Result<(), ReviewError> {
        let begun = self
            .phase
            .try_update(SubmissionPhase::begin)
            .unwrap_or(Err(ReviewError::AlreadyInFlight));
        if let Err(err) = &begun {
            warn!("[MODAL] Ignoring request: {}", err);
        }
        begun
    }

    fn finish_submission(
        &self,
        generation: u64,
        endpoint: &ReviewEndpoint,
        result: Result<ReviewResponse, ReviewError>,
    ) {
        let config = self.config.get_value();
        let current = self.generation.get_value() == generation;

        match result {
            Ok(_) => {
                self.phase.update(|phase| phase.finish(true));
                self.toasts.show(&config.success_toast_id, endpoint.success_message());
                if current {
                    self.close();
                }
                self.schedule_reload();
            }
            Err(err) => {
                self.phase.update(|phase| phase.finish(false));
                let message = err.user_message(endpoint.failure_fallback());
                if current {
                    self.error.set(Some(message));
                } else {
                    log!("[MODAL] Dropping error for a closed session: {}", message);
                }
            }
        }
    }

    fn schedule_reload(&self) {
        let delay = self.config.get_value().reload_delay_ms;
        let reload = self.reload;
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            match reload.try_get_value() {
                Some(reload) => reload(),
                None => log!("[MODAL] Reload skipped, controller already disposed"),
            }
        });
    }
}
