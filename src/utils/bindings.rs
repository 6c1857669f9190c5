//! Hooks the review controller onto trigger buttons rendered by the host page.
//!
//! The server templates render `.rate-event-btn`, `.edit-review-btn` and
//! `.delete-review-btn` elements carrying `data-*` attributes; this module
//! reads those attributes at click time and drives the controller.

use leptos::logging::{error, log, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::error::ReviewError;
use crate::state::modal::ReviewModalController;
use crate::utils::csrf;

pub const RATE_SELECTOR: &str = ".rate-event-btn";
pub const EDIT_SELECTOR: &str = ".edit-review-btn";
pub const DELETE_SELECTOR: &str = ".delete-review-btn";

/// What a trigger click asks for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TriggerAction {
    Rate {
        event_id: String,
        event_name: String,
    },
    Edit {
        review_id: String,
        event_id: String,
        event_name: String,
        rating: String,
        review_text: String,
    },
    Delete {
        review_id: String,
    },
}

fn required(
    get: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<String, ReviewError> {
    get(name)
        .filter(|v| !v.is_empty())
        .ok_or(ReviewError::MissingAttribute(name))
}

impl TriggerAction {
    /// Reads a `.rate-event-btn`. The event name is optional.
    pub fn rate(get: impl Fn(&str) -> Option<String>) -> Result<Self, ReviewError> {
        Ok(TriggerAction::Rate {
            event_id: required(&get, "data-event-id")?,
            event_name: get("data-event-name").unwrap_or_default(),
        })
    }

    /// Reads a `.edit-review-btn`. Review and event ids are required.
    pub fn edit(get: impl Fn(&str) -> Option<String>) -> Result<Self, ReviewError> {
        Ok(TriggerAction::Edit {
            review_id: required(&get, "data-review-id")?,
            event_id: required(&get, "data-event-id")?,
            event_name: get("data-event-name").unwrap_or_default(),
            rating: get("data-rating").unwrap_or_default(),
            review_text: get("data-review-text").unwrap_or_default(),
        })
    }

    pub fn delete(get: impl Fn(&str) -> Option<String>) -> Result<Self, ReviewError> {
        Ok(TriggerAction::Delete {
            review_id: required(&get, "data-review-id")?,
        })
    }

    /// Applies the action to the controller.
    pub fn apply(self, controller: ReviewModalController) {
        match self {
            TriggerAction::Rate { event_id, event_name } => {
                controller.open_create(&event_id, &event_name);
            }
            TriggerAction::Edit {
                review_id,
                event_id,
                event_name,
                rating,
                review_text,
            } => {
                controller.open_edit(&review_id, &event_id, &event_name, &rating, &review_text);
            }
            TriggerAction::Delete { review_id } => {
                let config = controller.config();
                let token = csrf::read_token(&config.csrf_input_name, &config.csrf_cookie_name);
                if let Err(err) = controller.delete_review(&review_id, token) {
                    log!("[BIND] Delete of {} not sent: {}", review_id, err);
                }
            }
        }
    }
}

type Parser = fn(&Element) -> Result<TriggerAction, ReviewError>;

fn parse_rate(el: &Element) -> Result<TriggerAction, ReviewError> {
    TriggerAction::rate(|name| el.get_attribute(name))
}

fn parse_edit(el: &Element) -> Result<TriggerAction, ReviewError> {
    TriggerAction::edit(|name| el.get_attribute(name))
}

fn parse_delete(el: &Element) -> Result<TriggerAction, ReviewError> {
    TriggerAction::delete(|name| el.get_attribute(name))
}

/// Attaches click listeners to every trigger currently in the document.
/// Returns how many elements were bound.
pub fn bind_page_triggers(controller: ReviewModalController) -> usize {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        error!("[BIND] No document available");
        return 0;
    };

    let groups: [(&str, Parser); 3] = [
        (RATE_SELECTOR, parse_rate),
        (EDIT_SELECTOR, parse_edit),
        (DELETE_SELECTOR, parse_delete),
    ];

    let mut bound = 0;
    for (selector, parse) in groups {
        let Ok(nodes) = document.query_selector_all(selector) else {
            continue;
        };
        for index in 0..nodes.length() {
            let Some(element) = nodes.item(index).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            if bind_element(&element, parse, controller) {
                bound += 1;
            }
        }
    }

    if bound == 0 {
        warn!("[BIND] No review triggers found in the page");
    } else {
        log!("[BIND] Bound {} review triggers", bound);
    }
    bound
}

fn bind_element(element: &Element, parse: Parser, controller: ReviewModalController) -> bool {
    let target = element.clone();
    let handler = Closure::wrap(Box::new(move |event: web_sys::Event| {
        event.prevent_default();
        match parse(&target) {
            Ok(action) => action.apply(controller),
            Err(err) => warn!("[BIND] Ignoring click: {}", err),
        }
    }) as Box<dyn FnMut(web_sys::Event)>);

    let added = element
        .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
        .is_ok();
    // the listener lives as long as the page
    handler.forget();
    added
}
