use leptos::logging::log;
use leptos::*;
use crate::state::modal::ReviewModalController;
use crate::utils::csrf;

// These render with `review-trigger` rather than the `.rate-event-btn` family
// so `bind_page_triggers` never attaches a second handler to them.

#[component]
pub fn RateEventButton(
    #[prop(into)] event_id: String,
    #[prop(into)] event_name: String,
) -> impl IntoView {
    let controller = expect_context::<ReviewModalController>();
    let (id, name) = (event_id.clone(), event_name.clone());

    view! {
        <button
            type="button"
            class="review-trigger rounded bg-blue-600 px-3 py-1 text-sm text-white"
            data-event-id=event_id
            data-event-name=event_name
            on:click=move |ev| {
                ev.prevent_default();
                controller.open_create(&id, &name);
            }
        >
            { "Rate & Review" }
        </button>
    }
}

#[component]
pub fn EditReviewButton(
    #[prop(into)] review_id: String,
    #[prop(into)] event_id: String,
    #[prop(into)] event_name: String,
    rating: u8,
    #[prop(into)] review_text: String,
) -> impl IntoView {
    let controller = expect_context::<ReviewModalController>();
    let rating = rating.to_string();

    view! {
        <button
            type="button"
            class="review-trigger block w-full px-4 py-2 text-left text-sm hover:bg-gray-100"
            on:click=move |ev| {
                ev.prevent_default();
                controller.open_edit(&review_id, &event_id, &event_name, &rating, &review_text);
            }
        >
            { "Edit" }
        </button>
    }
}

#[component]
pub fn DeleteReviewButton(#[prop(into)] review_id: String) -> impl IntoView {
    let controller = expect_context::<ReviewModalController>();

    view! {
        <button
            type="button"
            class="review-trigger block w-full px-4 py-2 text-left text-sm text-red-600 hover:bg-gray-100"
            on:click=move |ev| {
                ev.prevent_default();
                let config = controller.config();
                let token = csrf::read_token(&config.csrf_input_name, &config.csrf_cookie_name);
                if let Err(err) = controller.delete_review(&review_id, token) {
                    log!("[TRIGGER] Delete of {} not sent: {}", review_id, err);
                }
            }
        >
            { "Delete" }
        </button>
    }
}
