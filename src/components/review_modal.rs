/// The create/edit review dialog.
///
/// Element ids match the markup the event templates style and test against
/// (`reviewModal`, `reviewForm`, `errorMessage`, ...).
use leptos::logging::log;
use leptos::*;
use leptos::ev::SubmitEvent;

use crate::state::modal::ReviewModalController;
use crate::utils::csrf;

#[component]
pub fn ReviewModal() -> impl IntoView {
    let controller = expect_context::<ReviewModalController>();

    // Only a click on the overlay itself closes; clicks inside the card bubble
    // up with a different target.
    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let direct = match (ev.target(), ev.current_target()) {
            (Some(target), Some(current)) => target == current,
            _ => false,
        };
        if direct {
            log!("[MODAL] Closing (clicked outside)");
            controller.close();
        }
    };

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let config = controller.config();
        let token = csrf::read_token(&config.csrf_input_name, &config.csrf_cookie_name);
        if let Err(err) = controller.submit(token) {
            log!("[MODAL] Submit not sent: {}", err);
        }
    };

    // display style and `hidden` class both follow `open`
    let is_open = move || controller.is_open();

    view! {
        <div
            id="reviewModal"
            class="fixed inset-0 z-50 items-center justify-center bg-black/50"
            class:hidden=move || !is_open()
            style:display=move || if is_open() { "flex" } else { "none" }
            on:click=handle_overlay_click
        >
            <div class="w-full max-w-md rounded-lg bg-white p-6 shadow-lg">
                <h3 id="modalTitle" class="mb-1 text-lg font-semibold">
                    {move || controller.with_session(|s| s.mode.title())}
                </h3>
                <p class="mb-4 text-sm text-gray-500">
                    {move || controller.with_session(|s| s.event_name.clone())}
                </p>
                <form id="reviewForm" on:submit=handle_submit>
                    <input
                        type="hidden"
                        id="modal_mode"
                        name="mode"
                        prop:value=move || controller.with_session(|s| s.mode.as_str())
                    />
                    <input
                        type="hidden"
                        id="modal_review_id"
                        name="review_id"
                        prop:value=move || controller.with_session(|s| s.mode.review_id().unwrap_or_default().to_string())
                    />
                    <input
                        type="hidden"
                        id="modal_event_id"
                        name="event_id"
                        prop:value=move || controller.with_session(|s| s.event_id.clone())
                    />
                    <input
                        type="hidden"
                        id="modal_event_name"
                        name="event_name"
                        prop:value=move || controller.with_session(|s| s.event_name.clone())
                    />

                    <label for="rating" class="block text-sm font-medium">{ "Rating (1-5)" }</label>
                    <input
                        type="number"
                        id="rating"
                        name="rating"
                        min="1"
                        max="5"
                        class="mb-3 w-full rounded border p-2"
                        prop:value=move || controller.with_session(|s| s.rating.clone())
                        on:input=move |e| controller.set_rating(event_target_value(&e))
                    />

                    <label for="review_text" class="block text-sm font-medium">{ "Review" }</label>
                    <textarea
                        id="review_text"
                        name="review_text"
                        rows="4"
                        placeholder="Share your experience"
                        class="mb-3 w-full rounded border p-2"
                        prop:value=move || controller.with_session(|s| s.review_text.clone())
                        on:input=move |e| controller.set_review_text(event_target_value(&e))
                    />

                    <p
                        id="errorMessage"
                        class="mb-3 text-sm text-red-600"
                        class:hidden=move || controller.error().is_none()
                    >
                        {move || controller.error().unwrap_or_default()}
                    </p>

                    <div class="flex justify-end gap-2">
                        <button
                            type="button"
                            id="cancelModal"
                            class="rounded px-4 py-2 text-gray-700"
                            on:click=move |_| controller.close()
                        >
                            { "Cancel" }
                        </button>
                        <button
                            type="submit"
                            id="submitReviewBtn"
                            class="rounded bg-blue-600 px-4 py-2 text-white disabled:opacity-50"
                            prop:disabled=move || controller.is_busy()
                        >
                            {move || controller.with_session(|s| s.mode.submit_label())}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
