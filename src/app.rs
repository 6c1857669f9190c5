/// Application shell for the event review pages.
/// Provides the review controllers and renders the modal plus the toast slots.
use leptos::*;
use leptos_meta::*;
use crate::components::{review_modal::ReviewModal, toast::Toast};
use crate::config::ReviewConfig;
use crate::state::provide_review_context;
use crate::utils::{bindings, dom};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // the embedding entry point provides settings read from the mount element
    let config = use_context::<ReviewConfig>().unwrap_or_default();
    let success_id = config.success_toast_id.clone();
    let error_id = config.error_toast_id.clone();
    let controller = provide_review_context(config, dom::reload_page);

    // Effects only run in the browser, after the shell is mounted. Trigger
    // buttons come from the server-rendered page around it.
    create_effect(move |_| {
        bindings::bind_page_triggers(controller);
    });

    view! {
        <Title text="Event Reviews"/>
        <ReviewModal/>
        <div class="fixed bottom-5 right-5 z-50 flex flex-col gap-2">
            <Toast id=success_id class="text-green-700"/>
            <Toast id=error_id class="text-red-700"/>
        </div>
    }
}
