use leptos::*;
use crate::state::toast::ToastNotifier;

/// A notification slot addressable by `id` through [`ToastNotifier`].
///
/// Hidden until shown; the message goes into the inner `div.ms-3`.
#[component]
pub fn Toast(
    #[prop(into)] id: String,
    /// Extra classes, e.g. colours for success or error toasts.
    #[prop(optional, into)]
    class: String,
) -> impl IntoView {
    let toasts = expect_context::<ToastNotifier>();
    toasts.register(&id);
    {
        let id = id.clone();
        on_cleanup(move || toasts.unregister(&id));
    }

    let visible = create_memo({
        let id = id.clone();
        move |_| toasts.is_visible(&id)
    });
    let message = create_memo({
        let id = id.clone();
        move |_| toasts.message(&id)
    });
    let close_id = id.clone();

    view! {
        <div
            id=id
            role="alert"
            class=format!("w-full max-w-xs items-center rounded-lg bg-white p-4 shadow {}", class)
            class:hidden=move || !visible.get()
            class:flex=move || visible.get()
        >
            <div class="ms-3 text-sm font-normal">{move || message.get()}</div>
            <button
                type="button"
                class="ms-auto rounded-lg p-1.5 text-gray-400 hover:text-gray-900"
                aria-label="Close"
                on:click=move |_| toasts.hide(&close_id)
            >
                { "×" }
            </button>
        </div>
    }
}
