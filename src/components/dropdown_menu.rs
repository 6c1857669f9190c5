use leptos::*;
use crate::state::menu::MenuController;

/// A toggle button with a dropdown panel.
///
/// Menus whose ids share the configured prefix close each other; a click
/// anywhere outside the wrapper closes an open menu.
#[component]
pub fn DropdownMenu(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    children: Children,
) -> impl IntoView {
    let menus = expect_context::<MenuController>();
    let open = create_memo({
        let id = id.clone();
        move |_| menus.is_open(&id)
    });
    {
        let id = id.clone();
        on_cleanup(move || menus.close(&id));
    }
    let toggle_id = id.clone();

    view! {
        <div class="relative inline-block text-left" data-menu-root=id.clone()>
            <button
                type="button"
                class="rounded p-2 hover:bg-gray-100"
                aria-haspopup="true"
                aria-expanded=move || open.get().to_string()
                on:click=move |_| menus.toggle(&toggle_id)
            >
                {label}
            </button>
            <div
                id=id
                class="absolute right-0 z-10 mt-2 w-40 rounded-md bg-white shadow-lg"
                class:hidden=move || !open.get()
            >
                {children()}
            </div>
        </div>
    }
}
