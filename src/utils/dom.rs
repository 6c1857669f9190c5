//! Thin wrappers over browser APIs the review flow needs.
//! Failures are logged and swallowed; none of them should break the page.

use leptos::logging::error;

/// Asks the user to confirm. Anything other than an explicit "OK" is a no.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Reloads the current page.
pub fn reload_page() {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(err) = window.location().reload() {
        error!("[DOM] Page reload failed: {:?}", err);
    }
}

fn page_toast(id: &str) -> Option<web_sys::Element> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
}

/// Shows a toast container the host page rendered itself: `message` goes
/// into its `div.ms-3` and `hidden` gives way to `flex`.
/// Returns false when the page has no element with that id.
pub fn show_page_toast(id: &str, message: &str) -> bool {
    let Some(toast) = page_toast(id) else {
        return false;
    };
    match toast.query_selector("div.ms-3") {
        Ok(Some(slot)) => slot.set_text_content(Some(message)),
        _ => toast.set_text_content(Some(message)),
    }
    let classes = toast.class_list();
    if let Err(err) = classes.remove_1("hidden").and_then(|_| classes.add_1("flex")) {
        error!("[DOM] Could not show toast {}: {:?}", id, err);
    }
    true
}

/// Hides a page-rendered toast. Unknown ids are ignored.
pub fn hide_page_toast(id: &str) {
    let Some(toast) = page_toast(id) else {
        return;
    };
    let classes = toast.class_list();
    if let Err(err) = classes.remove_1("flex").and_then(|_| classes.add_1("hidden")) {
        error!("[DOM] Could not hide toast {}: {:?}", id, err);
    }
}
