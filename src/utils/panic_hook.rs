use std::panic;
use leptos::logging::log;

/// Installs `console_error_panic_hook` and adds a hint for panics caused by
/// callbacks that outlive the review modal.
pub fn set_custom_panic_hook() {
    console_error_panic_hook::set_once();
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        original_hook(panic_info);

        let message = if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else {
            "Unknown panic".to_string()
        };

        if message.contains("OwnerDisposed") || message.contains("disposed") {
            log!("[PANIC] A reactive value was used after its owner was disposed. Likely sources:");
            log!("[PANIC] 1. A toast hide timer firing after the toast was unmounted");
            log!("[PANIC] 2. A review response arriving after the modal was unmounted");
            log!("[PANIC] 3. A page trigger clicked after the app was torn down");
        }
    }));
}

/// Call once from the WASM entry point.
pub fn init() {
    log!("[PANIC_HOOK] Setting up custom panic hook");
    set_custom_panic_hook();
}
