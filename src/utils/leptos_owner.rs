/// Runs `f` under `owner` if it is still alive.
///
/// Timer callbacks (toast auto-hide, post-submit reload) can fire after the
/// component that scheduled them is gone; in that case this logs and returns None.
pub fn with_owner_safe<F, R>(owner: Option<leptos::Owner>, log_context: &str, f: F) -> Option<R>
where
    F: FnOnce() -> R,
{
    let Some(owner) = owner else {
        leptos::logging::log!("[OWNER] No Leptos owner captured for {}", log_context);
        return None;
    };
    match leptos::try_with_owner(owner, f) {
        Ok(value) => Some(value),
        Err(_) => {
            leptos::logging::log!("[OWNER] Owner disposed before {} ran", log_context);
            None
        }
    }
}
