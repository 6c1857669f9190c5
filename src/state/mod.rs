//! Reactive controllers shared through Leptos context.
//!
//! Each controller is a `Copy` bundle of signals wrapping one of the plain
//! models in [`crate::models`], so the models stay testable without a browser.

pub mod menu;
pub mod modal;
pub mod toast;

use leptos::*;

use crate::config::ReviewConfig;
use menu::MenuController;
use modal::ReviewModalController;
use toast::ToastNotifier;

/// Creates the toast notifier, the menu controller and the modal controller
/// and provides all three as context. `reload` runs after a successful
/// request; pages pass [`crate::utils::dom::reload_page`].
pub fn provide_review_context(
    config: ReviewConfig,
    reload: impl Fn() + 'static,
) -> ReviewModalController {
    let toasts = ToastNotifier::new(config.toast_duration_ms);
    let menus = MenuController::new(config.menu_prefix.clone());
    let controller = ReviewModalController::new(config, toasts, reload);

    provide_context(toasts);
    provide_context(menus);
    provide_context(controller);
    controller
}
