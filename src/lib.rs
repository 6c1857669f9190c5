//! # spotrunner-reviews
//!
//! Leptos + WASM front-end for rating and reviewing running events: the
//! create/edit review modal, review deletion, toast notifications and
//! dropdown menus.
//!
//! Pure models live in [`models`], reactive controllers in [`state`], and
//! the Leptos views in [`components`]. The review endpoints themselves are
//! served by the main web application.

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod models;
pub mod state;
pub mod utils;

/// Hydrates the shell rendered by the SSR host.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    utils::panic_hook::init();
    leptos::mount_to_body(app::App);
}

/// Mounts the review shell into a server-rendered page.
///
/// The shell goes into `#review-app` when present, otherwise into `<body>`.
/// Settings are read from `data-*` attributes on that element.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn mount_review_modal() {
    use leptos::{provide_context, view};
    use wasm_bindgen::JsCast;
    use crate::app::App;

    utils::panic_hook::init();

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        leptos::logging::error!("[MOUNT] No document available");
        return;
    };
    let target = document
        .get_element_by_id("review-app")
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        .or_else(|| document.body());
    let Some(target) = target else {
        leptos::logging::error!("[MOUNT] No mount point found");
        return;
    };

    let config = config::ReviewConfig::from_attributes(|name| target.get_attribute(name));
    leptos::mount_to(target, move || {
        provide_context(config);
        view! { <App/> }
    });
}
