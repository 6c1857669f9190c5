use std::collections::HashMap;

use gloo_timers::callback::Timeout;
use leptos::logging::log;
use leptos::*;

use crate::models::toast::ToastBoard;
use crate::utils::dom;
use crate::utils::leptos_owner::with_owner_safe;

/// Shows and hides toasts by element id, auto-hiding after a fixed delay.
///
/// One pending hide timer is kept per id. Dropping a [`Timeout`] cancels it,
/// so replacing the map entry is enough to stop an earlier timer from hiding
/// a newer message.
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    board: RwSignal<ToastBoard>,
    timers: StoredValue<HashMap<String, Timeout>>,
    duration_ms: u32,
}

impl ToastNotifier {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            board: create_rw_signal(ToastBoard::default()),
            timers: store_value(HashMap::new()),
            duration_ms,
        }
    }

    pub fn register(&self, id: &str) {
        self.board.update_untracked(|board| board.register(id));
    }

    pub fn unregister(&self, id: &str) {
        self.timers.try_update_value(|timers| timers.remove(id));
        self.board.try_update(|board| board.unregister(id));
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.board.with(|board| board.is_visible(id))
    }

    pub fn message(&self, id: &str) -> String {
        self.board
            .with(|board| board.get(id).map(|entry| entry.message.clone()))
            .unwrap_or_default()
    }

    /// Displays `message` on toast `id`.
    ///
    /// Toasts rendered by [`crate::components::toast::Toast`] are updated
    /// reactively. Any other element with that id is treated as page markup
    /// and updated directly. Unknown ids are a no-op.
    pub fn show(&self, id: &str, message: &str) {
        let key = id.to_string();
        let timeout = match self.board.try_update(|board| board.show(id, message)).flatten() {
            Some(generation) => {
                let board = self.board;
                let owner = Owner::current();
                Timeout::new(self.duration_ms, move || {
                    with_owner_safe(owner, "toast auto-hide", move || {
                        board.try_update(|board| board.expire(&key, generation));
                    });
                })
            }
            None if dom::show_page_toast(id, message) => {
                Timeout::new(self.duration_ms, move || dom::hide_page_toast(&key))
            }
            None => {
                log!("[TOAST] No toast found for {}", id);
                return;
            }
        };

        // replacing the entry drops, and so cancels, the previous timer
        self.timers.update_value(|timers| {
            timers.insert(id.to_string(), timeout);
        });
    }

    /// Hides toast `id`. Safe on unknown or already hidden ids.
    pub fn hide(&self, id: &str) {
        self.timers.try_update_value(|timers| timers.remove(id));
        if self.is_registered(id) {
            self.board.try_update(|board| board.hide(id));
        } else {
            dom::hide_page_toast(id);
        }
    }

    fn is_registered(&self, id: &str) -> bool {
        self.board
            .try_with_untracked(|board| board.get(id).is_some())
            .unwrap_or(false)
    }
}
