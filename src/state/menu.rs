use std::collections::HashMap;

use leptos::leptos_dom::helpers::WindowListenerHandle;
use leptos::logging::log;
use leptos::*;
use wasm_bindgen::JsCast;

use crate::models::menu::MenuSet;

/// Dropdown menus sharing an id prefix, with one-shot outside-click closing.
#[derive(Clone, Copy)]
pub struct MenuController {
    menus: RwSignal<MenuSet>,
    listeners: StoredValue<HashMap<String, WindowListenerHandle>>,
    prefix: StoredValue<String>,
}

impl MenuController {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            menus: create_rw_signal(MenuSet::default()),
            listeners: store_value(HashMap::new()),
            prefix: store_value(prefix.into()),
        }
    }

    pub fn prefix(&self) -> String {
        self.prefix.get_value()
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.menus.with(|menus| menus.is_open(id))
    }

    /// Closes the other menus of the group, then flips `id`.
    pub fn toggle(&self, id: &str) {
        let prefix = self.prefix.get_value();
        let now_open = self
            .menus
            .try_update(|menus| menus.toggle(id, &prefix))
            .unwrap_or(false);
        self.drop_stale_listeners();

        if now_open {
            log!("[MENU] Opened {}", id);
            self.listen_for_outside_click(id);
        }
    }

    /// Closes `id` and removes its outside-click listener.
    pub fn close(&self, id: &str) {
        self.menus.try_update(|menus| menus.close(id));
        if let Some(handle) = self.listeners.try_update_value(|l| l.remove(id)).flatten() {
            handle.remove();
        }
    }

    fn drop_stale_listeners(&self) {
        let open: Vec<String> = self
            .menus
            .with_untracked(|menus| menus.open_ids().map(str::to_string).collect());
        let stale: Vec<WindowListenerHandle> = self
            .listeners
            .try_update_value(|listeners| {
                let ids: Vec<String> = listeners
                    .keys()
                    .filter(|id| !open.contains(id))
                    .cloned()
                    .collect();
                ids.iter().filter_map(|id| listeners.remove(id)).collect()
            })
            .unwrap_or_default();
        for handle in stale {
            handle.remove();
        }
    }

    fn listen_for_outside_click(&self, id: &str) {
        let this = *self;
        let key = id.to_string();
        let handle = window_event_listener(ev::click, move |ev| {
            if click_is_inside(&ev, &key) {
                return;
            }
            log!("[MENU] Outside click closes {}", key);
            this.close(&key);
        });

        self.listeners.update_value(|listeners| {
            if let Some(previous) = listeners.insert(id.to_string(), handle) {
                previous.remove();
            }
        });
    }
}

/// True when the click landed inside the element tagged `data-menu-root="{id}"`,
/// which wraps both the toggle button and the menu panel.
fn click_is_inside(ev: &web_sys::MouseEvent, id: &str) -> bool {
    let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
        return false;
    };
    let selector = format!("[data-menu-root=\"{}\"]", id);
    matches!(target.closest(&selector), Ok(Some(_)))
}
