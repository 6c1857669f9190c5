/// Client-side settings for the review modal and toasts.
///
/// Defaults match the behaviour of the event pages. A host page can override
/// any of them with `data-*` attributes on the mount element, see
/// [`ReviewConfig::from_attributes`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewConfig {
    /// Prefix prepended to every review endpoint path.
    pub base_path: String,
    /// Header carrying the anti-forgery token.
    pub csrf_header: String,
    /// Name of the hidden form input holding the token.
    pub csrf_input_name: String,
    /// Cookie consulted when the hidden input is missing.
    pub csrf_cookie_name: String,
    /// Delay between a successful request and the page reload.
    pub reload_delay_ms: u32,
    /// How long a toast stays visible.
    pub toast_duration_ms: u32,
    pub success_toast_id: String,
    pub error_toast_id: String,
    /// Menus sharing this id prefix close each other.
    pub menu_prefix: String,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            base_path: String::new(),
            csrf_header: "X-CSRFToken".to_string(),
            csrf_input_name: "csrfmiddlewaretoken".to_string(),
            csrf_cookie_name: "csrftoken".to_string(),
            reload_delay_ms: 500,
            toast_duration_ms: 3000,
            success_toast_id: "toast-success".to_string(),
            error_toast_id: "toast-error".to_string(),
            menu_prefix: "menu-".to_string(),
        }
    }
}

impl ReviewConfig {
    /// Builds a config from attribute lookups, keeping defaults for anything
    /// missing or unparsable.
    ///
    /// Recognised attributes: `data-base-path`, `data-csrf-header`,
    /// `data-reload-delay-ms`, `data-toast-duration-ms`,
    /// `data-success-toast-id`, `data-error-toast-id`, `data-menu-prefix`.
    pub fn from_attributes(get: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(base) = get("data-base-path") {
            config.base_path = base.trim_end_matches('/').to_string();
        }
        if let Some(header) = get("data-csrf-header").filter(|h| !h.is_empty()) {
            config.csrf_header = header;
        }
        if let Some(delay) = get("data-reload-delay-ms").and_then(|v| v.trim().parse().ok()) {
            config.reload_delay_ms = delay;
        }
        if let Some(duration) = get("data-toast-duration-ms").and_then(|v| v.trim().parse().ok()) {
            config.toast_duration_ms = duration;
        }
        if let Some(id) = get("data-success-toast-id").filter(|v| !v.is_empty()) {
            config.success_toast_id = id;
        }
        if let Some(id) = get("data-error-toast-id").filter(|v| !v.is_empty()) {
            config.error_toast_id = id;
        }
        if let Some(prefix) = get("data-menu-prefix").filter(|v| !v.is_empty()) {
            config.menu_prefix = prefix;
        }

        config
    }
}
