use leptos::logging::warn;
use wasm_bindgen::JsCast;
use web_sys::{HtmlDocument, HtmlInputElement};

/// Finds `name` in a `document.cookie` style string.
pub fn token_from_cookies(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

/// Reads the anti-forgery token: the hidden form input first, then the cookie.
///
/// Returns an empty string when neither exists, so the request still goes out
/// and the server reports the failure.
pub fn read_token(input_name: &str, cookie_name: &str) -> String {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return String::new();
    };

    let selector = format!("input[name=\"{}\"]", input_name);
    let from_input = document
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value())
        .filter(|value| !value.is_empty());
    if let Some(token) = from_input {
        return token;
    }

    let from_cookie = document
        .dyn_into::<HtmlDocument>()
        .ok()
        .and_then(|doc| doc.cookie().ok())
        .and_then(|cookies| token_from_cookies(&cookies, cookie_name));

    from_cookie.unwrap_or_else(|| {
        warn!("[CSRF] No anti-forgery token found in the page");
        String::new()
    })
}
