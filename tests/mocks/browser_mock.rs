use wasm_bindgen::prelude::*;

/// Mocks for the browser APIs the review flow talks to: `fetch` and
/// `window.confirm`. Every fetch is recorded on `window.__fetchCalls` so tests
/// can inspect URL, headers and body after the fact.

#[wasm_bindgen(inline_js = r#"
export function install_fetch_mock(status, body) {
    window.__fetchCalls = [];
    window.fetch = async function(input, init) {
        const req = (input instanceof Request) ? input : new Request(input, init);
        const text = await req.clone().text();
        const headers = {};
        req.headers.forEach((value, key) => { headers[key.toLowerCase()] = value; });
        window.__fetchCalls.push({
            url: new URL(req.url, window.location.href).pathname,
            method: req.method,
            body: text,
            headers: headers,
        });
        console.log("[MOCK FETCH]", req.method, req.url, text);
        return new Response(body, {
            status: status,
            headers: { "Content-Type": "application/json" },
        });
    };
}

export function install_failing_fetch() {
    window.__fetchCalls = [];
    window.fetch = async function(input, init) {
        const req = (input instanceof Request) ? input : new Request(input, init);
        window.__fetchCalls.push({
            url: new URL(req.url, window.location.href).pathname,
            method: req.method,
            body: "",
            headers: {},
        });
        throw new TypeError("Failed to fetch");
    };
}

export function fetch_call_count() {
    return (window.__fetchCalls || []).length;
}

function last() {
    const calls = window.__fetchCalls || [];
    return calls[calls.length - 1];
}

export function last_fetch_url() {
    const call = last();
    return call ? call.url : "";
}

export function last_fetch_method() {
    const call = last();
    return call ? call.method : "";
}

export function last_fetch_body() {
    const call = last();
    return call ? call.body : "";
}

export function last_fetch_header(name) {
    const call = last();
    return (call && call.headers[name.toLowerCase()]) || "";
}

export function install_confirm_mock(answer) {
    window.__confirmMessages = [];
    window.confirm = function(message) {
        window.__confirmMessages.push(message);
        return answer;
    };
}

export function last_confirm_message() {
    const messages = window.__confirmMessages || [];
    return messages.length ? messages[messages.length - 1] : "";
}
"#)]
extern "C" {
    /// Every fetch answers `status` with `body`.
    pub fn install_fetch_mock(status: u16, body: &str);
    /// Every fetch rejects like a dropped connection.
    pub fn install_failing_fetch();
    pub fn fetch_call_count() -> u32;
    pub fn last_fetch_url() -> String;
    pub fn last_fetch_method() -> String;
    pub fn last_fetch_body() -> String;
    pub fn last_fetch_header(name: &str) -> String;
    pub fn install_confirm_mock(answer: bool);
    pub fn last_confirm_message() -> String;
}
