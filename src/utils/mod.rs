pub mod bindings;
pub mod csrf;
pub mod dom;
pub mod leptos_owner;
pub mod panic_hook;
