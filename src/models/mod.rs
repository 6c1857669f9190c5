//! Plain data models. Nothing in here touches the DOM or the reactive runtime.

pub mod menu;
pub mod review;
pub mod session;
pub mod toast;
