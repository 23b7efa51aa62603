#![recursion_limit = "256"]

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
pub mod blog;
pub mod featured;
#[cfg(feature = "ssr")]
mod highlight;
pub mod icon;
pub mod nav;
pub mod profile;
pub mod projects;
#[cfg(feature = "rss")]
pub mod rss;
#[cfg(feature = "ssr")]
pub mod server;
pub mod site;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    // only fails if a logger is already installed
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
