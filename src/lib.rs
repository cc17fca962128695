#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;
#[cfg(feature = "hydrate")]
pub mod browser;
pub mod contact;
pub mod content;
pub mod counter;
pub mod debounce;
pub mod dom;
pub mod effects;
pub mod filter;
pub mod nav;
pub mod resume;
pub mod reveal;
pub mod schedule;
pub mod shortcuts;
pub mod skills;
pub mod theme;
pub mod typing;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    // a second init only happens on hot reload
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
