//! WebAssembly entry point of the site.
//!
//! Hydrates the server-rendered page so the navigation bar becomes
//! interactive, and routes `log` output to the browser console.

#[wasm_bindgen::prelude::wasm_bindgen]
/// Hydrates the page on the client.
///
/// Installs `console_log` and `console_error_panic_hook` first so anything
/// the navbar effects report ends up in the devtools console.
pub fn hydrate() {
    use app::component;
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();
    log::debug!("hydrating navbar site");

    leptos::mount::hydrate_body(component);
}
