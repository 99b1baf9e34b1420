use leptos::*;
use leptos_meta::*;
use web_sys::console;

mod components;
pub mod config;
pub mod data;
mod pages;
mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

use components::theme::ThemeProvider;
use pages::home::HomePage;

/// Entry point shared by the wasm bin and tests that mount the full app.
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    console::log_1(&"Starting portfolio frontend (wasm)".into());

    // Kick off the runtime config load (non-blocking); the UI renders with
    // compiled-in defaults until it lands.
    spawn_local(async move {
        config::init().await;
        log::info!("runtime config initialized");
    });

    mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Ashan Mir — Front-End Developer"/>
        <ThemeProvider>
            <HomePage/>
        </ThemeProvider>
    }
}
