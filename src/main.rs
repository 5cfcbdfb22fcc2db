//! Retro Todo Frontend Entry Point

mod actions;
mod app;
mod components;
mod context;
mod state;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_tracing::set_as_global_default();

    tracing::info!("starting retro todo frontend");

    mount_to_body(App);
}
