mod app;
mod components;
mod hooks;
mod models;
mod router;
mod services;
mod state;
mod utils;
mod views;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🚀 PhotoRide arrancando...");

    yew::Renderer::<App>::new().render();
}
