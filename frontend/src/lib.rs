use log::info;

mod components;
pub mod config;
pub mod crud;
pub mod models;
mod pages;
mod router;
mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let cfg = config::init();
    let _ = console_log::init_with_level(cfg.log_level());
    info!("Starting Estoka frontend (wasm)");
    router::mount_app();
}
