mod app;
mod boot;
mod components;
mod config;
mod error;
mod models;
mod sync;
mod utils;

fn main() {
    console_error_panic_hook::set_once();
    boot::run();
}
