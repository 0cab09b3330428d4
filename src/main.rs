mod aggregate;
mod api;
mod app;
mod autosave;
mod board;
mod components;
mod config;
mod context;
mod models;
mod store;
mod validate;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
