//! Todo App Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod dialog;
mod handlers;
mod logging;
mod models;
mod notification;
mod render;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
