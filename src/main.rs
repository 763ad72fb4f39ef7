//! Project Planner Frontend Entry Point

mod api;
mod app;
mod components;
mod context;
mod data;
mod draft;
mod error;
mod helpers;
mod models;
mod sync;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).expect("error initializing logger");
    mount_to_body(App);
}
