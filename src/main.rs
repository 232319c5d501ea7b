#![allow(warnings)]
//! Meal Planner Frontend Entry Point

mod models;
mod context;
mod storage;
mod download;
mod navigation;
mod logging;
mod components;
mod app;
mod markdown;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init();
    mount_to_body(App);
}
