mod app;
mod components;
mod config;
mod core;
mod models;
mod utils;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));

    let Some(root) = document().get_element_by_id("app") else {
        log::error!("missing #app mount point");
        return;
    };

    mount_to(root.unchecked_into::<web_sys::HtmlElement>(), App).forget();
}
