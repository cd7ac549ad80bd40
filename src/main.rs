mod app;
mod components;
mod config;
mod models;
mod utils;

use app::App;
use config::{APP_NAME, APP_VERSION, MOUNT_ELEMENT_ID};
use leptos::logging::log;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();
    log!("{} v{}", APP_NAME, APP_VERSION);

    let root = document()
        .get_element_by_id(MOUNT_ELEMENT_ID)
        .expect("Failed to find #app element")
        .unchecked_into::<web_sys::HtmlElement>();

    mount_to(root, App).forget();
}
