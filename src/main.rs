//! Submissions Dashboard Entry Point

mod app;
mod bindings;
mod components;
mod config;
mod context;
mod provider;
mod store;

use app::App;
use leptos::prelude::*;
use log::{info, warn};
use rolling_logger::{Level, LoggerConfig, RingBuffer};
use wasm_bindgen::JsValue;

/// Forward formatted lines to the browser console at a matching level
fn console_sink(level: Level, line: &str) {
    let line = JsValue::from_str(line);
    match level {
        Level::ERROR => web_sys::console::error_1(&line),
        Level::WARN => web_sys::console::warn_1(&line),
        Level::INFO => web_sys::console::info_1(&line),
        _ => web_sys::console::debug_1(&line),
    }
}

fn main() {
    console_error_panic_hook::set_once();

    let (config, problem) = config::load();
    let logger = LoggerConfig {
        capacity: config.log_capacity,
        level: config.log_level_filter(),
    };
    let logs = match rolling_logger::init(logger, Some(Box::new(console_sink))) {
        Ok(logs) => logs,
        Err(err) => {
            web_sys::console::error_1(&format!("Logger not installed: {}", err).into());
            RingBuffer::new(0, None)
        }
    };
    if let Some(problem) = problem {
        warn!("{}", problem);
    }
    info!("Starting dashboard ({:?} view)", config.default_view);

    mount_to_body(move || view! { <App config=config logs=logs /> });
}
